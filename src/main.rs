use std::io;
use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpServer};
use creperia_api::config::Config;
use creperia_api::repository::{MySqlProductoRepository, ProductoRepository};
use creperia_api::routes;
use log::{error, info};
use sqlx::mysql::MySqlPoolOptions;

fn fatal<E: std::fmt::Display>(contexto: &str) -> impl FnOnce(E) -> io::Error + '_ {
    move |e| {
        error!("{contexto}: {e}");
        io::Error::other(format!("{contexto}: {e}"))
    }
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
    info!("Iniciando el servidor...");

    let config = Config::from_env().map_err(fatal("Configuración inválida"))?;

    let pool = MySqlPoolOptions::new()
        .connect(&config.database_url)
        .await
        .map_err(fatal("No se pudo conectar a la base de datos"))?;
    sqlx::migrate!()
        .run(&pool)
        .await
        .map_err(fatal("Fallaron las migraciones"))?;

    let repo: Arc<dyn ProductoRepository> = Arc::new(MySqlProductoRepository::new(pool));
    let repo = web::Data::from(repo);
    let proxies = web::Data::new(config.trusted_proxies.clone());
    let cors_origin = config.cors_origin.clone();

    info!("Servidor escuchando en http://{}", config.bind_addr);
    HttpServer::new(move || {
        App::new()
            .wrap(routes::cors(&cors_origin))
            .wrap(Logger::default())
            .app_data(repo.clone())
            .app_data(proxies.clone())
            .configure(routes::configure)
    })
    .bind(config.bind_addr)
    .map_err(fatal("No se pudo abrir el puerto"))?
    .run()
    .await
}
