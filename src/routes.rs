use actix_cors::Cors;
use actix_web::{http::header, web};

use crate::error::ApiError;
use crate::handlers;

/// Registra `/productos` y los manejadores de error de extracción.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::PathConfig::default()
            .error_handler(|_, _| ApiError::BadRequest("Invalid ID".to_string()).into()),
    )
    .app_data(
        web::JsonConfig::default()
            .content_type_required(false)
            .error_handler(|err, _| ApiError::BadRequest(err.to_string()).into()),
    )
    .service(
        web::resource("/productos")
            .route(web::get().to(handlers::listar_productos))
            .route(web::post().to(handlers::crear_producto)),
    )
    .service(
        web::resource("/productos/{id}")
            .route(web::get().to(handlers::obtener_producto))
            .route(web::put().to(handlers::actualizar_producto))
            .route(web::delete().to(handlers::eliminar_producto)),
    );
}

pub fn cors(origin: &str) -> Cors {
    Cors::default()
        .allowed_origin(origin)
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE"])
        .allowed_headers(vec![header::ORIGIN, header::CONTENT_TYPE])
        .expose_headers(vec![header::CONTENT_LENGTH])
        .supports_credentials()
        .max_age(12 * 60 * 60)
}
