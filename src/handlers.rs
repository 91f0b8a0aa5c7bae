use actix_web::{web, HttpResponse};
use log::{error, info};
use serde_json::json;

use crate::client_ip::ClientIp;
use crate::error::ApiError;
use crate::models::NuevoProducto;
use crate::repository::{ProductoRepository, RepoError};

type Repo = web::Data<dyn ProductoRepository>;

fn registrar_fallo(operacion: &str, err: &RepoError) {
    match err {
        RepoError::NotFound => info!("{operacion}: producto no encontrado"),
        RepoError::Database(e) => error!("{operacion}: error de base de datos: {e:?}"),
    }
}

pub async fn listar_productos(repo: Repo, cliente: ClientIp) -> Result<HttpResponse, ApiError> {
    info!("Recibida petición GET /productos desde {cliente}");
    let productos = repo.listar().await.inspect_err(|e| registrar_fallo("listar", e))?;
    Ok(HttpResponse::Ok().json(productos))
}

pub async fn obtener_producto(
    repo: Repo,
    id: web::Path<i64>,
    cliente: ClientIp,
) -> Result<HttpResponse, ApiError> {
    let id = id.into_inner();
    info!("Recibida petición GET /productos/{id} desde {cliente}");
    let producto = repo
        .obtener(id)
        .await
        .inspect_err(|e| registrar_fallo(&format!("obtener {id}"), e))?;
    Ok(HttpResponse::Ok().json(producto))
}

pub async fn crear_producto(
    repo: Repo,
    nuevo: web::Json<NuevoProducto>,
    cliente: ClientIp,
) -> Result<HttpResponse, ApiError> {
    info!("Recibida petición POST /productos desde {cliente}: {:?}", nuevo);
    let producto = repo
        .crear(&nuevo)
        .await
        .inspect_err(|e| registrar_fallo("crear", e))?;
    info!("Producto creado: {}", producto.id);
    Ok(HttpResponse::Created().json(producto))
}

pub async fn actualizar_producto(
    repo: Repo,
    id: web::Path<i64>,
    cambios: web::Json<NuevoProducto>,
    cliente: ClientIp,
) -> Result<HttpResponse, ApiError> {
    let id = id.into_inner();
    info!("Recibida petición PUT /productos/{id} desde {cliente}: {:?}", cambios);
    let producto = repo
        .actualizar(id, &cambios)
        .await
        .inspect_err(|e| registrar_fallo(&format!("actualizar {id}"), e))?;
    Ok(HttpResponse::Ok().json(producto))
}

pub async fn eliminar_producto(
    repo: Repo,
    id: web::Path<i64>,
    cliente: ClientIp,
) -> Result<HttpResponse, ApiError> {
    let id = id.into_inner();
    info!("Recibida petición DELETE /productos/{id} desde {cliente}");
    repo.eliminar(id)
        .await
        .inspect_err(|e| registrar_fallo(&format!("eliminar {id}"), e))?;
    info!("Producto eliminado: {id}");
    Ok(HttpResponse::Ok().json(json!({ "message": "Product deleted" })))
}
