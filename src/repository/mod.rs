mod memory;
mod mysql;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{NuevoProducto, Producto};

pub use memory::MemoryProductoRepository;
pub use mysql::MySqlProductoRepository;

#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Product not found")]
    NotFound,

    /// El mensaje del driver se conserva tal cual.
    #[error("{0}")]
    Database(#[from] sqlx::Error),
}

/// Acceso a la tabla `productos`. Cada operación es una sola sentencia.
#[async_trait]
pub trait ProductoRepository: Send + Sync + 'static {
    async fn listar(&self) -> Result<Vec<Producto>, RepoError>;

    async fn obtener(&self, id: i64) -> Result<Producto, RepoError>;

    async fn crear(&self, nuevo: &NuevoProducto) -> Result<Producto, RepoError>;

    async fn actualizar(&self, id: i64, nuevo: &NuevoProducto) -> Result<Producto, RepoError>;

    async fn eliminar(&self, id: i64) -> Result<(), RepoError>;
}
