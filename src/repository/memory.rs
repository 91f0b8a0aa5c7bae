use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{ProductoRepository, RepoError};
use crate::models::{NuevoProducto, Producto};

/// Almacén en memoria con la misma semántica que la tabla: ids autoincrementales
/// desde 1 que nunca se reutilizan.
#[derive(Default)]
pub struct MemoryProductoRepository {
    estado: RwLock<Estado>,
}

#[derive(Default)]
struct Estado {
    ultimo_id: i64,
    filas: BTreeMap<i64, Producto>,
}

impl MemoryProductoRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductoRepository for MemoryProductoRepository {
    async fn listar(&self) -> Result<Vec<Producto>, RepoError> {
        Ok(self.estado.read().await.filas.values().cloned().collect())
    }

    async fn obtener(&self, id: i64) -> Result<Producto, RepoError> {
        self.estado
            .read()
            .await
            .filas
            .get(&id)
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    async fn crear(&self, nuevo: &NuevoProducto) -> Result<Producto, RepoError> {
        let mut estado = self.estado.write().await;
        estado.ultimo_id += 1;
        let producto = nuevo.clone().into_producto(estado.ultimo_id);
        estado.filas.insert(producto.id, producto.clone());
        Ok(producto)
    }

    async fn actualizar(&self, id: i64, nuevo: &NuevoProducto) -> Result<Producto, RepoError> {
        let mut estado = self.estado.write().await;
        let fila = estado.filas.get_mut(&id).ok_or(RepoError::NotFound)?;
        *fila = nuevo.clone().into_producto(id);
        Ok(fila.clone())
    }

    async fn eliminar(&self, id: i64) -> Result<(), RepoError> {
        self.estado
            .write()
            .await
            .filas
            .remove(&id)
            .map(|_| ())
            .ok_or(RepoError::NotFound)
    }
}
