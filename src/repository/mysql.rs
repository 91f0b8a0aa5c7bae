use async_trait::async_trait;
use sqlx::MySqlPool;

use super::{ProductoRepository, RepoError};
use crate::models::{NuevoProducto, Producto, ProductoRow};

const SELECT_PRODUCTOS: &str = "SELECT id, nombre, descripcion, precio, categoria_id FROM productos";

#[derive(Clone)]
pub struct MySqlProductoRepository {
    pool: MySqlPool,
}

impl MySqlProductoRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductoRepository for MySqlProductoRepository {
    async fn listar(&self) -> Result<Vec<Producto>, RepoError> {
        let filas = sqlx::query_as::<_, ProductoRow>(SELECT_PRODUCTOS)
            .fetch_all(&self.pool)
            .await?;
        Ok(filas.into_iter().map(Producto::from).collect())
    }

    async fn obtener(&self, id: i64) -> Result<Producto, RepoError> {
        let sql = format!("{SELECT_PRODUCTOS} WHERE id = ?");
        sqlx::query_as::<_, ProductoRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .map(Producto::from)
            .ok_or(RepoError::NotFound)
    }

    async fn crear(&self, nuevo: &NuevoProducto) -> Result<Producto, RepoError> {
        let resultado = sqlx::query(
            "INSERT INTO productos (nombre, descripcion, precio, categoria_id) VALUES (?, ?, ?, ?)",
        )
        .bind(&nuevo.nombre)
        .bind(nuevo.descripcion_sql())
        .bind(nuevo.precio)
        .bind(nuevo.categoria_id)
        .execute(&self.pool)
        .await?;

        Ok(nuevo.clone().into_producto(resultado.last_insert_id() as i64))
    }

    async fn actualizar(&self, id: i64, nuevo: &NuevoProducto) -> Result<Producto, RepoError> {
        let resultado = sqlx::query(
            "UPDATE productos SET nombre = ?, descripcion = ?, precio = ?, categoria_id = ? WHERE id = ?",
        )
        .bind(&nuevo.nombre)
        .bind(nuevo.descripcion_sql())
        .bind(nuevo.precio)
        .bind(nuevo.categoria_id)
        .bind(id)
        .execute(&self.pool)
        .await?;

        // sqlx conecta con CLIENT_FOUND_ROWS: cuenta filas encontradas, no cambiadas.
        if resultado.rows_affected() == 0 {
            return Err(RepoError::NotFound);
        }

        Ok(nuevo.clone().into_producto(id))
    }

    async fn eliminar(&self, id: i64) -> Result<(), RepoError> {
        let resultado = sqlx::query("DELETE FROM productos WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if resultado.rows_affected() == 0 {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }
}
