use serde::{Deserialize, Deserializer, Serialize};

/// Fila de `productos` tal como la devuelve la base; `descripcion` puede ser NULL.
#[derive(sqlx::FromRow, Debug)]
pub struct ProductoRow {
    pub id: i64,
    pub nombre: String,
    pub descripcion: Option<String>,
    pub precio: f64,
    pub categoria_id: i64,
}

/// Producto expuesto por la API. Una descripción NULL se entrega como `""`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Producto {
    pub id: i64,
    pub nombre: String,
    #[serde(default, deserialize_with = "null_como_vacio")]
    pub descripcion: String,
    pub precio: f64,
    pub categoria_id: i64,
}

/// Cuerpo de POST y PUT. Un `id` en el cuerpo se ignora.
#[derive(Deserialize, Debug, Clone)]
pub struct NuevoProducto {
    pub nombre: String,
    #[serde(default, deserialize_with = "null_como_vacio")]
    pub descripcion: String,
    pub precio: f64,
    pub categoria_id: i64,
}

impl NuevoProducto {
    /// Valor a enlazar en la columna: una descripción vacía se guarda como NULL.
    pub fn descripcion_sql(&self) -> Option<&str> {
        if self.descripcion.is_empty() {
            None
        } else {
            Some(&self.descripcion)
        }
    }

    pub fn into_producto(self, id: i64) -> Producto {
        Producto {
            id,
            nombre: self.nombre,
            descripcion: self.descripcion,
            precio: self.precio,
            categoria_id: self.categoria_id,
        }
    }
}

impl From<ProductoRow> for Producto {
    fn from(row: ProductoRow) -> Self {
        Producto {
            id: row.id,
            nombre: row.nombre,
            descripcion: row.descripcion.unwrap_or_default(),
            precio: row.precio,
            categoria_id: row.categoria_id,
        }
    }
}

fn null_como_vacio<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
