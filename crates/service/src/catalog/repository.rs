use async_trait::async_trait;
use uuid::Uuid;

use super::domain::{NewProducto, NewTienda, Producto, Relations, Tienda};
use crate::errors::ServiceError;

/// Persistence of products and of the product side of the store links.
#[async_trait]
pub trait ProductoRepository: Send + Sync {
    async fn find_all(&self, relations: Relations) -> Result<Vec<Producto>, ServiceError>;
    async fn find_by_id(&self, id: Uuid, relations: Relations) -> Result<Option<Producto>, ServiceError>;
    async fn insert(&self, producto: NewProducto) -> Result<Producto, ServiceError>;
    /// Write scalar fields; when `tiendas` is `Some`, the product's links
    /// become exactly that set.
    async fn save(&self, producto: Producto) -> Result<Producto, ServiceError>;
    async fn remove(&self, id: Uuid) -> Result<(), ServiceError>;
}

/// Persistence of stores. Links are never written from this side.
#[async_trait]
pub trait TiendaRepository: Send + Sync {
    async fn find_all(&self, relations: Relations) -> Result<Vec<Tienda>, ServiceError>;
    async fn find_by_id(&self, id: Uuid, relations: Relations) -> Result<Option<Tienda>, ServiceError>;
    async fn insert(&self, tienda: NewTienda) -> Result<Tienda, ServiceError>;
    async fn save(&self, tienda: Tienda) -> Result<Tienda, ServiceError>;
    async fn remove(&self, id: Uuid) -> Result<(), ServiceError>;
}
