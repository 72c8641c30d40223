use std::sync::Arc;

use tracing::{info, instrument};
use uuid::Uuid;

use models::producto::TipoProducto;

use super::domain::{NewProducto, Producto, ProductoInput, Relations};
use super::repository::ProductoRepository;
use crate::errors::ServiceError;

/// CRUD over products, enforcing the closed set of product types.
pub struct ProductoService {
    repo: Arc<dyn ProductoRepository>,
}

fn parse_tipo(raw: &str) -> Result<TipoProducto, ServiceError> {
    raw.parse::<TipoProducto>().map_err(|_| ServiceError::invalid_tipo())
}

impl ProductoService {
    pub fn new(repo: Arc<dyn ProductoRepository>) -> Self {
        Self { repo }
    }

    /// All products, each with its linked stores.
    #[instrument(skip(self))]
    pub async fn find_all(&self) -> Result<Vec<Producto>, ServiceError> {
        self.repo.find_all(Relations::Load).await
    }

    #[instrument(skip(self), fields(producto_id = %id))]
    pub async fn find_one(&self, id: Uuid) -> Result<Producto, ServiceError> {
        self.repo
            .find_by_id(id, Relations::Load)
            .await?
            .ok_or_else(ServiceError::producto_not_found)
    }

    /// Create a product after checking its type.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use service::catalog::{domain::ProductoInput, repo::memory::InMemoryCatalog, ProductoService};
    /// let catalog = InMemoryCatalog::new();
    /// let svc = ProductoService::new(Arc::new(catalog.productos()));
    /// let input = ProductoInput { nombre: "Milk".into(), precio: "3.50".into(), tipo: "PERECEDERO".into() };
    /// let created = tokio_test::block_on(svc.create(input)).unwrap();
    /// assert_eq!(created.nombre, "Milk");
    /// let bad = ProductoInput { nombre: "Milk".into(), precio: "3.50".into(), tipo: "FRESCO".into() };
    /// assert!(tokio_test::block_on(svc.create(bad)).is_err());
    /// ```
    #[instrument(skip(self, input), fields(nombre = %input.nombre))]
    pub async fn create(&self, input: ProductoInput) -> Result<Producto, ServiceError> {
        let tipo = parse_tipo(&input.tipo)?;
        let created = self
            .repo
            .insert(NewProducto { nombre: input.nombre, precio: input.precio, tipo })
            .await?;
        info!(service = "producto", event = "created", producto_id = %created.id);
        Ok(created)
    }

    /// Overwrite the scalar fields of an existing product; its links are kept.
    #[instrument(skip(self, input), fields(producto_id = %id))]
    pub async fn update(&self, id: Uuid, input: ProductoInput) -> Result<Producto, ServiceError> {
        let persisted = self
            .repo
            .find_by_id(id, Relations::Skip)
            .await?
            .ok_or_else(ServiceError::producto_not_found)?;
        let tipo = parse_tipo(&input.tipo)?;
        let merged = Producto { nombre: input.nombre, precio: input.precio, tipo, ..persisted };
        let saved = self.repo.save(merged).await?;
        info!(service = "producto", event = "updated", producto_id = %saved.id);
        Ok(saved)
    }

    #[instrument(skip(self), fields(producto_id = %id))]
    pub async fn delete(&self, id: Uuid) -> Result<(), ServiceError> {
        self.repo
            .find_by_id(id, Relations::Skip)
            .await?
            .ok_or_else(ServiceError::producto_not_found)?;
        self.repo.remove(id).await?;
        info!(service = "producto", event = "deleted", producto_id = %id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::repo::memory::InMemoryCatalog;

    fn service() -> ProductoService {
        ProductoService::new(Arc::new(InMemoryCatalog::new().productos()))
    }

    fn input(tipo: &str) -> ProductoInput {
        ProductoInput { nombre: "Milk".into(), precio: "3.50".into(), tipo: tipo.into() }
    }

    #[tokio::test]
    async fn create_then_find_one_round_trips() {
        let svc = service();
        let created = svc.create(input("PERECEDERO")).await.unwrap();
        let found = svc.find_one(created.id).await.unwrap();
        assert_eq!(found.nombre, "Milk");
        assert_eq!(found.precio, "3.50");
        assert_eq!(found.tipo, TipoProducto::Perecedero);
        assert_eq!(found.tiendas, Some(vec![]));
    }

    #[tokio::test]
    async fn unknown_tipo_is_rejected_without_persisting() {
        let svc = service();
        let err = svc.create(input("perecedero")).await.unwrap_err();
        assert!(matches!(err, ServiceError::InvalidType(_)));
        assert!(svc.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_merges_and_validates() {
        let svc = service();
        let created = svc.create(input("PERECEDERO")).await.unwrap();

        let err = svc.update(created.id, input("CONGELADO")).await.unwrap_err();
        assert!(matches!(err, ServiceError::InvalidType(_)));
        assert_eq!(svc.find_one(created.id).await.unwrap().tipo, TipoProducto::Perecedero);

        let changed = ProductoInput { nombre: "Rice".into(), precio: "9.99".into(), tipo: "NO_PERECEDERO".into() };
        let updated = svc.update(created.id, changed).await.unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.nombre, "Rice");
        assert_eq!(updated.tipo, TipoProducto::NoPerecedero);
    }

    #[tokio::test]
    async fn missing_id_is_not_found_before_type_check() {
        let svc = service();
        let id = Uuid::new_v4();
        assert!(matches!(svc.find_one(id).await, Err(ServiceError::NotFound(_))));
        assert!(matches!(svc.update(id, input("BAD")).await, Err(ServiceError::NotFound(_))));
        assert!(matches!(svc.delete(id).await, Err(ServiceError::NotFound(_))));
    }

    #[tokio::test]
    async fn delete_removes_record() {
        let svc = service();
        let created = svc.create(input("NO_PERECEDERO")).await.unwrap();
        svc.delete(created.id).await.unwrap();
        assert!(matches!(svc.find_one(created.id).await, Err(ServiceError::NotFound(_))));
    }
}
