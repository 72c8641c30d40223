use std::sync::Arc;

use tracing::{info, instrument};
use uuid::Uuid;

use super::domain::{Producto, Relations, Tienda};
use super::repository::{ProductoRepository, TiendaRepository};
use crate::errors::ServiceError;

/// Manages the stores linked to a product.
///
/// Every check runs before the single `save`, so a rejected call writes
/// nothing. The read-then-save sequence is not one transaction.
pub struct ProductoTiendaService {
    productos: Arc<dyn ProductoRepository>,
    tiendas: Arc<dyn TiendaRepository>,
}

impl ProductoTiendaService {
    pub fn new(productos: Arc<dyn ProductoRepository>, tiendas: Arc<dyn TiendaRepository>) -> Self {
        Self { productos, tiendas }
    }

    async fn tienda(&self, id: Uuid) -> Result<Tienda, ServiceError> {
        self.tiendas
            .find_by_id(id, Relations::Skip)
            .await?
            .ok_or_else(ServiceError::tienda_not_found)
    }

    async fn producto(&self, id: Uuid, relations: Relations) -> Result<Producto, ServiceError> {
        self.productos
            .find_by_id(id, relations)
            .await?
            .ok_or_else(ServiceError::producto_not_found)
    }

    /// Link a store to a product and return the product with all its stores.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use service::catalog::{domain::{ProductoInput, TiendaInput}, repo::memory::InMemoryCatalog};
    /// use service::catalog::{ProductoService, ProductoTiendaService, TiendaService};
    /// let catalog = InMemoryCatalog::new();
    /// let productos = ProductoService::new(Arc::new(catalog.productos()));
    /// let tiendas = TiendaService::new(Arc::new(catalog.tiendas()));
    /// let links = ProductoTiendaService::new(Arc::new(catalog.productos()), Arc::new(catalog.tiendas()));
    /// let p = tokio_test::block_on(productos.create(ProductoInput { nombre: "Milk".into(), precio: "3.50".into(), tipo: "PERECEDERO".into() })).unwrap();
    /// let t = tokio_test::block_on(tiendas.create(TiendaInput { nombre: "Acme".into(), ciudad: "bog".into(), direccion: "Main 1".into() })).unwrap();
    /// let linked = tokio_test::block_on(links.add_store_to_product(p.id, t.id)).unwrap();
    /// assert_eq!(linked.tiendas.unwrap()[0].ciudad, "BOG");
    /// ```
    #[instrument(skip(self), fields(producto_id = %producto_id, tienda_id = %tienda_id))]
    pub async fn add_store_to_product(&self, producto_id: Uuid, tienda_id: Uuid) -> Result<Producto, ServiceError> {
        let tienda = self.tienda(tienda_id).await?;
        let mut producto = self.producto(producto_id, Relations::Load).await?;
        producto.tiendas.get_or_insert_with(Vec::new).push(tienda);
        let saved = self.productos.save(producto).await?;
        info!(service = "producto_tienda", event = "linked", producto_id = %producto_id, tienda_id = %tienda_id);
        Ok(saved)
    }

    #[instrument(skip(self), fields(producto_id = %producto_id, tienda_id = %tienda_id))]
    pub async fn find_store_from_product(&self, producto_id: Uuid, tienda_id: Uuid) -> Result<Tienda, ServiceError> {
        self.tienda(tienda_id).await?;
        let producto = self.producto(producto_id, Relations::Load).await?;
        producto
            .tienda(tienda_id)
            .map(Tienda::detached)
            .ok_or_else(|| ServiceError::PreconditionFailed("the store with the given id was not found".into()))
    }

    #[instrument(skip(self), fields(producto_id = %producto_id))]
    pub async fn find_stores_from_product(&self, producto_id: Uuid) -> Result<Vec<Tienda>, ServiceError> {
        let producto = self.producto(producto_id, Relations::Load).await?;
        Ok(producto.tiendas.unwrap_or_default())
    }

    /// Replace the product's whole store set with `tiendas`.
    ///
    /// Each incoming store must exist; the first missing one aborts the call.
    #[instrument(skip(self, tiendas), fields(producto_id = %producto_id, count = tiendas.len()))]
    pub async fn update_stores_from_product(
        &self,
        producto_id: Uuid,
        tiendas: Vec<Tienda>,
    ) -> Result<Producto, ServiceError> {
        // The current set is replaced wholesale, so it is not loaded.
        let producto = self.producto(producto_id, Relations::Skip).await?;
        for t in &tiendas {
            self.tienda(t.id).await?;
        }
        let incoming = tiendas.iter().map(Tienda::detached).collect();
        let saved = self.productos.save(Producto { tiendas: Some(incoming), ..producto }).await?;
        info!(service = "producto_tienda", event = "replaced", producto_id = %producto_id);
        Ok(saved)
    }

    #[instrument(skip(self), fields(producto_id = %producto_id, tienda_id = %tienda_id))]
    pub async fn delete_store_from_product(&self, producto_id: Uuid, tienda_id: Uuid) -> Result<(), ServiceError> {
        self.tienda(tienda_id).await?;
        let mut producto = self.producto(producto_id, Relations::Load).await?;
        if producto.tienda(tienda_id).is_none() {
            return Err(ServiceError::PreconditionFailed(
                "the store with the given id is not associated with the given product".into(),
            ));
        }
        if let Some(tiendas) = producto.tiendas.as_mut() {
            tiendas.retain(|t| t.id != tienda_id);
        }
        self.productos.save(producto).await?;
        info!(service = "producto_tienda", event = "unlinked", producto_id = %producto_id, tienda_id = %tienda_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::domain::{ProductoInput, TiendaInput};
    use crate::catalog::repo::memory::InMemoryCatalog;
    use crate::catalog::{ProductoService, TiendaService};

    struct Fixture {
        catalog: InMemoryCatalog,
        productos: ProductoService,
        tiendas: TiendaService,
        links: ProductoTiendaService,
    }

    fn fixture() -> Fixture {
        let catalog = InMemoryCatalog::new();
        Fixture {
            productos: ProductoService::new(Arc::new(catalog.productos())),
            tiendas: TiendaService::new(Arc::new(catalog.tiendas())),
            links: ProductoTiendaService::new(Arc::new(catalog.productos()), Arc::new(catalog.tiendas())),
            catalog,
        }
    }

    impl Fixture {
        async fn producto(&self) -> Producto {
            self.productos
                .create(ProductoInput { nombre: "Milk".into(), precio: "3.50".into(), tipo: "PERECEDERO".into() })
                .await
                .unwrap()
        }

        async fn tienda(&self, nombre: &str, ciudad: &str) -> Tienda {
            self.tiendas
                .create(TiendaInput { nombre: nombre.into(), ciudad: ciudad.into(), direccion: "Main 1".into() })
                .await
                .unwrap()
        }
    }

    #[tokio::test]
    async fn store_lifecycle_scenario() {
        let f = fixture();
        let short = f
            .tiendas
            .create(TiendaInput { nombre: "Acme".into(), ciudad: "bo".into(), direccion: "Main 1".into() })
            .await;
        assert!(matches!(short, Err(ServiceError::InvalidValue(_))));

        let tienda = f.tienda("Acme", "bog").await;
        assert_eq!(tienda.ciudad, "BOG");
        let producto = f.producto().await;

        let linked = f.links.add_store_to_product(producto.id, tienda.id).await.unwrap();
        let stores = linked.tiendas.unwrap();
        assert_eq!(stores.len(), 1);
        assert_eq!(
            (stores[0].nombre.as_str(), stores[0].ciudad.as_str(), stores[0].direccion.as_str()),
            ("Acme", "BOG", "Main 1")
        );

        f.links.delete_store_from_product(producto.id, tienda.id).await.unwrap();
        assert!(f.links.find_stores_from_product(producto.id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn add_checks_store_before_product() {
        let f = fixture();
        let producto = f.producto().await;
        let tienda = f.tienda("Acme", "bog").await;

        let err = f.links.add_store_to_product(Uuid::new_v4(), Uuid::new_v4()).await.unwrap_err();
        assert_eq!(err.to_string(), "the store with the given id was not found");

        let err = f.links.add_store_to_product(Uuid::new_v4(), tienda.id).await.unwrap_err();
        assert_eq!(err.to_string(), "the product with the given id was not found");

        let err = f.links.add_store_to_product(producto.id, Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[tokio::test]
    async fn adding_twice_keeps_one_link() {
        let f = fixture();
        let producto = f.producto().await;
        let tienda = f.tienda("Acme", "bog").await;
        f.links.add_store_to_product(producto.id, tienda.id).await.unwrap();
        let again = f.links.add_store_to_product(producto.id, tienda.id).await.unwrap();
        assert_eq!(again.tiendas.unwrap().len(), 1);
        assert_eq!(f.links.find_stores_from_product(producto.id).await.unwrap().len(), 1);
        assert_eq!(f.catalog.link_count().await, 1);
    }

    #[tokio::test]
    async fn find_one_link_distinguishes_missing_from_unlinked() {
        let f = fixture();
        let producto = f.producto().await;
        let linked = f.tienda("Acme", "bog").await;
        let other = f.tienda("Beta", "med").await;
        f.links.add_store_to_product(producto.id, linked.id).await.unwrap();

        let found = f.links.find_store_from_product(producto.id, linked.id).await.unwrap();
        assert_eq!(found.id, linked.id);
        assert!(found.productos.is_none());

        let err = f.links.find_store_from_product(producto.id, other.id).await.unwrap_err();
        assert!(matches!(err, ServiceError::PreconditionFailed(_)));

        let err = f.links.find_store_from_product(producto.id, Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[tokio::test]
    async fn find_stores_of_missing_product_is_not_found() {
        let f = fixture();
        let err = f.links.find_stores_from_product(Uuid::new_v4()).await.unwrap_err();
        assert_eq!(err.to_string(), "the product with the given id was not found");
    }

    #[tokio::test]
    async fn replace_swaps_the_whole_set() {
        let f = fixture();
        let producto = f.producto().await;
        let a = f.tienda("Acme", "bog").await;
        let b = f.tienda("Beta", "med").await;
        let c = f.tienda("Casa", "cal").await;
        f.links.add_store_to_product(producto.id, a.id).await.unwrap();

        let updated = f
            .links
            .update_stores_from_product(producto.id, vec![b.clone(), c.clone()])
            .await
            .unwrap();
        let ids: Vec<Uuid> = updated.tiendas.unwrap().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![b.id, c.id]);

        let mut stored: Vec<Uuid> = f
            .links
            .find_stores_from_product(producto.id)
            .await
            .unwrap()
            .into_iter()
            .map(|t| t.id)
            .collect();
        stored.sort();
        let mut expected = vec![b.id, c.id];
        expected.sort();
        assert_eq!(stored, expected);
    }

    #[tokio::test]
    async fn replace_with_missing_store_writes_nothing() {
        let f = fixture();
        let producto = f.producto().await;
        let a = f.tienda("Acme", "bog").await;
        f.links.add_store_to_product(producto.id, a.id).await.unwrap();

        let ghost = Tienda { id: Uuid::new_v4(), ..a.clone() };
        let err = f
            .links
            .update_stores_from_product(producto.id, vec![a.clone(), ghost])
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "the store with the given id was not found");

        let stores = f.links.find_stores_from_product(producto.id).await.unwrap();
        assert_eq!(stores.len(), 1);
        assert_eq!(stores[0].id, a.id);
    }

    #[tokio::test]
    async fn replace_with_empty_list_unlinks_everything() {
        let f = fixture();
        let producto = f.producto().await;
        let a = f.tienda("Acme", "bog").await;
        f.links.add_store_to_product(producto.id, a.id).await.unwrap();
        let updated = f.links.update_stores_from_product(producto.id, vec![]).await.unwrap();
        assert_eq!(updated.tiendas, Some(vec![]));
        assert_eq!(f.catalog.link_count().await, 0);
    }

    #[tokio::test]
    async fn delete_unlinked_store_is_precondition_failure() {
        let f = fixture();
        let producto = f.producto().await;
        let a = f.tienda("Acme", "bog").await;
        let err = f.links.delete_store_from_product(producto.id, a.id).await.unwrap_err();
        assert!(matches!(err, ServiceError::PreconditionFailed(_)));
        assert_eq!(err.to_string(), "the store with the given id is not associated with the given product");
    }

    #[tokio::test]
    async fn deleting_product_keeps_its_stores() {
        let f = fixture();
        let producto = f.producto().await;
        let a = f.tienda("Acme", "bog").await;
        f.links.add_store_to_product(producto.id, a.id).await.unwrap();
        f.productos.delete(producto.id).await.unwrap();
        let store = f.tiendas.find_one(a.id).await.unwrap();
        assert_eq!(store.productos, Some(vec![]));
        assert_eq!(f.catalog.link_count().await, 0);
    }
}
