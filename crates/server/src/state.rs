use std::sync::Arc;

use sea_orm::DatabaseConnection;

use service::catalog::repo::memory::InMemoryCatalog;
use service::catalog::repo::seaorm::{SeaOrmProductoRepository, SeaOrmTiendaRepository};
use service::catalog::repository::{ProductoRepository, TiendaRepository};
use service::catalog::{ProductoService, ProductoTiendaService, TiendaService};

/// Services shared by every handler.
#[derive(Clone)]
pub struct ServerState {
    pub productos: Arc<ProductoService>,
    pub tiendas: Arc<TiendaService>,
    pub producto_tiendas: Arc<ProductoTiendaService>,
}

impl ServerState {
    pub fn from_repositories(
        productos: Arc<dyn ProductoRepository>,
        tiendas: Arc<dyn TiendaRepository>,
    ) -> Self {
        Self {
            productos: Arc::new(ProductoService::new(Arc::clone(&productos))),
            tiendas: Arc::new(TiendaService::new(Arc::clone(&tiendas))),
            producto_tiendas: Arc::new(ProductoTiendaService::new(productos, tiendas)),
        }
    }

    pub fn with_database(db: DatabaseConnection) -> Self {
        Self::from_repositories(
            Arc::new(SeaOrmProductoRepository { db: db.clone() }),
            Arc::new(SeaOrmTiendaRepository { db }),
        )
    }

    pub fn in_memory(catalog: &InMemoryCatalog) -> Self {
        Self::from_repositories(Arc::new(catalog.productos()), Arc::new(catalog.tiendas()))
    }
}
