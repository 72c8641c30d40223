use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use models::{producto, tienda};

use super::dedup_by_id;
use crate::catalog::domain::{NewProducto, NewTienda, Producto, Relations, Tienda};
use crate::catalog::repository::{ProductoRepository, TiendaRepository};
use crate::errors::ServiceError;

#[derive(Default)]
struct CatalogState {
    productos: HashMap<Uuid, producto::Model>,
    tiendas: HashMap<Uuid, tienda::Model>,
    /// `(producto_id, tienda_id)` pairs.
    links: BTreeSet<(Uuid, Uuid)>,
}

impl CatalogState {
    fn tiendas_of(&self, producto_id: Uuid) -> Vec<Tienda> {
        self.links
            .iter()
            .filter(|(p, _)| *p == producto_id)
            .filter_map(|(_, t)| self.tiendas.get(t))
            .map(|m| Tienda::from_model(m.clone(), None))
            .collect()
    }

    fn productos_of(&self, tienda_id: Uuid) -> Result<Vec<Producto>, ServiceError> {
        self.links
            .iter()
            .filter(|(_, t)| *t == tienda_id)
            .filter_map(|(p, _)| self.productos.get(p))
            .map(|m| Producto::from_model(m.clone(), None))
            .collect()
    }

    fn producto(&self, m: &producto::Model, relations: Relations) -> Result<Producto, ServiceError> {
        let tiendas = match relations {
            Relations::Load => Some(self.tiendas_of(m.id)),
            Relations::Skip => None,
        };
        Producto::from_model(m.clone(), tiendas)
    }

    fn tienda(&self, m: &tienda::Model, relations: Relations) -> Result<Tienda, ServiceError> {
        let productos = match relations {
            Relations::Load => Some(self.productos_of(m.id)?),
            Relations::Skip => None,
        };
        Ok(Tienda::from_model(m.clone(), productos))
    }
}

/// Catalog kept in process memory, with the same link semantics as the
/// database: unique pairs, cascading removal from either side.
#[derive(Clone, Default)]
pub struct InMemoryCatalog {
    state: Arc<RwLock<CatalogState>>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn productos(&self) -> InMemoryProductoRepository {
        InMemoryProductoRepository { state: Arc::clone(&self.state) }
    }

    pub fn tiendas(&self) -> InMemoryTiendaRepository {
        InMemoryTiendaRepository { state: Arc::clone(&self.state) }
    }

    /// Number of stored product/store links.
    pub async fn link_count(&self) -> usize {
        self.state.read().await.links.len()
    }
}

pub struct InMemoryProductoRepository {
    state: Arc<RwLock<CatalogState>>,
}

pub struct InMemoryTiendaRepository {
    state: Arc<RwLock<CatalogState>>,
}

#[async_trait]
impl ProductoRepository for InMemoryProductoRepository {
    async fn find_all(&self, relations: Relations) -> Result<Vec<Producto>, ServiceError> {
        let state = self.state.read().await;
        state.productos.values().map(|m| state.producto(m, relations)).collect()
    }

    async fn find_by_id(&self, id: Uuid, relations: Relations) -> Result<Option<Producto>, ServiceError> {
        let state = self.state.read().await;
        state.productos.get(&id).map(|m| state.producto(m, relations)).transpose()
    }

    async fn insert(&self, new: NewProducto) -> Result<Producto, ServiceError> {
        let m = producto::Model {
            id: Uuid::new_v4(),
            nombre: new.nombre,
            precio: new.precio,
            tipo: new.tipo.as_str().to_string(),
        };
        self.state.write().await.productos.insert(m.id, m.clone());
        Producto::from_model(m, None)
    }

    async fn save(&self, producto: Producto) -> Result<Producto, ServiceError> {
        let mut state = self.state.write().await;
        let Some(row) = state.productos.get_mut(&producto.id) else {
            return Err(ServiceError::Db(format!("producto {} does not exist", producto.id)));
        };
        row.nombre = producto.nombre.clone();
        row.precio = producto.precio.clone();
        row.tipo = producto.tipo.as_str().to_string();

        let tiendas = producto.tiendas.map(dedup_by_id);
        if let Some(tiendas) = &tiendas {
            if let Some(missing) = tiendas.iter().find(|t| !state.tiendas.contains_key(&t.id)) {
                return Err(ServiceError::Db(format!("tienda {} does not exist", missing.id)));
            }
            state.links.retain(|(p, _)| *p != producto.id);
            state.links.extend(tiendas.iter().map(|t| (producto.id, t.id)));
        }
        Ok(Producto { tiendas, ..producto })
    }

    async fn remove(&self, id: Uuid) -> Result<(), ServiceError> {
        let mut state = self.state.write().await;
        state.productos.remove(&id);
        state.links.retain(|(p, _)| *p != id);
        Ok(())
    }
}

#[async_trait]
impl TiendaRepository for InMemoryTiendaRepository {
    async fn find_all(&self, relations: Relations) -> Result<Vec<Tienda>, ServiceError> {
        let state = self.state.read().await;
        state.tiendas.values().map(|m| state.tienda(m, relations)).collect()
    }

    async fn find_by_id(&self, id: Uuid, relations: Relations) -> Result<Option<Tienda>, ServiceError> {
        let state = self.state.read().await;
        state.tiendas.get(&id).map(|m| state.tienda(m, relations)).transpose()
    }

    async fn insert(&self, new: NewTienda) -> Result<Tienda, ServiceError> {
        let m = tienda::Model {
            id: Uuid::new_v4(),
            nombre: new.nombre,
            ciudad: new.ciudad,
            direccion: new.direccion,
        };
        self.state.write().await.tiendas.insert(m.id, m.clone());
        Ok(Tienda::from_model(m, None))
    }

    async fn save(&self, tienda: Tienda) -> Result<Tienda, ServiceError> {
        let mut state = self.state.write().await;
        let Some(row) = state.tiendas.get_mut(&tienda.id) else {
            return Err(ServiceError::Db(format!("tienda {} does not exist", tienda.id)));
        };
        row.nombre = tienda.nombre.clone();
        row.ciudad = tienda.ciudad.clone();
        row.direccion = tienda.direccion.clone();
        Ok(tienda)
    }

    async fn remove(&self, id: Uuid) -> Result<(), ServiceError> {
        let mut state = self.state.write().await;
        state.tiendas.remove(&id);
        state.links.retain(|(_, t)| *t != id);
        Ok(())
    }
}
