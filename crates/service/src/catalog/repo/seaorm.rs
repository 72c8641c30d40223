use sea_orm::{DatabaseConnection, EntityTrait, ModelTrait, TransactionTrait};
use uuid::Uuid;

use models::{producto, producto_tienda, tienda};

use super::dedup_by_id;
use crate::catalog::domain::{NewProducto, NewTienda, Producto, Relations, Tienda};
use crate::catalog::repository::{ProductoRepository, TiendaRepository};
use crate::errors::ServiceError;

pub struct SeaOrmProductoRepository {
    pub db: DatabaseConnection,
}

pub struct SeaOrmTiendaRepository {
    pub db: DatabaseConnection,
}

fn tiendas_of(rows: Vec<tienda::Model>) -> Vec<Tienda> {
    rows.into_iter().map(|t| Tienda::from_model(t, None)).collect()
}

fn productos_of(rows: Vec<producto::Model>) -> Result<Vec<Producto>, ServiceError> {
    rows.into_iter().map(|p| Producto::from_model(p, None)).collect()
}

#[async_trait::async_trait]
impl ProductoRepository for SeaOrmProductoRepository {
    async fn find_all(&self, relations: Relations) -> Result<Vec<Producto>, ServiceError> {
        match relations {
            Relations::Skip => productos_of(producto::Entity::find().all(&self.db).await?),
            Relations::Load => producto::Entity::find()
                .find_with_related(tienda::Entity)
                .all(&self.db)
                .await?
                .into_iter()
                .map(|(p, ts)| Producto::from_model(p, Some(tiendas_of(ts))))
                .collect(),
        }
    }

    async fn find_by_id(&self, id: Uuid, relations: Relations) -> Result<Option<Producto>, ServiceError> {
        let Some(found) = producto::Entity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };
        let tiendas = match relations {
            Relations::Skip => None,
            Relations::Load => Some(tiendas_of(found.find_related(tienda::Entity).all(&self.db).await?)),
        };
        Producto::from_model(found, tiendas).map(Some)
    }

    async fn insert(&self, new: NewProducto) -> Result<Producto, ServiceError> {
        let created = producto::create(&self.db, &new.nombre, &new.precio, new.tipo).await?;
        Producto::from_model(created, None)
    }

    async fn save(&self, producto: Producto) -> Result<Producto, ServiceError> {
        let txn = self.db.begin().await?;
        producto::overwrite(&txn, producto.id, &producto.nombre, &producto.precio, producto.tipo).await?;
        let tiendas = producto.tiendas.map(dedup_by_id);
        if let Some(tiendas) = &tiendas {
            let ids: Vec<Uuid> = tiendas.iter().map(|t| t.id).collect();
            producto_tienda::replace_for_producto(&txn, producto.id, &ids).await?;
        }
        txn.commit().await?;
        Ok(Producto { tiendas, ..producto })
    }

    async fn remove(&self, id: Uuid) -> Result<(), ServiceError> {
        producto::hard_delete(&self.db, id).await?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl TiendaRepository for SeaOrmTiendaRepository {
    async fn find_all(&self, relations: Relations) -> Result<Vec<Tienda>, ServiceError> {
        match relations {
            Relations::Skip => Ok(tiendas_of(tienda::Entity::find().all(&self.db).await?)),
            Relations::Load => tienda::Entity::find()
                .find_with_related(producto::Entity)
                .all(&self.db)
                .await?
                .into_iter()
                .map(|(t, ps)| -> Result<Tienda, ServiceError> {
                    Ok(Tienda::from_model(t, Some(productos_of(ps)?)))
                })
                .collect(),
        }
    }

    async fn find_by_id(&self, id: Uuid, relations: Relations) -> Result<Option<Tienda>, ServiceError> {
        let Some(found) = tienda::Entity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };
        let productos = match relations {
            Relations::Skip => None,
            Relations::Load => Some(productos_of(found.find_related(producto::Entity).all(&self.db).await?)?),
        };
        Ok(Some(Tienda::from_model(found, productos)))
    }

    async fn insert(&self, new: NewTienda) -> Result<Tienda, ServiceError> {
        let created = tienda::create(&self.db, &new.nombre, &new.ciudad, &new.direccion).await?;
        Ok(Tienda::from_model(created, None))
    }

    async fn save(&self, tienda: Tienda) -> Result<Tienda, ServiceError> {
        let saved = tienda::overwrite(&self.db, tienda.id, &tienda.nombre, &tienda.ciudad, &tienda.direccion).await?;
        Ok(Tienda::from_model(saved, tienda.productos))
    }

    async fn remove(&self, id: Uuid) -> Result<(), ServiceError> {
        tienda::hard_delete(&self.db, id).await?;
        Ok(())
    }
}
