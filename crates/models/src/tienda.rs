use sea_orm::{entity::prelude::*, ConnectionTrait, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{errors, producto, producto_tienda};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "tienda")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub nombre: String,
    pub ciudad: String,
    pub direccion: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    ProductoTienda,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::ProductoTienda => Entity::has_many(producto_tienda::Entity).into(),
        }
    }
}

impl Related<producto_tienda::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProductoTienda.def()
    }
}

impl Related<producto::Entity> for Entity {
    fn to() -> RelationDef {
        producto_tienda::Relation::Producto.def()
    }

    fn via() -> Option<RelationDef> {
        Some(producto_tienda::Relation::Tienda.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub async fn create<C: ConnectionTrait>(
    db: &C,
    nombre: &str,
    ciudad: &str,
    direccion: &str,
) -> Result<Model, errors::ModelError> {
    let am = ActiveModel {
        id: Set(Uuid::new_v4()),
        nombre: Set(nombre.to_string()),
        ciudad: Set(ciudad.to_string()),
        direccion: Set(direccion.to_string()),
    };
    Ok(am.insert(db).await?)
}

pub async fn overwrite<C: ConnectionTrait>(
    db: &C,
    id: Uuid,
    nombre: &str,
    ciudad: &str,
    direccion: &str,
) -> Result<Model, errors::ModelError> {
    let am = ActiveModel {
        id: Set(id),
        nombre: Set(nombre.to_string()),
        ciudad: Set(ciudad.to_string()),
        direccion: Set(direccion.to_string()),
    };
    Ok(am.update(db).await?)
}

pub async fn hard_delete<C: ConnectionTrait>(db: &C, id: Uuid) -> Result<bool, errors::ModelError> {
    let res = Entity::delete_by_id(id).exec(db).await?;
    Ok(res.rows_affected > 0)
}
