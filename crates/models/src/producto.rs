use std::fmt;
use std::str::FromStr;

use sea_orm::{entity::prelude::*, ConnectionTrait, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{errors, producto_tienda, tienda};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "producto")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub nombre: String,
    pub precio: String,
    pub tipo: String,
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

impl Related<tienda::Entity> for Entity {
    fn to() -> RelationDef {
        producto_tienda::Relation::Tienda.def()
    }

    fn via() -> Option<RelationDef> {
        Some(producto_tienda::Relation::Producto.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Closed set of product kinds; stored as its upper snake case name.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TipoProducto {
    Perecedero,
    NoPerecedero,
}

impl TipoProducto {
    pub const ALL: [TipoProducto; 2] = [TipoProducto::Perecedero, TipoProducto::NoPerecedero];

    pub fn as_str(&self) -> &'static str {
        match self {
            TipoProducto::Perecedero => "PERECEDERO",
            TipoProducto::NoPerecedero => "NO_PERECEDERO",
        }
    }

    /// Allowed values joined with `", "`, for error messages.
    pub fn allowed() -> String {
        Self::ALL.iter().map(|t| t.as_str()).collect::<Vec<_>>().join(", ")
    }
}

impl fmt::Display for TipoProducto {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TipoProducto {
    type Err = errors::ModelError;

    /// Exact match only: `"perecedero"` is not a valid value.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| errors::ModelError::Validation(format!("unknown tipo: {s}")))
    }
}

impl Model {
    pub fn parsed_tipo(&self) -> Result<TipoProducto, errors::ModelError> {
        self.tipo.parse()
    }
}

pub async fn create<C: ConnectionTrait>(
    db: &C,
    nombre: &str,
    precio: &str,
    tipo: TipoProducto,
) -> Result<Model, errors::ModelError> {
    let am = ActiveModel {
        id: Set(Uuid::new_v4()),
        nombre: Set(nombre.to_string()),
        precio: Set(precio.to_string()),
        tipo: Set(tipo.as_str().to_string()),
    };
    Ok(am.insert(db).await?)
}

/// Overwrite every column of an existing row.
pub async fn overwrite<C: ConnectionTrait>(
    db: &C,
    id: Uuid,
    nombre: &str,
    precio: &str,
    tipo: TipoProducto,
) -> Result<Model, errors::ModelError> {
    let am = ActiveModel {
        id: Set(id),
        nombre: Set(nombre.to_string()),
        precio: Set(precio.to_string()),
        tipo: Set(tipo.as_str().to_string()),
    };
    Ok(am.update(db).await?)
}

/// Delete a product; its join rows go with it through the FK cascade.
pub async fn hard_delete<C: ConnectionTrait>(db: &C, id: Uuid) -> Result<bool, errors::ModelError> {
    let res = Entity::delete_by_id(id).exec(db).await?;
    Ok(res.rows_affected > 0)
}
