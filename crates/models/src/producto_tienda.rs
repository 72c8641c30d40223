use sea_orm::{entity::prelude::*, ConnectionTrait, QueryFilter, Set, TransactionTrait};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{errors, producto, tienda};

/// One link between a product and a store. The composite key keeps pairs unique.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "producto_tienda")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub producto_id: Uuid,
    #[sea_orm(primary_key, auto_increment = false)]
    pub tienda_id: Uuid,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Producto,
    Tienda,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Producto => Entity::belongs_to(producto::Entity)
                .from(Column::ProductoId)
                .to(producto::Column::Id)
                .into(),
            Relation::Tienda => Entity::belongs_to(tienda::Entity)
                .from(Column::TiendaId)
                .to(tienda::Column::Id)
                .into(),
        }
    }
}

impl Related<producto::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Producto.def()
    }
}

impl Related<tienda::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Tienda.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Replace every link of `producto_id` with `tienda_ids` in one transaction.
///
/// Repeated ids collapse into a single row.
pub async fn replace_for_producto<C: ConnectionTrait + TransactionTrait>(
    db: &C,
    producto_id: Uuid,
    tienda_ids: &[Uuid],
) -> Result<(), errors::ModelError> {
    let mut unique: Vec<Uuid> = Vec::with_capacity(tienda_ids.len());
    for id in tienda_ids {
        if !unique.contains(id) {
            unique.push(*id);
        }
    }

    let txn = db.begin().await?;
    Entity::delete_many()
        .filter(Column::ProductoId.eq(producto_id))
        .exec(&txn)
        .await?;
    if !unique.is_empty() {
        let rows = unique.into_iter().map(|tienda_id| ActiveModel {
            producto_id: Set(producto_id),
            tienda_id: Set(tienda_id),
        });
        Entity::insert_many(rows).exec(&txn).await?;
    }
    txn.commit().await?;
    Ok(())
}
