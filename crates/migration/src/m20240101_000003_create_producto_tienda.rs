//! Create `producto_tienda` join table.
//! One row per linked pair; deleting either side removes its rows.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ProductoTienda::Table)
                    .if_not_exists()
                    .col(uuid(ProductoTienda::ProductoId))
                    .col(uuid(ProductoTienda::TiendaId))
                    .primary_key(
                        Index::create()
                            .name("pk_producto_tienda")
                            .col(ProductoTienda::ProductoId)
                            .col(ProductoTienda::TiendaId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_producto_tienda_producto")
                            .from(ProductoTienda::Table, ProductoTienda::ProductoId)
                            .to(Producto::Table, Producto::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_producto_tienda_tienda")
                            .from(ProductoTienda::Table, ProductoTienda::TiendaId)
                            .to(Tienda::Table, Tienda::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Reverse lookups: products of a store
        manager
            .create_index(
                Index::create()
                    .name("idx_producto_tienda_tienda_id")
                    .table(ProductoTienda::Table)
                    .col(ProductoTienda::TiendaId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(ProductoTienda::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum ProductoTienda { Table, ProductoId, TiendaId }

#[derive(DeriveIden)]
enum Producto { Table, Id }

#[derive(DeriveIden)]
enum Tienda { Table, Id }
