//! Create `producto` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Producto::Table)
                    .if_not_exists()
                    .col(uuid(Producto::Id).primary_key())
                    .col(text(Producto::Nombre))
                    .col(text(Producto::Precio))
                    .col(string_len(Producto::Tipo, 32).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Producto::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Producto { Table, Id, Nombre, Precio, Tipo }
