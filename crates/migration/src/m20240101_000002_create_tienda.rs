//! Create `tienda` table.
//!
//! `ciudad` is a three character code, upper-cased by the service before
//! insert. Upper-casing can lengthen it (`ß` becomes `SS`), so the column is unbounded.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Tienda::Table)
                    .if_not_exists()
                    .col(uuid(Tienda::Id).primary_key())
                    .col(text(Tienda::Nombre))
                    .col(text(Tienda::Ciudad))
                    .col(text(Tienda::Direccion))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Tienda::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Tienda { Table, Id, Nombre, Ciudad, Direccion }
