//! Migrator registering the catalog tables in dependency order.
//! The join table comes last since it references both sides.
pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_producto;
mod m20240101_000002_create_tienda;
mod m20240101_000003_create_producto_tienda;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_producto::Migration),
            Box::new(m20240101_000002_create_tienda::Migration),
            Box::new(m20240101_000003_create_producto_tienda::Migration),
        ]
    }
}
