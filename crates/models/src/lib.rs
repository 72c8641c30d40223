//! SeaORM entities for the catalog plus connection/schema helpers.
//!
//! `producto` and `tienda` are linked many-to-many through `producto_tienda`;
//! neither table references the other directly.

pub mod errors;
pub mod db;
pub mod producto;
pub mod tienda;
pub mod producto_tienda;
