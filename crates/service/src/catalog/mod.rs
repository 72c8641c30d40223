//! Product and store catalog: domain types, repository traits with their
//! SeaORM and in-memory implementations, and the three services on top.

pub mod domain;
pub mod producto_service;
pub mod producto_tienda_service;
pub mod repo;
pub mod repository;
pub mod tienda_service;

pub use producto_service::ProductoService;
pub use producto_tienda_service::ProductoTiendaService;
pub use tienda_service::TiendaService;
