//! Service layer for the product/store catalog.
//! - Business rules live here, independent of the web framework.
//! - Storage is reached only through the repository traits in `catalog::repository`.

pub mod catalog;
pub mod errors;
#[cfg(test)]
pub mod test_support;
