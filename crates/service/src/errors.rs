use thiserror::Error;

use models::producto::TipoProducto;

/// Failures raised by catalog services.
///
/// The first four are business outcomes a caller can act on; `Db` and
/// `Model` wrap store failures.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    InvalidType(String),
    #[error("{0}")]
    InvalidValue(String),
    #[error("{0}")]
    PreconditionFailed(String),
    #[error("validation error: {0}")]
    Validation(String),
    #[error("database error: {0}")]
    Db(String),
    #[error("model error: {0}")]
    Model(#[from] models::errors::ModelError),
}

impl ServiceError {
    pub fn producto_not_found() -> Self {
        Self::NotFound("the product with the given id was not found".into())
    }

    pub fn tienda_not_found() -> Self {
        Self::NotFound("the store with the given id was not found".into())
    }

    pub fn invalid_tipo() -> Self {
        Self::InvalidType(format!(
            "invalid product type, must be one of: {}",
            TipoProducto::allowed()
        ))
    }

    pub fn invalid_ciudad() -> Self {
        Self::InvalidValue("the city code must be exactly three characters long".into())
    }

    /// Stable numeric code for external mapping/logging
    pub fn code(&self) -> u16 {
        match self {
            ServiceError::NotFound(_) => 2001,
            ServiceError::InvalidType(_) => 2002,
            ServiceError::InvalidValue(_) => 2003,
            ServiceError::PreconditionFailed(_) => 2004,
            ServiceError::Validation(_) => 2005,
            ServiceError::Db(_) => 2100,
            ServiceError::Model(_) => 2101,
        }
    }
}

impl From<sea_orm::DbErr> for ServiceError {
    fn from(e: sea_orm::DbErr) -> Self {
        ServiceError::Db(e.to_string())
    }
}
