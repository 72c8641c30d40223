use axum::async_trait;
use axum::extract::{FromRequest, Request};
use axum::Json;
use serde::de::DeserializeOwned;
use uuid::Uuid;

use service::catalog::domain::{ProductoInput, Tienda, TiendaInput};
use service::errors::ServiceError;

use crate::errors::JsonApiError;

/// Boundary checks on a request body, run before any service call.
pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

fn required(field: &str, value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(format!("{field} should not be empty"));
    }
    Ok(())
}

impl Validate for ProductoInput {
    fn validate(&self) -> Result<(), String> {
        required("nombre", &self.nombre)?;
        required("precio", &self.precio)?;
        required("tipo", &self.tipo)
    }
}

impl Validate for TiendaInput {
    fn validate(&self) -> Result<(), String> {
        required("nombre", &self.nombre)?;
        required("ciudad", &self.ciudad)?;
        required("direccion", &self.direccion)
    }
}

impl Validate for Vec<Tienda> {
    fn validate(&self) -> Result<(), String> {
        for t in self {
            required("nombre", &t.nombre)?;
            required("ciudad", &t.ciudad)?;
            required("direccion", &t.direccion)?;
        }
        Ok(())
    }
}

/// JSON body that has been deserialized and passed [`Validate`].
/// Any failure is answered with 400.
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = JsonApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ServiceError::Validation(rejection.body_text()))?;
        value.validate().map_err(ServiceError::Validation)?;
        Ok(ValidatedJson(value))
    }
}

/// Parse a path segment as a record id. A segment that is not a UUID cannot
/// name any record, so it is reported with the entity's not-found error.
pub fn record_id(raw: &str, not_found: fn() -> ServiceError) -> Result<Uuid, JsonApiError> {
    Uuid::parse_str(raw).map_err(|_| JsonApiError::from(not_found()))
}
