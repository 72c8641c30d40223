use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use tracing::info;

use service::catalog::domain::{Tienda, TiendaInput};
use service::errors::ServiceError;

use crate::errors::JsonApiError;
use crate::extract::{record_id, ValidatedJson};
use crate::state::ServerState;

#[utoipa::path(
    get, path = "/tiendas", tag = "tiendas",
    responses((status = 200, description = "All stores with their products", body = [crate::openapi::TiendaDoc]))
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<Tienda>>, JsonApiError> {
    let tiendas = state.tiendas.find_all().await?;
    info!(count = tiendas.len(), "list tiendas");
    Ok(Json(tiendas))
}

#[utoipa::path(
    get, path = "/tiendas/{id}", tag = "tiendas",
    params(("id" = String, Path, description = "Store id")),
    responses(
        (status = 200, description = "Store with its products", body = crate::openapi::TiendaDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn get(State(state): State<ServerState>, Path(id): Path<String>) -> Result<Json<Tienda>, JsonApiError> {
    let id = record_id(&id, ServiceError::tienda_not_found)?;
    Ok(Json(state.tiendas.find_one(id).await?))
}

#[utoipa::path(
    post, path = "/tiendas", tag = "tiendas",
    request_body = crate::openapi::TiendaInputDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::TiendaDoc),
        (status = 400, description = "Bad Request", body = crate::openapi::ErrorDoc),
        (status = 422, description = "City code is not three characters", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    ValidatedJson(input): ValidatedJson<TiendaInput>,
) -> Result<(StatusCode, Json<Tienda>), JsonApiError> {
    let created = state.tiendas.create(input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    put, path = "/tiendas/{id}", tag = "tiendas",
    params(("id" = String, Path, description = "Store id")),
    request_body = crate::openapi::TiendaInputDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::TiendaDoc),
        (status = 400, description = "Bad Request", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc),
        (status = 422, description = "City code is not three characters", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    ValidatedJson(input): ValidatedJson<TiendaInput>,
) -> Result<Json<Tienda>, JsonApiError> {
    let id = record_id(&id, ServiceError::tienda_not_found)?;
    Ok(Json(state.tiendas.update(id, input).await?))
}

#[utoipa::path(
    delete, path = "/tiendas/{id}", tag = "tiendas",
    params(("id" = String, Path, description = "Store id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn delete(State(state): State<ServerState>, Path(id): Path<String>) -> Result<StatusCode, JsonApiError> {
    let id = record_id(&id, ServiceError::tienda_not_found)?;
    state.tiendas.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
