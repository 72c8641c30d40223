use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use tracing::info;

use service::catalog::domain::{Producto, ProductoInput};
use service::errors::ServiceError;

use crate::errors::JsonApiError;
use crate::extract::{record_id, ValidatedJson};
use crate::state::ServerState;

#[utoipa::path(
    get, path = "/productos", tag = "productos",
    responses((status = 200, description = "All products with their stores", body = [crate::openapi::ProductoDoc]))
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<Producto>>, JsonApiError> {
    let productos = state.productos.find_all().await?;
    info!(count = productos.len(), "list productos");
    Ok(Json(productos))
}

#[utoipa::path(
    get, path = "/productos/{id}", tag = "productos",
    params(("id" = String, Path, description = "Product id")),
    responses(
        (status = 200, description = "Product with its stores", body = crate::openapi::ProductoDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn get(State(state): State<ServerState>, Path(id): Path<String>) -> Result<Json<Producto>, JsonApiError> {
    let id = record_id(&id, ServiceError::producto_not_found)?;
    Ok(Json(state.productos.find_one(id).await?))
}

#[utoipa::path(
    post, path = "/productos", tag = "productos",
    request_body = crate::openapi::ProductoInputDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::ProductoDoc),
        (status = 400, description = "Bad Request", body = crate::openapi::ErrorDoc),
        (status = 422, description = "Invalid product type", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    ValidatedJson(input): ValidatedJson<ProductoInput>,
) -> Result<(StatusCode, Json<Producto>), JsonApiError> {
    let created = state.productos.create(input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    put, path = "/productos/{id}", tag = "productos",
    params(("id" = String, Path, description = "Product id")),
    request_body = crate::openapi::ProductoInputDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::ProductoDoc),
        (status = 400, description = "Bad Request", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc),
        (status = 422, description = "Invalid product type", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    ValidatedJson(input): ValidatedJson<ProductoInput>,
) -> Result<Json<Producto>, JsonApiError> {
    let id = record_id(&id, ServiceError::producto_not_found)?;
    Ok(Json(state.productos.update(id, input).await?))
}

#[utoipa::path(
    delete, path = "/productos/{id}", tag = "productos",
    params(("id" = String, Path, description = "Product id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn delete(State(state): State<ServerState>, Path(id): Path<String>) -> Result<StatusCode, JsonApiError> {
    let id = record_id(&id, ServiceError::producto_not_found)?;
    state.productos.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
