use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use uuid::Uuid;

use service::catalog::domain::{Producto, Tienda};
use service::errors::ServiceError;

use crate::errors::JsonApiError;
use crate::extract::{record_id, ValidatedJson};
use crate::state::ServerState;

fn ids(producto_id: &str, tienda_id: &str) -> Result<(Uuid, Uuid), JsonApiError> {
    let tienda_id = record_id(tienda_id, ServiceError::tienda_not_found)?;
    let producto_id = record_id(producto_id, ServiceError::producto_not_found)?;
    Ok((producto_id, tienda_id))
}

#[utoipa::path(
    post, path = "/productos/{productoId}/tiendas/{tiendaId}", tag = "producto-tiendas",
    params(
        ("productoId" = String, Path, description = "Product id"),
        ("tiendaId" = String, Path, description = "Store id")
    ),
    responses(
        (status = 201, description = "Linked; product with all its stores", body = crate::openapi::ProductoDoc),
        (status = 404, description = "Product or store not found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn add(
    State(state): State<ServerState>,
    Path((producto_id, tienda_id)): Path<(String, String)>,
) -> Result<(StatusCode, Json<Producto>), JsonApiError> {
    let (producto_id, tienda_id) = ids(&producto_id, &tienda_id)?;
    let producto = state.producto_tiendas.add_store_to_product(producto_id, tienda_id).await?;
    Ok((StatusCode::CREATED, Json(producto)))
}

#[utoipa::path(
    get, path = "/productos/{productoId}/tiendas/{tiendaId}", tag = "producto-tiendas",
    params(
        ("productoId" = String, Path, description = "Product id"),
        ("tiendaId" = String, Path, description = "Store id")
    ),
    responses(
        (status = 200, description = "Linked store", body = crate::openapi::TiendaDoc),
        (status = 404, description = "Product or store not found", body = crate::openapi::ErrorDoc),
        (status = 412, description = "Store not linked to the product", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn get(
    State(state): State<ServerState>,
    Path((producto_id, tienda_id)): Path<(String, String)>,
) -> Result<Json<Tienda>, JsonApiError> {
    let (producto_id, tienda_id) = ids(&producto_id, &tienda_id)?;
    Ok(Json(state.producto_tiendas.find_store_from_product(producto_id, tienda_id).await?))
}

#[utoipa::path(
    get, path = "/productos/{productoId}/tiendas", tag = "producto-tiendas",
    params(("productoId" = String, Path, description = "Product id")),
    responses(
        (status = 200, description = "Stores linked to the product", body = [crate::openapi::TiendaDoc]),
        (status = 404, description = "Product not found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn list(
    State(state): State<ServerState>,
    Path(producto_id): Path<String>,
) -> Result<Json<Vec<Tienda>>, JsonApiError> {
    let producto_id = record_id(&producto_id, ServiceError::producto_not_found)?;
    Ok(Json(state.producto_tiendas.find_stores_from_product(producto_id).await?))
}

#[utoipa::path(
    put, path = "/productos/{productoId}/tiendas", tag = "producto-tiendas",
    params(("productoId" = String, Path, description = "Product id")),
    request_body = [crate::openapi::TiendaDoc],
    responses(
        (status = 200, description = "Store set replaced", body = crate::openapi::ProductoDoc),
        (status = 400, description = "Bad Request", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Product or a store not found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn replace(
    State(state): State<ServerState>,
    Path(producto_id): Path<String>,
    ValidatedJson(tiendas): ValidatedJson<Vec<Tienda>>,
) -> Result<Json<Producto>, JsonApiError> {
    let producto_id = record_id(&producto_id, ServiceError::producto_not_found)?;
    Ok(Json(state.producto_tiendas.update_stores_from_product(producto_id, tiendas).await?))
}

#[utoipa::path(
    delete, path = "/productos/{productoId}/tiendas/{tiendaId}", tag = "producto-tiendas",
    params(
        ("productoId" = String, Path, description = "Product id"),
        ("tiendaId" = String, Path, description = "Store id")
    ),
    responses(
        (status = 204, description = "Unlinked"),
        (status = 404, description = "Product or store not found", body = crate::openapi::ErrorDoc),
        (status = 412, description = "Store not linked to the product", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn delete(
    State(state): State<ServerState>,
    Path((producto_id, tienda_id)): Path<(String, String)>,
) -> Result<StatusCode, JsonApiError> {
    let (producto_id, tienda_id) = ids(&producto_id, &tienda_id)?;
    state.producto_tiendas.delete_store_from_product(producto_id, tienda_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
