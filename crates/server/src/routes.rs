use axum::{routing::get, Json, Router};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;

use common::types::Health;

use crate::openapi::ApiDoc;
use crate::state::ServerState;

pub mod producto_tiendas;
pub mod productos;
pub mod tiendas;

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Build the full application router over `state`.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let public = Router::new()
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(openapi_json));

    // Path parameters share one name per position, as the router requires.
    let catalog = Router::new()
        .route("/productos", get(productos::list).post(productos::create))
        .route(
            "/productos/:id",
            get(productos::get).put(productos::update).delete(productos::delete),
        )
        .route(
            "/productos/:id/tiendas",
            get(producto_tiendas::list).put(producto_tiendas::replace),
        )
        .route(
            "/productos/:id/tiendas/:tienda_id",
            get(producto_tiendas::get)
                .post(producto_tiendas::add)
                .delete(producto_tiendas::delete),
        )
        .route("/tiendas", get(tiendas::list).post(tiendas::create))
        .route(
            "/tiendas/:id",
            get(tiendas::get).put(tiendas::update).delete(tiendas::delete),
        )
        .with_state(state);

    public
        .merge(catalog)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
