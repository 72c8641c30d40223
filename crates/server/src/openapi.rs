use utoipa::OpenApi;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(serde::Serialize, ToSchema)]
pub struct ErrorDoc {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub error: String,
    pub message: Option<String>,
}

/// `tipo` is one of `PERECEDERO`, `NO_PERECEDERO`.
#[derive(ToSchema)]
pub struct ProductoInputDoc { pub nombre: String, pub precio: String, pub tipo: String }

/// `ciudad` is three characters; it is stored upper-cased.
#[derive(ToSchema)]
pub struct TiendaInputDoc { pub nombre: String, pub ciudad: String, pub direccion: String }

#[derive(ToSchema)]
pub struct ProductoDoc {
    pub id: Uuid,
    pub nombre: String,
    pub precio: String,
    pub tipo: String,
    pub tiendas: Option<Vec<TiendaDoc>>,
}

#[derive(ToSchema)]
pub struct TiendaDoc {
    pub id: Uuid,
    pub nombre: String,
    pub ciudad: String,
    pub direccion: String,
    pub productos: Option<Vec<ProductoDoc>>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::productos::list,
        crate::routes::productos::get,
        crate::routes::productos::create,
        crate::routes::productos::update,
        crate::routes::productos::delete,
        crate::routes::tiendas::list,
        crate::routes::tiendas::get,
        crate::routes::tiendas::create,
        crate::routes::tiendas::update,
        crate::routes::tiendas::delete,
        crate::routes::producto_tiendas::add,
        crate::routes::producto_tiendas::get,
        crate::routes::producto_tiendas::list,
        crate::routes::producto_tiendas::replace,
        crate::routes::producto_tiendas::delete,
    ),
    components(
        schemas(
            HealthResponse,
            ErrorDoc,
            ProductoInputDoc,
            TiendaInputDoc,
            ProductoDoc,
            TiendaDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "productos"),
        (name = "tiendas"),
        (name = "producto-tiendas")
    )
)]
pub struct ApiDoc;
