use serde::{Deserialize, Serialize};
use uuid::Uuid;

use models::producto::TipoProducto;
use models::{producto, tienda};

use crate::errors::ServiceError;

/// Whether a read should also load the other side of the many-to-many link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relations {
    Load,
    Skip,
}

/// Product as seen by callers.
///
/// `tiendas` is `None` when the read skipped relations; a save of a product
/// with `None` leaves its links untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Producto {
    pub id: Uuid,
    pub nombre: String,
    pub precio: String,
    pub tipo: TipoProducto,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tiendas: Option<Vec<Tienda>>,
}

/// Store as seen by callers. `productos` is the inverse side, read only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tienda {
    pub id: Uuid,
    pub nombre: String,
    pub ciudad: String,
    pub direccion: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub productos: Option<Vec<Producto>>,
}

/// Incoming product fields; `tipo` is checked by the service, not by serde.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductoInput {
    pub nombre: String,
    pub precio: String,
    pub tipo: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TiendaInput {
    pub nombre: String,
    pub ciudad: String,
    pub direccion: String,
}

/// Validated product ready for insertion; the store assigns the id.
#[derive(Debug, Clone)]
pub struct NewProducto {
    pub nombre: String,
    pub precio: String,
    pub tipo: TipoProducto,
}

#[derive(Debug, Clone)]
pub struct NewTienda {
    pub nombre: String,
    pub ciudad: String,
    pub direccion: String,
}

impl Producto {
    pub fn from_model(m: producto::Model, tiendas: Option<Vec<Tienda>>) -> Result<Self, ServiceError> {
        let tipo = m.parsed_tipo()?;
        Ok(Producto { id: m.id, nombre: m.nombre, precio: m.precio, tipo, tiendas })
    }

    /// Linked store with `tienda_id`, if relations were loaded and it is linked.
    pub fn tienda(&self, tienda_id: Uuid) -> Option<&Tienda> {
        self.tiendas.as_deref().unwrap_or_default().iter().find(|t| t.id == tienda_id)
    }
}

impl Tienda {
    pub fn from_model(m: tienda::Model, productos: Option<Vec<Producto>>) -> Self {
        Tienda { id: m.id, nombre: m.nombre, ciudad: m.ciudad, direccion: m.direccion, productos }
    }

    /// Copy without the inverse side, as embedded in a product's store list.
    pub fn detached(&self) -> Tienda {
        Tienda { productos: None, ..self.clone() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tienda(nombre: &str) -> Tienda {
        Tienda {
            id: Uuid::new_v4(),
            nombre: nombre.into(),
            ciudad: "BOG".into(),
            direccion: "Main 1".into(),
            productos: None,
        }
    }

    #[test]
    fn unloaded_relations_are_omitted_from_json() {
        let p = Producto {
            id: Uuid::new_v4(),
            nombre: "Milk".into(),
            precio: "3.50".into(),
            tipo: TipoProducto::Perecedero,
            tiendas: None,
        };
        let json = serde_json::to_value(&p).unwrap();
        assert!(json.get("tiendas").is_none());
        assert_eq!(json["tipo"], "PERECEDERO");
    }

    #[test]
    fn loaded_empty_relations_serialize_as_empty_array() {
        let p = Producto {
            id: Uuid::new_v4(),
            nombre: "Milk".into(),
            precio: "3.50".into(),
            tipo: TipoProducto::NoPerecedero,
            tiendas: Some(vec![]),
        };
        let json = serde_json::to_value(&p).unwrap();
        assert_eq!(json["tiendas"], serde_json::json!([]));
    }

    #[test]
    fn tienda_lookup_by_id() {
        let a = tienda("A");
        let b = tienda("B");
        let p = Producto {
            id: Uuid::new_v4(),
            nombre: "Milk".into(),
            precio: "1".into(),
            tipo: TipoProducto::Perecedero,
            tiendas: Some(vec![a.clone(), b.clone()]),
        };
        assert_eq!(p.tienda(b.id).map(|t| t.nombre.as_str()), Some("B"));
        assert!(p.tienda(Uuid::new_v4()).is_none());
    }

    #[test]
    fn from_model_rejects_unknown_stored_tipo() {
        let m = producto::Model {
            id: Uuid::new_v4(),
            nombre: "x".into(),
            precio: "1".into(),
            tipo: "OTRO".into(),
        };
        assert!(Producto::from_model(m, None).is_err());
    }
}
