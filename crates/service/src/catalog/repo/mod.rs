//! Repository implementations: SeaORM over PostgreSQL, and process-local maps.

pub mod memory;
pub mod seaorm;

use super::domain::Tienda;

/// Keep the first occurrence of each store id, stripped of its inverse side.
pub(crate) fn dedup_by_id(tiendas: Vec<Tienda>) -> Vec<Tienda> {
    let mut out: Vec<Tienda> = Vec::with_capacity(tiendas.len());
    for t in tiendas {
        if !out.iter().any(|o| o.id == t.id) {
            out.push(t.detached());
        }
    }
    out
}
