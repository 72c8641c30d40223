use std::sync::Arc;

use tracing::{info, instrument};
use uuid::Uuid;

use super::domain::{NewTienda, Relations, Tienda, TiendaInput};
use super::repository::TiendaRepository;
use crate::errors::ServiceError;

pub struct TiendaService {
    repo: Arc<dyn TiendaRepository>,
}

/// City codes are exactly three characters, stored upper-cased.
fn normalize_ciudad(raw: &str) -> Result<String, ServiceError> {
    if raw.chars().count() != 3 {
        return Err(ServiceError::invalid_ciudad());
    }
    Ok(raw.to_uppercase())
}

impl TiendaService {
    pub fn new(repo: Arc<dyn TiendaRepository>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self))]
    pub async fn find_all(&self) -> Result<Vec<Tienda>, ServiceError> {
        self.repo.find_all(Relations::Load).await
    }

    #[instrument(skip(self), fields(tienda_id = %id))]
    pub async fn find_one(&self, id: Uuid) -> Result<Tienda, ServiceError> {
        self.repo
            .find_by_id(id, Relations::Load)
            .await?
            .ok_or_else(ServiceError::tienda_not_found)
    }

    #[instrument(skip(self, input), fields(nombre = %input.nombre))]
    pub async fn create(&self, input: TiendaInput) -> Result<Tienda, ServiceError> {
        let ciudad = normalize_ciudad(&input.ciudad)?;
        let created = self
            .repo
            .insert(NewTienda { nombre: input.nombre, ciudad, direccion: input.direccion })
            .await?;
        info!(service = "tienda", event = "created", tienda_id = %created.id, ciudad = %created.ciudad);
        Ok(created)
    }

    #[instrument(skip(self, input), fields(tienda_id = %id))]
    pub async fn update(&self, id: Uuid, input: TiendaInput) -> Result<Tienda, ServiceError> {
        let persisted = self
            .repo
            .find_by_id(id, Relations::Skip)
            .await?
            .ok_or_else(ServiceError::tienda_not_found)?;
        let ciudad = normalize_ciudad(&input.ciudad)?;
        let merged = Tienda { nombre: input.nombre, ciudad, direccion: input.direccion, ..persisted };
        let saved = self.repo.save(merged).await?;
        info!(service = "tienda", event = "updated", tienda_id = %saved.id);
        Ok(saved)
    }

    #[instrument(skip(self), fields(tienda_id = %id))]
    pub async fn delete(&self, id: Uuid) -> Result<(), ServiceError> {
        self.repo
            .find_by_id(id, Relations::Skip)
            .await?
            .ok_or_else(ServiceError::tienda_not_found)?;
        self.repo.remove(id).await?;
        info!(service = "tienda", event = "deleted", tienda_id = %id);
        Ok(())
    }
}
