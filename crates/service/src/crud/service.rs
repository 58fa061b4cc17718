use std::sync::Arc;

use tracing::{debug, instrument};
use uuid::Uuid;

use crate::crud::repository::CrudRepository;
use crate::errors::ServiceError;

/// Application service for one resource.
///
/// Ids arrive as opaque strings; anything that does not parse cannot name
/// a stored document and is reported as not found.
pub struct CrudService<R: CrudRepository> {
    repo: Arc<R>,
}

impl<R: CrudRepository> CrudService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    fn parse_id(id: &str) -> Result<Uuid, ServiceError> {
        Uuid::parse_str(id.trim()).map_err(|_| ServiceError::not_found(R::RESOURCE, id))
    }

    #[instrument(skip(self), fields(resource = R::RESOURCE))]
    pub async fn list(&self) -> Result<Vec<R::Record>, ServiceError> {
        let rows = self.repo.find_all().await?;
        debug!(count = rows.len(), "listed");
        Ok(rows)
    }

    #[instrument(skip(self), fields(resource = R::RESOURCE))]
    pub async fn get(&self, id: &str) -> Result<R::Record, ServiceError> {
        let uid = Self::parse_id(id)?;
        self.repo
            .find_by_id(uid)
            .await?
            .ok_or_else(|| ServiceError::not_found(R::RESOURCE, id))
    }

    #[instrument(skip(self, input), fields(resource = R::RESOURCE))]
    pub async fn create(&self, input: R::NewRecord) -> Result<R::Record, ServiceError> {
        self.repo.create(input).await
    }

    #[instrument(skip(self, patch), fields(resource = R::RESOURCE))]
    pub async fn update(&self, id: &str, patch: R::Patch) -> Result<R::Record, ServiceError> {
        let uid = Self::parse_id(id)?;
        self.repo
            .update_by_id(uid, patch)
            .await?
            .ok_or_else(|| ServiceError::not_found(R::RESOURCE, id))
    }

    /// Hard delete; the removed record is returned for logging by callers.
    #[instrument(skip(self), fields(resource = R::RESOURCE))]
    pub async fn delete(&self, id: &str) -> Result<R::Record, ServiceError> {
        let uid = Self::parse_id(id)?;
        self.repo
            .delete_by_id(uid)
            .await?
            .ok_or_else(|| ServiceError::not_found(R::RESOURCE, id))
    }
}
