//! Entity-agnostic store operations shared by every collection.

use sea_orm::{DatabaseConnection, EntityTrait, PrimaryKeyTrait};
use uuid::Uuid;

use crate::errors::ModelError;

pub async fn find_all<E>(db: &DatabaseConnection) -> Result<Vec<E::Model>, ModelError>
where
    E: EntityTrait,
{
    Ok(E::find().all(db).await?)
}

pub async fn find_by_id<E>(db: &DatabaseConnection, id: Uuid) -> Result<Option<E::Model>, ModelError>
where
    E: EntityTrait,
    Uuid: Into<<E::PrimaryKey as PrimaryKeyTrait>::ValueType>,
{
    Ok(E::find_by_id(id).one(db).await?)
}

/// Hard delete; hands back the removed document, or `None` if nothing matched.
pub async fn delete_by_id<E>(db: &DatabaseConnection, id: Uuid) -> Result<Option<E::Model>, ModelError>
where
    E: EntityTrait,
    Uuid: Into<<E::PrimaryKey as PrimaryKeyTrait>::ValueType>,
{
    let Some(found) = find_by_id::<E>(db, id).await? else { return Ok(None) };
    let res = E::delete_by_id(id).exec(db).await?;
    if res.rows_affected == 0 {
        return Ok(None);
    }
    Ok(Some(found))
}

pub(crate) fn require_non_blank(field: &str, value: &str) -> Result<(), ModelError> {
    if value.trim().is_empty() {
        return Err(ModelError::Validation(format!("{field} required")));
    }
    Ok(())
}

pub(crate) fn require_email(field: &str, value: &str) -> Result<(), ModelError> {
    let trimmed = value.trim();
    match trimmed.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
        _ => Err(ModelError::Validation(format!("invalid {field}"))),
    }
}
