use sea_orm::{entity::prelude::*, Set, DatabaseConnection, ActiveModelTrait};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{crud, errors};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub role: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub role: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct UserPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub role: Option<String>,
}

pub fn validate_email(email: &str) -> Result<(), errors::ModelError> {
    crud::require_email("email", email)
}

pub fn validate_name(name: &str) -> Result<(), errors::ModelError> {
    crud::require_non_blank("name", name)
}

pub async fn find_all(db: &DatabaseConnection) -> Result<Vec<Model>, errors::ModelError> {
    crud::find_all::<Entity>(db).await
}

pub async fn find_by_id(db: &DatabaseConnection, id: Uuid) -> Result<Option<Model>, errors::ModelError> {
    crud::find_by_id::<Entity>(db, id).await
}

pub async fn insert(db: &DatabaseConnection, input: NewUser) -> Result<Model, errors::ModelError> {
    validate_name(&input.name)?;
    validate_email(&input.email)?;
    let role = match input.role {
        Some(r) => { crud::require_non_blank("role", &r)?; r }
        None => "customer".to_string(),
    };
    let am = ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(input.name),
        email: Set(input.email.trim().to_string()),
        phone: Set(input.phone),
        role: Set(role),
    };
    Ok(am.insert(db).await?)
}

pub async fn update_by_id(db: &DatabaseConnection, id: Uuid, patch: UserPatch) -> Result<Option<Model>, errors::ModelError> {
    let Some(existing) = find_by_id(db, id).await? else { return Ok(None) };
    let mut am: ActiveModel = existing.clone().into();
    if let Some(n) = patch.name { validate_name(&n)?; am.name = Set(n); }
    if let Some(e) = patch.email { validate_email(&e)?; am.email = Set(e.trim().to_string()); }
    if let Some(p) = patch.phone { am.phone = Set(Some(p)); }
    if let Some(r) = patch.role { crud::require_non_blank("role", &r)?; am.role = Set(r); }
    if !am.is_changed() {
        return Ok(Some(existing));
    }
    Ok(Some(am.update(db).await?))
}

pub async fn delete_by_id(db: &DatabaseConnection, id: Uuid) -> Result<Option<Model>, errors::ModelError> {
    crud::delete_by_id::<Entity>(db, id).await
}
