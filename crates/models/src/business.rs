use sea_orm::{entity::prelude::*, Set, DatabaseConnection, ActiveModelTrait};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{crud, errors};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "businesses")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub address: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct NewBusiness {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub description: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct BusinessPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub description: Option<String>,
}

pub async fn find_all(db: &DatabaseConnection) -> Result<Vec<Model>, errors::ModelError> {
    crud::find_all::<Entity>(db).await
}

pub async fn find_by_id(db: &DatabaseConnection, id: Uuid) -> Result<Option<Model>, errors::ModelError> {
    crud::find_by_id::<Entity>(db, id).await
}

pub async fn insert(db: &DatabaseConnection, input: NewBusiness) -> Result<Model, errors::ModelError> {
    crud::require_non_blank("name", &input.name)?;
    if let Some(e) = input.email.as_deref() { crud::require_email("email", e)?; }
    let am = ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(input.name),
        email: Set(input.email),
        phone: Set(input.phone),
        address: Set(input.address),
        description: Set(input.description),
    };
    Ok(am.insert(db).await?)
}

pub async fn update_by_id(db: &DatabaseConnection, id: Uuid, patch: BusinessPatch) -> Result<Option<Model>, errors::ModelError> {
    let Some(existing) = find_by_id(db, id).await? else { return Ok(None) };
    let mut am: ActiveModel = existing.clone().into();
    if let Some(n) = patch.name { crud::require_non_blank("name", &n)?; am.name = Set(n); }
    if let Some(e) = patch.email { crud::require_email("email", &e)?; am.email = Set(Some(e)); }
    if let Some(p) = patch.phone { am.phone = Set(Some(p)); }
    if let Some(a) = patch.address { am.address = Set(Some(a)); }
    if let Some(d) = patch.description { am.description = Set(Some(d)); }
    if !am.is_changed() {
        return Ok(Some(existing));
    }
    Ok(Some(am.update(db).await?))
}

pub async fn delete_by_id(db: &DatabaseConnection, id: Uuid) -> Result<Option<Model>, errors::ModelError> {
    crud::delete_by_id::<Entity>(db, id).await
}
