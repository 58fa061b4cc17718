use sea_orm::{entity::prelude::*, Set, DatabaseConnection, ActiveModelTrait};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{crud, errors};

pub const STATUSES: [&str; 5] = ["pending", "paid", "shipped", "delivered", "cancelled"];

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    #[serde(rename = "_id")]
    pub id: Uuid,
    /// Not a foreign key: the product may have been deleted since.
    pub product_id: Uuid,
    pub user_id: Option<Uuid>,
    pub quantity: i32,
    pub status: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub shipping_address: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct NewOrder {
    pub product_id: Uuid,
    pub user_id: Option<Uuid>,
    pub quantity: i32,
    pub status: Option<String>,
    pub shipping_address: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct OrderPatch {
    pub product_id: Option<Uuid>,
    pub user_id: Option<Uuid>,
    pub quantity: Option<i32>,
    pub status: Option<String>,
    pub shipping_address: Option<String>,
}

pub fn validate_quantity(q: i32) -> Result<(), errors::ModelError> {
    if q < 1 {
        return Err(errors::ModelError::Validation("quantity must be >= 1".into()));
    }
    Ok(())
}

/// Lower-cases the status and checks it against [`STATUSES`].
pub fn validate_status(s: &str) -> Result<String, errors::ModelError> {
    let lower = s.trim().to_ascii_lowercase();
    if !STATUSES.contains(&lower.as_str()) {
        return Err(errors::ModelError::Validation(format!("invalid order status: {s}")));
    }
    Ok(lower)
}

pub async fn find_all(db: &DatabaseConnection) -> Result<Vec<Model>, errors::ModelError> {
    crud::find_all::<Entity>(db).await
}

pub async fn find_by_id(db: &DatabaseConnection, id: Uuid) -> Result<Option<Model>, errors::ModelError> {
    crud::find_by_id::<Entity>(db, id).await
}

pub async fn insert(db: &DatabaseConnection, input: NewOrder) -> Result<Model, errors::ModelError> {
    validate_quantity(input.quantity)?;
    let status = match input.status.as_deref() {
        Some(s) => validate_status(s)?,
        None => STATUSES[0].to_string(),
    };

    let am = ActiveModel {
        id: Set(Uuid::new_v4()),
        product_id: Set(input.product_id),
        user_id: Set(input.user_id),
        quantity: Set(input.quantity),
        status: Set(status),
        shipping_address: Set(input.shipping_address),
    };
    Ok(am.insert(db).await?)
}

pub async fn update_by_id(db: &DatabaseConnection, id: Uuid, patch: OrderPatch) -> Result<Option<Model>, errors::ModelError> {
    let Some(existing) = find_by_id(db, id).await? else { return Ok(None) };
    let mut am: ActiveModel = existing.clone().into();
    if let Some(p) = patch.product_id { am.product_id = Set(p); }
    if let Some(u) = patch.user_id { am.user_id = Set(Some(u)); }
    if let Some(q) = patch.quantity { validate_quantity(q)?; am.quantity = Set(q); }
    if let Some(s) = patch.status { am.status = Set(validate_status(&s)?); }
    if let Some(a) = patch.shipping_address { am.shipping_address = Set(Some(a)); }
    if !am.is_changed() {
        return Ok(Some(existing));
    }
    Ok(Some(am.update(db).await?))
}

pub async fn delete_by_id(db: &DatabaseConnection, id: Uuid) -> Result<Option<Model>, errors::ModelError> {
    crud::delete_by_id::<Entity>(db, id).await
}
