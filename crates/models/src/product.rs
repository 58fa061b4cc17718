use sea_orm::{entity::prelude::*, Set, DatabaseConnection, ActiveModelTrait};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{crud, errors};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub name: String,
    pub price: f64,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub category: Option<String>,
    pub stock: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Payload accepted when creating a product.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
    pub description: Option<String>,
    pub category: Option<String>,
    pub stock: Option<i32>,
}

/// Partial update; absent fields keep their stored value.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub stock: Option<i32>,
}

pub fn validate_name(name: &str) -> Result<(), errors::ModelError> {
    crud::require_non_blank("name", name)
}

pub fn validate_price(price: f64) -> Result<(), errors::ModelError> {
    if !price.is_finite() || price < 0.0 {
        return Err(errors::ModelError::Validation("price must be a non-negative number".into()));
    }
    Ok(())
}

pub fn validate_stock(stock: i32) -> Result<(), errors::ModelError> {
    if stock < 0 {
        return Err(errors::ModelError::Validation("stock must be >= 0".into()));
    }
    Ok(())
}

pub async fn find_all(db: &DatabaseConnection) -> Result<Vec<Model>, errors::ModelError> {
    crud::find_all::<Entity>(db).await
}

pub async fn find_by_id(db: &DatabaseConnection, id: Uuid) -> Result<Option<Model>, errors::ModelError> {
    crud::find_by_id::<Entity>(db, id).await
}

pub async fn insert(db: &DatabaseConnection, input: NewProduct) -> Result<Model, errors::ModelError> {
    validate_name(&input.name)?;
    validate_price(input.price)?;
    let stock = input.stock.unwrap_or(0);
    validate_stock(stock)?;

    let am = ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(input.name),
        price: Set(input.price),
        description: Set(input.description),
        category: Set(input.category),
        stock: Set(stock),
    };
    Ok(am.insert(db).await?)
}

pub async fn update_by_id(db: &DatabaseConnection, id: Uuid, patch: ProductPatch) -> Result<Option<Model>, errors::ModelError> {
    let Some(existing) = find_by_id(db, id).await? else { return Ok(None) };
    let mut am: ActiveModel = existing.clone().into();
    if let Some(name) = patch.name { validate_name(&name)?; am.name = Set(name); }
    if let Some(price) = patch.price { validate_price(price)?; am.price = Set(price); }
    if let Some(d) = patch.description { am.description = Set(Some(d)); }
    if let Some(c) = patch.category { am.category = Set(Some(c)); }
    if let Some(s) = patch.stock { validate_stock(s)?; am.stock = Set(s); }
    if !am.is_changed() {
        return Ok(Some(existing));
    }
    Ok(Some(am.update(db).await?))
}

pub async fn delete_by_id(db: &DatabaseConnection, id: Uuid) -> Result<Option<Model>, errors::ModelError> {
    crud::delete_by_id::<Entity>(db, id).await
}
