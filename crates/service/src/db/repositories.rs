use async_trait::async_trait;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::crud::CrudRepository;
use crate::errors::ServiceError;

/// Implements [`CrudRepository`] for a collection whose `models` module
/// exposes `find_all`, `find_by_id`, `insert`, `update_by_id` and
/// `delete_by_id`.
macro_rules! seaorm_repository {
    ($name:ident, $module:ident, $resource:literal, $new:ident, $patch:ident) => {
        #[derive(Clone)]
        pub struct $name {
            pub db: DatabaseConnection,
        }

        impl $name {
            pub fn new(db: DatabaseConnection) -> Self { Self { db } }
        }

        #[async_trait]
        impl CrudRepository for $name {
            type Record = models::$module::Model;
            type NewRecord = models::$module::$new;
            type Patch = models::$module::$patch;
            const RESOURCE: &'static str = $resource;

            async fn find_all(&self) -> Result<Vec<Self::Record>, ServiceError> {
                Ok(models::$module::find_all(&self.db).await?)
            }

            async fn find_by_id(&self, id: Uuid) -> Result<Option<Self::Record>, ServiceError> {
                Ok(models::$module::find_by_id(&self.db, id).await?)
            }

            async fn create(&self, input: Self::NewRecord) -> Result<Self::Record, ServiceError> {
                Ok(models::$module::insert(&self.db, input).await?)
            }

            async fn update_by_id(&self, id: Uuid, patch: Self::Patch) -> Result<Option<Self::Record>, ServiceError> {
                Ok(models::$module::update_by_id(&self.db, id, patch).await?)
            }

            async fn delete_by_id(&self, id: Uuid) -> Result<Option<Self::Record>, ServiceError> {
                Ok(models::$module::delete_by_id(&self.db, id).await?)
            }
        }
    };
}

seaorm_repository!(SeaOrmProductRepository, product, "product", NewProduct, ProductPatch);
seaorm_repository!(SeaOrmOrderRepository, order, "order", NewOrder, OrderPatch);
seaorm_repository!(SeaOrmUserRepository, user, "user", NewUser, UserPatch);
seaorm_repository!(SeaOrmBusinessRepository, business, "business", NewBusiness, BusinessPatch);
