use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::ServiceError;

/// Persistence contract for a single resource collection.
///
/// `update_by_id` and `delete_by_id` return `None` when no document has the
/// given id; connectivity and query problems surface as `Err`.
#[async_trait]
pub trait CrudRepository: Send + Sync {
    type Record: Send + Sync + 'static;
    type NewRecord: Send + 'static;
    type Patch: Send + 'static;

    /// Singular name used in messages and logs, e.g. `"product"`.
    const RESOURCE: &'static str;

    async fn find_all(&self) -> Result<Vec<Self::Record>, ServiceError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Self::Record>, ServiceError>;
    async fn create(&self, input: Self::NewRecord) -> Result<Self::Record, ServiceError>;
    async fn update_by_id(&self, id: Uuid, patch: Self::Patch) -> Result<Option<Self::Record>, ServiceError>;
    async fn delete_by_id(&self, id: Uuid) -> Result<Option<Self::Record>, ServiceError>;
}

/// In-memory product repository for tests, enabled by the `test-utils` feature.
#[cfg(any(test, feature = "test-utils"))]
pub mod mock {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Mutex;

    use models::product::{Model, NewProduct, ProductPatch};

    #[derive(Default)]
    pub struct MockProductRepository {
        items: Mutex<BTreeMap<Uuid, Model>>,
        offline: AtomicBool,
    }

    impl MockProductRepository {
        /// Make every subsequent call fail as if the store were unreachable.
        pub fn go_offline(&self) {
            self.offline.store(true, Ordering::SeqCst);
        }

        fn check(&self) -> Result<(), ServiceError> {
            if self.offline.load(Ordering::SeqCst) {
                return Err(ServiceError::Db("connection refused".into()));
            }
            Ok(())
        }

        fn items(&self) -> std::sync::MutexGuard<'_, BTreeMap<Uuid, Model>> {
            // A poisoned lock only means another test thread panicked.
            self.items.lock().unwrap_or_else(|p| p.into_inner())
        }
    }

    #[async_trait]
    impl CrudRepository for MockProductRepository {
        type Record = Model;
        type NewRecord = NewProduct;
        type Patch = ProductPatch;
        const RESOURCE: &'static str = "product";

        async fn find_all(&self) -> Result<Vec<Model>, ServiceError> {
            self.check()?;
            Ok(self.items().values().cloned().collect())
        }

        async fn find_by_id(&self, id: Uuid) -> Result<Option<Model>, ServiceError> {
            self.check()?;
            Ok(self.items().get(&id).cloned())
        }

        async fn create(&self, input: NewProduct) -> Result<Model, ServiceError> {
            self.check()?;
            models::product::validate_name(&input.name)?;
            models::product::validate_price(input.price)?;
            let stock = input.stock.unwrap_or(0);
            models::product::validate_stock(stock)?;
            let m = Model {
                id: Uuid::new_v4(),
                name: input.name,
                price: input.price,
                description: input.description,
                category: input.category,
                stock,
            };
            self.items().insert(m.id, m.clone());
            Ok(m)
        }

        async fn update_by_id(&self, id: Uuid, patch: ProductPatch) -> Result<Option<Model>, ServiceError> {
            self.check()?;
            if let Some(n) = &patch.name { models::product::validate_name(n)?; }
            if let Some(p) = patch.price { models::product::validate_price(p)?; }
            if let Some(s) = patch.stock { models::product::validate_stock(s)?; }
            let mut items = self.items();
            let Some(m) = items.get_mut(&id) else { return Ok(None) };
            if let Some(n) = patch.name { m.name = n; }
            if let Some(p) = patch.price { m.price = p; }
            if let Some(d) = patch.description { m.description = Some(d); }
            if let Some(c) = patch.category { m.category = Some(c); }
            if let Some(s) = patch.stock { m.stock = s; }
            Ok(Some(m.clone()))
        }

        async fn delete_by_id(&self, id: Uuid) -> Result<Option<Model>, ServiceError> {
            self.check()?;
            Ok(self.items().remove(&id))
        }
    }
}
