//! Concrete per-resource services and the bundle handed to the transport layer.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::crud::CrudService;
use crate::db::{SeaOrmBusinessRepository, SeaOrmOrderRepository, SeaOrmProductRepository, SeaOrmUserRepository};

pub type ProductService = CrudService<SeaOrmProductRepository>;
pub type OrderService = CrudService<SeaOrmOrderRepository>;
pub type UserService = CrudService<SeaOrmUserRepository>;
pub type BusinessService = CrudService<SeaOrmBusinessRepository>;

#[derive(Clone)]
pub struct Services {
    pub products: Arc<ProductService>,
    pub orders: Arc<OrderService>,
    pub users: Arc<UserService>,
    pub business: Arc<BusinessService>,
}

impl Services {
    /// Wire every resource service to the same connection pool.
    pub fn new(db: &DatabaseConnection) -> Self {
        Self {
            products: Arc::new(CrudService::new(Arc::new(SeaOrmProductRepository::new(db.clone())))),
            orders: Arc::new(CrudService::new(Arc::new(SeaOrmOrderRepository::new(db.clone())))),
            users: Arc::new(CrudService::new(Arc::new(SeaOrmUserRepository::new(db.clone())))),
            business: Arc::new(CrudService::new(Arc::new(SeaOrmBusinessRepository::new(db.clone())))),
        }
    }
}
