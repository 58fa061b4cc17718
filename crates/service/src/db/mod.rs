//! SeaORM-backed repositories, one per collection.

pub mod repositories;

pub use repositories::{
    SeaOrmBusinessRepository, SeaOrmOrderRepository, SeaOrmProductRepository, SeaOrmUserRepository,
};
