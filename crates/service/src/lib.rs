//! Service layer providing business-oriented CRUD operations on top of models.
//! - Separates business logic from data access.
//! - Reuses validation and entity definitions in `models` crate.
//! - Classifies every failure as not found, invalid input or store failure.

pub mod errors;
pub mod crud;
pub mod db;
pub mod services;
#[cfg(test)]
pub mod test_support;

pub use crud::{CrudRepository, CrudService};
pub use services::Services;
