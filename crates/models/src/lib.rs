//! Persistence layer: one SeaORM entity per resource collection plus the
//! store operations (`find_all`, `find_by_id`, `insert`, `update_by_id`,
//! `delete_by_id`) the service layer builds on.

pub mod errors;
pub mod db;
pub mod crud;
pub mod product;
pub mod order;
pub mod user;
pub mod business;

#[cfg(test)]
mod tests;
