//! Generic CRUD contract: a repository trait over one collection and the
//! service that wraps it with existence checks.

pub mod repository;
pub mod service;

pub use repository::CrudRepository;
pub use service::CrudService;
