//! Shared plumbing for the workspace: response types and logging setup.

pub mod types;
pub mod utils;
