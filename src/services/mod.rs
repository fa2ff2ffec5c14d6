pub mod account_store;
pub mod auth_service;
pub mod workspace_service;

pub use account_store::*;
