pub mod auth;
pub mod health;
pub mod swagger;
pub mod workspaces;
