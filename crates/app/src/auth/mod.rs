//! Authentication

pub mod admin;
mod errors;
mod models;
mod service;

pub use admin::{AdminGate, AdminLoginError};
pub use errors::*;
pub use models::*;
pub use service::*;
