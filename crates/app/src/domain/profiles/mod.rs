//! Account Profiles
//!
//! The backend keeps one `profiles` row per created account. Profiles decide
//! whether a registered mobile still has to choose a password, and back the
//! roster's account badge.

pub mod errors;
mod repository;
pub mod service;

pub use errors::ProfilesServiceError;
pub use service::*;
