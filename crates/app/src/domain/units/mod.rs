//! Units
//!
//! A unit's geometry comes from the static document; its editable details
//! live in the `unit_details` table and are merged on top.

pub mod data;
pub mod errors;
pub mod models;
pub mod overlay;
pub mod records;
mod repository;
pub mod service;
pub mod status;

pub use errors::UnitsServiceError;
pub use models::{Unit, UnitType};
pub use overlay::{OverlayError, UnitOverlay};
pub use service::*;
pub use status::BackendStatus;
