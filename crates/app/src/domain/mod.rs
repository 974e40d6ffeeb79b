//! Bayport Domain Concerns

pub mod building;
pub mod geometry;
pub mod media;
pub mod mobile;
pub mod modal;
pub mod profiles;
pub mod roster;
pub mod tenants;
pub mod units;
