//! Unit Modal
//!
//! The claim/login/edit flow for a single unit, as an explicit state machine.
//! Every step is driven by one request carrying the unit id, and any pending
//! mobile or edit draft, so no flow state is held between requests.

pub mod draft;
pub mod errors;
pub mod service;
pub mod state;

pub use draft::UnitDraft;
pub use errors::ModalError;
pub use service::{SessionChange, Step, UnitModal};
pub use state::{ModalState, ModalTag};

/// Answer for tenant-gated actions when no backend is configured.
pub const SERVICE_UNAVAILABLE: &str = "Service unavailable. Please try again later.";

/// Login submitted without a mobile number.
pub const MOBILE_REQUIRED: &str = "Please enter your mobile number.";
/// The mobile has no registration for the open unit.
pub const MOBILE_NOT_REGISTERED: &str = "This number is not registered for this unit.";
/// New password shorter than [`MIN_PASSWORD_LEN`].
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 6 characters.";
/// New password and confirmation differ.
pub const PASSWORDS_DIFFER: &str = "Passwords do not match.";
/// Sign-in rejected.
pub const INCORRECT_PASSWORD: &str = "Incorrect password.";
/// Signed in, but the account belongs to another unit.
pub const DIFFERENT_UNIT: &str = "This account is registered for a different unit.";

/// Shortest password accepted when creating an account.
pub const MIN_PASSWORD_LEN: usize = 6;
