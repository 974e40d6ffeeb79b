//! Mobile Numbers
//!
//! Registrations and login identities are keyed by a normalized mobile
//! number: the raw input with whitespace, hyphens, parentheses, plus signs and
//! periods stripped.

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

/// Domain used for the synthetic login email of a tenant account.
pub const TENANT_EMAIL_DOMAIN: &str = "tenant.bw";

/// Minimum normalized length accepted when registering a mobile number.
pub const MIN_MOBILE_LEN: usize = 7;

/// Strip formatting characters from a raw mobile number.
pub fn normalize_mobile(raw: &str) -> String {
    raw.chars()
        .filter(|c| !(c.is_whitespace() || matches!(c, '-' | '(' | ')' | '+' | '.')))
        .collect()
}

/// A normalized mobile number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Mobile(String);

impl Mobile {
    /// Normalize `raw` into a mobile number.
    pub fn normalize(raw: &str) -> Self {
        Self(normalize_mobile(raw))
    }

    /// The normalized digits.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether nothing but formatting characters was entered.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of characters left after normalization.
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    /// Synthetic email identifying this mobile's account with the auth service.
    pub fn login_email(&self) -> String {
        format!("{}@{TENANT_EMAIL_DOMAIN}", self.0)
    }
}

impl Display for Mobile {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.0)
    }
}
