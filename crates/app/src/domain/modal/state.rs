//! Modal states.

use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::domain::{mobile::Mobile, modal::UnitDraft};

/// Where the modal is, with whatever that state needs to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalState {
    /// Read-only details, with "Login to Edit" when the unit has a
    /// registration.
    View,

    /// Asking for the tenant's mobile number.
    Login {
        /// Inline error from the last submission.
        error: Option<String>,
    },

    /// First login for a registered mobile: choose a password.
    SetPassword {
        /// Mobile being claimed, carried by the form.
        mobile: Mobile,

        /// Inline error from the last submission.
        error: Option<String>,
    },

    /// Returning tenant: enter the password.
    Password {
        /// Mobile signing in, carried by the form.
        mobile: Mobile,

        /// Inline error from the last submission.
        error: Option<String>,
    },

    /// Editing the unit's details.
    Edit {
        /// Form contents, uploads included.
        draft: UnitDraft,

        /// Inline error from the last save or upload.
        error: Option<String>,

        /// Progress message from the last upload.
        notice: Option<String>,
    },
}

impl ModalState {
    /// The state's name without its payload.
    pub fn tag(&self) -> ModalTag {
        match self {
            Self::View => ModalTag::View,
            Self::Login { .. } => ModalTag::Login,
            Self::SetPassword { .. } => ModalTag::SetPassword,
            Self::Password { .. } => ModalTag::Password,
            Self::Edit { .. } => ModalTag::Edit,
        }
    }

    /// Inline error to show, if any.
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::View => None,
            Self::Login { error }
            | Self::SetPassword { error, .. }
            | Self::Password { error, .. }
            | Self::Edit { error, .. } => error.as_deref(),
        }
    }

    pub(crate) fn login_error(message: impl Into<String>) -> Self {
        Self::Login {
            error: Some(message.into()),
        }
    }

    pub(crate) fn edit(draft: UnitDraft) -> Self {
        Self::Edit {
            draft,
            error: None,
            notice: None,
        }
    }
}

/// State names, as used in markup and logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModalTag {
    /// [`ModalState::View`]
    View,
    /// [`ModalState::Login`]
    Login,
    /// [`ModalState::SetPassword`]
    SetPassword,
    /// [`ModalState::Password`]
    Password,
    /// [`ModalState::Edit`]
    Edit,
}

impl ModalTag {
    /// Kebab-case name, rendered as `data-state`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::View => "view",
            Self::Login => "login",
            Self::SetPassword => "set-password",
            Self::Password => "password",
            Self::Edit => "edit",
        }
    }

    /// Where the back button leads, if the state has one.
    pub fn back(self) -> Option<Self> {
        match self {
            Self::Login => Some(Self::View),
            Self::SetPassword | Self::Password => Some(Self::Login),
            Self::View | Self::Edit => None,
        }
    }
}

impl Display for ModalTag {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn back_navigation() {
        assert_eq!(ModalTag::Login.back(), Some(ModalTag::View));
        assert_eq!(ModalTag::SetPassword.back(), Some(ModalTag::Login));
        assert_eq!(ModalTag::Password.back(), Some(ModalTag::Login));
        assert_eq!(ModalTag::View.back(), None);
        assert_eq!(ModalTag::Edit.back(), None);
    }

    #[test]
    fn tags_match_state_names() {
        let state = ModalState::SetPassword {
            mobile: Mobile::normalize("501-555-1001"),
            error: Some("Passwords do not match.".to_string()),
        };

        assert_eq!(state.tag().to_string(), "set-password");
        assert_eq!(state.error(), Some("Passwords do not match."));
        assert_eq!(ModalState::View.error(), None);
    }
}
