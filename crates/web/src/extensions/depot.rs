//! Directory state lookup.

use std::sync::Arc;

use salvo::prelude::{Depot, StatusError};
use tracing::error;

use crate::state::State;

/// Brief returned when a route runs without the injected directory state.
const STATE_MISSING: &str = "The directory is not ready yet. Please try again later.";

/// Access to the directory state injected by the router.
pub(crate) trait DepotExt {
    /// The shared [`State`], or a logged 500 when the router forgot to inject it.
    fn site(&self) -> Result<&Arc<State>, StatusError>;
}

impl DepotExt for Depot {
    fn site(&self) -> Result<&Arc<State>, StatusError> {
        self.obtain::<Arc<State>>().map_err(|_missing| {
            error!("directory state missing from depot; is `inject` hooped on this route?");

            StatusError::internal_server_error().brief(STATE_MISSING)
        })
    }
}
