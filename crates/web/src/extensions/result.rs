//! Error mapping for handler results.

use std::error::Error as StdError;

use salvo::prelude::StatusError;
use tracing::{debug, error};

/// Brief shown for failures the visitor cannot fix.
const SERVER_ERROR: &str = "Something went wrong. Please try again.";

pub(crate) trait ResultExt<T> {
    /// Log the error under `context` and answer 500.
    fn or_500(self, context: &str) -> Result<T, StatusError>;

    /// Answer 400 with `brief`, keeping the error as the cause.
    fn or_400(self, brief: &str) -> Result<T, StatusError>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: StdError + Send + Sync + 'static,
{
    fn or_500(self, context: &str) -> Result<T, StatusError> {
        self.map_err(|error| {
            error!(%error, "{context}");

            StatusError::internal_server_error().brief(SERVER_ERROR)
        })
    }

    fn or_400(self, brief: &str) -> Result<T, StatusError> {
        self.map_err(|error| {
            debug!(%error, "rejected request: {brief}");

            StatusError::bad_request().brief(brief).cause(error)
        })
    }
}
