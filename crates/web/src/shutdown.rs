//! Graceful shutdown
//!
//! Ctrl+C or SIGTERM stops accepting connections and gives in-flight requests
//! (uploads included) a grace period to finish.

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    io,
    time::Duration,
};

use salvo::server::ServerHandle;
use thiserror::Error;
use tokio::signal;
use tracing::info;

/// Grace period for in-flight requests once a stop signal arrives.
const DRAIN_TIMEOUT: Duration = Duration::from_secs(30);

/// Signals that stop the directory server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum StopSignal {
    Interrupt,
    Terminate,
}

impl Display for StopSignal {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(match self {
            Self::Interrupt => "Ctrl+C",
            Self::Terminate => "SIGTERM",
        })
    }
}

#[derive(Debug, Error)]
#[error("failed to install {signal} handler: {source}")]
pub(crate) struct ShutdownSignalError {
    signal: StopSignal,

    #[source]
    source: io::Error,
}

impl ShutdownSignalError {
    fn installing(signal: StopSignal) -> impl FnOnce(io::Error) -> Self {
        move |source| Self { signal, source }
    }
}

async fn interrupt() -> Result<StopSignal, ShutdownSignalError> {
    signal::ctrl_c()
        .await
        .map_err(ShutdownSignalError::installing(StopSignal::Interrupt))?;

    Ok(StopSignal::Interrupt)
}

#[cfg(unix)]
async fn terminate() -> Result<StopSignal, ShutdownSignalError> {
    signal::unix::signal(signal::unix::SignalKind::terminate())
        .map_err(ShutdownSignalError::installing(StopSignal::Terminate))?
        .recv()
        .await;

    Ok(StopSignal::Terminate)
}

/// Only Ctrl+C is watched off Unix.
#[cfg(not(unix))]
async fn terminate() -> Result<StopSignal, ShutdownSignalError> {
    std::future::pending().await
}

/// Wait for a stop signal, then drain the server behind `handle`.
pub(crate) async fn listen(handle: ServerHandle) -> Result<(), ShutdownSignalError> {
    let received = tokio::select! {
        received = interrupt() => received?,
        received = terminate() => received?,
    };

    info!(
        signal = %received,
        grace_secs = DRAIN_TIMEOUT.as_secs(),
        "stopping directory server"
    );

    handle.stop_graceful(Some(DRAIN_TIMEOUT));

    Ok(())
}
