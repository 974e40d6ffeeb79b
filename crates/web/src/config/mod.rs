//! Server configuration module

use std::net::SocketAddr;

use clap::Parser;

use crate::config::{
    backend::BackendArgs, observability::LoggingConfig, server::ListenConfig,
    site::SiteConfig,
};

pub(crate) mod backend;
pub(crate) mod observability;
pub(crate) mod server;
pub(crate) mod site;

pub(crate) use observability::LogFormat;

/// Bayport West directory server configuration
#[derive(Debug, Parser)]
#[command(name = "bayport-web", about = "Bayport West directory server", long_about = None)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ListenConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Hosted backend settings.
    #[command(flatten)]
    pub backend: BackendArgs,

    /// Site content settings.
    #[command(flatten)]
    pub site: SiteConfig,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Get the socket address for binding
    #[must_use]
    pub fn socket_addr(&self) -> SocketAddr {
        self.server.socket_addr()
    }
}
