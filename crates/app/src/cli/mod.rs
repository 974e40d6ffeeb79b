use std::{path::PathBuf, sync::Arc};

use bayport_app::{
    backend::{AccessToken, BackendConfig},
    context::AppContext,
    domain::{
        geometry::{GeometryDocument, UnitIndex},
        media::MediaBuckets,
        roster::Roster,
    },
};
use clap::{Args, Parser, Subcommand};

mod geometry;
mod tenant;

#[derive(Debug, Parser)]
#[command(name = "bayport-app", about = "Bayport West CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Geometry(geometry::GeometryCommand),
    Tenant(tenant::TenantCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Geometry(command) => geometry::run(command),
            Commands::Tenant(command) => tenant::run(command).await,
        }
    }
}

#[derive(Debug, Clone, Args)]
pub(crate) struct GeometryArgs {
    /// Path to the buildings geometry document
    #[arg(long, env = "GEOMETRY_PATH", default_value = "data/buildings.json")]
    geometry_path: PathBuf,
}

impl GeometryArgs {
    pub(crate) fn load(&self) -> Result<GeometryDocument, String> {
        GeometryDocument::load(&self.geometry_path)
            .map_err(|error| format!("{}: {error}", self.geometry_path.display()))
    }
}

#[derive(Debug, Clone, Args)]
pub(crate) struct BackendArgs {
    /// Backend project URL
    #[arg(long, env = "BACKEND_URL")]
    backend_url: String,

    /// Backend public API key
    #[arg(long, env = "BACKEND_ANON_KEY", hide_env_values = true)]
    backend_anon_key: String,

    /// Administrator access token used for roster reads and writes
    #[arg(long, env = "BACKEND_ACCESS_TOKEN", hide_env_values = true)]
    access_token: String,

    #[command(flatten)]
    geometry: GeometryArgs,
}

impl BackendArgs {
    /// Roster over the configured backend, plus the token to act with.
    pub(crate) fn roster(&self) -> Result<(Roster, AccessToken), String> {
        let document = self.geometry.load()?;

        let context = AppContext::from_backend(
            BackendConfig {
                url: self.backend_url.clone(),
                anon_key: self.backend_anon_key.clone(),
            },
            MediaBuckets::default(),
        )
        .map_err(|error| error.to_string())?;

        let roster = context.roster(Arc::new(UnitIndex::build(&document)));

        Ok((roster, AccessToken::new(self.access_token.clone())))
    }
}
