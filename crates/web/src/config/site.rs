//! Site Config

use std::path::PathBuf;

use clap::Args;

/// Site content settings.
#[derive(Debug, Args)]
pub struct SiteConfig {
    /// Path to the building geometry document
    #[arg(long, env = "GEOMETRY_PATH", default_value = "data/buildings.json")]
    pub geometry_path: PathBuf,

    /// Email of the account allowed into the admin page
    #[arg(long, env = "ADMIN_EMAIL", default_value = "")]
    pub admin_email: String,

    /// Site title shown in page headers
    #[arg(long, env = "SITE_NAME", default_value = "Bayport West")]
    pub site_name: String,
}
