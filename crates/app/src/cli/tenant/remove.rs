use bayport_app::domain::tenants::records::TenantId;
use clap::Args;
use uuid::Uuid;

use crate::cli::BackendArgs;

#[derive(Debug, Args)]
pub(crate) struct RemoveTenantArgs {
    /// Registration id, as printed by `tenant list`
    #[arg(long)]
    id: Uuid,

    #[command(flatten)]
    backend: BackendArgs,
}

pub(crate) async fn run(args: RemoveTenantArgs) -> Result<(), String> {
    let (roster, token) = args.backend.roster()?;
    let id = TenantId(args.id);

    roster
        .remove(&token, id, true)
        .await
        .map_err(|error| error.to_string())?;

    println!("removed registration {id}; the login account was kept");

    Ok(())
}
