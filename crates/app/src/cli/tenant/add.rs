use bayport_app::domain::geometry::UnitId;
use clap::Args;

use crate::cli::BackendArgs;

#[derive(Debug, Args)]
pub(crate) struct AddTenantArgs {
    /// Mobile number, in any common format
    #[arg(long)]
    mobile: String,

    /// Unit id from the geometry document
    #[arg(long)]
    unit: i64,

    #[command(flatten)]
    backend: BackendArgs,
}

pub(crate) async fn run(args: AddTenantArgs) -> Result<(), String> {
    let (roster, token) = args.backend.roster()?;

    let message = roster
        .add(&token, &args.mobile, Some(UnitId(args.unit)))
        .await
        .map_err(|error| error.to_string())?;

    println!("{message}");

    Ok(())
}
