use bayport_app::domain::roster::EMPTY_ROSTER;
use clap::Args;

use crate::cli::BackendArgs;

#[derive(Debug, Args)]
pub(crate) struct ListTenantsArgs {
    #[command(flatten)]
    backend: BackendArgs,
}

pub(crate) async fn run(args: ListTenantsArgs) -> Result<(), String> {
    let (roster, token) = args.backend.roster()?;

    let rows = roster
        .list(&token)
        .await
        .map_err(|error| error.to_string())?;

    if rows.is_empty() {
        println!("{EMPTY_ROSTER}");
        return Ok(());
    }

    for row in rows {
        println!("id: {}", row.id);
        println!("mobile: {}", row.mobile);
        println!("unit: {}", row.unit_label);
        println!("registered_on: {}", row.registered_on);
        println!("account: {}", row.account.label());
        println!();
    }

    Ok(())
}
