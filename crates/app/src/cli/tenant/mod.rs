use clap::{Args, Subcommand};

mod add;
mod list;
mod remove;

#[derive(Debug, Args)]
pub(crate) struct TenantCommand {
    #[command(subcommand)]
    command: TenantSubcommand,
}

#[derive(Debug, Subcommand)]
enum TenantSubcommand {
    /// Print every registration, oldest first
    List(list::ListTenantsArgs),

    /// Register a mobile number for a unit
    Add(add::AddTenantArgs),

    /// Remove a registration; the login account is kept
    Remove(remove::RemoveTenantArgs),
}

pub(crate) async fn run(command: TenantCommand) -> Result<(), String> {
    match command.command {
        TenantSubcommand::List(args) => list::run(args).await,
        TenantSubcommand::Add(args) => add::run(args).await,
        TenantSubcommand::Remove(args) => remove::run(args).await,
    }
}
