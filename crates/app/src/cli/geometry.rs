use bayport_app::domain::building::landing_cards;
use clap::{Args, Subcommand};

use super::GeometryArgs;

#[derive(Debug, Args)]
pub(crate) struct GeometryCommand {
    #[command(subcommand)]
    command: GeometrySubcommand,
}

#[derive(Debug, Subcommand)]
enum GeometrySubcommand {
    /// Print each building with floor/unit counts and status tallies
    Summary(GeometryArgs),
}

pub(crate) fn run(command: GeometryCommand) -> Result<(), String> {
    match command.command {
        GeometrySubcommand::Summary(args) => summary(&args),
    }
}

fn summary(args: &GeometryArgs) -> Result<(), String> {
    let document = args.load()?;
    let cards = landing_cards(&document);

    if cards.is_empty() {
        println!("no buildings found");
        return Ok(());
    }

    for card in cards {
        println!("[{}] {}", card.index, card.name);
        println!("  {}", card.subtitle());
        println!(
            "  available: {}  taken: {}  reserved: {}",
            card.counts.available, card.counts.taken, card.counts.reserved
        );
    }

    Ok(())
}
