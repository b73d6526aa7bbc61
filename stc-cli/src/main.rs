//! STC CLI - Command line tool for checking Solana token chart assets.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "stc-cli",
    version,
    about = "Solana token chart asset toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: stc_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    log::debug!("starting stc-cli");
    stc_cmd::run(cli.command).await
}
