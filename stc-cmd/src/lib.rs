//! Command implementations for the token chart asset CLI.
//!
//! Both subcommands load the three static assets through the same loader the
//! web app uses, from a local directory or from a deployed base URL.

use clap::{Args, Subcommand};
use stc_core::ChartType;

pub mod check;
pub mod fetch;
pub mod show;

#[derive(Subcommand)]
pub enum Command {
    /// Load the assets and report gaps (tokens without pairs or statistics)
    Check {
        #[command(flatten)]
        assets: AssetArgs,
    },

    /// Print the derived chart view for one token
    Show {
        #[command(flatten)]
        assets: AssetArgs,

        /// Zero-based token index (wrapped into range)
        #[arg(short, long, default_value_t = 0)]
        index: usize,

        /// Chart type: dexscreener or moralis
        #[arg(short, long, default_value = "moralis")]
        chart: ChartType,
    },
}

/// Where the assets live.
#[derive(Args, Debug, Clone)]
pub struct AssetArgs {
    /// Directory holding the JSON assets, resolved against the current
    /// working directory (the default only resolves from the workspace root)
    #[arg(short, long, default_value = "chart-token-viewer/public", conflicts_with = "base_url")]
    pub dir: String,

    /// Base URL the assets are served from (e.g. a deployed app)
    #[arg(short, long)]
    pub base_url: Option<String>,
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Check { assets } => check::run_check(&assets).await,
        Command::Show {
            assets,
            index,
            chart,
        } => show::run_show(&assets, index, chart).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{CommandFactory, Parser};

    #[derive(Parser)]
    struct TestCli {
        #[command(subcommand)]
        command: Command,
    }

    #[test]
    fn dir_help_names_working_directory() {
        let cmd = TestCli::command();
        let check = cmd.find_subcommand("check").unwrap();
        let dir = check
            .get_arguments()
            .find(|a| a.get_id() == "dir")
            .unwrap();
        let help = dir.get_help().unwrap().to_string();
        assert!(help.contains("current working directory"));
        assert!(help.contains("workspace root"));
    }

    #[test]
    fn dir_defaults_to_app_public_folder() {
        let cli = TestCli::parse_from(["stc-cli", "check"]);
        let Command::Check { assets } = cli.command else {
            panic!("expected check");
        };
        assert_eq!(assets.dir, "chart-token-viewer/public");
        assert_eq!(assets.base_url, None);
    }
}
