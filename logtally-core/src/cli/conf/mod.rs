mod check;
mod dump;


pub use check::*;
pub use dump::*;

use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand, Debug)]
pub enum ConfigCmd {
    /// Validate configuration and exit
    Check {
        /// Path to an HCL config file (defaults apply when omitted)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Print errors without hints
        #[arg(short, long, default_value = "false")]
        plain: bool,
    },

    /// Print resolved configuration
    Dump {
        /// Path to an HCL config file (defaults apply when omitted)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Output as JSON
        #[arg(long, conflicts_with = "yaml")]
        json: bool,

        /// Output as YAML
        #[arg(long)]
        yaml: bool,
    },
}

pub fn run(cmd: ConfigCmd) -> anyhow::Result<()> {
    match cmd {
        ConfigCmd::Check { config, plain } => check(config, plain),
        ConfigCmd::Dump { config, json, yaml } => dump(config, json, yaml),
    }
}
