use clap::{Parser, Subcommand};
use logtally_core::cli;
use logtally_core::cli::report::{CleanArgs, SummaryArgs};
use logtally_core::logging::{LogFormat, default_log_format, init_logging};

#[derive(Parser, Debug)]
#[command(
    name = "logtally",
    version,
    about = "logtally: validate, clean and summarize pipe-delimited logs"
)]
struct Cli {
    /// Force JSON log events on stderr
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Count lines per level and write a text report
    Summary(SummaryArgs),

    /// Write a cleaned log and a JSON summary (default)
    Clean(CleanArgs),

    /// Configuration tooling
    Config {
        #[command(subcommand)]
        cmd: cli::conf::ConfigCmd,
    },
}

fn main() {
    let cli = Cli::parse();

    let format = if cli.json_logs {
        LogFormat::Json
    } else {
        default_log_format()
    };
    init_logging(format);

    let result = match cli.command {
        Some(Command::Summary(args)) => cli::report::summary(args),
        Some(Command::Clean(args)) => cli::report::clean(args),
        Some(Command::Config { cmd }) => cli::conf::run(cmd),
        None => cli::report::clean(CleanArgs::default()),
    };

    if let Err(e) = result {
        tracing::error!(error = %e, "command failed");
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
