mod cmd;
mod output;
mod snapshot;

use clap::{Parser, Subcommand};
use cmd::config::ConfigSubcommand;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "dogswatch",
    about = "Node update progression — inspect where nodes sit in a rollout and what to command next",
    version,
    propagate_version = true
)]
struct Cli {
    /// Policy configuration file (default: built-in policy)
    #[arg(long, global = true, env = "DOGSWATCH_CONFIG")]
    config: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show every progression predicate for each node in a snapshot
    Inspect {
        /// Snapshot file (YAML or JSON, one node or a list)
        snapshot: PathBuf,
    },

    /// Decide the next command for each node in a snapshot
    Next {
        snapshot: PathBuf,

        /// Write proposed annotations and labels back into the snapshot
        #[arg(long)]
        apply: bool,
    },

    /// Show the one-step-forward projection of each node
    Project { snapshot: PathBuf },

    /// Show each node brought back to the start of the progression
    Reset { snapshot: PathBuf },

    /// Inspect the policy configuration
    Config {
        #[command(subcommand)]
        subcommand: ConfigSubcommand,
    },
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(tracing::Level::WARN.into())
                .from_env_lossy(),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = cli.config.as_deref();

    let result = match cli.command {
        Commands::Inspect { snapshot } => cmd::inspect::run(&snapshot, cli.json),
        Commands::Next { snapshot, apply } => cmd::next::run(&snapshot, config, apply, cli.json),
        Commands::Project { snapshot } => cmd::project::run_projected(&snapshot, cli.json),
        Commands::Reset { snapshot } => cmd::project::run_reset(&snapshot, cli.json),
        Commands::Config { subcommand } => cmd::config::run(config, subcommand, cli.json),
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
