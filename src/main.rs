use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use envup::{AppError, PlanFormat, ProvisionOptions};

#[derive(Parser)]
#[command(name = "envup")]
#[command(version)]
#[command(about = "Provision conda-based CI build environments", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Activate the environment and install platform dependencies
    #[clap(visible_alias = "p")]
    Provision {
        /// Platform name; defaults to $TRAVIS_OS_NAME
        #[arg(short, long)]
        platform: Option<String>,
        /// Path to an envup.toml config file
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Print the steps without executing them
        #[arg(long)]
        dry_run: bool,
    },
    /// Show the steps provision would run
    Plan {
        /// Platform name; defaults to $TRAVIS_OS_NAME
        #[arg(short, long)]
        platform: Option<String>,
        /// Path to an envup.toml config file
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: FormatArg,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for PlanFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Text => PlanFormat::Text,
            FormatArg::Json => PlanFormat::Json,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        Commands::Provision { platform, config, dry_run } => {
            envup::provision(config.as_deref(), ProvisionOptions { platform, dry_run }).map(|_| ())
        }
        Commands::Plan { platform, config, format } => {
            envup::plan(config.as_deref(), platform.as_deref(), format.into())
                .map(|rendered| print!("{}", rendered))
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
