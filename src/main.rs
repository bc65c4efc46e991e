use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use visitplan::cli::{ClientArgs, OutputFormat};

/// visitplan - Client visit schedule planner
#[derive(Parser)]
#[command(name = "visitplan")]
#[command(about = "Projects on-site and remote client visits onto a calendar", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Project the visit schedule of a single client
    Project {
        #[command(flatten)]
        client: ClientArgs,

        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,

        /// Write to this file instead of stdout (`.xlsx` writes a workbook)
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Print one calendar month for a single client
    Calendar {
        #[command(flatten)]
        client: ClientArgs,

        #[arg(long)]
        year: Option<i32>,

        /// Month number, 1 to 12
        #[arg(long)]
        month: Option<u8>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = visitplan::Config::load(cli.config.clone())?;

    visitplan::observability::init_observability(
        "visitplan",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    match cli.command {
        Commands::Serve { host, port } => visitplan::cli::serve(config, host, port).await,
        Commands::Project {
            client,
            format,
            output,
        } => visitplan::cli::project(&config, client, format, output),
        Commands::Calendar {
            client,
            year,
            month,
        } => visitplan::cli::calendar(&config, client, year, month),
    }
}
