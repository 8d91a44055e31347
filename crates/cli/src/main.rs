mod commands;
mod progress;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "graphql-gen")]
#[command(about = "Generates a typed TypeScript client from a GraphQL endpoint", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate all client artifacts from the configured endpoint
    Generate {
        /// Path to the codegen config file
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Override the configured specification URL
        #[arg(long)]
        url: Option<String>,

        /// Override the configured output folder
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Fetch the raw introspection JSON from an endpoint
    Fetch {
        /// GraphQL endpoint URL to introspect
        url: String,

        /// Output file path (writes to stdout if not specified)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// HTTP headers to include in the request (can be specified multiple times)
        /// Format: "Header-Name: Header-Value"
        #[arg(long = "header", short = 'H', value_name = "HEADER")]
        headers: Vec<String>,

        /// Request timeout in seconds
        #[arg(long, default_value = "30")]
        timeout: u64,

        /// Number of retry attempts on failure
        #[arg(long, default_value = "0")]
        retry: u32,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            config,
            url,
            output,
        } => commands::generate::run(config, url, output).await,
        Commands::Fetch {
            url,
            output,
            headers,
            timeout,
            retry,
        } => commands::fetch::run(url, output, headers, timeout, retry).await,
    }
}

/// Initialize tracing based on the RUST_LOG env var, writing to stderr.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("off")),
        )
        .with_writer(std::io::stderr)
        .init();
}
