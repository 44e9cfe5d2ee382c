use std::io;

use anyhow::Result;
use clap::Parser;
use papers_client::config::{API_KEY_ENV, EMAIL_ENV, TOOL_ENV};
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser, Debug)]
#[command(
    name = "get-papers-list",
    version,
    about = "Search PubMed and print article details",
    long_about = "Searches PubMed through NCBI E-utilities, prints the matching PMIDs and \
                  fetches the XML records of the first hits"
)]
struct Cli {
    #[command(flatten)]
    papers: commands::papers::Papers,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// API key for NCBI E-utilities (increases rate limit)
    #[arg(long, env = API_KEY_ENV, hide_env_values = true)]
    api_key: Option<String>,

    /// Email for NCBI requests (recommended)
    #[arg(long, env = EMAIL_ENV)]
    email: Option<String>,

    /// Tool name for NCBI requests
    #[arg(long, env = TOOL_ENV)]
    tool: Option<String>,

    /// HTTP request timeout in seconds (default: no timeout)
    #[arg(short, long)]
    timeout: Option<u64>,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    // Must run before parsing so clap's `env` fallbacks see `.env` entries
    let dotenv_path = dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Some(path) = dotenv_path {
        debug!(path = %path.display(), "Loaded environment file");
    }

    let client = commands::create_pubmed_client(
        cli.api_key.as_deref(),
        cli.email.as_deref(),
        cli.tool.as_deref(),
        cli.timeout,
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    cli.papers.execute(&client, &mut out).await
}
