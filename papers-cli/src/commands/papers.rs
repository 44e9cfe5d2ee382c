use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use papers_client::{PubMedClient, PubMedError};
use tracing::info;

pub const DEFAULT_QUERY: &str = "cancer research";

/// Search PubMed and print the XML records of the first hits
#[derive(Args, Debug)]
pub struct Papers {
    /// Search query (free text, PubMed field tags allowed)
    #[arg(value_name = "QUERY", default_value = DEFAULT_QUERY)]
    pub query: String,

    /// Number of leading PMIDs to fetch details for
    #[arg(short = 'n', long, default_value = "10")]
    pub max_details: usize,

    /// Write the XML to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl Papers {
    /// Run the search/fetch round trip, writing human-readable output to `out`
    pub async fn execute<W: Write>(&self, client: &PubMedClient, out: &mut W) -> Result<()> {
        let pmids = client.search_ids(&self.query).await?;
        writeln!(out, "Fetched papers: {:?}", pmids)?;

        if pmids.is_empty() {
            writeln!(out, "No papers found for query \"{}\".", self.query)?;
            return Ok(());
        }

        let selected = &pmids[..pmids.len().min(self.max_details)];
        let details = match client.fetch_details(selected).await {
            Ok(xml) => xml,
            Err(PubMedError::InvalidArgument { message }) => {
                writeln!(out, "Error: {}", message)?;
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        };

        match &self.output {
            Some(path) => {
                tokio::fs::write(path, &details).await?;
                info!(path = %path.display(), count = selected.len(), "Details saved to file");
                writeln!(out, "Paper details written to {}", path.display())?;
            }
            None => {
                writeln!(out, "Paper Details (XML):")?;
                writeln!(out, "{}", details)?;
            }
        }

        Ok(())
    }
}
