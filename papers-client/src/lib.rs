//! # Papers Client
//!
//! A small async Rust client for the PubMed E-utilities API. It searches
//! PubMed for identifiers (PMIDs) and fetches the matching records as raw XML.
//!
//! ## Features
//!
//! - **ESearch**: term search returning up to 100 PMIDs, in server order
//! - **EFetch**: one batched request per identifier list, body returned verbatim
//! - **Explicit configuration**: API key, contact email and tool name live in
//!   [`ClientConfig`], optionally read from `PUBMED_*` environment variables
//! - **Error Handling**: local argument checks and HTTP status failures are
//!   distinct [`PubMedError`] variants
//!
//! ## Quick Start
//!
//! ```no_run
//! use papers_client::PubMedClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = PubMedClient::new();
//!
//!     let pmids = client.search_ids("cancer research").await?;
//!     println!("Fetched papers: {:?}", pmids);
//!
//!     if !pmids.is_empty() {
//!         let first = &pmids[..pmids.len().min(10)];
//!         let xml = client.fetch_details(first).await?;
//!         println!("{}", xml);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod pubmed;

// Re-export main types for convenience
pub use config::ClientConfig;
pub use error::{PubMedError, Result};
pub use pubmed::{PubMedClient, SEARCH_RETMAX};
