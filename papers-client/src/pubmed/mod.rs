//! PubMed client for searching and fetching article records
//!
//! This module wraps two NCBI E-utilities endpoints:
//! - `esearch.fcgi` - term search returning PMIDs ([`PubMedClient::search_ids`])
//! - `efetch.fcgi` - raw XML records for a PMID list ([`PubMedClient::fetch_details`])

pub mod client;
mod responses;

// Re-export public types
pub use client::{PubMedClient, SEARCH_RETMAX};
