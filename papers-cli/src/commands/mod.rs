pub mod papers;

use std::time::Duration;

use papers_client::{ClientConfig, PubMedClient};

/// Build a client from command-line values
///
/// clap has already folded the `PUBMED_*` environment variables (and any
/// `.env` entries) into these arguments, so the environment is not read again.
pub fn create_pubmed_client(
    api_key: Option<&str>,
    email: Option<&str>,
    tool: Option<&str>,
    timeout_secs: Option<u64>,
) -> PubMedClient {
    let mut config = ClientConfig::new();

    if let Some(key) = api_key {
        config = config.with_api_key(key);
    }

    if let Some(email) = email {
        config = config.with_email(email);
    }

    if let Some(tool) = tool {
        config = config.with_tool(tool);
    }

    if let Some(secs) = timeout_secs {
        config = config.with_timeout(Duration::from_secs(secs));
    }

    PubMedClient::with_config(config)
}
