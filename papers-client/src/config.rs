//! Client configuration
//!
//! [`ClientConfig`] is an immutable value handed to [`crate::PubMedClient`] at
//! construction time. Environment variables are only consulted through
//! [`ClientConfig::from_env`]; everything else is set explicitly with the
//! `with_*` builder methods.

use std::env;
use std::time::Duration;

/// Default base URL for NCBI E-utilities
pub const DEFAULT_BASE_URL: &str = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils";

/// Environment variable holding the NCBI API key
pub const API_KEY_ENV: &str = "PUBMED_API_KEY";

/// Environment variable holding the requester email
pub const EMAIL_ENV: &str = "PUBMED_EMAIL";

/// Environment variable holding the requesting tool name
pub const TOOL_ENV: &str = "PUBMED_TOOL";

/// Configuration for [`crate::PubMedClient`]
///
/// # Example
///
/// ```
/// use papers_client::ClientConfig;
/// use std::time::Duration;
///
/// let config = ClientConfig::new()
///     .with_api_key("your_api_key_here")
///     .with_email("researcher@university.edu")
///     .with_timeout(Duration::from_secs(30));
///
/// assert!(config.has_api_key());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ClientConfig {
    /// NCBI API key. Omitted from requests when absent.
    pub api_key: Option<String>,
    /// Contact email sent as the `email` parameter
    pub email: Option<String>,
    /// Tool name sent as the `tool` parameter
    pub tool: Option<String>,
    /// Override for the E-utilities base URL (mock servers, mirrors)
    pub base_url: Option<String>,
    /// Request timeout. `None` keeps the HTTP client's default behavior.
    pub timeout: Option<Duration>,
    /// Override for the User-Agent header
    pub user_agent: Option<String>,
}

impl ClientConfig {
    /// Create a configuration with no credentials and default endpoints
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration from `PUBMED_API_KEY`, `PUBMED_EMAIL` and
    /// `PUBMED_TOOL`
    ///
    /// Unset or blank variables leave the corresponding field absent. Loading
    /// a `.env` file is the caller's job and must happen before this call.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Create a configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| lookup(name).and_then(non_blank);

        Self {
            api_key: read(API_KEY_ENV),
            email: read(EMAIL_ENV),
            tool: read(TOOL_ENV),
            ..Self::default()
        }
    }

    /// Set the NCBI API key
    pub fn with_api_key<S: Into<String>>(mut self, api_key: S) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set the contact email
    pub fn with_email<S: Into<String>>(mut self, email: S) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Set the tool name
    pub fn with_tool<S: Into<String>>(mut self, tool: S) -> Self {
        self.tool = Some(tool.into());
        self
    }

    /// Point the client at a different E-utilities base URL
    pub fn with_base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set a request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set a custom User-Agent
    pub fn with_user_agent<S: Into<String>>(mut self, user_agent: S) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Whether a usable API key is configured
    pub fn has_api_key(&self) -> bool {
        self.api_key.as_deref().is_some_and(|k| !k.trim().is_empty())
    }

    /// Base URL without a trailing slash
    pub fn effective_base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .unwrap_or(DEFAULT_BASE_URL)
            .trim_end_matches('/')
    }

    /// User-Agent header value, `get-papers-list/<version>` unless overridden
    pub fn effective_user_agent(&self) -> String {
        match &self.user_agent {
            Some(ua) => ua.clone(),
            None => format!("get-papers-list/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Identification and credential parameters appended to every request
    ///
    /// Blank values are skipped so that an unset key never shows up as
    /// `api_key=` on the wire.
    pub fn build_api_params(&self) -> Vec<(String, String)> {
        [
            ("api_key", &self.api_key),
            ("email", &self.email),
            ("tool", &self.tool),
        ]
        .into_iter()
        .filter_map(|(name, value)| {
            value
                .as_deref()
                .filter(|v| !v.trim().is_empty())
                .map(|v| (name.to_string(), v.to_string()))
        })
        .collect()
    }
}

fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
