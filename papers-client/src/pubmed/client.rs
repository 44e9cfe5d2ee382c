use crate::config::ClientConfig;
use crate::error::{PubMedError, Result};
use crate::pubmed::responses::ESearchResult;
use reqwest::{Client, Response};
use tracing::{debug, info, instrument, warn};

/// Fixed page size for ESearch. Results beyond the first page are not fetched.
pub const SEARCH_RETMAX: usize = 100;

/// Client for the PubMed esearch and efetch endpoints
///
/// The client is read-only after construction and cheap to clone.
#[derive(Clone)]
pub struct PubMedClient {
    client: Client,
    base_url: String,
    config: ClientConfig,
}

impl PubMedClient {
    /// Create a new PubMed client configured from the process environment
    ///
    /// Reads `PUBMED_API_KEY` (plus `PUBMED_EMAIL` / `PUBMED_TOOL`) once. When
    /// no key is set, requests are sent unauthenticated and NCBI's lower
    /// anonymous rate limit applies.
    ///
    /// # Example
    ///
    /// ```
    /// use papers_client::PubMedClient;
    ///
    /// let client = PubMedClient::new();
    /// ```
    pub fn new() -> Self {
        Self::with_config(ClientConfig::from_env())
    }

    /// Create a client with an explicit API key, falling back to the
    /// environment when `api_key` is `None` or blank
    ///
    /// # Example
    ///
    /// ```
    /// use papers_client::PubMedClient;
    ///
    /// let client = PubMedClient::with_api_key(Some("your_api_key_here"));
    /// assert!(client.config().has_api_key());
    /// ```
    pub fn with_api_key(api_key: Option<&str>) -> Self {
        let mut config = ClientConfig::from_env();
        if let Some(key) = api_key.filter(|k| !k.trim().is_empty()) {
            config = config.with_api_key(key);
        }
        Self::with_config(config)
    }

    /// Create a new PubMed client with custom configuration
    ///
    /// The environment is not consulted.
    ///
    /// # Example
    ///
    /// ```
    /// use papers_client::{ClientConfig, PubMedClient};
    ///
    /// let config = ClientConfig::new()
    ///     .with_api_key("your_api_key_here")
    ///     .with_email("researcher@university.edu");
    ///
    /// let client = PubMedClient::with_config(config);
    /// ```
    pub fn with_config(config: ClientConfig) -> Self {
        let mut builder = Client::builder().user_agent(config.effective_user_agent());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().expect("Failed to create HTTP client");

        Self::with_client(client, config)
    }

    /// Create a new PubMed client around a caller-supplied HTTP client
    ///
    /// Timeout and User-Agent settings in `config` are ignored; configure
    /// them on `client` instead.
    ///
    /// # Example
    ///
    /// ```
    /// use papers_client::{ClientConfig, PubMedClient};
    /// use reqwest::Client;
    /// use std::time::Duration;
    ///
    /// let http_client = Client::builder()
    ///     .timeout(Duration::from_secs(30))
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = PubMedClient::with_client(http_client, ClientConfig::new());
    /// ```
    pub fn with_client(client: Client, config: ClientConfig) -> Self {
        let base_url = config.effective_base_url().to_string();

        Self {
            client,
            base_url,
            config,
        }
    }

    /// Get a reference to the client configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Search PubMed and return matching PMIDs
    ///
    /// At most [`SEARCH_RETMAX`] identifiers are returned, in the order the
    /// server ranked them. A response without an `idlist` yields an empty
    /// vector. The query is sent as-is, even when empty.
    ///
    /// # Errors
    ///
    /// * `PubMedError::HttpError` - If the server answers with a non-success status
    /// * `PubMedError::RequestError` - If the HTTP request fails
    /// * `PubMedError::JsonError` - If the body is not valid ESearch JSON
    ///
    /// # Example
    ///
    /// ```no_run
    /// use papers_client::PubMedClient;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = PubMedClient::new();
    ///     let pmids = client.search_ids("cancer research").await?;
    ///     println!("Found {} articles", pmids.len());
    ///     Ok(())
    /// }
    /// ```
    #[instrument(skip(self), fields(query = %query))]
    pub async fn search_ids(&self, query: &str) -> Result<Vec<String>> {
        let url = self.search_url(query);

        debug!("Making ESearch API request");
        let response = self.make_request(&url).await?;

        let body = response.text().await?;
        let search_result: ESearchResult = serde_json::from_str(&body)?;
        let pmids = search_result.into_ids();

        info!(results_found = pmids.len(), "Search completed successfully");
        Ok(pmids)
    }

    /// Fetch PubMed records for the given PMIDs as raw XML
    ///
    /// All identifiers go out in a single EFetch request, comma-joined in the
    /// order given. The response body is returned verbatim and is not parsed.
    ///
    /// # Errors
    ///
    /// * `PubMedError::InvalidArgument` - If `ids` is empty (no request is sent)
    /// * `PubMedError::HttpError` - If the server answers with a non-success status
    /// * `PubMedError::RequestError` - If the HTTP request fails
    ///
    /// # Example
    ///
    /// ```no_run
    /// use papers_client::PubMedClient;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = PubMedClient::new();
    ///     let xml = client.fetch_details(&["31978945", "33515491"]).await?;
    ///     println!("{}", xml);
    ///     Ok(())
    /// }
    /// ```
    #[instrument(skip(self, ids), fields(ids_count = ids.len()))]
    pub async fn fetch_details<S: AsRef<str>>(&self, ids: &[S]) -> Result<String> {
        if ids.is_empty() {
            warn!("Refusing to fetch details for an empty identifier list");
            return Err(PubMedError::empty_id_list());
        }

        let url = self.fetch_url(ids);

        debug!("Making EFetch API request");
        let response = self.make_request(&url).await?;
        let xml_text = response.text().await?;

        info!(bytes = xml_text.len(), "Fetched article details");
        Ok(xml_text)
    }

    pub(crate) fn search_url(&self, query: &str) -> String {
        format!(
            "{}/esearch.fcgi?db=pubmed&term={}&retmode=json&retmax={}",
            self.base_url,
            urlencoding::encode(query),
            SEARCH_RETMAX
        )
    }

    pub(crate) fn fetch_url<S: AsRef<str>>(&self, ids: &[S]) -> String {
        let id_list = ids
            .iter()
            .map(|id| urlencoding::encode(id.as_ref()).into_owned())
            .collect::<Vec<_>>()
            .join(",");

        format!(
            "{}/efetch.fcgi?db=pubmed&id={}&retmode=xml",
            self.base_url, id_list
        )
    }

    /// Append credential parameters (api_key, email, tool) to `url`
    fn with_api_params(&self, url: &str) -> String {
        let api_params = self.config.build_api_params();
        if api_params.is_empty() {
            return url.to_string();
        }

        let separator = if url.contains('?') { '&' } else { '?' };
        let param_strings: Vec<String> = api_params
            .into_iter()
            .map(|(key, value)| format!("{}={}", key, urlencoding::encode(&value)))
            .collect();

        format!("{}{}{}", url, separator, param_strings.join("&"))
    }

    /// Send a GET request and turn any non-success status into `HttpError`
    async fn make_request(&self, url: &str) -> Result<Response> {
        // `url` is logged before credentials are appended
        debug!("Making API request to: {}", url);
        let final_url = self.with_api_params(url);

        let response = self.client.get(&final_url).send().await?;

        if !response.status().is_success() {
            warn!("API request failed with status: {}", response.status());
            return Err(PubMedError::from_status(response.status()));
        }

        Ok(response)
    }
}

impl Default for PubMedClient {
    fn default() -> Self {
        Self::new()
    }
}
