//! Smoke tests against the live NCBI E-utilities service
//!
//! Only run with `--features integration-tests` and `PUBMED_REAL_API_TESTS=1`.
//! `PUBMED_API_KEY` is picked up when present.

mod common;

use common::should_run_real_api_tests;
use papers_client::{ClientConfig, PubMedClient};
use tracing::info;
use tracing_test::traced_test;

fn create_real_client() -> PubMedClient {
    PubMedClient::with_config(ClientConfig::from_env().with_tool("get-papers-list-integration-tests"))
}

#[tokio::test]
#[traced_test]
async fn test_real_search_and_fetch() {
    if !should_run_real_api_tests() {
        info!("Skipping real API test (set PUBMED_REAL_API_TESTS and enable integration-tests)");
        return;
    }

    let client = create_real_client();

    let pmids = client.search_ids("cancer research").await.unwrap();
    assert!(!pmids.is_empty());
    assert!(pmids.len() <= papers_client::SEARCH_RETMAX);
    assert!(pmids.iter().all(|id| id.chars().all(|c| c.is_ascii_digit())));

    let first: Vec<&str> = pmids.iter().take(3).map(String::as_str).collect();
    let xml = client.fetch_details(&first).await.unwrap();
    assert!(xml.contains("<PubmedArticleSet>"));
    for pmid in first {
        assert!(xml.contains(pmid));
    }
}

#[tokio::test]
#[traced_test]
async fn test_real_known_article() {
    if !should_run_real_api_tests() {
        info!("Skipping real API test (set PUBMED_REAL_API_TESTS and enable integration-tests)");
        return;
    }

    let client = create_real_client();
    let xml = client.fetch_details(&["31978945"]).await.unwrap();

    assert!(xml.contains("<PMID Version=\"1\">31978945</PMID>"));
}
