//! HTTP client for the file-report endpoint.

use super::verdict::{classify, LookupRow, Verdict};
use crate::config::LookupSettings;
use crate::error::LookupError;
use crate::input::read_hash_list;
use crate::output::{format_field, write_rows};
use colored::Colorize;
use reqwest::StatusCode;
use serde_json::Value;
use std::path::Path;

/// Header carrying the API key.
const API_KEY_HEADER: &str = "x-apikey";

/// Reputation API client with an injected key.
pub struct ReputationClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    delay: std::time::Duration,
}

impl ReputationClient {
    /// Build a client; fails without an API key.
    pub fn new(settings: &LookupSettings) -> Result<Self, LookupError> {
        let api_key = settings
            .api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .ok_or(LookupError::MissingApiKey)?;
        let http = reqwest::Client::builder()
            .timeout(settings.timeout)
            .build()?;

        Ok(ReputationClient {
            http,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            api_key,
            delay: settings.delay,
        })
    }

    /// URL of the file report for `hash`.
    pub fn report_url(&self, hash: &str) -> String {
        format!("{}/files/{}", self.base_url, hash)
    }

    /// Fetch the raw report; `None` on any HTTP or decode failure.
    pub async fn fetch_report(&self, hash: &str) -> Option<Value> {
        let url = self.report_url(hash);
        log::debug!("GET {url}");

        let response = match self
            .http
            .get(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await
        {
            Ok(r) => r,
            Err(e) => {
                log::warn!("Request for {hash} failed: {e}");
                return None;
            }
        };

        if response.status() != StatusCode::OK {
            log::warn!(
                "Error {status}: unable to fetch data for {hash}",
                status = response.status()
            );
            return None;
        }

        match response.json::<Value>().await {
            Ok(json) => Some(json),
            Err(e) => {
                log::warn!("Invalid JSON for {hash}: {e}");
                None
            }
        }
    }

    /// Look up one hash.
    pub async fn check(&self, hash: &str) -> Verdict {
        classify(self.fetch_report(hash).await.as_ref())
    }

    /// Look up every hash in order, pausing `delay` between requests.
    pub async fn check_all(&self, hashes: &[String]) -> Vec<LookupRow> {
        let mut rows = Vec::with_capacity(hashes.len());
        for (i, hash) in hashes.iter().enumerate() {
            if i > 0 && !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }
            let verdict = self.check(hash).await;
            let shown = match verdict {
                Verdict::Clean => verdict.to_string().green(),
                Verdict::Flagged => verdict.to_string().red(),
                Verdict::Unknown => verdict.to_string().yellow(),
            };
            log::info!("{}: {shown}", format_field(hash, 66));
            rows.push(LookupRow {
                hash: hash.clone(),
                verdict,
            });
        }
        rows
    }
}

/// Read hashes from `input`, look each one up and write `hash,verdict` rows.
///
/// Returns the number of hashes processed.
pub async fn lookup_file(
    settings: &LookupSettings,
    input: &Path,
    output: &Path,
) -> Result<usize, LookupError> {
    let client = ReputationClient::new(settings)?;
    let hashes = read_hash_list(input)?;
    log::info!("Looking up {} hashes", hashes.len());

    let rows = client.check_all(&hashes).await;
    write_rows(output, &rows)?;
    Ok(rows.len())
}
