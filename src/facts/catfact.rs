//! catfact.ninja client.
//!
//! `GET {base_url}/fact` answers with:
//!
//! ```json
//! {"fact": "Cats sleep 70% of their lives.", "length": 30}
//! ```

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info, warn};
use serde::Deserialize;

use crate::facts::{FactError, FactSource};

pub const DEFAULT_FACT_BASE_URL: &str = "https://catfact.ninja";

#[derive(Deserialize, Debug)]
struct FactResponse {
    fact: String,
    #[allow(dead_code)] // Present in the payload, not displayed
    #[serde(default)]
    length: Option<u32>,
}

pub struct CatFactClient {
    base_url: String,
    client: reqwest::Client,
}

impl CatFactClient {
    /// Build a client for `base_url` (no trailing `/fact`).
    ///
    /// `timeout` bounds the whole request so a hung API ends in a failure
    /// instead of an endless spinner.
    pub fn new(base_url: Option<String>, timeout: Option<Duration>) -> Self {
        let base_url = base_url
            .unwrap_or_else(|| DEFAULT_FACT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().unwrap_or_else(|e| {
            warn!("Failed to build configured HTTP client ({e}), using defaults");
            reqwest::Client::new()
        });

        Self { base_url, client }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl FactSource for CatFactClient {
    fn name(&self) -> &str {
        "catfact"
    }

    async fn fetch_fact(&self) -> Result<String, FactError> {
        let url = format!("{}/fact", self.base_url);
        info!("Requesting cat fact from {}", url);

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| FactError::Network(e.to_string()))?;

        debug!("Fact API response status: {}", response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let err_body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("Fact API error: {} - {}", status, err_body);
            return Err(FactError::Api {
                status,
                message: err_body,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| FactError::Network(e.to_string()))?;
        let parsed: FactResponse =
            serde_json::from_str(&body).map_err(|e| FactError::Parse(e.to_string()))?;

        let fact = parsed.fact.trim();
        if fact.is_empty() {
            return Err(FactError::Empty);
        }
        Ok(fact.to_string())
    }
}
