//! Open-Meteo geocoder — secondary provider.
//!
//! No auth and no usage-policy headers. The display name is composed from
//! whichever of name/admin1/country the hit carries.

use async_trait::async_trait;
use serde::Deserialize;

use natal_core::chart::Location;

use super::{GeocodeProvider, PROVIDER_TIMEOUT, ProviderError};

const DEFAULT_BASE_URL: &str = "https://geocoding-api.open-meteo.com";

#[derive(Debug, Deserialize)]
struct OpenMeteoPayload {
    #[serde(default)]
    results: Option<Vec<OpenMeteoHit>>,
}

#[derive(Debug, Deserialize)]
struct OpenMeteoHit {
    name: String,
    #[serde(default)]
    admin1: Option<String>,
    #[serde(default)]
    country: Option<String>,
    latitude: f64,
    longitude: f64,
}

impl OpenMeteoHit {
    fn display_name(&self) -> String {
        let mut segments = vec![self.name.as_str()];
        segments.extend(self.admin1.as_deref());
        segments.extend(self.country.as_deref());
        segments.join(", ")
    }
}

/// Open-Meteo geocoding provider.
pub struct OpenMeteoProvider {
    client: reqwest::Client,
    base_url: String,
}

impl OpenMeteoProvider {
    /// Create a provider against the public Open-Meteo endpoint.
    #[must_use]
    pub fn new(client: reqwest::Client) -> Self {
        Self {
            client,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Override the base URL (tests).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[async_trait]
impl GeocodeProvider for OpenMeteoProvider {
    fn name(&self) -> &'static str {
        "open-meteo"
    }

    async fn search(&self, query: &str) -> Result<Vec<Location>, ProviderError> {
        let url = format!("{}/v1/search", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("name", query),
                ("count", "1"),
                ("language", "en"),
                ("format", "json"),
            ])
            .timeout(PROVIDER_TIMEOUT)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Status(status.as_u16()));
        }

        let payload: OpenMeteoPayload = response.json().await?;
        Ok(payload
            .results
            .unwrap_or_default()
            .into_iter()
            .map(|hit| Location {
                display_name: hit.display_name(),
                latitude: hit.latitude,
                longitude: hit.longitude,
            })
            .collect())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
