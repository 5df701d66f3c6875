//! Nominatim (OpenStreetMap) geocoder — primary provider.
//!
//! Nominatim's usage policy requires an identifying `User-Agent`, so the
//! provider carries one; the base URL is overridable for tests.

use async_trait::async_trait;
use reqwest::header::{ACCEPT, USER_AGENT};
use serde::Deserialize;

use natal_core::chart::Location;

use super::{GeocodeProvider, PROVIDER_TIMEOUT, ProviderError};

const DEFAULT_BASE_URL: &str = "https://nominatim.openstreetmap.org";
const DEFAULT_USER_AGENT: &str = "natal-chart/0.1";

/// One Nominatim search hit. Coordinates arrive as strings.
#[derive(Debug, Deserialize)]
struct NominatimPlace {
    display_name: String,
    lat: String,
    lon: String,
}

/// Nominatim search provider.
pub struct NominatimProvider {
    client: reqwest::Client,
    base_url: String,
    user_agent: String,
}

impl NominatimProvider {
    /// Create a provider against the public Nominatim endpoint.
    #[must_use]
    pub fn new(client: reqwest::Client) -> Self {
        Self {
            client,
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    /// Override the base URL (tests, self-hosted instances).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the identifying `User-Agent`.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

#[async_trait]
impl GeocodeProvider for NominatimProvider {
    fn name(&self) -> &'static str {
        "nominatim"
    }

    async fn search(&self, query: &str) -> Result<Vec<Location>, ProviderError> {
        let url = format!("{}/search", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[("q", query), ("format", "jsonv2"), ("limit", "1")])
            .header(USER_AGENT, &self.user_agent)
            .header(ACCEPT, "application/json")
            .timeout(PROVIDER_TIMEOUT)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Status(status.as_u16()));
        }

        let places: Vec<NominatimPlace> = response.json().await?;
        places
            .into_iter()
            .map(|place| {
                let latitude: f64 = place
                    .lat
                    .parse()
                    .map_err(|_| ProviderError::Decode(format!("bad lat {:?}", place.lat)))?;
                let longitude: f64 = place
                    .lon
                    .parse()
                    .map_err(|_| ProviderError::Decode(format!("bad lon {:?}", place.lon)))?;
                Ok(Location {
                    display_name: place.display_name,
                    latitude,
                    longitude,
                })
            })
            .collect()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
