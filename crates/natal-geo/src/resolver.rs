//! Ordered short-circuit fallback across geocoding providers.

use tracing::{debug, warn};

use natal_core::chart::Location;
use natal_core::errors::LocationError;

use crate::coords::parse_coordinates;
use crate::providers::{
    GeocodeProvider, LocalTableProvider, NominatimProvider, OpenMeteoProvider,
};

/// Resolves free-text or coordinate input to a single [`Location`].
pub struct LocationResolver {
    providers: Vec<Box<dyn GeocodeProvider>>,
}

impl LocationResolver {
    /// Build the standard chain: Nominatim → Open-Meteo → local table.
    #[must_use]
    pub fn new(user_agent: impl Into<String>) -> Self {
        let client = reqwest::Client::new();
        Self {
            providers: vec![
                Box::new(
                    NominatimProvider::new(client.clone()).with_user_agent(user_agent),
                ),
                Box::new(OpenMeteoProvider::new(client)),
                Box::new(LocalTableProvider),
            ],
        }
    }

    /// Build a resolver over an explicit provider list (tests, alternate
    /// deployments). Order is priority order.
    #[must_use]
    pub fn with_providers(providers: Vec<Box<dyn GeocodeProvider>>) -> Self {
        Self { providers }
    }

    /// Resolve the input to a location.
    ///
    /// A `"lat,lon"` pair parses directly and never touches a provider.
    /// Otherwise each provider is tried in order; any failure or empty
    /// result set falls through to the next, and only exhaustion of the
    /// whole chain is an error. The first candidate of the first provider
    /// with any candidates wins — results are never merged or re-scored.
    pub async fn resolve(&self, input: &str) -> Result<Location, LocationError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(LocationError::EmptyInput);
        }

        if let Some(location) = parse_coordinates(trimmed)? {
            debug!(input = trimmed, "Resolved location from direct coordinates");
            return Ok(location);
        }

        for provider in &self.providers {
            match provider.search(trimmed).await {
                Ok(candidates) => {
                    if let Some(best) = candidates.into_iter().next() {
                        debug!(
                            provider = provider.name(),
                            display_name = %best.display_name,
                            "Resolved location"
                        );
                        return Ok(best);
                    }
                    debug!(provider = provider.name(), "No candidates, trying next");
                }
                // Intermediate failures are silent by design: a success from
                // a later provider beats failing fast here.
                Err(error) => {
                    warn!(
                        provider = provider.name(),
                        error = %error,
                        "Provider failed, trying next"
                    );
                }
            }
        }

        Err(LocationError::Exhausted)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
