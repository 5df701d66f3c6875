//! Geocoding providers.
//!
//! Each provider implements one operation, [`GeocodeProvider::search`], and
//! knows nothing about the others; ordering and fallthrough live in
//! [`crate::resolver`].

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

use natal_core::chart::Location;

mod local_table;
mod nominatim;
mod open_meteo;

pub use local_table::LocalTableProvider;
pub use nominatim::NominatimProvider;
pub use open_meteo::OpenMeteoProvider;

/// Per-provider request timeout, so one slow provider cannot stall the chain.
pub(crate) const PROVIDER_TIMEOUT: Duration = Duration::from_secs(10);

/// A provider-internal failure.
///
/// Never surfaced to callers of the resolver: any failure here means "no
/// result from this provider" and the chain moves on.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The HTTP request failed (network, timeout, TLS).
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The provider answered with a non-success status.
    #[error("unexpected status {0}")]
    Status(u16),

    /// The response body did not have the expected shape.
    #[error("unexpected response shape: {0}")]
    Decode(String),
}

/// A single geocoding capability.
#[async_trait]
pub trait GeocodeProvider: Send + Sync {
    /// Short name for logging.
    fn name(&self) -> &'static str;

    /// Search for candidates matching the free-text query, best first.
    ///
    /// An empty vector means "no match" and is not an error.
    async fn search(&self, query: &str) -> Result<Vec<Location>, ProviderError>;
}
