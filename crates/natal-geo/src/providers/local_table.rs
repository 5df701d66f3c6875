//! Static local lookup table — the last provider in the chain.
//!
//! A handful of places the service must resolve even when both network
//! geocoders are down. Keys are matched after trimming, lowercasing, and
//! collapsing internal whitespace.

use async_trait::async_trait;

use natal_core::chart::Location;

use super::{GeocodeProvider, ProviderError};

/// `(normalized key, display name, latitude, longitude)`.
const LOCAL_ENTRIES: &[(&str, &str, f64, f64)] = &[
    (
        "fort pierce, fl",
        "Fort Pierce, Florida, United States",
        27.4467,
        -80.3256,
    ),
    (
        "fort pierce, florida",
        "Fort Pierce, Florida, United States",
        27.4467,
        -80.3256,
    ),
    (
        "ft pierce, fl",
        "Fort Pierce, Florida, United States",
        27.4467,
        -80.3256,
    ),
    (
        "ft pierce, florida",
        "Fort Pierce, Florida, United States",
        27.4467,
        -80.3256,
    ),
];

fn normalize_key(input: &str) -> String {
    input
        .trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Offline fallback table provider.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalTableProvider;

#[async_trait]
impl GeocodeProvider for LocalTableProvider {
    fn name(&self) -> &'static str {
        "local-table"
    }

    async fn search(&self, query: &str) -> Result<Vec<Location>, ProviderError> {
        let key = normalize_key(query);
        Ok(LOCAL_ENTRIES
            .iter()
            .filter(|(entry_key, ..)| *entry_key == key)
            .map(|&(_, display_name, latitude, longitude)| Location {
                display_name: display_name.to_string(),
                latitude,
                longitude,
            })
            .collect())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
