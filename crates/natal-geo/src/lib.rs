//! # natal-geo
//!
//! Location resolution for the natal chart engine.
//!
//! Free-text or `"lat,lon"` input becomes a single
//! [`natal_core::chart::Location`]:
//!
//! 1. Coordinate pairs parse directly — never a network call.
//! 2. Free text tries geocoding providers in fixed priority order
//!    (Nominatim → Open-Meteo → static local table). A provider failure or
//!    empty result set falls through silently; only exhaustion of the whole
//!    chain is an error.
//!
//! Providers are trait objects over one [`providers::GeocodeProvider::search`]
//! operation, so the chain is an ordered list, not per-provider branching.

#![deny(unsafe_code)]

pub mod coords;
pub mod providers;
pub mod resolver;

pub use resolver::LocationResolver;
