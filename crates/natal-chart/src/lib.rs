//! # natal-chart
//!
//! The computational heart of the natal chart engine:
//!
//! - [`ephemeris`]: the seam to the external astronomical library, plus a
//!   serde-backed snapshot implementation for tests and offline use
//! - [`houses`]: whole-sign and Placidus house geometry
//! - [`classify`]: sign/house classification, chart ruler, dominant
//!   houses, and the two aspect-derived featured placements
//! - [`assemble`]: composition of location, instant, and classification
//!   into the final [`natal_core::chart::Chart`]

#![deny(unsafe_code)]

pub mod assemble;
pub mod classify;
pub mod ephemeris;
pub mod houses;

pub use assemble::{ChartRequest, compute_chart};
pub use ephemeris::{Ephemeris, RawHouses, SnapshotEphemeris};
