//! # natal-core
//!
//! Foundation types and utilities for the natal chart engine.
//!
//! This crate provides the shared vocabulary that the other natal crates
//! depend on:
//!
//! - **Zodiac vocabulary**: [`zodiac::Body`], [`zodiac::Sign`], and the
//!   system/house-mode selectors
//! - **Circular arithmetic**: [`arc::normalize`], [`arc::forward_arc`],
//!   [`arc::short_arc`] — the single shared primitive for every
//!   containment and aspect computation
//! - **Chart record**: [`chart::Chart`], [`chart::Placement`],
//!   [`chart::Location`], [`chart::ResolvedInstant`]
//! - **Errors**: [`errors::ChartError`] hierarchy via `thiserror`
//!
//! ## Crate Position
//!
//! Foundation crate. Depended on by all other natal crates.

#![deny(unsafe_code)]

pub mod arc;
pub mod chart;
pub mod errors;
pub mod zodiac;
