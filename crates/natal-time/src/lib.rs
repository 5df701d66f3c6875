//! # natal-time
//!
//! Temporal resolution for the natal chart engine: civil date/time parsing,
//! DST-safe conversion of a wall-clock birth time to a UTC instant, and the
//! latitude/longitude → IANA zone lookup seam.
//!
//! The one policy decision here is deliberate and user-facing: a local time
//! that is ambiguous because of a DST fall-back overlap resolves to the
//! **earlier** of the two valid instants, and the result carries a note the
//! caller discloses to the end user. A local time inside a spring-forward
//! gap is an error.

#![deny(unsafe_code)]

pub mod parse;
pub mod resolver;
pub mod zone;

pub use resolver::resolve_instant;
pub use zone::{TzfZoneLookup, ZoneLookup};
