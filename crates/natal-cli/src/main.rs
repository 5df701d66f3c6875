//! # natal-cli
//!
//! Command-line front end for the natal chart engine. Resolves the birth
//! place and instant, computes the chart against an ephemeris snapshot,
//! and prints the result as pretty JSON on stdout.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use natal_chart::{ChartRequest, SnapshotEphemeris, compute_chart};
use natal_core::zodiac::{HouseSystem, ZodiacSystem};
use natal_geo::LocationResolver;
use natal_time::TzfZoneLookup;

const USER_AGENT: &str = concat!("natal/", env!("CARGO_PKG_VERSION"));

/// Compute a natal chart from birth data.
#[derive(Debug, Parser)]
#[command(name = "natal", version, about)]
struct Cli {
    /// Birth date, `YYYY-MM-DD`.
    #[arg(long)]
    date: String,

    /// Birth time, `HH:MM` 24-hour local.
    #[arg(long)]
    time: String,

    /// Birth place: free text (geocoded) or a `lat,lon` pair.
    #[arg(long)]
    location: String,

    /// Zodiac system.
    #[arg(long, default_value = "tropical")]
    system: ZodiacSystem,

    /// House system.
    #[arg(long = "house-system", default_value = "whole_sign")]
    house_system: HouseSystem,

    /// Path to an ephemeris snapshot JSON for the chart moment.
    #[arg(long)]
    ephemeris: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let ephemeris = SnapshotEphemeris::from_path(&cli.ephemeris)
        .with_context(|| format!("loading ephemeris snapshot {}", cli.ephemeris.display()))?;
    let locations = LocationResolver::new(USER_AGENT);
    let zones = TzfZoneLookup::new();

    let request = ChartRequest {
        date: cli.date,
        time: cli.time,
        location: cli.location,
        system: cli.system,
        house_system: cli.house_system,
    };

    let chart = compute_chart(&request, &locations, &zones, &ephemeris)
        .await
        .context("computing chart")?;

    println!("{}", serde_json::to_string_pretty(&chart)?);
    Ok(())
}
