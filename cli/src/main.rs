//! `radlab` CLI: link-budget and antenna-pattern sweeps as JSON series.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use antenna_models::scale::BeamwidthConvention;
use link_core::types::{Radar, Target};
use profiles::{azimuth_profile, elevation_profile, range_profile, snr_profile, Series};

#[derive(Parser)]
#[command(name = "radlab", about = "Radar link-budget analysis CLI")]
struct Cli {
    /// Radar description as a JSON file; built-in surveillance radar when
    /// omitted.
    #[arg(long, global = true)]
    radar: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// SNR over a distance sweep (nautical miles).
    Snr {
        /// Sweep start (nm)
        #[arg(long, default_value_t = 1.0)]
        start: f64,
        /// Sweep end, exclusive (nm)
        #[arg(long, default_value_t = 60.0)]
        end: f64,
        /// Sweep step (nm)
        #[arg(long, default_value_t = 0.1)]
        step: f64,
        /// Target radar cross-section (m²)
        #[arg(long, default_value_t = 1.0)]
        rcs: f64,
        /// System losses (dB)
        #[arg(long, default_value_t = 3.0)]
        losses: f64,
        /// Write the (distance, snr) series to a JSON file
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Detection range over a required-SNR sweep (dB).
    Range {
        /// Sweep start (dB)
        #[arg(long, default_value_t = 0.0)]
        start: f64,
        /// Sweep end, exclusive (dB)
        #[arg(long, default_value_t = 40.0)]
        end: f64,
        /// Sweep step (dB)
        #[arg(long, default_value_t = 0.1)]
        step: f64,
        /// Target radar cross-section (m²)
        #[arg(long, default_value_t = 1.0)]
        rcs: f64,
        /// System losses (dB)
        #[arg(long, default_value_t = 3.0)]
        losses: f64,
        /// Write the (snr, distance) series to a JSON file
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Azimuth lobe and gain profiles.
    Azimuth {
        /// Maximum range (nm)
        #[arg(long, default_value_t = 60.0)]
        max_range: f64,
        /// Beamwidth (deg)
        #[arg(long, default_value_t = 1.2)]
        beam_width: f64,
        /// Beamwidth convention
        #[arg(long, value_enum, default_value_t = BeamwidthConvention::FirstNull)]
        convention: BeamwidthConvention,
        /// Write both series to a JSON file
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Elevation lobe and gain profiles.
    Elevation {
        /// Maximum range (nm)
        #[arg(long, default_value_t = 60.0)]
        max_range: f64,
        /// Maximum design elevation (deg)
        #[arg(long, default_value_t = 50.0)]
        max_elev: f64,
        /// Minimum design elevation (deg)
        #[arg(long, default_value_t = 0.0)]
        min_elev: f64,
        /// Expected target elevation (deg)
        #[arg(long, default_value_t = 3.0)]
        tgt_ang: f64,
        /// Dimensionless lower-segment shaping factor
        #[arg(long, default_value_t = 50.0)]
        factor: f64,
        /// Write both series to a JSON file
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let radar = load_radar(cli.radar.as_deref())?;

    match cli.command {
        Commands::Snr {
            start,
            end,
            step,
            rcs,
            losses,
            output,
        } => {
            let series = snr_profile(start, end, step, &radar, &Target::new(rcs), losses)?;
            summarize("SNR", "nm", "dB", &series);
            write_series(output.as_deref(), &serde_json::to_value(&series)?)?;
        }
        Commands::Range {
            start,
            end,
            step,
            rcs,
            losses,
            output,
        } => {
            let series = range_profile(start, end, step, &radar, &Target::new(rcs), losses)?;
            summarize("Range", "dB", "nm", &series);
            write_series(output.as_deref(), &serde_json::to_value(&series)?)?;
        }
        Commands::Azimuth {
            max_range,
            beam_width,
            convention,
            output,
        } => {
            let profile = azimuth_profile(max_range, beam_width, convention)?;
            summarize("Azimuth gain", "deg", "", &profile.gain);
            write_series(output.as_deref(), &serde_json::to_value(&profile)?)?;
        }
        Commands::Elevation {
            max_range,
            max_elev,
            min_elev,
            tgt_ang,
            factor,
            output,
        } => {
            let profile = elevation_profile(max_range, max_elev, min_elev, tgt_ang, factor)?;
            summarize("Elevation gain", "deg", "", &profile.gain);
            write_series(output.as_deref(), &serde_json::to_value(&profile)?)?;
        }
    }

    Ok(())
}

/// Read a radar description from a JSON file, or fall back to the built-in
/// surveillance set.
fn load_radar(path: Option<&Path>) -> Result<Radar> {
    let Some(path) = path else {
        return Ok(Radar::default());
    };
    let file = std::fs::File::open(path)
        .with_context(|| format!("opening radar file {}", path.display()))?;
    let radar: Radar = serde_json::from_reader(std::io::BufReader::new(file))
        .with_context(|| format!("parsing radar file {}", path.display()))?;
    radar.validate()?;
    tracing::info!("loaded radar from {}", path.display());
    Ok(radar)
}

fn summarize(name: &str, x_unit: &str, y_unit: &str, series: &Series) {
    let (lo, hi) = series
        .y
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });
    println!(
        "{name}: {} points over [{:.3}, {:.3}] {x_unit}, y in [{:.3}, {:.3}] {y_unit}",
        series.len(),
        series.x.first().copied().unwrap_or(f64::NAN),
        series.x.last().copied().unwrap_or(f64::NAN),
        lo,
        hi,
    );
}

fn write_series(path: Option<&Path>, value: &serde_json::Value) -> Result<()> {
    if let Some(path) = path {
        let file = std::fs::File::create(path)
            .with_context(|| format!("creating {}", path.display()))?;
        serde_json::to_writer_pretty(std::io::BufWriter::new(file), value)?;
        println!("Series saved to {}", path.display());
    }
    Ok(())
}
