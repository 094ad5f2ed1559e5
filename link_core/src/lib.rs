//! `link_core` — Radar link-budget core.
//!
//! # Module layout
//! - [`constants`] — physical constants and unit-conversion factors
//! - [`types`]     — `Radar` / `Target` value objects, `ScanMode`
//! - [`error`]     — typed parameter errors
//! - [`scan`]      — pulses-on-target models (circular, conical)
//! - [`equation`]  — radar range equation, forward and inverse

pub mod constants;
pub mod equation;
pub mod error;
pub mod scan;
pub mod types;

pub use equation::{range_at_snr, range_m, snr_at_range, snr_db};
pub use error::{ParamError, ParamResult};
pub use scan::{pulses_circular, pulses_conic, pulses_on_target};
pub use types::{Radar, ScanMode, Target};
