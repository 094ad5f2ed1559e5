//! Radar range equation: forward (range → SNR) and inverse (SNR → range).
//!
//! # Design choices
//! - Both directions share one `link_budget_factor` so that composing them
//!   round-trips to floating tolerance: the forward solution is
//!   `SNR = factor / R⁴` and the inverse is `R = (factor / SNR)^(1/4)`.
//! - Receiver noise power is `k_B · T_sys · B · F`; pulse-compression gain
//!   `N = τ · B` multiplies the signal term. When `τ · B < 1` the parameter
//!   set is physically inconsistent and N is clamped to 1 instead of
//!   failing; a tolerated degradation, not an error.
//! - `R = 0` is a valid degenerate input: `SNR` diverges to `+∞` and is
//!   returned as such.
//!
//! All dB quantities at the interface (antenna gain, noise figure, losses,
//! SNR) are converted to linear scale internally.

use crate::constants::{BOLTZMANN_CONST, LIGHT_SPEED, SYSTEM_TEMPERATURE};
use crate::error::ParamResult;
use crate::types::{Radar, Target};
use rayon::prelude::*;
use std::f64::consts::PI;

/// Convert a decibel quantity to linear scale.
pub fn db_to_linear(db: f64) -> f64 {
    10.0_f64.powf(db / 10.0)
}

/// Convert a linear quantity to decibels.
pub fn linear_to_db(linear: f64) -> f64 {
    10.0 * linear.log10()
}

/// The range-independent part of the radar equation:
///
/// `P_t · G² · λ² · σ · N · n  /  [(4π)³ · k_B·T_sys·B·F · L]`
///
/// `SNR_linear(R) = factor / R⁴`. Inputs are validated before any division.
pub fn link_budget_factor(
    radar: &Radar,
    target: &Target,
    losses_db: f64,
    num_pulses: f64,
) -> ParamResult<f64> {
    radar.validate()?;
    target.validate()?;

    let antenna_gain = db_to_linear(radar.antenna_gain);
    let noise_figure = db_to_linear(radar.noise_figure);
    let losses = db_to_linear(losses_db);

    let wavelength = LIGHT_SPEED / radar.frequency; // [m]

    // Pulse-compression gain N = τ·B, floored at 1 when the pulse is
    // shorter than the achievable compressed width 1/B.
    let compression_gain = (radar.pulse_width * radar.band_width).max(1.0);

    let signal = radar.peak_power
        * antenna_gain.powi(2)
        * wavelength.powi(2)
        * target.rcs
        * compression_gain
        * num_pulses;
    let noise = (4.0 * PI).powi(3)
        * (BOLTZMANN_CONST * SYSTEM_TEMPERATURE * radar.band_width * noise_figure)
        * losses;

    Ok(signal / noise)
}

/// Signal-to-noise ratio (dB) at each range (m). Vectorized; elements are
/// independent, so the sweep is evaluated in parallel.
pub fn snr_db(
    radar: &Radar,
    target: &Target,
    losses_db: f64,
    num_pulses: f64,
    ranges_m: &[f64],
) -> ParamResult<Vec<f64>> {
    let factor = link_budget_factor(radar, target, losses_db, num_pulses)?;
    Ok(ranges_m
        .par_iter()
        .map(|r| linear_to_db(factor / r.powi(4)))
        .collect())
}

/// Range (m) at each signal-to-noise ratio (dB). Exact algebraic inverse
/// of [`snr_db`] for fixed radar/target/losses/pulse count.
pub fn range_m(
    radar: &Radar,
    target: &Target,
    losses_db: f64,
    num_pulses: f64,
    snrs_db: &[f64],
) -> ParamResult<Vec<f64>> {
    let factor = link_budget_factor(radar, target, losses_db, num_pulses)?;
    Ok(snrs_db
        .par_iter()
        .map(|snr| (factor / db_to_linear(*snr)).powf(0.25))
        .collect())
}

/// Scalar convenience wrapper around [`snr_db`].
pub fn snr_at_range(
    radar: &Radar,
    target: &Target,
    losses_db: f64,
    num_pulses: f64,
    range_m: f64,
) -> ParamResult<f64> {
    let factor = link_budget_factor(radar, target, losses_db, num_pulses)?;
    Ok(linear_to_db(factor / range_m.powi(4)))
}

/// Scalar convenience wrapper around [`range_m`].
pub fn range_at_snr(
    radar: &Radar,
    target: &Target,
    losses_db: f64,
    num_pulses: f64,
    snr_db: f64,
) -> ParamResult<f64> {
    let factor = link_budget_factor(radar, target, losses_db, num_pulses)?;
    Ok((factor / db_to_linear(snr_db)).powf(0.25))
}
