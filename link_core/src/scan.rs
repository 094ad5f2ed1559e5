//! Pulse-integration scan models.
//!
//! Both models return the expected number of pulses the beam puts on a
//! target during one pass. The count is generally non-integer; no rounding
//! happens here because the range equation consumes it as an integration
//! gain, not as a loop bound.

use crate::error::{ensure_positive, ParamResult};
use crate::types::{Radar, ScanMode};

/// Pulses on target for a circular sweep: the beam dwells on the target
/// for `beam_width / ω` seconds.
pub fn pulses_circular(
    prf_hz: f64,
    beam_width_rad: f64,
    omega_rad_per_s: f64,
) -> ParamResult<f64> {
    ensure_positive("pulse_repetition", prf_hz)?;
    ensure_positive("beam_width", beam_width_rad)?;
    ensure_positive("angular_velocity", omega_rad_per_s)?;

    let dwell = beam_width_rad / omega_rad_per_s; // [s]
    Ok(prf_hz * dwell)
}

/// Pulses on target for a conical scan, assuming the beam is continuously
/// on target over one revolution.
pub fn pulses_conic(prf_hz: f64, revs_per_sec: f64) -> ParamResult<f64> {
    ensure_positive("pulse_repetition", prf_hz)?;
    ensure_positive("angular_velocity", revs_per_sec)?;

    let dwell = 1.0 / revs_per_sec; // [s]
    Ok(prf_hz * dwell)
}

/// Pulse count for whatever scan mode the radar is configured with.
pub fn pulses_on_target(radar: &Radar) -> ParamResult<f64> {
    match radar.scan {
        ScanMode::Circular { omega_rad_per_s } => {
            pulses_circular(radar.pulse_repetition, radar.beam_width, omega_rad_per_s)
        }
        ScanMode::Conic { revs_per_sec } => pulses_conic(radar.pulse_repetition, revs_per_sec),
    }
}
