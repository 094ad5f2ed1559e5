//! Radar and target value objects.
//!
//! All types here are immutable plain data: created by the caller, passed
//! by reference into the stateless equation/scan functions, never mutated.

use crate::error::{ensure_positive, ParamResult};
use serde::{Deserialize, Serialize};

/// How the antenna sweeps, together with the sweep rate in the unit that
/// scan geometry actually uses. Keeping the rate inside the variant removes
/// any ambiguity about whether a bare number means rad/s or revolutions/s.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum ScanMode {
    /// Continuous circular sweep at a fixed angular rate (rad/s).
    Circular { omega_rad_per_s: f64 },
    /// Conical scan; the beam is assumed continuously on target, so only
    /// the rotation rate (revolutions/s) matters.
    Conic { revs_per_sec: f64 },
}

impl ScanMode {
    /// The sweep rate carried by the variant, for validation and display.
    pub fn rate(&self) -> f64 {
        match *self {
            ScanMode::Circular { omega_rad_per_s } => omega_rad_per_s,
            ScanMode::Conic { revs_per_sec } => revs_per_sec,
        }
    }
}

/// Physical configuration of a radar.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Radar {
    /// Peak transmit power (W)
    pub peak_power: f64,
    /// Antenna gain (dB)
    pub antenna_gain: f64,
    /// Carrier frequency (Hz)
    pub frequency: f64,
    /// Receiver noise figure (dB)
    pub noise_figure: f64,
    /// Receiver bandwidth (Hz)
    pub band_width: f64,
    /// Transmit pulse width (s)
    pub pulse_width: f64,
    /// Pulse repetition frequency (Hz)
    pub pulse_repetition: f64,
    /// Main-lobe beamwidth (rad)
    pub beam_width: f64,
    /// Sweep pattern and rate
    pub scan: ScanMode,
}

impl Default for Radar {
    fn default() -> Self {
        Self {
            peak_power: 1.0e6,       // 1 MW
            antenna_gain: 35.0,      // dB
            frequency: 3.0e9,        // S-band
            noise_figure: 3.0,       // dB
            band_width: 1.0e6,       // 1 MHz
            pulse_width: 1.0e-6,     // matched to 1/B
            pulse_repetition: 1000.0,
            beam_width: 0.02,        // ~1.15°
            scan: ScanMode::Circular {
                omega_rad_per_s: 0.0628, // one rotation in ~100 s
            },
        }
    }
}

impl Radar {
    /// Check every positivity precondition, naming the first violated field.
    pub fn validate(&self) -> ParamResult<()> {
        ensure_positive("peak_power", self.peak_power)?;
        ensure_positive("frequency", self.frequency)?;
        ensure_positive("band_width", self.band_width)?;
        ensure_positive("pulse_width", self.pulse_width)?;
        ensure_positive("pulse_repetition", self.pulse_repetition)?;
        ensure_positive("beam_width", self.beam_width)?;
        ensure_positive("angular_velocity", self.scan.rate())?;
        Ok(())
    }
}

/// Radar target parameters.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Target {
    /// Radar cross-section (m²)
    pub rcs: f64,
}

impl Target {
    pub fn new(rcs: f64) -> Self {
        Self { rcs }
    }

    /// A zero or negative cross-section would drive the SNR to −∞; reject
    /// it up front instead.
    pub fn validate(&self) -> ParamResult<()> {
        ensure_positive("rcs", self.rcs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParamError;

    #[test]
    fn default_radar_is_valid() {
        assert!(Radar::default().validate().is_ok());
    }

    #[test]
    fn zero_frequency_is_rejected_by_name() {
        let radar = Radar {
            frequency: 0.0,
            ..Radar::default()
        };
        assert_eq!(
            radar.validate(),
            Err(ParamError::NonPositive {
                field: "frequency",
                value: 0.0
            })
        );
    }

    #[test]
    fn stopped_scan_is_rejected() {
        let radar = Radar {
            scan: ScanMode::Conic { revs_per_sec: 0.0 },
            ..Radar::default()
        };
        assert_eq!(
            radar.validate(),
            Err(ParamError::NonPositive {
                field: "angular_velocity",
                value: 0.0
            })
        );
    }

    #[test]
    fn negative_rcs_is_rejected() {
        assert!(Target::new(-1.0).validate().is_err());
        assert!(Target::new(1.0).validate().is_ok());
    }
}
