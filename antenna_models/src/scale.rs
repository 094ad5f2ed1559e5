//! Beamwidth → pattern scale factor.
//!
//! The azimuth lobe is `gain(θ) = |sin(kθ)/(kθ)|`; `k` controls how fast
//! the lobe narrows. Two incompatible conventions exist for deriving `k`
//! from a specified beamwidth, so the choice is an explicit parameter and
//! a caller can never get one while asking for the other.

use clap::ValueEnum;
use link_core::error::{ensure_positive, ParamResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// First positive root of `x = tan(x)`, where `d/dx [sin(x)/x] = 0`:
/// the first null of the sinc pattern.
pub const FIRST_NULL_ROOT: f64 = 4.49340945790906;

/// Solution of `sin(x)/x = sqrt(0.5)`: the −3 dB point of the sinc pattern.
pub const HALF_POWER_ROOT: f64 = 1.89549;

/// Which feature of the lobe the specified beamwidth pins down.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum BeamwidthConvention {
    /// The first pattern null sits at ±beamwidth/2.
    FirstNull,
    /// The −3 dB (half-power) point sits at ±beamwidth/2.
    HalfPower,
}

impl fmt::Display for BeamwidthConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BeamwidthConvention::FirstNull => write!(f, "first-null"),
            BeamwidthConvention::HalfPower => write!(f, "half-power"),
        }
    }
}

/// Scale factor `k` for a beamwidth given in degrees.
pub fn scale_factor(beam_width_deg: f64, convention: BeamwidthConvention) -> ParamResult<f64> {
    ensure_positive("beam_width", beam_width_deg)?;

    let half_width_rad = (beam_width_deg / 2.0).to_radians();
    let root = match convention {
        BeamwidthConvention::FirstNull => FIRST_NULL_ROOT,
        BeamwidthConvention::HalfPower => HALF_POWER_ROOT,
    };
    Ok(root / half_width_rad)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn first_null_lands_at_half_beamwidth() {
        // At θ = beamwidth/2 the argument kθ must hit the sinc root.
        let k = scale_factor(1.2, BeamwidthConvention::FirstNull).unwrap();
        let x = k * (0.6_f64).to_radians();
        assert_relative_eq!(x, FIRST_NULL_ROOT, max_relative = 1e-12);
    }

    #[test]
    fn half_power_gain_is_one_half_at_half_beamwidth() {
        let k = scale_factor(1.2, BeamwidthConvention::HalfPower).unwrap();
        let theta = (0.6_f64).to_radians();
        let gain = ((k * theta).sin() / (k * theta)).abs();
        assert_relative_eq!(gain, 0.5, max_relative = 1e-4);
    }

    #[test]
    fn conventions_never_alias() {
        let first_null = scale_factor(2.0, BeamwidthConvention::FirstNull).unwrap();
        let half_power = scale_factor(2.0, BeamwidthConvention::HalfPower).unwrap();
        assert!(first_null > half_power);
    }

    #[test]
    fn zero_beamwidth_is_rejected() {
        assert!(scale_factor(0.0, BeamwidthConvention::FirstNull).is_err());
    }
}
