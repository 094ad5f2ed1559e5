//! Azimuth beam pattern: a folded sinc lobe around boresight.

/// Gain reported at boresight, where `sin(kθ)/(kθ)` is the indeterminate
/// form 0/0 whose analytic limit is 1.
pub const AZIMUTH_BORESIGHT_GAIN: f64 = 1.0;

/// Gain `|sin(kθ)/(kθ)|` at each off-boresight angle (rad) for a scale
/// factor `k` from [`crate::scale::scale_factor`]. Indeterminate entries
/// (boresight) are mapped to [`AZIMUTH_BORESIGHT_GAIN`]; output is
/// non-negative.
pub fn azimuth_pattern(angles_rad: &[f64], scale: f64) -> Vec<f64> {
    angles_rad
        .iter()
        .map(|&theta| {
            let x = scale * theta;
            let gain = (x.sin() / x).abs();
            if gain.is_nan() {
                AZIMUTH_BORESIGHT_GAIN
            } else {
                gain
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scale::{scale_factor, BeamwidthConvention};
    use approx::assert_relative_eq;

    #[test]
    fn boresight_returns_the_named_fallback() {
        let k = scale_factor(1.2, BeamwidthConvention::FirstNull).unwrap();
        let gains = azimuth_pattern(&[0.0], k);
        assert_eq!(gains[0], AZIMUTH_BORESIGHT_GAIN);
    }

    #[test]
    fn gain_is_symmetric_and_nonnegative() {
        let k = scale_factor(1.2, BeamwidthConvention::FirstNull).unwrap();
        let angles: Vec<f64> = (-50..=50).map(|i| i as f64 * 1.0e-3).collect();
        let gains = azimuth_pattern(&angles, k);
        let n = gains.len();
        for i in 0..n {
            assert!(gains[i] >= 0.0);
            assert_relative_eq!(gains[i], gains[n - 1 - i], max_relative = 1e-12);
        }
    }

    #[test]
    fn gain_vanishes_at_the_first_null() {
        let k = scale_factor(1.2, BeamwidthConvention::FirstNull).unwrap();
        // The lobe null sits where kθ = π, inside the specified beamwidth
        // for the first-null convention.
        let theta = std::f64::consts::PI / k;
        let gains = azimuth_pattern(&[theta], k);
        assert!(gains[0] < 1e-12);
    }

    #[test]
    fn half_power_convention_yields_half_gain_at_edge() {
        let beam_width_deg = 2.4;
        let k = scale_factor(beam_width_deg, BeamwidthConvention::HalfPower).unwrap();
        let edge = (beam_width_deg / 2.0).to_radians();
        let gains = azimuth_pattern(&[edge], k);
        assert_relative_eq!(gains[0], 0.5, max_relative = 1e-4);
    }
}
