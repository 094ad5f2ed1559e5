//! Two-segment elevation beam pattern.
//!
//! Below the expected target elevation the lobe follows a sinc shape over
//! the offset from the target angle; above it, an inverse-square-of-sine
//! (cosecant-squared) shape normalized to gain 1 at the target angle.
//! The two segments use different indeterminate-form fallbacks (1 on the
//! sinc side, 0 on the cosecant side); each is a named constant.

/// Fallback for indeterminate entries of the sinc segment: the beam is on
/// boresight at zero offset, so the limit value 1 applies.
pub const SINC_SEGMENT_FALLBACK: f64 = 1.0;

/// Fallback for indeterminate entries of the cosecant-squared segment.
pub const CSC_SEGMENT_FALLBACK: f64 = 0.0;

/// Lower-segment gain `sin(factor·Δ)/(factor·Δ)` at each offset
/// `Δ = angle − tgt_ang` (rad). Values are signed; side lobes below the
/// first null come out negative, exactly as the downstream range profile
/// expects.
pub fn sinc_segment(offsets_rad: &[f64], factor: f64) -> Vec<f64> {
    offsets_rad
        .iter()
        .map(|&delta| {
            let x = factor * delta;
            let gain = x.sin() / x;
            if gain.is_nan() {
                SINC_SEGMENT_FALLBACK
            } else {
                gain
            }
        })
        .collect()
}

/// Upper-segment gain `sin(angle)⁻² / sin(tgt_ang)⁻²` at each absolute
/// elevation angle (rad), normalized so the gain is 1 at the target angle.
pub fn csc2_segment(angles_rad: &[f64], tgt_ang_rad: f64) -> Vec<f64> {
    let norm = tgt_ang_rad.sin().powi(-2);
    angles_rad
        .iter()
        .map(|&angle| {
            let gain = angle.sin().powi(-2) / norm;
            if gain.is_nan() {
                CSC_SEGMENT_FALLBACK
            } else {
                gain
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn sinc_segment_is_one_at_zero_offset() {
        let gains = sinc_segment(&[0.0], 50.0);
        assert_eq!(gains[0], SINC_SEGMENT_FALLBACK);
    }

    #[test]
    fn sinc_segment_goes_negative_past_the_first_null() {
        // factor·Δ between π and 2π puts the sinc in its negative lobe
        let gains = sinc_segment(&[-4.0 / 50.0], 50.0);
        assert!(gains[0] < 0.0);
    }

    #[test]
    fn csc2_segment_is_one_at_the_target_angle() {
        let tgt = (3.0_f64).to_radians();
        let gains = csc2_segment(&[tgt], tgt);
        assert_relative_eq!(gains[0], 1.0, max_relative = 1e-12);
    }

    #[test]
    fn csc2_segment_falls_off_above_the_target_angle() {
        let tgt = (3.0_f64).to_radians();
        let angles: Vec<f64> = [5.0, 10.0, 20.0, 40.0]
            .iter()
            .map(|d: &f64| d.to_radians())
            .collect();
        let gains = csc2_segment(&angles, tgt);
        for pair in gains.windows(2) {
            assert!(pair[1] < pair[0]);
        }
        assert!(gains[0] < 1.0);
    }

    #[test]
    fn csc2_indeterminate_at_zero_target_maps_to_zero() {
        // tgt = 0 makes the normalization infinite; angle = 0 then yields
        // ∞/∞ which must collapse to the named fallback.
        let gains = csc2_segment(&[0.0], 0.0);
        assert_eq!(gains[0], CSC_SEGMENT_FALLBACK);
    }
}
