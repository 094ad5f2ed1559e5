//! Antenna lobe profiles: gain-vs-angle series plus the Cartesian lobe
//! shapes the presentation layer draws.
//!
//! # Unit conventions
//! All angles enter in degrees and are converted to radians internally.
//! Azimuth lobe: x in km, y in nautical miles. Elevation lobe: x in
//! nautical miles, y in feet. The gain series report angles in degrees.

use crate::series::Series;
use crate::sweep::arange;
use antenna_models::azimuth::azimuth_pattern;
use antenna_models::elevation::{csc2_segment, sinc_segment};
use antenna_models::scale::{scale_factor, BeamwidthConvention};
use link_core::constants::{NAUTIC_MILES_TO_FEET, NAUTIC_MILES_TO_METERS};
use link_core::error::{ParamError, ParamResult};
use std::f64::consts::PI;

/// Angular resolution of every lobe sweep (degrees).
const SWEEP_STEP_DEG: f64 = 0.001;

/// Fixed symmetric azimuth sweep half-width (rad): 7.5° to either side.
const AZIMUTH_SWEEP_HALF_WIDTH: f64 = PI / 24.0;

/// Azimuth lobe of one antenna.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct AzimuthProfile {
    /// Cartesian lobe outline: x in km (cross-range), y in nautical miles.
    pub lobe: Series,
    /// Gain vs off-boresight angle in degrees.
    pub gain: Series,
}

/// Elevation lobe of one antenna.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct ElevationProfile {
    /// Cartesian lobe outline closed into a polygon through the origin:
    /// x in nautical miles (ground range), y in feet (height).
    pub lobe: Series,
    /// Gain vs angle in degrees. The lower segment reports the offset from
    /// the target elevation, the upper segment the absolute elevation.
    pub gain: Series,
}

/// Azimuth gain and range profiles over the fixed ±7.5° sweep.
///
/// `max_range_nm` scales the lobe outline; `beam_width_deg` and the
/// convention set the lobe shape.
pub fn azimuth_profile(
    max_range_nm: f64,
    beam_width_deg: f64,
    convention: BeamwidthConvention,
) -> ParamResult<AzimuthProfile> {
    let angles = arange(
        -AZIMUTH_SWEEP_HALF_WIDTH,
        AZIMUTH_SWEEP_HALF_WIDTH,
        SWEEP_STEP_DEG.to_radians(),
    )?;
    let scale = scale_factor(beam_width_deg, convention)?;
    let gains = azimuth_pattern(&angles, scale);

    // Radial extent √gain·max_range, projected on the boresight (y) and
    // cross-range (x) axes; cross-range reported in km.
    let mut lobe_x = Vec::with_capacity(angles.len());
    let mut lobe_y = Vec::with_capacity(angles.len());
    for (theta, gain) in angles.iter().zip(&gains) {
        let radial = max_range_nm * gain.sqrt();
        lobe_y.push(radial * theta.cos());
        lobe_x.push(radial * theta.sin() * NAUTIC_MILES_TO_METERS / 1000.0);
    }

    let gain_angles = angles.iter().map(|a| a.to_degrees()).collect();

    Ok(AzimuthProfile {
        lobe: Series::new(lobe_x, lobe_y),
        gain: Series::new(gain_angles, gains),
    })
}

/// Elevation gain and range profiles between `min_elev_deg` and
/// `max_elev_deg`, with the lobe aimed at `tgt_ang_deg` and the lower
/// segment shaped by the dimensionless `factor`.
pub fn elevation_profile(
    max_range_nm: f64,
    max_elev_deg: f64,
    min_elev_deg: f64,
    tgt_ang_deg: f64,
    factor: f64,
) -> ParamResult<ElevationProfile> {
    if min_elev_deg >= tgt_ang_deg {
        return Err(ParamError::EmptyInterval {
            what: "elevation lower segment",
            lo: min_elev_deg,
            hi: tgt_ang_deg,
        });
    }
    if tgt_ang_deg >= max_elev_deg {
        return Err(ParamError::EmptyInterval {
            what: "elevation upper segment",
            lo: tgt_ang_deg,
            hi: max_elev_deg,
        });
    }

    let step = SWEEP_STEP_DEG.to_radians();
    let tgt_rad = tgt_ang_deg.to_radians();

    // Lower segment: sinc over the offset from the target elevation.
    let offsets: Vec<f64> = arange(min_elev_deg.to_radians(), tgt_rad, step)?
        .iter()
        .map(|angle| angle - tgt_rad)
        .collect();
    let lower_gains = sinc_segment(&offsets, factor);

    // Upper segment: cosecant² over the absolute elevation.
    let upper_angles = arange(tgt_rad, max_elev_deg.to_radians(), step)?;
    let upper_gains = csc2_segment(&upper_angles, tgt_rad);

    // Lobe outline, closed into a polygon through the origin. Heights are
    // reported in feet, ground range in nautical miles.
    let len = offsets.len() + upper_angles.len() + 2;
    let mut lobe_x = Vec::with_capacity(len);
    let mut lobe_y = Vec::with_capacity(len);
    lobe_x.push(0.0);
    lobe_y.push(0.0);
    for (angle, gain) in offsets
        .iter()
        .zip(&lower_gains)
        .chain(upper_angles.iter().zip(&upper_gains))
    {
        let radial = max_range_nm * gain.sqrt();
        lobe_x.push(radial * angle.cos());
        lobe_y.push(radial * angle.sin() * NAUTIC_MILES_TO_FEET);
    }
    lobe_x.push(0.0);
    lobe_y.push(0.0);

    let gain_angles: Vec<f64> = offsets
        .iter()
        .chain(upper_angles.iter())
        .map(|a| a.to_degrees())
        .collect();
    let mut gains = lower_gains;
    gains.extend_from_slice(&upper_gains);

    Ok(ElevationProfile {
        lobe: Series::new(lobe_x, lobe_y),
        gain: Series::new(gain_angles, gains),
    })
}
