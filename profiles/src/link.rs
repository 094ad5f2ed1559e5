//! Link-budget sweeps: SNR vs distance and detection range vs required SNR.
//!
//! Distances at this interface are nautical miles and SNRs are dB; the
//! range equation itself works in meters and the conversion happens here.

use crate::series::Series;
use crate::sweep::arange;
use link_core::constants::{METERS_TO_NAUTIC_MILES, NAUTIC_MILES_TO_METERS};
use link_core::equation::{range_m, snr_db};
use link_core::error::ParamResult;
use link_core::scan::pulses_on_target;
use link_core::types::{Radar, Target};

/// SNR (dB) over a distance sweep `[start_nm, end_nm)` with step
/// `step_nm`. The pulse count follows the radar's scan mode.
pub fn snr_profile(
    start_nm: f64,
    end_nm: f64,
    step_nm: f64,
    radar: &Radar,
    target: &Target,
    losses_db: f64,
) -> ParamResult<Series> {
    let dists = arange(start_nm, end_nm, step_nm)?;
    let num_pulses = pulses_on_target(radar)?;

    let ranges_m: Vec<f64> = dists.iter().map(|d| d * NAUTIC_MILES_TO_METERS).collect();
    let snrs = snr_db(radar, target, losses_db, num_pulses, &ranges_m)?;

    Ok(Series::new(dists, snrs))
}

/// Detection range (nautical miles) over a required-SNR sweep
/// `[start_db, end_db)` with step `step_db`.
pub fn range_profile(
    start_db: f64,
    end_db: f64,
    step_db: f64,
    radar: &Radar,
    target: &Target,
    losses_db: f64,
) -> ParamResult<Series> {
    let snrs = arange(start_db, end_db, step_db)?;
    let num_pulses = pulses_on_target(radar)?;

    let ranges = range_m(radar, target, losses_db, num_pulses, &snrs)?;
    let ranges_nm = ranges.iter().map(|r| r * METERS_TO_NAUTIC_MILES).collect();

    Ok(Series::new(snrs, ranges_nm))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use link_core::equation::snr_at_range;

    #[test]
    fn snr_profile_matches_scalar_evaluation() {
        let radar = Radar::default();
        let target = Target::new(1.0);
        let profile = snr_profile(10.0, 60.0, 5.0, &radar, &target, 3.0).unwrap();
        assert_eq!(profile.len(), 10);

        let n = pulses_on_target(&radar).unwrap();
        for (dist, snr) in profile.x.iter().zip(&profile.y) {
            let expected =
                snr_at_range(&radar, &target, 3.0, n, dist * NAUTIC_MILES_TO_METERS).unwrap();
            assert_relative_eq!(*snr, expected, max_relative = 1e-12);
        }
    }

    #[test]
    fn profiles_invert_each_other() {
        let radar = Radar::default();
        let target = Target::new(1.0);
        let snrs = snr_profile(20.0, 30.0, 1.0, &radar, &target, 3.0).unwrap();
        // Feed each computed SNR back through the inverse sweep
        for (dist_nm, snr) in snrs.x.iter().zip(&snrs.y) {
            let back = range_profile(*snr, snr + 0.5, 1.0, &radar, &target, 3.0).unwrap();
            assert_relative_eq!(back.y[0], *dist_nm, max_relative = 1e-6);
        }
    }

    #[test]
    fn range_profile_is_decreasing_in_snr() {
        let radar = Radar::default();
        let target = Target::new(1.0);
        let profile = range_profile(0.0, 40.0, 2.0, &radar, &target, 3.0).unwrap();
        for pair in profile.y.windows(2) {
            assert!(pair[1] < pair[0]);
        }
    }

    #[test]
    fn conic_scan_changes_the_budget() {
        use link_core::types::ScanMode;
        let circular = Radar::default();
        let conic = Radar {
            scan: ScanMode::Conic { revs_per_sec: 0.5 },
            ..Radar::default()
        };
        let target = Target::new(1.0);
        let a = snr_profile(10.0, 20.0, 5.0, &circular, &target, 3.0).unwrap();
        let b = snr_profile(10.0, 20.0, 5.0, &conic, &target, 3.0).unwrap();
        // 2000 pulses conic vs ~318 circular: ~8 dB of integration gain
        assert!(b.y[0] > a.y[0]);
    }
}
