//! Half-open floating-point sweep domains.

use link_core::error::{ensure_positive, ParamResult};

/// Evenly spaced values over `[start, stop)` with a strictly positive
/// `step`. The element count is `ceil((stop − start) / step)` and each
/// value is generated as `start + i·step`, so accumulated rounding error
/// does not creep in on long sweeps.
pub fn arange(start: f64, stop: f64, step: f64) -> ParamResult<Vec<f64>> {
    ensure_positive("step", step)?;

    let span = stop - start;
    let len = if span > 0.0 {
        (span / step).ceil() as usize
    } else {
        0
    };
    Ok((0..len).map(|i| start + i as f64 * step).collect())
}
