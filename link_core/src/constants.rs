//! Physical constants and unit-conversion factors shared across the
//! workspace. Pure data; every value carries its unit in the doc comment.

/// Reference system noise temperature (K).
pub const SYSTEM_TEMPERATURE: f64 = 290.0;

/// Boltzmann constant (J/K).
pub const BOLTZMANN_CONST: f64 = 1.3806503e-23;

/// Speed of light in vacuum (m/s).
pub const LIGHT_SPEED: f64 = 299_792_458.0;

// --- Unit conversions ---

/// One nautical mile in meters. The trailing 0.001 is kept for exact
/// compatibility with downstream consumers of the series.
pub const NAUTIC_MILES_TO_METERS: f64 = 1.852001 * 1000.0;

/// Meters to nautical miles.
pub const METERS_TO_NAUTIC_MILES: f64 = 1.0 / NAUTIC_MILES_TO_METERS;

/// One nautical mile in feet.
pub const NAUTIC_MILES_TO_FEET: f64 = 6076.12;
