//! `antenna_models` — Antenna beam-pattern gain models.
//!
//! # Module layout
//! - [`scale`]     — beamwidth conventions and the pattern scale factor
//! - [`azimuth`]   — folded sinc lobe around boresight
//! - [`elevation`] — two-segment elevation pattern (sinc + cosecant²)

pub mod azimuth;
pub mod elevation;
pub mod scale;

pub use azimuth::{azimuth_pattern, AZIMUTH_BORESIGHT_GAIN};
pub use elevation::{csc2_segment, sinc_segment};
pub use scale::{scale_factor, BeamwidthConvention};
