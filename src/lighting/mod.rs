//! Authored lighting data: curves, gradients and phase palettes

pub mod curve;
pub mod gradient;
pub mod palette;

pub use curve::{Curve, CurveInterpolation, CurveKey};
pub use gradient::{ColorGradient, ColorKey, GradientMode};
pub use palette::{PhaseColors, PhasePalette};
