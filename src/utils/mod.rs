//! Interpolation helpers shared by curves, gradients and palettes

use glam::Vec4;

/// Linear interpolation that is exact at both endpoints
#[inline(always)]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a * (1.0 - t) + b * t
}

/// Component-wise color lerp, exact at `t = 0` and `t = 1`
#[inline(always)]
pub fn lerp_color(a: Vec4, b: Vec4, t: f32) -> Vec4 {
    a * (1.0 - t) + b * t
}

/// Fraction of `value` between `a` and `b`, clamped to [0, 1]
///
/// A degenerate range (`a == b`) returns 0.
#[inline(always)]
pub fn inverse_lerp(a: f32, b: f32, value: f32) -> f32 {
    if a == b {
        return 0.0;
    }
    ((value - a) / (b - a)).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_endpoints_exact() {
        let a = Vec4::new(0.1, 0.7, 0.3, 1.0);
        let b = Vec4::new(0.9, 0.2, 0.6, 0.5);
        assert_eq!(lerp_color(a, b, 0.0), a);
        assert_eq!(lerp_color(a, b, 1.0), b);
        assert_eq!(lerp(0.3, 0.7, 1.0), 0.7);
    }

    #[test]
    fn test_inverse_lerp() {
        assert_eq!(inverse_lerp(0.125, 0.375, 0.25), 0.5);
        assert_eq!(inverse_lerp(0.0, 1.0, 2.0), 1.0);
        assert_eq!(inverse_lerp(0.5, 0.5, 0.5), 0.0);
    }
}
