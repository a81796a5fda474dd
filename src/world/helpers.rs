//! Small angle/vector helpers shared by the camera and the overlay.

use glam::Vec2;
use std::f32::consts::PI;

/// Degrees → radians.
#[inline(always)]
pub fn deg_to_rad(degrees: f32) -> f32 {
    degrees * (PI / 180.0)
}

/// Radians → degrees.
#[inline(always)]
pub fn rad_to_deg(radians: f32) -> f32 {
    radians * (180.0 / PI)
}

/// Rotate `v` about the origin by `radians`.
///
/// Positive angles turn clockwise in screen space (+y points down).
#[inline]
pub fn rotate(v: Vec2, radians: f32) -> Vec2 {
    let (s, c) = radians.sin_cos();
    Vec2::new(v.x * c - v.y * s, v.x * s + v.y * c)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    #[test]
    fn degree_radian_round_trip() {
        assert!((deg_to_rad(180.0) - PI).abs() < 1e-6);
        assert!((rad_to_deg(PI) - 180.0).abs() < 1e-4);
        assert!((rad_to_deg(deg_to_rad(37.5)) - 37.5).abs() < 1e-4);
    }

    #[test]
    fn quarter_turn_is_perpendicular() {
        let v = rotate(Vec2::X, FRAC_PI_2);
        assert!((v - Vec2::Y).length() < 1e-6);
    }

    #[test]
    fn rotation_preserves_length() {
        let v = Vec2::new(3.0, -4.0);
        assert!((rotate(v, 1.234).length() - 5.0).abs() < 1e-5);
    }

    #[test]
    fn rotate_then_unrotate() {
        let v = Vec2::new(0.6, 0.8);
        let back = rotate(rotate(v, 0.73), -0.73);
        assert!((back - v).length() < 1e-6);
    }
}
