//! Axis-angle rotation helpers

use nalgebra::{Point3, Rotation3, Unit, Vector3};

/// Angular step applied per animation frame, in radians.
pub const ROTATION_STEP: f32 = 0.1;

/// Axes with a norm below this are treated as degenerate.
pub const AXIS_EPSILON: f32 = 1e-6;

/// Rotate `point` about the axis through the world origin along `axis`.
pub fn rotate_about_axis(
    point: Point3<f32>,
    axis: &Unit<Vector3<f32>>,
    angle: f32,
) -> Point3<f32> {
    Rotation3::from_axis_angle(axis, angle) * point
}

/// A vector perpendicular to `v`: the cross product of `v` with the
/// cardinal axis of its smallest component.
pub fn perpendicular(v: &Vector3<f32>) -> Vector3<f32> {
    let mut min = v.x.abs();
    let mut cardinal = Vector3::x();
    if v.y.abs() < min {
        min = v.y.abs();
        cardinal = Vector3::y();
    }
    if v.z.abs() < min {
        cardinal = Vector3::z();
    }
    v.cross(&cardinal)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_turn_returns_to_start() {
        let p = Point3::new(0.3, 0.4, 0.5);
        let axis = Unit::new_normalize(Vector3::new(1.0, 1.0, 0.0));
        let q = rotate_about_axis(p, &axis, std::f32::consts::TAU);
        assert!((q - p).norm() < 1e-5);
    }

    #[test]
    fn rotation_preserves_norm() {
        let p = Point3::new(1.0, 2.0, 3.0);
        let q = rotate_about_axis(p, &Vector3::y_axis(), ROTATION_STEP);
        assert!((q.coords.norm() - p.coords.norm()).abs() < 1e-5);
    }

    #[test]
    fn perpendicular_is_orthogonal() {
        let cases = [
            Vector3::new(1.0, 2.0, 3.0),
            Vector3::new(-0.2, 0.7, 0.1),
            Vector3::new(0.0, 0.0, 1.0),
        ];
        for v in cases {
            let p = perpendicular(&v);
            assert!(v.dot(&p).abs() < 1e-6);
            assert!(p.norm() > 0.0);
        }
    }
}
