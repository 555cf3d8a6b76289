use glam::{Mat3, Vec3};

/// Axes shorter than this are treated as degenerate.
pub const MIN_AXIS_LENGTH: f32 = 1e-6;

/// Normalize `v`, returning `None` when it is too short to carry a direction.
#[must_use]
pub fn safe_normalize(v: Vec3) -> Option<Vec3> {
    if v.length_squared() < MIN_AXIS_LENGTH * MIN_AXIS_LENGTH {
        return None;
    }
    let n = v.normalize();
    n.is_finite().then_some(n)
}

/// Rotation matrix for `degrees` counter-clockwise about `axis` (through the
/// origin, right-handed). The axis need not be unit length.
#[must_use]
pub fn axis_angle_matrix(axis: Vec3, degrees: f32) -> Option<Mat3> {
    let axis = safe_normalize(axis)?;
    Some(Mat3::from_axis_angle(axis, degrees.to_radians()))
}

/// Rotate the direction `v` about `axis` by `degrees`.
///
/// The rotation is about an axis through the origin, so callers rotating a
/// point about a pivot must subtract the pivot first and add it back after.
/// Returns `None` for a near-zero axis.
#[must_use]
pub fn rotate_about_axis(v: Vec3, axis: Vec3, degrees: f32) -> Option<Vec3> {
    axis_angle_matrix(axis, degrees).map(|m| m * v)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-5
    }

    #[test]
    fn quarter_turn_about_y() {
        // CCW about +Y takes +X to -Z.
        let r = rotate_about_axis(Vec3::X, Vec3::Y, 90.0).unwrap();
        assert!(approx(r, Vec3::NEG_Z), "{r:?}");
    }

    #[test]
    fn axis_length_does_not_matter() {
        let a = rotate_about_axis(Vec3::X, Vec3::new(0.0, 5.0, 0.0), 30.0);
        let b = rotate_about_axis(Vec3::X, Vec3::Y, 30.0);
        assert!(approx(a.unwrap(), b.unwrap()));
    }

    #[test]
    fn inverse_angle_restores() {
        let v = Vec3::new(0.3, -1.2, 4.0);
        let axis = Vec3::new(1.0, 1.0, -0.5);
        let there = rotate_about_axis(v, axis, 37.0).unwrap();
        let back = rotate_about_axis(there, axis, -37.0).unwrap();
        assert!(approx(v, back));
    }

    #[test]
    fn zero_axis_is_rejected() {
        assert!(rotate_about_axis(Vec3::X, Vec3::ZERO, 10.0).is_none());
        assert!(safe_normalize(Vec3::splat(1e-9)).is_none());
        assert!(safe_normalize(Vec3::splat(f32::NAN)).is_none());
    }
}
