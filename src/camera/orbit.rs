use glam::{Mat4, Vec3, Vec4};

use crate::geometry::{rotate_about_axis, safe_normalize};

/// Lower bound for [`OrbitCamera::zoom`].
pub const ZOOM_MIN: f32 = 0.1;
/// Upper bound for [`OrbitCamera::zoom`].
pub const ZOOM_MAX: f32 = 2.0;

/// Orbit camera defined by an eye, a pivot (`center`) and an up vector.
///
/// Mutators are incremental: each one applies a single step of user input.
/// The up vector is re-derived after vertical orbiting so it stays
/// orthogonal to the view direction instead of tracking a fixed world up.
///
/// The rendered eye is not `eye` itself: [`view_matrix`](Self::view_matrix)
/// places it along the `eye - center` direction at
/// `zoom * distance_ratio` from the pivot.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitCamera {
    eye: Vec3,
    center: Vec3,
    up: Vec3,
    zoom: f32,
    distance_ratio: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new(Vec3::NEG_Z, Vec3::Y, Vec3::ZERO)
    }
}

impl OrbitCamera {
    /// Create a camera with zoom `1.0` and distance ratio `1.0`.
    #[must_use]
    pub fn new(eye: Vec3, up: Vec3, center: Vec3) -> Self {
        Self::with_distance_ratio(eye, up, center, 1.0)
    }

    /// Create a camera with an explicit initial distance ratio.
    #[must_use]
    pub fn with_distance_ratio(
        eye: Vec3,
        up: Vec3,
        center: Vec3,
        distance_ratio: f32,
    ) -> Self {
        Self {
            eye,
            center,
            up,
            zoom: 1.0,
            distance_ratio,
        }
    }

    /// Stored eye position (before zoom / distance scaling).
    #[must_use]
    pub fn eye(&self) -> Vec3 {
        self.eye
    }

    /// Pivot the camera looks at and orbits around.
    #[must_use]
    pub fn center(&self) -> Vec3 {
        self.center
    }

    /// Current up direction.
    #[must_use]
    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// Current zoom factor, always in `[ZOOM_MIN, ZOOM_MAX]`.
    #[must_use]
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Multiplier applied to the rendered eye distance.
    #[must_use]
    pub fn distance_ratio(&self) -> f32 {
        self.distance_ratio
    }

    /// Set the multiplier applied to the rendered eye distance.
    pub fn set_initial_distance_ratio(&mut self, ratio: f32) {
        self.distance_ratio = ratio;
    }

    /// Unit vector from eye toward center, if the two are distinct.
    #[must_use]
    pub fn forward(&self) -> Option<Vec3> {
        safe_normalize(self.center - self.eye)
    }

    /// Eye position actually used for rendering:
    /// `center + normalize(eye - center) * zoom * distance_ratio`.
    ///
    /// Falls back to the stored eye when eye and center coincide.
    #[must_use]
    pub fn render_eye(&self) -> Vec3 {
        safe_normalize(self.eye - self.center).map_or(self.eye, |dir| {
            self.center + dir * self.zoom * self.distance_ratio
        })
    }

    /// Right-handed look-at matrix from the render eye toward the pivot.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.render_eye(), self.center, self.up)
    }

    /// View matrix with its translation column cleared, for skybox passes.
    #[must_use]
    pub fn skybox_view_matrix(&self) -> Mat4 {
        let mut view = self.view_matrix();
        view.w_axis = Vec4::W;
        view
    }

    /// Translate eye and center together along the up vector.
    pub fn pan_up(&mut self, distance: f32) {
        let Some(up) = safe_normalize(self.up) else {
            log::trace!("pan_up skipped: degenerate up vector");
            return;
        };
        let offset = up * distance;
        self.eye += offset;
        self.center += offset;
    }

    /// Translate eye and center together along `up × forward`.
    pub fn pan_left(&mut self, distance: f32) {
        let Some(x_axis) = self
            .forward()
            .and_then(|forward| safe_normalize(self.up.cross(forward)))
        else {
            log::trace!("pan_left skipped: degenerate side axis");
            return;
        };
        let offset = x_axis * distance;
        self.eye += offset;
        self.center += offset;
    }

    /// Orbit the eye horizontally around the pivot, about the up vector.
    pub fn orbit_left(&mut self, degrees: f32) {
        let offset = self.eye - self.center;
        match rotate_about_axis(offset, self.up, degrees) {
            Some(rotated) => self.eye = rotated + self.center,
            None => log::trace!("orbit_left skipped: degenerate up vector"),
        }
    }

    /// Orbit the eye vertically around the pivot and re-derive `up`.
    ///
    /// The side axis is `normalize(up × (eye - center))`; after rotating the
    /// offset about it, `up` becomes `normalize(offset × side)` so it stays
    /// orthogonal to the new view direction.
    pub fn orbit_up(&mut self, degrees: f32) {
        let offset = self.eye - self.center;
        let Some(side) = safe_normalize(self.up.cross(offset)) else {
            log::trace!("orbit_up skipped: up is parallel to view direction");
            return;
        };
        let Some(rotated) = rotate_about_axis(offset, side, degrees) else {
            return;
        };
        let Some(up) = safe_normalize(rotated.cross(side)) else {
            log::trace!("orbit_up skipped: degenerate rotated offset");
            return;
        };
        self.up = up;
        self.eye = rotated + self.center;
    }

    /// Move eye and center together along the view direction.
    pub fn dolly_forward(&mut self, distance: f32) {
        let Some(forward) = self.forward() else {
            log::trace!("dolly_forward skipped: eye and center coincide");
            return;
        };
        let offset = forward * distance;
        self.eye += offset;
        self.center += offset;
    }

    /// Decrease zoom by `delta`, clamped to `[ZOOM_MIN, ZOOM_MAX]`.
    pub fn zoom_near(&mut self, delta: f32) {
        let zoom = self.zoom - delta;
        if zoom.is_nan() {
            return;
        }
        self.zoom = zoom.clamp(ZOOM_MIN, ZOOM_MAX);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < EPS
    }

    fn tilted() -> OrbitCamera {
        OrbitCamera::with_distance_ratio(
            Vec3::new(1.0, 2.0, -3.0),
            Vec3::Y,
            Vec3::new(0.5, 0.0, 0.0),
            4.0,
        )
    }

    #[test]
    fn defaults_look_down_positive_z() {
        let cam = OrbitCamera::default();
        assert_eq!(cam.eye(), Vec3::NEG_Z);
        assert_eq!(cam.zoom(), 1.0);
        assert_eq!(cam.distance_ratio(), 1.0);
        assert!(approx(cam.forward().unwrap(), Vec3::Z));
    }

    #[test]
    fn render_eye_scales_by_zoom_and_ratio() {
        let mut cam = OrbitCamera::default();
        cam.set_initial_distance_ratio(4.0);
        assert!(approx(cam.render_eye(), Vec3::new(0.0, 0.0, -4.0)));
        cam.zoom_near(0.5);
        assert!(approx(cam.render_eye(), Vec3::new(0.0, 0.0, -2.0)));
    }

    #[test]
    fn view_matrix_maps_center_onto_negative_z() {
        let cam = tilted();
        let p = cam.view_matrix().transform_point3(cam.center());
        assert!(p.x.abs() < EPS && p.y.abs() < EPS);
        assert!((p.z + cam.zoom() * cam.distance_ratio()).abs() < EPS);
    }

    #[test]
    fn skybox_view_drops_translation() {
        let cam = tilted();
        let sky = cam.skybox_view_matrix();
        assert_eq!(sky.w_axis, Vec4::W);
        assert_eq!(sky.x_axis, cam.view_matrix().x_axis);
    }

    #[test]
    fn orbit_left_is_invertible() {
        for degrees in [3.0, -3.0, 45.0, 170.0, 721.0] {
            let mut cam = tilted();
            let before = cam.eye();
            cam.orbit_left(degrees);
            cam.orbit_left(-degrees);
            assert!(approx(cam.eye(), before), "degrees = {degrees}");
        }
    }

    #[test]
    fn orbit_left_keeps_distance_to_pivot() {
        let mut cam = tilted();
        let radius = (cam.eye() - cam.center()).length();
        cam.orbit_left(33.0);
        assert!(((cam.eye() - cam.center()).length() - radius).abs() < EPS);
        assert_eq!(cam.up(), Vec3::Y);
    }

    #[test]
    fn orbit_up_keeps_up_orthogonal() {
        let mut cam = tilted();
        for _ in 0..40 {
            cam.orbit_up(3.0);
            let offset = cam.eye() - cam.center();
            assert!(cam.up().dot(offset).abs() < 1e-3);
            assert!((cam.up().length() - 1.0).abs() < EPS);
        }
    }

    #[test]
    fn orbit_up_passes_over_the_pole() {
        let mut cam = OrbitCamera::default();
        // 30 steps of 3 degrees swing the eye straight below the pivot; the
        // re-derived up keeps the next step well defined.
        for _ in 0..31 {
            cam.orbit_up(3.0);
        }
        let offset = cam.eye() - cam.center();
        assert!(offset.is_finite());
        assert!(cam.up().is_finite());
        assert!(cam.up().dot(offset).abs() < 1e-3);
    }

    #[test]
    fn degenerate_orbit_up_is_a_no_op() {
        let mut cam = OrbitCamera::new(Vec3::Y, Vec3::Y, Vec3::ZERO);
        let before = cam.clone();
        cam.orbit_up(3.0);
        assert_eq!(cam, before);
        cam.pan_left(1.0);
        assert_eq!(cam, before);
    }

    #[test]
    fn degenerate_up_blocks_orbit_left() {
        let mut cam = OrbitCamera::new(Vec3::X, Vec3::ZERO, Vec3::ZERO);
        let before = cam.clone();
        cam.orbit_left(10.0);
        cam.pan_up(1.0);
        assert_eq!(cam, before);
    }

    #[test]
    fn pans_are_invertible_and_keep_orientation() {
        let mut cam = tilted();
        let (eye, center) = (cam.eye(), cam.center());
        let offset = eye - center;

        cam.pan_up(0.7);
        assert!(approx(cam.eye() - cam.center(), offset));
        cam.pan_up(-0.7);
        assert!(approx(cam.eye(), eye));
        assert!(approx(cam.center(), center));

        cam.pan_left(1.3);
        assert!(approx(cam.eye() - cam.center(), offset));
        cam.pan_left(-1.3);
        assert!(approx(cam.eye(), eye));
        assert!(approx(cam.center(), center));
    }

    #[test]
    fn pan_left_moves_along_up_cross_forward() {
        let mut cam = OrbitCamera::default();
        // Looking down +Z with +Y up: up × forward = +X.
        cam.pan_left(0.2);
        assert!(approx(cam.center(), Vec3::new(0.2, 0.0, 0.0)));
        assert!(approx(cam.eye(), Vec3::new(0.2, 0.0, -1.0)));
    }

    #[test]
    fn dolly_moves_the_whole_rig() {
        let mut cam = OrbitCamera::default();
        cam.dolly_forward(0.2);
        assert!(approx(cam.eye(), Vec3::new(0.0, 0.0, -0.8)));
        assert!(approx(cam.center(), Vec3::new(0.0, 0.0, 0.2)));
        assert_eq!(cam.zoom(), 1.0);
    }

    #[test]
    fn zoom_stays_clamped() {
        let mut cam = OrbitCamera::default();
        for delta in [0.1, 0.5, 5.0, -0.3, -100.0, 0.05, f32::INFINITY] {
            cam.zoom_near(delta);
            assert!((ZOOM_MIN..=ZOOM_MAX).contains(&cam.zoom()));
        }
        cam.zoom_near(10.0);
        assert_eq!(cam.zoom(), ZOOM_MIN);
        cam.zoom_near(-10.0);
        assert_eq!(cam.zoom(), ZOOM_MAX);
        cam.zoom_near(f32::NAN);
        assert_eq!(cam.zoom(), ZOOM_MAX);
    }
}
