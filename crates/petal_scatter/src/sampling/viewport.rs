//! Viewport containment for spawn candidates.
use glam::{Mat4, Vec3};
use mint::Vector3;

/// Normalized viewport coordinates plus view depth for a world point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportPoint {
    /// Horizontal coordinate; [0, 1] spans the viewport.
    pub x: f32,
    /// Vertical coordinate; [0, 1] spans the viewport.
    pub y: f32,
    /// Distance along the view direction; non-positive means behind the
    /// viewer.
    pub depth: f32,
}

/// Projects world positions into normalized viewport coordinates.
pub trait Viewport: Send + Sync {
    fn project(&self, world: Vector3<f32>) -> ViewportPoint;

    /// A point is contained when both normalized axes fall inside [0, 1] and
    /// the point lies in front of the viewing plane.
    fn contains(&self, world: Vector3<f32>) -> bool {
        let p = self.project(world);
        (0.0..=1.0).contains(&p.x) && (0.0..=1.0).contains(&p.y) && p.depth > 0.0
    }
}

/// Viewport that contains every point; for headless hosts and tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenViewport;

impl Viewport for OpenViewport {
    fn project(&self, _world: Vector3<f32>) -> ViewportPoint {
        ViewportPoint {
            x: 0.5,
            y: 0.5,
            depth: 1.0,
        }
    }
}

/// Pinhole camera built from a look-at view and a perspective projection.
#[derive(Debug, Clone)]
pub struct PerspectiveCamera {
    view: Mat4,
    projection: Mat4,
}

impl PerspectiveCamera {
    /// Creates a camera at `eye` looking toward `target`.
    ///
    /// `fov_y_radians` is the vertical field of view, `aspect` the
    /// width-over-height ratio of the viewport.
    pub fn look_at(
        eye: Vec3,
        target: Vec3,
        up: Vec3,
        fov_y_radians: f32,
        aspect: f32,
        z_near: f32,
    ) -> Self {
        Self {
            view: Mat4::look_at_rh(eye, target, up),
            projection: Mat4::perspective_infinite_rh(fov_y_radians, aspect, z_near),
        }
    }
}

impl Viewport for PerspectiveCamera {
    fn project(&self, world: Vector3<f32>) -> ViewportPoint {
        let view_pos = self.view.transform_point3(Vec3::from(world));
        // View space looks down -Z; depth is the distance in front of the eye.
        let depth = -view_pos.z;

        let clip = self.projection * view_pos.extend(1.0);
        if clip.w.abs() <= f32::EPSILON {
            return ViewportPoint { x: 0.5, y: 0.5, depth };
        }

        let ndc = clip.truncate() / clip.w;
        ViewportPoint {
            x: ndc.x * 0.5 + 0.5,
            y: ndc.y * 0.5 + 0.5,
            depth,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn overhead_camera() -> PerspectiveCamera {
        PerspectiveCamera::look_at(
            Vec3::new(0.0, 20.0, 20.0),
            Vec3::ZERO,
            Vec3::Y,
            60.0f32.to_radians(),
            16.0 / 9.0,
            0.1,
        )
    }

    #[test]
    fn open_viewport_contains_everything() {
        let viewport = OpenViewport;
        assert!(viewport.contains(Vec3::new(1e6, -1e6, 42.0).into()));
        assert!(viewport.contains(Vec3::ZERO.into()));
    }

    #[test]
    fn camera_contains_its_focus_point() {
        let camera = overhead_camera();
        let p = camera.project(Vec3::ZERO.into());
        assert!((p.x - 0.5).abs() < 1e-4);
        assert!((p.y - 0.5).abs() < 1e-4);
        assert!(p.depth > 0.0);
        assert!(camera.contains(Vec3::ZERO.into()));
    }

    #[test]
    fn camera_rejects_points_behind_the_eye() {
        let camera = overhead_camera();
        // Opposite side of the eye from the target.
        let behind = Vec3::new(0.0, 40.0, 40.0);
        let p = camera.project(behind.into());
        assert!(p.depth <= 0.0);
        assert!(!camera.contains(behind.into()));
    }

    #[test]
    fn camera_rejects_points_far_off_axis() {
        let camera = overhead_camera();
        assert!(!camera.contains(Vec3::new(1e4, 0.0, 0.0).into()));
    }
}
