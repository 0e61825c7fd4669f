//! Smooth camera framing of a bounding volume.
//!
//! A request fixes a target camera position above and in front of the
//! volume; every tick the live eye moves a fixed fraction of the remaining
//! distance toward it (exponential approach) and the camera is re-aimed at
//! the target. Once inside the tolerance the controller goes idle and the
//! target resets to the origin.

use crate::bounds::BoundingVolume;
use crate::camera::Camera;
use crate::config::FramingConfig;
use glam::Vec3;

/// Center and per-axis size of the content to frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FramingRequest {
    pub center_point: Vec3,
    pub extents: Vec3,
}

impl From<BoundingVolume> for FramingRequest {
    fn from(volume: BoundingVolume) -> Self {
        Self {
            center_point: volume.center(),
            extents: volume.extents(),
        }
    }
}

impl FramingRequest {
    /// Largest axis times the margin. Zero-size content yields zero.
    #[inline]
    pub fn view_distance(&self, margin: f32) -> f32 {
        self.extents.max_element() * margin
    }

    pub fn target_camera_position(&self, config: &FramingConfig) -> Vec3 {
        let distance = self.view_distance(config.margin);
        self.center_point
            + Vec3::new(0.0, self.extents.y / config.elevation_divisor, distance)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FramingStatus {
    Idle,
    Moving { distance: f32 },
    Settled,
}

#[derive(Clone, Debug)]
pub struct FramingController {
    config: FramingConfig,
    target: Vec3,
    active: bool,
}

impl FramingController {
    pub fn new(config: FramingConfig) -> Self {
        Self {
            config,
            target: Vec3::ZERO,
            active: false,
        }
    }

    #[inline]
    pub fn is_framing(&self) -> bool {
        self.active
    }

    /// Current target; the origin when no framing is active.
    #[inline]
    pub fn target(&self) -> Vec3 {
        self.target
    }

    /// Start (or retarget) framing. Returns the new target camera position.
    pub fn request(&mut self, request: FramingRequest) -> Vec3 {
        self.target = request.target_camera_position(&self.config);
        self.active = true;
        self.target
    }

    /// Advance one tick. A no-op returning `Idle` when not framing.
    pub fn tick(&mut self, camera: &mut Camera) -> FramingStatus {
        if !self.active {
            return FramingStatus::Idle;
        }
        camera.eye = camera.eye.lerp(self.target, self.config.blend);
        let distance = camera.eye.distance(self.target);
        camera.look_at(self.target);
        if distance < self.config.tolerance {
            self.active = false;
            self.target = Vec3::ZERO;
            FramingStatus::Settled
        } else {
            FramingStatus::Moving { distance }
        }
    }
}

impl Default for FramingController {
    fn default() -> Self {
        Self::new(FramingConfig::default())
    }
}
