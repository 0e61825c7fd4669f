//! Live camera state driven by the controller.
//!
//! The camera is a position plus an orientation quaternion rather than an
//! eye/target pair: framing re-aims it at a point that converges on the eye
//! itself, and an explicit orientation keeps that well defined.

use crate::config::CameraConfig;
use glam::{Mat3, Quat, Vec3};

const LOOK_EPSILON_SQ: f32 = 1e-12;

/// Right-handed perspective camera, looking down its local -Z.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    pub eye: Vec3,
    pub orientation: Quat,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    pub fn from_config(config: &CameraConfig) -> Self {
        let mut camera = Self {
            eye: Vec3::from_array(config.start_eye),
            orientation: Quat::IDENTITY,
            up: Vec3::Y,
            aspect: 1.0,
            fovy_radians: config.fovy_degrees.to_radians(),
            znear: config.znear,
            zfar: config.zfar,
        };
        camera.look_at(Vec3::ZERO);
        camera
    }

    #[inline]
    pub fn forward(&self) -> Vec3 {
        self.orientation * Vec3::NEG_Z
    }

    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.aspect = width / height.max(1.0);
    }

    /// Turn the camera to face `point`.
    ///
    /// Returns `false` and keeps the current orientation when `point`
    /// coincides with the eye.
    pub fn look_at(&mut self, point: Vec3) -> bool {
        let dir = point - self.eye;
        if dir.length_squared() < LOOK_EPSILON_SQ {
            return false;
        }
        let forward = dir.normalize();
        let mut right = forward.cross(self.up);
        if right.length_squared() < 1e-8 {
            // looking straight along `up`
            right = forward.cross(Vec3::Z);
        }
        let right = right.normalize();
        let up = right.cross(forward);
        self.orientation = Quat::from_mat3(&Mat3::from_cols(right, up, -forward)).normalize();
        true
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::from_config(&CameraConfig::default())
    }
}
