//! Damped orbit controls around a target point.
//!
//! Pointer deltas accumulate into a pending spherical delta; every
//! [`OrbitControls::update`] applies a damped fraction of it to the camera
//! and decays the remainder, so motion coasts to a stop after release.
//! Panning is not supported.

use crate::camera::Camera;
use crate::config::OrbitConfig;
use glam::{Vec2, Vec3};
use std::f32::consts::{PI, TAU};

const POLAR_EPSILON: f32 = 1e-6;
const MOTION_EPSILON: f32 = 1e-6;
const ZOOM_BASE: f32 = 0.95;

/// Y-up spherical coordinates: `phi` is the polar angle from +Y, `theta`
/// the azimuth from +Z toward +X.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spherical {
    pub radius: f32,
    pub phi: f32,
    pub theta: f32,
}

impl Spherical {
    pub fn from_offset(v: Vec3) -> Self {
        let radius = v.length();
        if radius == 0.0 {
            return Self {
                radius,
                phi: 0.0,
                theta: 0.0,
            };
        }
        Self {
            radius,
            theta: v.x.atan2(v.z),
            phi: (v.y / radius).clamp(-1.0, 1.0).acos(),
        }
    }

    pub fn to_offset(self) -> Vec3 {
        let sin_phi = self.phi.sin();
        Vec3::new(
            self.radius * sin_phi * self.theta.sin(),
            self.radius * self.phi.cos(),
            self.radius * sin_phi * self.theta.cos(),
        )
    }
}

#[derive(Clone, Debug)]
pub struct OrbitControls {
    config: OrbitConfig,
    target: Vec3,
    delta_theta: f32,
    delta_phi: f32,
    scale: f32,
    drag_from: Option<Vec2>,
}

impl OrbitControls {
    pub fn new(config: OrbitConfig) -> Self {
        Self {
            config,
            target: Vec3::ZERO,
            delta_theta: 0.0,
            delta_phi: 0.0,
            scale: 1.0,
            drag_from: None,
        }
    }

    #[inline]
    pub fn target(&self) -> Vec3 {
        self.target
    }

    pub fn set_target(&mut self, target: Vec3) {
        self.target = target;
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.drag_from.is_some()
    }

    pub fn begin_drag(&mut self, pos: Vec2) {
        self.drag_from = Some(pos);
    }

    /// Feed a pointer move. Ignored unless a drag is in progress.
    pub fn drag_to(&mut self, pos: Vec2, viewport_height: f32) {
        if let Some(from) = self.drag_from {
            self.rotate(pos - from, viewport_height);
            self.drag_from = Some(pos);
        }
    }

    pub fn end_drag(&mut self) {
        self.drag_from = None;
    }

    /// Queue a rotation for a pointer delta in CSS pixels. A drag across the
    /// full viewport height turns a full circle at rotate speed 1.
    pub fn rotate(&mut self, delta_px: Vec2, viewport_height: f32) {
        let h = viewport_height.max(1.0);
        self.delta_theta -= TAU * delta_px.x / h * self.config.rotate_speed;
        self.delta_phi -= TAU * delta_px.y / h * self.config.rotate_speed;
    }

    /// Queue a dolly step from a wheel delta; negative moves closer.
    pub fn zoom(&mut self, wheel_delta_y: f32) {
        let step = ZOOM_BASE.powf(self.config.zoom_speed);
        if wheel_delta_y < 0.0 {
            self.scale *= step;
        } else if wheel_delta_y > 0.0 {
            self.scale /= step;
        }
    }

    /// Apply pending motion to `camera` and aim it at the target.
    /// Returns whether the eye moved noticeably.
    pub fn update(&mut self, camera: &mut Camera) -> bool {
        let offset = camera.eye - self.target;
        if offset.length_squared() == 0.0 {
            self.scale = 1.0;
            return false;
        }
        let mut s = Spherical::from_offset(offset);

        let damping = self.config.damping;
        s.theta += self.delta_theta * damping;
        s.phi += self.delta_phi * damping;
        s.phi = s
            .phi
            .clamp(self.config.min_polar, self.config.max_polar)
            .clamp(POLAR_EPSILON, PI - POLAR_EPSILON);
        s.radius = (s.radius * self.scale).clamp(self.config.min_distance, self.config.max_distance);

        let eye = self.target + s.to_offset();
        let moved = eye.distance_squared(camera.eye) > MOTION_EPSILON;
        camera.eye = eye;
        camera.look_at(self.target);

        self.delta_theta *= 1.0 - damping;
        self.delta_phi *= 1.0 - damping;
        self.scale = 1.0;
        moved
    }
}

impl Default for OrbitControls {
    fn default() -> Self {
        Self::new(OrbitConfig::default())
    }
}
