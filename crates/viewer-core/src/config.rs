//! Runtime configuration for the viewer.
//!
//! Every section defaults to the values in [`crate::constants`], and every
//! field is optional when deserializing, so a page can override a single knob
//! with e.g. `{"idle": {"burst_frames": 200}}`.

use crate::constants::*;
use crate::error::ViewerError;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub camera: CameraConfig,
    pub idle: IdleConfig,
    pub framing: FramingConfig,
    pub orbit: OrbitConfig,
}

impl ViewerConfig {
    pub fn from_json(json: &str) -> Result<Self, ViewerError> {
        serde_json::from_str(json).map_err(ViewerError::InvalidConfig)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub fovy_degrees: f32,
    pub znear: f32,
    pub zfar: f32,
    pub start_eye: [f32; 3],
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fovy_degrees: CAMERA_FOVY_DEGREES,
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
            start_eye: CAMERA_START_EYE,
        }
    }
}

/// Idle rotation timing. Speeds are radians per tick, cooldowns are ticks.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IdleConfig {
    pub base_speed: f32,
    pub burst_speed: f32,
    pub burst_frames: u32,
    pub hint_speed_px: f32,
    pub initial_cooldown: i32,
    pub load_cooldown: i32,
    pub rest_cooldown: i32,
}

impl Default for IdleConfig {
    fn default() -> Self {
        Self {
            base_speed: IDLE_BASE_SPEED,
            burst_speed: IDLE_BURST_SPEED,
            burst_frames: IDLE_BURST_FRAMES,
            hint_speed_px: IDLE_HINT_SPEED_PX,
            initial_cooldown: IDLE_INITIAL_COOLDOWN,
            load_cooldown: IDLE_LOAD_COOLDOWN,
            rest_cooldown: IDLE_REST_COOLDOWN,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FramingConfig {
    pub margin: f32,
    pub elevation_divisor: f32,
    pub blend: f32,
    pub tolerance: f32,
}

impl Default for FramingConfig {
    fn default() -> Self {
        Self {
            margin: FRAMING_MARGIN,
            elevation_divisor: FRAMING_ELEVATION_DIVISOR,
            blend: FRAMING_BLEND,
            tolerance: FRAMING_TOLERANCE,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrbitConfig {
    pub damping: f32,
    pub rotate_speed: f32,
    pub zoom_speed: f32,
    pub min_polar: f32,
    pub max_polar: f32,
    pub min_distance: f32,
    pub max_distance: f32,
}

impl Default for OrbitConfig {
    fn default() -> Self {
        Self {
            damping: ORBIT_DAMPING,
            rotate_speed: ORBIT_ROTATE_SPEED,
            zoom_speed: ORBIT_ZOOM_SPEED,
            min_polar: ORBIT_MIN_POLAR,
            max_polar: ORBIT_MAX_POLAR,
            min_distance: ORBIT_MIN_DISTANCE,
            max_distance: ORBIT_MAX_DISTANCE,
        }
    }
}
