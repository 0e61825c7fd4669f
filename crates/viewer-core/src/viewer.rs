//! The viewer controller: one instance per canvas.
//!
//! Owns all mutable viewer state and is driven by two kinds of calls:
//! events (pointer down, model change, load completion, part toggle) and a
//! per-frame [`Viewer::tick`]. Everything runs on the caller's single
//! cooperative frame loop.

use crate::bounds::BoundingVolume;
use crate::camera::Camera;
use crate::config::ViewerConfig;
use crate::content::{ContentNode, LoadedContent};
use crate::error::ViewerError;
use crate::framing::{FramingController, FramingRequest, FramingStatus};
use crate::gate::InteractionGate;
use crate::idle::{HintCue, IdleRotation};
use crate::orbit::OrbitControls;
use glam::{Vec2, Vec3};

/// The render/scene side the controller drives.
///
/// Loading is asynchronous: `begin_load` only starts it, and the host later
/// hands the result back through [`Viewer::on_content_loaded`].
pub trait SceneHost {
    /// Remove loaded content and restore the default light rig.
    fn clear_content(&mut self);
    fn begin_load(&mut self, path: &str);
    fn set_part_visible(&mut self, name: &str, visible: bool);
    fn present(&mut self, frame: &Frame);
}

/// What the host draws for one tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    pub camera: Camera,
    /// Euler XYZ rotation applied to the content root.
    pub content_rotation: Vec3,
    pub hint: HintCue,
}

#[derive(Clone, Debug)]
pub struct ViewerState {
    pub gate: InteractionGate,
    pub idle: IdleRotation,
    pub framing: FramingController,
    pub camera: Camera,
    pub content_rotation: Vec3,
    pub hint: HintCue,
    /// Most recently requested content path.
    pub last_loaded: Option<String>,
    pub content: Option<LoadedContent>,
    /// Ticks spent in the current framing, for logging.
    framing_ticks: u32,
}

impl ViewerState {
    pub fn new(config: &ViewerConfig) -> Self {
        Self {
            gate: InteractionGate::new(),
            idle: IdleRotation::new(config.idle.clone()),
            framing: FramingController::new(config.framing.clone()),
            camera: Camera::from_config(&config.camera),
            content_rotation: Vec3::ZERO,
            hint: HintCue::HIDDEN,
            last_loaded: None,
            content: None,
            framing_ticks: 0,
        }
    }
}

pub struct Viewer {
    state: ViewerState,
    orbit: OrbitControls,
}

impl Viewer {
    pub fn new(config: ViewerConfig) -> Self {
        Self {
            state: ViewerState::new(&config),
            orbit: OrbitControls::new(config.orbit),
        }
    }

    pub fn state(&self) -> &ViewerState {
        &self.state
    }

    pub fn camera(&self) -> &Camera {
        &self.state.camera
    }

    pub fn orbit(&self) -> &OrbitControls {
        &self.orbit
    }

    pub fn content(&self) -> Option<&LoadedContent> {
        self.state.content.as_ref()
    }

    #[inline]
    pub fn has_interacted(&self) -> bool {
        self.state.gate.has_interacted()
    }

    #[inline]
    pub fn is_framing(&self) -> bool {
        self.state.framing.is_framing()
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.state.camera.set_viewport(width, height);
    }

    /// Pointer pressed on the canvas. Latches the interaction gate and starts
    /// an orbit drag at `pos` (CSS pixels).
    pub fn on_pointer_down(&mut self, pos: Vec2) -> bool {
        let first = self.state.gate.on_first_pointer_down();
        if first {
            log::info!("[input] first interaction; idle rotation off");
            self.state.hint = HintCue::HIDDEN;
        }
        self.orbit.begin_drag(pos);
        first
    }

    pub fn on_pointer_move(&mut self, pos: Vec2, viewport_height: f32) {
        self.orbit.drag_to(pos, viewport_height);
    }

    pub fn on_pointer_up(&mut self) {
        self.orbit.end_drag();
    }

    /// Wheel input only reaches the orbit once the user has taken control.
    pub fn on_wheel(&mut self, delta_y: f32) {
        if self.state.gate.has_interacted() {
            self.orbit.zoom(delta_y);
        }
    }

    /// Request `path` without clearing the scene; used for the first load.
    pub fn load_model<H: SceneHost + ?Sized>(&mut self, path: &str, host: &mut H) {
        log::info!("[load] requesting {}", path);
        self.state.idle.rearm_after_load();
        self.state.last_loaded = Some(path.to_string());
        host.begin_load(path);
    }

    /// Swap to `path`. Returns `false` and does nothing when it is already
    /// the most recent request.
    pub fn change_model<H: SceneHost + ?Sized>(&mut self, path: &str, host: &mut H) -> bool {
        if self.state.last_loaded.as_deref() == Some(path) {
            log::debug!("[load] {} already current; ignoring", path);
            return false;
        }
        host.clear_content();
        self.state.content = None;
        self.load_model(path, host);
        true
    }

    /// Deliver a completed load. Results for anything but the latest request
    /// are dropped.
    pub fn on_content_loaded(&mut self, path: &str, root: ContentNode) -> Result<(), ViewerError> {
        if self.state.last_loaded.as_deref() != Some(path) {
            log::warn!("[load] dropping stale result for {}", path);
            return Ok(());
        }
        let content = LoadedContent::new(path, root);
        let volume = content.bounding_volume();
        log::info!(
            "[load] {} ready ({} parts: {:?})",
            path,
            content.parts().len(),
            content.parts().names()
        );
        self.state.content = Some(content);
        let volume = volume.ok_or(ViewerError::EmptyContent)?;
        self.orbit.set_target(volume.center());
        self.request_framing(volume);
        Ok(())
    }

    /// Show/hide the meshes named `name` and reframe. Returns the new
    /// visibility.
    pub fn toggle_part<H: SceneHost + ?Sized>(
        &mut self,
        name: &str,
        host: &mut H,
    ) -> Result<bool, ViewerError> {
        let content = self.state.content.as_mut().ok_or(ViewerError::NoContent)?;
        let toggle = content.toggle_part(name)?;
        host.set_part_visible(name, toggle.visible);
        log::info!(
            "[parts] {} {}",
            name,
            if toggle.visible { "shown" } else { "hidden" }
        );
        self.request_framing(toggle.framing_volume);
        Ok(toggle.visible)
    }

    /// Aim a smooth camera move at `volume`. Resets the content rotation and
    /// re-arms the idle cooldown. Returns the target camera position.
    pub fn request_framing(&mut self, volume: BoundingVolume) -> Vec3 {
        let s = &mut self.state;
        s.content_rotation = Vec3::ZERO;
        s.idle.rearm_after_load();
        s.framing_ticks = 0;
        let target = s.framing.request(FramingRequest::from(volume));
        log::info!(
            "[framing] target ({:.2}, {:.2}, {:.2})",
            target.x,
            target.y,
            target.z
        );
        target
    }

    /// Advance one frame and present it.
    pub fn tick<H: SceneHost + ?Sized>(&mut self, host: &mut H) -> Frame {
        let s = &mut self.state;
        if s.gate.should_auto_rotate() {
            let step = s.idle.step();
            s.content_rotation.y += step.rotation_delta;
            s.hint = step.hint;
        } else {
            s.hint = HintCue::HIDDEN;
            self.orbit.update(&mut s.camera);
        }

        match s.framing.tick(&mut s.camera) {
            FramingStatus::Moving { .. } => s.framing_ticks += 1,
            FramingStatus::Settled => {
                log::info!("[framing] settled after {} ticks", s.framing_ticks + 1);
                s.framing_ticks = 0;
            }
            FramingStatus::Idle => {}
        }

        let frame = Frame {
            camera: s.camera,
            content_rotation: s.content_rotation,
            hint: s.hint,
        };
        host.present(&frame);
        frame
    }
}

impl Default for Viewer {
    fn default() -> Self {
        Self::new(ViewerConfig::default())
    }
}
