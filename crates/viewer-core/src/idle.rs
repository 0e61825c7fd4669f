//! Idle rotation shown before the first interaction.
//!
//! The machine alternates between a slow constant drift (`Resting`) and a
//! short `Bursting` nudge-and-settle motion that also moves an on-screen
//! hint cue. It is stepped once per tick by the frame loop and simply stops
//! being stepped once the interaction gate latches.

use crate::config::IdleConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BurstDirection {
    Forward,
    Back,
}

impl BurstDirection {
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            BurstDirection::Forward => 1.0,
            BurstDirection::Back => -1.0,
        }
    }
}

/// Direction for `frame` of a burst lasting `total_frames`.
///
/// The first third runs forward; from the one-third boundary frame onwards
/// the burst runs back. For 333 frames: `[0, 111)` forward, `[111, 333)` back.
#[inline]
pub fn burst_direction(frame: u32, total_frames: u32) -> BurstDirection {
    if (frame as u64) * 3 < total_frames as u64 {
        BurstDirection::Forward
    } else {
        BurstDirection::Back
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum IdleRotationPhase {
    Resting {
        cooldown: i32,
    },
    Bursting {
        frame: u32,
        total_frames: u32,
        direction: BurstDirection,
    },
}

/// Visibility and horizontal offset (px, relative to where the burst started)
/// of the hint cue.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HintCue {
    pub visible: bool,
    pub offset_px: f32,
}

impl HintCue {
    pub const HIDDEN: HintCue = HintCue {
        visible: false,
        offset_px: 0.0,
    };
}

/// Output of one idle step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IdleStep {
    /// Content rotation about Y to add this tick, radians.
    pub rotation_delta: f32,
    pub hint: HintCue,
}

#[derive(Clone, Debug)]
pub struct IdleRotation {
    config: IdleConfig,
    phase: IdleRotationPhase,
    hint_offset: f32,
}

impl IdleRotation {
    pub fn new(config: IdleConfig) -> Self {
        let cooldown = config.initial_cooldown;
        Self {
            config,
            phase: IdleRotationPhase::Resting { cooldown },
            hint_offset: 0.0,
        }
    }

    #[inline]
    pub fn phase(&self) -> IdleRotationPhase {
        self.phase
    }

    /// Ticks left before the next burst; `None` while bursting.
    pub fn cooldown(&self) -> Option<i32> {
        match self.phase {
            IdleRotationPhase::Resting { cooldown } => Some(cooldown),
            IdleRotationPhase::Bursting { .. } => None,
        }
    }

    /// Return to `Resting` with the given cooldown, abandoning any burst.
    pub fn rearm(&mut self, cooldown: i32) {
        self.phase = IdleRotationPhase::Resting { cooldown };
        self.hint_offset = 0.0;
    }

    /// Re-arm with the longer cooldown used after content changes.
    pub fn rearm_after_load(&mut self) {
        self.rearm(self.config.load_cooldown);
    }

    pub fn step(&mut self) -> IdleStep {
        if let IdleRotationPhase::Resting { cooldown } = self.phase {
            if cooldown > 0 {
                self.phase = IdleRotationPhase::Resting {
                    cooldown: cooldown - 1,
                };
                return IdleStep {
                    rotation_delta: self.config.base_speed,
                    hint: HintCue::HIDDEN,
                };
            }
            log::debug!(
                "[idle] burst starting ({} frames)",
                self.config.burst_frames
            );
            self.hint_offset = 0.0;
            self.phase = IdleRotationPhase::Bursting {
                frame: 0,
                total_frames: self.config.burst_frames,
                direction: burst_direction(0, self.config.burst_frames),
            };
        }
        self.burst_step()
    }

    fn burst_step(&mut self) -> IdleStep {
        let IdleRotationPhase::Bursting {
            frame,
            total_frames,
            direction,
        } = self.phase
        else {
            return IdleStep {
                rotation_delta: 0.0,
                hint: HintCue::HIDDEN,
            };
        };

        let sign = direction.sign();
        let modifier = match direction {
            BurstDirection::Back => self.config.base_speed,
            BurstDirection::Forward => -self.config.base_speed,
        };
        let rotation_delta = sign * (self.config.burst_speed + modifier);
        self.hint_offset += sign * self.config.hint_speed_px;
        let hint = HintCue {
            visible: true,
            offset_px: self.hint_offset,
        };

        let next = frame + 1;
        self.phase = if next >= total_frames {
            IdleRotationPhase::Resting {
                cooldown: self.config.rest_cooldown,
            }
        } else {
            IdleRotationPhase::Bursting {
                frame: next,
                total_frames,
                direction: burst_direction(next, total_frames),
            }
        };

        IdleStep {
            rotation_delta,
            hint,
        }
    }
}

impl Default for IdleRotation {
    fn default() -> Self {
        Self::new(IdleConfig::default())
    }
}
