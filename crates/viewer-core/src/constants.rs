// Shared tuning constants for the viewer controller.
// All per-tick quantities assume one tick per display refresh.

// Idle rotation (radians per tick)
pub const IDLE_BASE_SPEED: f32 = 0.0013; // slow constant drift while resting
pub const IDLE_BURST_SPEED: f32 = 0.003; // attention-getting burst
pub const IDLE_BURST_FRAMES: u32 = 333; // length of one burst
pub const IDLE_HINT_SPEED_PX: f32 = 0.55; // hint cue travel per burst frame

// Idle cooldowns (ticks until the next burst)
pub const IDLE_INITIAL_COOLDOWN: i32 = 300;
pub const IDLE_LOAD_COOLDOWN: i32 = 800; // re-armed whenever content is (re)framed
pub const IDLE_REST_COOLDOWN: i32 = 1000; // after a burst completes

// Camera framing
pub const FRAMING_MARGIN: f32 = 1.5; // view distance = largest extent * margin
pub const FRAMING_ELEVATION_DIVISOR: f32 = 0.9; // elevation = extents.y / divisor
pub const FRAMING_BLEND: f32 = 0.1; // lerp factor per tick
pub const FRAMING_TOLERANCE: f32 = 0.01; // world units

// Camera
pub const CAMERA_FOVY_DEGREES: f32 = 75.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 1000.0;
pub const CAMERA_START_EYE: [f32; 3] = [0.0, 0.0, 5.0];

// Orbit controls
pub const ORBIT_DAMPING: f32 = 0.1;
pub const ORBIT_ROTATE_SPEED: f32 = 0.7;
pub const ORBIT_ZOOM_SPEED: f32 = 1.0;
pub const ORBIT_MIN_POLAR: f32 = 0.0;
pub const ORBIT_MAX_POLAR: f32 = std::f32::consts::PI;
pub const ORBIT_MIN_DISTANCE: f32 = 0.01;
pub const ORBIT_MAX_DISTANCE: f32 = CAMERA_ZFAR;
