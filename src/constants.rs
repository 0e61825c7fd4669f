// Page contract for the web front-end: element ids, attributes and defaults.

// Canvas the render host draws into
pub const CANVAS_ID: &str = "viewer-canvas";

// Hint cue ("drag me" hand) shown during idle bursts
pub const HINT_ID: &str = "hand";
pub const HINT_TOP: &str = "55%";

// Optional attributes on the canvas
pub const CONFIG_ATTR: &str = "data-config"; // JSON ViewerConfig overrides
pub const INITIAL_MODEL_ATTR: &str = "data-initial-model";

// Model buttons carry the content path here
pub const MODEL_ATTR: &str = "data-model";

// Part toggle buttons carry the mesh name here
pub const PART_ATTR: &str = "data-part";

pub const DEFAULT_MODEL_PATH: &str = "assets/steampunk_underwater_explorer/scene.gltf";
