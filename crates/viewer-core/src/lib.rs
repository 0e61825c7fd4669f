//! Platform-free controller for the model viewer.
//!
//! The render host (scene graph, glTF loading, drawing) lives elsewhere; this
//! crate decides where the camera goes and how the content moves before the
//! user touches it. Front-ends implement [`SceneHost`] and call
//! [`Viewer::tick`] once per display frame.

pub mod bounds;
pub mod camera;
pub mod config;
pub mod constants;
pub mod content;
pub mod error;
pub mod framing;
pub mod gate;
pub mod idle;
pub mod orbit;
pub mod viewer;

pub use bounds::*;
pub use camera::*;
pub use config::*;
pub use constants::*;
pub use content::*;
pub use error::*;
pub use framing::*;
pub use gate::*;
pub use idle::*;
pub use orbit::*;
pub use viewer::*;
