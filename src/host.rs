//! Binding to the page-provided render host.
//!
//! The page defines a global `ViewerHost` class around its 3D engine (scene
//! graph, light rig, glTF loader, renderer). `loadModel` resolves to a plain
//! object describing the loaded subtree in the shape `ContentNode` parses.

use std::cell::RefCell;
use std::rc::Rc;
use viewer_core::{Camera, ContentNode, Frame, SceneHost};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

#[wasm_bindgen]
extern "C" {
    pub type ViewerHost;

    #[wasm_bindgen(constructor, catch)]
    pub fn new(canvas: &web::HtmlCanvasElement) -> Result<ViewerHost, JsValue>;

    #[wasm_bindgen(method, js_name = resetScene)]
    pub fn reset_scene(this: &ViewerHost);

    #[wasm_bindgen(method, js_name = loadModel)]
    pub fn load_model(this: &ViewerHost, path: &str) -> js_sys::Promise;

    #[wasm_bindgen(method, js_name = setPartVisible)]
    pub fn set_part_visible(this: &ViewerHost, name: &str, visible: bool);

    #[wasm_bindgen(method, js_name = setCamera)]
    pub fn set_camera(this: &ViewerHost, position: &[f32], quaternion: &[f32]);

    #[wasm_bindgen(method, js_name = setProjection)]
    pub fn set_projection(this: &ViewerHost, fovy_degrees: f32, aspect: f32, znear: f32, zfar: f32);

    #[wasm_bindgen(method, js_name = setContentRotation)]
    pub fn set_content_rotation(this: &ViewerHost, x: f32, y: f32, z: f32);

    #[wasm_bindgen(method)]
    pub fn resize(this: &ViewerHost, width: f64, height: f64);

    #[wasm_bindgen(method)]
    pub fn render(this: &ViewerHost);
}

pub struct LoadOutcome {
    pub path: String,
    pub result: anyhow::Result<ContentNode>,
}

/// [`SceneHost`] over the JS `ViewerHost`.
///
/// Loads resolve on the JS event loop; their outcomes queue up here and the
/// frame loop feeds them to the viewer at the start of the next tick.
pub struct WebSceneHost {
    js: ViewerHost,
    completed: Rc<RefCell<Vec<LoadOutcome>>>,
}

impl WebSceneHost {
    pub fn new(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let js = ViewerHost::new(canvas).map_err(|e| anyhow::anyhow!("ViewerHost: {:?}", e))?;
        Ok(Self {
            js,
            completed: Rc::new(RefCell::new(Vec::new())),
        })
    }

    pub fn take_completed(&self) -> Vec<LoadOutcome> {
        std::mem::take(&mut *self.completed.borrow_mut())
    }

    pub fn resize(&self, camera: &Camera, width: f64, height: f64) {
        self.js.resize(width, height);
        self.js.set_projection(
            camera.fovy_radians.to_degrees(),
            camera.aspect,
            camera.znear,
            camera.zfar,
        );
    }
}

async fn await_content(promise: js_sys::Promise) -> anyhow::Result<ContentNode> {
    let value = JsFuture::from(promise)
        .await
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let json: String = js_sys::JSON::stringify(&value)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .into();
    Ok(ContentNode::from_json(&json)?)
}

impl SceneHost for WebSceneHost {
    fn clear_content(&mut self) {
        self.js.reset_scene();
    }

    fn begin_load(&mut self, path: &str) {
        let promise = self.js.load_model(path);
        let completed = self.completed.clone();
        let path = path.to_string();
        spawn_local(async move {
            let result = await_content(promise).await;
            completed.borrow_mut().push(LoadOutcome { path, result });
        });
    }

    fn set_part_visible(&mut self, name: &str, visible: bool) {
        self.js.set_part_visible(name, visible);
    }

    fn present(&mut self, frame: &Frame) {
        let camera = &frame.camera;
        self.js
            .set_camera(&camera.eye.to_array(), &camera.orientation.to_array());
        let r = frame.content_rotation;
        self.js.set_content_rotation(r.x, r.y, r.z);
        self.js.render();
    }
}
