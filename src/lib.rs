#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use std::rc::Rc;
use viewer_core::{Viewer, ViewerConfig};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod hint;
mod host;
mod layout;

use constants::*;
use host::WebSceneHost;

/// Handles shared by the frame loop, DOM listeners and the exported entry
/// points. Everything runs on the page's single event loop.
#[derive(Clone)]
struct App {
    viewer: Rc<RefCell<Viewer>>,
    host: Rc<RefCell<WebSceneHost>>,
}

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

fn with_app(f: impl FnOnce(&App)) {
    match APP.with(|a| a.borrow().clone()) {
        Some(app) => f(&app),
        None => log::warn!("viewer not started yet"),
    }
}

/// Swap the displayed model. Requesting the current model does nothing.
#[wasm_bindgen]
pub fn change_model(path: &str) {
    with_app(|app| {
        app.viewer
            .borrow_mut()
            .change_model(path, &mut *app.host.borrow_mut());
    });
}

/// Show or hide the named part of the current model and reframe.
#[wasm_bindgen]
pub fn toggle_part(name: &str) {
    with_app(|app| {
        if let Err(e) = app
            .viewer
            .borrow_mut()
            .toggle_part(name, &mut *app.host.borrow_mut())
        {
            log::warn!("[parts] {}", e);
        }
    });
}

fn read_config(canvas: &web::HtmlCanvasElement) -> ViewerConfig {
    match canvas.get_attribute(CONFIG_ATTR) {
        Some(json) => ViewerConfig::from_json(&json).unwrap_or_else(|e| {
            log::error!("[config] {}; using defaults", e);
            ViewerConfig::default()
        }),
        None => ViewerConfig::default(),
    }
}

fn sync_viewport(app: &App, canvas: &web::HtmlCanvasElement) {
    let (css_w, css_h) = dom::canvas_css_size(canvas);
    let (w, h) = layout::viewport_size(css_w, css_h);
    let mut viewer = app.viewer.borrow_mut();
    viewer.resize(w, h);
    app.host.borrow().resize(viewer.camera(), w as f64, h as f64);
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("viewer-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let config = read_config(&canvas);
    let initial_model = canvas
        .get_attribute(INITIAL_MODEL_ATTR)
        .unwrap_or_else(|| DEFAULT_MODEL_PATH.to_string());

    let app = App {
        viewer: Rc::new(RefCell::new(Viewer::new(config))),
        host: Rc::new(RefCell::new(WebSceneHost::new(&canvas)?)),
    };

    sync_viewport(&app, &canvas);
    {
        let app = app.clone();
        let canvas = canvas.clone();
        dom::add_window_listener("resize", move || sync_viewport(&app, &canvas));
    }

    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        viewer: app.viewer.clone(),
    });
    dom::wire_attribute_clicks(&document, MODEL_ATTR, |path| change_model(&path));
    dom::wire_attribute_clicks(&document, PART_ATTR, |name| toggle_part(&name));

    app.viewer
        .borrow_mut()
        .load_model(&initial_model, &mut *app.host.borrow_mut());
    APP.with(|a| *a.borrow_mut() = Some(app.clone()));

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        viewer: app.viewer.clone(),
        host: app.host.clone(),
        canvas,
        hint: hint::HintElement::find(&document),
        framing_since: None,
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
