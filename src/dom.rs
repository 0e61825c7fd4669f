use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// CSS size of the canvas as laid out on the page.
pub fn canvas_css_size(canvas: &web::HtmlCanvasElement) -> (f64, f64) {
    let rect = canvas.get_bounding_client_rect();
    (rect.width(), rect.height())
}

pub fn add_window_listener(event: &str, mut handler: impl FnMut() + 'static) {
    if let Some(window) = web::window() {
        let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        _ = window.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Wire a click listener on every element carrying `attr`, passing the
/// attribute's value to `handler`.
pub fn wire_attribute_clicks(document: &web::Document, attr: &str, handler: impl Fn(String) + 'static) {
    let Ok(list) = document.query_selector_all(&format!("[{attr}]")) else {
        return;
    };
    let handler: Rc<dyn Fn(String)> = Rc::new(handler);
    let mut wired = 0;
    for i in 0..list.length() {
        let Some(el) = list.item(i).and_then(|n| n.dyn_into::<web::Element>().ok()) else {
            continue;
        };
        let Some(value) = el.get_attribute(attr) else {
            continue;
        };
        let handler = handler.clone();
        let closure = Closure::wrap(Box::new(move || handler(value.clone())) as Box<dyn FnMut()>);
        _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
        wired += 1;
    }
    log::info!("[dom] wired {} [{}] buttons", wired, attr);
}
