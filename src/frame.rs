use crate::dom;
use crate::hint::HintElement;
use crate::host::WebSceneHost;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use viewer_core::Viewer;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub viewer: Rc<RefCell<Viewer>>,
    pub host: Rc<RefCell<WebSceneHost>>,
    pub canvas: web::HtmlCanvasElement,
    pub hint: HintElement,
    pub framing_since: Option<Instant>,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let mut viewer = self.viewer.borrow_mut();
        let mut host = self.host.borrow_mut();

        for outcome in host.take_completed() {
            match outcome.result {
                Ok(root) => {
                    if let Err(e) = viewer.on_content_loaded(&outcome.path, root) {
                        log::warn!("[load] {}: {}", outcome.path, e);
                    }
                }
                Err(e) => log::error!("[load] {} failed: {:?}", outcome.path, e),
            }
        }

        if viewer.is_framing() && self.framing_since.is_none() {
            self.framing_since = Some(Instant::now());
        }

        let frame = viewer.tick(&mut *host);

        if !viewer.is_framing() {
            if let Some(t0) = self.framing_since.take() {
                log::info!("[framing] settled in {:?}", t0.elapsed());
            }
        }

        let (css_width, _) = dom::canvas_css_size(&self.canvas);
        self.hint.apply(&frame.hint, css_width);
    }
}

type TickClosure = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

fn request_frame(tick: &TickClosure) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: TickClosure = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}
