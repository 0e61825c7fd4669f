use crate::constants::{HINT_ID, HINT_TOP};
use crate::layout;
use viewer_core::HintCue;
use wasm_bindgen::JsCast;
use web_sys as web;

/// The on-screen hand that nudges the user to drag during idle bursts.
pub struct HintElement {
    el: Option<web::HtmlElement>,
    shown: bool,
}

impl HintElement {
    pub fn find(document: &web::Document) -> Self {
        let el = document
            .get_element_by_id(HINT_ID)
            .and_then(|e| e.dyn_into::<web::HtmlElement>().ok());
        match &el {
            Some(el) => {
                let style = el.style();
                _ = style.set_property("top", HINT_TOP);
                _ = style.set_property("display", layout::hint_display_css(false));
            }
            None => log::warn!("[hint] no #{} element; hint disabled", HINT_ID),
        }
        Self { el, shown: false }
    }

    pub fn apply(&mut self, cue: &HintCue, canvas_css_width: f64) {
        let Some(el) = &self.el else {
            return;
        };
        let style = el.style();
        if cue.visible {
            _ = style.set_property("left", &layout::hint_left_css(canvas_css_width, cue.offset_px));
        }
        if cue.visible != self.shown {
            _ = style.set_property("display", layout::hint_display_css(cue.visible));
            self.shown = cue.visible;
        }
    }
}
