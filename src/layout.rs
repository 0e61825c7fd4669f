// Pure layout helpers for the DOM layer.
// Kept free of web-sys so host-side tests can include this file directly.

const HINT_NUDGE_PX: i64 = 2;

/// CSS `left` for the hint cue. The cue is anchored at the canvas' horizontal
/// center, moved by `offset_px`, truncated to whole pixels and nudged right.
pub fn hint_left_css(canvas_css_width: f64, offset_px: f32) -> String {
    let x = canvas_css_width / 2.0 + offset_px as f64;
    format!("{}px", x.trunc() as i64 + HINT_NUDGE_PX)
}

#[inline]
pub fn hint_display_css(visible: bool) -> &'static str {
    if visible {
        "block"
    } else {
        "none"
    }
}

/// Viewport size used for aspect and orbit sensitivity; never zero.
#[inline]
pub fn viewport_size(css_width: f64, css_height: f64) -> (f32, f32) {
    ((css_width as f32).max(1.0), (css_height as f32).max(1.0))
}
