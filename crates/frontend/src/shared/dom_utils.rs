//! Small window/DOM helpers shared by the UI.

/// Show a blocking browser alert. No-op outside a browser context.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// How far down the page the viewport bottom currently sits, as a fraction
/// of the full document height. Returns 0.0 when the document is not
/// measurable.
pub fn scroll_ratio() -> f64 {
    let Some(window) = web_sys::window() else {
        return 0.0;
    };
    let Some(body) = window.document().and_then(|d| d.body()) else {
        return 0.0;
    };
    let scroll_y = window.scroll_y().unwrap_or(0.0);
    let viewport = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let height = body.scroll_height() as f64;
    if height <= 0.0 {
        return 0.0;
    }
    (scroll_y + viewport) / height
}
