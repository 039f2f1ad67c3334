use field_core::PartialConfig;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn device_pixel_ratio() -> f64 {
    web::window()
        .map(|w| w.device_pixel_ratio())
        .filter(|r| r.is_finite() && *r > 0.0)
        .unwrap_or(1.0)
}

/// Match the canvas backing store to its CSS size * devicePixelRatio.
/// Returns true when the backing store was resized (which also clears it).
pub fn sync_canvas_backing_size(
    canvas: &web::HtmlCanvasElement,
    css_width: f64,
    css_height: f64,
    dpr: f64,
) -> bool {
    let w_px = ((css_width * dpr).round() as u32).max(1);
    let h_px = ((css_height * dpr).round() as u32).max(1);
    if canvas.width() == w_px && canvas.height() == h_px {
        return false;
    }
    canvas.set_width(w_px);
    canvas.set_height(h_px);
    true
}

/// Read `data-<key>` attributes for every known config key.
pub fn read_config(element: &web::Element) -> PartialConfig {
    let pairs: Vec<(&str, String)> = PartialConfig::KEYS
        .iter()
        .filter_map(|key| {
            element
                .get_attribute(&format!("data-{key}"))
                .map(|value| (*key, value))
        })
        .collect();
    PartialConfig::from_pairs(pairs.iter().map(|(k, v)| (*k, v.as_str())))
}
