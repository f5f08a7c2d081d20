use anyhow::Context;
use starfield_core::{Surface, Viewport};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<(web::Window, web::Document)> {
    let window = web::window()?;
    let document = window.document()?;
    Some((window, document))
}

pub fn canvas_by_id(document: &web::Document, id: &str) -> anyhow::Result<web::HtmlCanvasElement> {
    document
        .get_element_by_id(id)
        .with_context(|| format!("missing #{id}"))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("#{id} is not a canvas: {:?}", e))
}

pub fn context_2d(canvas: &web::HtmlCanvasElement) -> anyhow::Result<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("getContext failed: {:?}", e))?
        .context("2d context unavailable")?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!("unexpected context type: {:?}", e))
}

/// Window inner size in CSS pixels plus the device pixel ratio.
pub fn read_viewport(window: &web::Window) -> Viewport {
    let css = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32
    };
    Viewport::new(
        css(window.inner_width()),
        css(window.inner_height()),
        Some(window.device_pixel_ratio() as f32),
    )
}

pub fn apply_backing_size(canvas: &web::HtmlCanvasElement, surface: &Surface) {
    let (w, h) = surface.backing_size();
    canvas.set_width(w);
    canvas.set_height(h);
}

pub fn dataset_lookup(canvas: &web::HtmlCanvasElement) -> impl Fn(&str) -> Option<String> {
    let dataset = canvas.dataset();
    move |key: &str| dataset.get(key)
}
