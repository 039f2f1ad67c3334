#![cfg(target_arch = "wasm32")]
use field_core::{Animator, DotGrid, Effect, FieldConfig, GlyphRow, PartialConfig, Surface};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod canvas;
mod dom;
mod events;
mod glyphs;
mod host;

use canvas::CanvasSurface;
use glyphs::GlyphSurface;
use host::{FrameTarget, WebHost};

type GridAnimator = Animator<DotGrid, CanvasSurface, WebHost>;
type TextAnimator = Animator<GlyphRow, GlyphSurface, WebHost>;

const DEFAULT_TEXT: &str = "PRESSURE";

thread_local! {
    // Auto-mounted animators live for the page lifetime.
    static MOUNTED: RefCell<Vec<FieldHandle>> = const { RefCell::new(Vec::new()) };
}

#[derive(Clone)]
enum Mounted {
    Grid(Rc<RefCell<GridAnimator>>),
    Text(Rc<RefCell<TextAnimator>>),
}

/// JS-facing control handle for one mounted animator.
#[wasm_bindgen]
#[derive(Clone)]
pub struct FieldHandle {
    inner: Mounted,
}

#[wasm_bindgen]
impl FieldHandle {
    /// Start the frame loop; a no-op when already running.
    pub fn start(&self) -> bool {
        let started = match &self.inner {
            Mounted::Grid(a) => a.borrow_mut().start(),
            Mounted::Text(a) => a.borrow_mut().start(),
        };
        match started {
            Ok(s) => s,
            Err(e) => {
                log::error!("[handle] start failed: {e}");
                false
            }
        }
    }

    pub fn stop(&self) -> bool {
        match &self.inner {
            Mounted::Grid(a) => a.borrow_mut().stop(),
            Mounted::Text(a) => a.borrow_mut().stop(),
        }
    }

    #[wasm_bindgen(js_name = isRunning)]
    pub fn is_running(&self) -> bool {
        match &self.inner {
            Mounted::Grid(a) => a.borrow().is_running(),
            Mounted::Text(a) => a.borrow().is_running(),
        }
    }

    /// Apply one `key=value` override, e.g. `configure("radius", "200")`.
    pub fn configure(&self, key: &str, value: &str) -> bool {
        let mut partial = PartialConfig::default();
        if let Err(e) = partial.set(key, value) {
            log::warn!("[handle] {e}");
            return false;
        }
        let change = match &self.inner {
            Mounted::Grid(a) => a.borrow_mut().configure(&partial),
            Mounted::Text(a) => a.borrow_mut().configure(&partial),
        };
        log::debug!("[handle] {key}={value} (rebuild: {})", change.layout);
        true
    }

    /// Replace the text of a text-pressure mount; glyphs rebuild on the next frame.
    #[wasm_bindgen(js_name = setText)]
    pub fn set_text(&self, text: &str) -> bool {
        let Mounted::Text(a) = &self.inner else {
            log::warn!("[handle] setText on a dot grid");
            return false;
        };
        let mut anim = a.borrow_mut();
        match anim.surface_mut().set_text(text) {
            Ok(true) => {
                anim.request_rebuild();
                true
            }
            Ok(false) => false,
            Err(e) => {
                log::error!("[handle] setText failed: {e:#}");
                false
            }
        }
    }

    /// Current text of a text-pressure mount.
    #[wasm_bindgen(getter)]
    pub fn text(&self) -> Option<String> {
        match &self.inner {
            Mounted::Text(a) => Some(a.borrow().surface().text().to_string()),
            Mounted::Grid(_) => None,
        }
    }

    #[wasm_bindgen(js_name = framesCommitted)]
    pub fn frames_committed(&self) -> f64 {
        match &self.inner {
            Mounted::Grid(a) => a.borrow().frames_committed() as f64,
            Mounted::Text(a) => a.borrow().frames_committed() as f64,
        }
    }
}

fn build_animator<E, S>(
    effect: E,
    surface: S,
    config: FieldConfig,
    watch_fonts: bool,
) -> anyhow::Result<Rc<RefCell<Animator<E, S, WebHost>>>>
where
    E: Effect<S> + 'static,
    S: Surface<<E as Effect<S>>::Element> + 'static,
{
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let anim = Rc::new_cyclic(|weak: &Weak<RefCell<Animator<E, S, WebHost>>>| {
        let target: Weak<RefCell<dyn FrameTarget>> = weak.clone();
        RefCell::new(Animator::new(
            effect,
            surface,
            WebHost::new(window, target, watch_fonts),
            config,
        ))
    });
    Ok(anim)
}

fn mount_grid(canvas: web::HtmlCanvasElement) -> anyhow::Result<FieldHandle> {
    let mut config = FieldConfig::dot_grid();
    config.apply(&dom::read_config(&canvas));
    let surface = CanvasSurface::new(canvas)?;
    let anim = build_animator(DotGrid::new(), surface, config, false)?;
    let handle = FieldHandle {
        inner: Mounted::Grid(anim),
    };
    handle.start();
    Ok(handle)
}

fn mount_text(container: web::HtmlElement, text: Option<String>) -> anyhow::Result<FieldHandle> {
    let mut config = FieldConfig::text_pressure();
    config.apply(&dom::read_config(&container));
    let text = text
        .or_else(|| container.get_attribute("data-text"))
        .unwrap_or_else(|| DEFAULT_TEXT.to_string());
    let surface = GlyphSurface::new(container, &text)?;
    let anim = build_animator(GlyphRow::new(), surface, config, true)?;
    let handle = FieldHandle {
        inner: Mounted::Text(anim),
    };
    handle.start();
    Ok(handle)
}

/// Mount the dot-grid background on `canvas`. Configuration is read from its
/// `data-*` attributes (`data-gap`, `data-radius`, ...).
#[wasm_bindgen(js_name = mountDotGrid)]
pub fn mount_dot_grid(canvas: web::HtmlCanvasElement) -> Result<FieldHandle, JsValue> {
    mount_grid(canvas).map_err(|e| JsValue::from_str(&format!("{e:#}")))
}

/// Mount the text-pressure effect inside `container`. `text` falls back to
/// `data-text`, then to a default word.
#[wasm_bindgen(js_name = mountTextPressure)]
pub fn mount_text_pressure(
    container: web::HtmlElement,
    text: Option<String>,
) -> Result<FieldHandle, JsValue> {
    mount_text(container, text).map_err(|e| JsValue::from_str(&format!("{e:#}")))
}

fn auto_mount(document: &web::Document) -> anyhow::Result<usize> {
    let mut handles = Vec::new();

    let grids = document
        .query_selector_all("canvas[data-dot-grid]")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    for i in 0..grids.length() {
        let Some(canvas) = grids
            .item(i)
            .and_then(|n| n.dyn_into::<web::HtmlCanvasElement>().ok())
        else {
            continue;
        };
        match mount_grid(canvas) {
            Ok(h) => handles.push(h),
            Err(e) => log::error!("[mount] dot grid: {e:#}"),
        }
    }

    let texts = document
        .query_selector_all("[data-text-pressure]")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    for i in 0..texts.length() {
        let Some(container) = texts
            .item(i)
            .and_then(|n| n.dyn_into::<web::HtmlElement>().ok())
        else {
            continue;
        };
        match mount_text(container, None) {
            Ok(h) => handles.push(h),
            Err(e) => log::error!("[mount] text pressure: {e:#}"),
        }
    }

    let count = handles.len();
    MOUNTED.with(|m| m.borrow_mut().extend(handles));
    Ok(count)
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("field-web starting");

    let Some(document) = dom::window_document() else {
        log::error!("init error: no document");
        return Ok(());
    };
    match auto_mount(&document) {
        Ok(n) => log::info!("[mount] {n} animators mounted"),
        Err(e) => log::error!("init error: {e:#}"),
    }
    Ok(())
}
