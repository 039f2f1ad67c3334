use super::pointer::with_target;
use super::Listener;
use crate::host::FrameTarget;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Window resizes mark the element set stale; the rebuild runs on the next frame.
pub fn wire_resize(
    window: &web::Window,
    target: Weak<RefCell<dyn FrameTarget>>,
) -> anyhow::Result<Listener> {
    Listener::attach(window, "resize", move |_| {
        with_target(&target, |ft| ft.layout_changed());
    })
}

/// Pending `document.fonts.ready` rebuild; dropping it disarms the callback.
pub struct FontWatch {
    armed: Rc<Cell<bool>>,
}

impl Drop for FontWatch {
    fn drop(&mut self) {
        self.armed.set(false);
    }
}

/// Glyph boxes change once web fonts finish loading; request one rebuild then.
pub fn watch_fonts_ready(
    document: &web::Document,
    target: Weak<RefCell<dyn FrameTarget>>,
) -> anyhow::Result<FontWatch> {
    let ready: js_sys::Promise = document
        .fonts()
        .ready()
        .map_err(|e| anyhow::anyhow!("fonts.ready: {:?}", e))?;
    let armed = Rc::new(Cell::new(true));
    let armed_for_task = armed.clone();
    spawn_local(async move {
        if let Err(e) = JsFuture::from(ready).await {
            log::warn!("[fonts] load failed: {:?}", e);
        }
        if armed_for_task.get() {
            with_target(&target, |ft| ft.layout_changed());
        }
    });
    Ok(FontWatch { armed })
}
