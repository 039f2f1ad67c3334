use super::Listener;
use crate::host::FrameTarget;
use std::cell::RefCell;
use std::rc::Weak;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Viewport-space pointer position of a mouse/pointer event.
#[inline]
pub fn client_position(ev: &web::Event) -> Option<(f32, f32)> {
    let m = ev.dyn_ref::<web::MouseEvent>()?;
    Some((m.client_x() as f32, m.client_y() as f32))
}

/// Track the pointer over the whole window and park it when it leaves the page.
///
/// Handlers only record the sample; the next frame translates it into
/// surface-local space.
pub fn wire_pointer(
    window: &web::Window,
    target: Weak<RefCell<dyn FrameTarget>>,
) -> anyhow::Result<Vec<Listener>> {
    let mut listeners = Vec::with_capacity(3);

    let t = target.clone();
    listeners.push(Listener::attach(window, "pointermove", move |ev| {
        if let Some((x, y)) = client_position(&ev) {
            with_target(&t, |ft| ft.pointer_moved(x, y));
        }
    })?);

    let leave_target: web::EventTarget = match window.document().and_then(|d| d.document_element()) {
        Some(el) => el.into(),
        None => window.clone().into(),
    };
    let t = target.clone();
    listeners.push(Listener::attach(&leave_target, "pointerleave", move |_| {
        with_target(&t, |ft| ft.pointer_left());
    })?);

    // touch pointers vanish without a leave
    let t = target;
    listeners.push(Listener::attach(window, "pointercancel", move |_| {
        with_target(&t, |ft| ft.pointer_left());
    })?);

    Ok(listeners)
}

pub(crate) fn with_target(
    target: &Weak<RefCell<dyn FrameTarget>>,
    f: impl FnOnce(&mut dyn FrameTarget),
) {
    let Some(rc) = target.upgrade() else {
        return;
    };
    match rc.try_borrow_mut() {
        Ok(mut ft) => f(&mut *ft),
        Err(_) => log::debug!("[events] animator busy; event dropped"),
    };
}
