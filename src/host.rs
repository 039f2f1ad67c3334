use crate::events::{self, FontWatch, Listener};
use field_core::{Animator, Effect, FrameHost, FrameToken, HostError, Surface};
use std::cell::{Cell, RefCell};
use std::rc::Weak;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// What browser callbacks may do to a mounted animator.
pub trait FrameTarget {
    fn frame(&mut self, token: FrameToken);
    fn pointer_moved(&mut self, x: f32, y: f32);
    fn pointer_left(&mut self);
    fn layout_changed(&mut self);
}

impl<E, S> FrameTarget for Animator<E, S, WebHost>
where
    E: Effect<S>,
    S: Surface<<E as Effect<S>>::Element>,
{
    fn frame(&mut self, token: FrameToken) {
        self.on_frame(token);
    }

    fn pointer_moved(&mut self, x: f32, y: f32) {
        self.record_pointer(x, y);
    }

    fn pointer_left(&mut self) {
        Animator::pointer_left(self);
    }

    fn layout_changed(&mut self) {
        self.request_rebuild();
    }
}

/// `requestAnimationFrame` scheduling plus window listeners for one animator.
pub struct WebHost {
    window: web::Window,
    target: Weak<RefCell<dyn FrameTarget>>,
    tick: Closure<dyn FnMut()>,
    pending_token: std::rc::Rc<Cell<FrameToken>>,
    raf_id: Option<i32>,
    listeners: Vec<Listener>,
    watch_fonts: bool,
    fonts: Option<FontWatch>,
}

impl WebHost {
    /// `watch_fonts` adds a one-shot rebuild when web fonts finish loading.
    pub fn new(
        window: web::Window,
        target: Weak<RefCell<dyn FrameTarget>>,
        watch_fonts: bool,
    ) -> Self {
        let pending_token = std::rc::Rc::new(Cell::new(FrameToken::default()));
        let token_for_tick = pending_token.clone();
        let target_for_tick = target.clone();
        let tick = Closure::wrap(Box::new(move || {
            let Some(rc) = target_for_tick.upgrade() else {
                return;
            };
            // bind the borrow so it ends before `rc` is dropped
            let borrowed = rc.try_borrow_mut();
            match borrowed {
                Ok(mut ft) => ft.frame(token_for_tick.get()),
                Err(_) => log::warn!("[frame] animator busy; frame dropped"),
            }
        }) as Box<dyn FnMut()>);
        Self {
            window,
            target,
            tick,
            pending_token,
            raf_id: None,
            listeners: Vec::new(),
            watch_fonts,
            fonts: None,
        }
    }
}

impl FrameHost for WebHost {
    fn request_frame(&mut self, token: FrameToken) -> Result<(), HostError> {
        self.pending_token.set(token);
        let id = self
            .window
            .request_animation_frame(self.tick.as_ref().unchecked_ref())
            .map_err(|e| HostError::Schedule(format!("{:?}", e)))?;
        self.raf_id = Some(id);
        Ok(())
    }

    fn cancel_frame(&mut self) {
        if let Some(id) = self.raf_id.take() {
            _ = self.window.cancel_animation_frame(id);
        }
    }

    fn subscribe(&mut self) -> Result<(), HostError> {
        let pointer = events::wire_pointer(&self.window, self.target.clone())
            .map_err(|e| HostError::Subscribe(format!("{e:#}")))?;
        self.listeners.extend(pointer);
        let resize = events::wire_resize(&self.window, self.target.clone())
            .map_err(|e| HostError::Subscribe(format!("{e:#}")))?;
        self.listeners.push(resize);
        if self.watch_fonts {
            if let Some(document) = self.window.document() {
                match events::watch_fonts_ready(&document, self.target.clone()) {
                    Ok(watch) => self.fonts = Some(watch),
                    Err(e) => log::warn!("[fonts] {e:#}"),
                }
            }
        }
        log::debug!(
            "[host] {} listeners attached (fonts watch: {})",
            self.listeners.len(),
            self.fonts.is_some()
        );
        Ok(())
    }

    fn unsubscribe(&mut self) {
        // Listener::drop detaches; FontWatch::drop disarms
        self.listeners.clear();
        self.fonts = None;
    }
}
