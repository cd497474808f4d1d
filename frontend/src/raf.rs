//! Cancelable `requestAnimationFrame` loop.
//!
//! Tilt springs, the count-up animation and the background scene all run
//! frame callbacks; every one of them must stop writing to the DOM the
//! moment its host is torn down. Dropping the returned handle cancels the
//! pending frame and releases the closure.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

struct Inner {
    frame_id: Cell<Option<i32>>,
    active: Cell<bool>,
    closure: RefCell<Option<Closure<dyn FnMut(f64)>>>,
}

pub struct RafLoop {
    inner: Rc<Inner>,
}

impl RafLoop {
    /// Start a frame loop. `frame` receives the DOM timestamp in
    /// milliseconds and keeps running for as long as it returns `true`.
    pub fn start(mut frame: impl FnMut(f64) -> bool + 'static) -> Self {
        let inner = Rc::new(Inner {
            frame_id: Cell::new(None),
            active: Cell::new(true),
            closure: RefCell::new(None),
        });

        // The closure only holds a weak reference, otherwise the
        // self-rescheduling loop would keep itself alive after the handle
        // is dropped.
        let weak = Rc::downgrade(&inner);
        let callback = Closure::wrap(Box::new(move |timestamp: f64| {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            if !inner.active.get() {
                return;
            }
            if frame(timestamp) {
                let slot = inner.closure.borrow();
                if let (Some(callback), Some(window)) = (slot.as_ref(), web_sys::window()) {
                    if let Ok(id) =
                        window.request_animation_frame(callback.as_ref().unchecked_ref())
                    {
                        inner.frame_id.set(Some(id));
                    }
                }
            } else {
                inner.active.set(false);
            }
        }) as Box<dyn FnMut(f64)>);

        if let Some(window) = web_sys::window() {
            if let Ok(id) = window.request_animation_frame(callback.as_ref().unchecked_ref()) {
                inner.frame_id.set(Some(id));
            }
        }
        inner.closure.replace(Some(callback));

        Self { inner }
    }

    /// Whether the loop still has frames scheduled. A loop whose frame
    /// callback returned `false` is finished and can be replaced.
    pub fn is_active(&self) -> bool {
        self.inner.active.get()
    }
}

impl Drop for RafLoop {
    fn drop(&mut self) {
        self.inner.active.set(false);
        if let Some(id) = self.inner.frame_id.take() {
            if let Some(window) = web_sys::window() {
                let _ = window.cancel_animation_frame(id);
            }
        }
        self.inner.closure.replace(None);
    }
}
