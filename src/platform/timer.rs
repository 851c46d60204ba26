//! Cancellable one-shot timers

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

/// A `setTimeout` that is cleared when dropped.
///
/// The owner must not drop the `Timeout` from inside its own callback.
pub struct Timeout {
    handle: i32,
    _closure: Closure<dyn FnMut()>,
}

impl Timeout {
    /// Schedule `f` after `ms` milliseconds. `None` if there is no window.
    pub fn new(ms: i32, f: impl FnOnce() + 'static) -> Option<Self> {
        let window = web_sys::window()?;
        let mut f = Some(f);
        let closure = Closure::<dyn FnMut()>::new(move || {
            if let Some(f) = f.take() {
                f();
            }
        });
        let handle = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                ms,
            )
            .map_err(|e| log::warn!("setTimeout failed: {e:?}"))
            .ok()?;
        Some(Self {
            handle,
            _closure: closure,
        })
    }
}

impl Drop for Timeout {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            window.clear_timeout_with_handle(self.handle);
        }
    }
}
