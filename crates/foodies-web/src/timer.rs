//! `setTimeout`-backed scheduled tasks.

use std::cell::RefCell;
use std::time::Duration;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Window;

fn delay_ms(delay: Duration) -> i32 {
    i32::try_from(delay.as_millis()).unwrap_or(i32::MAX)
}

/// Run `task` once after `delay`. The task cannot be cancelled.
pub fn spawn_after(
    window: &Window,
    delay: Duration,
    task: impl FnOnce() + 'static,
) -> Result<(), JsValue> {
    let callback = Closure::once_into_js(task);
    window.set_timeout_with_callback_and_timeout_and_arguments_0(
        callback.unchecked_ref(),
        delay_ms(delay),
    )?;
    Ok(())
}

/// A pending timeout, cancelled when dropped.
pub struct Timeout {
    window: Window,
    handle: i32,
    _callback: Closure<dyn FnMut()>,
}

impl Timeout {
    pub fn schedule(
        window: &Window,
        delay: Duration,
        task: impl FnOnce() + 'static,
    ) -> Result<Self, JsValue> {
        let callback = Closure::once(task);
        let handle = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            delay_ms(delay),
        )?;
        Ok(Self {
            window: window.clone(),
            handle,
            _callback: callback,
        })
    }
}

impl Drop for Timeout {
    fn drop(&mut self) {
        // Clearing an already-fired handle is a no-op.
        self.window.clear_timeout_with_handle(self.handle);
    }
}

/// Runs only the last of a burst of triggers, once `delay` has passed
/// without a new one.
pub struct Debouncer {
    window: Window,
    delay: Duration,
    pending: RefCell<Option<Timeout>>,
}

impl Debouncer {
    pub fn new(window: Window, delay: Duration) -> Self {
        Self {
            window,
            delay,
            pending: RefCell::new(None),
        }
    }

    /// Cancel any pending task and schedule `task` in its place.
    pub fn trigger(&self, task: impl FnOnce() + 'static) -> Result<(), JsValue> {
        let next = Timeout::schedule(&self.window, self.delay, task)?;
        // Dropping the previous timeout cancels it.
        self.pending.replace(Some(next));
        Ok(())
    }
}
