use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::Timeout;

/// Current vertical scroll position, 0 when the window is unavailable.
pub fn scroll_offset() -> f64 {
    web_sys::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

/// Leading-edge rate limiter: the wrapped closure fires immediately, then
/// further calls are swallowed until `limit_ms` has elapsed.
pub fn throttle<F>(mut f: F, limit_ms: u32) -> impl FnMut()
where
    F: FnMut() + 'static,
{
    let in_throttle = Rc::new(Cell::new(false));
    move || {
        if in_throttle.get() {
            return;
        }
        f();
        in_throttle.set(true);
        let flag = in_throttle.clone();
        Timeout::new(limit_ms, move || flag.set(false)).forget();
    }
}

/// Trailing-edge debounce: each call resets the pending timeout, so the
/// wrapped closure only runs once `wait_ms` passes without another call.
pub fn debounce<F>(f: F, wait_ms: u32) -> impl FnMut()
where
    F: FnMut() + 'static,
{
    let f = Rc::new(RefCell::new(f));
    let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
    move || {
        let f = f.clone();
        let timeout = Timeout::new(wait_ms, move || {
            (f.borrow_mut())();
        });
        // Replacing the slot drops the previous timeout, cancelling it.
        *pending.borrow_mut() = Some(timeout);
    }
}
