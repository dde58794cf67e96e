//! Viewport size tracking.

use leptos::ev;
use leptos::prelude::*;

/// Inner window size in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Current `innerWidth` / `innerHeight`, zero when there is no window
    pub fn current() -> Self {
        let Some(win) = web_sys::window() else {
            return Self::default();
        };
        let dimension = |value: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
            value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
        };
        Self::new(dimension(win.inner_width()), dimension(win.inner_height()))
    }
}

/// Reactive viewport size, updated on window resize
pub fn use_viewport() -> ReadSignal<Viewport> {
    let (viewport, set_viewport) = signal(Viewport::current());
    let handle = window_event_listener(ev::resize, move |_| {
        set_viewport.set(Viewport::current());
    });
    on_cleanup(move || handle.remove());
    viewport
}
