//! DOM effect plumbing: intersection observation, media queries, outside
//! clicks.
//!
//! Everything registered here is released when the owning component is
//! cleaned up; that is the one resource-lifetime rule of this codebase.

use leptos::{ev, html, on_cleanup, window, window_event_listener, NodeRef};
use wasm_bindgen::prelude::*;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// The user asked for reduced motion; skip animations and show final
/// states immediately.
pub fn prefers_reduced_motion() -> bool {
    window()
        .match_media("(prefers-reduced-motion: reduce)")
        .ok()
        .flatten()
        .is_some_and(|query| query.matches())
}

/// Whether the browser exposes `IntersectionObserver` at all.
pub fn observer_supported() -> bool {
    let global: JsValue = window().into();
    js_sys::Reflect::has(&global, &JsValue::from_str("IntersectionObserver")).unwrap_or(false)
}

/// Keeps the observer and its callback alive; disconnects on drop.
pub struct ObserverGuard {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl Drop for ObserverGuard {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Observe `targets` and run `on_visible` once per element the first time
/// it intersects past `threshold`; each element is unobserved right after
/// it fires. Returns `None` when the observer API is unavailable, in
/// which case the effect simply never fires.
pub fn observe_once(
    targets: &[web_sys::Element],
    threshold: f64,
    on_visible: impl Fn(&web_sys::Element) + 'static,
) -> Option<ObserverGuard> {
    if !observer_supported() {
        return None;
    }

    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    let target = entry.target();
                    on_visible(&target);
                    observer.unobserve(&target);
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options).ok()?;
    for target in targets {
        observer.observe(target);
    }

    Some(ObserverGuard {
        observer,
        _callback: callback,
    })
}

/// Run `on_outside` for document clicks that land outside `container`.
/// The listener is removed when the owning component is cleaned up.
pub fn close_on_outside_click(container: NodeRef<html::Div>, on_outside: impl Fn() + 'static) {
    let handle = window_event_listener(ev::click, move |event| {
        let Some(container) = container.get_untracked() else {
            return;
        };
        let target = event
            .target()
            .and_then(|t| t.dyn_into::<web_sys::Node>().ok());
        let inside = target
            .as_ref()
            .is_some_and(|node| container.contains(Some(node)));
        if !inside {
            on_outside();
        }
    });
    on_cleanup(move || handle.remove());
}
