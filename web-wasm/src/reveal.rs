//! One-shot section reveal latches
//!
//! Each animated section owns an independent latch that flips from "not yet
//! visible" to "visible" the first time it intersects the viewport, and never
//! reverts.

use leptos::html::Section;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Observes `target` and returns a signal that becomes `true` on first
/// intersection. The observer disconnects itself after firing.
pub fn use_reveal(target: NodeRef<Section>, threshold: f64) -> ReadSignal<bool> {
    let (revealed, set_revealed) = signal(false);
    let observed = StoredValue::new(false);

    Effect::new(move |_| {
        let Some(element) = target.get() else {
            return;
        };
        if observed.get_value() {
            return;
        }
        observed.set_value(true);

        let callback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    if entry.is_intersecting() {
                        set_revealed.set(true);
                        observer.disconnect();
                    }
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));

        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
            Ok(observer) => {
                observer.observe(&element);
                callback.forget();
            }
            Err(_) => {
                // No observer support in this browser: reveal immediately.
                set_revealed.set(true);
            }
        }
    });

    revealed
}
