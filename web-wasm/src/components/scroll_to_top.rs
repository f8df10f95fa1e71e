//! Back-to-top button

use gloo::events::EventListener;
use leptos::prelude::*;
use web_sys::{ScrollBehavior, ScrollToOptions};

const SHOW_AFTER_PX: f64 = 400.0;

#[component]
pub fn ScrollToTop() -> impl IntoView {
    let (visible, set_visible) = signal(false);

    Effect::new(move |_| {
        let Some(window) = web_sys::window() else {
            return;
        };
        let target = window.clone();
        let listener = EventListener::new(&window, "scroll", move |_| {
            set_visible.set(target.scroll_y().unwrap_or(0.0) > SHOW_AFTER_PX);
        });
        listener.forget();
    });

    let on_click = move |_| {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_scroll_to_options(&options);
        }
    };

    view! {
        <button
            class="scroll-top"
            class:visible=move || visible.get()
            on:click=on_click
            title="Back to top"
        >
            "↑"
        </button>
    }
}
