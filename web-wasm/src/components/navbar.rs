//! Top navigation bar

use leptos::prelude::*;

const NAV_LINKS: &[(&str, &str)] = &[
    ("#home", "Home"),
    ("#about", "About"),
    ("#experience", "Experience"),
    ("#projects", "Projects"),
    ("#skills", "Skills"),
    ("#courses", "Certifications"),
    ("#contact", "Contact"),
];

#[component]
pub fn Navbar() -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);

    view! {
        <nav class="navbar">
            <a class="navbar-brand" href="#home">"Yash Pandey"</a>
            <button
                class="navbar-toggle"
                on:click=move |_| set_menu_open.update(|open| *open = !*open)
            >
                {move || if menu_open.get() { "✕" } else { "☰" }}
            </button>
            <ul class="navbar-links" class:open=move || menu_open.get()>
                {NAV_LINKS
                    .iter()
                    .map(|(href, label)| {
                        view! {
                            <li>
                                <a href=*href on:click=move |_| set_menu_open.set(false)>
                                    {*label}
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </nav>
    }
}
