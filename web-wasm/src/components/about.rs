//! About section

use leptos::html::Section;
use leptos::prelude::*;
use portfolio_common::data::{about_highlights, profile};

use crate::reveal::use_reveal;

#[component]
pub fn About() -> impl IntoView {
    let section_ref = NodeRef::<Section>::new();
    let revealed = use_reveal(section_ref, 0.2);
    let profile = profile();

    view! {
        <section
            id="about"
            class="section reveal"
            class:visible=move || revealed.get()
            node_ref=section_ref
        >
            <div class="section-heading">
                <h2>"About Me"</h2>
                <div class="heading-rule"></div>
                <p>
                    "Get to know more about my background, skills, and what drives me as a professional."
                </p>
            </div>
            <div class="about-grid">
                <div class="about-journey">
                    <h3>"My Journey"</h3>
                    {profile
                        .journey
                        .iter()
                        .map(|paragraph| view! { <p>{paragraph.clone()}</p> })
                        .collect_view()}
                    <a class="btn btn-primary" href="#contact">"Let's Connect"</a>
                </div>
                <div class="about-highlights">
                    {about_highlights()
                        .into_iter()
                        .map(|highlight| {
                            view! {
                                <div class="highlight-card">
                                    <div class="highlight-icon">{highlight.icon}</div>
                                    <h4>{highlight.title}</h4>
                                    <p>{highlight.blurb}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
