//! Experience timeline

use leptos::html::Section;
use leptos::prelude::*;
use portfolio_common::data::experience_entries;

use crate::reveal::use_reveal;

#[component]
pub fn Experience() -> impl IntoView {
    let section_ref = NodeRef::<Section>::new();
    let revealed = use_reveal(section_ref, 0.1);

    view! {
        <section
            id="experience"
            class="section reveal"
            class:visible=move || revealed.get()
            node_ref=section_ref
        >
            <div class="section-heading">
                <h2>"Experience"</h2>
                <div class="heading-rule"></div>
                <p>"My professional journey and the companies I've had the pleasure to work with."</p>
            </div>
            <div class="timeline">
                {experience_entries()
                    .into_iter()
                    .enumerate()
                    .map(|(index, entry)| {
                        // Cards alternate sides of the center line.
                        let side = if index % 2 == 0 {
                            "timeline-entry right"
                        } else {
                            "timeline-entry left"
                        };
                        view! {
                            <div class=side>
                                <div class="timeline-dot"></div>
                                <div class="timeline-card">
                                    <h3>{entry.role}</h3>
                                    <div class="timeline-meta">
                                        <span class="company">{entry.company}</span>
                                        <span class="separator">"•"</span>
                                        <span class="location">{entry.location}</span>
                                    </div>
                                    <p class="timeline-period">{entry.period}</p>
                                    <ul>
                                        {entry
                                            .description
                                            .into_iter()
                                            .map(|line| view! { <li>{line}</li> })
                                            .collect_view()}
                                    </ul>
                                    <div class="badge-row">
                                        {entry
                                            .skills
                                            .into_iter()
                                            .map(|skill| view! { <span class="badge">{skill}</span> })
                                            .collect_view()}
                                    </div>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
