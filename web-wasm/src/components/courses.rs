//! Certification cards

use leptos::html::Section;
use leptos::prelude::*;
use portfolio_common::data::course_entries;

use crate::reveal::use_reveal;

#[component]
pub fn Courses() -> impl IntoView {
    let section_ref = NodeRef::<Section>::new();
    let revealed = use_reveal(section_ref, 0.1);

    view! {
        <section
            id="courses"
            class="section reveal"
            class:visible=move || revealed.get()
            node_ref=section_ref
        >
            <div class="section-heading">
                <h2>"🏅 Certifications"</h2>
                <div class="heading-rule"></div>
                <p>
                    "Here are a few key certifications I've completed, showcasing my skills in machine learning and Python automation."
                </p>
            </div>
            <div class="course-grid">
                {course_entries()
                    .into_iter()
                    .map(|course| {
                        view! {
                            <div class="course-card">
                                <div class="course-title">
                                    <span class="course-award">"🏆"</span>
                                    <h3>{course.title}</h3>
                                </div>
                                <div class="course-meta">
                                    <span class="provider">{course.provider}</span>
                                    <span class="separator">"•"</span>
                                    <span class="date">{course.date}</span>
                                </div>
                                <p>{course.description}</p>
                                <div class="badge-row">
                                    {course
                                        .skills
                                        .into_iter()
                                        .map(|skill| view! { <span class="badge">{skill}</span> })
                                        .collect_view()}
                                </div>
                                <a
                                    class="course-link"
                                    href=course.certificate_url
                                    target="_blank"
                                    rel="noopener noreferrer"
                                >
                                    "View Certificate ↗"
                                </a>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
