//! Project gallery
//!
//! Category filter buttons, the card grid and the detail modal, all driven by
//! the pure `FilterState`/`SelectionState` values from `portfolio-common`.

use leptos::html::Section;
use leptos::prelude::*;
use portfolio_common::data::seed_catalog;
use portfolio_common::{FilterState, ProjectRecord, SelectionState};

use crate::reveal::use_reveal;

#[component]
pub fn Projects() -> impl IntoView {
    let section_ref = NodeRef::<Section>::new();
    let revealed = use_reveal(section_ref, 0.1);

    let catalog = StoredValue::new(seed_catalog());
    let (filter, set_filter) = signal(FilterState::default());
    let (selection, set_selection) = signal(SelectionState::default());

    let category_labels = catalog.with_value(|c| c.categories());

    let visible = move || {
        let filter = filter.get();
        catalog.with_value(|c| {
            filter
                .visible_projects(c)
                .into_iter()
                .cloned()
                .collect::<Vec<_>>()
        })
    };

    // Card clicks only ever pass ids of visible records, so a rejection here
    // is a bug worth hearing about.
    let select_project = move |id: u32| {
        set_selection.update(|s| {
            if let Err(e) = catalog.with_value(|c| s.select(c, id)) {
                web_sys::console::warn_1(&format!("selection rejected: {}", e).into());
            }
        });
    };

    let dismiss = move |_: ()| set_selection.update(|s| s.dismiss());

    view! {
        <section
            id="projects"
            class="section reveal"
            class:visible=move || revealed.get()
            node_ref=section_ref
        >
            <div class="section-heading">
                <h2>"Projects"</h2>
                <div class="heading-rule"></div>
                <p>"A showcase of my work in AI, Machine Learning, and Data Science."</p>
            </div>

            <div class="filter-bar">
                {category_labels
                    .into_iter()
                    .map(|label| {
                        let is_active = {
                            let label = label.clone();
                            move || filter.get().active_category() == label.as_str()
                        };
                        let on_select = {
                            let label = label.clone();
                            move |_| set_filter.update(|f| f.set_active_category(label.clone()))
                        };
                        view! {
                            <button class="filter-pill" class:active=is_active on:click=on_select>
                                {label.clone()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="project-grid">
                <For
                    each=visible
                    key=|project| project.id
                    children=move |project| {
                        view! { <ProjectCard project=project on_select=select_project /> }
                    }
                />
            </div>

            <Show when=move || visible().is_empty()>
                <p class="text-muted">"No projects in this category yet."</p>
            </Show>

            {move || {
                let selection = selection.get();
                catalog
                    .with_value(|c| selection.selected_project(c).cloned())
                    .map(|project| view! { <ProjectModal project=project on_dismiss=dismiss /> })
            }}
        </section>
    }
}

#[component]
fn ProjectCard<F>(project: ProjectRecord, on_select: F) -> impl IntoView
where
    F: Fn(u32) + 'static + Clone + Send,
{
    let id = project.id;

    view! {
        <div
            class="project-card"
            on:click={
                let on_select = on_select.clone();
                move |_| on_select(id)
            }
        >
            <div class="project-image">
                <img src=project.image.clone() alt=project.title.clone() />
                <div class="project-icon">{project.icon.clone()}</div>
            </div>
            <div class="project-body">
                <h3>{project.title.clone()}</h3>
                <p>{project.description.clone()}</p>
                <div class="badge-row">
                    {project
                        .tags
                        .iter()
                        .map(|tag| view! { <span class="badge">{tag.clone()}</span> })
                        .collect_view()}
                </div>
                <div class="project-links">
                    <a
                        href=project.live_url.clone()
                        target="_blank"
                        rel="noopener noreferrer"
                        on:click=|ev| ev.stop_propagation()
                    >
                        "Demo ↗"
                    </a>
                    <a
                        href=project.code_url.clone()
                        target="_blank"
                        rel="noopener noreferrer"
                        on:click=|ev| ev.stop_propagation()
                    >
                        "Code ↗"
                    </a>
                </div>
            </div>
        </div>
    }
}

#[component]
fn ProjectModal<F>(project: ProjectRecord, on_dismiss: F) -> impl IntoView
where
    F: Fn(()) + 'static + Clone + Send,
{
    view! {
        <div
            class="modal-backdrop"
            on:click={
                let on_dismiss = on_dismiss.clone();
                move |_| on_dismiss(())
            }
        >
            <div class="modal" on:click=|ev| ev.stop_propagation()>
                <button
                    class="modal-close"
                    on:click={
                        let on_dismiss = on_dismiss.clone();
                        move |_| on_dismiss(())
                    }
                >
                    "✕"
                </button>
                <div class="modal-title">
                    <span class="project-icon">{project.icon.clone()}</span>
                    <h3>{project.title.clone()}</h3>
                </div>
                <img src=project.image.clone() alt=project.title.clone() />
                <p>{project.description.clone()}</p>
                <h4>"Key Features:"</h4>
                <ul>
                    {project
                        .details
                        .iter()
                        .map(|detail| view! { <li>{detail.clone()}</li> })
                        .collect_view()}
                </ul>
                <div class="badge-row">
                    {project
                        .tags
                        .iter()
                        .map(|tag| view! { <span class="badge">{tag.clone()}</span> })
                        .collect_view()}
                </div>
                <div class="modal-links">
                    <a
                        class="btn btn-primary"
                        href=project.live_url.clone()
                        target="_blank"
                        rel="noopener noreferrer"
                    >
                        "View Demo ↗"
                    </a>
                    <a
                        class="btn btn-dark"
                        href=project.code_url.clone()
                        target="_blank"
                        rel="noopener noreferrer"
                    >
                        "View Code ↗"
                    </a>
                </div>
            </div>
        </div>
    }
}
