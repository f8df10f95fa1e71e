//! Main application component

use leptos::prelude::*;

use crate::components::{
    about::About, courses::Courses, experience::Experience, footer::Footer, hero::Hero,
    navbar::Navbar, projects::Projects, scroll_to_top::ScrollToTop, skills::Skills,
};

/// One scrollable page: every section is composed here, top to bottom.
#[component]
pub fn App() -> impl IntoView {
    view! {
        <div class="page">
            <Navbar />
            <main>
                <Hero />
                <About />
                <Experience />
                <Projects />
                <Skills />
                <Courses />
            </main>
            <Footer />
            <ScrollToTop />
        </div>
    }
}
