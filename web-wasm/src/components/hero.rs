//! Hero banner

use leptos::prelude::*;
use portfolio_common::data::profile;

#[component]
pub fn Hero() -> impl IntoView {
    let profile = profile();

    view! {
        <section id="home" class="hero">
            <div class="hero-inner">
                <div class="hero-text">
                    <h2 class="hero-greeting">"Hello, I'm"</h2>
                    <h1 class="hero-name">{profile.name.clone()}</h1>
                    <p class="hero-role">{profile.role.clone()}</p>
                    <p class="hero-tagline">{profile.tagline.clone()}</p>
                    <div class="hero-actions">
                        <a class="btn btn-primary" href="#contact">"Get in Touch"</a>
                        <a class="btn btn-secondary" href="#projects">"View My Work"</a>
                    </div>
                    <div class="hero-social">
                        <a
                            href=profile.github_url.clone()
                            target="_blank"
                            rel="noopener noreferrer"
                            title="GitHub"
                        >
                            "🐙"
                        </a>
                        <a
                            href=profile.linkedin_url.clone()
                            target="_blank"
                            rel="noopener noreferrer"
                            title="LinkedIn"
                        >
                            "💼"
                        </a>
                        <a
                            href=profile.resume_url.clone()
                            download="Yash_Pandey_Resume.pdf"
                            title="Resume"
                        >
                            "📄"
                        </a>
                    </div>
                </div>
                <div class="hero-portrait">
                    <img src=profile.portrait_url.clone() alt="Profile" />
                </div>
            </div>
            <div class="hero-scroll-cue">
                <span>"Scroll Down"</span>
                <span class="chevron">"⌄"</span>
            </div>
        </section>
    }
}
