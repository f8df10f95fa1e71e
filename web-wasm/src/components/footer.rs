//! Footer: contact form and contact details

use leptos::prelude::*;
use leptos::task::spawn_local;
use portfolio_common::data::profile;
use portfolio_common::ContactSubmission;

use crate::api::contact::send_message;

/// Contact form lifecycle. Failure keeps the entered fields so the user can
/// retry; success clears them.
#[derive(Clone, PartialEq)]
enum FormStatus {
    Idle,
    Sending,
    Sent,
    Failed(String),
}

#[component]
pub fn Footer() -> impl IntoView {
    let profile = profile();

    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (message, set_message) = signal(String::new());
    let (status, set_status) = signal(FormStatus::Idle);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let submission = ContactSubmission::new(name.get(), email.get(), message.get());
        if let Err(e) = submission.validate() {
            set_status.set(FormStatus::Failed(e.to_string()));
            return;
        }

        set_status.set(FormStatus::Sending);
        spawn_local(async move {
            match send_message(&submission).await {
                Ok(()) => {
                    set_status.set(FormStatus::Sent);
                    set_name.set(String::new());
                    set_email.set(String::new());
                    set_message.set(String::new());
                }
                Err(e) => {
                    web_sys::console::error_1(&e);
                    set_status.set(FormStatus::Failed(
                        "Failed to send message. Please try again later.".to_string(),
                    ));
                }
            }
        });
    };

    let status_note = move || {
        let (class, text) = match status.get() {
            FormStatus::Idle => return None,
            FormStatus::Sending => ("form-status", "Sending...".to_string()),
            FormStatus::Sent => ("form-status ok", "Message sent successfully!".to_string()),
            FormStatus::Failed(reason) => ("form-status error", reason),
        };
        Some(view! { <p class=class>{text}</p> })
    };

    view! {
        <footer id="contact" class="footer">
            <div class="footer-grid">
                <div class="footer-form">
                    <h2>"Get In Touch"</h2>
                    <p>
                        "I'm always open to new opportunities, collaborations, and interesting projects. Feel free to reach out if you have any questions or just want to say hi!"
                    </p>
                    <form on:submit=on_submit>
                        <div class="form-group">
                            <label for="name">"Name"</label>
                            <input
                                type="text"
                                id="name"
                                placeholder="Your Name"
                                prop:value=move || name.get()
                                on:input=move |ev| set_name.set(event_target_value(&ev))
                            />
                        </div>
                        <div class="form-group">
                            <label for="email">"Email"</label>
                            <input
                                type="email"
                                id="email"
                                placeholder="your.email@example.com"
                                prop:value=move || email.get()
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                            />
                        </div>
                        <div class="form-group">
                            <label for="message">"Message"</label>
                            <textarea
                                id="message"
                                rows="4"
                                placeholder="Your message..."
                                prop:value=move || message.get()
                                on:input=move |ev| set_message.set(event_target_value(&ev))
                            ></textarea>
                        </div>
                        <button
                            type="submit"
                            class="btn btn-primary"
                            disabled=move || status.get() == FormStatus::Sending
                        >
                            "Send Message ✉"
                        </button>
                        {status_note}
                    </form>
                </div>

                <div class="footer-info">
                    <h2>"Contact Info"</h2>
                    <div>
                        <h3>"Email"</h3>
                        <a href=format!("mailto:{}", profile.email)>{profile.email.clone()}</a>
                    </div>
                    <div>
                        <h3>"Phone"</h3>
                        <a href=format!("tel:{}", profile.phone.replace(' ', ""))>
                            {profile.phone.clone()}
                        </a>
                    </div>
                    <div>
                        <h3>"Follow Me"</h3>
                        <div class="footer-social">
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
                        </div>
                    </div>
                    <div>
                        <h3>"Location"</h3>
                        <p>{profile.location.clone()}</p>
                    </div>
                    <a
                        class="btn btn-light"
                        href=profile.resume_url.clone()
                        download="Yash_Pandey_Resume.pdf"
                    >
                        "Download Resume"
                    </a>
                </div>
            </div>

            <div class="footer-bottom">
                <p>
                    {format!(
                        "© {} {}. All rights reserved.",
                        js_sys::Date::new_0().get_full_year(),
                        profile.name
                    )}
                </p>
            </div>
        </footer>
    }
}
