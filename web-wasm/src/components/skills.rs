//! Skills grid

use leptos::prelude::*;
use portfolio_common::data::skill_entries;
use portfolio_common::SkillGroup;

#[component]
pub fn Skills() -> impl IntoView {
    let skills = skill_entries();
    let groups = [SkillGroup::Technical, SkillGroup::Domain, SkillGroup::Tools];

    view! {
        <section id="skills" class="section">
            <div class="section-heading">
                <h2>"Skills and Expertise"</h2>
                <div class="heading-rule"></div>
            </div>
            <div class="skills-grid">
                {groups
                    .into_iter()
                    .map(|group| {
                        let members: Vec<_> =
                            skills.iter().filter(|s| s.group == group).cloned().collect();
                        view! {
                            <div class="skills-panel">
                                <h3>{group.label()}</h3>
                                <div class="badge-row">
                                    {members
                                        .into_iter()
                                        .map(|skill| {
                                            view! {
                                                <span class="badge skill-badge">
                                                    <span class="skill-icon">{skill.icon}</span>
                                                    {skill.name}
                                                </span>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
