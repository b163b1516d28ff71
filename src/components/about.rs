use crate::components::{Badge, BadgeVariant};
use crate::components::Reveal;
use crate::navigation::Section;
use leptos::*;

#[component]
pub fn AboutSection(
    about: &'static str,
    skills: Vec<&'static str>,
    highlights: Vec<&'static str>,
) -> impl IntoView {
    view! {
        <section id=Section::ABOUT.id class="section">
            <div class="about-grid">
                <Reveal class="about-copy">
                    <h2>"Sobre mim"</h2>
                    <p class="muted">{about}</p>
                    <div class="tag-list">
                        {skills
                            .into_iter()
                            .map(|skill| view! { <Badge variant=BadgeVariant::Outline>{skill}</Badge> })
                            .collect_view()}
                    </div>
                </Reveal>
                <Reveal delay_ms=100 class="card highlights">
                    <h3>"Destaques"</h3>
                    <ul class="muted small">
                        {highlights.into_iter().map(|h| view! { <li>{h}</li> }).collect_view()}
                    </ul>
                </Reveal>
            </div>
        </section>
    }
}
