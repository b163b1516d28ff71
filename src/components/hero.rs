use crate::components::Badge;
use crate::components::SocialIcon;
use crate::components::{Reveal, RevealVariant};
use crate::content::{Profile, SocialLink};
use crate::navigation::{Section, SectionNavigator};
use leptos::*;

#[component]
pub fn HeroSection(
    profile: Profile,
    social_links: Vec<SocialLink>,
    navigator: SectionNavigator,
) -> impl IntoView {
    view! {
        <section id=Section::HERO.id class="section hero">
            <div class="hero-grid">
                <Reveal class="hero-copy">
                    <Badge>{profile.availability}</Badge>
                    <h1 class="hero-title">
                        {profile.headline_lead}
                        <span class="text-primary">{profile.headline_highlight}</span>
                        {profile.headline_tail}
                    </h1>
                    <p class="hero-summary muted">{profile.summary}</p>
                    <div class="hero-actions">
                        <button
                            type="button"
                            class="btn btn-primary"
                            on:click=move |_| navigator.go_to(Section::PROJECTS.id)
                        >
                            "Ver projetos"
                        </button>
                        <button
                            type="button"
                            class="btn btn-outline"
                            on:click=move |_| navigator.go_to(Section::CONTACT.id)
                        >
                            "Fale comigo"
                        </button>
                    </div>
                    <div class="social-links">
                        {social_links
                            .into_iter()
                            .map(|link| {
                                view! {
                                    <a href=link.href aria-label=link.label class="social-link">
                                        <SocialIcon kind=link.kind class="icon-lg"/>
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </Reveal>
                <Reveal variant=RevealVariant::Zoom delay_ms=100 class="hero-media">
                    <img src=profile.hero_image_url alt="Mockup" class="hero-image"/>
                    <div class="experience-badge">{profile.experience_badge}</div>
                </Reveal>
            </div>
        </section>
    }
}
