use crate::components::{AboutSection, ContactSection, HeroSection, NavBar, ProjectsSection, SiteFooter};
use crate::content::{highlights, profile, projects, skills, social_links};
use crate::navigation::{DocumentScroller, SectionNavigator};
use crate::theme::{DocumentRoot, ThemeController};
use leptos::*;

/// The whole page. Owns the theme and navigation controllers and hands them
/// down to the pieces that need them.
#[component]
pub fn App() -> impl IntoView {
    let theme = ThemeController::new(DocumentRoot);
    let navigator = SectionNavigator::new(DocumentScroller);
    let profile = profile();

    view! {
        <div class="page">
            <NavBar
                owner=profile.name
                resume_url=profile.resume_url
                theme=theme
                navigator=navigator
            />
            <main>
                <HeroSection profile=profile social_links=social_links() navigator=navigator/>
                <ProjectsSection projects=projects() all_projects_url=profile.all_projects_url/>
                <AboutSection about=profile.about skills=skills() highlights=highlights()/>
                <ContactSection/>
            </main>
            <SiteFooter owner=profile.name/>
        </div>
    }
}
