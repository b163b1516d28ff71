use crate::components::Download;
use crate::components::ThemeToggle;
use crate::content::href_or_placeholder;
use crate::navigation::{SectionNavigator, SECTIONS};
use crate::theme::ThemeController;
use leptos::*;

#[component]
pub fn NavBar(
    owner: &'static str,
    resume_url: Option<&'static str>,
    theme: ThemeController,
    navigator: SectionNavigator,
) -> impl IntoView {
    view! {
        <header class="site-nav">
            <div class="site-nav-inner">
                <div class="nav-brand">
                    <span class="brand-dot"></span>
                    <span>{owner}</span>
                </div>
                <nav class="nav-links">
                    {SECTIONS
                        .into_iter()
                        .map(|section| {
                            view! {
                                <button
                                    type="button"
                                    class="nav-link"
                                    on:click=move |_| navigator.go_to(section.id)
                                >
                                    {section.label}
                                </button>
                            }
                        })
                        .collect_view()}
                </nav>
                <div class="nav-actions">
                    <ThemeToggle theme=theme/>
                    <a href=href_or_placeholder(resume_url) class="btn btn-primary nav-resume">
                        <Download class="icon icon-leading"/>
                        "Currículo"
                    </a>
                </div>
            </div>
        </header>
    }
}
