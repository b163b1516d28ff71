use crate::components::{Badge, BadgeVariant};
use crate::components::ExternalLink;
use crate::components::Reveal;
use crate::content::{href_or_placeholder, Project};
use crate::navigation::Section;
use leptos::*;

/// Delay added per card so the grid fills in left to right.
const CARD_STAGGER_MS: u32 = 50;

fn open_in_new_tab(url: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if window.open_with_url_and_target(url, "_blank").is_err() {
        log::warn!("Portfolio: could not open {} in a new tab", url);
    }
}

#[component]
pub fn ProjectCard(project: Project) -> impl IntoView {
    view! {
        <article class="card project-card">
            <img src=project.image_url alt=project.title class="project-image"/>
            <header class="card-header">
                <h3 class="card-title">
                    {project.title}
                    <span class="card-links">
                        {project.repo_link.map(|href| view! { <a href=href class="text-link">"Código"</a> })}
                        {project.demo_link.map(|href| view! { <a href=href class="text-link">"Demo"</a> })}
                    </span>
                </h3>
            </header>
            <div class="card-content">
                <p class="muted small">{project.description}</p>
                <div class="tag-list">
                    {project
                        .tags
                        .iter()
                        .copied()
                        .map(|tag| view! { <Badge variant=BadgeVariant::Secondary>{tag}</Badge> })
                        .collect_view()}
                </div>
            </div>
            <footer class="card-footer">
                <a href=href_or_placeholder(project.demo_link) class="btn btn-secondary btn-sm">"Visitar"</a>
                <a href=href_or_placeholder(project.repo_link) class="btn btn-outline btn-sm">"Repositório"</a>
            </footer>
        </article>
    }
}

#[component]
pub fn ProjectsSection(
    projects: Vec<Project>,
    all_projects_url: Option<&'static str>,
) -> impl IntoView {
    view! {
        <section id=Section::PROJECTS.id class="section">
            <div class="section-heading">
                <div>
                    <h2>"Projetos em destaque"</h2>
                    <p class="muted">"Seleção de trabalhos recentes."</p>
                </div>
                <button
                    type="button"
                    class="btn btn-outline wide-only"
                    on:click=move |_| open_in_new_tab(href_or_placeholder(all_projects_url))
                >
                    "Todos os projetos"
                    <ExternalLink class="icon icon-trailing"/>
                </button>
            </div>
            <div class="project-grid">
                {projects
                    .into_iter()
                    .enumerate()
                    .map(|(i, project)| {
                        view! {
                            <Reveal delay_ms={i as u32 * CARD_STAGGER_MS}>
                                <ProjectCard project=project/>
                            </Reveal>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
