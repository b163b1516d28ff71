//! Static page content.
//!
//! Everything here is fixture data: it is built once per render and never
//! changes. Links the owner has not published yet are `None` rather than a
//! `"#"` placeholder so views can decide whether to show them.

#[derive(Clone, Copy)]
pub struct Profile {
    pub name: &'static str,
    pub availability: &'static str,
    pub headline_lead: &'static str,
    pub headline_highlight: &'static str,
    pub headline_tail: &'static str,
    pub summary: &'static str,
    pub hero_image_url: &'static str,
    pub experience_badge: &'static str,
    pub resume_url: Option<&'static str>,
    pub all_projects_url: Option<&'static str>,
    pub about: &'static str,
}

#[derive(Clone)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub demo_link: Option<&'static str>,
    pub repo_link: Option<&'static str>,
    pub image_url: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SocialKind {
    GitHub,
    LinkedIn,
    Email,
    Website,
}

pub struct SocialLink {
    pub kind: SocialKind,
    pub label: &'static str,
    pub href: &'static str,
}

/// Target for links that have nowhere to go yet.
pub const PLACEHOLDER_HREF: &str = "#";

/// `href` for an optional link, falling back to the in-page placeholder.
pub fn href_or_placeholder(link: Option<&'static str>) -> &'static str {
    link.unwrap_or(PLACEHOLDER_HREF)
}

pub fn profile() -> Profile {
    Profile {
        name: "Daniel Parron",
        availability: "Disponível para freelas",
        headline_lead: "Eu construo ",
        headline_highlight: "experiências web",
        headline_tail: " rápidas, acessíveis e bonitas.",
        summary: "Desenvolvedor Front-end focado em interfaces limpas, performance e DX. Baseado no Brasil.",
        hero_image_url: "https://images.unsplash.com/photo-1512295767273-ac109ac3acfa?q=80&w=1200&auto=format&fit=crop",
        experience_badge: "+5 anos de experiência",
        resume_url: None,
        all_projects_url: None,
        about: "Sou desenvolvedor front-end apaixonado por criar produtos funcionais e intuitivos. Valorizo acessibilidade, performance e uma boa experiência de desenvolvedor.",
    }
}

pub fn projects() -> Vec<Project> {
    vec![
        Project {
            title: "Projeto A",
            description: "Landing page responsiva com animações sutis e SEO básico.",
            tags: &["React", "Tailwind", "Framer Motion"],
            demo_link: None,
            repo_link: None,
            image_url: "https://images.unsplash.com/photo-1498050108023-c5249f4df085?q=80&w=1400&auto=format&fit=crop",
        },
        Project {
            title: "Projeto B",
            description: "Dashboard com filtros, gráficos e dark mode.",
            tags: &["Next.js", "Shadcn", "Recharts"],
            demo_link: None,
            repo_link: None,
            image_url: "https://images.unsplash.com/photo-1551281044-8d8d0d8d2f90?q=80&w=1400&auto=format&fit=crop",
        },
        Project {
            title: "Projeto C",
            description: "E-commerce minimalista com checkout simulado.",
            tags: &["Vite", "TypeScript", "Stripe (mock)"],
            demo_link: None,
            repo_link: None,
            image_url: "https://images.unsplash.com/photo-1522075469751-3a6694fb2f61?q=80&w=1400&auto=format&fit=crop",
        },
    ]
}

pub fn skills() -> Vec<&'static str> {
    vec![
        "JavaScript/TypeScript",
        "React/Next.js",
        "Tailwind CSS",
        "Node.js/Express",
        "PostgreSQL/Prisma",
        "UI/UX & Acessibilidade",
        "Git & CI/CD",
        "Testes (Vitest/Jest)",
    ]
}

pub fn highlights() -> Vec<&'static str> {
    vec![
        "Entrega de projetos com Lighthouse 95+.",
        "Design system próprio com shadcn/ui.",
        "Boas práticas: testes, code review, CI/CD.",
        "Foco em DX: documentação e tooling.",
    ]
}

pub fn social_links() -> Vec<SocialLink> {
    vec![
        SocialLink { kind: SocialKind::GitHub, label: "GitHub", href: PLACEHOLDER_HREF },
        SocialLink { kind: SocialKind::LinkedIn, label: "LinkedIn", href: PLACEHOLDER_HREF },
        SocialLink { kind: SocialKind::Email, label: "Email", href: "mailto:seuemail@exemplo.com" },
        SocialLink { kind: SocialKind::Website, label: "Site", href: PLACEHOLDER_HREF },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_projects_are_complete() {
        let projects = projects();
        assert_eq!(projects.len(), 3);
        for p in &projects {
            assert!(!p.title.is_empty());
            assert!(!p.description.is_empty());
            assert!(!p.tags.is_empty(), "{} has no tags", p.title);
            assert!(p.image_url.starts_with("https://"), "{} image", p.title);
        }
    }

    #[test]
    fn test_project_titles_unique() {
        let projects = projects();
        let titles: HashSet<_> = projects.iter().map(|p| p.title).collect();
        assert_eq!(titles.len(), projects.len());
    }

    #[test]
    fn test_project_tags_unique_within_project() {
        for p in projects() {
            let tags: HashSet<_> = p.tags.iter().collect();
            assert_eq!(tags.len(), p.tags.len(), "{} repeats a tag", p.title);
        }
    }

    #[test]
    fn test_no_placeholder_links_stored_as_some() {
        for p in projects() {
            assert_ne!(p.demo_link, Some(PLACEHOLDER_HREF));
            assert_ne!(p.repo_link, Some(PLACEHOLDER_HREF));
        }
        let profile = profile();
        assert_ne!(profile.resume_url, Some(PLACEHOLDER_HREF));
        assert_ne!(profile.all_projects_url, Some(PLACEHOLDER_HREF));
    }

    #[test]
    fn test_href_or_placeholder() {
        assert_eq!(href_or_placeholder(None), "#");
        assert_eq!(
            href_or_placeholder(Some("https://example.com")),
            "https://example.com"
        );
    }

    #[test]
    fn test_skills_and_highlights() {
        assert_eq!(skills().len(), 8);
        assert_eq!(highlights().len(), 4);
    }

    #[test]
    fn test_social_links_cover_each_kind_once() {
        let links = social_links();
        let kinds: HashSet<_> = links.iter().map(|l| l.kind).collect();
        assert_eq!(kinds.len(), 4);
        let email = links.iter().find(|l| l.kind == SocialKind::Email);
        assert!(email.is_some_and(|l| l.href.starts_with("mailto:")));
    }
}
