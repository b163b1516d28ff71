mod about;
mod app;
mod badge;
mod contact_form;
mod footer;
mod hero;
mod icons;
mod nav_bar;
mod projects;
mod reveal;
mod theme_toggle;

pub use about::AboutSection;
pub use app::App;
pub use badge::{Badge, BadgeVariant};
pub use contact_form::{ContactForm, ContactSection};
pub use footer::SiteFooter;
pub use hero::HeroSection;
pub use icons::{Download, ExternalLink, Github, Globe, Linkedin, Mail, Moon, SocialIcon, Sun};
pub use nav_bar::NavBar;
pub use projects::{ProjectCard, ProjectsSection};
pub use reveal::{Reveal, RevealVariant};
pub use theme_toggle::ThemeToggle;
