use leptos::*;

#[derive(Clone, Copy, Default)]
pub enum BadgeVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
}

impl BadgeVariant {
    fn class(self) -> &'static str {
        match self {
            BadgeVariant::Primary => "badge badge-primary",
            BadgeVariant::Secondary => "badge badge-secondary",
            BadgeVariant::Outline => "badge badge-outline",
        }
    }
}

#[component]
pub fn Badge(children: Children, #[prop(optional)] variant: BadgeVariant) -> impl IntoView {
    view! { <span class=variant.class()>{children()}</span> }
}
