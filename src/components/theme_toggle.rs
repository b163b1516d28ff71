use crate::components::{Moon, Sun};
use crate::theme::ThemeController;
use leptos::*;

/// Icon button that flips the page theme. Shows the theme it will switch to.
#[component]
pub fn ThemeToggle(theme: ThemeController) -> impl IntoView {
    view! {
        <button
            type="button"
            class="btn btn-outline btn-icon"
            aria-label="Alternar tema"
            on:click=move |_| theme.toggle()
        >
            {move || {
                if theme.theme().is_dark() {
                    view! { <Sun class="icon"/> }.into_view()
                } else {
                    view! { <Moon class="icon"/> }.into_view()
                }
            }}
        </button>
    }
}
