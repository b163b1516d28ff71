pub mod components;
pub mod contact;
pub mod content;
pub mod navigation;
pub mod theme;

use components::App;
use leptos::*;
use wasm_bindgen::prelude::*;

/// Root component. Anything that fails while building the page lands in the
/// error boundary instead of leaving a blank screen.
#[component]
fn Root() -> impl IntoView {
    view! {
        <ErrorBoundary fallback=|errors| view! {
            <main class="error-container">
                <h2>"Algo deu errado"</h2>
                <p>"A página não pôde ser carregada. Tente recarregar."</p>
                <ul>
                    {move || errors.get()
                        .into_iter()
                        .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                        .collect_view()
                    }
                </ul>
                <button on:click=move |_| {
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().reload();
                    }
                }>"Recarregar"</button>
            </main>
        }>
            <App/>
        </ErrorBoundary>
    }
}

/// Mount the application to the DOM
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    // Already initialised is fine
    let _ = console_log::init_with_level(level);
    mount_to_body(Root);
}
