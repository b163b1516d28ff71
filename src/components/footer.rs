use leptos::*;

#[component]
pub fn SiteFooter(owner: &'static str) -> impl IntoView {
    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <footer class="site-footer">
            <div class="site-footer-inner">
                <p>{format!("\u{00A9} {} {} \u{2014} Todos os direitos reservados.", year, owner)}</p>
                <div class="footer-links">
                    <a href="#" class="text-link">"Política de Privacidade"</a>
                    <a href="#" class="text-link">"Termos"</a>
                </div>
            </div>
        </footer>
    }
}
