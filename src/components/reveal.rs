use leptos::*;
use wasm_bindgen::prelude::*;

/// Share of the element that must be on screen before it is revealed.
const REVEAL_THRESHOLD: f64 = 0.15;

#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub enum RevealVariant {
    /// Fade in while sliding up.
    #[default]
    Rise,
    /// Fade in while scaling up from slightly smaller.
    Zoom,
}

impl RevealVariant {
    fn class(self) -> &'static str {
        match self {
            RevealVariant::Rise => "reveal reveal-rise",
            RevealVariant::Zoom => "reveal reveal-zoom",
        }
    }
}

/// Call `on_visible` the first time `target` scrolls into view, then stop watching.
fn observe_once(target: &web_sys::Element, on_visible: impl Fn() + 'static) -> Result<(), JsValue> {
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
            let entered = entries.iter().any(|entry| {
                entry
                    .unchecked_into::<web_sys::IntersectionObserverEntry>()
                    .is_intersecting()
            });
            if entered {
                on_visible();
                observer.disconnect();
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>);

    let options = web_sys::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    let observer = web_sys::IntersectionObserver::new_with_options(
        callback.as_ref().unchecked_ref(),
        &options,
    )?;
    observer.observe(target);
    callback.forget(); // Lives as long as the page
    Ok(())
}

/// Entrance animation played once when the wrapped content enters the viewport.
///
/// Purely cosmetic: if the browser has no `IntersectionObserver` the content
/// is shown straight away.
#[component]
pub fn Reveal(
    children: Children,
    #[prop(optional)] variant: RevealVariant,
    #[prop(optional)] delay_ms: u32,
    #[prop(optional)] class: &'static str,
) -> impl IntoView {
    let (visible, set_visible) = create_signal(false);
    let node_ref = create_node_ref::<html::Div>();

    node_ref.on_load(move |el| {
        let target: &web_sys::Element = &el;
        if let Err(e) = observe_once(target, move || set_visible.set(true)) {
            log::warn!("Portfolio: reveal observer unavailable: {:?}", e);
            set_visible.set(true);
        }
    });

    view! {
        <div
            node_ref=node_ref
            class=format!("{} {}", variant.class(), class)
            class:is-visible=move || visible.get()
            style=format!("transition-delay: {}ms", delay_ms)
        >
            {children()}
        </div>
    }
}
