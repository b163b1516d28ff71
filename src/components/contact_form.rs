use crate::components::Reveal;
use crate::contact::{ContactDraft, ContactFormState, ACKNOWLEDGMENT};
use crate::navigation::Section;
use leptos::*;

fn input_value(node: NodeRef<html::Input>) -> String {
    node.get_untracked().map(|el| el.value()).unwrap_or_default()
}

/// Contact form stub: collects the fields and thanks the visitor. Nothing is sent.
///
/// Values are read from the elements at submit time, so autofilled fields
/// count even when the browser fired no `input` event.
#[component]
pub fn ContactForm() -> impl IntoView {
    let name = create_node_ref::<html::Input>();
    let email = create_node_ref::<html::Input>();
    let subject = create_node_ref::<html::Input>();
    let message = create_node_ref::<html::Textarea>();
    let state = ContactFormState::new();

    let on_submit = move |ev: ev::SubmitEvent| {
        // Stay on the page; native `required`/`type="email"` checks have already run
        ev.prevent_default();

        let draft = ContactDraft {
            name: input_value(name),
            email: input_value(email),
            subject: input_value(subject),
            message: message
                .get_untracked()
                .map(|el| el.value())
                .unwrap_or_default(),
        };
        state.submit(&draft);
    };

    view! {
        <form class="contact-form" on:submit=on_submit>
            <div class="form-row">
                <input node_ref=name class="input" required=true placeholder="Seu nome"/>
                <input node_ref=email class="input" required=true type="email" placeholder="Seu email"/>
            </div>
            <input node_ref=subject class="input" placeholder="Assunto"/>
            <textarea
                node_ref=message
                class="input"
                required=true
                rows="5"
                placeholder="Sua mensagem"
            ></textarea>
            <button type="submit" class="btn btn-primary fit">"Enviar"</button>
            <Show when=move || state.acknowledged()>
                <p class="notice" role="status">{ACKNOWLEDGMENT}</p>
            </Show>
        </form>
    }
}

#[component]
pub fn ContactSection() -> impl IntoView {
    view! {
        <section id=Section::CONTACT.id class="section contact">
            <Reveal class="contact-inner">
                <h2>"Contato"</h2>
                <p class="muted lead">"Vamos construir algo juntos? Envie uma mensagem:"</p>
                <ContactForm/>
            </Reveal>
        </section>
    }
}
