use yew::prelude::*;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

use crate::catalog::ServiceOption;
use crate::components::layout::GlassCard;
use crate::inquiry::composer::compose_from_draft;
use crate::inquiry::dispatcher::Dispatcher;
use crate::inquiry::draft::{DraftField, InquiryDraft};

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let draft = use_state(InquiryDraft::default);

    let on_input = |field: DraftField| {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            next.set(field, input.value());
            draft.set(next);
        })
    };

    let on_message = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            next.set(DraftField::Message, area.value());
            draft.set(next);
        })
    };

    let on_service = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Some(service) = ServiceOption::from_label(&select.value()) {
                let mut next = (*draft).clone();
                next.select_service(service);
                draft.set(next);
            }
        })
    };

    // Required fields are enforced by the browser before this fires.
    let onsubmit = {
        let draft = draft.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            Dispatcher::browser().dispatch(&compose_from_draft(&draft));
        })
    };

    html! {
        <GlassCard class={classes!("contact-card")}>
            <form class="contact-form" {onsubmit}>
                <div class="form-row">
                    <div class="form-field">
                        <label for="contact-name">{"Full Name"}</label>
                        <input
                            id="contact-name"
                            type="text"
                            name="name"
                            required=true
                            placeholder="John Doe"
                            value={draft.name.clone()}
                            onchange={on_input(DraftField::Name)}
                        />
                    </div>
                    <div class="form-field">
                        <label for="contact-email">{"Email Address"}</label>
                        <input
                            id="contact-email"
                            type="email"
                            name="email"
                            required=true
                            placeholder="john@example.com"
                            value={draft.email.clone()}
                            onchange={on_input(DraftField::Email)}
                        />
                    </div>
                </div>
                <div class="form-field">
                    <label for="contact-phone">{"Phone Number"}</label>
                    <input
                        id="contact-phone"
                        type="tel"
                        name="phone"
                        required=true
                        placeholder="+91 8087473770"
                        value={draft.phone.clone()}
                        onchange={on_input(DraftField::Phone)}
                    />
                </div>
                <div class="form-field">
                    <label for="contact-service">{"Service Interested In"}</label>
                    <select id="contact-service" name="service" onchange={on_service}>
                        { for ServiceOption::ALL.iter().map(|option| html! {
                            <option
                                key={option.label()}
                                value={option.label()}
                                selected={*option == draft.service}
                            >
                                { option.label() }
                            </option>
                        }) }
                    </select>
                </div>
                <div class="form-field">
                    <label for="contact-message">{"Message"}</label>
                    <textarea
                        id="contact-message"
                        name="message"
                        rows="4"
                        placeholder="Tell us about your project..."
                        value={draft.message.clone()}
                        onchange={on_message}
                    />
                </div>
                <button type="submit" class="submit-button">
                    {"Send Message (via WhatsApp)"}
                </button>
            </form>
        </GlassCard>
    }
}
