use yew::prelude::*;
use web_sys::MouseEvent;

use crate::catalog::FaqEntry;

#[derive(Properties, PartialEq)]
pub struct FaqItemProps {
    pub entry: FaqEntry,
}

#[function_component(FaqItem)]
pub fn faq_item(props: &FaqItemProps) -> Html {
    let is_open = use_state(|| false);

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            is_open.set(!*is_open);
        })
    };

    html! {
        <div class={classes!("faq-item", if *is_open { "open" } else { "" })}>
            <button class="faq-question glass-card" onclick={toggle}>
                <span class="question-text">{ props.entry.question }</span>
                <span class="toggle-icon">{ "⌄" }</span>
            </button>
            {
                if *is_open {
                    html! {
                        <div class="faq-answer glass-card">
                            { props.entry.answer }
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}
