use yew::prelude::*;
use web_sys::MouseEvent;

use crate::catalog::{Icon, PricingPlan};
use crate::components::icon::IconGlyph;
use crate::components::layout::GlassCard;
use crate::inquiry::composer::compose_from_plan;
use crate::inquiry::dispatcher::Dispatcher;

#[derive(Properties, PartialEq)]
pub struct PricingCardProps {
    pub plan: PricingPlan,
    #[prop_or_default]
    pub delay_ms: u32,
}

#[function_component(PricingCard)]
pub fn pricing_card(props: &PricingCardProps) -> Html {
    let plan = props.plan;

    let onclick = Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        Dispatcher::browser().dispatch(&compose_from_plan(plan.name));
    });

    html! {
        <GlassCard
            class={classes!("pricing-card", plan.highlighted.then(|| "highlighted"))}
            delay_ms={props.delay_ms}
        >
            {
                if plan.highlighted {
                    html! { <div class="popular-tag">{"Most Popular"}</div> }
                } else {
                    html! {}
                }
            }
            <div class="card-header">
                <h3>{ plan.name }</h3>
                <p class="tier">{ plan.tier }</p>
            </div>
            <div class="price">
                <div class="reference-price">{ plan.reference_price }</div>
                <div class="amount">{ plan.price }<span class="period">{"/-"}</span></div>
            </div>
            <ul class="features">
                { for plan.features.iter().map(|feature| html! {
                    <li key={*feature}>
                        <IconGlyph icon={Icon::Check} class={classes!("check")} />
                        { *feature }
                    </li>
                }) }
            </ul>
            <button
                class={classes!("plan-cta", if plan.highlighted { "primary" } else { "secondary" })}
                {onclick}
            >
                { plan.cta }
            </button>
        </GlassCard>
    }
}
