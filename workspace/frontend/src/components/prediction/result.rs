use homeprice_common::submit::SubmitOutcome;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};
use yew::prelude::*;

use crate::common::error::InlineAlert;

#[derive(Properties, PartialEq)]
pub struct ResultCardProps {
    pub outcome: SubmitOutcome,
}

/// Estimate (or failure) of the last prediction, scrolled into view when it
/// changes.
#[function_component(ResultCard)]
pub fn result_card(props: &ResultCardProps) -> Html {
    let card_ref = use_node_ref();

    {
        let card_ref = card_ref.clone();
        use_effect_with(props.outcome.clone(), move |_| {
            if let Some(element) = card_ref.cast::<web_sys::Element>() {
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                options.set_block(ScrollLogicalPosition::Nearest);
                element.scroll_into_view_with_scroll_into_view_options(&options);
            }
            || ()
        });
    }

    let body = match &props.outcome {
        SubmitOutcome::Estimate(estimate) => {
            log::info!("Showing estimate: {}", estimate);
            html! {
                <div class="card-body items-center text-center">
                    <h2 class="card-title">{"Estimated Price"}</h2>
                    <p class="text-4xl font-bold text-primary">
                        {format!("₹{}", estimate.formatted_amount())}
                        <span class="text-xl font-normal ml-2">{estimate.denomination.label()}</span>
                    </p>
                </div>
            }
        }
        SubmitOutcome::Failed(message) => html! {
            <div class="card-body">
                <InlineAlert message={message.clone()} title={Some("Error".to_string())} />
            </div>
        },
    };

    html! {
        <div ref={card_ref} class="card bg-base-100 shadow-xl mt-6">
            {body}
        </div>
    }
}
