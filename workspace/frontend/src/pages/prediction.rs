use yew::prelude::*;

use crate::components::prediction::form::PredictionForm;

#[function_component(PredictionPage)]
pub fn prediction_page() -> Html {
    html! {
        <div class="max-w-5xl mx-auto">
            <h1 class="text-3xl font-bold mb-6">{"Predict House Price"}</h1>
            <PredictionForm />
        </div>
    }
}
