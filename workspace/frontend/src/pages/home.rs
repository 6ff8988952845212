use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::use_session;
use crate::router::Route;

#[function_component(Home)]
pub fn home() -> Html {
    let session = use_session();
    // Signed-in users go straight to the form
    let target = if session.state.is_logged_in() {
        Route::Prediction
    } else {
        Route::Login
    };

    html! {
        <div class="hero min-h-[70vh]">
            <div class="hero-content text-center">
                <div class="max-w-xl">
                    <h1 class="text-5xl font-bold">{"Know your home's worth"}</h1>
                    <p class="py-6">
                        {"Estimate the market price of a house anywhere in India. "}
                        {"Pick the location, describe the property and get an instant estimate in lakhs or crores."}
                    </p>
                    <div class="flex gap-4 justify-center">
                        <Link<Route> to={target} classes={classes!("btn", "btn-primary")}>{"Get Started"}</Link<Route>>
                        <Link<Route> to={Route::About} classes={classes!("btn", "btn-outline")}>{"Learn More"}</Link<Route>>
                    </div>
                </div>
            </div>
        </div>
    }
}
