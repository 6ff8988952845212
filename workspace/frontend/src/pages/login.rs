use homeprice_common::session::{sign_in, Credentials};
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::common::error::InlineAlert;
use crate::common::toast::use_toast;
use crate::hooks::{use_services, use_session};
use crate::router::Route;

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let services = use_services();
    let session = use_session();
    let toast = use_toast();
    let navigator = use_navigator();
    let email_ref = use_node_ref();
    let password_ref = use_node_ref();
    let is_submitting = use_state(|| false);
    let error_message = use_state(|| None::<String>);

    let on_submit = {
        let api = services.api.clone();
        let refresh = session.refresh.clone();
        let email_ref = email_ref.clone();
        let password_ref = password_ref.clone();
        let is_submitting = is_submitting.clone();
        let error_message = error_message.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if *is_submitting {
                return;
            }

            let read = |node: &NodeRef| {
                node.cast::<HtmlInputElement>()
                    .map(|input| input.value())
                    .unwrap_or_default()
            };
            let credentials = match Credentials::new(&read(&email_ref), &read(&password_ref)) {
                Ok(credentials) => credentials,
                Err(err) => {
                    error_message.set(Some(err.to_string()));
                    return;
                }
            };

            let api = api.clone();
            let refresh = refresh.clone();
            let toast = toast.clone();
            let navigator = navigator.clone();
            let is_submitting = is_submitting.clone();
            let error_message = error_message.clone();

            is_submitting.set(true);
            error_message.set(None);

            wasm_bindgen_futures::spawn_local(async move {
                match sign_in(&api, &credentials).await {
                    Ok(email) => {
                        toast.show_success(format!("Welcome back, {}", email));
                        is_submitting.set(false);
                        refresh.emit(());
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::Prediction);
                        }
                    }
                    Err(message) => {
                        log::warn!("Login rejected: {}", message);
                        error_message.set(Some(message));
                        is_submitting.set(false);
                    }
                }
            });
        })
    };

    if session.state.is_logged_in() {
        return html! { <Redirect<Route> to={Route::Prediction} /> };
    }

    html! {
        <div class="max-w-md mx-auto card bg-base-100 shadow-xl">
            <form onsubmit={on_submit} class="card-body space-y-4">
                <h1 class="card-title text-2xl">{"Login"}</h1>

                {if let Some(error) = (*error_message).as_ref() {
                    html! { <InlineAlert message={error.clone()} /> }
                } else {
                    html! {}
                }}

                <div class="form-control">
                    <label class="label"><span class="label-text">{"Email"}</span></label>
                    <input
                        ref={email_ref}
                        type="email"
                        class="input input-bordered w-full"
                        placeholder="you@example.com"
                        disabled={*is_submitting}
                    />
                </div>
                <div class="form-control">
                    <label class="label"><span class="label-text">{"Password"}</span></label>
                    <input
                        ref={password_ref}
                        type="password"
                        class="input input-bordered w-full"
                        disabled={*is_submitting}
                    />
                </div>

                <div class="card-actions justify-end">
                    <button type="submit" class="btn btn-primary w-full" disabled={*is_submitting}>
                        {if *is_submitting { "Signing in..." } else { "Login" }}
                    </button>
                </div>
            </form>
        </div>
    }
}
