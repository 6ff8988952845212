use homeprice_common::session::{navbar_visible, sign_out};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::common::toast::use_toast;
use crate::hooks::{use_services, use_session};
use crate::router::Route;

/// Top navigation, shown to signed-in users everywhere except the landing
/// page.
#[function_component(Navbar)]
pub fn navbar() -> Html {
    let services = use_services();
    let session = use_session();
    let toast = use_toast();
    let navigator = use_navigator();
    let location = use_location();
    let path = location.map(|l| l.path().to_string()).unwrap_or_default();

    if !navbar_visible(session.state.is_logged_in(), &path) {
        return html! {};
    }

    let on_logout = {
        let api = services.api.clone();
        let refresh = session.refresh.clone();

        Callback::from(move |_: MouseEvent| {
            let api = api.clone();
            let refresh = refresh.clone();
            let navigator = navigator.clone();
            let toast = toast.clone();

            wasm_bindgen_futures::spawn_local(async move {
                if !sign_out(&api).await {
                    log::warn!("Logout was not confirmed by the server");
                    toast.show_error("Logout could not be confirmed by the server");
                }
                refresh.emit(());
                // Leave the page whether or not the call succeeded
                if let Some(navigator) = navigator {
                    navigator.push(&Route::Home);
                }
            });
        })
    };

    let link = |route: Route, label: &'static str| {
        let active = Route::recognize(&path).as_ref() == Some(&route);
        html! {
            <li>
                <Link<Route> to={route} classes={classes!(active.then_some("active"))}>{label}</Link<Route>>
            </li>
        }
    };

    html! {
        <div class="navbar bg-base-100 shadow-sm z-40 sticky top-0">
            <div class="flex-1 px-4">
                <Link<Route> to={Route::Home} classes={classes!("text-xl", "font-bold")}>
                    <i class="fas fa-house mr-2"></i>{"HomePrice"}
                </Link<Route>>
            </div>
            <div class="flex-none gap-2">
                <ul class="menu menu-horizontal px-1">
                    {link(Route::Prediction, "Predict")}
                    {link(Route::About, "About")}
                    {link(Route::Contact, "Contact")}
                </ul>
                {if let Some(email) = session.state.email() {
                    html! { <span class="text-sm text-gray-500 hidden md:inline">{email}</span> }
                } else {
                    html! {}
                }}
                <button class="btn btn-sm btn-outline" onclick={on_logout}>
                    <i class="fas fa-sign-out-alt"></i>{" Logout"}
                </button>
            </div>
        </div>
    }
}
