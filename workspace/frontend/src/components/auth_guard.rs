use yew::prelude::*;
use yew_router::prelude::*;

use crate::common::loading::Loading;
use crate::hooks::use_session;
use crate::router::Route;

#[derive(Properties, PartialEq)]
pub struct RequireAuthProps {
    pub children: Children,
}

/// Renders its children only for a signed-in session; anyone else is sent to
/// the login page.
#[function_component(RequireAuth)]
pub fn require_auth(props: &RequireAuthProps) -> Html {
    let session = use_session();

    if session.state.is_checking() {
        return html! { <Loading text={Some("Checking session...".to_string())} /> };
    }

    if !session.state.is_logged_in() {
        log::info!("Not authenticated, redirecting to login");
        return html! { <Redirect<Route> to={Route::Login} /> };
    }

    html! { <>{ for props.children.iter() }</> }
}
