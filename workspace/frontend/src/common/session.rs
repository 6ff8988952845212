use homeprice_common::session::current_status;
use yew::prelude::*;

use crate::hooks::{use_services, SessionContext, SessionState};

#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    pub children: Children,
}

/// Asks the identity provider once per page view and shares the answer.
#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    let services = use_services();
    let state = use_state(|| SessionState::Checking);

    let refresh = {
        let state = state.clone();
        let api = services.api.clone();

        use_callback((), move |_, _| {
            let state = state.clone();
            let api = api.clone();
            // Guards wait for the new answer instead of acting on the old one
            state.set(SessionState::Checking);

            wasm_bindgen_futures::spawn_local(async move {
                let status = current_status(&api).await;
                log::debug!("Session status: logged_in={}", status.logged_in);
                state.set(SessionState::Known(status));
            });
        })
    };

    // Check on mount
    {
        let refresh = refresh.clone();
        use_effect_with((), move |_| {
            refresh.emit(());
            || ()
        });
    }

    let context = SessionContext {
        state: (*state).clone(),
        refresh,
    };

    html! {
        <ContextProvider<SessionContext> context={context}>
            {props.children.clone()}
        </ContextProvider<SessionContext>>
    }
}
