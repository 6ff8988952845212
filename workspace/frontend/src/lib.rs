use yew::prelude::*;
use yew_router::prelude::*;

pub mod api_client;
pub mod common;
mod components;
pub mod hooks;
mod pages;
pub mod router;
pub mod settings;

use common::session::SessionProvider;
use common::toast::ToastProvider;
use hooks::Services;
use router::{switch, Route};
use settings::AppSettings;

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub services: Services,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    html! {
        <ContextProvider<Services> context={props.services.clone()}>
            <ToastProvider>
                <SessionProvider>
                    <BrowserRouter>
                        <Switch<Route> render={switch} />
                    </BrowserRouter>
                </SessionProvider>
            </ToastProvider>
        </ContextProvider<Services>>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    // Settings first, the log level depends on them
    let settings = AppSettings::from_environment();
    wasm_logger::init(wasm_logger::Config::new(settings.log_level));

    log::info!("=== HomePrice Frontend Application Starting ===");
    log::info!("Application settings: {:?}", settings);
    log::debug!("API base URL: {}", settings.api_base_url);
    log::debug!("Debug mode: {}", settings.debug_mode);

    let services = Services::new(settings);

    log::trace!("Initializing Yew renderer");
    yew::Renderer::<App>::with_props(AppProps { services }).render();
    log::info!("Application initialized successfully");
}
