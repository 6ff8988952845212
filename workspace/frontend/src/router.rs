use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::auth_guard::RequireAuth;
use crate::components::layout::layout::Layout;
use crate::pages::about::AboutPage;
use crate::pages::contact::ContactPage;
use crate::pages::home::Home;
use crate::pages::login::LoginPage;
use crate::pages::prediction::PredictionPage;

#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/prediction")]
    Prediction,
    #[at("/about")]
    About,
    #[at("/contact")]
    Contact,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(routes: Route) -> Html {
    log::debug!("Routing to: {:?}", routes);
    match routes {
        Route::Home => {
            log::trace!("Rendering Home page");
            html! { <Layout><Home /></Layout> }
        }
        Route::Login => {
            log::trace!("Rendering Login page");
            html! { <Layout><LoginPage /></Layout> }
        }
        Route::Prediction => {
            log::trace!("Rendering Prediction page");
            html! { <Layout><RequireAuth><PredictionPage /></RequireAuth></Layout> }
        }
        Route::About => {
            log::trace!("Rendering About page");
            html! { <Layout><AboutPage /></Layout> }
        }
        Route::Contact => {
            log::trace!("Rendering Contact page");
            html! { <Layout><RequireAuth><ContactPage /></RequireAuth></Layout> }
        }
        Route::NotFound => {
            log::warn!("404 - Route not found");
            html! {
                <Layout>
                    <div class="text-center py-24">
                        <h1 class="text-4xl font-bold">{"404 Not Found"}</h1>
                        <Link<Route> to={Route::Home} classes={classes!("btn", "btn-primary", "mt-6")}>{"Back to home"}</Link<Route>>
                    </div>
                </Layout>
            }
        }
    }
}
