use crate::containers::layout::Layout;
use crate::models::app_state::{AppState, DashboardDispatch, DashboardSlice};
use crate::pages::{DashboardPage, ErrorPage, LoginPage};
use crate::session::BrowserSession;
use crate::{api::TodoClient, config::FrontendConfig};
use shared::controllers::DashboardController;
use strum::EnumIter;
use wasm_bindgen::prelude::*;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::{use_dispatch, use_selector};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

/// The main routes
#[derive(Debug, Clone, PartialEq, Routable, EnumIter)]
pub enum MainRoute {
    #[at("/")]
    Login,
    #[at("/dashboard")]
    Dashboard,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl MainRoute {
    /// Whether the route needs a stored token.
    pub fn requires_session(&self) -> bool {
        matches!(self, Self::Dashboard)
    }
}

#[derive(Properties, PartialEq)]
pub struct MainRouteViewProps {
    pub route: MainRoute,
}

#[function_component(MainRouteView)]
fn main_route_view(props: &MainRouteViewProps) -> Html {
    let is_authenticated = use_selector(AppState::is_authenticated);
    let app_dispatch = use_dispatch::<AppState>();
    let dashboard_dispatch = use_dispatch::<DashboardSlice>();

    let on_logout = Callback::from(move |()| {
        let controller = DashboardController::new(
            TodoClient::shared(),
            DashboardDispatch::from(dashboard_dispatch.clone()),
            FrontendConfig::new().features(),
        );
        controller.logout(&BrowserSession);
        app_dispatch.set(AppState::default());
        log("Logged out");
    });

    match props.route {
        MainRoute::Login if *is_authenticated => {
            html! { <Redirect<MainRoute> to={MainRoute::Dashboard} /> }
        }
        MainRoute::Login => html! { <LoginPage /> },
        ref route if route.requires_session() && !*is_authenticated => {
            html! { <Redirect<MainRoute> to={MainRoute::Login} /> }
        }
        MainRoute::Dashboard => html! {
            <Layout {on_logout}>
                <DashboardPage />
            </Layout>
        },
        MainRoute::NotFound => html! { <ErrorPage /> },
    }
}

/// Switch function for the main routes.
pub fn switch(route: MainRoute) -> Html {
    log(std::format!("Switching to main route: {route:?}").as_str());
    html! { <MainRouteView {route} /> }
}
