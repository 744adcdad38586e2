use yew::prelude::*;
use yew_router::prelude::*;

use crate::auth::{use_auth, AuthState};
use crate::common::loading::LoadingSpinner;
use crate::components::accounts::Accounts;
use crate::components::customers::Customers;
use crate::components::dashboard::Dashboard;
use crate::components::invoices::Invoices;
use crate::components::layout::Layout;
use crate::components::login::Login;
use crate::components::reports::Reports;
use crate::components::settings::Settings;

#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/login")]
    Login,
    #[at("/")]
    Home,
    #[at("/dashboard")]
    Dashboard,
    #[at("/accounts")]
    Accounts,
    #[at("/customers")]
    Customers,
    #[at("/invoices")]
    Invoices,
    #[at("/reports")]
    Reports,
    #[at("/settings")]
    Settings,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(routes: Route) -> Html {
    log::debug!("Routing to: {:?}", routes);
    match routes {
        Route::Login => {
            log::trace!("Rendering Login page");
            html! { <Login /> }
        }
        Route::Home | Route::Dashboard => {
            log::trace!("Rendering Dashboard page");
            html! { <RequireAuth><Layout title="Dashboard"><Dashboard /></Layout></RequireAuth> }
        }
        Route::Accounts => {
            log::trace!("Rendering Accounts page");
            html! { <RequireAuth><Layout title="Accounts"><Accounts /></Layout></RequireAuth> }
        }
        Route::Customers => {
            log::trace!("Rendering Customers page");
            html! { <RequireAuth><Layout title="Customers"><Customers /></Layout></RequireAuth> }
        }
        Route::Invoices => {
            log::trace!("Rendering Invoices page");
            html! { <RequireAuth><Layout title="Invoices"><Invoices /></Layout></RequireAuth> }
        }
        Route::Reports => {
            log::trace!("Rendering Reports page");
            html! { <RequireAuth><Layout title="Reports"><Reports /></Layout></RequireAuth> }
        }
        Route::Settings => {
            log::trace!("Rendering Settings page");
            html! { <RequireAuth><Layout title="Settings"><Settings /></Layout></RequireAuth> }
        }
        Route::NotFound => {
            log::warn!("404 - Route not found");
            html! { <RequireAuth><Layout title="404"><h1>{"404 Not Found"}</h1></Layout></RequireAuth> }
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct RequireAuthProps {
    pub children: Children,
}

/// Route guard: protected views render only for an authenticated
/// session. While the first session check is pending a placeholder is
/// shown; without a session the user lands on the login page.
#[function_component(RequireAuth)]
pub fn require_auth(props: &RequireAuthProps) -> Html {
    let auth = use_auth();

    match &auth.state {
        AuthState::Loading => html! { <LoadingSpinner /> },
        AuthState::Unauthenticated => {
            log::debug!("Unauthenticated, redirecting to login");
            html! { <Redirect<Route> to={Route::Login} /> }
        }
        AuthState::Authenticated(_) => html! { {props.children.clone()} },
    }
}
