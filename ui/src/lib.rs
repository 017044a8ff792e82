use payloads::APIClient;
use yew::prelude::*;
use yew_router::prelude::*;

mod components;
mod hooks;
mod logs;
mod pages;
mod state;
mod utils;

pub use logs::init_logging;
pub use state::State;

use pages::{NotFoundPage, ReservationListPage};

// Global API client - configurable via environment or same-origin fallback
pub fn get_api_client() -> APIClient {
    // Try environment variable first (set at build time)
    let address = option_env!("BACKEND_URL")
        .map(|url| url.to_string())
        .unwrap_or_else(same_origin);

    APIClient {
        address,
        inner_client: reqwest::Client::new(),
    }
}

fn same_origin() -> String {
    web_sys::window()
        .and_then(|window| window.location().origin().ok())
        .unwrap_or_default()
}

#[function_component]
pub fn App() -> Html {
    html! {
        <BrowserRouter>
            <div class="min-h-screen bg-gray-50 text-gray-900">
                <Switch<Route> render={switch} />
            </div>
        </BrowserRouter>
    }
}

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Reservations,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Reservations => html! { <ReservationListPage /> },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}
