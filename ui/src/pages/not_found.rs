use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component]
pub fn NotFoundPage() -> Html {
    html! {
        <main class="max-w-7xl mx-auto px-4 py-16 text-center">
            <h1 class="text-4xl font-bold text-gray-900">{"404"}</h1>
            <p class="mt-2 text-gray-600">{"Page not found"}</p>
            <Link<Route>
                to={Route::Reservations}
                classes="mt-6 inline-block text-sm underline text-gray-700"
            >
                {"Back to reservations"}
            </Link<Route>>
        </main>
    }
}
