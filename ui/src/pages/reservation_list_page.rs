use payloads::ReservationId;
use yew::prelude::*;

use crate::components::{ReservationDrawer, ReservationList};

/// The list with its edit drawer. Clicking a row opens the drawer on that
/// reservation; closing keeps the last id so the panel can slide out with
/// its content intact.
#[function_component]
pub fn ReservationListPage() -> Html {
    let drawer_open = use_state(|| false);
    let selected_id = use_state(|| None::<ReservationId>);

    let open_drawer = {
        let drawer_open = drawer_open.clone();
        let selected_id = selected_id.clone();
        Callback::from(move |id: ReservationId| {
            selected_id.set(Some(id));
            drawer_open.set(true);
        })
    };

    let close_drawer = {
        let drawer_open = drawer_open.clone();
        Callback::from(move |_| drawer_open.set(false))
    };

    html! {
        <div class="w-full">
            <ReservationList on_open={open_drawer} />
            <ReservationDrawer
                open={*drawer_open}
                id={(*selected_id).clone()}
                on_close={close_drawer}
            />
        </div>
    }
}
