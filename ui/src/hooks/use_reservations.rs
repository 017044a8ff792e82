use payloads::{requests::ListReservations, responses::ReservationPage};
use yew::prelude::*;

use super::{FetchHookReturn, use_fetch};
use crate::get_api_client;

/// Fetch one page of reservations.
///
/// Refetches whenever the request changes or `revision` is bumped, which
/// happens after a reservation is saved elsewhere on the page.
#[hook]
pub fn use_reservations(
    request: ListReservations,
    revision: u64,
) -> FetchHookReturn<ReservationPage> {
    use_fetch((request, revision), move || async move {
        let api_client = get_api_client();
        api_client
            .get_reservations(&request)
            .await
            .map_err(|e| e.to_string())
    })
}
