use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;
use yew::prelude::*;

use super::{FetchState, RequestSequence};

/// Generic fetch hook return type
pub struct FetchHookReturn<T> {
    pub data: FetchState<T>,
    pub is_loading: bool,
    pub error: Option<String>,
    pub refetch: Callback<()>,
}

/// Generic fetch hook composer.
///
/// Fetches on mount and whenever `deps` change, and provides a refetch
/// callback. Every request is tagged from a [`RequestSequence`]; a response
/// that arrives after a newer request was issued is discarded, so a slow
/// earlier fetch can never overwrite the result of a later one.
///
/// On failure the previously fetched data is kept and `error` is set.
///
/// # Example
///
/// ```rust,ignore
/// #[hook]
/// pub fn use_reservation_page(
///     request: ListReservations,
/// ) -> FetchHookReturn<ReservationPage> {
///     use_fetch(request, move || async move {
///         get_api_client()
///             .get_reservations(&request)
///             .await
///             .map_err(|e| e.to_string())
///     })
/// }
/// ```
#[hook]
pub fn use_fetch<T, D, F, Fut>(deps: D, fetch_fn: F) -> FetchHookReturn<T>
where
    T: Clone + 'static,
    D: PartialEq + Clone + 'static,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<T, String>> + 'static,
{
    let data = use_state(|| FetchState::NotFetched);
    let error = use_state(|| None::<String>);
    let is_loading = use_state(|| false);
    let sequence = use_mut_ref(RequestSequence::default);

    let refetch = {
        let data = data.clone();
        let error = error.clone();
        let is_loading = is_loading.clone();
        let sequence = sequence.clone();
        let fetch_fn = Rc::new(fetch_fn);

        use_callback(deps.clone(), move |_, _| {
            let data = data.clone();
            let error = error.clone();
            let is_loading = is_loading.clone();
            let sequence: Rc<RefCell<RequestSequence>> = sequence.clone();
            let fetch_fn = fetch_fn.clone();

            let ticket = sequence.borrow_mut().issue();
            is_loading.set(true);
            error.set(None);

            yew::platform::spawn_local(async move {
                let result = fetch_fn().await;

                if !sequence.borrow().is_latest(ticket) {
                    tracing::debug!(ticket, "discarding stale response");
                    return;
                }

                match result {
                    Ok(result) => {
                        data.set(FetchState::Fetched(result));
                        error.set(None);
                    }
                    Err(e) => {
                        tracing::warn!("fetch failed: {e}");
                        error.set(Some(e));
                    }
                }

                is_loading.set(false);
            });
        })
    };

    // Auto-fetch on mount and when deps change
    {
        let refetch = refetch.clone();
        use_effect_with(deps, move |_| {
            refetch.emit(());
        });
    }

    FetchHookReturn {
        data: (*data).clone(),
        is_loading: *is_loading,
        error: (*error).clone(),
        refetch: Callback::from(move |_| refetch.emit(())),
    }
}
