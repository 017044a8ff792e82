use payloads::{
    ReservationData, ReservationId,
    requests::{ListReservations, PER_PAGE_OPTIONS},
};
use yew::prelude::*;
use yewdux::prelude::*;

use crate::State;
use crate::components::{
    Column, DataTable, Pagination, SearchInput, Select, SelectItem, TableRow,
};
use crate::hooks::{use_debounce, use_reservations};
use crate::utils::{format_currency, format_date};

/// Quiet period before a search query is applied
pub const SEARCH_DEBOUNCE_MS: u32 = 500;

const LOAD_ERROR_FALLBACK: &str = "Failed to load reservations";

impl TableRow for ReservationData {
    fn field(&self, key: &str) -> String {
        match key {
            "id" => self.id.to_string(),
            "guestName" => self.guest_name.clone(),
            "siteName" => self.site_name.clone(),
            "startDate" => self.start_date.clone(),
            "endDate" => self.end_date.clone(),
            "checkinTime" => self.checkin_time.clone(),
            "checkoutTime" => self.checkout_time.clone(),
            "nights" => self.nights.to_string(),
            "fees" => self.fees.to_string(),
            "basePrice" => self.base_price.to_string(),
            "total" => self.total.to_string(),
            _ => String::new(),
        }
    }

    fn row_key(&self) -> String {
        self.id.to_string()
    }
}

/// Rows of the loaded page matching the search query.
pub fn filter_rows(rows: &[ReservationData], query: &str) -> Vec<ReservationData> {
    rows.iter()
        .filter(|row| row.matches_search(query))
        .cloned()
        .collect()
}

/// "Showing 26–50 of 60", or a dash when there is nothing to show.
pub fn showing_label(page: u32, per_page: u32, total: u64) -> String {
    if total == 0 {
        return "—".to_string();
    }
    let page = u64::from(page.max(1));
    let per_page = u64::from(per_page);
    let start = (page - 1) * per_page + 1;
    let end = (page * per_page).min(total);
    format!("Showing {start}–{end} of {total}")
}

/// The "Total owed" cell text, always recomputed from price, nights and fees.
pub fn total_owed_label(row: &ReservationData) -> String {
    format_currency(row.total_owed())
}

pub fn reservation_columns() -> Vec<Column<ReservationData>> {
    vec![
        Column::new("guestName", "Guest")
            .render(|value, row: &ReservationData, _| {
                html! {
                    <div>
                        <div class="font-medium text-gray-900">{value}</div>
                        <div class="text-xs text-gray-500">
                            {format!("#{}", row.id)}
                        </div>
                    </div>
                }
            })
            .class_name("text-nowrap"),
        Column::new("siteName", "Site"),
        Column::new("startDate", "Start")
            .render(|value, _, _| html! { {format_date(Some(value))} }),
        Column::new("endDate", "End")
            .render(|value, _, _| html! { {format_date(Some(value))} }),
        Column::new("checkinTime", "Check-in"),
        Column::new("checkoutTime", "Check-out"),
        Column::new("total", "Total owed")
            .render(|_, row, _| {
                html! {
                    <span class="font-medium">{total_owed_label(row)}</span>
                }
            })
            .class_name("text-right"),
    ]
}

/// Request after picking a page size: the new size, back on page 1.
pub fn page_size_change(value: &str) -> Option<ListReservations> {
    match value.parse::<u32>() {
        Ok(per_page) => Some(ListReservations { page: 1, per_page }),
        Err(e) => {
            tracing::warn!("ignoring page size {value:?}: {e}");
            None
        }
    }
}

/// Request after moving to `page`, keeping the page size.
pub fn page_change(request: ListReservations, page: u32) -> ListReservations {
    ListReservations { page, ..request }
}

fn per_page_items() -> Vec<SelectItem> {
    PER_PAGE_OPTIONS
        .iter()
        .map(|size| SelectItem {
            value: size.to_string().into(),
            label: size.to_string().into(),
        })
        .collect()
}

#[derive(Properties, PartialEq)]
pub struct Props {
    /// Called with the id of the clicked row
    pub on_open: Callback<ReservationId>,
}

#[function_component]
pub fn ReservationList(props: &Props) -> Html {
    let request = use_state(ListReservations::default);
    let query = use_state(String::new);
    let debounced_query = use_debounce((*query).clone(), SEARCH_DEBOUNCE_MS);
    let revision = *use_selector(|state: &State| state.reservations_revision);

    // The search query is not part of the request: filtering happens on the
    // loaded page only.
    let reservations = use_reservations(*request, revision);

    let rows = reservations
        .data
        .as_ref()
        .map(|page| page.data.clone())
        .unwrap_or_default();
    let (total, total_pages) = reservations
        .data
        .as_ref()
        .map(|page| (page.total, page.total_pages))
        .unwrap_or((0, 1));
    // Before the first response arrives the table should say "Loading"
    let loading = reservations.is_loading
        || (!reservations.data.is_fetched() && reservations.error.is_none());

    let filtered = use_memo((rows, debounced_query), |(rows, query)| {
        filter_rows(rows, query)
    });
    let columns = use_memo((), |_| reservation_columns());

    let on_query_change = {
        let query = query.clone();
        Callback::from(move |value: String| query.set(value))
    };

    let on_per_page_change = {
        let request = request.clone();
        Callback::from(move |value: String| {
            if let Some(next) = page_size_change(&value) {
                request.set(next);
            }
        })
    };

    let on_page_change = {
        let request = request.clone();
        Callback::from(move |target: u32| request.set(page_change(*request, target)))
    };

    let on_row_click = {
        let on_open = props.on_open.clone();
        Callback::from(move |(row, _): (ReservationData, usize)| {
            on_open.emit(row.id)
        })
    };

    let on_retry = {
        let refetch = reservations.refetch.clone();
        Callback::from(move |_: MouseEvent| refetch.emit(()))
    };

    let error_alert = match &reservations.error {
        Some(message) => {
            let message = if message.is_empty() {
                LOAD_ERROR_FALLBACK.to_string()
            } else {
                message.clone()
            };
            html! {
                <div
                    role="alert"
                    class="mb-3 rounded-md border border-red-200 bg-red-50 \
                           p-3 text-red-700"
                >
                    {message}
                    <button
                        type="button"
                        class="ml-3 underline"
                        onclick={on_retry}
                    >
                        {"Try again"}
                    </button>
                </div>
            }
        }
        None => html! {},
    };

    html! {
        <div class="w-full max-w-7xl mx-auto p-4">
            <div class="mb-4 flex items-center justify-between gap-3">
                <div>
                    <h1 class="text-xl font-semibold tracking-tight">
                        {"Reservations"}
                    </h1>
                    <p class="text-sm text-gray-500">
                        {"Manage stays, guests, and balances"}
                    </p>
                </div>
                <div class="flex items-center gap-3">
                    <SearchInput
                        value={(*query).clone()}
                        placeholder="Search name, site, id…"
                        on_change={on_query_change}
                    />
                    <Select
                        items={per_page_items()}
                        value={request.per_page.to_string()}
                        on_change={on_per_page_change}
                        aria_label="Rows per page"
                    />
                </div>
            </div>

            {error_alert}

            <DataTable<ReservationData>
                data={filtered}
                columns={columns}
                loading={loading}
                empty_message="No reservations"
                on_row_click={on_row_click}
            />

            <div class="flex flex-col sm:flex-row items-center justify-between \
                        gap-3 px-4 py-3 border-t border-gray-200 bg-white">
                <div class="text-sm text-gray-600">
                    {showing_label(request.page, request.per_page, total)}
                </div>

                <Pagination
                    current_page={request.page}
                    total_pages={total_pages}
                    on_page_change={on_page_change}
                    loading={loading}
                />
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hooks::use_debounce::Debouncer;
    use rust_decimal::dec;

    fn row(id: &str, guest: &str, site: &str) -> ReservationData {
        ReservationData {
            id: id.into(),
            guest_name: guest.into(),
            site_name: site.into(),
            ..Default::default()
        }
    }

    fn rows() -> Vec<ReservationData> {
        vec![
            row("r1", "Ana", "A1"),
            row("r2", "Bruno", "Lakeside"),
            row("x-ana", "Carla", "B7"),
        ]
    }

    #[test]
    fn empty_query_keeps_every_row() {
        assert_eq!(filter_rows(&rows(), ""), rows());
    }

    #[test]
    fn query_matches_name_site_or_id_ignoring_case() {
        let ids = |query: &str| -> Vec<String> {
            filter_rows(&rows(), query)
                .into_iter()
                .map(|r| r.id.0)
                .collect()
        };
        assert_eq!(ids("ANA"), ["r1", "x-ana"]);
        assert_eq!(ids("lake"), ["r2"]);
        assert_eq!(ids("R2"), ["r2"]);
        assert!(ids("zzz").is_empty());
    }

    #[test]
    fn total_owed_column_recomputes() {
        let reservation = ReservationData {
            id: "r1".into(),
            guest_name: "Ana".into(),
            site_name: "A1".into(),
            base_price: dec!(100),
            nights: 2,
            fees: dec!(10),
            total: dec!(0),
            ..Default::default()
        };
        assert_eq!(total_owed_label(&reservation), "$210.00");
    }

    #[test]
    fn showing_label_ranges() {
        assert_eq!(showing_label(1, 25, 0), "—");
        assert_eq!(showing_label(1, 25, 1), "Showing 1–1 of 1");
        assert_eq!(showing_label(2, 25, 60), "Showing 26–50 of 60");
        assert_eq!(showing_label(3, 25, 60), "Showing 51–60 of 60");
    }

    #[test]
    fn raw_fields_by_column_key() {
        let reservation = ReservationData {
            checkin_time: "15:00".into(),
            nights: 4,
            ..row("r9", "Ana", "A1")
        };
        assert_eq!(reservation.field("guestName"), "Ana");
        assert_eq!(reservation.field("checkinTime"), "15:00");
        assert_eq!(reservation.field("nights"), "4");
        assert_eq!(reservation.field("unknown"), "");
        assert_eq!(reservation.row_key(), "r9");
    }

    #[test]
    fn columns_cover_the_list_view() {
        let headers: Vec<_> = reservation_columns()
            .iter()
            .map(|c| c.header.to_string())
            .collect();
        assert_eq!(
            headers,
            [
                "Guest",
                "Site",
                "Start",
                "End",
                "Check-in",
                "Check-out",
                "Total owed"
            ]
        );
    }

    #[test]
    fn page_size_choices() {
        let values: Vec<_> =
            per_page_items().iter().map(|i| i.value.to_string()).collect();
        assert_eq!(values, ["10", "25", "50", "100"]);
    }

    #[test]
    fn changing_page_size_returns_to_first_page() {
        assert_eq!(
            page_size_change("50"),
            Some(ListReservations {
                page: 1,
                per_page: 50
            })
        );
        assert_eq!(page_size_change("lots"), None);
    }

    #[test]
    fn changing_page_keeps_page_size() {
        let request = ListReservations {
            page: 1,
            per_page: 50,
        };
        assert_eq!(
            page_change(request, 3),
            ListReservations {
                page: 3,
                per_page: 50
            }
        );
    }

    #[test]
    fn search_filters_only_after_the_debounce_fires() {
        let mut query = Debouncer::new(String::new());
        let ticket = query.push("lake".to_string()).unwrap();
        assert_eq!(filter_rows(&rows(), query.applied()), rows());

        assert!(query.fire(ticket));
        let ids: Vec<_> = filter_rows(&rows(), query.applied())
            .into_iter()
            .map(|r| r.id.0)
            .collect();
        assert_eq!(ids, ["r2"]);
    }
}
