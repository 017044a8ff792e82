//! Slide-over editor for a single reservation.
//!
//! The drawer runs a small state machine (see [`DrawerState`]):
//!
//! ```text
//! Closed -> Loading -> Editing -> Saving -> Closed
//!              |                    |
//!              v                    v
//!          LoadFailed           Editing (with save error)
//! ```
//!
//! Every open issues a new ticket, and closing retires it. Load and save
//! responses carry the ticket they were issued under and are applied only
//! while it is still current, so switching quickly between reservations can
//! never show the wrong record, and a response landing after the drawer
//! closed is ignored. Opening clears the previous record; a successful load
//! resets every form field from the fetched one.

use payloads::{ReservationData, ReservationId, requests::validate_reservation};
use rust_decimal::Decimal;
use std::rc::Rc;
use std::str::FromStr;
use yew::prelude::*;
use yewdux::prelude::*;

use crate::components::Input;
use crate::hooks::RequestSequence;
use crate::utils::{class_names, format_currency};
use crate::{State, get_api_client};

const DEFAULT_CHECKIN_TIME: &str = "15:00";
const DEFAULT_CHECKOUT_TIME: &str = "11:00";
const SAVE_ERROR_FALLBACK: &str = "failed to save";
const LOAD_ERROR_FALLBACK: &str = "Failed to load reservation";

/// Editable copy of a reservation. Numeric fields keep the raw input text.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReservationForm {
    pub guest_name: String,
    pub site_name: String,
    pub start_date: String,
    pub end_date: String,
    pub checkin_time: String,
    pub checkout_time: String,
    pub nights: String,
    pub fees: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    GuestName,
    SiteName,
    StartDate,
    EndDate,
    CheckinTime,
    CheckoutTime,
    Nights,
    Fees,
}

impl ReservationForm {
    pub fn from_reservation(reservation: &ReservationData) -> Self {
        let or_default = |value: &str, default: &str| {
            if value.is_empty() {
                default.to_string()
            } else {
                value.to_string()
            }
        };
        Self {
            guest_name: reservation.guest_name.clone(),
            site_name: reservation.site_name.clone(),
            start_date: reservation.start_date.clone(),
            end_date: reservation.end_date.clone(),
            checkin_time: or_default(
                &reservation.checkin_time,
                DEFAULT_CHECKIN_TIME,
            ),
            checkout_time: or_default(
                &reservation.checkout_time,
                DEFAULT_CHECKOUT_TIME,
            ),
            nights: reservation.nights.to_string(),
            fees: reservation.fees.to_string(),
        }
    }

    pub fn set(&mut self, field: FormField, value: String) {
        let slot = match field {
            FormField::GuestName => &mut self.guest_name,
            FormField::SiteName => &mut self.site_name,
            FormField::StartDate => &mut self.start_date,
            FormField::EndDate => &mut self.end_date,
            FormField::CheckinTime => &mut self.checkin_time,
            FormField::CheckoutTime => &mut self.checkout_time,
            FormField::Nights => &mut self.nights,
            FormField::Fees => &mut self.fees,
        };
        *slot = value;
    }

    /// Nights as typed, with anything unparseable counting as zero.
    pub fn nights(&self) -> u32 {
        self.nights.trim().parse().unwrap_or(0)
    }

    /// Fees as typed, with anything unparseable counting as zero.
    pub fn fees(&self) -> Decimal {
        Decimal::from_str(self.fees.trim()).unwrap_or(Decimal::ZERO)
    }

    pub fn total(&self, base_price: Decimal) -> Decimal {
        payloads::compute_total(base_price, self.nights(), self.fees())
    }

    /// The original record overlaid with every edited field and the
    /// recomputed total.
    pub fn apply_to(&self, original: &ReservationData) -> ReservationData {
        ReservationData {
            guest_name: self.guest_name.clone(),
            site_name: self.site_name.clone(),
            start_date: self.start_date.clone(),
            end_date: self.end_date.clone(),
            checkin_time: self.checkin_time.clone(),
            checkout_time: self.checkout_time.clone(),
            nights: self.nights(),
            fees: self.fees(),
            total: self.total(original.base_price),
            ..original.clone()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrawerPhase {
    #[default]
    Closed,
    Loading,
    LoadFailed,
    Editing,
    Saving,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DrawerState {
    pub phase: DrawerPhase,
    /// Ticket whose load and save responses will be accepted; 0 accepts none
    pub load_ticket: u64,
    /// The record as fetched
    pub record: Option<ReservationData>,
    pub form: ReservationForm,
    pub load_error: Option<String>,
    pub save_error: Option<String>,
}

pub enum DrawerAction {
    Open { ticket: u64 },
    Loaded { ticket: u64, record: ReservationData },
    LoadFailed { ticket: u64, message: String },
    Edit(FormField, String),
    SaveStarted { ticket: u64 },
    SaveFailed { ticket: u64, message: String },
    Saved { ticket: u64 },
    Close,
}

fn message_or(message: String, fallback: &str) -> String {
    if message.trim().is_empty() {
        fallback.to_string()
    } else {
        message
    }
}

impl DrawerState {
    pub fn apply(&self, action: DrawerAction) -> Self {
        let mut next = self.clone();
        match action {
            DrawerAction::Open { ticket } => {
                next.phase = DrawerPhase::Loading;
                next.load_ticket = ticket;
                next.record = None;
                next.form = ReservationForm::default();
                next.load_error = None;
                next.save_error = None;
            }
            DrawerAction::Loaded { ticket, record } => {
                if ticket != self.load_ticket {
                    return next;
                }
                next.form = ReservationForm::from_reservation(&record);
                next.record = Some(record);
                next.phase = DrawerPhase::Editing;
            }
            DrawerAction::LoadFailed { ticket, message } => {
                if ticket != self.load_ticket {
                    return next;
                }
                next.record = None;
                next.load_error = Some(message_or(message, LOAD_ERROR_FALLBACK));
                next.phase = DrawerPhase::LoadFailed;
            }
            DrawerAction::Edit(field, value) => {
                if self.phase == DrawerPhase::Editing {
                    next.form.set(field, value);
                }
            }
            DrawerAction::SaveStarted { ticket } => {
                if ticket != self.load_ticket || self.phase != DrawerPhase::Editing {
                    return next;
                }
                next.phase = DrawerPhase::Saving;
                next.save_error = None;
            }
            DrawerAction::SaveFailed { ticket, message } => {
                if ticket != self.load_ticket || self.record.is_none() {
                    return next;
                }
                next.phase = DrawerPhase::Editing;
                next.save_error = Some(message_or(message, SAVE_ERROR_FALLBACK));
            }
            DrawerAction::Saved { ticket } => {
                if ticket != self.load_ticket {
                    return next;
                }
                next.phase = DrawerPhase::Closed;
                next.load_ticket = 0;
            }
            DrawerAction::Close => {
                next.phase = DrawerPhase::Closed;
                next.load_ticket = 0;
            }
        }
        next
    }

    pub fn is_busy(&self) -> bool {
        matches!(self.phase, DrawerPhase::Loading | DrawerPhase::Saving)
    }

    /// Live total from the current form values, or zero before a record is
    /// loaded.
    pub fn total(&self) -> Decimal {
        self.record
            .as_ref()
            .map(|record| self.form.total(record.base_price))
            .unwrap_or(Decimal::ZERO)
    }

    /// What would be sent on save.
    pub fn payload(&self) -> Option<ReservationData> {
        self.record.as_ref().map(|record| self.form.apply_to(record))
    }
}

impl Reducible for DrawerState {
    type Action = DrawerAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(self.apply(action))
    }
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub open: bool,
    pub id: Option<ReservationId>,
    pub on_close: Callback<()>,
}

#[function_component]
pub fn ReservationDrawer(props: &Props) -> Html {
    let state = use_reducer(DrawerState::default);
    let sequence = use_mut_ref(RequestSequence::default);
    let dispatch = use_dispatch::<State>();

    // Load a fresh copy of the record every time the drawer opens or the
    // selected id changes.
    {
        let state = state.clone();
        let sequence = sequence.clone();
        use_effect_with((props.open, props.id.clone()), move |(open, id)| {
            match (open, id) {
                (true, Some(id)) => {
                    let ticket = sequence.borrow_mut().issue();
                    state.dispatch(DrawerAction::Open { ticket });

                    let id = id.clone();
                    yew::platform::spawn_local(async move {
                        let api_client = get_api_client();
                        match api_client.get_reservation(&id).await {
                            Ok(record) => state
                                .dispatch(DrawerAction::Loaded { ticket, record }),
                            Err(e) => {
                                tracing::warn!("failed to load {id}: {e}");
                                state.dispatch(DrawerAction::LoadFailed {
                                    ticket,
                                    message: e.to_string(),
                                })
                            }
                        }
                    });
                }
                _ => {
                    sequence.borrow_mut().issue();
                    state.dispatch(DrawerAction::Close)
                }
            }
        });
    }

    let edit = |field: FormField| {
        let state = state.clone();
        Callback::from(move |value: String| {
            state.dispatch(DrawerAction::Edit(field, value))
        })
    };

    let on_submit = {
        let state = state.clone();
        let sequence = sequence.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let ticket = state.load_ticket;
            let Some(payload) = state.payload() else {
                return;
            };
            if let Some(message) = validate_reservation(&payload).error_message()
            {
                state.dispatch(DrawerAction::SaveFailed {
                    ticket,
                    message: message.to_string(),
                });
                return;
            }

            state.dispatch(DrawerAction::SaveStarted { ticket });
            let state = state.clone();
            let sequence = sequence.clone();
            let on_close = on_close.clone();
            let dispatch = dispatch.clone();
            yew::platform::spawn_local(async move {
                let api_client = get_api_client();
                match api_client.save_reservation(&payload).await {
                    Ok(()) => {
                        tracing::info!("saved reservation {}", payload.id);
                        dispatch.reduce_mut(|s| s.mark_reservations_changed());
                        // The user may have closed or switched records since
                        if !sequence.borrow().is_latest(ticket) {
                            return;
                        }
                        if let Some(window) = web_sys::window()
                            && let Err(e) = window.alert_with_message("saved")
                        {
                            tracing::warn!("failed to show save alert: {e:?}");
                        }
                        state.dispatch(DrawerAction::Saved { ticket });
                        on_close.emit(());
                    }
                    Err(e) => {
                        tracing::warn!("failed to save {}: {e}", payload.id);
                        state.dispatch(DrawerAction::SaveFailed {
                            ticket,
                            message: e.to_string(),
                        })
                    }
                }
            });
        })
    };

    let on_close_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let open = props.open;
    let alert_class = "rounded-md border border-red-200 bg-red-50 p-3 text-red-700";
    let label_class = "mb-1 block text-sm font-medium text-gray-800";
    let form = &state.form;

    let form_view = match &state.record {
        Some(record) => html! {
            <form onsubmit={on_submit} class="space-y-4">
                <div class="grid grid-cols-1 gap-4">
                    <div>
                        <label for="guestName" class={label_class}>{"Guest name"}</label>
                        <Input
                            name="guestName"
                            value={form.guest_name.clone()}
                            on_change={edit(FormField::GuestName)}
                        />
                    </div>

                    <div>
                        <label for="siteName" class={label_class}>{"Site name"}</label>
                        <Input
                            name="siteName"
                            value={form.site_name.clone()}
                            on_change={edit(FormField::SiteName)}
                        />
                    </div>

                    <div class="grid grid-cols-2 gap-4">
                        <div>
                            <label for="startDate" class={label_class}>{"Start date"}</label>
                            <Input
                                input_type="date"
                                name="startDate"
                                value={form.start_date.clone()}
                                on_change={edit(FormField::StartDate)}
                            />
                        </div>
                        <div>
                            <label for="endDate" class={label_class}>{"End date"}</label>
                            <Input
                                input_type="date"
                                name="endDate"
                                value={form.end_date.clone()}
                                on_change={edit(FormField::EndDate)}
                            />
                        </div>
                    </div>

                    <div class="grid grid-cols-2 gap-4">
                        <div>
                            <label for="checkinTime" class={label_class}>{"Check-in time"}</label>
                            <Input
                                input_type="time"
                                name="checkinTime"
                                value={form.checkin_time.clone()}
                                on_change={edit(FormField::CheckinTime)}
                            />
                        </div>
                        <div>
                            <label for="checkoutTime" class={label_class}>{"Check-out time"}</label>
                            <Input
                                input_type="time"
                                name="checkoutTime"
                                value={form.checkout_time.clone()}
                                on_change={edit(FormField::CheckoutTime)}
                            />
                        </div>
                    </div>

                    <div class="grid grid-cols-3 gap-4">
                        <div>
                            <label for="nights" class={label_class}>{"Nights"}</label>
                            <Input
                                input_type="number"
                                name="nights"
                                min="0"
                                value={form.nights.clone()}
                                on_change={edit(FormField::Nights)}
                            />
                        </div>
                        <div>
                            <label for="fees" class={label_class}>{"Fees"}</label>
                            <Input
                                input_type="number"
                                name="fees"
                                min="0"
                                step="0.01"
                                value={form.fees.clone()}
                                on_change={edit(FormField::Fees)}
                            />
                        </div>
                        <div>
                            <span class={label_class}>{"Price/night"}</span>
                            <div class="rounded-lg border border-gray-200 \
                                        bg-gray-50 px-3 py-2 text-gray-800">
                                {format_currency(record.base_price)}
                            </div>
                        </div>
                    </div>
                </div>

                <div class="mt-2 flex items-center justify-between rounded-xl \
                            border border-gray-200 bg-white p-3 shadow-sm">
                    <div class="text-base">
                        {"Total: "}
                        <span class="font-semibold">{format_currency(state.total())}</span>
                    </div>
                    <button
                        type="submit"
                        disabled={state.is_busy()}
                        class="inline-flex items-center rounded-lg border \
                               border-gray-300 bg-gray-900 px-4 py-2 text-sm \
                               font-medium text-white shadow-sm transition \
                               hover:bg-black disabled:opacity-50"
                    >
                        {"Save"}
                    </button>
                </div>
            </form>
        },
        None => html! {},
    };

    html! {
        <div
            role="dialog"
            aria-modal="true"
            aria-labelledby="reservation-title"
            aria-hidden={(!open).to_string()}
            class={class_names(&[
                Some("fixed inset-0 z-40 transition"),
                Some(if open { "pointer-events-auto" } else { "pointer-events-none" }),
            ])}
        >
            <div
                class={class_names(&[
                    Some("absolute inset-0 bg-black/30 transition-opacity"),
                    Some(if open { "opacity-100" } else { "opacity-0" }),
                ])}
                onclick={on_close_click.clone()}
            />
            <div
                class={class_names(&[
                    Some("absolute right-0 top-0 h-full w-full sm:w-[480px] \
                          bg-white shadow-2xl outline-none transition-transform"),
                    Some(if open { "translate-x-0" } else { "translate-x-full" }),
                ])}
            >
                <div class="flex items-center justify-between border-b px-4 py-3">
                    <div>
                        <h2 id="reservation-title" class="text-lg font-semibold">
                            {"Edit reservation"}
                        </h2>
                        <p class="text-xs text-gray-500">
                            {format!(
                                "ID: {}",
                                state.record.as_ref().map(|r| r.id.to_string()).unwrap_or_default()
                            )}
                        </p>
                    </div>
                    <button
                        type="button"
                        onclick={on_close_click}
                        class="rounded-md border px-2 py-1 text-sm hover:bg-gray-50"
                    >
                        {"Close"}
                    </button>
                </div>

                <div class="p-4 space-y-4">
                    if let Some(error) = &state.load_error {
                        <div role="alert" class={alert_class}>{error}</div>
                    }
                    if let Some(error) = &state.save_error {
                        <div role="alert" aria-live="assertive" class={alert_class}>
                            {error}
                        </div>
                    }
                    if state.is_busy() {
                        <div class="text-sm text-gray-500">{"Loading…"}</div>
                    }
                    {form_view}
                </div>
            </div>
        </div>
    }
}
