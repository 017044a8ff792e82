use jiff::civil::Date;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ReservationData;

pub const DEFAULT_PER_PAGE: u32 = 25;
pub const MAX_PER_PAGE: u32 = 100;
/// Page sizes offered by the list view.
pub const PER_PAGE_OPTIONS: [u32; 4] = [10, 25, 50, 100];

/// Request one page of reservations. `page` is 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListReservations {
    pub page: u32,
    pub per_page: u32,
}

impl Default for ListReservations {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

impl ListReservations {
    /// Clamp to a 1-based page and a page size within `1..=MAX_PER_PAGE`.
    pub fn normalized(self) -> Self {
        Self {
            page: self.page.max(1),
            per_page: self.per_page.clamp(1, MAX_PER_PAGE),
        }
    }
}

/// Validation result for a reservation about to be saved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReservationValidation {
    Valid,
    MissingGuestName,
    NegativeFees,
    NegativeBasePrice,
    EndsBeforeStart,
}

impl ReservationValidation {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    pub fn error_message(&self) -> Option<&'static str> {
        match self {
            Self::Valid => None,
            Self::MissingGuestName => Some("Guest name is required"),
            Self::NegativeFees => Some("Fees cannot be negative"),
            Self::NegativeBasePrice => Some("Price per night cannot be negative"),
            Self::EndsBeforeStart => Some("End date must not be before start date"),
        }
    }
}

/// Validate a reservation.
///
/// Rules:
/// - guest name must not be blank
/// - fees and base price must be non-negative
/// - when both dates parse, the end date must not precede the start date
pub fn validate_reservation(
    reservation: &ReservationData,
) -> ReservationValidation {
    if reservation.guest_name.trim().is_empty() {
        return ReservationValidation::MissingGuestName;
    }
    if reservation.fees < Decimal::ZERO {
        return ReservationValidation::NegativeFees;
    }
    if reservation.base_price < Decimal::ZERO {
        return ReservationValidation::NegativeBasePrice;
    }
    if let (Ok(start), Ok(end)) = (
        reservation.start_date.parse::<Date>(),
        reservation.end_date.parse::<Date>(),
    ) && end < start
    {
        return ReservationValidation::EndsBeforeStart;
    }
    ReservationValidation::Valid
}
