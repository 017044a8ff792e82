pub mod api_client;
pub mod requests;
pub mod responses;

pub use api_client::{APIClient, ClientError};

use derive_more::Display;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Default,
    Display,
    Serialize,
    Deserialize,
)]
#[serde(transparent)]
pub struct ReservationId(pub String);

impl From<&str> for ReservationId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// A single stay at a site.
///
/// The backend owns these records; the UI only ever holds transient copies
/// while listing or editing. Every field except the id falls back to its
/// default when missing from a payload.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationData {
    pub id: ReservationId,
    #[serde(default)]
    pub guest_name: String,
    #[serde(default)]
    pub site_name: String,
    /// ISO date, e.g. "2025-07-04"
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    /// HH:MM
    #[serde(default)]
    pub checkin_time: String,
    #[serde(default)]
    pub checkout_time: String,
    #[serde(default)]
    pub nights: u32,
    #[serde(default)]
    pub fees: Decimal,
    /// Price per night
    #[serde(default)]
    pub base_price: Decimal,
    /// Stored total. Never trusted for display, see [`total_owed`].
    ///
    /// [`total_owed`]: ReservationData::total_owed
    #[serde(default)]
    pub total: Decimal,
}

impl ReservationData {
    /// The amount owed for the stay, recomputed from its parts.
    pub fn total_owed(&self) -> Decimal {
        compute_total(self.base_price, self.nights, self.fees)
    }

    /// Case-insensitive substring match against guest name, site name, and
    /// id. An empty query matches everything.
    pub fn matches_search(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        let needle = query.to_lowercase();
        [&self.guest_name, &self.site_name, &self.id.0]
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}

/// `base_price * nights + fees`
pub fn compute_total(base_price: Decimal, nights: u32, fees: Decimal) -> Decimal {
    base_price * Decimal::from(nights) + fees
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::dec;

    fn ana() -> ReservationData {
        ReservationData {
            id: "r1".into(),
            guest_name: "Ana".into(),
            site_name: "A1".into(),
            base_price: dec!(100),
            nights: 2,
            fees: dec!(10),
            ..Default::default()
        }
    }

    #[test]
    fn total_owed_ignores_stored_total() {
        let mut reservation = ana();
        reservation.total = dec!(999);
        assert_eq!(reservation.total_owed(), dec!(210));
    }

    #[test]
    fn total_owed_with_zero_nights_is_just_fees() {
        let reservation = ReservationData {
            nights: 0,
            ..ana()
        };
        assert_eq!(reservation.total_owed(), dec!(10));
    }

    #[test]
    fn total_owed_keeps_cents() {
        let reservation = ReservationData {
            base_price: dec!(49.99),
            nights: 3,
            fees: dec!(0.5),
            ..ana()
        };
        assert_eq!(reservation.total_owed(), dec!(150.47));
    }

    #[test]
    fn search_matches_name_site_and_id_case_insensitively() {
        let reservation = ana();
        assert!(reservation.matches_search(""));
        assert!(reservation.matches_search("aNa"));
        assert!(reservation.matches_search("a1"));
        assert!(reservation.matches_search("R1"));
        assert!(!reservation.matches_search("bob"));
    }

    #[test]
    fn missing_fields_default_when_deserializing() {
        let reservation: ReservationData = serde_json::from_str(
            r#"{"id":"r1","guestName":"Ana","nights":2,"fees":10,"basePrice":100}"#,
        )
        .unwrap();
        assert_eq!(reservation.site_name, "");
        assert_eq!(reservation.start_date, "");
        assert_eq!(reservation.total, Decimal::ZERO);
        assert_eq!(reservation.total_owed(), dec!(210));
    }

    #[test]
    fn serializes_camel_case() {
        let json = serde_json::to_value(ana()).unwrap();
        assert_eq!(json["guestName"], "Ana");
        assert_eq!(json["id"], "r1");
        assert!(json.get("basePrice").is_some());
        assert!(json.get("checkoutTime").is_some());
    }
}
