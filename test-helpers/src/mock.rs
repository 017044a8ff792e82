//! Demo reservation data for the development server.
//!
//! Stays are spread around today's date so the list shows a mix of past,
//! current, and upcoming reservations across a handful of campsites and
//! cabins, with enough rows to exercise every page size.

use crate::TestApp;
use anyhow::Result;
use jiff::{ToSpan, Zoned, civil::Date};
use payloads::{ReservationData, ReservationId};
use rust_decimal::Decimal;

const GUESTS: [&str; 12] = [
    "Ana Souza",
    "Bruno Lima",
    "Carla Mendes",
    "Diego Alves",
    "Elena Rossi",
    "Farah Khan",
    "Gustavo Reis",
    "Hana Sato",
    "Igor Petrov",
    "Julia Costa",
    "Kwame Mensah",
    "Lucia Ortega",
];

/// (site name, nightly price in whole dollars)
const SITES: [(&str, i64); 6] = [
    ("Tent A1", 35),
    ("Tent A2", 35),
    ("RV Hookup B4", 55),
    ("Lakeside C1", 80),
    ("Cabin Pine", 140),
    ("Cabin Spruce", 165),
];

pub struct DevDataset {
    pub reservations: Vec<ReservationData>,
}

impl DevDataset {
    /// Builds `count` reservations around `today` and loads them into the
    /// app's store.
    pub async fn create(app: &TestApp, count: usize) -> Result<Self> {
        let today = Zoned::now().date();
        let reservations = demo_reservations(today, count)?;
        app.store.insert_reservations(reservations.clone()).await;
        tracing::info!("🏕️ Seeded {} reservations", reservations.len());
        Ok(Self { reservations })
    }

    pub fn print_summary(&self) {
        let today = Zoned::now().date();
        let upcoming = self
            .reservations
            .iter()
            .filter_map(|r| r.start_date.parse::<Date>().ok())
            .filter(|start| *start >= today)
            .count();
        tracing::info!("📋 Development dataset:");
        tracing::info!(
            "   {} reservations, {} starting today or later",
            self.reservations.len(),
            upcoming
        );
        if let Some(first) = self.reservations.first() {
            tracing::info!(
                "   e.g. {}: {} at {}",
                first.id,
                first.guest_name,
                first.site_name
            );
        }
    }
}

pub fn demo_reservations(
    today: Date,
    count: usize,
) -> Result<Vec<ReservationData>> {
    (0..count)
        .map(|i| -> Result<ReservationData> {
            let (site_name, price) = SITES[i % SITES.len()];
            let nights = (i % 6) as u32 + 1;
            // spread starts from three weeks ago to five weeks out
            let offset = (i as i64 * 3) % 56 - 21;
            let start = today.checked_add(offset.days())?;
            let end = start.checked_add((nights as i64).days())?;
            let fees = Decimal::new((i % 4) as i64 * 1250, 2);

            Ok(ReservationData {
                id: ReservationId(format!("res-{:04}", 1001 + i)),
                guest_name: GUESTS[i % GUESTS.len()].to_string(),
                site_name: site_name.to_string(),
                start_date: start.to_string(),
                end_date: end.to_string(),
                checkin_time: "15:00".into(),
                checkout_time: "11:00".into(),
                nights,
                fees,
                base_price: Decimal::from(price),
                total: Decimal::ZERO,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::civil::date;

    #[test]
    fn demo_stays_end_after_their_nights() {
        let reservations = demo_reservations(date(2025, 7, 1), 30).unwrap();
        assert_eq!(reservations.len(), 30);
        for reservation in &reservations {
            let start: Date = reservation.start_date.parse().unwrap();
            let end: Date = reservation.end_date.parse().unwrap();
            assert_eq!(
                start.until(end).unwrap().get_days(),
                reservation.nights as i32
            );
            assert!(
                payloads::requests::validate_reservation(reservation)
                    .is_valid()
            );
        }
    }

    #[test]
    fn demo_ids_are_unique() {
        let reservations = demo_reservations(date(2025, 7, 1), 120).unwrap();
        let mut ids: Vec<_> = reservations.iter().map(|r| &r.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 120);
    }
}
