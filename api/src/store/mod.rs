//! In-memory reservation store.
//!
//! Reservations live in a `BTreeMap` keyed by id behind a tokio `RwLock`, so
//! list order is stable (by id) and every operation sees a consistent
//! snapshot. The stored `total` is always recomputed from its parts on the
//! way in; whatever total the client sends is ignored.

use anyhow::Context;
use payloads::{
    ReservationData, ReservationId,
    requests::{self, ListReservations},
    responses::ReservationPage,
};
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Reservation not found")]
    ReservationNotFound,
    #[error("{0}")]
    Validation(String),
}

#[derive(Clone, Default)]
pub struct ReservationStore {
    reservations: Arc<RwLock<BTreeMap<ReservationId, ReservationData>>>,
}

impl ReservationStore {
    /// Insert or replace reservations without validation. Used for seeding.
    pub async fn insert_reservations(
        &self,
        reservations: impl IntoIterator<Item = ReservationData>,
    ) {
        let mut map = self.reservations.write().await;
        for reservation in reservations {
            let reservation = with_recomputed_total(reservation);
            map.insert(reservation.id.clone(), reservation);
        }
    }

    pub async fn list_reservations(
        &self,
        request: &ListReservations,
    ) -> ReservationPage {
        let ListReservations { page, per_page } = request.normalized();
        let map = self.reservations.read().await;

        let total = map.len() as u64;
        let total_pages = total.div_ceil(per_page as u64).max(1) as u32;
        let skip = (page as usize - 1).saturating_mul(per_page as usize);
        let data = map
            .values()
            .skip(skip)
            .take(per_page as usize)
            .cloned()
            .collect();

        ReservationPage {
            data,
            page,
            per_page,
            total,
            total_pages,
        }
    }

    pub async fn get_reservation(
        &self,
        reservation_id: &ReservationId,
    ) -> Result<ReservationData, StoreError> {
        self.reservations
            .read()
            .await
            .get(reservation_id)
            .cloned()
            .ok_or(StoreError::ReservationNotFound)
    }

    /// Replace an existing reservation, returning the stored record.
    pub async fn save_reservation(
        &self,
        reservation: &ReservationData,
    ) -> Result<ReservationData, StoreError> {
        let validation = requests::validate_reservation(reservation);
        if let Some(message) = validation.error_message() {
            return Err(StoreError::Validation(message.to_string()));
        }

        let mut map = self.reservations.write().await;
        let stored = map
            .get_mut(&reservation.id)
            .ok_or(StoreError::ReservationNotFound)?;
        *stored = with_recomputed_total(reservation.clone());
        Ok(stored.clone())
    }
}

fn with_recomputed_total(mut reservation: ReservationData) -> ReservationData {
    reservation.total = reservation.total_owed();
    reservation
}

/// Read a JSON array of reservations from disk.
pub fn load_seed_file(path: &Path) -> anyhow::Result<Vec<ReservationData>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("parsing {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn reservation(id: &str) -> ReservationData {
        ReservationData {
            id: id.into(),
            guest_name: format!("Guest {id}"),
            nights: 2,
            base_price: Decimal::from(100),
            fees: Decimal::from(10),
            ..Default::default()
        }
    }

    async fn store_with(count: usize) -> ReservationStore {
        let store = ReservationStore::default();
        store
            .insert_reservations(
                (0..count).map(|i| reservation(&format!("r{i:02}"))),
            )
            .await;
        store
    }

    #[tokio::test]
    async fn empty_store_has_one_empty_page() {
        let store = ReservationStore::default();
        let page = store.list_reservations(&ListReservations::default()).await;
        assert!(page.data.is_empty());
        assert_eq!(page.total, 0);
        assert_eq!(page.total_pages, 1);
    }

    #[tokio::test]
    async fn pages_are_ordered_by_id_and_sized() {
        let store = store_with(23).await;
        let request = ListReservations {
            page: 3,
            per_page: 10,
        };
        let page = store.list_reservations(&request).await;
        assert_eq!(page.total, 23);
        assert_eq!(page.total_pages, 3);
        let ids: Vec<_> = page.data.iter().map(|r| r.id.0.as_str()).collect();
        assert_eq!(ids, ["r20", "r21", "r22"]);
    }

    #[tokio::test]
    async fn page_past_the_end_is_empty() {
        let store = store_with(5).await;
        let request = ListReservations {
            page: 9,
            per_page: 10,
        };
        let page = store.list_reservations(&request).await;
        assert!(page.data.is_empty());
        assert_eq!(page.page, 9);
        assert_eq!(page.total_pages, 1);
    }

    #[tokio::test]
    async fn seeding_recomputes_total() {
        let mut seeded = reservation("r1");
        seeded.total = Decimal::from(1);
        let store = ReservationStore::default();
        store.insert_reservations([seeded]).await;
        let stored = store.get_reservation(&"r1".into()).await.unwrap();
        assert_eq!(stored.total, Decimal::from(210));
    }

    #[tokio::test]
    async fn save_replaces_existing_and_ignores_client_total() {
        let store = store_with(1).await;
        let mut edited = reservation("r00");
        edited.nights = 3;
        edited.total = Decimal::ZERO;
        let saved = store.save_reservation(&edited).await.unwrap();
        assert_eq!(saved.total, Decimal::from(310));
        assert_eq!(
            store.get_reservation(&"r00".into()).await.unwrap().nights,
            3
        );
    }

    #[tokio::test]
    async fn save_unknown_id_is_not_found() {
        let store = store_with(1).await;
        let result = store.save_reservation(&reservation("nope")).await;
        assert!(matches!(result, Err(StoreError::ReservationNotFound)));
    }

    #[tokio::test]
    async fn save_rejects_invalid_reservation() {
        let store = store_with(1).await;
        let mut edited = reservation("r00");
        edited.guest_name.clear();
        let result = store.save_reservation(&edited).await;
        match result {
            Err(StoreError::Validation(message)) => {
                assert_eq!(message, "Guest name is required");
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }
}
