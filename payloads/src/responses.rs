use serde::{Deserialize, Serialize};

use crate::ReservationData;

/// One page of reservations along with paging metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationPage {
    pub data: Vec<ReservationData>,
    pub page: u32,
    pub per_page: u32,
    /// Number of reservations across all pages
    pub total: u64,
    /// Always at least 1, even when there are no reservations
    pub total_pages: u32,
}
