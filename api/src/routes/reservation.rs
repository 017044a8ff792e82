use actix_web::{HttpResponse, post, web};
use payloads::{ReservationData, ReservationId, requests};

use crate::store::ReservationStore;

use super::APIError;

#[tracing::instrument(skip(store))]
#[post("/reservations")]
pub async fn list_reservations(
    details: web::Json<requests::ListReservations>,
    store: web::Data<ReservationStore>,
) -> Result<HttpResponse, APIError> {
    let page = store.list_reservations(&details).await;
    tracing::debug!(
        rows = page.data.len(),
        total = page.total,
        "listed reservations"
    );
    Ok(HttpResponse::Ok().json(page))
}

#[tracing::instrument(skip(store), ret)]
#[post("/get_reservation")]
pub async fn get_reservation(
    reservation_id: web::Json<ReservationId>,
    store: web::Data<ReservationStore>,
) -> Result<HttpResponse, APIError> {
    let reservation = store.get_reservation(&reservation_id).await?;
    Ok(HttpResponse::Ok().json(reservation))
}

#[tracing::instrument(skip(store), ret)]
#[post("/reservation")]
pub async fn save_reservation(
    details: web::Json<ReservationData>,
    store: web::Data<ReservationStore>,
) -> Result<HttpResponse, APIError> {
    store.save_reservation(&details).await?;
    Ok(HttpResponse::Ok().finish())
}
