use payloads::{ReservationId, requests::ListReservations};
use reqwest::StatusCode;
use rust_decimal::Decimal;
use test_helpers::{assert_status_code, spawn_app};

#[tokio::test]
async fn list_first_page_of_one() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let ana = app.seed_ana().await;

    let page = app
        .client
        .get_reservations(&ListReservations::default())
        .await?;

    assert_eq!(page.page, 1);
    assert_eq!(page.per_page, 25);
    assert_eq!(page.total, 1);
    assert_eq!(page.total_pages, 1);
    assert_eq!(page.data, vec![ana]);
    assert_eq!(page.data[0].total_owed(), Decimal::from(210));

    Ok(())
}

#[tokio::test]
async fn list_pages_through_reservations() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.seed_reservations(60).await;

    let request = ListReservations {
        page: 3,
        per_page: 25,
    };
    let page = app.client.get_reservations(&request).await?;
    assert_eq!(page.total, 60);
    assert_eq!(page.total_pages, 3);
    assert_eq!(page.data.len(), 10);
    assert_eq!(page.data[0].id, ReservationId::from("r051"));

    Ok(())
}

#[tokio::test]
async fn list_clamps_out_of_range_paging() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.seed_reservations(5).await;

    let request = ListReservations {
        page: 0,
        per_page: 500,
    };
    let page = app.client.get_reservations(&request).await?;
    assert_eq!(page.page, 1);
    assert_eq!(page.per_page, 100);
    assert_eq!(page.data.len(), 5);

    Ok(())
}

#[tokio::test]
async fn get_unknown_reservation_is_not_found() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.seed_ana().await;

    let result = app.client.get_reservation(&"missing".into()).await;
    assert_status_code(result, StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
async fn save_persists_edits_and_recomputes_total() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let mut ana = app.seed_ana().await;

    ana.nights = 3;
    ana.site_name = "B2".into();
    // a stale total from the client must not be stored
    ana.total = Decimal::from(1);
    app.client.save_reservation(&ana).await?;

    let stored = app.client.get_reservation(&ana.id).await?;
    assert_eq!(stored.nights, 3);
    assert_eq!(stored.site_name, "B2");
    assert_eq!(stored.total, Decimal::from(310));

    Ok(())
}

#[tokio::test]
async fn save_unknown_reservation_is_not_found() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let mut ana = app.seed_ana().await;
    ana.id = "r404".into();

    let result = app.client.save_reservation(&ana).await;
    assert_status_code(result, StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
async fn save_invalid_reservation_is_rejected_with_message() -> anyhow::Result<()>
{
    let app = spawn_app().await;
    let mut ana = app.seed_ana().await;
    ana.end_date = "2025-06-01".into();

    let error = app.client.save_reservation(&ana).await.unwrap_err();
    assert!(
        error
            .to_string()
            .contains("End date must not be before start date")
    );

    let stored = app.client.get_reservation(&ana.id).await?;
    assert_eq!(stored.end_date, "2025-07-03");

    Ok(())
}
