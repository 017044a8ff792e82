pub mod mock;

use api::{Config, store::ReservationStore, telemetry};
use payloads::{ReservationData, ReservationId};
use reqwest::StatusCode;
use rust_decimal::Decimal;
use tracing_log::LogTracer;
use tracing_subscriber::util::SubscriberInitExt;

pub struct TestApp {
    #[allow(unused)]
    pub port: u16,
    pub client: payloads::APIClient,
    /// Direct handle on the server's store, for seeding and inspection
    pub store: ReservationStore,
}

impl TestApp {
    /// Seed `count` sequential reservations with ids `r001`, `r002`, ...
    pub async fn seed_reservations(&self, count: usize) -> Vec<ReservationData> {
        let reservations: Vec<_> =
            (1..=count).map(numbered_reservation).collect();
        self.store.insert_reservations(reservations.clone()).await;
        reservations
    }

    /// Seed the reservation used throughout the scenario tests.
    pub async fn seed_ana(&self) -> ReservationData {
        let reservation = reservation_ana();
        self.store.insert_reservations([reservation.clone()]).await;
        reservation
    }
}

pub async fn spawn_app_on_port(port: u16) -> TestApp {
    let subscriber = telemetry::get_subscriber("error".into());
    let _ = LogTracer::init();
    let _ = subscriber.try_init();

    let store = ReservationStore::default();
    let mut config = Config {
        ip: "127.0.0.1".into(),
        port,
        allowed_origins: vec!["*".to_string()],
        seed_file: None,
    };

    let server = api::build(&mut config, store.clone()).unwrap();
    tokio::spawn(server);

    TestApp {
        port: config.port,
        client: payloads::APIClient {
            address: format!("http://127.0.0.1:{}", config.port),
            inner_client: reqwest::Client::new(),
        },
        store,
    }
}

/// Use OS-assigned port for parallel testing.
pub async fn spawn_app() -> TestApp {
    spawn_app_on_port(0).await
}

/// Assert that the result of an API action results in a specific status code.
pub fn assert_status_code<T>(
    result: Result<T, payloads::ClientError>,
    expected: StatusCode,
) {
    match result {
        Err(payloads::ClientError::APIError(code, _)) => {
            assert_eq!(code, expected)
        }
        _ => panic!("Expected APIError"),
    };
}

/// Guest "Ana" at site "A1": 2 nights at 100 plus 10 in fees.
pub fn reservation_ana() -> ReservationData {
    ReservationData {
        id: ReservationId::from("r1"),
        guest_name: "Ana".into(),
        site_name: "A1".into(),
        start_date: "2025-07-01".into(),
        end_date: "2025-07-03".into(),
        checkin_time: "15:00".into(),
        checkout_time: "11:00".into(),
        nights: 2,
        fees: Decimal::from(10),
        base_price: Decimal::from(100),
        total: Decimal::from(210),
    }
}

pub fn numbered_reservation(n: usize) -> ReservationData {
    ReservationData {
        id: ReservationId(format!("r{n:03}")),
        guest_name: format!("Guest {n}"),
        site_name: format!("Site {}", n % 7),
        nights: (n % 5) as u32 + 1,
        base_price: Decimal::from(40 + (n % 3) as i64 * 15),
        fees: Decimal::from(5),
        ..Default::default()
    }
}
