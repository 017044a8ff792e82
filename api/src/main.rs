use api::{
    Config, build,
    store::{self, ReservationStore},
    telemetry::{get_subscriber, init_subscriber, log_error},
};

/// Reservations API Server
///
/// Environment variables can be set directly or loaded from a .env file in
/// the project root.
///
/// Required environment variables:
/// - IP_ADDRESS: Server bind address (127.0.0.1 for local, 0.0.0.0 for public)
/// - PORT: Server port
///
/// Optional:
/// - ALLOWED_ORIGINS: CORS origins ("*" for any origin, the default, or a
///   comma-separated list for production)
/// - RESERVATIONS_FILE: JSON array of reservations to load at startup
///
/// Example .env file:
/// IP_ADDRESS=127.0.0.1
/// PORT=8000
/// ALLOWED_ORIGINS=*
/// RESERVATIONS_FILE=reservations.json
#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Silently ignore a missing .env file
    let _ = dotenvy::dotenv();

    let subscriber = get_subscriber("info".into());
    init_subscriber(subscriber)?;

    let mut config = Config::from_env()?;

    let reservation_store = ReservationStore::default();
    if let Some(path) = &config.seed_file {
        match store::load_seed_file(path) {
            Ok(reservations) => {
                tracing::info!(
                    "Loaded {} reservations from {}",
                    reservations.len(),
                    path.display()
                );
                reservation_store.insert_reservations(reservations).await;
            }
            Err(e) => log_error(e),
        }
    }

    let server = build(&mut config, reservation_store)?;
    tracing::info!("Listening on {}:{}", config.ip, config.port);
    server.await?;
    Ok(())
}
