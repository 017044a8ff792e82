pub mod routes;
pub mod store;
pub mod telemetry;

use actix_cors::Cors;
use actix_web::dev::Server;
use actix_web::{App, HttpServer, web};
use anyhow::Context;
use std::net::TcpListener;
use std::path::PathBuf;

use crate::store::ReservationStore;

/// Build the server, but not await it.
///
/// Returns the port that the server has bound to by modifying the config.
pub fn build(
    config: &mut Config,
    store: ReservationStore,
) -> std::io::Result<Server> {
    let store = web::Data::new(store);

    let allowed_origins = config.allowed_origins.clone();

    // OS assigns the port if binding to 0
    let listener = TcpListener::bind(format!("{}:{}", config.ip, config.port))?;
    config.port = listener.local_addr()?.port();
    let server = HttpServer::new(move || {
        let cors = if allowed_origins.iter().any(|origin| origin == "*") {
            // Allow any origin (for development)
            Cors::default()
                .allow_any_origin()
                .allow_any_method()
                .allow_any_header()
                .supports_credentials()
        } else {
            let mut cors = Cors::default()
                .allow_any_method()
                .allow_any_header()
                .supports_credentials();
            for origin in &allowed_origins {
                cors = cors.allowed_origin(origin);
            }
            cors
        };

        App::new()
            .wrap(cors)
            .service(routes::api_services())
            .app_data(store.clone())
    })
    .listen(listener)?
    .run();
    Ok(server)
}

pub struct Config {
    /// set to "0.0.0.0" for public access, "127.0.0.1" for local dev
    pub ip: String,
    /// set to 0 to get an os-assigned port
    pub port: u16,
    /// List of allowed CORS origins. Use "*" to allow any origin (development only)
    pub allowed_origins: Vec<String>,
    /// Optional JSON file holding an array of reservations to start with
    pub seed_file: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        use std::env::var;

        let allowed_origins = parse_origins(
            &var("ALLOWED_ORIGINS").unwrap_or_else(|_| "*".to_string()),
        );

        Ok(Config {
            ip: var("IP_ADDRESS").context("IP_ADDRESS is not set")?,
            port: var("PORT")
                .context("PORT is not set")?
                .parse()
                .context("PORT is not a valid port number")?,
            allowed_origins,
            seed_file: var("RESERVATIONS_FILE").ok().map(PathBuf::from),
        })
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origins_are_trimmed_and_blank_entries_dropped() {
        assert_eq!(
            parse_origins(" https://a.example, ,https://b.example "),
            vec!["https://a.example", "https://b.example"]
        );
        assert_eq!(parse_origins("*"), vec!["*"]);
        assert!(parse_origins("").is_empty());
    }
}
