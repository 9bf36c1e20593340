use std::net::SocketAddr;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use journey_server::events::{
    CacheConfig, CachedEvents, EventsApiClient, EventsApiConfig, FixtureEvents,
};
use journey_server::search::SearchLimits;
use journey_server::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let limits = SearchLimits::default();

    // Pick the events source: real API when a URL is configured, a file
    // fixture when one is given, the built-in fixture otherwise. Each
    // branch bakes its source type into the router.
    let app = if let Ok(base_url) = std::env::var("FLIGHT_EVENTS_URL") {
        let mut config = EventsApiConfig::new(&base_url);
        if let Ok(key) = std::env::var("FLIGHT_EVENTS_API_KEY") {
            config = config.with_api_key(key);
        }
        let client = EventsApiClient::new(config).expect("Failed to create events client");

        let mut cache_config = CacheConfig::default();
        if let Some(ttl_secs) = env_u64("FLIGHT_EVENTS_CACHE_TTL_SECS") {
            cache_config.ttl = Duration::from_secs(ttl_secs);
        }
        let cached = CachedEvents::new(client, &cache_config);

        info!(url = %base_url, "using flight events API");
        create_router(AppState::new(cached, limits))
    } else if let Ok(path) = std::env::var("FLIGHT_EVENTS_FIXTURE") {
        let fixture = FixtureEvents::from_file(&path).expect("Failed to load events fixture");

        info!(path = %path, count = fixture.len(), "using file events fixture");
        create_router(AppState::new(fixture, limits))
    } else {
        info!("FLIGHT_EVENTS_URL not set, using built-in events fixture");
        create_router(AppState::new(FixtureEvents::builtin(), limits))
    };

    // Bind and serve
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(3000);
    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    info!("Flight journey search listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}

/// Read an env var as u64, ignoring unset or unparseable values.
fn env_u64(name: &str) -> Option<u64> {
    std::env::var(name).ok().and_then(|v| v.parse().ok())
}
