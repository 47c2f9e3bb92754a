//! Backend entry-point: reads settings, builds the pool and serves the API.

mod server;

use actix_web::web;
use mockable::DefaultEnv;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use backend::inbound::http::health::HealthState;
use backend::outbound::persistence::DbPool;
use server::{ServerSettings, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::from_env(&DefaultEnv::new()).map_err(|err| {
        error!(error = %err, "invalid server configuration");
        std::io::Error::other(err)
    })?;

    let pool = DbPool::new(settings.pool_config())
        .await
        .map_err(std::io::Error::other)?;

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), &settings, &pool)?;
    info!(addr = %settings.bind_addr, "server listening");

    let outcome = server.await;

    health_state.mark_unhealthy();
    info!(
        open_connections = pool.open_connections(),
        "server stopped; closing database pool"
    );
    drop(pool);
    outcome
}
