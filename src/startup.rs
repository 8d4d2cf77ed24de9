use crate::config::Config;
use crate::db::ConnectionProvider;
use crate::error::Error;
use crate::{metrics, routes};
use std::sync::Arc;
use tokio::net::TcpListener;

/// Serves the app on an already bound listener until the server stops.
pub async fn create_web_server(config: Config, listener: TcpListener) -> Result<(), Error> {
    metrics::register_metrics();
    let connection_provider = Arc::new(ConnectionProvider::new(&config.database)?);

    let router = routes::create_router(&config).with_state(connection_provider);

    match listener.local_addr() {
        Ok(address) => log::info!("Listening on {address}"),
        Err(error) => log::warn!("Could not read the listening address. Error: '{error}'."),
    }
    axum::serve(listener, router).await.map_err(Error::Server)
}
