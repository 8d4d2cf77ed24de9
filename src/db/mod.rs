pub mod users;


use std::ops::{Deref, DerefMut};
use std::str::FromStr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection};
use sqlx::{ConnectOptions, Connection};

use crate::config::DatabaseSettings;
use crate::error::Error;
use crate::metrics;

/// Opens a fresh database connection on every call. There is no pool: each
/// request owns its connection for exactly as long as it needs it.
pub struct ConnectionProvider {
    options: SqliteConnectOptions,
    open_connections: Arc<AtomicUsize>,
}

impl ConnectionProvider {
    pub fn new(settings: &DatabaseSettings) -> Result<ConnectionProvider, Error> {
        // sqlx reads anything after an optional `sqlite:` prefix as a filename.
        if !settings.url.starts_with("sqlite:") {
            return Err(Error::Configuration(format!(
                "The database url must use the `sqlite:` scheme. Url: '{}'.",
                settings.url
            )));
        }

        let options = SqliteConnectOptions::from_str(&settings.url)
            .map_err(|error| {
                Error::Configuration(format!(
                    "Invalid database url. Url: '{}', Error: '{error}'.",
                    settings.url
                ))
            })?
            .create_if_missing(false);

        Ok(ConnectionProvider {
            options,
            open_connections: Arc::new(AtomicUsize::new(0)),
        })
    }

    pub async fn connect(&self) -> Result<ConnectionLease, Error> {
        let connection = self.options.connect().await.map_err(|error| {
            metrics::DB_CONNECTION_FAILURES.inc();
            Error::Connection(error)
        })?;

        Ok(ConnectionLease {
            connection,
            _slot: LeaseSlot::acquire(self.open_connections.clone()),
        })
    }

    /// Leases handed out by this provider that have not been closed or dropped yet.
    pub fn open_connections(&self) -> usize {
        self.open_connections.load(Ordering::SeqCst)
    }
}

/// An open connection. Dropping the lease releases the connection too, so an
/// early return or a cancelled request never leaves it behind.
pub struct ConnectionLease {
    connection: SqliteConnection,
    _slot: LeaseSlot,
}

impl ConnectionLease {
    pub async fn close(self) -> Result<(), Error> {
        let ConnectionLease { connection, _slot } = self;
        connection.close().await.map_err(Error::Connection)
    }
}

impl Deref for ConnectionLease {
    type Target = SqliteConnection;

    fn deref(&self) -> &Self::Target {
        &self.connection
    }
}

impl DerefMut for ConnectionLease {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.connection
    }
}

struct LeaseSlot {
    open_connections: Arc<AtomicUsize>,
}

impl LeaseSlot {
    fn acquire(open_connections: Arc<AtomicUsize>) -> LeaseSlot {
        open_connections.fetch_add(1, Ordering::SeqCst);
        metrics::OPEN_DB_CONNECTIONS.inc();
        LeaseSlot { open_connections }
    }
}

impl Drop for LeaseSlot {
    fn drop(&mut self) {
        self.open_connections.fetch_sub(1, Ordering::SeqCst);
        metrics::OPEN_DB_CONNECTIONS.dec();
    }
}
