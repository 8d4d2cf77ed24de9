use std::sync::Once;

use prometheus::{IntCounter, IntGauge, Registry};

lazy_static! {
    pub static ref REGISTRY: Registry = Registry::new();
    pub static ref OPEN_DB_CONNECTIONS: IntGauge = IntGauge::new(
        "rollcall_open_db_connections",
        "Database connections currently open"
    )
    .expect("metric cannot be created");
    pub static ref DB_CONNECTION_FAILURES: IntCounter = IntCounter::new(
        "rollcall_db_connection_failures_total",
        "Failed attempts to open a database connection"
    )
    .expect("metric cannot be created");
    pub static ref DB_QUERY_FAILURES: IntCounter = IntCounter::new(
        "rollcall_db_query_failures_total",
        "Failed queries against the users table"
    )
    .expect("metric cannot be created");
}

static REGISTER: Once = Once::new();

/// Several servers can share a process (tests), so only the first call registers.
pub fn register_metrics() {
    REGISTER.call_once(|| {
        REGISTRY
            .register(Box::new(OPEN_DB_CONNECTIONS.clone()))
            .expect("collector cannot be registered");

        REGISTRY
            .register(Box::new(DB_CONNECTION_FAILURES.clone()))
            .expect("collector cannot be registered");

        REGISTRY
            .register(Box::new(DB_QUERY_FAILURES.clone()))
            .expect("collector cannot be registered");
    });
}
