use serde::Serialize;
use sqlx::FromRow;

use crate::db::ConnectionProvider;
use crate::error::Error;
use crate::metrics;

/// One row of the `users` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: Option<String>,
}

const SELECT_ALL_USERS: &str = "SELECT * FROM users";

/// Returns every user in table iteration order.
pub async fn find_all(provider: &ConnectionProvider) -> Result<Vec<User>, Error> {
    let mut connection = provider.connect().await?;

    let users = sqlx::query_as::<_, User>(SELECT_ALL_USERS)
        .fetch_all(&mut *connection)
        .await
        .map_err(|error| {
            metrics::DB_QUERY_FAILURES.inc();
            Error::Query(error)
        });

    // Closed on both paths, a failed query must not keep the connection around.
    if let Err(error) = connection.close().await {
        log::warn!("Could not close the database connection after listing users. Error: '{error}'.");
    }

    users
}
