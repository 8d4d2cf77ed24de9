use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Could not connect to the database. Error: '{0}'.")]
    Connection(#[source] sqlx::Error),
    #[error("The database query failed. Error: '{0}'.")]
    Query(#[source] sqlx::Error),
    #[error("Invalid configuration. Error: '{0}'.")]
    Configuration(String),
    #[error("The web server stopped unexpectedly. Error: '{0}'.")]
    Server(#[source] std::io::Error),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        log::error!("{self}");
        // Clients only get a generic server error, the details stay in the logs.
        StatusCode::INTERNAL_SERVER_ERROR.into_response()
    }
}
