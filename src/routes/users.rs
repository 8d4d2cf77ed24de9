use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::db::users::{self, User};
use crate::db::ConnectionProvider;
use crate::error::Error;

#[derive(Serialize)]
pub(crate) struct ListUsersResponse {
    users: Vec<User>,
}

pub async fn list(
    State(connection_provider): State<Arc<ConnectionProvider>>,
) -> Result<Json<ListUsersResponse>, Error> {
    let users = users::find_all(&connection_provider).await?;
    Ok(Json(ListUsersResponse { users }))
}
