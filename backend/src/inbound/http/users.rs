//! Users API handlers.
//!
//! ```text
//! POST /users {"username":"alice"}
//! GET /users
//! ```

use actix_web::{HttpResponse, web};
use serde::{Deserialize, Serialize};
use tracing::debug;
use utoipa::ToSchema;

use crate::domain::User;
use crate::inbound::http::ApiResult;
use crate::inbound::http::JsonOrForm;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::parse_username;

/// Request body for `POST /users`, sent as JSON or as a form.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct CreateUserRequest {
    /// Display name; surrounding whitespace is trimmed.
    #[schema(example = "alice")]
    #[serde(default)]
    pub username: Option<String>,
}

/// Register a user under a freshly generated id.
#[utoipa::path(
    post,
    path = "/users",
    request_body(content(
        (CreateUserRequest = "application/json"),
        (CreateUserRequest = "application/x-www-form-urlencoded")
    )),
    responses(
        (status = 201, description = "User created", body = User),
        (status = 400, description = "Invalid request", body = String, content_type = "text/plain"),
        (status = 500, description = "Internal server error", body = String, content_type = "text/plain")
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: JsonOrForm<CreateUserRequest>,
) -> ApiResult<HttpResponse> {
    let username = parse_username(payload.into_inner().username)?;
    let user = state.users.create_user(username).await?;
    Ok(HttpResponse::Created().json(user))
}

/// List every registered user in registration order.
#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "Users", body = [User]),
        (status = 500, description = "Internal server error", body = String, content_type = "text/plain")
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<User>>> {
    let users = state.users_query.list_users().await?;
    debug!(count = users.len(), "listed users");
    Ok(web::Json(users))
}
