//! OpenAPI documentation configuration.
//!
//! This module defines the [`ApiDoc`] struct which generates the OpenAPI
//! document for the REST API. It registers:
//!
//! - **Paths**: the user, exercise, and health endpoints of the inbound layer
//! - **Schemas**: domain responses ([`User`], [`Exercise`], [`ExerciseLog`])
//!   and the request bodies that accept JSON or form input
//!
//! Legacy `/api/exercise/*` aliases serve the same handlers and are not
//! listed separately. The generated document is used by Swagger UI
//! (debug builds) and exported via `cargo run --bin openapi-dump`.

use utoipa::OpenApi;

use crate::domain::{Exercise, ExerciseLog, User};
use crate::inbound::http::exercises::AddExerciseBody;
use crate::inbound::http::users::CreateUserRequest;
use crate::inbound::http::validation::DurationInput;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Exercise tracker API",
        description = "Register users, record exercises, and query filtered exercise logs.",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::list_users,
        crate::inbound::http::exercises::add_exercise,
        crate::inbound::http::exercises::exercise_log,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        User,
        Exercise,
        ExerciseLog,
        CreateUserRequest,
        AddExerciseBody,
        DurationInput
    )),
    tags(
        (name = "users", description = "User registration and listing"),
        (name = "exercises", description = "Exercise recording and logs"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
