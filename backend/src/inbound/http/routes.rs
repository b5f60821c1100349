//! Route table for the REST surface.
//!
//! Every handler is mounted at its primary path and at a legacy alias under
//! `/api/exercise`. Requests that match a path but not a method fall through
//! to [`not_found`], exactly like unknown paths.

use actix_web::{HttpResponse, Resource, web};

use crate::domain::Error;
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::{form_error_handler, json_error_handler, query_error_handler};
use crate::inbound::http::exercises::{add_exercise, exercise_log};
use crate::inbound::http::users::{create_user, list_users};

/// Plain-text body returned for unmatched routes.
pub const NOT_FOUND_MESSAGE: &str = "not found";

/// Primary path for user registration and listing.
pub const USERS_PATH: &str = "/users";
/// Primary path for recording exercises.
pub const EXERCISES_PATH: &str = "/exercises";
/// Primary path for exercise log queries.
pub const EXERCISE_LOG_PATH: &str = "/exercises/log";

const LEGACY_NEW_USER_PATH: &str = "/api/exercise/new-user";
const LEGACY_USERS_PATH: &str = "/api/exercise/users";
const LEGACY_ADD_PATH: &str = "/api/exercise/add";
const LEGACY_LOG_PATH: &str = "/api/exercise/log";

/// Fallback handler for unmatched routes and methods.
pub async fn not_found() -> ApiResult<HttpResponse> {
    Err(Error::not_found(NOT_FOUND_MESSAGE))
}

fn resource(path: &str) -> Resource {
    web::resource(path).default_service(web::route().to(not_found))
}

/// Register extractor configuration and every REST route.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use exercise_tracker::inbound::http::routes::configure;
///
/// let app = App::new().configure(configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::FormConfig::default().error_handler(form_error_handler))
        .app_data(web::QueryConfig::default().error_handler(query_error_handler))
        .service(
            resource(USERS_PATH)
                .route(web::post().to(create_user))
                .route(web::get().to(list_users)),
        )
        .service(resource(EXERCISES_PATH).route(web::post().to(add_exercise)))
        .service(resource(EXERCISE_LOG_PATH).route(web::get().to(exercise_log)))
        .service(resource(LEGACY_NEW_USER_PATH).route(web::post().to(create_user)))
        .service(resource(LEGACY_USERS_PATH).route(web::get().to(list_users)))
        .service(resource(LEGACY_ADD_PATH).route(web::post().to(add_exercise)))
        .service(resource(LEGACY_LOG_PATH).route(web::get().to(exercise_log)));
}
