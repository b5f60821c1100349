//! Wiring of in-memory adapters into domain services and HTTP state.

use std::sync::Arc;

use actix_web::web;

use crate::domain::{ExerciseLogService, ExerciseService, UserService};
use crate::inbound::http::state::{HttpState, HttpStatePorts};
use crate::outbound::identifiers::ShortIdGenerator;
use crate::outbound::persistence::{InMemoryExerciseRepository, InMemoryUserRepository};
use crate::server::ServerConfig;

/// Build handler state over fresh in-memory stores.
///
/// Each call yields independent stores; the server calls it once and shares
/// the result across workers. Username lookups from both exercise services go
/// through the user service.
pub fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let exercises = Arc::new(InMemoryExerciseRepository::new());
    let user_service = Arc::new(UserService::new(
        Arc::new(InMemoryUserRepository::new()),
        Arc::new(ShortIdGenerator::new()),
    ));

    web::Data::new(HttpState::new(HttpStatePorts {
        users: user_service.clone(),
        users_query: user_service.clone(),
        exercises: Arc::new(ExerciseService::new(
            Arc::clone(&exercises),
            Arc::clone(&user_service),
            Arc::clone(&config.clock),
        )),
        exercise_log: Arc::new(ExerciseLogService::new(exercises, user_service)),
    }))
}
