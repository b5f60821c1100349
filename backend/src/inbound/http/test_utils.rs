//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};

use super::routes::{configure, not_found};
use super::state::{HttpState, HttpStatePorts};
use crate::domain::ports::{
    MockExerciseLogQuery, MockExercisesCommand, MockUsersCommand, MockUsersQuery,
};

/// Driving-port mocks; set expectations, then turn them into an app.
#[derive(Default)]
pub struct MockPorts {
    pub users: MockUsersCommand,
    pub users_query: MockUsersQuery,
    pub exercises: MockExercisesCommand,
    pub exercise_log: MockExerciseLogQuery,
}

impl MockPorts {
    /// Wrap the mocks in shared handler state.
    pub fn into_state(self) -> web::Data<HttpState> {
        web::Data::new(HttpState::new(HttpStatePorts {
            users: Arc::new(self.users),
            users_query: Arc::new(self.users_query),
            exercises: Arc::new(self.exercises),
            exercise_log: Arc::new(self.exercise_log),
        }))
    }

    /// Build an app serving every route against the mocks.
    pub fn into_app(
        self,
    ) -> App<
        impl ServiceFactory<
            ServiceRequest,
            Config = (),
            Response = ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(self.into_state())
            .configure(configure)
            .default_service(web::route().to(not_found))
    }
}
