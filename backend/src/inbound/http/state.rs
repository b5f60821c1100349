//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{ExerciseLogQuery, ExercisesCommand, UsersCommand, UsersQuery};

/// Parameter object bundling all port implementations for HTTP handlers.
#[derive(Clone)]
pub struct HttpStatePorts {
    /// User registration.
    pub users: Arc<dyn UsersCommand>,
    /// User listing.
    pub users_query: Arc<dyn UsersQuery>,
    /// Exercise recording.
    pub exercises: Arc<dyn ExercisesCommand>,
    /// Exercise log queries.
    pub exercise_log: Arc<dyn ExerciseLogQuery>,
}

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// User registration.
    pub users: Arc<dyn UsersCommand>,
    /// User listing.
    pub users_query: Arc<dyn UsersQuery>,
    /// Exercise recording.
    pub exercises: Arc<dyn ExercisesCommand>,
    /// Exercise log queries.
    pub exercise_log: Arc<dyn ExerciseLogQuery>,
}

impl From<HttpStatePorts> for HttpState {
    fn from(ports: HttpStatePorts) -> Self {
        Self::new(ports)
    }
}

impl HttpState {
    /// Construct state from a ports bundle.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use exercise_tracker::domain::{ExerciseLogService, ExerciseService, UserService};
    /// use exercise_tracker::inbound::http::state::{HttpState, HttpStatePorts};
    /// use exercise_tracker::outbound::identifiers::ShortIdGenerator;
    /// use exercise_tracker::outbound::persistence::{
    ///     InMemoryExerciseRepository, InMemoryUserRepository,
    /// };
    /// use mockable::DefaultClock;
    ///
    /// let exercises = Arc::new(InMemoryExerciseRepository::new());
    /// let user_service = Arc::new(UserService::new(
    ///     Arc::new(InMemoryUserRepository::new()),
    ///     Arc::new(ShortIdGenerator::new()),
    /// ));
    /// let state = HttpState::new(HttpStatePorts {
    ///     users: user_service.clone(),
    ///     users_query: user_service.clone(),
    ///     exercises: Arc::new(ExerciseService::new(
    ///         exercises.clone(),
    ///         user_service.clone(),
    ///         Arc::new(DefaultClock),
    ///     )),
    ///     exercise_log: Arc::new(ExerciseLogService::new(exercises, user_service)),
    /// });
    /// let _users = state.users.clone();
    /// ```
    pub fn new(ports: HttpStatePorts) -> Self {
        let HttpStatePorts {
            users,
            users_query,
            exercises,
            exercise_log,
        } = ports;
        Self {
            users,
            users_query,
            exercises,
            exercise_log,
        }
    }
}
