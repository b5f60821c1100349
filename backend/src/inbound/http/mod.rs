//! HTTP inbound adapter exposing REST endpoints.

use actix_web::{Either, web};

pub mod error;
pub mod exercises;
pub mod health;
pub mod routes;
pub mod state;
#[cfg(test)]
pub(crate) mod test_utils;
pub mod users;
pub mod validation;

pub use error::ApiResult;

/// Request body accepted either as JSON or as an urlencoded form.
pub type JsonOrForm<T> = Either<web::Json<T>, web::Form<T>>;
