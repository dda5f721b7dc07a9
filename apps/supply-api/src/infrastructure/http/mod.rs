//! HTTP adapter: axum router, handlers, and response DTOs.

mod controller;
mod error;
mod response;

pub use controller::create_router;
pub use error::ApiError;
pub use response::{ErrorBody, HealthResponse};
