//! # HTTP Layer
//!
//! Route groups, error translation, and the server lifecycle.

pub mod error;
pub mod routes;
pub mod server;

pub use error::{ApiError, ApiResult, ErrorResponse};
pub use routes::resource_routes;
pub use server::{build_router, HttpServer};
