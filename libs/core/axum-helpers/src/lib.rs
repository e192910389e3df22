//! # Axum Helpers
//!
//! A collection of utilities and helpers shared by Axum-based services.
//!
//! ## Modules
//!
//! - **[`errors`]**: Structured error responses with error codes
//! - **[`extractors`]**: Custom extractors (validated JSON)
//! - **[`server`]**: Server setup, health checks, graceful shutdown

pub mod errors;
pub mod extractors;
pub mod server;

// Re-export error types
pub use errors::{AppError, ErrorCode, ErrorResponse};

// Re-export extractors
pub use extractors::ValidatedJson;

// Re-export server types
pub use server::{
    HealthCheckFuture, HealthResponse, create_app, create_router, health_router,
    run_health_checks, shutdown_signal,
};
