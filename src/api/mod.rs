//! API Module
//!
//! HTTP handlers and routing for the matching-service REST API.
//!
//! # Endpoints
//! - `POST /analyze` - Analyze a (resume, job description) pair
//! - `GET /stats` - Get response-cache statistics
//! - `DELETE /cache` - Drop every cached report
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
