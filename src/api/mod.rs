//! API Module
//!
//! HTTP handlers and routing for the receipt service REST API.
//!
//! # Endpoints
//! - `POST /receipts/process` - Score a receipt and cache its points
//! - `GET /receipts/:id/points` - Look up points by receipt id
//! - `GET /stats` - Get cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
