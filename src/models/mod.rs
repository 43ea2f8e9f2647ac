//! Request and Response models for the receipt API
//!
//! This module defines the receipt itself and the DTOs used for
//! serializing HTTP response bodies.

pub mod receipt;
pub mod responses;

// Re-export commonly used types
pub use receipt::{FieldError, Item, Receipt};
pub use responses::{HealthResponse, PointsResponse, ProcessResponse, StatsResponse};
