//! Receipt Points - scores purchase receipts and serves cached points
//!
//! Receipts are scored by a fixed set of reward rules, given a content
//! derived identifier, and kept in a bounded LRU store for later lookup.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod processor;
pub mod receipt_id;
pub mod scoring;

pub use api::AppState;
pub use config::Config;
pub use processor::{process_receipt, ProcessedReceipt};
