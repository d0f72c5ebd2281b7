//! Dashboard HTTP API for the Bio-Nano Reclaimer.
//!
//! This crate provides an Axum HTTP server that exposes:
//!
//! - **Reference endpoints** listing the built-in waste profiles,
//!   automation tiers and bacteria library
//! - **Calculation endpoints** that run the allocation engine and return
//!   either the simplified dashboard payload (recorded in the history
//!   file) or the full mission summary
//! - **History endpoint** returning every recorded calculation
//! - **Minimal HTML page** (`GET /`) listing the endpoints
//!
//! # Architecture
//!
//! The engine is synchronous and cheap, so handlers call it inline. The
//! only shared mutable resource is the history file, whose writes are
//! serialized inside [`HistoryStore`](reclaimer_store::HistoryStore).

pub mod dashboard;
pub mod error;
pub mod handlers;
pub mod request;
pub mod router;
pub mod server;
pub mod state;

// Re-export primary types for convenience.
pub use error::ApiError;
pub use request::CalculationRequest;
pub use router::build_router;
pub use server::{ServerError, start_server};
pub use state::AppState;
