//! Calculation history persistence for the Bio-Nano Reclaimer.
//!
//! Every dashboard calculation is appended to a single JSON array on disk.
//! The file is small and human-readable; it is rewritten whole on each
//! append, via a temporary file and an atomic rename, so readers never see
//! a half-written list.
//!
//! Appends are serialized through a per-store writer lock. Reads take no
//! lock.

pub mod error;
pub mod history;

pub use error::StoreError;
pub use history::HistoryStore;
