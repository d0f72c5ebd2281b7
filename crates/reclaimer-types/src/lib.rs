//! Shared type definitions for the Bio-Nano Reclaimer.
//!
//! This crate is the single source of truth for the data that flows between
//! the allocation engine, the history store, the HTTP API and the terminal
//! client. Payload types derive `ts-rs` so the dashboard frontend consumes
//! the same shapes.
//!
//! # Modules
//!
//! - [`ids`] -- Type-safe UUID wrapper for persisted calculation runs
//! - [`ordered`] -- Insertion-ordered map used for category breakdowns
//! - [`reference`] -- Static reference entries (profiles, bacteria, nanobots, containers)
//! - [`summary`] -- Per-category and mission-level allocation results
//! - [`dashboard`] -- Simplified dashboard payload, gauges and history records

pub mod dashboard;
pub mod ids;
pub mod ordered;
pub mod reference;
pub mod summary;

// Re-export all public types at crate root for convenience.
pub use dashboard::{
    BacteriaReading, CalculationResponse, DashboardPayload, EnergyReading, GasReading, GaugeSet,
    HistoryRecord, NanobotReading,
};
pub use ids::RunId;
pub use ordered::OrderedMap;
pub use reference::{
    AutomationLevel, BacteriumSpec, CategoryName, ContainerSpec, NanobotSpec, WasteProfile,
    GENERIC_BACTERIUM_NAME, GENERIC_BASE_EFFICIENCY, GENERIC_MASS_RATIO_G_PER_KG,
    GENERIC_STORAGE_TAG,
};
pub use summary::{CategoryResult, MissionSummary, SelectionSource};
