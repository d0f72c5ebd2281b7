//! Resource allocation core for the Bio-Nano Reclaimer.
//!
//! Given mission parameters (crew, duration, waste profile, automation tier,
//! optional bacteria overrides) and the static reference tables, the
//! [`AllocationEngine`] computes per-category bacteria mass, nanobot and
//! container counts, recovered gas and energy, and costs, then aggregates
//! them into a [`MissionSummary`](reclaimer_types::MissionSummary).
//!
//! # Modules
//!
//! - [`catalog`] -- Built-in reference tables and lookups
//! - [`constants`] -- Conversion constants and hard policy limits
//! - [`selection`] -- Bacteria selection precedence
//! - [`allocation`] -- The allocation engine
//! - [`config`] -- YAML configuration with environment overrides
//!
//! The engine is synchronous and pure: it reads shared tables and writes
//! only to the summary it returns, so concurrent callers need no locking.

pub mod allocation;
pub mod catalog;
pub mod config;
pub mod constants;
pub mod selection;

pub use allocation::{
    AllocationEngine, MissionParameters, adjusted_efficiency, allocate, units_required,
};
pub use catalog::{ReferenceCatalog, container_key};
pub use config::{ConfigError, ReclaimerConfig};
pub use constants::{ConversionConstants, EFFICIENCY_CAP, EFFICIENCY_FLOOR};
pub use selection::{Selection, select_bacterium};
