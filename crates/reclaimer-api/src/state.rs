//! Shared application state for the dashboard API.

use std::sync::Arc;

use reclaimer_core::{AllocationEngine, ConversionConstants, ReferenceCatalog};
use reclaimer_store::HistoryStore;

/// Shared state for the Axum application.
///
/// Wrapped in [`Arc`] and injected via Axum's `State` extractor. The
/// catalog is a process-lifetime table shared with every engine run; the
/// history store serializes its own writes.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Reference tables the engine reads.
    pub catalog: &'static ReferenceCatalog,
    /// Yield and cost factors.
    pub constants: ConversionConstants,
    /// Calculation history file.
    pub history: Arc<HistoryStore>,
}

impl AppState {
    /// Create state over the given catalog, constants and history.
    pub const fn new(
        catalog: &'static ReferenceCatalog,
        constants: ConversionConstants,
        history: Arc<HistoryStore>,
    ) -> Self {
        Self {
            catalog,
            constants,
            history,
        }
    }

    /// Create state over the process-wide built-in catalog.
    pub fn with_builtin_catalog(
        constants: ConversionConstants,
        history: Arc<HistoryStore>,
    ) -> Self {
        Self::new(ReferenceCatalog::standard(), constants, history)
    }

    /// An allocation engine bound to this state's catalog and constants.
    pub const fn engine(&self) -> AllocationEngine<'static> {
        AllocationEngine::new(self.catalog, self.constants)
    }
}
