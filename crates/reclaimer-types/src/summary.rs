//! Allocation results.
//!
//! A [`MissionSummary`] is produced fresh by each engine call and owns one
//! [`CategoryResult`] per waste category. Consumers (report renderer,
//! dashboard adapter, history store) only read it.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::ordered::OrderedMap;

/// Which selection rule produced the bacterium for a category.
///
/// Purely diagnostic: lets callers see where a silent fallback happened
/// without changing any computed figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum SelectionSource {
    /// Supplied by the caller's override map.
    Override,
    /// First matching entry of the bacteria library.
    Library,
    /// Synthesized generic fallback.
    Generic,
}

/// Resources and costs for a single waste category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct CategoryResult {
    /// Waste mass in this category over the mission.
    pub mass_kg: f64,
    /// Name of the bacterium assigned to the category.
    pub bacterium: String,
    /// Rule that picked the bacterium.
    pub selection: SelectionSource,
    /// Conversion efficiency after the automation bonus and the cap.
    pub adjusted_efficiency: f64,
    /// Converted mass.
    pub subproduct_kg: f64,
    /// Usable gas recovered from the subproduct.
    pub gas_kg: f64,
    /// Energy recovered from the gas.
    pub energy_kwh: f64,
    /// Culture mass required.
    pub bacteria_g: f64,
    /// Transport nanobots required (0 when nanobots are disabled).
    pub nanobot_units: u64,
    /// Storage containers required (0 when no container matches the tag).
    pub container_units: u64,
    /// Storage tag of the assigned bacterium, as given.
    pub storage_tag: String,
    /// Whether the storage tag resolved to a known container.
    pub container_found: bool,
    /// Culture production cost.
    pub bacteria_cost_usd: f64,
    /// Nanobot cost.
    pub nanobot_cost_usd: f64,
    /// Container cost.
    pub container_cost_usd: f64,
    /// Reference cost of launching the same raw mass to orbit.
    pub transport_cost_usd: f64,
}

impl CategoryResult {
    /// Sum of the four cost components.
    pub fn total_cost_usd(&self) -> f64 {
        self.bacteria_cost_usd
            + self.nanobot_cost_usd
            + self.container_cost_usd
            + self.transport_cost_usd
    }
}

/// Complete result of one allocation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct MissionSummary {
    /// Number of crew members.
    pub crew_size: u32,
    /// Mission duration in days.
    pub days: u32,
    /// Per-person daily waste used for the run.
    pub per_person_kg_per_day: f64,
    /// Total waste over the mission.
    pub total_waste_kg: f64,
    /// Total recovered gas.
    pub total_gas_kg: f64,
    /// Total recovered energy.
    pub total_energy_kwh: f64,
    /// Sum of every cost component across categories.
    pub total_cost_usd: f64,
    /// Total culture mass.
    pub total_bacteria_g: f64,
    /// Culture production cost across categories.
    pub total_bacteria_cost_usd: f64,
    /// Total transport nanobots.
    pub total_nanobots: u64,
    /// Name of the automation tier used.
    pub automation_level_name: String,
    /// Per-category results in profile order.
    #[ts(as = "HashMap<String, CategoryResult>")]
    pub categories: OrderedMap<CategoryResult>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn sample_result() -> CategoryResult {
        CategoryResult {
            mass_kg: 10.0,
            bacterium: String::from("generic"),
            selection: SelectionSource::Generic,
            adjusted_efficiency: 0.2,
            subproduct_kg: 2.0,
            gas_kg: 1.2,
            energy_kwh: 4.2,
            bacteria_g: 750.0,
            nanobot_units: 16,
            container_units: 0,
            storage_tag: String::from("generic"),
            container_found: false,
            bacteria_cost_usd: 15.0,
            nanobot_cost_usd: 3200.0,
            container_cost_usd: 0.0,
            transport_cost_usd: 200_000.0,
        }
    }

    #[test]
    fn total_cost_adds_all_components() {
        let result = sample_result();
        assert!((result.total_cost_usd() - 203_215.0).abs() < 1e-9);
    }

    #[test]
    fn selection_source_serializes_snake_case() {
        let json = serde_json::to_string(&SelectionSource::Library).ok();
        assert_eq!(json.as_deref(), Some("\"library\""));
    }

    #[test]
    fn unit_counts_serialize_as_integers() {
        let value = serde_json::to_value(sample_result()).unwrap();
        assert!(value["nanobot_units"].is_u64());
        assert!(value["bacteria_g"].is_f64());
    }
}
