//! Static reference entries consumed by the allocation engine.
//!
//! These types describe the read-only tables the engine works from: waste
//! profiles, bacteria capabilities, the nanobot transport spec, storage
//! containers and automation tiers. Built-in values live in the core
//! crate's catalog; callers that want different values build new entries
//! rather than mutating shared ones.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::ordered::OrderedMap;

/// Name of a waste category (e.g. `Orgánico`, `Plástico_PET`).
pub type CategoryName = String;

/// Name given to the synthesized bacterium used when nothing else matches.
pub const GENERIC_BACTERIUM_NAME: &str = "generic";

/// Base conversion efficiency of the synthesized generic bacterium.
pub const GENERIC_BASE_EFFICIENCY: f64 = 0.20;

/// Grams of generic bacteria needed per kilogram of target waste.
pub const GENERIC_MASS_RATIO_G_PER_KG: f64 = 15.0;

/// Storage tag of the generic bacterium. No container is registered under it.
pub const GENERIC_STORAGE_TAG: &str = "generic";

/// Named description of daily per-person waste and its category breakdown.
///
/// Breakdown fractions are independent multipliers of the total mission
/// mass. They are not required to sum to 1 and are never normalized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct WasteProfile {
    /// Human-readable description.
    pub description: String,
    /// Waste generated per crew member per day, in kilograms.
    pub per_person_kg_per_day: f64,
    /// Fraction of the total mass attributed to each category, in
    /// reporting order.
    #[ts(as = "HashMap<String, f64>")]
    pub breakdown: OrderedMap<f64>,
}

/// Capability entry for one microorganism.
///
/// Every field has a serde default so partially specified overrides coming
/// from a client are accepted as-is; missing values take the generic
/// fallback figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct BacteriumSpec {
    /// Organism name.
    #[serde(default = "default_name")]
    pub name: String,
    /// Waste category this organism is specialised for.
    #[serde(default)]
    pub target_category: CategoryName,
    /// Fraction of target mass converted without automation, nominally 0..=1.
    #[serde(default = "default_base_efficiency")]
    pub base_efficiency: f64,
    /// Grams of culture needed per kilogram of target waste.
    #[serde(default = "default_mass_ratio")]
    pub mass_ratio_g_per_kg: f64,
    /// Storage tag, matched against the container table after replacing
    /// spaces with underscores.
    #[serde(default = "default_storage_tag")]
    pub storage_tag: String,
    /// Free-text remark shown in listings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub note: Option<String>,
}

impl BacteriumSpec {
    /// The fallback entry synthesized for a category nothing else covers.
    pub fn generic(category: &str) -> Self {
        Self {
            name: default_name(),
            target_category: category.to_owned(),
            base_efficiency: GENERIC_BASE_EFFICIENCY,
            mass_ratio_g_per_kg: GENERIC_MASS_RATIO_G_PER_KG,
            storage_tag: default_storage_tag(),
            note: None,
        }
    }
}

/// Automation tier that scales conversion efficiency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct AutomationLevel {
    /// Tier number, 0 (manual) through 3.
    pub ordinal: u8,
    /// Display name.
    pub name: String,
    /// Relative efficiency bonus, e.g. `0.12` for +12%.
    pub efficiency_bonus: f64,
}

/// Transport nanobot characteristics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct NanobotSpec {
    /// Grams of culture one unit carries per delivery cycle.
    pub capacity_g: f64,
    /// Fraction of the carried culture that arrives viable.
    pub transport_efficiency: f64,
    /// Manufacturing and integration cost per unit.
    pub unit_cost_usd: f64,
}

impl NanobotSpec {
    /// Grams of viable culture delivered per unit.
    pub const fn effective_capacity_g(&self) -> f64 {
        self.capacity_g * self.transport_efficiency
    }
}

/// Storage container for bacterial cultures.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ContainerSpec {
    /// Internal volume in litres.
    pub volume_l: f64,
    /// Grams of culture one container holds.
    pub capacity_g: f64,
    /// Cost per container.
    pub unit_cost_usd: f64,
}

// ---------------------------------------------------------------------------
// Default value functions (serde default requires named functions)
// ---------------------------------------------------------------------------

fn default_name() -> String {
    GENERIC_BACTERIUM_NAME.to_owned()
}

const fn default_base_efficiency() -> f64 {
    GENERIC_BASE_EFFICIENCY
}

const fn default_mass_ratio() -> f64 {
    GENERIC_MASS_RATIO_G_PER_KG
}

fn default_storage_tag() -> String {
    GENERIC_STORAGE_TAG.to_owned()
}
