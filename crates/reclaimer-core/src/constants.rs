//! Conversion constants and hard policy limits.
//!
//! The four yield and cost factors are grouped in [`ConversionConstants`] so
//! they can be substituted from configuration or in tests without touching
//! engine code. The efficiency cap and floor are policy, not tuning, and are
//! fixed.

use serde::{Deserialize, Serialize};

/// Upper bound on adjusted conversion efficiency, whatever the bonus.
pub const EFFICIENCY_CAP: f64 = 0.95;

/// Lower bound applied to efficiency before it is used as a divisor.
pub const EFFICIENCY_FLOOR: f64 = 0.01;

/// Yield and unit-cost factors used by the allocation engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConversionConstants {
    /// Kilograms of usable gas (CH4/O2 equivalent) per kilogram of subproduct.
    #[serde(default = "default_gas_yield")]
    pub gas_yield_per_kg_subproduct: f64,

    /// Kilowatt-hours recovered per kilogram of gas.
    #[serde(default = "default_energy_yield")]
    pub energy_kwh_per_kg_gas: f64,

    /// Culture and encapsulation cost per gram of bacteria.
    #[serde(default = "default_cost_per_gram")]
    pub cost_per_gram_bacteria: f64,

    /// Launch cost per kilogram to low Earth orbit, used as a comparative
    /// reference for shipping the waste mass instead of reclaiming it.
    #[serde(default = "default_cost_to_orbit")]
    pub cost_per_kg_to_orbit: f64,
}

impl Default for ConversionConstants {
    fn default() -> Self {
        Self {
            gas_yield_per_kg_subproduct: default_gas_yield(),
            energy_kwh_per_kg_gas: default_energy_yield(),
            cost_per_gram_bacteria: default_cost_per_gram(),
            cost_per_kg_to_orbit: default_cost_to_orbit(),
        }
    }
}

const fn default_gas_yield() -> f64 {
    0.60
}

const fn default_energy_yield() -> f64 {
    3.5
}

const fn default_cost_per_gram() -> f64 {
    0.02
}

const fn default_cost_to_orbit() -> f64 {
    20_000.0
}
