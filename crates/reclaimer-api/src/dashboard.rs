//! Projection of a mission summary onto the dashboard readings and gauges.
//!
//! The dashboard charts four figures. Culture mass is shown as a population
//! (1 g is taken as 1000 million cells) and recovered gas is split 60/40
//! into CO2 and CH4. Each gauge is the reading against a fixed full-scale
//! value, clamped to 100 and rounded to two decimals.

use reclaimer_types::{
    BacteriaReading, DashboardPayload, EnergyReading, GasReading, GaugeSet, MissionSummary,
    NanobotReading,
};

/// Millions of cells per gram of culture.
pub const MILLIONS_PER_GRAM: f64 = 1_000.0;

/// Share of recovered gas reported as CO2.
pub const CO2_SHARE: f64 = 0.60;

/// Share of recovered gas reported as CH4.
pub const CH4_SHARE: f64 = 0.40;

/// Full-scale energy reading, in kWh.
pub const ENERGY_FULL_SCALE_KWH: f64 = 50.0;

/// Full-scale bacteria reading, in millions.
pub const BACTERIA_FULL_SCALE_MILLIONS: f64 = 5_000.0;

/// Full-scale reading for each gas, in kg.
pub const GAS_FULL_SCALE_KG: f64 = 100.0;

/// Full-scale nanobot count.
pub const NANOBOT_FULL_SCALE: f64 = 200.0;

/// Reduce a summary to the four headline readings.
pub fn adapt(summary: &MissionSummary) -> DashboardPayload {
    DashboardPayload {
        energy: EnergyReading {
            total_kwh: summary.total_energy_kwh,
        },
        bacteria: BacteriaReading {
            total_millions: summary.total_bacteria_g * MILLIONS_PER_GRAM,
        },
        gases: GasReading {
            co2_kg: summary.total_gas_kg * CO2_SHARE,
            ch4_kg: summary.total_gas_kg * CH4_SHARE,
        },
        nanobots: NanobotReading {
            active: summary.total_nanobots,
        },
    }
}

/// Gauge percentages for a payload.
pub fn gauges(payload: &DashboardPayload) -> GaugeSet {
    GaugeSet {
        energy_pct: gauge(payload.energy.total_kwh, ENERGY_FULL_SCALE_KWH),
        bacteria_pct: gauge(
            payload.bacteria.total_millions,
            BACTERIA_FULL_SCALE_MILLIONS,
        ),
        co2_pct: gauge(payload.gases.co2_kg, GAS_FULL_SCALE_KG),
        ch4_pct: gauge(payload.gases.ch4_kg, GAS_FULL_SCALE_KG),
        nanobots_pct: gauge(count_as_f64(payload.nanobots.active), NANOBOT_FULL_SCALE),
    }
}

fn gauge(value: f64, full_scale: f64) -> f64 {
    let pct = (value / full_scale * 100.0).min(100.0);
    (pct * 100.0).round() / 100.0
}

/// Nanobot counts stay far below 2^53.
#[allow(clippy::cast_precision_loss)]
const fn count_as_f64(count: u64) -> f64 {
    count as f64
}
