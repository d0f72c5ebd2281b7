//! Simplified payload served to the dashboard frontend.
//!
//! The dashboard shows four headline readings derived from a
//! [`MissionSummary`](crate::MissionSummary) plus five 0-100 gauges. The
//! same payload is what the history store records for every calculation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::ids::RunId;

/// Recovered energy reading.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct EnergyReading {
    /// Total recovered energy in kWh.
    pub total_kwh: f64,
}

/// Bacterial population reading.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct BacteriaReading {
    /// Culture mass expressed in millions of cells.
    pub total_millions: f64,
}

/// Recovered gas split into the two species the dashboard charts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct GasReading {
    /// Carbon dioxide share, in kg.
    #[serde(rename = "CO2")]
    pub co2_kg: f64,
    /// Methane share, in kg.
    #[serde(rename = "CH4")]
    pub ch4_kg: f64,
}

/// Nanobot fleet reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct NanobotReading {
    /// Units in service.
    pub active: u64,
}

/// The four headline readings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct DashboardPayload {
    /// Energy reading.
    pub energy: EnergyReading,
    /// Bacteria reading.
    pub bacteria: BacteriaReading,
    /// Gas reading.
    pub gases: GasReading,
    /// Nanobot reading.
    pub nanobots: NanobotReading,
}

/// Gauge percentages, each in 0..=100 and rounded to two decimals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct GaugeSet {
    /// Energy gauge.
    pub energy_pct: f64,
    /// Bacteria gauge.
    pub bacteria_pct: f64,
    /// CO2 gauge.
    pub co2_pct: f64,
    /// CH4 gauge.
    pub ch4_pct: f64,
    /// Nanobot gauge.
    pub nanobots_pct: f64,
}

/// Response body of `POST /api/calculate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct CalculationResponse {
    /// Headline readings, flattened into the top-level object.
    #[serde(flatten)]
    #[ts(flatten)]
    pub payload: DashboardPayload,
    /// Gauge percentages.
    pub visual: GaugeSet,
    /// When the calculation ran.
    pub generated_at: DateTime<Utc>,
}

/// One entry of the append-only calculation history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct HistoryRecord {
    /// Run identifier.
    pub id: RunId,
    /// When the run was recorded.
    pub timestamp: DateTime<Utc>,
    /// Crew size requested.
    pub crew: u32,
    /// Mission days requested.
    pub days: u32,
    /// Name of the waste profile used.
    pub profile_name: String,
    /// Name of the automation tier used.
    pub automation_name: String,
    /// The full response returned to the client.
    pub results: CalculationResponse,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn response_flattens_readings_and_names_gas_species() {
        let response = CalculationResponse {
            payload: DashboardPayload {
                energy: EnergyReading { total_kwh: 12.5 },
                bacteria: BacteriaReading {
                    total_millions: 3000.0,
                },
                gases: GasReading {
                    co2_kg: 6.0,
                    ch4_kg: 4.0,
                },
                nanobots: NanobotReading { active: 7 },
            },
            visual: GaugeSet {
                energy_pct: 25.0,
                bacteria_pct: 60.0,
                co2_pct: 6.0,
                ch4_pct: 4.0,
                nanobots_pct: 3.5,
            },
            generated_at: Utc::now(),
        };

        let value = serde_json::to_value(&response).unwrap();
        assert!((value["energy"]["total_kwh"].as_f64().unwrap() - 12.5).abs() < 1e-12);
        assert!(value["gases"]["CO2"].is_f64());
        assert!(value["gases"]["CH4"].is_f64());
        assert_eq!(value["nanobots"]["active"], 7);
        assert!(value["visual"].is_object());
        assert!(value.get("payload").is_none());

        let back: CalculationResponse = serde_json::from_value(value).unwrap();
        assert_eq!(back, response);
    }
}
