//! The resource allocation engine.
//!
//! For each `(category, fraction)` of the waste profile, in profile order:
//!
//! ```text
//! mass        = total_waste_kg * fraction
//! efficiency  = min(0.95, base_efficiency * (1 + bonus))
//! subproduct  = mass * efficiency
//! gas         = subproduct * gas_yield
//! energy      = gas * energy_yield
//! bacteria_g  = mass * mass_ratio * (1 / max(efficiency, 0.01))
//! nanobots    = ceil(bacteria_g / (capacity_g * transport_efficiency))
//! containers  = ceil(bacteria_g / container.capacity_g)
//! ```
//!
//! Costs are culture grams, nanobot units and containers at their unit
//! prices, plus the launch cost of the category's raw mass as a reference
//! figure. Totals accumulate in the same order so repeated runs are
//! bit-identical.
//!
//! Fallbacks are silent in the numbers: an unmatched category gets the
//! generic bacterium and an unknown storage tag costs nothing. Both are
//! visible in each [`CategoryResult`] (`selection`, `container_found`) and
//! are logged at debug level.

use std::collections::BTreeMap;

use reclaimer_types::{
    AutomationLevel, BacteriumSpec, CategoryName, CategoryResult, MissionSummary, OrderedMap,
    SelectionSource, WasteProfile,
};
use tracing::debug;

use crate::catalog::ReferenceCatalog;
use crate::constants::{ConversionConstants, EFFICIENCY_CAP, EFFICIENCY_FLOOR};
use crate::selection::select_bacterium;

/// Inputs for one allocation run.
#[derive(Debug, Clone, PartialEq)]
pub struct MissionParameters {
    /// Number of crew members. Zero yields an all-zero summary.
    pub crew_size: u32,
    /// Mission duration in days. Zero yields an all-zero summary.
    pub days: u32,
    /// Waste profile to apply.
    pub profile: WasteProfile,
    /// Automation tier.
    pub automation: AutomationLevel,
    /// Per-category bacteria that replace the library choice.
    pub overrides: BTreeMap<CategoryName, BacteriumSpec>,
    /// Whether culture delivery uses transport nanobots.
    pub use_nanobots: bool,
}

impl MissionParameters {
    /// Parameters with no overrides and nanobots enabled.
    pub const fn new(
        crew_size: u32,
        days: u32,
        profile: WasteProfile,
        automation: AutomationLevel,
    ) -> Self {
        Self {
            crew_size,
            days,
            profile,
            automation,
            overrides: BTreeMap::new(),
            use_nanobots: true,
        }
    }

    /// Replace the override map.
    #[must_use]
    pub fn with_overrides(mut self, overrides: BTreeMap<CategoryName, BacteriumSpec>) -> Self {
        self.overrides = overrides;
        self
    }

    /// Enable or disable nanobot transport.
    #[must_use]
    pub const fn with_nanobots(mut self, use_nanobots: bool) -> Self {
        self.use_nanobots = use_nanobots;
        self
    }
}

/// Number of whole units needed to hold `required` at `per_unit` each.
///
/// Rounds up unless the quotient is exactly integral, and bumps the count
/// if floating-point division landed one unit short. Returns 0 exactly when
/// nothing is required; any positive requirement needs at least one unit,
/// and a requirement too large to count saturates at `u64::MAX`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn units_required(required: f64, per_unit: f64) -> u64 {
    if required.is_nan() || required <= 0.0 {
        return 0;
    }
    let mut units = (required / per_unit).ceil();
    if units.is_nan() || units < 1.0 {
        units = 1.0;
    }
    if units.is_finite() && units * per_unit < required {
        units += 1.0;
    }
    // Float-to-int `as` saturates, so infinity maps to u64::MAX.
    units as u64
}

/// Conversion efficiency after the automation bonus, never above the cap.
pub fn adjusted_efficiency(base_efficiency: f64, efficiency_bonus: f64) -> f64 {
    (base_efficiency * (1.0 + efficiency_bonus)).min(EFFICIENCY_CAP)
}

/// Computes mission resource requirements against a reference catalog.
#[derive(Debug, Clone, Copy)]
pub struct AllocationEngine<'a> {
    catalog: &'a ReferenceCatalog,
    constants: ConversionConstants,
}

impl<'a> AllocationEngine<'a> {
    /// Create an engine over `catalog` using `constants`.
    pub const fn new(catalog: &'a ReferenceCatalog, constants: ConversionConstants) -> Self {
        Self { catalog, constants }
    }

    /// The catalog this engine reads.
    pub const fn catalog(&self) -> &'a ReferenceCatalog {
        self.catalog
    }

    /// The conversion constants in use.
    pub const fn constants(&self) -> &ConversionConstants {
        &self.constants
    }

    /// Run the allocation for one mission.
    ///
    /// Never fails. Identical parameters against an unchanged catalog
    /// produce identical summaries.
    pub fn allocate(&self, params: &MissionParameters) -> MissionSummary {
        let per_person = params.profile.per_person_kg_per_day;
        let total_waste_kg = f64::from(params.crew_size) * per_person * f64::from(params.days);

        let mut categories = OrderedMap::with_capacity(params.profile.breakdown.len());
        let mut total_gas_kg = 0.0;
        let mut total_energy_kwh = 0.0;
        let mut total_cost_usd = 0.0;
        let mut total_bacteria_g = 0.0;
        let mut total_bacteria_cost_usd = 0.0;
        let mut total_nanobots: u64 = 0;

        for (category, fraction) in params.profile.breakdown.iter() {
            let result = self.allocate_category(category, total_waste_kg * fraction, params);

            total_gas_kg += result.gas_kg;
            total_energy_kwh += result.energy_kwh;
            total_cost_usd += result.total_cost_usd();
            total_bacteria_g += result.bacteria_g;
            total_bacteria_cost_usd += result.bacteria_cost_usd;
            total_nanobots = total_nanobots.saturating_add(result.nanobot_units);

            categories.insert(category, result);
        }

        debug!(
            crew_size = params.crew_size,
            days = params.days,
            automation = %params.automation.name,
            categories = categories.len(),
            total_waste_kg,
            total_cost_usd,
            total_nanobots,
            "allocation complete"
        );

        MissionSummary {
            crew_size: params.crew_size,
            days: params.days,
            per_person_kg_per_day: per_person,
            total_waste_kg,
            total_gas_kg,
            total_energy_kwh,
            total_cost_usd,
            total_bacteria_g,
            total_bacteria_cost_usd,
            total_nanobots,
            automation_level_name: params.automation.name.clone(),
            categories,
        }
    }

    fn allocate_category(
        &self,
        category: &str,
        mass_kg: f64,
        params: &MissionParameters,
    ) -> CategoryResult {
        let selection = select_bacterium(category, &params.overrides, self.catalog.bacteria());
        let bacterium = selection.spec.as_ref();
        if selection.source == SelectionSource::Generic {
            debug!(category, "no bacterium targets category, using generic fallback");
        }

        let efficiency =
            adjusted_efficiency(bacterium.base_efficiency, params.automation.efficiency_bonus);
        let subproduct_kg = mass_kg * efficiency;
        let gas_kg = subproduct_kg * self.constants.gas_yield_per_kg_subproduct;
        let energy_kwh = gas_kg * self.constants.energy_kwh_per_kg_gas;
        let bacteria_g =
            mass_kg * bacterium.mass_ratio_g_per_kg * (1.0 / efficiency.max(EFFICIENCY_FLOOR));

        let nanobot = self.catalog.nanobot();
        let nanobot_units = if params.use_nanobots {
            units_required(bacteria_g, nanobot.effective_capacity_g())
        } else {
            0
        };

        let container = self.catalog.container_for_tag(&bacterium.storage_tag);
        let (container_units, container_cost_usd) = container.map_or_else(
            || {
                debug!(
                    category,
                    storage_tag = %bacterium.storage_tag,
                    "no container registered for storage tag, container cost is zero"
                );
                (0, 0.0)
            },
            |spec| {
                let units = units_required(bacteria_g, spec.capacity_g);
                (units, units_as_f64(units) * spec.unit_cost_usd)
            },
        );

        CategoryResult {
            mass_kg,
            bacterium: bacterium.name.clone(),
            selection: selection.source,
            adjusted_efficiency: efficiency,
            subproduct_kg,
            gas_kg,
            energy_kwh,
            bacteria_g,
            nanobot_units,
            container_units,
            storage_tag: bacterium.storage_tag.clone(),
            container_found: container.is_some(),
            bacteria_cost_usd: bacteria_g * self.constants.cost_per_gram_bacteria,
            nanobot_cost_usd: units_as_f64(nanobot_units) * nanobot.unit_cost_usd,
            container_cost_usd,
            transport_cost_usd: mass_kg * self.constants.cost_per_kg_to_orbit,
        }
    }
}

/// Exact below 2^53 units; saturated counts only need to stay huge.
#[allow(clippy::cast_precision_loss)]
const fn units_as_f64(units: u64) -> f64 {
    units as f64
}

/// Run the allocation against the built-in catalog and default constants.
pub fn allocate(params: &MissionParameters) -> MissionSummary {
    AllocationEngine::new(ReferenceCatalog::standard(), ConversionConstants::default())
        .allocate(params)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    fn standard_params(crew: u32, days: u32, ordinal: u8) -> MissionParameters {
        let catalog = ReferenceCatalog::standard();
        let profile = catalog
            .profile("Estándar_mision")
            .cloned()
            .unwrap_or_else(|| ReferenceCatalog::manual_profile(1.45));
        let automation = catalog
            .automation_level(ordinal)
            .cloned()
            .unwrap_or_else(|| AutomationLevel {
                ordinal,
                name: String::from("missing"),
                efficiency_bonus: 0.0,
            });
        MissionParameters::new(crew, days, profile, automation)
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() <= TOLERANCE * b.abs().max(1.0)
    }

    #[test]
    fn reference_mission_total_mass() {
        let summary = allocate(&standard_params(8, 365, 2));
        assert!(close(summary.total_waste_kg, 4234.0));
        assert_eq!(summary.crew_size, 8);
        assert_eq!(summary.days, 365);
        assert_eq!(summary.automation_level_name, "Automatizada (BioAI)");
    }

    #[test]
    fn reference_mission_organic_chain() {
        let summary = allocate(&standard_params(8, 365, 2));
        let organic = summary.categories.get("Orgánico").unwrap();

        let mass = 4234.0 * 0.31;
        let efficiency = 0.55 * 1.12;
        let subproduct = mass * efficiency;
        let gas = subproduct * 0.60;
        let energy = gas * 3.5;
        let bacteria_g = mass * 20.0 * (1.0 / efficiency);

        assert!(close(organic.mass_kg, 1312.54));
        assert!(close(organic.adjusted_efficiency, 0.616));
        assert!(close(organic.subproduct_kg, subproduct));
        assert!(close(organic.gas_kg, gas));
        assert!(close(organic.energy_kwh, energy));
        assert!(close(organic.bacteria_g, bacteria_g));
        assert_eq!(organic.bacterium, "Deinococcus_radiodurans");
        assert_eq!(organic.selection, SelectionSource::Library);

        // 42 615.58 g at 47.5 g per nanobot, 5 000 g per BioCámara.
        assert_eq!(organic.nanobot_units, 898);
        assert_eq!(organic.container_units, 9);
        assert!(organic.container_found);
        assert!(close(organic.container_cost_usd, 9.0 * 1200.0));
        assert!(close(organic.nanobot_cost_usd, 898.0 * 200.0));
        assert!(close(organic.bacteria_cost_usd, bacteria_g * 0.02));
        assert!(close(organic.transport_cost_usd, mass * 20_000.0));
    }

    #[test]
    fn categories_follow_profile_order() {
        let summary = allocate(&standard_params(2, 10, 0));
        let keys: Vec<&str> = summary.categories.keys().collect();
        assert_eq!(
            keys,
            vec![
                "Plástico_PET",
                "Orgánico",
                "Metal_ligero",
                "Textil",
                "Higiene_y_papeleria",
                "Otros"
            ]
        );
    }

    #[test]
    fn generic_categories_have_no_container_cost() {
        let summary = allocate(&standard_params(8, 365, 2));
        for name in ["Higiene_y_papeleria", "Otros"] {
            let result = summary.categories.get(name);
            assert!(result.is_some_and(|r| r.selection == SelectionSource::Generic));
            assert!(result.is_some_and(|r| !r.container_found));
            assert!(result.is_some_and(|r| r.container_units == 0));
            assert!(result.is_some_and(|r| r.container_cost_usd.abs() < f64::EPSILON));
            assert!(result.is_some_and(|r| close(r.adjusted_efficiency, 0.20 * 1.12)));
        }
    }

    #[test]
    fn textile_storage_tag_misses_container_table() {
        let summary = allocate(&standard_params(8, 365, 2));
        let textile = summary.categories.get("Textil");
        assert!(textile.is_some_and(|r| r.bacterium == "Pseudomonas_textilis"));
        assert!(textile.is_some_and(|r| !r.container_found));
        assert!(textile.is_some_and(|r| r.container_cost_usd.abs() < f64::EPSILON));
    }

    #[test]
    fn efficiency_is_capped() {
        assert!(close(adjusted_efficiency(0.9, 0.5), EFFICIENCY_CAP));
        assert!(close(adjusted_efficiency(0.55, 0.12), 0.616));
        assert!(adjusted_efficiency(10.0, 100.0) <= EFFICIENCY_CAP);
    }

    #[test]
    fn zero_efficiency_uses_floor_as_divisor() {
        let mut overrides = BTreeMap::new();
        overrides.insert(
            String::from("Otros"),
            BacteriumSpec {
                base_efficiency: 0.0,
                ..BacteriumSpec::generic("Otros")
            },
        );
        let params = standard_params(1, 1, 0).with_overrides(overrides);
        let summary = allocate(&params);
        let otros = summary.categories.get("Otros");
        let mass = 1.45 * 0.18;
        assert!(otros.is_some_and(|r| r.subproduct_kg.abs() < f64::EPSILON));
        assert!(otros.is_some_and(|r| close(r.bacteria_g, mass * 15.0 * 100.0)));
        assert!(otros.is_some_and(|r| r.selection == SelectionSource::Override));
    }

    #[test]
    fn disabling_nanobots_keeps_transport_reference_cost() {
        let params = standard_params(4, 30, 1).with_nanobots(false);
        let summary = allocate(&params);
        assert_eq!(summary.total_nanobots, 0);
        for result in summary.categories.values() {
            assert_eq!(result.nanobot_units, 0);
            assert!(result.nanobot_cost_usd.abs() < f64::EPSILON);
            assert!(close(result.transport_cost_usd, result.mass_kg * 20_000.0));
        }
    }

    #[test]
    fn zero_crew_yields_zero_summary() {
        let summary = allocate(&standard_params(0, 365, 2));
        assert!(summary.total_waste_kg.abs() < f64::EPSILON);
        assert!(summary.total_cost_usd.abs() < f64::EPSILON);
        assert_eq!(summary.total_nanobots, 0);
        assert!(summary.categories.values().all(|r| r.container_units == 0));
    }

    #[test]
    fn totals_are_sums_of_categories() {
        let summary = allocate(&standard_params(6, 200, 3));
        let gas: f64 = summary.categories.values().map(|r| r.gas_kg).sum();
        let energy: f64 = summary.categories.values().map(|r| r.energy_kwh).sum();
        let cost: f64 = summary.categories.values().map(CategoryResult::total_cost_usd).sum();
        let bacteria: f64 = summary.categories.values().map(|r| r.bacteria_g).sum();
        let nanobots: u64 = summary.categories.values().map(|r| r.nanobot_units).sum();
        assert!(close(summary.total_gas_kg, gas));
        assert!(close(summary.total_energy_kwh, energy));
        assert!(close(summary.total_cost_usd, cost));
        assert!(close(summary.total_bacteria_g, bacteria));
        assert_eq!(summary.total_nanobots, nanobots);
    }

    #[test]
    fn repeated_runs_are_identical() {
        let params = standard_params(8, 365, 2);
        assert_eq!(allocate(&params), allocate(&params));
    }

    #[test]
    fn substituted_constants_flow_through() {
        let constants = ConversionConstants {
            gas_yield_per_kg_subproduct: 1.0,
            energy_kwh_per_kg_gas: 1.0,
            cost_per_gram_bacteria: 0.0,
            cost_per_kg_to_orbit: 0.0,
        };
        let engine = AllocationEngine::new(ReferenceCatalog::standard(), constants);
        let summary = engine.allocate(&standard_params(1, 1, 0));
        for result in summary.categories.values() {
            assert!(close(result.gas_kg, result.subproduct_kg));
            assert!(close(result.energy_kwh, result.gas_kg));
            assert!(result.transport_cost_usd.abs() < f64::EPSILON);
        }
    }

    #[test]
    fn units_round_up_unless_integral() {
        assert_eq!(units_required(0.0, 47.5), 0);
        assert_eq!(units_required(47.5, 47.5), 1);
        assert_eq!(units_required(47.6, 47.5), 2);
        assert_eq!(units_required(95.0, 47.5), 2);
        assert_eq!(units_required(2000.0001, 2000.0), 2);
        assert_eq!(units_required(-5.0, 10.0), 0);
        assert_eq!(units_required(f64::NAN, 10.0), 0);
    }

    #[test]
    fn infinite_requirement_saturates() {
        assert_eq!(units_required(f64::INFINITY, 47.5), u64::MAX);
        assert_eq!(units_required(f64::MAX, 1e-300), u64::MAX);
        assert_eq!(units_required(1e-300, 47.5), 1);
        assert_eq!(units_required(10.0, 0.0), u64::MAX);
    }

    #[test]
    fn unbounded_culture_mass_still_needs_nanobots() {
        let mut overrides = BTreeMap::new();
        overrides.insert(
            String::from("Otros"),
            BacteriumSpec {
                mass_ratio_g_per_kg: 1e308,
                ..BacteriumSpec::generic("Otros")
            },
        );
        let summary = allocate(&standard_params(8, 365, 2).with_overrides(overrides));
        let otros = summary.categories.get("Otros").unwrap();
        assert!(otros.bacteria_g.is_infinite());
        assert_eq!(otros.nanobot_units, u64::MAX);
        assert!(otros.nanobot_cost_usd > 0.0);
        assert_eq!(summary.total_nanobots, u64::MAX);
    }
}
