//! Built-in reference tables.
//!
//! The [`ReferenceCatalog`] bundles every static table the engine reads:
//! waste profiles, the bacteria library, the nanobot spec, storage
//! containers and automation tiers. The built-in catalog is constructed once
//! per process behind a [`LazyLock`] and is never mutated afterwards; tests
//! and custom deployments build their own with [`ReferenceCatalog::new`].
//!
//! The bacteria library is an ordered `Vec`, not a map keyed by category.
//! Several organisms may target the same category and only the first one is
//! ever selected, so definition order is part of the data.

use std::sync::LazyLock;

use reclaimer_types::{
    AutomationLevel, BacteriumSpec, ContainerSpec, NanobotSpec, OrderedMap, WasteProfile,
};

/// Automation tier used when a request names none or an unknown one.
pub const DEFAULT_AUTOMATION_ORDINAL: u8 = 2;

/// Per-person daily waste offered by the terminal's manual profile.
pub const DEFAULT_MANUAL_KG_PER_DAY: f64 = 1.45;

static STANDARD: LazyLock<ReferenceCatalog> = LazyLock::new(ReferenceCatalog::builtin);

/// Normalize a bacterium's storage tag into a container table key.
///
/// Spaces become underscores; nothing else is touched.
pub fn container_key(storage_tag: &str) -> String {
    storage_tag.replace(' ', "_")
}

/// Read-only reference tables consumed by the allocation engine.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceCatalog {
    profiles: OrderedMap<WasteProfile>,
    bacteria: Vec<BacteriumSpec>,
    nanobot: NanobotSpec,
    containers: OrderedMap<ContainerSpec>,
    automation_levels: Vec<AutomationLevel>,
}

impl ReferenceCatalog {
    /// Assemble a catalog from explicit tables.
    pub const fn new(
        profiles: OrderedMap<WasteProfile>,
        bacteria: Vec<BacteriumSpec>,
        nanobot: NanobotSpec,
        containers: OrderedMap<ContainerSpec>,
        automation_levels: Vec<AutomationLevel>,
    ) -> Self {
        Self {
            profiles,
            bacteria,
            nanobot,
            containers,
            automation_levels,
        }
    }

    /// The process-wide built-in catalog.
    pub fn standard() -> &'static Self {
        &STANDARD
    }

    /// Build a fresh copy of the built-in tables.
    pub fn builtin() -> Self {
        Self::new(
            builtin_profiles(),
            builtin_bacteria(),
            NanobotSpec {
                capacity_g: 50.0,
                transport_efficiency: 0.95,
                unit_cost_usd: 200.0,
            },
            builtin_containers(),
            builtin_automation_levels(),
        )
    }

    /// The profile the terminal offers when the user types their own
    /// per-person figure.
    pub fn manual_profile(per_person_kg_per_day: f64) -> WasteProfile {
        WasteProfile {
            description: String::from("Manual"),
            per_person_kg_per_day,
            breakdown: breakdown(&[
                ("Plástico_PET", 0.20),
                ("Orgánico", 0.30),
                ("Metal_ligero", 0.05),
                ("Textil", 0.10),
                ("Higiene_y_papeleria", 0.10),
                ("Otros", 0.25),
            ]),
        }
    }

    /// All waste profiles in definition order.
    pub const fn profiles(&self) -> &OrderedMap<WasteProfile> {
        &self.profiles
    }

    /// Look up a profile by exact name.
    pub fn profile(&self, name: &str) -> Option<&WasteProfile> {
        self.profiles.get(name)
    }

    /// The first profile, used when a request names none or an unknown one.
    pub fn default_profile(&self) -> Option<(&str, &WasteProfile)> {
        self.profiles.iter().next()
    }

    /// Resolve a requested profile name, falling back to the default.
    pub fn profile_or_default(&self, name: Option<&str>) -> Option<(&str, &WasteProfile)> {
        name.and_then(|n| self.profiles.iter().find(|(key, _)| *key == n))
            .or_else(|| self.default_profile())
    }

    /// The bacteria library in definition order.
    pub fn bacteria(&self) -> &[BacteriumSpec] {
        &self.bacteria
    }

    /// Library entries targeting `category`, in definition order.
    ///
    /// Only the first one is reachable through selection; the rest are
    /// listed so an operator can pick one explicitly as an override.
    pub fn candidates_for<'a>(
        &'a self,
        category: &'a str,
    ) -> impl Iterator<Item = &'a BacteriumSpec> + 'a {
        self.bacteria
            .iter()
            .filter(move |b| b.target_category == category)
    }

    /// The nanobot transport spec.
    pub const fn nanobot(&self) -> &NanobotSpec {
        &self.nanobot
    }

    /// All containers keyed by normalized storage tag.
    pub const fn containers(&self) -> &OrderedMap<ContainerSpec> {
        &self.containers
    }

    /// Look up the container for a bacterium's storage tag.
    ///
    /// The tag is normalized with [`container_key`] first. Returns `None`
    /// when no container is registered under it.
    pub fn container_for_tag(&self, storage_tag: &str) -> Option<&ContainerSpec> {
        self.containers.get(&container_key(storage_tag))
    }

    /// Automation tiers in ordinal order.
    pub fn automation_levels(&self) -> &[AutomationLevel] {
        &self.automation_levels
    }

    /// Look up an automation tier by ordinal.
    pub fn automation_level(&self, ordinal: u8) -> Option<&AutomationLevel> {
        self.automation_levels.iter().find(|l| l.ordinal == ordinal)
    }

    /// The tier used when a request names none or an unknown one.
    pub fn default_automation_level(&self) -> Option<&AutomationLevel> {
        self.automation_level(DEFAULT_AUTOMATION_ORDINAL)
    }

    /// Resolve a dashboard automation label.
    ///
    /// Accepts the dashboard codes (`Manual`, `N1`, `N2`, `N3`), a bare
    /// ordinal (`"0"`..`"3"`) or a tier's exact name. Returns `None` for
    /// anything else.
    pub fn automation_by_label(&self, label: &str) -> Option<&AutomationLevel> {
        let label = label.trim();
        let ordinal = match label {
            "Manual" => Some(0),
            "N1" => Some(1),
            "N2" => Some(2),
            "N3" => Some(3),
            other => other.parse::<u8>().ok(),
        };
        ordinal
            .and_then(|o| self.automation_level(o))
            .or_else(|| self.automation_levels.iter().find(|l| l.name == label))
    }
}

impl Default for ReferenceCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn breakdown(entries: &[(&str, f64)]) -> OrderedMap<f64> {
    entries.iter().map(|&(k, v)| (k, v)).collect()
}

fn builtin_profiles() -> OrderedMap<WasteProfile> {
    let mut profiles = OrderedMap::with_capacity(2);
    profiles.insert(
        "Estándar_mision",
        WasteProfile {
            description: String::from("Combined average profile for long-duration missions"),
            per_person_kg_per_day: 1.45,
            breakdown: breakdown(&[
                ("Plástico_PET", 0.24),
                ("Orgánico", 0.31),
                ("Metal_ligero", 0.06),
                ("Textil", 0.11),
                ("Higiene_y_papeleria", 0.10),
                ("Otros", 0.18),
            ]),
        },
    );
    profiles.insert(
        "Alto_organico",
        WasteProfile {
            description: String::from("Higher organic fraction (habitats with agriculture)"),
            per_person_kg_per_day: 1.6,
            breakdown: breakdown(&[
                ("Plástico_PET", 0.18),
                ("Orgánico", 0.45),
                ("Metal_ligero", 0.05),
                ("Textil", 0.12),
                ("Higiene_y_papeleria", 0.10),
                ("Otros", 0.10),
            ]),
        },
    );
    profiles
}

fn bacterium(
    name: &str,
    target: &str,
    base_efficiency: f64,
    mass_ratio_g_per_kg: f64,
    storage_tag: &str,
    note: &str,
) -> BacteriumSpec {
    BacteriumSpec {
        name: name.to_owned(),
        target_category: target.to_owned(),
        base_efficiency,
        mass_ratio_g_per_kg,
        storage_tag: storage_tag.to_owned(),
        note: Some(note.to_owned()),
    }
}

fn builtin_bacteria() -> Vec<BacteriumSpec> {
    vec![
        bacterium(
            "Ideonella_sakaiensis",
            "Plástico_PET",
            0.35,
            15.0,
            "Módulo Bacteriano T-1",
            "Degrades PET; space variant tolerates low to medium radiation",
        ),
        bacterium(
            "Deinococcus_radiodurans",
            "Orgánico",
            0.55,
            20.0,
            "BioCámara O-7",
            "Radiation-resistant extremophile; base strain for space modification",
        ),
        bacterium(
            "Bacillus_metallidurans",
            "Metal_ligero",
            0.15,
            25.0,
            "Contenedor M-5",
            "Metal-eating strain for bioleaching",
        ),
        bacterium(
            "Pseudomonas_textilis",
            "Textil",
            0.25,
            12.0,
            "Unidad BioTextil-2",
            "Breaks down cellulose and fibres",
        ),
        bacterium(
            "Geobacter_electrogenes",
            "Orgánico",
            0.30,
            18.0,
            "BioCell E-2",
            "Bioelectrogenic; produces electric current",
        ),
    ]
}

fn builtin_containers() -> OrderedMap<ContainerSpec> {
    [
        ("Módulo_Bacteriano_T-1", 5.0, 2000.0, 500.0),
        ("BioCámara_O-7", 12.0, 5000.0, 1200.0),
        ("Contenedor_M-5", 4.0, 1500.0, 400.0),
        ("Unidad_BioTextil_2", 6.0, 2500.0, 600.0),
    ]
    .into_iter()
    .map(|(key, volume_l, capacity_g, unit_cost_usd)| {
        (
            key,
            ContainerSpec {
                volume_l,
                capacity_g,
                unit_cost_usd,
            },
        )
    })
    .collect()
}

fn builtin_automation_levels() -> Vec<AutomationLevel> {
    [
        (0, "Manual", 0.00),
        (1, "Asistida", 0.05),
        (2, "Automatizada (BioAI)", 0.12),
        (3, "BioAI Avanzada + ML", 0.20),
    ]
    .into_iter()
    .map(|(ordinal, name, efficiency_bonus)| AutomationLevel {
        ordinal,
        name: name.to_owned(),
        efficiency_bonus,
    })
    .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn standard_catalog_has_expected_tables() {
        let catalog = ReferenceCatalog::standard();
        assert_eq!(catalog.profiles().len(), 2);
        assert_eq!(catalog.bacteria().len(), 5);
        assert_eq!(catalog.containers().len(), 4);
        assert_eq!(catalog.automation_levels().len(), 4);
    }

    #[test]
    fn first_profile_is_the_standard_mission() {
        let (name, profile) = ReferenceCatalog::standard().default_profile().unwrap();
        assert_eq!(name, "Estándar_mision");
        assert!((profile.per_person_kg_per_day - 1.45).abs() < f64::EPSILON);
        let keys: Vec<&str> = profile.breakdown.keys().collect();
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
    fn unknown_profile_falls_back_to_first() {
        let catalog = ReferenceCatalog::standard();
        let resolved = catalog.profile_or_default(Some("Lunar_base")).map(|(n, _)| n);
        assert_eq!(resolved, Some("Estándar_mision"));

        let resolved = catalog.profile_or_default(Some("Alto_organico")).map(|(n, _)| n);
        assert_eq!(resolved, Some("Alto_organico"));

        let resolved = catalog.profile_or_default(None).map(|(n, _)| n);
        assert_eq!(resolved, Some("Estándar_mision"));
    }

    #[test]
    fn dashboard_labels_resolve_to_tiers() {
        let catalog = ReferenceCatalog::standard();
        let ordinal = |label: &str| catalog.automation_by_label(label).map(|l| l.ordinal);
        assert_eq!(ordinal("Manual"), Some(0));
        assert_eq!(ordinal("N1"), Some(1));
        assert_eq!(ordinal("N2"), Some(2));
        assert_eq!(ordinal("N3"), Some(3));
        assert_eq!(ordinal("3"), Some(3));
        assert_eq!(ordinal("Asistida"), Some(1));
        assert_eq!(ordinal("N9"), None);
        assert_eq!(ordinal("7"), None);
    }

    #[test]
    fn default_tier_is_automated() {
        let level = ReferenceCatalog::standard().default_automation_level();
        assert_eq!(level.map(|l| l.name.as_str()), Some("Automatizada (BioAI)"));
        assert!(level.is_some_and(|l| (l.efficiency_bonus - 0.12).abs() < f64::EPSILON));
    }

    #[test]
    fn organic_candidates_keep_definition_order() {
        let names: Vec<&str> = ReferenceCatalog::standard()
            .candidates_for("Orgánico")
            .map(|b| b.name.as_str())
            .collect();
        assert_eq!(names, vec!["Deinococcus_radiodurans", "Geobacter_electrogenes"]);
    }

    #[test]
    fn storage_tags_normalize_to_container_keys() {
        let catalog = ReferenceCatalog::standard();
        assert_eq!(container_key("BioCámara O-7"), "BioCámara_O-7");
        assert!(catalog.container_for_tag("BioCámara O-7").is_some());
        assert!(catalog.container_for_tag("Módulo Bacteriano T-1").is_some());
        assert!(catalog.container_for_tag("Contenedor M-5").is_some());
        // The textile unit's tag keeps its hyphen, the table key uses an
        // underscore, so the lookup misses.
        assert!(catalog.container_for_tag("Unidad BioTextil-2").is_none());
        assert!(catalog.container_for_tag("generic").is_none());
    }

    #[test]
    fn manual_profile_uses_fixed_breakdown() {
        let profile = ReferenceCatalog::manual_profile(2.0);
        assert_eq!(profile.description, "Manual");
        assert_eq!(profile.breakdown.len(), 6);
        assert!(profile.breakdown.get("Otros").is_some_and(|f| (f - 0.25).abs() < f64::EPSILON));
    }
}
