//! Request body shared by the calculation endpoints.

use std::collections::BTreeMap;

use reclaimer_core::{MissionParameters, ReferenceCatalog};
use reclaimer_types::{BacteriumSpec, CategoryName};
use serde::Deserialize;
use ts_rs::TS;

use crate::error::ApiError;

/// Request body for `POST /api/calculate` and `POST /api/summary`.
///
/// Every field is optional. Unknown profile names fall back to the first
/// built-in profile and unknown automation labels to level 2.
#[derive(Debug, Clone, PartialEq, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct CalculationRequest {
    /// Crew size (default 1).
    #[serde(default = "default_crew")]
    pub crew: u32,

    /// Mission length in days (default 1).
    #[serde(default = "default_days")]
    pub days: u32,

    /// Waste profile name.
    #[serde(default)]
    #[ts(optional)]
    pub profile: Option<String>,

    /// Automation label: `Manual`, `N1`, `N2`, `N3`, an ordinal or a tier
    /// name (default `N2`).
    #[serde(default)]
    #[ts(optional)]
    pub automation: Option<String>,

    /// Per-category bacteria replacing the library choice.
    #[serde(default)]
    pub overrides: BTreeMap<CategoryName, BacteriumSpec>,

    /// Whether culture delivery uses nanobots (default true).
    #[serde(default = "default_use_nanobots")]
    pub use_nanobots: bool,
}

impl Default for CalculationRequest {
    fn default() -> Self {
        Self {
            crew: default_crew(),
            days: default_days(),
            profile: None,
            automation: None,
            overrides: BTreeMap::new(),
            use_nanobots: default_use_nanobots(),
        }
    }
}

/// A request resolved against the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedRequest {
    /// Name of the profile actually used.
    pub profile_name: String,
    /// Engine inputs.
    pub params: MissionParameters,
}

impl CalculationRequest {
    /// Resolve profile and automation names and build engine inputs.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Internal`] only if the catalog has no profiles
    /// or no default automation tier.
    pub fn resolve(&self, catalog: &ReferenceCatalog) -> Result<ResolvedRequest, ApiError> {
        let (profile_name, profile) = catalog
            .profile_or_default(self.profile.as_deref())
            .ok_or_else(|| ApiError::Internal(String::from("catalog has no waste profiles")))?;

        let automation = self
            .automation
            .as_deref()
            .and_then(|label| catalog.automation_by_label(label))
            .or_else(|| catalog.default_automation_level())
            .ok_or_else(|| {
                ApiError::Internal(String::from("catalog has no default automation tier"))
            })?;

        let params = MissionParameters::new(
            self.crew,
            self.days,
            profile.clone(),
            automation.clone(),
        )
        .with_overrides(self.overrides.clone())
        .with_nanobots(self.use_nanobots);

        Ok(ResolvedRequest {
            profile_name: profile_name.to_owned(),
            params,
        })
    }
}

const fn default_crew() -> u32 {
    1
}

const fn default_days() -> u32 {
    1
}

const fn default_use_nanobots() -> bool {
    true
}
