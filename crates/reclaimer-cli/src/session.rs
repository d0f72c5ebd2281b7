//! The interactive planning session.
//!
//! Walks the operator through crew, duration, waste profile, automation
//! tier, optional per-category bacteria choices and nanobot use, runs the
//! engine, prints the report and offers to save it.

use std::collections::BTreeMap;
use std::io::{BufRead, Write};
use std::path::PathBuf;

use reclaimer_core::catalog::DEFAULT_MANUAL_KG_PER_DAY;
use reclaimer_core::{AllocationEngine, MissionParameters, ReclaimerConfig, ReferenceCatalog};
use reclaimer_types::{
    AutomationLevel, BacteriumSpec, CategoryName, GENERIC_BASE_EFFICIENCY,
    GENERIC_MASS_RATIO_G_PER_KG, MissionSummary, WasteProfile,
};
use tracing::{info, warn};

use crate::error::PromptError;
use crate::prompt::Prompter;
use crate::report;

/// Report file name offered when saving.
pub const DEFAULT_REPORT_FILE: &str = "mission_report.txt";

/// Storage tag offered for a custom bacterium.
pub const DEFAULT_CUSTOM_STORAGE: &str = "CustomContainer";

/// What a completed session produced.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionOutcome {
    /// Name of the profile used.
    pub profile_name: String,
    /// The engine's result.
    pub summary: MissionSummary,
    /// The rendered report.
    pub report: String,
    /// Where the report was saved, if it was.
    pub saved_to: Option<PathBuf>,
}

/// One run of the terminal planner.
pub struct Session<'a, R, W> {
    prompter: Prompter<R, W>,
    catalog: &'a ReferenceCatalog,
    config: &'a ReclaimerConfig,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    /// Create a session reading answers through `prompter`.
    pub const fn new(
        prompter: Prompter<R, W>,
        catalog: &'a ReferenceCatalog,
        config: &'a ReclaimerConfig,
    ) -> Self {
        Self {
            prompter,
            catalog,
            config,
        }
    }

    /// Consume the session and return its prompter.
    #[cfg(test)]
    pub fn into_prompter(self) -> Prompter<R, W> {
        self.prompter
    }

    /// Run the full question sequence.
    pub fn run(&mut self, generated_at: &str) -> Result<SessionOutcome, PromptError> {
        self.prompter.say("==============================================")?;
        self.prompter.say("   BIO-NANO RECLAIMER - MISSION PLANNER")?;
        self.prompter.say("==============================================")?;

        let defaults = &self.config.mission;
        let crew = self.prompter.ask_parsed(
            &format!("Crew size (default {}): ", defaults.default_crew),
            defaults.default_crew,
        )?;
        let days = self.prompter.ask_parsed(
            &format!("Mission length in days (default {}): ", defaults.default_days),
            defaults.default_days,
        )?;

        let (profile_name, profile) = self.choose_profile()?;
        let automation = self.choose_automation()?;
        let overrides = self.review_bacteria(&profile)?;
        let use_nanobots = self.prompter.confirm(
            "\nUse nanobots to transport and deliver bacteria? (y/n, default y): ",
            true,
        )?;

        let params = MissionParameters::new(crew, days, profile, automation)
            .with_overrides(overrides)
            .with_nanobots(use_nanobots);
        let summary = AllocationEngine::new(self.catalog, self.config.conversion).allocate(&params);
        info!(
            crew,
            days,
            profile = %profile_name,
            automation = %summary.automation_level_name,
            total_cost_usd = summary.total_cost_usd,
            "mission planned"
        );

        let report = report::render(&summary, generated_at);
        self.prompter.say("")?;
        self.prompter.say(&report)?;
        self.prompter.say("")?;

        let saved_to = self.offer_save(&report)?;
        self.prompter.say(
            "\nDone. Use this report for manual analysis and adjust parameters for new runs.",
        )?;

        Ok(SessionOutcome {
            profile_name,
            summary,
            report,
            saved_to,
        })
    }

    /// Numbered profile list plus a final "customize" entry. A number
    /// outside the list selects the manual profile; an answer that is not a
    /// number selects the first profile.
    fn choose_profile(&mut self) -> Result<(String, WasteProfile), PromptError> {
        self.prompter.say("\nAvailable waste profiles:")?;
        let profiles = self.catalog.profiles();
        for (i, (name, profile)) in profiles.iter().enumerate() {
            self.prompter.say(&format!(
                " {}) {name} - {} (kg/person/day: {})",
                i.saturating_add(1),
                profile.description,
                profile.per_person_kg_per_day
            ))?;
        }
        self.prompter.say(&format!(
            " {}) Customize values manually",
            profiles.len().saturating_add(1)
        ))?;

        let choice = self.prompter.ask_parsed("Select profile (number): ", 1_usize)?;
        let picked = choice
            .checked_sub(1)
            .and_then(|index| profiles.iter().nth(index));
        if let Some((name, profile)) = picked {
            return Ok((name.to_owned(), profile.clone()));
        }

        let per_person = self.prompter.ask_parsed(
            &format!("Kg per person per day (e.g. {DEFAULT_MANUAL_KG_PER_DAY}): "),
            DEFAULT_MANUAL_KG_PER_DAY,
        )?;
        let profile = ReferenceCatalog::manual_profile(per_person);
        Ok((profile.description.clone(), profile))
    }

    /// Automation tier by ordinal; anything unknown selects the default.
    fn choose_automation(&mut self) -> Result<AutomationLevel, PromptError> {
        self.prompter.say("\nAutomation levels:")?;
        for level in self.catalog.automation_levels() {
            self.prompter.say(&format!(
                " {}) {} (efficiency bonus: +{:.0}%)",
                level.ordinal,
                level.name,
                level.efficiency_bonus * 100.0
            ))?;
        }

        let answer = self.prompter.ask("Select level (number): ")?;
        let chosen = answer
            .parse::<u8>()
            .ok()
            .and_then(|ordinal| self.catalog.automation_level(ordinal))
            .or_else(|| self.catalog.default_automation_level())
            .cloned();
        Ok(chosen.unwrap_or_else(|| AutomationLevel {
            ordinal: 0,
            name: String::from("Manual"),
            efficiency_bonus: 0.0,
        }))
    }

    /// Optionally walk each category and collect overrides.
    fn review_bacteria(
        &mut self,
        profile: &WasteProfile,
    ) -> Result<BTreeMap<CategoryName, BacteriumSpec>, PromptError> {
        let mut overrides = BTreeMap::new();
        let review = self.prompter.confirm(
            "\nReview or customize the bacteria assigned to each waste type? (y/n): ",
            false,
        )?;
        if !review {
            return Ok(overrides);
        }

        for category in profile.breakdown.keys() {
            self.prompter.say(&format!("\nWaste type: {category}"))?;
            let candidates: Vec<&BacteriumSpec> = self.catalog.candidates_for(category).collect();
            if candidates.is_empty() {
                self.prompter.say(" No library bacteria target this type.")?;
            } else {
                let names: Vec<&str> = candidates.iter().map(|b| b.name.as_str()).collect();
                self.prompter.say(&format!(" Available: {}", names.join(", ")))?;
            }
            self.prompter.say("  1) Use the recommended bacterium (if any)")?;
            self.prompter.say("  2) Enter a custom bacterium")?;
            self.prompter.say("  3) Keep the default")?;

            match self.prompter.ask(" Option (1/2/3): ")?.as_str() {
                "1" => {
                    if let Some(first) = candidates.first() {
                        overrides.insert(category.to_owned(), (*first).clone());
                    }
                }
                "2" => {
                    let spec = self.custom_bacterium(category)?;
                    overrides.insert(category.to_owned(), spec);
                }
                _ => {}
            }
        }
        Ok(overrides)
    }

    fn custom_bacterium(&mut self, category: &str) -> Result<BacteriumSpec, PromptError> {
        let name = self
            .prompter
            .ask_text(" Bacterium name: ", &format!("Custom_{category}"))?;
        let base_efficiency = self.prompter.ask_parsed(
            " Estimated base efficiency (0.1-0.9): ",
            GENERIC_BASE_EFFICIENCY,
        )?;
        let mass_ratio_g_per_kg = self.prompter.ask_parsed(
            " Grams of bacteria per kg of target (e.g. 15): ",
            GENERIC_MASS_RATIO_G_PER_KG,
        )?;
        let storage_tag = self
            .prompter
            .ask_text(" Recommended container/storage: ", DEFAULT_CUSTOM_STORAGE)?;

        Ok(BacteriumSpec {
            name,
            target_category: category.to_owned(),
            base_efficiency,
            mass_ratio_g_per_kg,
            storage_tag,
            note: None,
        })
    }

    fn offer_save(&mut self, report: &str) -> Result<Option<PathBuf>, PromptError> {
        if !self
            .prompter
            .confirm("Save the report to a .txt file? (y/n): ", false)?
        {
            return Ok(None);
        }
        let file = self.prompter.ask_text(
            &format!("File name (e.g. {DEFAULT_REPORT_FILE}): "),
            DEFAULT_REPORT_FILE,
        )?;
        let path = PathBuf::from(file);
        match std::fs::write(&path, report) {
            Ok(()) => {
                self.prompter
                    .say(&format!("Report saved to: {}", path.display()))?;
                Ok(Some(path))
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to save report");
                self.prompter.say(&format!("Error saving report: {e}"))?;
                Ok(None)
            }
        }
    }
}
