//! Plain-text mission report.

use reclaimer_types::{CategoryResult, MissionSummary, SelectionSource};

const RULE_WIDTH: usize = 60;

const EARTH_NOTES: [&str; 3] = [
    "Less cargo shipped from Earth means fewer launch-related emissions.",
    "Subproducts can feed 3D printing and agriculture, reducing demand for Earth-sourced raw materials.",
    "Cost includes launch to orbit as a reference; real delivery to Mars would cost considerably more.",
];

const DESIGN_NOTES: [&str; 3] = [
    "Microwave-sized modules (40x40x40 cm) for BioChambers and storage.",
    "Flexible solar panels integrated into the casing.",
    "Modular layout: swappable containers and nanobot recharging in an integrated bank.",
];

/// Render the report for `summary`, stamped with `generated_at`.
pub fn render(summary: &MissionSummary, generated_at: &str) -> String {
    let rule = "-".repeat(RULE_WIDTH);
    let mut lines = vec![
        String::from("BIO-NANO RECLAIMER - MISSION REPORT"),
        format!("Generated: {generated_at}"),
        format!("Automation level: {}", summary.automation_level_name),
        format!(
            "Crew size: {} | Days: {} | Kg/person/day: {:.3}",
            summary.crew_size, summary.days, summary.per_person_kg_per_day
        ),
        format!("Total waste (kg): {:.2}", summary.total_waste_kg),
        format!("Total recovered gas (kg): {:.2}", summary.total_gas_kg),
        format!("Recovered energy (kWh): {:.2}", summary.total_energy_kwh),
        format!("Total bacteria required (g): {:.0}", summary.total_bacteria_g),
        format!("Total nanobots required (units): {}", summary.total_nanobots),
        format!("Total estimated cost (USD): {:.2}", summary.total_cost_usd),
        rule.clone(),
        String::from("Detail by waste type:"),
    ];
    for (category, result) in summary.categories.iter() {
        lines.extend(category_lines(category, result));
    }

    lines.push(rule.clone());
    lines.push(String::from("Impact compared with Earth:"));
    lines.extend(EARTH_NOTES.iter().map(|note| format!(" - {note}")));
    lines.push(rule.clone());
    lines.push(String::from("Recommended design (compact and accessible):"));
    lines.extend(DESIGN_NOTES.iter().map(|note| format!(" - {note}")));
    lines.push(rule);
    lines.join("\n")
}

/// One block per category, followed by a blank separator line.
fn category_lines(category: &str, result: &CategoryResult) -> [String; 11] {
    let source = match result.selection {
        SelectionSource::Override => ", custom",
        SelectionSource::Library => "",
        SelectionSource::Generic => ", generic fallback",
    };
    let storage = if result.container_found {
        format!("{}, {} units", result.storage_tag, result.container_units)
    } else {
        format!("{}, no matching container", result.storage_tag)
    };

    [
        format!(" {category}:"),
        format!("   Total mass (kg): {:.2}", result.mass_kg),
        format!(
            "   Bacterium: {}{source} (storage: {storage})",
            result.bacterium
        ),
        format!("   Adjusted efficiency: {:.3}", result.adjusted_efficiency),
        format!("   Subproduct (kg): {:.2}", result.subproduct_kg),
        format!("   Usable gas (kg): {:.2}", result.gas_kg),
        format!("   Energy (kWh): {:.2}", result.energy_kwh),
        format!("   Bacteria required (g): {:.0}", result.bacteria_g),
        format!("   Nanobot units: {}", result.nanobot_units),
        format!(
            "   Costs (bact/nano/cont/transport) USD: {:.2} / {:.2} / {:.2} / {:.2}",
            result.bacteria_cost_usd,
            result.nanobot_cost_usd,
            result.container_cost_usd,
            result.transport_cost_usd
        ),
        String::new(),
    ]
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use reclaimer_core::{MissionParameters, ReferenceCatalog, allocate};

    use super::*;

    fn reference_summary() -> MissionSummary {
        let catalog = ReferenceCatalog::standard();
        let profile = catalog.profile("Estándar_mision").unwrap().clone();
        let level = catalog.automation_level(2).unwrap().clone();
        allocate(&MissionParameters::new(8, 365, profile, level))
    }

    #[test]
    fn header_and_totals() {
        let summary = reference_summary();
        let text = render(&summary, "2026-01-01 00:00:00");
        assert!(text.starts_with("BIO-NANO RECLAIMER - MISSION REPORT\nGenerated: 2026-01-01 00:00:00\n"));
        assert!(text.contains("Automation level: Automatizada (BioAI)"));
        assert!(text.contains("Crew size: 8 | Days: 365 | Kg/person/day: 1.450"));
        assert!(text.contains("Total waste (kg): 4234.00"));
        assert!(text.contains(&format!(
            "Total nanobots required (units): {}",
            summary.total_nanobots
        )));
    }

    #[test]
    fn categories_in_profile_order_with_diagnostics() {
        let summary = reference_summary();
        let text = render(&summary, "now");
        let pet = text.find(" Plástico_PET:");
        let organic = text.find(" Orgánico:");
        let other = text.find(" Otros:");
        assert!(pet.is_some() && organic.is_some() && other.is_some());
        assert!(pet < organic && organic < other);

        assert!(text.contains("Bacterium: Deinococcus_radiodurans (storage: BioCámara O-7, 9 units)"));
        assert!(text.contains("Nanobot units: 898"));
        assert!(text.contains("Bacterium: Pseudomonas_textilis (storage: Unidad BioTextil-2, no matching container)"));
        assert!(text.contains("Bacterium: generic, generic fallback (storage: generic, no matching container)"));
    }

    #[test]
    fn category_blocks_are_separated_by_blank_lines() {
        let summary = reference_summary();
        let text = render(&summary, "now");
        assert!(text.contains("Detail by waste type:\n Plástico_PET:\n   Total mass (kg): "));
        let pet = summary.categories.get("Plástico_PET").unwrap();
        assert!(text.contains(&format!(
            " / {:.2}\n\n Orgánico:",
            pet.transport_cost_usd
        )));
        assert!(!text.ends_with('\n'));
        assert_eq!(
            text.lines().filter(|line| line.is_empty()).count(),
            summary.categories.len()
        );
    }

    #[test]
    fn closing_sections_present() {
        let summary = reference_summary();
        let text = render(&summary, "now");
        assert!(text.contains("Impact compared with Earth:"));
        assert!(text.contains("Recommended design (compact and accessible):"));
        assert!(text.ends_with(&"-".repeat(RULE_WIDTH)));
    }
}
