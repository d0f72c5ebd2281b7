//! Bacteria selection precedence.
//!
//! For a waste category the first matching rule wins:
//!
//! 1. An entry in the caller's override map, used verbatim.
//! 2. The first library entry whose `target_category` equals the category.
//!    Later entries targeting the same category are never reached.
//! 3. A synthesized generic entry ([`BacteriumSpec::generic`]).
//!
//! Selection never fails.

use std::borrow::Cow;
use std::collections::BTreeMap;

use reclaimer_types::{BacteriumSpec, CategoryName, SelectionSource};

/// The bacterium chosen for a category and the rule that chose it.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection<'a> {
    /// The entry to use. Borrowed from the overrides or the library,
    /// owned for the generic fallback.
    pub spec: Cow<'a, BacteriumSpec>,
    /// Which rule matched.
    pub source: SelectionSource,
}

/// Resolve the bacterium for `category`.
///
/// Override entries are not validated: out-of-range efficiencies or a
/// `target_category` that disagrees with the key are taken as given.
pub fn select_bacterium<'a>(
    category: &str,
    overrides: &'a BTreeMap<CategoryName, BacteriumSpec>,
    library: &'a [BacteriumSpec],
) -> Selection<'a> {
    if let Some(spec) = overrides.get(category) {
        return Selection {
            spec: Cow::Borrowed(spec),
            source: SelectionSource::Override,
        };
    }

    if let Some(spec) = library.iter().find(|b| b.target_category == category) {
        return Selection {
            spec: Cow::Borrowed(spec),
            source: SelectionSource::Library,
        };
    }

    Selection {
        spec: Cow::Owned(BacteriumSpec::generic(category)),
        source: SelectionSource::Generic,
    }
}

#[cfg(test)]
mod tests {
    use reclaimer_types::{GENERIC_BACTERIUM_NAME, GENERIC_STORAGE_TAG};

    use super::*;
    use crate::catalog::ReferenceCatalog;

    fn custom(name: &str, target: &str, efficiency: f64) -> BacteriumSpec {
        BacteriumSpec {
            name: name.to_owned(),
            target_category: target.to_owned(),
            base_efficiency: efficiency,
            mass_ratio_g_per_kg: 10.0,
            storage_tag: String::from("CustomContainer"),
            note: None,
        }
    }

    #[test]
    fn library_match_is_first_in_definition_order() {
        let library = ReferenceCatalog::standard().bacteria();
        let overrides = BTreeMap::new();
        let selection = select_bacterium("Orgánico", &overrides, library);
        assert_eq!(selection.source, SelectionSource::Library);
        assert_eq!(selection.spec.name, "Deinococcus_radiodurans");
    }

    #[test]
    fn override_shadows_library() {
        let library = ReferenceCatalog::standard().bacteria();
        let mut overrides = BTreeMap::new();
        overrides.insert(
            String::from("Orgánico"),
            custom("Geobacter_custom", "Orgánico", 0.9),
        );

        let selection = select_bacterium("Orgánico", &overrides, library);
        assert_eq!(selection.source, SelectionSource::Override);
        assert_eq!(selection.spec.name, "Geobacter_custom");
    }

    #[test]
    fn override_is_used_verbatim_even_when_out_of_range() {
        let mut overrides = BTreeMap::new();
        overrides.insert(String::from("Textil"), custom("Odd", "Plástico_PET", 4.0));

        let selection = select_bacterium("Textil", &overrides, &[]);
        assert_eq!(selection.source, SelectionSource::Override);
        assert_eq!(selection.spec.target_category, "Plástico_PET");
        assert!((selection.spec.base_efficiency - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn unmatched_category_gets_generic_fallback() {
        let library = ReferenceCatalog::standard().bacteria();
        let overrides = BTreeMap::new();
        let selection = select_bacterium("Higiene_y_papeleria", &overrides, library);
        assert_eq!(selection.source, SelectionSource::Generic);
        assert!(matches!(selection.spec, Cow::Owned(_)));
        assert_eq!(selection.spec.name, GENERIC_BACTERIUM_NAME);
        assert_eq!(selection.spec.target_category, "Higiene_y_papeleria");
        assert_eq!(selection.spec.storage_tag, GENERIC_STORAGE_TAG);
        assert!((selection.spec.base_efficiency - 0.20).abs() < f64::EPSILON);
        assert!((selection.spec.mass_ratio_g_per_kg - 15.0).abs() < f64::EPSILON);
    }

    #[test]
    fn override_for_another_category_does_not_leak() {
        let library = ReferenceCatalog::standard().bacteria();
        let mut overrides = BTreeMap::new();
        overrides.insert(String::from("Otros"), custom("Otros_strain", "Otros", 0.3));

        let selection = select_bacterium("Metal_ligero", &overrides, library);
        assert_eq!(selection.source, SelectionSource::Library);
        assert_eq!(selection.spec.name, "Bacillus_metallidurans");
    }
}
