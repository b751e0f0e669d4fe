//! Organism name normalization and taxonomic pattern matching
//!
//! Uploaded organism names are free text with inconsistent casing and
//! spacing, while breakpoints are defined at species, genus, or family
//! granularity. This module normalizes names and matches them against
//! reference patterns. Family membership is kept as a genus-to-family data
//! table rather than conditional logic so the taxonomy can be extended
//! without touching the matching code.

use std::fmt;

/// Genus (lowercase) to family (lowercase) membership table
static GENUS_FAMILY: &[(&str, &str)] = &[
    ("escherichia", "enterobacteriaceae"),
    ("klebsiella", "enterobacteriaceae"),
    ("enterobacter", "enterobacteriaceae"),
    ("salmonella", "enterobacteriaceae"),
    ("shigella", "enterobacteriaceae"),
    ("citrobacter", "enterobacteriaceae"),
    ("serratia", "enterobacteriaceae"),
    ("proteus", "enterobacteriaceae"),
    ("providencia", "enterobacteriaceae"),
    ("morganella", "enterobacteriaceae"),
    ("yersinia", "enterobacteriaceae"),
    ("erwinia", "enterobacteriaceae"),
];

/// Normalize a free-text organism name: collapse whitespace and title-case
/// each word ("  klebsiella   PNEUMONIAE" -> "Klebsiella Pneumoniae").
pub fn normalize_organism(raw: &str) -> String {
    raw.split_whitespace()
        .map(title_case_word)
        .collect::<Vec<_>>()
        .join(" ")
}

fn title_case_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Look up the family a genus belongs to, if known
pub fn family_of(genus: &str) -> Option<&'static str> {
    let genus = genus.to_lowercase();
    GENUS_FAMILY
        .iter()
        .find(|(g, _)| *g == genus)
        .map(|(_, family)| *family)
}

/// Case-insensitive substring containment, used for antibiotic name matching
pub fn name_contains(pattern: &str, value: &str) -> bool {
    value.to_lowercase().contains(&pattern.to_lowercase())
}

/// An organism pattern as declared in reference data.
///
/// Matching granularity, most to least specific scope:
/// - `Family`: the organism's genus is a member of the named family
/// - `Genus`: the organism name starts with the genus ("X spp." entries)
/// - `Name`: the pattern text appears in the organism name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrganismPattern {
    Family(&'static str),
    Genus(&'static str),
    Name(&'static str),
}

impl OrganismPattern {
    /// Test a normalized organism name against this pattern
    pub fn matches(&self, normalized: &str) -> bool {
        let value = normalized.to_lowercase();
        match self {
            OrganismPattern::Family(family) => {
                let family = family.to_lowercase();
                GENUS_FAMILY
                    .iter()
                    .any(|(genus, f)| *f == family && value.contains(genus))
            }
            OrganismPattern::Genus(genus) => value.starts_with(&genus.to_lowercase()),
            OrganismPattern::Name(name) => value.contains(&name.to_lowercase()),
        }
    }
}

impl fmt::Display for OrganismPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrganismPattern::Family(family) => f.write_str(family),
            OrganismPattern::Genus(genus) => write!(f, "{} spp.", genus),
            OrganismPattern::Name(name) => f.write_str(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalization_collapses_whitespace_and_cases() {
        assert_eq!(
            normalize_organism("  escherichia   COLI "),
            "Escherichia Coli"
        );
        assert_eq!(normalize_organism("Staphylococcus aureus"), "Staphylococcus Aureus");
    }

    #[test]
    fn family_lookup_is_case_insensitive() {
        assert_eq!(family_of("Klebsiella"), Some("enterobacteriaceae"));
        assert_eq!(family_of("pseudomonas"), None);
    }

    #[test]
    fn family_pattern_matches_member_genera() {
        let pattern = OrganismPattern::Family("Enterobacteriaceae");
        assert!(pattern.matches("Escherichia Coli"));
        assert!(pattern.matches("Proteus Mirabilis"));
        assert!(!pattern.matches("Pseudomonas Aeruginosa"));
    }

    #[test]
    fn genus_pattern_matches_subspecies() {
        let pattern = OrganismPattern::Genus("Klebsiella");
        assert!(pattern.matches(&normalize_organism(
            "Klebsiella pneumoniae subsp. ozaenae"
        )));
        assert!(!pattern.matches("Escherichia Coli"));
    }

    #[test]
    fn name_pattern_is_substring_containment() {
        let pattern = OrganismPattern::Name("Staphylococcus aureus");
        assert!(pattern.matches("Staphylococcus Aureus"));
        assert!(!pattern.matches("Staphylococcus Epidermidis"));
    }

    #[test]
    fn antibiotic_matching_ignores_case() {
        assert!(name_contains("ceftazidime", "Ceftazidime"));
        assert!(name_contains("Gentamicin", "gentamicin (high level)"));
        assert!(!name_contains("Vancomycin", "Gentamicin"));
    }
}
