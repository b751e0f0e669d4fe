//! Resistance mechanism signature catalogue
//!
//! Maps phenotypic resistance patterns (organism group x antibiotic class)
//! to a suspected mechanism label. This is a heuristic signal, not a
//! certified diagnostic: a match means the mechanism is biologically
//! plausible for the observed resistance, nothing more. Callers must treat
//! the result as advisory.
//!
//! Catalogue order is first-match-wins, so the more specific signatures
//! (MRSA for S. aureus, VRE for enterococci) are declared ahead of the
//! broader enzyme families.

use std::fmt;

use serde::Serialize;

use crate::taxonomy::OrganismPattern::{self, Genus, Name};
use crate::taxonomy;

/// How specific a signature is to its mechanism versus other explanations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MechanismConfidence {
    High,
    Moderate,
}

impl fmt::Display for MechanismConfidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MechanismConfidence::High => f.write_str("High"),
            MechanismConfidence::Moderate => f.write_str("Moderate"),
        }
    }
}

/// A known resistance-mechanism pattern
#[derive(Debug)]
pub struct MechanismSignature {
    pub name: &'static str,
    /// Organism groups for which this mechanism is biologically plausible
    pub organisms: &'static [OrganismPattern],
    /// Antibiotics whose resistance is diagnostic of this mechanism
    pub antibiotics: &'static [&'static str],
    /// Human-readable description of the phenotypic pattern
    pub pattern: &'static str,
    pub confidence: MechanismConfidence,
}

static CATALOGUE: &[MechanismSignature] = &[
    MechanismSignature {
        name: "MRSA",
        organisms: &[Name("Staphylococcus aureus")],
        antibiotics: &["Methicillin", "Oxacillin"],
        pattern: "methicillin resistance",
        confidence: MechanismConfidence::High,
    },
    MechanismSignature {
        name: "VRE",
        organisms: &[
            Name("Enterococcus faecalis"),
            Name("Enterococcus faecium"),
            Genus("Enterococcus"),
        ],
        antibiotics: &["Vancomycin"],
        pattern: "vancomycin resistance",
        confidence: MechanismConfidence::High,
    },
    MechanismSignature {
        name: "Carbapenemase",
        organisms: &[
            Name("Klebsiella pneumoniae"),
            Name("Escherichia coli"),
            Genus("Enterobacter"),
            Genus("Serratia"),
            Genus("Citrobacter"),
            Genus("Acinetobacter"),
            Name("Pseudomonas aeruginosa"),
        ],
        antibiotics: &["Imipenem", "Meropenem", "Ertapenem", "Doripenem"],
        pattern: "resistance to carbapenems",
        confidence: MechanismConfidence::High,
    },
    MechanismSignature {
        name: "ESBL",
        organisms: &[
            Name("Escherichia coli"),
            Name("Klebsiella pneumoniae"),
            Genus("Klebsiella"),
            Genus("Enterobacter"),
            Genus("Serratia"),
            Genus("Citrobacter"),
            Genus("Proteus"),
            Genus("Salmonella"),
        ],
        antibiotics: &[
            "Ceftazidime",
            "Cefotaxime",
            "Ceftriaxone",
            "Cefpodoxime",
            "Aztreonam",
        ],
        pattern: "resistance to 3rd generation cephalosporins",
        confidence: MechanismConfidence::High,
    },
    MechanismSignature {
        name: "AmpC",
        organisms: &[
            Genus("Enterobacter"),
            Genus("Citrobacter"),
            Genus("Serratia"),
            Genus("Morganella"),
            Genus("Providencia"),
            Name("Pseudomonas aeruginosa"),
            Genus("Acinetobacter"),
        ],
        antibiotics: &["Ceftazidime", "Cefotaxime", "Ceftriaxone", "Cefpodoxime"],
        pattern: "resistance to cephalosporins with preserved susceptibility to carbapenems",
        confidence: MechanismConfidence::Moderate,
    },
];

/// Find the first signature whose organism and antibiotic sets both match.
///
/// `organism` must already be normalized. Called only after the interpreter
/// has determined a Resistant category; returns `None` when no known
/// mechanism explains the pattern.
pub fn infer_mechanism(organism: &str, antibiotic: &str) -> Option<&'static MechanismSignature> {
    CATALOGUE.iter().find(|signature| {
        signature.organisms.iter().any(|p| p.matches(organism))
            && signature
                .antibiotics
                .iter()
                .any(|ab| taxonomy::name_contains(ab, antibiotic))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::taxonomy::normalize_organism;

    #[test]
    fn mrsa_signature_matches_staph_aureus_methicillin() {
        let sig = infer_mechanism(&normalize_organism("staphylococcus aureus"), "Methicillin")
            .expect("MRSA signature expected");
        assert_eq!(sig.name, "MRSA");
        assert_eq!(sig.confidence, MechanismConfidence::High);
    }

    #[test]
    fn esbl_signature_matches_e_coli_ceftazidime() {
        let sig = infer_mechanism("Escherichia Coli", "Ceftazidime").unwrap();
        assert_eq!(sig.name, "ESBL");
    }

    #[test]
    fn ampc_comes_after_esbl_for_shared_antibiotics() {
        // Enterobacter + Ceftazidime matches both ESBL and AmpC; the ESBL
        // signature is declared first and wins.
        let sig = infer_mechanism("Enterobacter Cloacae", "Ceftazidime").unwrap();
        assert_eq!(sig.name, "ESBL");
        // Pseudomonas is not in the ESBL organism set, so AmpC applies.
        let sig = infer_mechanism("Pseudomonas Aeruginosa", "Ceftazidime").unwrap();
        assert_eq!(sig.name, "AmpC");
        assert_eq!(sig.confidence, MechanismConfidence::Moderate);
    }

    #[test]
    fn vre_requires_enterococcus() {
        assert!(infer_mechanism("Enterococcus Faecium", "Vancomycin").is_some());
        assert!(infer_mechanism("Escherichia Coli", "Vancomycin").is_none());
    }

    #[test]
    fn no_signature_for_unrelated_pattern() {
        assert!(infer_mechanism("Escherichia Coli", "Tetracycline").is_none());
    }
}
