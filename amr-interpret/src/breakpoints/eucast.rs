//! EUCAST 2025 breakpoints, simplified to the common surveillance
//! organism/antibiotic pairs.
//!
//! Same declaration-order rules as the CLSI table: family entries first.

use crate::taxonomy::OrganismPattern::{Family, Genus, Name};

use super::Threshold::{AtLeast, AtMost, Point, Range};
use super::{tiers, BreakpointEntry};

pub(super) fn entries() -> Vec<BreakpointEntry> {
    vec![
        // Enterobacteriaceae
        BreakpointEntry {
            organism: Family("Enterobacteriaceae"),
            antibiotic: "Amoxicillin",
            mic: Some(tiers(Some(AtMost(8.0)), Some(Point(16.0)), Some(AtLeast(32.0)))),
            disk: Some(tiers(Some(AtLeast(20.0)), Some(Range(14.0, 19.0)), Some(AtMost(13.0)))),
        },
        BreakpointEntry {
            organism: Family("Enterobacteriaceae"),
            antibiotic: "Ampicillin",
            mic: Some(tiers(Some(AtMost(8.0)), None, Some(AtLeast(16.0)))),
            disk: Some(tiers(Some(AtLeast(17.0)), None, Some(AtMost(16.0)))),
        },
        BreakpointEntry {
            organism: Family("Enterobacteriaceae"),
            antibiotic: "Ceftazidime",
            mic: Some(tiers(Some(AtMost(1.0)), Some(Range(2.0, 4.0)), Some(AtLeast(8.0)))),
            disk: Some(tiers(Some(AtLeast(23.0)), Some(Range(20.0, 22.0)), Some(AtMost(19.0)))),
        },
        BreakpointEntry {
            organism: Family("Enterobacteriaceae"),
            antibiotic: "Cefotaxime",
            mic: Some(tiers(Some(AtMost(1.0)), Some(Point(2.0)), Some(AtLeast(4.0)))),
            disk: Some(tiers(Some(AtLeast(23.0)), Some(Range(20.0, 22.0)), Some(AtMost(19.0)))),
        },
        BreakpointEntry {
            organism: Family("Enterobacteriaceae"),
            antibiotic: "Ciprofloxacin",
            mic: Some(tiers(Some(AtMost(0.25)), Some(Point(0.5)), Some(AtLeast(1.0)))),
            disk: Some(tiers(Some(AtLeast(21.0)), Some(Range(16.0, 20.0)), Some(AtMost(15.0)))),
        },
        BreakpointEntry {
            organism: Family("Enterobacteriaceae"),
            antibiotic: "Gentamicin",
            mic: Some(tiers(Some(AtMost(2.0)), Some(Point(4.0)), Some(AtLeast(8.0)))),
            disk: Some(tiers(Some(AtLeast(16.0)), Some(Range(13.0, 15.0)), Some(AtMost(12.0)))),
        },
        BreakpointEntry {
            organism: Family("Enterobacteriaceae"),
            antibiotic: "Tetracycline",
            mic: Some(tiers(Some(AtMost(1.0)), Some(Point(2.0)), Some(AtLeast(4.0)))),
            disk: Some(tiers(Some(AtLeast(16.0)), Some(Range(13.0, 15.0)), Some(AtMost(12.0)))),
        },
        // Staphylococcus aureus
        BreakpointEntry {
            organism: Name("Staphylococcus aureus"),
            antibiotic: "Methicillin",
            mic: Some(tiers(Some(AtMost(2.0)), None, Some(AtLeast(4.0)))),
            disk: Some(tiers(Some(AtLeast(10.0)), None, Some(AtMost(9.0)))),
        },
        BreakpointEntry {
            organism: Name("Staphylococcus aureus"),
            antibiotic: "Ciprofloxacin",
            mic: Some(tiers(Some(AtMost(0.5)), Some(Point(1.0)), Some(AtLeast(2.0)))),
            disk: Some(tiers(Some(AtLeast(22.0)), Some(Range(19.0, 21.0)), Some(AtMost(18.0)))),
        },
        BreakpointEntry {
            organism: Name("Staphylococcus aureus"),
            antibiotic: "Gentamicin",
            mic: Some(tiers(Some(AtMost(1.0)), Some(Point(2.0)), Some(AtLeast(4.0)))),
            disk: Some(tiers(Some(AtLeast(16.0)), Some(Range(13.0, 15.0)), Some(AtMost(12.0)))),
        },
        // Enterococcus spp.
        BreakpointEntry {
            organism: Genus("Enterococcus"),
            antibiotic: "Ampicillin",
            mic: Some(tiers(Some(AtMost(4.0)), None, Some(AtLeast(8.0)))),
            disk: Some(tiers(Some(AtLeast(17.0)), None, Some(AtMost(16.0)))),
        },
        BreakpointEntry {
            organism: Genus("Enterococcus"),
            antibiotic: "Vancomycin",
            mic: Some(tiers(Some(AtMost(4.0)), Some(Range(8.0, 16.0)), Some(AtLeast(32.0)))),
            disk: Some(tiers(Some(AtLeast(15.0)), Some(Range(10.0, 14.0)), Some(AtMost(9.0)))),
        },
        // Pseudomonas aeruginosa
        BreakpointEntry {
            organism: Name("Pseudomonas aeruginosa"),
            antibiotic: "Ceftazidime",
            mic: Some(tiers(Some(AtMost(8.0)), Some(Point(16.0)), Some(AtLeast(32.0)))),
            disk: Some(tiers(Some(AtLeast(18.0)), Some(Range(15.0, 17.0)), Some(AtMost(14.0)))),
        },
        BreakpointEntry {
            organism: Name("Pseudomonas aeruginosa"),
            antibiotic: "Ciprofloxacin",
            mic: Some(tiers(Some(AtMost(0.5)), Some(Point(1.0)), Some(AtLeast(2.0)))),
            disk: Some(tiers(Some(AtLeast(21.0)), Some(Range(16.0, 20.0)), Some(AtMost(15.0)))),
        },
        BreakpointEntry {
            organism: Name("Pseudomonas aeruginosa"),
            antibiotic: "Gentamicin",
            mic: Some(tiers(Some(AtMost(4.0)), Some(Point(8.0)), Some(AtLeast(16.0)))),
            disk: Some(tiers(Some(AtLeast(16.0)), Some(Range(13.0, 15.0)), Some(AtMost(12.0)))),
        },
        // Acinetobacter spp.
        BreakpointEntry {
            organism: Genus("Acinetobacter"),
            antibiotic: "Ceftazidime",
            mic: Some(tiers(Some(AtMost(4.0)), Some(Point(8.0)), Some(AtLeast(16.0)))),
            disk: Some(tiers(Some(AtLeast(18.0)), Some(Range(15.0, 17.0)), Some(AtMost(14.0)))),
        },
        BreakpointEntry {
            organism: Genus("Acinetobacter"),
            antibiotic: "Ciprofloxacin",
            mic: Some(tiers(Some(AtMost(1.0)), Some(Point(2.0)), Some(AtLeast(4.0)))),
            disk: Some(tiers(Some(AtLeast(21.0)), Some(Range(16.0, 20.0)), Some(AtMost(15.0)))),
        },
    ]
}
