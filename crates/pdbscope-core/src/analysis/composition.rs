use crate::chem::residues::{self, ResidueProperty};
use crate::models::complex::Complex;
use crate::models::monomer::SecondaryStructure;
use serde::Serialize;
use std::collections::BTreeMap;

/// Aggregated composition statistics over the first model of a complex.
///
/// Counts cover residues only; later models of an NMR ensemble repeat
/// the same sequence and would inflate every bucket by the model count.
/// Map keys are ordered so that serialized output is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Composition {
    /// Residue counts keyed by three-letter code.
    pub residues: BTreeMap<String, u32>,
    /// Residue counts keyed by chemical property class.
    pub properties: BTreeMap<String, u32>,
    /// Residue counts keyed by secondary-structure class.
    pub secondary_structure: BTreeMap<String, u32>,
}

impl Composition {
    /// The total number of residues counted.
    pub fn total_residues(&self) -> u32 {
        self.residues.values().sum()
    }
}

fn structure_key(structure: Option<SecondaryStructure>) -> &'static str {
    match structure {
        Some(SecondaryStructure::Helix) => "Helix",
        Some(SecondaryStructure::Sheet) => "Sheet",
        None => "Coil",
    }
}

/// Tallies residue, property and secondary-structure counts over the
/// first model. Unknown residues land in the `UNK` and `Unknown`
/// buckets rather than being dropped.
pub fn composition(complex: &Complex) -> Composition {
    let mut tally = Composition::default();
    for monomer in complex.first_model_monomers() {
        let code = residues::three_letter(monomer.label);
        *tally.residues.entry(code.to_owned()).or_insert(0) += 1;

        let property = residues::property(monomer.label);
        *tally
            .properties
            .entry(property.to_string())
            .or_insert(0) += 1;

        let key = structure_key(monomer.secondary_structure);
        *tally
            .secondary_structure
            .entry(key.to_owned())
            .or_insert(0) += 1;
    }
    tally
}

/// Convenience predicate for property-based selections.
pub fn has_property(label: char, property: ResidueProperty) -> bool {
    residues::property(label) == property
}
