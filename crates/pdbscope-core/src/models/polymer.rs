use super::atom::Atom;
use super::monomer::Monomer;
use serde::Serialize;

/// Represents a polymer, i.e. one chain instance within one model.
///
/// All contained monomers share the polymer's model index and chain
/// label. A new polymer starts whenever the model index or the chain
/// label changes while scanning the source file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Polymer {
    monomers: Vec<Monomer>,
    /// The 1-based sequence number of the chain within its model.
    pub number: u32,
    /// The chain label.
    pub label: String,
    /// The 1-based model index; 0 for files without MODEL records.
    pub model_number: u32,
}

impl Polymer {
    /// Creates a new `Polymer`.
    ///
    /// # Arguments
    ///
    /// * `monomers` - The residues of the chain, in file order.
    /// * `number` - The per-model chain sequence number.
    /// * `label` - The chain label.
    /// * `model_number` - The model the chain belongs to.
    pub fn new(monomers: Vec<Monomer>, number: u32, label: &str, model_number: u32) -> Self {
        Self {
            monomers,
            number,
            label: label.to_string(),
            model_number,
        }
    }

    /// Returns the monomers of this polymer in file order.
    pub fn monomers(&self) -> &[Monomer] {
        &self.monomers
    }

    /// Returns an iterator over all atoms of all monomers, in file order.
    pub fn atoms(&self) -> impl Iterator<Item = &Atom> {
        self.monomers.iter().flat_map(|monomer| monomer.atoms())
    }

    /// Returns the amino-acid sequence of the chain as one-letter codes.
    pub fn sequence(&self) -> String {
        self.monomers.iter().map(|monomer| monomer.label).collect()
    }
}
