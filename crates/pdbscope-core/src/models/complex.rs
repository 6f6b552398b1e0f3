use super::monomer::Monomer;
use super::polymer::Polymer;
use serde::Serialize;

/// Represents the full result of parsing one structure file.
///
/// A complex spans all models and chains of the file. It is constructed
/// once per parse call and is immutable afterward; loading a new file
/// produces a fresh complex owned by the caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Complex {
    polymers: Vec<Polymer>,
    /// The number of explicit MODEL records in the file; 0 means a single
    /// implicit model.
    pub model_count: u32,
    /// The distinct chain labels encountered, lexicographically sorted.
    pub chains: Vec<String>,
    /// Whether any ATOM record with a 3-character residue name was seen.
    ///
    /// This is the heuristic the parser uses to tell amino acids from
    /// other heteroatoms, so 3-letter non-protein codes (e.g. ions) also
    /// count as protein-bearing. Known limitation, kept by design.
    pub contains_protein: bool,
}

impl Complex {
    /// Creates a new `Complex`.
    ///
    /// # Arguments
    ///
    /// * `polymers` - All chain instances across all models, in file order.
    /// * `model_count` - The number of MODEL records seen.
    /// * `chains` - The sorted distinct chain labels.
    /// * `contains_protein` - Whether any protein-like ATOM record was seen.
    pub fn new(
        polymers: Vec<Polymer>,
        model_count: u32,
        chains: Vec<String>,
        contains_protein: bool,
    ) -> Self {
        Self {
            polymers,
            model_count,
            chains,
            contains_protein,
        }
    }

    /// Returns all polymers across all models, in file order.
    pub fn polymers(&self) -> &[Polymer] {
        &self.polymers
    }

    /// Returns the polymers of the first available model.
    ///
    /// For files without MODEL records that is model 0; otherwise model 1.
    pub fn first_model_polymers(&self) -> impl Iterator<Item = &Polymer> {
        self.polymers
            .iter()
            .filter(|polymer| polymer.model_number <= 1)
    }

    /// Returns the monomers of the first available model, in file order.
    pub fn first_model_monomers(&self) -> impl Iterator<Item = &Monomer> {
        self.first_model_polymers()
            .flat_map(|polymer| polymer.monomers().iter())
    }
}
