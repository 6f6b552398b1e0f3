use super::atom::Atom;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Secondary-structure assignment of a residue.
///
/// Residues without an assignment are coil; that state is represented by
/// the absence of a tag rather than a variant of its own, because the
/// source format only declares HELIX and SHEET ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SecondaryStructure {
    Helix,
    Sheet,
}

#[derive(Debug, Error)]
#[error("Invalid secondary structure string")]
pub struct ParseSecondaryStructureError;

impl FromStr for SecondaryStructure {
    type Err = ParseSecondaryStructureError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "H" | "HELIX" => Ok(SecondaryStructure::Helix),
            "S" | "SHEET" => Ok(SecondaryStructure::Sheet),
            _ => Err(ParseSecondaryStructureError),
        }
    }
}

impl fmt::Display for SecondaryStructure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                SecondaryStructure::Helix => "HELIX",
                SecondaryStructure::Sheet => "SHEET",
            }
        )
    }
}

/// Represents a monomer, i.e. one residue within a polymer.
///
/// The atom list is ordered as encountered in the source file; hydrogens
/// and non-primary alternate conformers are already excluded by the
/// parser. All atoms of a monomer share model index and chain label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Monomer {
    atoms: Vec<Atom>,
    /// The amino-acid one-letter code; 'X' for unknown residues.
    pub label: char,
    /// The residue sequence number from the source file.
    pub id: i32,
    /// The secondary-structure tag, if the residue lies in a declared
    /// HELIX or SHEET range. `None` means coil.
    pub secondary_structure: Option<SecondaryStructure>,
}

impl Monomer {
    /// Creates a new `Monomer`.
    ///
    /// # Arguments
    ///
    /// * `atoms` - The atoms belonging to this residue, in file order.
    /// * `label` - The amino-acid one-letter code.
    /// * `id` - The residue sequence number.
    /// * `secondary_structure` - The HELIX/SHEET tag, if any.
    pub fn new(
        atoms: Vec<Atom>,
        label: char,
        id: i32,
        secondary_structure: Option<SecondaryStructure>,
    ) -> Self {
        Self {
            atoms,
            label,
            id,
            secondary_structure,
        }
    }

    /// Returns the atoms of this monomer in file order.
    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    // Role lookups are a deliberately lenient linear scan: the first atom
    // declared with the role wins and uniqueness is not validated, so a
    // mis-classified duplicate in the source file cannot shadow the real
    // backbone atom that came first.
    fn first_with_role(&self, role: &str) -> Option<&Atom> {
        self.atoms.iter().find(|atom| atom.role == role)
    }

    /// Returns the alpha carbon, or `None` if the residue lacks one.
    pub fn c_alpha(&self) -> Option<&Atom> {
        self.first_with_role("CA")
    }

    /// Returns the beta carbon, or `None` if the residue lacks one
    /// (glycine has no side chain and therefore no CB).
    pub fn c_beta(&self) -> Option<&Atom> {
        self.first_with_role("CB")
    }

    /// Returns the backbone carbonyl carbon, or `None` if absent.
    pub fn carbonyl_carbon(&self) -> Option<&Atom> {
        self.first_with_role("C")
    }

    /// Returns the backbone amide nitrogen, or `None` if absent.
    pub fn amide_nitrogen(&self) -> Option<&Atom> {
        self.first_with_role("N")
    }
}
