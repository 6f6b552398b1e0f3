use phf::{Map, phf_map};
use std::fmt;

/// Physicochemical classification of an amino acid side chain.
///
/// Pyrrolysine is treated like lysine and selenocysteine like cysteine;
/// the unknown residue 'X' carries no classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ResidueProperty {
    Nonpolar,
    Polar,
    PositivelyCharged,
    NegativelyCharged,
    Aromatic,
    Unknown,
}

impl fmt::Display for ResidueProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                ResidueProperty::Nonpolar => "Nonpolar",
                ResidueProperty::Polar => "Polar",
                ResidueProperty::PositivelyCharged => "Pos. charged",
                ResidueProperty::NegativelyCharged => "Neg. charged",
                ResidueProperty::Aromatic => "Aromatic",
                ResidueProperty::Unknown => "Unknown",
            }
        )
    }
}

// The 20 standard amino acids plus pyrrolysine (PYL), selenocysteine (SEC)
// and the unknown placeholder (UNK). D-isomer codes map to the same
// one-letter code as their L counterparts.
static THREE_TO_ONE: Map<&'static str, char> = phf_map! {
    "ALA" => 'A', "CYS" => 'C', "ASP" => 'D', "GLU" => 'E', "PHE" => 'F',
    "HIS" => 'H', "ILE" => 'I', "LYS" => 'K', "LEU" => 'L', "MET" => 'M',
    "ASN" => 'N', "PRO" => 'P', "GLN" => 'Q', "ARG" => 'R', "SER" => 'S',
    "THR" => 'T', "VAL" => 'V', "TRP" => 'W', "TYR" => 'Y', "GLY" => 'G',
    "PYL" => 'O', "SEC" => 'U', "UNK" => 'X',
    "DAL" => 'A', "DCY" => 'C', "DAS" => 'D', "DGL" => 'E', "DPN" => 'F',
    "DHI" => 'H', "DIL" => 'I', "DLY" => 'K', "DLE" => 'L', "MED" => 'M',
    "DSG" => 'N', "DPR" => 'P', "DGN" => 'Q', "DAR" => 'R', "DSN" => 'S',
    "DTH" => 'T', "DVA" => 'V', "DTR" => 'W', "DTY" => 'Y',
};

static ONE_TO_THREE: Map<char, &'static str> = phf_map! {
    'A' => "ALA", 'C' => "CYS", 'D' => "ASP", 'E' => "GLU", 'F' => "PHE",
    'H' => "HIS", 'I' => "ILE", 'K' => "LYS", 'L' => "LEU", 'M' => "MET",
    'N' => "ASN", 'P' => "PRO", 'Q' => "GLN", 'R' => "ARG", 'S' => "SER",
    'T' => "THR", 'V' => "VAL", 'W' => "TRP", 'Y' => "TYR", 'G' => "GLY",
    'O' => "PYL", 'U' => "SEC", 'X' => "UNK",
};

static PROPERTIES: Map<char, ResidueProperty> = phf_map! {
    'A' => ResidueProperty::Nonpolar,
    'C' => ResidueProperty::Polar,
    'D' => ResidueProperty::NegativelyCharged,
    'E' => ResidueProperty::NegativelyCharged,
    'F' => ResidueProperty::Aromatic,
    'H' => ResidueProperty::PositivelyCharged,
    'I' => ResidueProperty::Nonpolar,
    'K' => ResidueProperty::PositivelyCharged,
    'L' => ResidueProperty::Nonpolar,
    'M' => ResidueProperty::Nonpolar,
    'N' => ResidueProperty::Polar,
    'P' => ResidueProperty::Polar,
    'Q' => ResidueProperty::Polar,
    'R' => ResidueProperty::PositivelyCharged,
    'S' => ResidueProperty::Polar,
    'T' => ResidueProperty::Polar,
    'V' => ResidueProperty::Nonpolar,
    'W' => ResidueProperty::Aromatic,
    'Y' => ResidueProperty::Aromatic,
    'G' => ResidueProperty::Nonpolar,
    'O' => ResidueProperty::PositivelyCharged,
    'U' => ResidueProperty::Polar,
    'X' => ResidueProperty::Unknown,
};

/// Returns whether a three-letter code is present in the residue table.
pub fn is_known(three_letter: &str) -> bool {
    THREE_TO_ONE.contains_key(three_letter.trim())
}

/// Maps a three-letter residue code to its one-letter code.
///
/// Unknown codes collapse to 'X'; the lookup is total.
pub fn one_letter(three_letter: &str) -> char {
    THREE_TO_ONE
        .get(three_letter.trim())
        .copied()
        .unwrap_or('X')
}

/// Maps a one-letter code back to its canonical three-letter code.
///
/// D-isomers are not distinguishable from one-letter codes, so the
/// canonical L form is returned. Unknown letters yield "UNK".
pub fn three_letter(one_letter: char) -> &'static str {
    ONE_TO_THREE.get(&one_letter).copied().unwrap_or("UNK")
}

/// Classifies an amino acid by its one-letter code.
pub fn property(one_letter: char) -> ResidueProperty {
    PROPERTIES
        .get(&one_letter)
        .copied()
        .unwrap_or(ResidueProperty::Unknown)
}
