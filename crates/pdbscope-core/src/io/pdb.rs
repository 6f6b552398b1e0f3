use crate::chem::residues;
use crate::io::traits::StructureFile;
use crate::models::atom::Atom;
use crate::models::complex::Complex;
use crate::models::monomer::{Monomer, SecondaryStructure};
use crate::models::polymer::Polymer;
use nalgebra::Point3;
use std::collections::{BTreeSet, HashMap, HashSet};
use std::io::{self, BufRead};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum PdbError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error on line {line}: {kind}")]
    Parse {
        line: usize,
        kind: PdbParseErrorKind,
    },
}

#[derive(Debug, Error)]
pub enum PdbParseErrorKind {
    #[error("Invalid integer format in columns {columns} (value: '{value}')")]
    InvalidInt { columns: String, value: String },
    #[error("Invalid float format in columns {columns} (value: '{value}')")]
    InvalidFloat { columns: String, value: String },
}

fn slice_raw(line: &str, start: usize, end: usize) -> &str {
    line.get(start..end).unwrap_or("")
}

fn slice_and_trim(line: &str, start: usize, end: usize) -> &str {
    slice_raw(line, start, end).trim()
}

fn parse_int(line: &str, start: usize, end: usize, line_num: usize) -> Result<i32, PdbError> {
    let value = slice_and_trim(line, start, end);
    value.parse().map_err(|_| PdbError::Parse {
        line: line_num,
        kind: PdbParseErrorKind::InvalidInt {
            columns: format!("{}-{}", start + 1, end),
            value: value.into(),
        },
    })
}

fn parse_float(line: &str, start: usize, end: usize, line_num: usize) -> Result<f64, PdbError> {
    let value = slice_and_trim(line, start, end);
    value.parse().map_err(|_| PdbError::Parse {
        line: line_num,
        kind: PdbParseErrorKind::InvalidFloat {
            columns: format!("{}-{}", start + 1, end),
            value: value.into(),
        },
    })
}

/// Line-scan accumulator for the PDB parser.
///
/// The parser is a fold over input lines: each record type is one
/// transition on this state, and [`ParserState::finish`] flushes whatever
/// residue and chain are still in progress. Keeping the state explicit
/// (instead of loop-local mutables) makes every transition testable on
/// its own.
///
/// HELIX and SHEET ranges are consulted only at the moment a residue is
/// closed out, so they must appear before the ATOM records they annotate,
/// as the format convention prescribes. The ordering is assumed, not
/// validated.
#[derive(Debug)]
struct ParserState {
    previous_chain: String,
    previous_residue_id: Option<i32>,
    previous_residue_name: String,
    model: u32,
    previous_model: u32,
    polymer_number: u32,
    atoms: Vec<Atom>,
    monomers: Vec<Monomer>,
    polymers: Vec<Polymer>,
    helices: HashMap<String, HashSet<i32>>,
    sheets: HashMap<String, HashSet<i32>>,
    chains: BTreeSet<String>,
    contains_protein: bool,
}

impl ParserState {
    fn new() -> Self {
        Self {
            previous_chain: String::new(),
            previous_residue_id: None,
            previous_residue_name: String::new(),
            model: 0,
            previous_model: 0,
            polymer_number: 1,
            atoms: Vec::new(),
            monomers: Vec::new(),
            polymers: Vec::new(),
            helices: HashMap::new(),
            sheets: HashMap::new(),
            chains: BTreeSet::new(),
            contains_protein: false,
        }
    }

    fn step(&mut self, line: &str, line_num: usize) -> Result<(), PdbError> {
        if line.starts_with("ATOM") {
            self.atom_record(line, line_num)
        } else if line.starts_with("HELIX") {
            self.helix_record(line, line_num)
        } else if line.starts_with("SHEET") {
            self.sheet_record(line, line_num)
        } else if line.starts_with("MODEL") {
            self.model_record();
            Ok(())
        } else {
            Ok(())
        }
    }

    fn model_record(&mut self) {
        self.model += 1;
    }

    fn helix_record(&mut self, line: &str, line_num: usize) -> Result<(), PdbError> {
        let chain = slice_raw(line, 19, 20).to_string();
        let start = parse_int(line, 21, 25, line_num)?;
        let stop = parse_int(line, 33, 37, line_num)?;
        self.helices
            .entry(chain)
            .or_default()
            .extend(start..=stop);
        Ok(())
    }

    fn sheet_record(&mut self, line: &str, line_num: usize) -> Result<(), PdbError> {
        let chain = slice_raw(line, 21, 22).to_string();
        let start = parse_int(line, 22, 26, line_num)?;
        let stop = parse_int(line, 33, 37, line_num)?;
        self.sheets
            .entry(chain)
            .or_default()
            .extend(start..=stop);
        Ok(())
    }

    fn atom_record(&mut self, line: &str, line_num: usize) -> Result<(), PdbError> {
        // Amino acids carry 3-letter residue names; waters, ions and
        // other heteroatom records with 1-2 letters are skipped entirely.
        let residue_name = slice_and_trim(line, 17, 20);
        if residue_name.len() != 3 {
            return Ok(());
        }
        self.contains_protein = true;

        let element = slice_and_trim(line, 76, 78);
        if element == "H" {
            return Ok(());
        }

        let chain = slice_raw(line, 21, 22).to_string();
        self.chains.insert(chain.clone());

        let residue_id = parse_int(line, 22, 26, line_num)?;
        if self.previous_residue_id.is_none() {
            // First relevant atom of the file seeds the accumulator.
            self.previous_chain = chain.clone();
            self.previous_model = self.model;
            self.previous_residue_id = Some(residue_id);
            self.previous_residue_name = residue_name.to_string();
        }
        if !residues::is_known(&self.previous_residue_name) {
            self.previous_residue_name = "UNK".to_string();
        }

        let model_changed = self.model != self.previous_model;
        let chain_changed = chain != self.previous_chain;

        // A residue is closed out when its sequence id changes, but also
        // on a model or chain boundary: atoms of one monomer always share
        // model and chain.
        if self.previous_residue_id != Some(residue_id) || model_changed || chain_changed {
            self.flush_monomer();
            self.previous_residue_id = Some(residue_id);
            self.previous_residue_name = residue_name.to_string();
        }

        if model_changed {
            self.flush_polymer();
            self.polymer_number = 1;
            self.previous_chain = chain.clone();
            self.previous_model = self.model;
        } else if chain_changed {
            self.flush_polymer();
            self.polymer_number += 1;
            self.previous_chain = chain.clone();
        }

        // Only the primary conformer is kept; other alternate locations
        // are dropped silently.
        let alt_loc = line.as_bytes().get(16).copied().unwrap_or(b' ');
        if alt_loc == b'A' || alt_loc == b' ' {
            let role = slice_and_trim(line, 12, 16);
            let serial = parse_int(line, 6, 11, line_num)?;
            let x = parse_float(line, 30, 38, line_num)?;
            let y = parse_float(line, 38, 46, line_num)?;
            let z = parse_float(line, 46, 54, line_num)?;
            self.atoms.push(Atom::new(
                element,
                role,
                serial,
                Point3::new(x, y, z),
                self.model,
                &chain,
            ));
        }
        Ok(())
    }

    // Closes out the residue in progress. HELIX takes precedence over
    // SHEET when both ranges cover the residue.
    fn flush_monomer(&mut self) {
        let Some(id) = self.previous_residue_id else {
            return;
        };
        let in_range = |map: &HashMap<String, HashSet<i32>>| {
            map.get(&self.previous_chain)
                .is_some_and(|ids| ids.contains(&id))
        };
        let tag = if in_range(&self.helices) {
            Some(SecondaryStructure::Helix)
        } else if in_range(&self.sheets) {
            Some(SecondaryStructure::Sheet)
        } else {
            None
        };
        let label = residues::one_letter(&self.previous_residue_name);
        self.monomers
            .push(Monomer::new(std::mem::take(&mut self.atoms), label, id, tag));
    }

    fn flush_polymer(&mut self) {
        self.polymers.push(Polymer::new(
            std::mem::take(&mut self.monomers),
            self.polymer_number,
            &self.previous_chain,
            self.previous_model,
        ));
    }

    fn finish(mut self) -> Complex {
        // The final residue and chain are flushed unconditionally, even if
        // the last residue lost all its atoms to conformer filtering. A
        // file with no relevant ATOM lines has nothing accumulated and
        // yields an empty polymer list.
        if self.previous_residue_id.is_some() {
            if !residues::is_known(&self.previous_residue_name) {
                self.previous_residue_name = "UNK".to_string();
            }
            self.flush_monomer();
            self.flush_polymer();
        }
        Complex::new(
            self.polymers,
            self.model,
            self.chains.into_iter().collect(),
            self.contains_protein,
        )
    }
}

/// Parses the text of a PDB file into a [`Complex`].
///
/// The parse is total: it either returns a best-effort complex built from
/// all well-formed records, or fails as a whole when a required numeric
/// field does not parse. There is no partial or streaming result. Both
/// `\n` and `\r\n` line endings are accepted.
///
/// # Arguments
///
/// * `text` - The raw PDB file content.
///
/// # Errors
///
/// Returns [`PdbError::Parse`] when a residue id, atom serial, secondary-
/// structure range bound or coordinate fails to parse as a number.
pub fn parse_complex(text: &str) -> Result<Complex, PdbError> {
    let mut state = ParserState::new();
    for (index, line) in text.lines().enumerate() {
        state.step(line, index + 1)?;
    }
    let complex = state.finish();
    debug!(
        models = complex.model_count,
        chains = complex.chains.len(),
        polymers = complex.polymers().len(),
        protein = complex.contains_protein,
        "Parsed PDB content"
    );
    Ok(complex)
}

/// Marker type implementing [`StructureFile`] for the PDB format.
pub struct PdbFile;

impl StructureFile for PdbFile {
    type Error = PdbError;

    fn read_from(reader: &mut impl BufRead) -> Result<Complex, Self::Error> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        parse_complex(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn atom_line(
        serial: i32,
        name: &str,
        alt: char,
        res: &str,
        chain: char,
        seq: i32,
        x: f64,
        y: f64,
        z: f64,
        element: &str,
    ) -> String {
        format!(
            "ATOM  {serial:>5} {name:<4}{alt}{res:>3} {chain}{seq:>4}    \
             {x:>8.3}{y:>8.3}{z:>8.3}  1.00  0.00          {element:>2}"
        )
    }

    fn helix_line(chain: char, start: i32, stop: i32) -> String {
        format!("HELIX    1   1 SER {chain} {start:>4} SER  {chain} {stop:>4}  1")
    }

    fn sheet_line(chain: char, start: i32, stop: i32) -> String {
        format!("SHEET    1   A 1 SER {chain}{start:>4}  SER {chain}{stop:>4}  0")
    }

    fn two_residue_chain() -> String {
        [
            atom_line(1, "N", ' ', "SER", 'A', 1, 0.0, 0.0, 0.0, "N"),
            atom_line(2, "CA", ' ', "SER", 'A', 1, 1.0, 0.0, 0.0, "C"),
            atom_line(3, "N", ' ', "GLY", 'A', 2, 2.0, 0.0, 0.0, "N"),
            atom_line(4, "CA", ' ', "GLY", 'A', 2, 3.0, 0.0, 0.0, "C"),
        ]
        .join("\n")
    }

    #[test]
    fn single_model_file_has_model_count_zero() {
        let complex = parse_complex(&two_residue_chain()).unwrap();
        assert_eq!(complex.model_count, 0);
        assert_eq!(complex.polymers().len(), 1);
        assert!(complex.polymers().iter().all(|p| p.model_number == 0));
        assert!(complex.contains_protein);
    }

    #[test]
    fn residues_are_split_on_sequence_id_change() {
        let complex = parse_complex(&two_residue_chain()).unwrap();
        let polymer = &complex.polymers()[0];
        assert_eq!(polymer.monomers().len(), 2);
        assert_eq!(polymer.monomers()[0].label, 'S');
        assert_eq!(polymer.monomers()[0].id, 1);
        assert_eq!(polymer.monomers()[1].label, 'G');
        assert_eq!(polymer.monomers()[1].id, 2);
        assert_eq!(polymer.sequence(), "SG");
    }

    #[test]
    fn atom_fields_are_extracted_from_fixed_columns() {
        let text = atom_line(42, "CA", ' ', "ALA", 'B', 7, 1.5, -2.25, 3.125, "C");
        let complex = parse_complex(&text).unwrap();
        let atom = &complex.polymers()[0].monomers()[0].atoms()[0];
        assert_eq!(atom.serial, 42);
        assert_eq!(atom.role, "CA");
        assert_eq!(atom.element, "C");
        assert_eq!(atom.chain, "B");
        assert!((atom.position.x - 1.5).abs() < 1e-9);
        assert!((atom.position.y + 2.25).abs() < 1e-9);
        assert!((atom.position.z - 3.125).abs() < 1e-9);
    }

    #[test]
    fn hydrogens_are_skipped() {
        let text = [
            atom_line(1, "CA", ' ', "ALA", 'A', 1, 0.0, 0.0, 0.0, "C"),
            atom_line(2, "HA", ' ', "ALA", 'A', 1, 0.5, 0.0, 0.0, "H"),
        ]
        .join("\n");
        let complex = parse_complex(&text).unwrap();
        let monomer = &complex.polymers()[0].monomers()[0];
        assert_eq!(monomer.atoms().len(), 1);
        assert_eq!(monomer.atoms()[0].role, "CA");
    }

    #[test]
    fn only_primary_conformers_are_kept() {
        let text = [
            atom_line(1, "CA", 'A', "SER", 'A', 1, 0.0, 0.0, 0.0, "C"),
            atom_line(2, "CA", 'B', "SER", 'A', 1, 9.0, 0.0, 0.0, "C"),
            atom_line(3, "CB", ' ', "SER", 'A', 1, 1.0, 0.0, 0.0, "C"),
        ]
        .join("\n");
        let complex = parse_complex(&text).unwrap();
        let monomer = &complex.polymers()[0].monomers()[0];
        assert_eq!(monomer.atoms().len(), 2);
        assert!((monomer.c_alpha().unwrap().position.x - 0.0).abs() < 1e-9);
    }

    #[test]
    fn short_residue_names_are_not_protein() {
        let text = atom_line(1, "O", ' ', " O", 'A', 1, 0.0, 0.0, 0.0, "O");
        let complex = parse_complex(&text).unwrap();
        assert!(complex.polymers().is_empty());
        assert!(!complex.contains_protein);
    }

    #[test]
    fn unknown_three_letter_code_maps_to_x_but_counts_as_protein() {
        let text = [
            atom_line(1, "CA", ' ', "ZZZ", 'A', 1, 0.0, 0.0, 0.0, "C"),
            atom_line(2, "CA", ' ', "ALA", 'A', 2, 2.5, 0.0, 0.0, "C"),
        ]
        .join("\n");
        let complex = parse_complex(&text).unwrap();
        assert!(complex.contains_protein);
        let polymer = &complex.polymers()[0];
        assert_eq!(polymer.monomers()[0].label, 'X');
        assert_eq!(polymer.monomers()[1].label, 'A');
    }

    #[test]
    fn helix_records_tag_residues_in_range() {
        let text = [
            helix_line('A', 1, 2),
            atom_line(1, "CA", ' ', "SER", 'A', 1, 0.0, 0.0, 0.0, "C"),
            atom_line(2, "CA", ' ', "GLY", 'A', 2, 4.0, 0.0, 0.0, "C"),
            atom_line(3, "CA", ' ', "ALA", 'A', 3, 8.0, 0.0, 0.0, "C"),
        ]
        .join("\n");
        let complex = parse_complex(&text).unwrap();
        let monomers = complex.polymers()[0].monomers();
        assert_eq!(
            monomers[0].secondary_structure,
            Some(SecondaryStructure::Helix)
        );
        assert_eq!(
            monomers[1].secondary_structure,
            Some(SecondaryStructure::Helix)
        );
        assert_eq!(monomers[2].secondary_structure, None);
    }

    #[test]
    fn sheet_records_tag_residues_in_range() {
        let text = [
            sheet_line('A', 2, 2),
            atom_line(1, "CA", ' ', "SER", 'A', 1, 0.0, 0.0, 0.0, "C"),
            atom_line(2, "CA", ' ', "GLY", 'A', 2, 4.0, 0.0, 0.0, "C"),
        ]
        .join("\n");
        let complex = parse_complex(&text).unwrap();
        let monomers = complex.polymers()[0].monomers();
        assert_eq!(monomers[0].secondary_structure, None);
        assert_eq!(
            monomers[1].secondary_structure,
            Some(SecondaryStructure::Sheet)
        );
    }

    #[test]
    fn helix_takes_precedence_over_sheet() {
        let text = [
            helix_line('A', 1, 1),
            sheet_line('A', 1, 1),
            atom_line(1, "CA", ' ', "SER", 'A', 1, 0.0, 0.0, 0.0, "C"),
        ]
        .join("\n");
        let complex = parse_complex(&text).unwrap();
        assert_eq!(
            complex.polymers()[0].monomers()[0].secondary_structure,
            Some(SecondaryStructure::Helix)
        );
    }

    #[test]
    fn chain_change_starts_a_new_polymer_with_incremented_number() {
        let text = [
            atom_line(1, "CA", ' ', "SER", 'A', 1, 0.0, 0.0, 0.0, "C"),
            atom_line(2, "CA", ' ', "GLY", 'B', 1, 9.0, 0.0, 0.0, "C"),
        ]
        .join("\n");
        let complex = parse_complex(&text).unwrap();
        assert_eq!(complex.polymers().len(), 2);
        assert_eq!(complex.polymers()[0].label, "A");
        assert_eq!(complex.polymers()[0].number, 1);
        assert_eq!(complex.polymers()[1].label, "B");
        assert_eq!(complex.polymers()[1].number, 2);
        assert_eq!(complex.chains, vec!["A", "B"]);
    }

    #[test]
    fn model_records_are_counted_and_reset_polymer_numbering() {
        let text = [
            "MODEL        1".to_string(),
            atom_line(1, "CA", ' ', "SER", 'A', 1, 0.0, 0.0, 0.0, "C"),
            atom_line(2, "CA", ' ', "GLY", 'B', 1, 5.0, 0.0, 0.0, "C"),
            "MODEL        2".to_string(),
            atom_line(1, "CA", ' ', "SER", 'A', 1, 0.1, 0.0, 0.0, "C"),
            atom_line(2, "CA", ' ', "GLY", 'B', 1, 5.1, 0.0, 0.0, "C"),
        ]
        .join("\n");
        let complex = parse_complex(&text).unwrap();
        assert_eq!(complex.model_count, 2);
        assert_eq!(complex.polymers().len(), 4);
        let numbers: Vec<(u32, u32)> = complex
            .polymers()
            .iter()
            .map(|p| (p.model_number, p.number))
            .collect();
        assert_eq!(numbers, vec![(1, 1), (1, 2), (2, 1), (2, 2)]);
    }

    #[test]
    fn chain_labels_are_sorted_and_distinct() {
        let text = [
            atom_line(1, "CA", ' ', "SER", 'C', 1, 0.0, 0.0, 0.0, "C"),
            atom_line(2, "CA", ' ', "GLY", 'A', 1, 5.0, 0.0, 0.0, "C"),
            atom_line(3, "CA", ' ', "ALA", 'B', 1, 9.0, 0.0, 0.0, "C"),
            atom_line(4, "CB", ' ', "ALA", 'B', 1, 9.5, 0.0, 0.0, "C"),
        ]
        .join("\n");
        let complex = parse_complex(&text).unwrap();
        assert_eq!(complex.chains, vec!["A", "B", "C"]);
    }

    #[test]
    fn empty_input_yields_empty_complex() {
        let complex = parse_complex("").unwrap();
        assert!(complex.polymers().is_empty());
        assert_eq!(complex.model_count, 0);
        assert!(complex.chains.is_empty());
        assert!(!complex.contains_protein);
    }

    #[test]
    fn file_with_only_model_records_keeps_model_count() {
        let complex = parse_complex("MODEL        1\nENDMDL\nMODEL        2\n").unwrap();
        assert!(complex.polymers().is_empty());
        assert_eq!(complex.model_count, 2);
        assert!(!complex.contains_protein);
    }

    #[test]
    fn crlf_line_endings_are_accepted() {
        let text = two_residue_chain().replace('\n', "\r\n");
        let complex = parse_complex(&text).unwrap();
        assert_eq!(complex.polymers()[0].monomers().len(), 2);
    }

    #[test]
    fn malformed_residue_id_fails_the_parse() {
        let mut line = atom_line(1, "CA", ' ', "SER", 'A', 1, 0.0, 0.0, 0.0, "C");
        line.replace_range(22..26, "  ??");
        let err = parse_complex(&line).unwrap_err();
        assert!(matches!(
            err,
            PdbError::Parse {
                line: 1,
                kind: PdbParseErrorKind::InvalidInt { .. }
            }
        ));
    }

    #[test]
    fn malformed_coordinate_fails_the_parse() {
        let mut line = atom_line(1, "CA", ' ', "SER", 'A', 1, 0.0, 0.0, 0.0, "C");
        line.replace_range(30..38, "   x.yz ");
        let err = parse_complex(&line).unwrap_err();
        assert!(matches!(
            err,
            PdbError::Parse {
                kind: PdbParseErrorKind::InvalidFloat { .. },
                ..
            }
        ));
    }

    #[test]
    fn malformed_helix_range_fails_the_parse() {
        let mut line = helix_line('A', 1, 2);
        line.replace_range(21..25, " abc");
        assert!(parse_complex(&line).is_err());
    }

    #[test]
    fn read_from_path_parses_a_file() {
        use std::io::Write;
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", two_residue_chain()).unwrap();
        let complex = PdbFile::read_from_path(file.path()).unwrap();
        assert_eq!(complex.polymers().len(), 1);
    }
}
