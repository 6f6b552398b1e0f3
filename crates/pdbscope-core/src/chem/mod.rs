//! Provides static chemical knowledge tables.
//!
//! This module holds the constant lookup data the rest of the library is
//! built on: the amino-acid residue table (three-letter and one-letter
//! codes, D-isomers, property classification) and the element display
//! table (radii and colors). Both are plain `phf` maps resolved at
//! compile time; there is no runtime configuration.

pub mod elements;
pub mod residues;
