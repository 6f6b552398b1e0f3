//! # PDBScope Core Library
//!
//! A library for parsing Protein Data Bank (PDB) files into a typed
//! molecular hierarchy and deriving the geometric and statistical data a
//! structure viewer needs.
//!
//! ## Architectural Philosophy
//!
//! The library is split into renderer-agnostic layers so that every
//! computation is testable without a display:
//!
//! - **[`chem`]: Reference Data.** Static residue and element tables
//!   with total lookups; unknown inputs degrade to well-defined
//!   placeholder values instead of errors.
//!
//! - **[`models`]: The Hierarchy.** The `Complex` → `Polymer` →
//!   `Monomer` → `Atom` data model produced by parsing. Structural
//!   fields are immutable after construction.
//!
//! - **[`io`]: Parsing.** The fixed-column PDB parser and the trait it
//!   implements. Parsing is strict about numeric fields and lenient
//!   about everything a viewer can tolerate.
//!
//! - **[`geometry`] and [`analysis`]: Derived Data.** Bond inference,
//!   per-model centroids, ribbon control meshes, backbone torsions and
//!   composition statistics, all computed from the hierarchy alone.

pub mod analysis;
pub mod chem;
pub mod geometry;
pub mod io;
pub mod models;
