//! Provides input functionality for structural file formats.
//!
//! This module contains the fixed-column PDB parser and the trait-based
//! interface it implements. Text acquisition (file read or network
//! fetch) is the caller's responsibility; the parser itself only
//! transforms already-materialized text into the typed hierarchy.

pub mod pdb;
pub mod traits;
