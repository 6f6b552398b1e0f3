//! Provides spatial computations over parsed structures.
//!
//! This module derives geometric data from the typed hierarchy: inferred
//! bonds, per-model centroids, ribbon control meshes and backbone
//! torsion angles. Everything here is renderer-agnostic; the outputs are
//! plain points, index pairs and angles.

pub mod bonds;
pub mod center;
pub mod dihedral;
pub mod progress;
pub mod ribbon;
