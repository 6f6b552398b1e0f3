//! # Structural Models Module
//!
//! This module contains the typed hierarchy produced by parsing a
//! structure file: a [`complex::Complex`] holds [`polymer::Polymer`]
//! chains, which hold [`monomer::Monomer`] residues, which hold
//! [`atom::Atom`] coordinates.
//!
//! ## Overview
//!
//! The hierarchy is deliberately simple: ordered, owned lists that are
//! immutable once the parse completes. There is no shared mutable state
//! between parse calls, so concurrent use against different inputs is
//! inherently safe.
//!
//! ## Key Components
//!
//! - [`atom`] - Individual atom with element, role, serial, coordinates
//! - [`monomer`] - One residue with its atoms and secondary-structure tag
//! - [`polymer`] - One chain instance within one model
//! - [`complex`] - The full parse result spanning all models and chains

pub mod atom;
pub mod complex;
pub mod monomer;
pub mod polymer;
