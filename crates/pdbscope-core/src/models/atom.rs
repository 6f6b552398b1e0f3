use crate::chem::elements::{self, ElementInfo};
use nalgebra::Point3;
use serde::Serialize;

/// Represents a single atom read from a structure file.
///
/// An atom is immutable after construction. Display radius and color are
/// not stored per instance; they are derived from the element table on
/// demand, with a defined fallback for unknown symbols.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Atom {
    /// The element symbol (e.g., "C", "N", "SE").
    pub element: String,
    /// The role of the atom within its residue (e.g., "CA", "CB", "N", "C").
    pub role: String,
    /// The file-assigned atom serial number. Not unique across models.
    pub serial: i32,
    /// The 3D coordinates of the atom in Angstroms.
    pub position: Point3<f64>,
    /// The 1-based model index; 0 for files without explicit MODEL records.
    pub model: u32,
    /// The label of the chain the atom belongs to.
    pub chain: String,
}

impl Atom {
    /// Creates a new `Atom`.
    ///
    /// # Arguments
    ///
    /// * `element` - The element symbol.
    /// * `role` - The atom name within its residue.
    /// * `serial` - The file-assigned serial number.
    /// * `position` - The 3D coordinates of the atom.
    /// * `model` - The model index the atom belongs to.
    /// * `chain` - The chain label the atom belongs to.
    pub fn new(
        element: &str,
        role: &str,
        serial: i32,
        position: Point3<f64>,
        model: u32,
        chain: &str,
    ) -> Self {
        Self {
            element: element.to_string(),
            role: role.to_string(),
            serial,
            position,
            model,
            chain: chain.to_string(),
        }
    }

    /// Returns the display parameters for this atom's element.
    pub fn element_info(&self) -> &'static ElementInfo {
        elements::element_info(&self.element)
    }

    /// Returns the display radius in Angstroms.
    pub fn radius(&self) -> f64 {
        self.element_info().radius
    }

    /// Returns the display color as an sRGB triple.
    pub fn color(&self) -> (u8, u8, u8) {
        self.element_info().color
    }
}
