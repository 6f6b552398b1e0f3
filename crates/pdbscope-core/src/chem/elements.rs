use phf::{Map, phf_map};

/// Display parameters for a chemical element.
///
/// Radii are covalent radii in Angstroms taken from the Handbook of
/// Chemistry and Physics (W.M. Haynes, 97th Edition, Section 9.57).
/// Colors follow the conventional CPK-style scheme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementInfo {
    /// Display radius in Angstroms.
    pub radius: f64,
    /// Display color as an sRGB triple.
    pub color: (u8, u8, u8),
}

/// Fallback used for any element symbol not present in the table.
pub const DEFAULT_ELEMENT: ElementInfo = ElementInfo {
    radius: 0.6,
    color: (0, 128, 0),
};

static ELEMENTS: Map<&'static str, ElementInfo> = phf_map! {
    "O" => ElementInfo { radius: 0.64, color: (255, 0, 0) },
    "C" => ElementInfo { radius: 0.75, color: (128, 128, 128) },
    "N" => ElementInfo { radius: 0.71, color: (0, 0, 255) },
    "S" => ElementInfo { radius: 1.04, color: (255, 255, 0) },
    "SE" => ElementInfo { radius: 1.18, color: (255, 165, 0) },
};

/// Looks up display parameters for an element symbol.
///
/// Unknown symbols resolve to [`DEFAULT_ELEMENT`]; the lookup is total.
pub fn element_info(symbol: &str) -> &'static ElementInfo {
    ELEMENTS.get(symbol.trim()).unwrap_or(&DEFAULT_ELEMENT)
}
