use crate::models::complex::Complex;
use crate::models::monomer::Monomer;
use nalgebra::{Point3, Vector3};
use serde::Serialize;

/// The three ribbon reference points of one monomer, ordered left to
/// right as (opposite, Cα, Cβ).
///
/// Downstream mesh winding depends on this ordering, so it is part of
/// the contract. All points are relative to the centroid supplied when
/// they were computed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ControlPoints {
    /// Cβ reflected through Cα.
    pub opposite: Point3<f64>,
    pub c_alpha: Point3<f64>,
    pub c_beta: Point3<f64>,
}

/// One ribbon control-mesh segment: the reference points of a monomer
/// and of the monomer preceding it, forming a quad-strip cross-section
/// ready for mesh generation. Face indices and texture coordinates
/// belong to the rendering layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RibbonSegment {
    pub previous: ControlPoints,
    pub current: ControlPoints,
}

/// Computes the mean Cα→Cβ offset over the whole complex.
///
/// Components are averaged in absolute value; a signed mean would cancel
/// to near zero over a globular structure. Used to synthesize a Cβ for
/// residues that lack one (glycine, or malformed input). When no residue
/// has both atoms the offset falls back to (1, 0, 0).
pub fn mean_cb_offset(complex: &Complex) -> Vector3<f64> {
    let mut sum = Vector3::zeros();
    let mut count = 0;
    for polymer in complex.polymers() {
        for monomer in polymer.monomers() {
            if let (Some(ca), Some(cb)) = (monomer.c_alpha(), monomer.c_beta()) {
                sum += (cb.position - ca.position).abs();
                count += 1;
            }
        }
    }
    if count == 0 {
        Vector3::new(1.0, 0.0, 0.0)
    } else {
        sum / f64::from(count)
    }
}

/// Derives the three ribbon reference points of one monomer, relative to
/// the supplied centroid.
///
/// When the monomer has a Cβ, the opposite point is the reflection of Cβ
/// through Cα. When it does not, Cβ is synthesized as Cα − `mean_offset`
/// and the opposite point becomes Cα + `mean_offset`. A monomer without
/// a Cα has no defined ribbon geometry and yields `None`; that is
/// malformed input the caller must guard against.
pub fn control_points(
    monomer: &Monomer,
    center: &Point3<f64>,
    mean_offset: &Vector3<f64>,
) -> Option<ControlPoints> {
    let c_alpha = Point3::from(monomer.c_alpha()?.position - center);
    let (c_beta, opposite) = match monomer.c_beta() {
        Some(cb) => {
            let c_beta = Point3::from(cb.position - center);
            // Reflect Cβ through Cα.
            let opposite = Point3::from(c_alpha.coords * 2.0 - c_beta.coords);
            (c_beta, opposite)
        }
        None => (c_alpha - mean_offset, c_alpha + mean_offset),
    };
    Some(ControlPoints {
        opposite,
        c_alpha,
        c_beta,
    })
}

/// Derives the ribbon control mesh for an ordered monomer sequence.
///
/// One segment is emitted per adjacent monomer pair; the first monomer
/// alone produces none. Monomers without a Cα are skipped, as if absent
/// from the backbone trace.
pub fn ribbon_segments(
    monomers: &[Monomer],
    center: &Point3<f64>,
    mean_offset: &Vector3<f64>,
) -> Vec<RibbonSegment> {
    let mut segments = Vec::new();
    let mut previous: Option<ControlPoints> = None;
    for monomer in monomers {
        let Some(current) = control_points(monomer, center, mean_offset) else {
            continue;
        };
        if let Some(previous) = previous {
            segments.push(RibbonSegment { previous, current });
        }
        previous = Some(current);
    }
    segments
}
