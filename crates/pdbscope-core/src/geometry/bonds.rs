use super::progress::{ProgressEvent, ProgressReporter};
use crate::models::atom::Atom;
use tracing::debug;

/// Maximum distance in Angstroms at which two atoms count as bonded.
pub const BOND_DISTANCE_CUTOFF: f64 = 2.0;

/// Infers bonded atom pairs from interatomic distances.
///
/// For every unordered pair `(i, j)` with `i < j` in the given atom
/// sequence, a bond is reported iff the Euclidean distance between the
/// two coordinates is at most [`BOND_DISTANCE_CUTOFF`] and both atoms
/// belong to the same model. Returned pairs are indices into `atoms`.
///
/// This is a distance heuristic, not a chemical bond-order computation:
/// it produces false positives and negatives near the cutoff and between
/// spatially close but chemically unrelated atoms. That is accepted by
/// design. The scan is O(n²) and makes no attempt at spatial
/// partitioning; for very large polymers the caller is responsible for
/// offloading the computation to a background task.
pub fn infer_bonds(atoms: &[Atom]) -> Vec<(usize, usize)> {
    infer_bonds_with_progress(atoms, &ProgressReporter::new())
}

/// Same as [`infer_bonds`], reporting one progress step per outer atom.
pub fn infer_bonds_with_progress(
    atoms: &[Atom],
    reporter: &ProgressReporter,
) -> Vec<(usize, usize)> {
    let mut bonds = Vec::new();
    reporter.report(ProgressEvent::Started {
        total_steps: atoms.len() as u64,
    });
    for i in 0..atoms.len().saturating_sub(1) {
        for j in (i + 1)..atoms.len() {
            let distance = (atoms[i].position - atoms[j].position).norm();
            if distance <= BOND_DISTANCE_CUTOFF && atoms[i].model == atoms[j].model {
                bonds.push((i, j));
            }
        }
        reporter.report(ProgressEvent::Advanced);
    }
    reporter.report(ProgressEvent::Finished);
    debug!(atoms = atoms.len(), bonds = bonds.len(), "Inferred bonds");
    bonds
}
