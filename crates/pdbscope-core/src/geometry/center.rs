use crate::models::complex::Complex;
use nalgebra::{Point3, Vector3};

/// Computes the arithmetic-mean atom centroid of every model.
///
/// The returned vector has one entry per model, in model order; a file
/// without MODEL records yields a single entry. A model that contains no
/// atoms yields the origin rather than a NaN point. Subtracting the
/// per-model centroid from its atom coordinates recenters each model
/// independently.
pub fn model_centroids(complex: &Complex) -> Vec<Point3<f64>> {
    let model_count = complex.model_count.max(1) as usize;
    let mut sums = vec![Vector3::zeros(); model_count];
    let mut counts = vec![0u32; model_count];

    for polymer in complex.polymers() {
        // Model numbers start at 1 when MODEL records are present and
        // stay 0 otherwise; both map the first model to slot 0.
        let index = (polymer.model_number.max(1) - 1) as usize;
        for atom in polymer.atoms() {
            sums[index] += atom.position.coords;
            counts[index] += 1;
        }
    }

    sums.into_iter()
        .zip(counts)
        .map(|(sum, count)| {
            if count == 0 {
                Point3::origin()
            } else {
                Point3::from(sum / f64::from(count))
            }
        })
        .collect()
}
