use crate::models::complex::Complex;
use nalgebra::Point3;
use serde::Serialize;

/// Computes the torsion angle defined by four sequential points.
///
/// Standard vector-rejection formulation: with b1 = −(p2−p1),
/// b2 = normalize(p3−p2) and b3 = p4−p3, the rejections of b1 and b3
/// onto the plane orthogonal to b2 span the angle, which is returned in
/// degrees in the range (−180, 180].
pub fn dihedral_angle(
    p1: &Point3<f64>,
    p2: &Point3<f64>,
    p3: &Point3<f64>,
    p4: &Point3<f64>,
) -> f64 {
    // b2 is normalized so it does not influence the magnitude of the
    // vector rejections.
    let b1 = -(p2 - p1);
    let b2 = (p3 - p2).normalize();
    let b3 = p4 - p3;

    let n1 = b1 - b2 * b1.dot(&b2);
    let n2 = b3 - b2 * b3.dot(&b2);

    let x = n1.dot(&n2);
    let y = b2.cross(&n1).dot(&n2);
    y.atan2(x).to_degrees()
}

/// The backbone torsion angles of one residue, for Ramachandran data.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BackboneTorsion {
    /// The chain label of the residue.
    pub chain: String,
    /// The residue sequence number.
    pub residue_id: i32,
    /// The amino-acid one-letter code.
    pub label: char,
    /// φ: torsion over (C of previous residue, N, Cα, C), in degrees.
    pub phi: f64,
    /// ψ: torsion over (N, Cα, C, N of next residue), in degrees.
    pub psi: f64,
}

/// Computes φ/ψ backbone torsions for the first available model.
///
/// Only interior residues are considered (the first and last residue of
/// a chain lack one of the two angles), and residues missing any of the
/// five required atoms (previous C, N, Cα, C, next N) are skipped rather
/// than defaulted.
pub fn backbone_torsions(complex: &Complex) -> Vec<BackboneTorsion> {
    let mut torsions = Vec::new();
    for polymer in complex.first_model_polymers() {
        let monomers = polymer.monomers();
        for i in 1..monomers.len().saturating_sub(1) {
            let monomer = &monomers[i];
            let (Some(n), Some(c_alpha), Some(c)) = (
                monomer.amide_nitrogen(),
                monomer.c_alpha(),
                monomer.carbonyl_carbon(),
            ) else {
                continue;
            };
            let Some(c_prior) = monomers[i - 1].carbonyl_carbon() else {
                continue;
            };
            let Some(n_next) = monomers[i + 1].amide_nitrogen() else {
                continue;
            };

            let phi = dihedral_angle(&c_prior.position, &n.position, &c_alpha.position, &c.position);
            let psi = dihedral_angle(&n.position, &c_alpha.position, &c.position, &n_next.position);
            torsions.push(BackboneTorsion {
                chain: polymer.label.clone(),
                residue_id: monomer.id,
                label: monomer.label,
                phi,
                psi,
            });
        }
    }
    torsions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::atom::Atom;
    use crate::models::monomer::Monomer;
    use crate::models::polymer::Polymer;

    fn p(x: f64, y: f64, z: f64) -> Point3<f64> {
        Point3::new(x, y, z)
    }

    #[test]
    fn trans_configuration_is_plus_or_minus_180_degrees() {
        // Planar zig-zag: the two end points lie on opposite sides of
        // the central bond.
        let angle = dihedral_angle(
            &p(0.0, 1.0, 0.0),
            &p(1.0, 0.0, 0.0),
            &p(2.0, 0.0, 0.0),
            &p(3.0, -1.0, 0.0),
        );
        assert!((angle.abs() - 180.0).abs() < 1e-9);
    }

    #[test]
    fn cis_configuration_is_zero_degrees() {
        // Both end points on the same side of the central bond.
        let angle = dihedral_angle(
            &p(0.0, 1.0, 0.0),
            &p(1.0, 0.0, 0.0),
            &p(2.0, 0.0, 0.0),
            &p(3.0, 1.0, 0.0),
        );
        assert!(angle.abs() < 1e-9);
    }

    #[test]
    fn right_angle_has_expected_sign() {
        let angle = dihedral_angle(
            &p(0.0, 1.0, 0.0),
            &p(0.0, 0.0, 0.0),
            &p(1.0, 0.0, 0.0),
            &p(1.0, 0.0, 1.0),
        );
        assert!((angle - 90.0).abs() < 1e-9);
        let mirrored = dihedral_angle(
            &p(0.0, 1.0, 0.0),
            &p(0.0, 0.0, 0.0),
            &p(1.0, 0.0, 0.0),
            &p(1.0, 0.0, -1.0),
        );
        assert!((mirrored + 90.0).abs() < 1e-9);
    }

    fn backbone_residue(id: i32, offset: f64) -> Monomer {
        let atoms = vec![
            Atom::new("N", "N", 1, p(offset, 0.0, 0.0), 0, "A"),
            Atom::new("C", "CA", 2, p(offset + 0.5, 1.0, 0.0), 0, "A"),
            Atom::new("C", "C", 3, p(offset + 1.0, 0.0, 0.0), 0, "A"),
        ];
        Monomer::new(atoms, 'A', id, None)
    }

    fn chain_of(n: usize) -> Complex {
        let monomers = (0..n)
            .map(|i| backbone_residue(i as i32 + 1, i as f64 * 2.0))
            .collect();
        let polymer = Polymer::new(monomers, 1, "A", 0);
        Complex::new(vec![polymer], 0, vec!["A".into()], true)
    }

    #[test]
    fn interior_residues_produce_one_torsion_each() {
        let torsions = backbone_torsions(&chain_of(4));
        assert_eq!(torsions.len(), 2);
        assert_eq!(torsions[0].residue_id, 2);
        assert_eq!(torsions[1].residue_id, 3);
        assert_eq!(torsions[0].chain, "A");
    }

    #[test]
    fn chains_shorter_than_three_residues_produce_nothing() {
        assert!(backbone_torsions(&chain_of(2)).is_empty());
        assert!(backbone_torsions(&chain_of(0)).is_empty());
    }

    #[test]
    fn residues_missing_required_atoms_are_skipped() {
        let mut monomers: Vec<Monomer> = (0..4)
            .map(|i| backbone_residue(i + 1, f64::from(i) * 2.0))
            .collect();
        // Strip the Cα from residue 2.
        let stripped: Vec<Atom> = monomers[1]
            .atoms()
            .iter()
            .filter(|a| a.role != "CA")
            .cloned()
            .collect();
        monomers[1] = Monomer::new(stripped, 'A', 2, None);
        let polymer = Polymer::new(monomers, 1, "A", 0);
        let complex = Complex::new(vec![polymer], 0, vec!["A".into()], true);
        let torsions = backbone_torsions(&complex);
        assert_eq!(torsions.len(), 1);
        assert_eq!(torsions[0].residue_id, 3);
    }

    #[test]
    fn only_the_first_model_is_used() {
        let first = Polymer::new(
            (0..3)
                .map(|i| backbone_residue(i + 1, f64::from(i) * 2.0))
                .collect(),
            1,
            "A",
            1,
        );
        let second = Polymer::new(
            (0..3)
                .map(|i| backbone_residue(i + 1, f64::from(i) * 2.0))
                .collect(),
            1,
            "A",
            2,
        );
        let complex = Complex::new(vec![first, second], 2, vec!["A".into()], true);
        assert_eq!(backbone_torsions(&complex).len(), 1);
    }
}
