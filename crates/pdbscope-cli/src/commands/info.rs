use crate::cli::InfoArgs;
use crate::error::Result;
use pdbscope::analysis::composition::{self, Composition};
use pdbscope::geometry::center;
use pdbscope::models::complex::Complex;
use serde::Serialize;
use tracing::info;

/// One chain instance in the summary.
#[derive(Debug, Serialize)]
struct PolymerSummary {
    chain: String,
    model: u32,
    residues: usize,
    atoms: usize,
}

/// The serializable structure summary emitted by `info --json`.
#[derive(Debug, Serialize)]
struct StructureSummary {
    chains: Vec<String>,
    model_count: u32,
    polymers: Vec<PolymerSummary>,
    residue_count: usize,
    atom_count: usize,
    contains_protein: bool,
    centroids: Vec<[f64; 3]>,
    composition: Composition,
}

impl StructureSummary {
    fn from_complex(complex: &Complex) -> Self {
        let polymers: Vec<PolymerSummary> = complex
            .polymers()
            .iter()
            .map(|polymer| PolymerSummary {
                chain: polymer.label.clone(),
                model: polymer.model_number,
                residues: polymer.monomers().len(),
                atoms: polymer.atoms().count(),
            })
            .collect();
        let residue_count = polymers.iter().map(|p| p.residues).sum();
        let atom_count = polymers.iter().map(|p| p.atoms).sum();
        let centroids = center::model_centroids(complex)
            .into_iter()
            .map(|point| [point.x, point.y, point.z])
            .collect();
        Self {
            chains: complex.chains.clone(),
            model_count: complex.model_count,
            polymers,
            residue_count,
            atom_count,
            contains_protein: complex.contains_protein,
            centroids,
            composition: composition::composition(complex),
        }
    }
}

pub fn run(args: InfoArgs) -> Result<()> {
    let complex = super::load_complex(&args.input)?;
    let summary = StructureSummary::from_complex(&complex);
    info!(
        chains = summary.chains.len(),
        atoms = summary.atom_count,
        "Structure summary assembled"
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("Structure: {}", args.input.display());
    println!("  Chains:           {}", summary.chains.join(", "));
    println!("  Models:           {}", summary.model_count.max(1));
    println!("  Residues:         {}", summary.residue_count);
    println!("  Atoms:            {}", summary.atom_count);
    println!(
        "  Contains protein: {}",
        if summary.contains_protein { "yes" } else { "no" }
    );

    println!("\nPolymers:");
    for polymer in &summary.polymers {
        println!(
            "  model {:<3} chain {:<2} {:>5} residue(s) {:>6} atom(s)",
            polymer.model, polymer.chain, polymer.residues, polymer.atoms
        );
    }

    println!("\nModel centroids:");
    for (index, [x, y, z]) in summary.centroids.iter().enumerate() {
        println!("  model {:<3} ({:.3}, {:.3}, {:.3})", index + 1, x, y, z);
    }

    println!("\nSecondary structure (first model):");
    for (kind, count) in &summary.composition.secondary_structure {
        println!("  {:<12} {}", kind, count);
    }

    println!("\nResidue properties (first model):");
    for (property, count) in &summary.composition.properties {
        println!("  {:<12} {}", property, count);
    }

    println!("\nResidue composition (first model):");
    for (code, count) in &summary.composition.residues {
        println!("  {:<4} {}", code, count);
    }

    Ok(())
}
