use crate::cli::RamaArgs;
use crate::error::Result;
use pdbscope::geometry::dihedral;
use std::io::Write;
use tracing::info;

pub fn run(args: RamaArgs) -> Result<()> {
    let complex = super::load_complex(&args.input)?;
    let torsions = dihedral::backbone_torsions(&complex);
    info!(torsions = torsions.len(), "Computed backbone torsions");

    let writer: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(std::fs::File::create(path)?),
        None => Box::new(std::io::stdout()),
    };
    let mut csv_writer = csv::Writer::from_writer(writer);
    for torsion in &torsions {
        csv_writer.serialize(torsion)?;
    }
    csv_writer.flush()?;

    if let Some(path) = &args.output {
        println!(
            "✓ {} torsion pair(s) written to: {}",
            torsions.len(),
            path.display()
        );
    }
    Ok(())
}
