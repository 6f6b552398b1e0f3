pub mod bonds;
pub mod info;
pub mod rama;

use crate::error::{CliError, Result};
use pdbscope::io::pdb::PdbFile;
use pdbscope::io::traits::StructureFile;
use pdbscope::models::complex::Complex;
use std::path::Path;
use tracing::info;

/// Loads and parses the input structure shared by all subcommands.
pub fn load_complex(path: &Path) -> Result<Complex> {
    info!("Loading input structure from {:?}", path);
    PdbFile::read_from_path(path).map_err(|e| CliError::FileParsing {
        path: path.to_path_buf(),
        source: e,
    })
}
