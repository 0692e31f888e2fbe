use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use gasdts_core::Description;
use gasdts_typegen::{CategoryOutput, Config, Emitter};

use super::{header, overrides};
use crate::error::Error;

pub struct GenerateArgs {
    pub input: Option<PathBuf>,
    pub header: PathBuf,
    pub out_dir: PathBuf,
    pub overrides: Option<PathBuf>,
    pub date: Option<String>,
}

pub fn run(args: GenerateArgs) -> Result<(), Error> {
    // Settle every input before touching the output directory.
    let header = header::load(&args.header, args.date.as_deref())?;
    let overrides = overrides::load(args.overrides.as_deref())?;
    let description = load_description(args.input.as_deref())?;

    tracing::debug!(
        categories = description.categories.len(),
        services = description.services.len(),
        "loaded description"
    );

    let config = Config::new().header(header).overrides(overrides);
    let emitter = Emitter::new(&description, config)?;

    fs::create_dir_all(&args.out_dir).map_err(|e| Error::io(&args.out_dir, e))?;
    for output in emitter.emit_all() {
        write_output(&args.out_dir, &output)?;
    }
    Ok(())
}

/// Read the whole description from `input`, or stdin when absent.
pub fn load_description(input: Option<&Path>) -> Result<Description, Error> {
    match input {
        Some(path) => {
            let file = File::open(path).map_err(|e| Error::io(path, e))?;
            Ok(Description::from_reader(io::BufReader::new(file))?)
        }
        None => Ok(Description::from_reader(io::stdin().lock())?),
    }
}

/// Write one module in a single call and report it.
pub fn write_output(out_dir: &Path, output: &CategoryOutput) -> Result<PathBuf, Error> {
    let path = out_dir.join(&output.file_name);
    fs::write(&path, &output.text).map_err(|e| Error::io(&path, e))?;
    tracing::info!("Wrote to {}", path.display());
    Ok(path)
}
