use std::fs;
use std::io::{self, Write};
use std::path::Path;

use gasdts_typegen::Overrides;

use crate::error::Error;

/// Built-in overrides, or the built-ins with the tables `path` names replaced.
pub fn load(path: Option<&Path>) -> Result<Overrides, Error> {
    let Some(path) = path else {
        return Ok(Overrides::default());
    };
    let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    Overrides::from_json(&text).map_err(|source| Error::Overrides {
        path: path.to_path_buf(),
        source,
    })
}

pub fn print(path: Option<&Path>) -> Result<(), Error> {
    let overrides = load(path)?;
    let mut json = serde_json::to_string_pretty(&overrides).map_err(Error::Print)?;
    json.push('\n');
    io::stdout()
        .write_all(json.as_bytes())
        .map_err(|e| Error::io("<stdout>", e))
}
