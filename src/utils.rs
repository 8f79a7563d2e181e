use crate::error::{Error, Result};
use std::{fs, path::Path};
use tracing::error;

/// Writes `content` as the whole file, creating or truncating it
pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|e| {
        error!("Cannot write to file {}: {}", path.display(), e);
        Error::io(path, e)
    })
}
