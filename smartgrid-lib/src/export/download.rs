//! Export file writer

use std::fs;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

use uuid::Uuid;

use crate::error::ExportError;

/// Writes export content to `dir/filename`, atomically.
///
/// The content is first written to a uniquely named temporary file in the
/// target directory, then renamed into place, so a reader never observes a
/// half-written export. The temporary file is removed if anything fails
/// before the rename. Returns the final path.
pub fn write_export(
    dir: impl AsRef<Path>,
    filename: &str,
    content: &str,
) -> Result<PathBuf, ExportError> {
    let dir = dir.as_ref();
    let target = dir.join(filename);
    let staging = dir.join(format!(".{}.{}.tmp", filename, Uuid::new_v4()));

    let result = write_and_rename(&staging, &target, content);
    if result.is_err() {
        let _ = fs::remove_file(&staging);
    }
    result?;

    log::debug!("wrote export to {}", target.display());
    Ok(target)
}

fn write_and_rename(staging: &Path, target: &Path, content: &str) -> Result<(), ExportError> {
    let mut file = fs::File::create(staging).map_err(|e| ExportError::io(staging, e))?;
    file.write_all(content.as_bytes())
        .map_err(|e| ExportError::io(staging, e))?;
    file.sync_all().map_err(|e| ExportError::io(staging, e))?;
    drop(file);
    fs::rename(staging, target).map_err(|e| ExportError::io(target, e))?;
    Ok(())
}
