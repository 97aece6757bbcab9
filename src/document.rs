//! Document loading and saving.
//!
//! A document is the full text content of the target resource, read once into
//! memory and written back once at the end of a run. Writes are plain
//! `fs::write` calls with no temp-file/rename step, so a crash mid-save can
//! leave a partial file.

use std::fs;
use std::path::Path;
use tracing::debug;

use crate::error::{PatchupError, PatchupResult};

/// Read the full contents of the target file as a UTF-8 string.
///
/// A missing file maps to `ResourceNotFound`; bytes that do not decode as
/// UTF-8 map to `Encoding`. Other read failures keep their IO context.
pub fn load(path: &Path) -> PatchupResult<String> {
    let bytes = fs::read(path).map_err(|err| {
        if err.kind() == std::io::ErrorKind::NotFound {
            PatchupError::resource_not_found(path)
        } else {
            PatchupError::io_error(err, Some(path))
        }
    })?;

    let content = String::from_utf8(bytes).map_err(|err| {
        PatchupError::encoding(
            path,
            format!("invalid UTF-8 at byte {}", err.utf8_error().valid_up_to()),
        )
    })?;

    debug!("Loaded {} ({} bytes)", path.display(), content.len());
    Ok(content)
}

/// Overwrite the target file with the final document string.
pub fn save(path: &Path, content: &str) -> PatchupResult<()> {
    fs::write(path, content)
        .map_err(|err| PatchupError::resource_unwritable(path, err))?;

    debug!("Saved {} ({} bytes)", path.display(), content.len());
    Ok(())
}
