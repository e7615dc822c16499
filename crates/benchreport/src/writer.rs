//! Persisting rendered reports.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tempfile::Builder;

use crate::error::WriteError;
use crate::format::format_bytes;

/// Writes `document` to `destination`.
///
/// The content goes to a temporary file next to the destination, which is
/// renamed into place once fully written. A failed write leaves any previous
/// file at `destination` untouched.
///
/// A replaced file keeps its permissions. A new file is created with mode
/// `0o644` on unix, subject to the process umask.
///
/// # Errors
///
/// Returns [`WriteError`] carrying the I/O cause if the directory is missing,
/// not writable, or the disk is full.
pub fn write_document(document: &str, destination: impl AsRef<Path>) -> Result<(), WriteError> {
    let path = destination.as_ref();
    let fail = |source: io::Error| WriteError {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut builder = Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o644));
    }

    let mut file = builder.tempfile_in(dir).map_err(fail)?;
    if let Ok(existing) = fs::metadata(path) {
        file.as_file()
            .set_permissions(existing.permissions())
            .map_err(fail)?;
    }
    file.write_all(document.as_bytes()).map_err(fail)?;
    file.as_file().sync_all().map_err(fail)?;

    file.persist(path).map_err(|err| fail(err.error))?;

    tracing::info!(
        event = "write_end",
        path = %path.display(),
        size = %format_bytes(document.len() as f64)
    );

    Ok(())
}
