use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tempfile::{Builder, NamedTempFile};

use super::render::{output_filename, render_session};
use crate::models::Session;

/// Render a session and write it into `output_dir`, returning the file's path
///
/// The transcript is written to a temporary file in the same directory and then
/// renamed into place, so a failed write never leaves a partial transcript.
pub fn write_session(output_dir: &Path, session: &Session) -> Result<PathBuf> {
    let output_path = output_dir.join(output_filename(session));
    let body = render_session(session);

    let mut temp = temp_file_in(output_dir)
        .with_context(|| format!("Failed to create temporary file in {}", output_dir.display()))?;
    temp.write_all(body.as_bytes())
        .and_then(|_| temp.flush())
        .with_context(|| format!("Failed to write {}", output_path.display()))?;
    temp.persist(&output_path)
        .with_context(|| format!("Failed to write {}", output_path.display()))?;

    Ok(output_path)
}

/// Temporary file whose mode, once persisted, matches a plain `fs::write` (umask applies)
#[allow(unused_mut)]
fn temp_file_in(dir: &Path) -> std::io::Result<NamedTempFile> {
    let mut builder = Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(std::fs::Permissions::from_mode(0o666));
    }
    builder.tempfile_in(dir)
}
