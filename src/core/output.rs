//! Received-secrets output document.
//!
//! Renders `{vault: ["name=value", ...]}` and writes it with owner-only
//! permissions.

use serde::Serialize;
use std::path::Path;
use tracing::debug;
use zeroize::Zeroizing;

use crate::core::fetch::Fetched;
use crate::error::{ConfigError, Result};

#[derive(Serialize)]
struct Document<'a> {
    vault: Vec<&'a str>,
}

/// Render fetched secrets as the output YAML document.
///
/// # Errors
///
/// Returns `ConfigError::Serialize` if YAML serialization fails.
pub fn render(fetched: &[Fetched]) -> Result<Zeroizing<String>> {
    let lines: Vec<Zeroizing<String>> = fetched.iter().map(Fetched::line).collect();
    let doc = Document {
        vault: lines.iter().map(|l| l.as_str()).collect(),
    };
    let yaml = serde_yaml::to_string(&doc).map_err(ConfigError::Serialize)?;
    Ok(Zeroizing::new(yaml))
}

/// Write the output document to `path`, creating parent directories.
///
/// # Errors
///
/// Returns `ConfigError::WriteFile` if the directory or file cannot be written.
pub fn write(path: impl AsRef<Path>, fetched: &[Fetched]) -> Result<()> {
    let path = path.as_ref();
    let contents = render(fetched)?;
    let write_err = |source| ConfigError::WriteFile {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(write_err)?;
    }

    write_private(path, contents.as_bytes()).map_err(write_err)?;

    debug!(path = %path.display(), secrets = fetched.len(), "output written");
    Ok(())
}

#[cfg(unix)]
fn write_private(path: &Path, contents: &[u8]) -> std::io::Result<()> {
    use std::io::Write;
    use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

    let mut file = std::fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(crate::core::constants::OUTPUT_MODE)
        .open(path)?;
    // mode() only applies on create
    file.set_permissions(std::fs::Permissions::from_mode(
        crate::core::constants::OUTPUT_MODE,
    ))?;
    file.write_all(contents)
}

#[cfg(not(unix))]
fn write_private(path: &Path, contents: &[u8]) -> std::io::Result<()> {
    std::fs::write(path, contents)
}
