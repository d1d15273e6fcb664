//! Workspace discovery and the `scssColors.variablesPath` setting.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::Error;

/// Settings file location, relative to the workspace root.
pub const SETTINGS_FILE: &str = ".vscode/settings.json";

/// Directories whose presence marks a workspace root.
const ROOT_MARKERS: [&str; 2] = [".vscode", ".git"];

#[derive(Debug, Default, Deserialize)]
struct RawSettings {
    #[serde(rename = "scssColors.variablesPath")]
    flat_variables_path: Option<String>,
    #[serde(rename = "scssColors")]
    section: Option<Section>,
}

#[derive(Debug, Default, Deserialize)]
struct Section {
    #[serde(rename = "variablesPath")]
    variables_path: Option<String>,
}

/// Read the variables path from `<root>/.vscode/settings.json`.
///
/// Accepts both the dotted key `"scssColors.variablesPath"` and the
/// nested `{"scssColors": {"variablesPath": ...}}` form; the dotted
/// key takes precedence. A missing file or an empty string yields
/// `Ok(None)`.
///
/// # Errors
///
/// Returns [`Error::Settings`] when the file exists but cannot be
/// read, does not parse, or holds a non-string path.
pub fn load_settings(root: &Path) -> Result<Option<String>, Error> {
    let path = root.join(SETTINGS_FILE);
    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::debug!("no settings file at {}", path.display());
            return Ok(None);
        }
        Err(e) => {
            return Err(Error::Settings {
                path,
                source: Box::new(e),
            });
        }
    };

    // VS Code writes JSONC: comments and trailing commas are allowed.
    let raw: RawSettings = json5::from_str(&content).map_err(|e| Error::Settings {
        path: path.clone(),
        source: Box::new(e),
    })?;

    let variables_path = raw
        .flat_variables_path
        .or_else(|| raw.section.and_then(|s| s.variables_path))
        .filter(|p| !p.is_empty());
    log::debug!(
        "settings {}: variables path {variables_path:?}",
        path.display()
    );
    Ok(variables_path)
}

/// Nearest ancestor of `file` (or `file` itself, when a directory)
/// that contains a `.vscode` or `.git` directory.
///
/// Relative paths are resolved against the current directory first.
#[must_use]
pub fn find_workspace_root(file: &Path) -> Option<PathBuf> {
    let file = std::path::absolute(file).ok()?;
    let start = if file.is_dir() {
        file.as_path()
    } else {
        file.parent()?
    };
    start
        .ancestors()
        .find(|dir| ROOT_MARKERS.iter().any(|marker| dir.join(marker).is_dir()))
        .map(Path::to_path_buf)
}
