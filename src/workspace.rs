//! The guarded format operation a host runs against one document.
//!
//! Configuration and document context are plain values, so the
//! whole flow can be driven without an editor or a real workspace.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::Error;
use crate::substitute::{Substitution, substitute_colors_with_report};
use crate::variables::{VariableTable, extract_variables};

/// Host configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Variables file, relative to the document's base directory.
    pub variables_path: Option<String>,
}

/// Language of the document being formatted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentKind {
    Scss,
    Other(String),
}

impl DocumentKind {
    /// Classify a file by its extension (`.scss`, case-insensitive).
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("scss") => Self::Scss,
            Some(ext) => Self::Other(ext.to_ascii_lowercase()),
            None => Self::Other(String::new()),
        }
    }
}

/// Everything the host knows about the target document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentContext {
    pub base_directory: Option<PathBuf>,
    pub document_text: String,
    pub document_kind: DocumentKind,
}

/// Result of formatting one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formatted {
    pub text: String,
    pub substitutions: Vec<Substitution>,
}

impl Formatted {
    #[must_use]
    pub fn is_changed(&self) -> bool {
        !self.substitutions.is_empty()
    }
}

/// Resolve the variables file for `config` under `base_directory`.
///
/// # Errors
///
/// [`Error::ConfigMissing`] or [`Error::WorkspaceContextMissing`].
pub fn variables_file(config: &Config, base_directory: Option<&Path>) -> Result<PathBuf, Error> {
    let relative = config
        .variables_path
        .as_deref()
        .filter(|p| !p.is_empty())
        .ok_or(Error::ConfigMissing)?;
    let base = base_directory.ok_or(Error::WorkspaceContextMissing)?;
    Ok(base.join(relative))
}

/// Read and extract the variables file named by `config`.
///
/// # Errors
///
/// Configuration and workspace errors from [`variables_file`], or
/// [`Error::FileUnreadable`] when the file cannot be read or is empty.
pub fn load_variables(
    config: &Config,
    base_directory: Option<&Path>,
) -> Result<VariableTable, Error> {
    let path = variables_file(config, base_directory)?;
    let scss = read_source(&path)?;
    Ok(extract_variables(&scss))
}

/// Run the full format operation for one document.
///
/// Checks run in order: configuration, base directory, variables
/// file, document kind. The first failure aborts before any text is
/// produced.
///
/// # Errors
///
/// See [`Error`]; the transform itself cannot fail.
pub fn format_document(config: &Config, context: &DocumentContext) -> Result<Formatted, Error> {
    let table = load_variables(config, context.base_directory.as_deref())?;

    if let DocumentKind::Other(kind) = &context.document_kind {
        return Err(Error::WrongDocumentType { kind: kind.clone() });
    }

    let (text, substitutions) = substitute_colors_with_report(&context.document_text, &table);
    Ok(Formatted {
        text,
        substitutions,
    })
}

/// Replace the whole content of `path` with `content`.
///
/// The text goes to a temporary file next to the real target which is
/// then renamed over it, so readers see either the old or the new
/// content. A symlinked `path` is followed: the file it points to is
/// replaced and the link itself stays in place.
///
/// # Errors
///
/// [`Error::Write`] if the temporary file cannot be written or
/// persisted.
pub fn write_document(path: &Path, content: &str) -> Result<(), Error> {
    let write_err = |source: io::Error| Error::Write {
        path: path.to_path_buf(),
        source,
    };
    let target = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    let dir = target
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(write_err)?;
    tmp.write_all(content.as_bytes()).map_err(write_err)?;
    tmp.as_file().sync_all().map_err(write_err)?;
    if let Ok(metadata) = fs::metadata(&target) {
        fs::set_permissions(tmp.path(), metadata.permissions()).map_err(write_err)?;
    }
    tmp.persist(&target).map_err(|e| write_err(e.error))?;
    Ok(())
}

/// An empty file fails like an unreadable one; it is almost always a
/// misconfigured path.
fn read_source(path: &Path) -> Result<String, Error> {
    let content = fs::read_to_string(path).and_then(|content| {
        if content.is_empty() {
            Err(io::Error::new(io::ErrorKind::InvalidData, "file is empty"))
        } else {
            Ok(content)
        }
    });
    content.map_err(|source| {
        log::warn!("error reading SCSS file {}: {source}", path.display());
        Error::FileUnreadable {
            path: path.to_path_buf(),
            source,
        }
    })
}
