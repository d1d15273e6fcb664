//! Replace hex color literals in SCSS with matching variable references.
//!
//! Variables are read from flat `$name: value;` declarations; every
//! `#rgb`/`#rrggbb` literal in the target text whose normalized value
//! equals a variable's value is rewritten to `$name`.
//!
//! # Quick start
//!
//! ```
//! use scss_color_vars::{extract_variables, substitute_colors};
//!
//! let vars = extract_variables("$primary: #ff0000;\n$bg: #fff;");
//! let out = substitute_colors(".a { color: #F00; background: #FFFFFF; }", &vars);
//! assert_eq!(out, ".a { color: $primary; background: $bg; }");
//! ```
//!
//! Literals with no matching variable are left as they are, and so is
//! every byte between literals.

// Allow noisy pedantic lints that don't add value for
// a library crate.
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions
)]

pub mod color;
pub mod settings;
pub mod substitute;
pub mod variables;
pub mod workspace;

use std::io;
use std::path::PathBuf;

pub use color::normalize_hex;
pub use substitute::{
    InverseIndex, Span, Substitution, substitute_colors, substitute_colors_with_report,
};
pub use variables::{VariableTable, extract_variables};
pub use workspace::{Config, DocumentContext, DocumentKind, Formatted, format_document};

/// Failures of the host-side format operation.
///
/// The transforms themselves never fail; every variant here comes
/// from configuration, the filesystem, or the target document.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No variables path configured.
    #[error(
        "variables path not configured, set scssColors.variablesPath \
         in .vscode/settings.json or pass --variables"
    )]
    ConfigMissing,
    /// No base directory to resolve the variables path against.
    #[error("no workspace folder found")]
    WorkspaceContextMissing,
    /// The variables file could not be read.
    #[error("error reading SCSS file {}: {source}", path.display())]
    FileUnreadable { path: PathBuf, source: io::Error },
    /// The target is not an SCSS document.
    #[error("this command can only be used on SCSS files (got {})", display_kind(kind))]
    WrongDocumentType { kind: String },
    /// The settings file exists but could not be read or parsed.
    #[error("invalid settings in {}: {source}", path.display())]
    Settings {
        path: PathBuf,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// Writing the transformed document back failed.
    #[error("error writing {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
}

fn display_kind(kind: &str) -> String {
    if kind.is_empty() {
        "a file without extension".to_string()
    } else {
        format!(".{kind}")
    }
}
