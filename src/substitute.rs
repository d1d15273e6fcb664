//! Replacement of hex color literals with variable references.

use std::collections::HashMap;
use std::ops::Range;

use crate::color::{HEX_COLOR, lookup_key};
use crate::variables::VariableTable;

/// Source location of a replaced literal, 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub line: usize,
    pub column: usize,
}

/// One literal that was swapped for a variable reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substitution {
    /// Byte range of the literal in the input text.
    pub range: Range<usize>,
    pub span: Span,
    /// The literal exactly as it appeared.
    pub original: String,
    /// The `$name` reference written in its place.
    pub replacement: String,
}

/// Normalized value to `$name` lookup, derived from a [`VariableTable`].
///
/// Keys are lowercased and short hex is expanded, so `$bg: #FFF;`
/// is found under `#ffffff`. When two variables normalize to the same
/// key, the one iterated later wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InverseIndex {
    references: HashMap<String, String>,
}

impl InverseIndex {
    #[must_use]
    pub fn from_table(table: &VariableTable) -> Self {
        let references = table
            .iter()
            .map(|(name, value)| (lookup_key(value), format!("${name}")))
            .collect();
        Self { references }
    }

    /// Reference for a literal such as `#FFF`, if any variable holds it.
    #[must_use]
    pub fn lookup(&self, literal: &str) -> Option<&str> {
        self.references.get(&lookup_key(literal)).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.references.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.references.is_empty()
    }
}

/// Replace every hex color literal in `text` that matches a variable.
///
/// Literals with no matching variable are kept verbatim, and so is
/// everything between literals. Replacements are never re-scanned.
///
/// ```
/// use scss_color_vars::{extract_variables, substitute_colors};
///
/// let table = extract_variables("$primary: #ff0000;\n$bg: #fff;");
/// let out = substitute_colors("color: #FF0000; background: #ffffff;", &table);
/// assert_eq!(out, "color: $primary; background: $bg;");
/// ```
#[must_use]
pub fn substitute_colors(text: &str, table: &VariableTable) -> String {
    substitute_colors_with_report(text, table).0
}

/// Like [`substitute_colors`], also returning each replacement made.
#[must_use]
pub fn substitute_colors_with_report(
    text: &str,
    table: &VariableTable,
) -> (String, Vec<Substitution>) {
    let index = InverseIndex::from_table(table);
    let mut out = String::with_capacity(text.len());
    let mut substitutions = Vec::new();
    let mut cursor = Cursor::default();
    let mut last = 0;

    for literal in HEX_COLOR.find_iter(text) {
        out.push_str(&text[last..literal.start()]);
        last = literal.end();

        let Some(reference) = index.lookup(literal.as_str()) else {
            out.push_str(literal.as_str());
            continue;
        };

        out.push_str(reference);
        substitutions.push(Substitution {
            range: literal.range(),
            span: cursor.advance_to(text, literal.start()),
            original: literal.as_str().to_string(),
            replacement: reference.to_string(),
        });
    }
    out.push_str(&text[last..]);

    log::debug!(
        "replaced {} color literal(s) using {} indexed value(s)",
        substitutions.len(),
        index.len()
    );
    (out, substitutions)
}

/// Incremental byte offset to line/column conversion.
#[derive(Debug, Clone, Copy)]
struct Cursor {
    offset: usize,
    line: usize,
    column: usize,
}

impl Default for Cursor {
    fn default() -> Self {
        Self {
            offset: 0,
            line: 1,
            column: 1,
        }
    }
}

impl Cursor {
    fn advance_to(&mut self, text: &str, offset: usize) -> Span {
        for ch in text[self.offset..offset].chars() {
            if ch == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
        self.offset = offset;
        Span {
            line: self.line,
            column: self.column,
        }
    }
}
