//! Extraction of flat `$name: value;` declarations from SCSS source.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

static DECLARATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$([A-Za-z0-9_-]+):\s*([^;]+);").expect("declaration pattern is valid")
});

/// Ordered mapping of variable name to its raw, trimmed value.
///
/// Entries iterate in first-declaration order. Redeclaring a name
/// replaces its value but keeps its original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariableTable {
    entries: Vec<(String, String)>,
    positions: HashMap<String, usize>,
}

impl VariableTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct variable names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Value of `name` (without the leading `$`), if declared.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.positions
            .get(name)
            .map(|&index| self.entries[index].1.as_str())
    }

    /// Iterate `(name, value)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    fn insert(&mut self, name: String, value: String) {
        if let Some(&index) = self.positions.get(&name) {
            self.entries[index].1 = value;
        } else {
            self.positions.insert(name.clone(), self.entries.len());
            self.entries.push((name, value));
        }
    }
}

impl<N, V> FromIterator<(N, V)> for VariableTable
where
    N: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (name, value) in iter {
            table.insert(name.into(), value.into());
        }
        table
    }
}

/// Collect every `$name: value;` declaration in `scss`.
///
/// The scan is purely textual: declarations inside comments or
/// string literals are picked up like any other, and a fragment
/// without its colon or terminating semicolon is skipped. Values are
/// trimmed but otherwise kept as written. Never fails; text without
/// declarations yields an empty table.
///
/// ```
/// use scss_color_vars::extract_variables;
///
/// let table = extract_variables("$primary: #ff0000;\n$gap : 4px;");
/// assert_eq!(table.get("primary"), Some("#ff0000"));
/// assert_eq!(table.get("gap"), None);
/// ```
#[must_use]
pub fn extract_variables(scss: &str) -> VariableTable {
    let table: VariableTable = DECLARATION
        .captures_iter(scss)
        .map(|caps| (caps[1].to_string(), caps[2].trim().to_string()))
        .collect();
    log::debug!("extracted {} variable(s)", table.len());
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_declaration_overwrites_in_place() {
        let table = extract_variables("$a: red; $b: blue; $a: green;");
        let pairs: Vec<_> = table.iter().collect();
        assert_eq!(pairs, [("a", "green"), ("b", "blue")]);
    }

    #[test]
    fn value_is_trimmed_but_case_kept() {
        let table = extract_variables("$accent:   #AbCdEf  ;");
        assert_eq!(table.get("accent"), Some("#AbCdEf"));
    }

    #[test]
    fn names_are_case_sensitive() {
        let table = extract_variables("$Brand: #000; $brand: #fff;");
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("Brand"), Some("#000"));
        assert_eq!(table.get("brand"), Some("#fff"));
    }

    #[test]
    fn hyphenated_and_underscored_names() {
        let table = extract_variables("$text-muted_2: #777;");
        assert_eq!(table.get("text-muted_2"), Some("#777"));
    }

    #[test]
    fn value_may_span_lines_up_to_semicolon() {
        let table = extract_variables("$font: Helvetica,\n  Arial;");
        assert_eq!(table.get("font"), Some("Helvetica,\n  Arial"));
    }

    #[test]
    fn commented_declarations_are_still_collected() {
        let table = extract_variables("// $old: #123;\n/* $older: #456; */");
        assert_eq!(table.get("old"), Some("#123"));
        assert_eq!(table.get("older"), Some("#456"));
    }

    #[test]
    fn missing_semicolon_skips_declaration() {
        assert!(extract_variables("$broken #fff").is_empty());
        assert!(extract_variables("$nosemi: #fff").is_empty());
    }

    #[test]
    fn whitespace_only_value_trims_to_empty() {
        // `\s*` gives the space back so `[^;]+` can match it.
        let table = extract_variables("$empty: ;");
        assert_eq!(table.get("empty"), Some(""));
        assert!(extract_variables("$empty:;").is_empty());
    }

    #[test]
    fn from_iterator_builds_ordered_table() {
        let table: VariableTable = [("x", "1"), ("y", "2"), ("x", "3")].into_iter().collect();
        assert_eq!(table.iter().collect::<Vec<_>>(), [("x", "3"), ("y", "2")]);
    }
}
