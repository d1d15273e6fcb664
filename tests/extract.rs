//! Variable extraction over realistic stylesheets.

use scss_color_vars::{VariableTable, extract_variables};

#[test]
fn extract_empty_input() {
    assert!(extract_variables("").is_empty());
}

#[test]
fn extract_no_declarations() {
    let table = extract_variables(".a { color: red; }\n@media (min-width: 10px) {}\n");
    assert!(table.is_empty());
}

#[test]
fn extract_typical_palette_in_order() {
    let scss = "\
// Brand palette
$brand-primary: #3F51B5;
$brand-accent: #ff4081;

$text: #212121;
$radius: 4px;
";
    let table = extract_variables(scss);
    let names: Vec<&str> = table.iter().map(|(name, _)| name).collect();
    assert_eq!(names, ["brand-primary", "brand-accent", "text", "radius"]);
    assert_eq!(table.get("brand-primary"), Some("#3F51B5"));
    assert_eq!(table.get("radius"), Some("4px"));
}

#[test]
fn extract_default_flag_kept_in_value() {
    let table = extract_variables("$link: #06c !default;");
    assert_eq!(table.get("link"), Some("#06c !default"));
}

#[test]
fn extract_declarations_inside_rules() {
    // Nesting is not understood; the declaration is found anyway.
    let table = extract_variables(".card { $pad: 8px; padding: $pad; }");
    assert_eq!(table.get("pad"), Some("8px"));
    assert_eq!(table.len(), 1);
}

#[test]
fn extract_value_stops_at_first_semicolon() {
    let table = extract_variables(r#"$font: "a;b";"#);
    assert_eq!(table.get("font"), Some("\"a"));
}

#[test]
fn extract_several_on_one_line() {
    let table = extract_variables("$a:#111;$b:#222;$c:#333;");
    assert_eq!(table.len(), 3);
    assert_eq!(table.get("c"), Some("#333"));
}

#[test]
fn extract_space_before_colon_is_not_a_declaration() {
    assert!(extract_variables("$a : #111;").is_empty());
}

#[test]
fn extract_missing_semicolon_swallows_into_next() {
    // `[^;]+` runs on to the next semicolon.
    let table = extract_variables("$a: #111\n$b: #222;");
    assert_eq!(table.len(), 1);
    assert_eq!(table.get("a"), Some("#111\n$b: #222"));
}

#[test]
fn extract_unicode_name_is_skipped() {
    assert!(extract_variables("$café: #111;").is_empty());
}

#[test]
fn table_from_pairs_matches_extraction() {
    let built: VariableTable = [("a", "#111"), ("b", "#222")].into_iter().collect();
    assert_eq!(built, extract_variables("$a: #111; $b: #222;"));
}
