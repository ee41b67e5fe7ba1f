use biospack_core::constraint::Constraint;
use biospack_core::description::Description;

const LIMMA: &str = "\
Package: limma
Version: 3.40.6
Date: 2019-07-26
Title: Linear Models for Microarray
    Data
Description: Data analysis, linear models and differential expression
\tfor microarray data.
Author: Gordon Smyth [cre,aut]
Depends: R (>= 3.6.0)
Imports: grDevices, graphics, stats, utils, methods
Suggests: affy, AnnotationDbi
LinkingTo: Rcpp (>= 0.11.0)
License: GPL (>=2)
";

#[test]
fn parse_single_line_fields() {
    let desc = Description::parse(LIMMA);
    assert_eq!(desc.package(), Some("limma"));
    assert_eq!(desc.version(), Some("3.40.6"));
    assert_eq!(desc.field("Date"), Some("2019-07-26"));
}

#[test]
fn continuation_lines_are_joined_and_collapsed() {
    let desc = Description::parse(LIMMA);
    assert_eq!(desc.title(), Some("Linear Models for Microarray Data"));
    assert_eq!(
        desc.description(),
        Some("Data analysis, linear models and differential expression for microarray data.")
    );
}

#[test]
fn field_ends_at_next_unindented_line() {
    let desc = Description::parse("Title: A\nnot a field\n  dangling\nVersion: 1.0\n");
    assert_eq!(desc.title(), Some("A"));
    assert_eq!(desc.version(), Some("1.0"));
}

#[test]
fn blank_lines_do_not_end_a_field() {
    let desc = Description::parse("Description: first\n\n    second\nVersion: 2\n");
    assert_eq!(desc.description(), Some("first second"));
}

#[test]
fn missing_and_empty_fields() {
    let desc = Description::parse("Package: foo\nTitle:\nVersion:   \n");
    assert_eq!(desc.title(), None);
    assert_eq!(desc.version(), None);
    assert_eq!(desc.description(), None);
    assert_eq!(desc.field("Title"), Some(""));
}

#[test]
fn dependencies_span_all_sections_in_file_order() {
    let desc = Description::parse(LIMMA);
    let deps = desc.dependencies();
    let names: Vec<&str> = deps.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(
        names,
        ["R", "grDevices", "graphics", "stats", "utils", "methods", "Rcpp"]
    );
    assert_eq!(deps[0], Constraint::new("R", Some("3.6.0")));
    assert_eq!(deps[6], Constraint::new("Rcpp", Some("0.11.0")));
}

#[test]
fn suggests_is_not_a_dependency() {
    let desc = Description::parse(LIMMA);
    assert!(desc.dependencies().iter().all(|c| c.name != "affy"));
}

#[test]
fn wrapped_dependency_list() {
    let text = "\
Imports: BiocGenerics (>=
        0.31.5), S4Vectors,
    IRanges (>= 2.19.10)
Version: 1.0.0
";
    let deps = Description::parse(text).dependencies();
    assert_eq!(
        deps,
        vec![
            Constraint::new("BiocGenerics", Some("0.31.5")),
            Constraint::new("S4Vectors", None),
            Constraint::new("IRanges", Some("2.19.10")),
        ]
    );
}

#[test]
fn crlf_line_endings() {
    let desc = Description::parse("Version: 1.2.3\r\nTitle: Windows\r\n  Line\r\n");
    assert_eq!(desc.version(), Some("1.2.3"));
    assert_eq!(desc.title(), Some("Windows Line"));
}
