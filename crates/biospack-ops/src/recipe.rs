//! Rendering of a [`RecipePlan`] into a Spack `package.py`.
//!
//! The fixed part of the file is a template with `{{variable}}` placeholders;
//! version and dependency lines are appended in plan order.

use std::collections::BTreeMap;
use std::fmt::Write;

use biospack_core::spack;
use biospack_resolver::plan::RecipePlan;
use biospack_resolver::reconcile::{Emission, R_RUNTIME};

const DOCSTRING_WIDTH: usize = 72;
const INDENT: &str = "    ";

const RECIPE_TEMPLATE: &str = r#"from spack.package import *


class {{class_name}}(RPackage):
    """{{docstring}}"""

    bioc = "{{package}}"
"#;

/// Render the complete recipe text.
pub fn render(plan: &RecipePlan) -> String {
    let spack_name = spack::spack_name(&plan.package);

    let mut vars = BTreeMap::new();
    vars.insert("package", escape(&plan.package));
    vars.insert("class_name", spack::class_name(&spack_name));
    vars.insert("docstring", docstring(&plan.title, &plan.description));
    let mut out = interpolate(RECIPE_TEMPLATE, &vars);

    if !plan.versions.is_empty() {
        out.push('\n');
        for v in &plan.versions {
            let _ = writeln!(
                out,
                "{INDENT}version(\"{}\", commit=\"{}\")",
                escape(&v.version),
                escape(&v.commit)
            );
        }
    }

    let lines: Vec<String> = plan
        .runtime
        .iter()
        .chain(&plan.dependencies)
        .map(depends_on)
        .collect();
    if !lines.is_empty() {
        out.push('\n');
        for line in lines {
            let _ = writeln!(out, "{INDENT}{line}");
        }
    }
    out
}

/// One `depends_on(...)` call for an emission.
pub fn depends_on(emission: &Emission) -> String {
    let name = if emission.name == R_RUNTIME {
        "r".to_string()
    } else {
        spack::spack_name(&emission.name)
    };
    let spec = match &emission.min_version {
        Some(min) => format!("{name}@{min}:"),
        None => name,
    };
    format!(
        "depends_on(\"{}\", type=(\"build\", \"run\"), when=\"@{}:\")",
        escape(&spec),
        escape(&emission.version)
    )
}

/// Title line plus the description wrapped under it.
fn docstring(title: &str, description: &str) -> String {
    let title = escape(title.trim_end_matches('.'));
    let mut doc = format!("{title}.");
    let body = wrap(&escape(description), DOCSTRING_WIDTH - INDENT.len());
    if !body.is_empty() {
        doc.push_str("\n\n");
        let indented: Vec<String> = body.iter().map(|l| format!("{INDENT}{l}")).collect();
        doc.push_str(&indented.join("\n"));
    }
    doc
}

/// Escape text for a Python string literal, single- or triple-quoted.
fn escape(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Greedy word wrap. Words longer than `width` get a line of their own.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if !current.is_empty() && current.len() + 1 + word.len() > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

fn interpolate(input: &str, vars: &BTreeMap<&str, String>) -> String {
    let mut result = input.to_string();
    for (key, value) in vars {
        let placeholder = format!("{{{{{key}}}}}");
        result = result.replace(&placeholder, value);
    }
    result
}
