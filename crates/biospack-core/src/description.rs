//! Parsing of the R `DESCRIPTION` manifest.
//!
//! The file is a sequence of `Field: value` records. A value continues onto
//! every following line that starts with whitespace and ends at the next
//! line that does not. Values are stored with internal whitespace collapsed.

use crate::constraint::{self, Constraint};

/// Manifest file name relative to the package root.
pub const MANIFEST_FILE: &str = "DESCRIPTION";

/// Fields whose values are dependency lists, in the order R documents them.
pub const DEPENDENCY_FIELDS: &[&str] = &["Depends", "Imports", "LinkingTo"];

/// Parsed `DESCRIPTION` fields in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Description {
    fields: Vec<(String, String)>,
}

impl Description {
    pub fn parse(text: &str) -> Self {
        let mut fields: Vec<(String, String)> = Vec::new();
        let mut open = false;

        for line in text.lines() {
            if line.starts_with(char::is_whitespace) || line.trim().is_empty() {
                if open {
                    if let Some((_, value)) = fields.last_mut() {
                        value.push(' ');
                        value.push_str(line.trim());
                    }
                }
                continue;
            }

            match line.split_once(':') {
                Some((name, value)) if !name.trim().is_empty() => {
                    fields.push((name.trim().to_string(), value.to_string()));
                    open = true;
                }
                _ => open = false,
            }
        }

        for (_, value) in &mut fields {
            *value = collapse_whitespace(value);
        }
        Self { fields }
    }

    /// Value of the first field called `name`.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn package(&self) -> Option<&str> {
        self.non_empty("Package")
    }

    pub fn version(&self) -> Option<&str> {
        self.non_empty("Version")
    }

    pub fn title(&self) -> Option<&str> {
        self.non_empty("Title")
    }

    pub fn description(&self) -> Option<&str> {
        self.non_empty("Description")
    }

    /// Every entry of `Depends`, `Imports` and `LinkingTo`, in file order.
    ///
    /// Unparsable entries are dropped. Base packages are still present; the
    /// constraint table filters them.
    pub fn dependencies(&self) -> Vec<Constraint> {
        self.fields
            .iter()
            .filter(|(name, _)| DEPENDENCY_FIELDS.contains(&name.as_str()))
            .flat_map(|(_, value)| constraint::parse_list(value))
            .collect()
    }

    fn non_empty(&self, name: &str) -> Option<&str> {
        self.field(name).filter(|v| !v.is_empty())
    }
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
