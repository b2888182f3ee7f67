//! Attribute-scoped diagnostics.
//!
//! A [`Diagnostic`] carries a short summary, a detail message, and optionally
//! the attribute path it refers to (`mode`, `column[1]`, `auth_header.name`).
//! Validators and reconciler preconditions collect them into [`Diagnostics`];
//! any error-severity entry fails the operation.

use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub summary: String,
    pub detail: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribute: Option<String>,
}

impl Diagnostic {
    pub fn error(summary: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            summary: summary.into(),
            detail: detail.into(),
            attribute: None,
        }
    }

    pub fn attribute_error(
        attribute: impl Into<String>,
        summary: impl Into<String>,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            attribute: Some(attribute.into()),
            ..Self::error(summary, detail)
        }
    }

    pub fn warning(summary: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            ..Self::error(summary, detail)
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.attribute {
            Some(attr) => write!(f, "{}: {} ({})", attr, self.summary, self.detail),
            None => write!(f, "{} ({})", self.summary, self.detail),
        }
    }
}

/// An ordered collection of diagnostics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Diagnostics(Vec<Diagnostic>);

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.0.push(diagnostic);
    }

    pub fn extend(&mut self, other: Diagnostics) {
        self.0.extend(other.0);
    }

    pub fn has_error(&self) -> bool {
        self.0.iter().any(Diagnostic::is_error)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.0.iter()
    }

    /// The first diagnostic attached to `attribute`, if any.
    pub fn for_attribute(&self, attribute: &str) -> Option<&Diagnostic> {
        self.0
            .iter()
            .find(|d| d.attribute.as_deref() == Some(attribute))
    }
}

impl From<Diagnostic> for Diagnostics {
    fn from(diagnostic: Diagnostic) -> Self {
        Self(vec![diagnostic])
    }
}

impl FromIterator<Diagnostic> for Diagnostics {
    fn from_iter<I: IntoIterator<Item = Diagnostic>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Diagnostics {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl fmt::Display for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, d) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}", d)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warnings_do_not_count_as_errors() {
        let mut diags = Diagnostics::new();
        diags.push(Diagnostic::warning("Deprecated", "use x instead"));
        assert!(!diags.has_error());

        diags.push(Diagnostic::attribute_error("mode", "Invalid Mode", "bad"));
        assert!(diags.has_error());
        assert_eq!(diags.len(), 2);
    }

    #[test]
    fn test_display_includes_attribute_path() {
        let diags: Diagnostics = Diagnostic::attribute_error(
            "column[1]",
            "Too Many EventTime Columns",
            "Only one column can be marked as event time column.",
        )
        .into();
        assert_eq!(
            diags.to_string(),
            "column[1]: Too Many EventTime Columns (Only one column can be marked as event time column.)"
        );
    }

    #[test]
    fn test_for_attribute() {
        let diags: Diagnostics = vec![
            Diagnostic::error("General", "x"),
            Diagnostic::attribute_error("url", "invalid URL", "relative URL without a base"),
        ]
        .into_iter()
        .collect();
        assert_eq!(diags.for_attribute("url").unwrap().summary, "invalid URL");
        assert!(diags.for_attribute("name").is_none());
    }
}
