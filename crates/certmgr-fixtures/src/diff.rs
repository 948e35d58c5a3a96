//! JSON diff rendering for round-trip mismatches

use colored::Colorize;
use serde_json::Value;
use similar::{ChangeTag, TextDiff};

/// Options controlling diff rendering.
#[derive(Debug, Clone)]
pub struct DiffOptions {
    /// Lines of unchanged context around each change.
    pub context_lines: usize,
    /// Colorize output for terminals.
    pub colorize: bool,
}

impl Default for DiffOptions {
    fn default() -> Self {
        Self {
            context_lines: 3,
            colorize: true,
        }
    }
}

/// Renders readable diffs between JSON documents.
pub struct DiffEngine {
    options: DiffOptions,
}

impl DiffEngine {
    /// Diff engine with default options.
    pub fn new() -> Self {
        Self {
            options: DiffOptions::default(),
        }
    }

    /// Diff engine with the given options.
    pub fn with_options(options: DiffOptions) -> Self {
        Self { options }
    }

    /// True when the two documents are semantically equal.
    pub fn equal(&self, expected: &Value, actual: &Value) -> bool {
        expected == actual
    }

    /// Render a unified diff of the two documents' pretty-printed forms.
    /// Empty string when they are equal.
    pub fn render(&self, expected: &Value, actual: &Value) -> String {
        if self.equal(expected, actual) {
            return String::new();
        }

        let expected_text = pretty(expected);
        let actual_text = pretty(actual);
        let diff = TextDiff::from_lines(&expected_text, &actual_text);

        let mut out = String::new();
        for group in diff.grouped_ops(self.options.context_lines) {
            for op in group {
                for change in diff.iter_changes(&op) {
                    let (sign, styled) = match change.tag() {
                        ChangeTag::Delete => ("-", change.to_string().red().to_string()),
                        ChangeTag::Insert => ("+", change.to_string().green().to_string()),
                        ChangeTag::Equal => (" ", change.to_string()),
                    };
                    if self.options.colorize {
                        out.push_str(sign);
                        out.push_str(&styled);
                    } else {
                        out.push_str(sign);
                        out.push_str(&change.to_string());
                    }
                }
            }
        }
        out
    }
}

impl Default for DiffEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_equal_documents_render_empty() {
        let engine = DiffEngine::new();
        let doc = json!({"Key": "Env"});
        assert!(engine.equal(&doc, &doc));
        assert!(engine.render(&doc, &doc).is_empty());
    }

    #[test]
    fn test_mismatch_renders_both_sides() {
        let engine = DiffEngine::with_options(DiffOptions {
            context_lines: 1,
            colorize: false,
        });
        let expected = json!({"Status": "ISSUED"});
        let actual = json!({"Status": "REVOKED"});
        let rendered = engine.render(&expected, &actual);
        assert!(rendered.contains("ISSUED"));
        assert!(rendered.contains("REVOKED"));
    }
}
