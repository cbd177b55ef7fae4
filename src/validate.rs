//! Advisory checks for known rendering-breaking patterns.
//!
//! None of these is a grammar check; each one matches a single failure
//! signature and all of them run regardless of what the others found.

use std::fmt;

use crate::labels::has_multiline_label;

pub(crate) const FENCE_OPEN: &str = "```mermaid";
pub(crate) const FENCE: &str = "```";

const SEQUENCE_HEADER: &str = "sequenceDiagram";
const ARROW_TOKENS: [&str; 2] = ["->>", "->"];

/// A problem found by [`diagnose`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Diagnostic {
    /// A ```` ```mermaid ```` opener with no closing fence after it
    UnclosedFence,
    /// A `["..."]` label spanning a raw line break
    MultilineLabel,
    /// A sequence diagram declaring participants but no message lines
    ParticipantsWithoutInteractions,
}

impl Diagnostic {
    pub fn message(&self) -> &'static str {
        match self {
            Diagnostic::UnclosedFence => "Missing closing ``` for mermaid block",
            Diagnostic::MultilineLabel => "Line breaks found in node labels - use spaces instead",
            Diagnostic::ParticipantsWithoutInteractions => {
                "Sequence diagram has participants but no interactions"
            }
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Run every check and return the findings in check order
pub fn diagnose(text: &str) -> Vec<Diagnostic> {
    let mut found = Vec::new();

    if has_unclosed_fence(text) {
        found.push(Diagnostic::UnclosedFence);
    }
    if has_multiline_label(text) {
        found.push(Diagnostic::MultilineLabel);
    }
    if has_participants_without_interactions(text) {
        found.push(Diagnostic::ParticipantsWithoutInteractions);
    }

    found
}

/// Validate diagram text, returning one human-readable message per finding.
/// An empty list means no known defect was detected.
pub fn validate_mermaid_syntax(text: &str) -> Vec<String> {
    diagnose(text)
        .into_iter()
        .map(|d| d.message().to_string())
        .collect()
}

/// Only the text between the first opener and the next opener (if any) is
/// searched for the closer.
fn has_unclosed_fence(text: &str) -> bool {
    match text.split_once(FENCE_OPEN) {
        Some((_, rest)) => {
            let block = rest.split(FENCE_OPEN).next().unwrap_or("");
            !block.contains(FENCE)
        }
        None => false,
    }
}

fn has_participants_without_interactions(text: &str) -> bool {
    if !text.contains(SEQUENCE_HEADER) {
        return false;
    }

    let participants = text
        .lines()
        .filter(|line| line.trim().starts_with("participant"))
        .count();
    let interactions = text
        .lines()
        .filter(|line| ARROW_TOKENS.iter().any(|arrow| line.contains(arrow)))
        .count();

    participants > 0 && interactions == 0
}
