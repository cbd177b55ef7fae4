//! Sequence diagram generator

use crate::types::{Interaction, Participant};
use crate::FormatOptions;

pub fn format_sequence_diagram(
    participants: &[Participant],
    interactions: &[Interaction],
) -> String {
    format_sequence_diagram_with(participants, interactions, &FormatOptions::default())
}

/// Build a sequence diagram: participant declarations first, then messages,
/// both exactly in the order given.
pub fn format_sequence_diagram_with(
    participants: &[Participant],
    interactions: &[Interaction],
    options: &FormatOptions,
) -> String {
    let indent = options.pad(1);
    let mut lines = Vec::with_capacity(1 + participants.len() + interactions.len());
    lines.push("sequenceDiagram".to_string());

    for participant in participants {
        let label = participant.label.replace('\n', " ");
        lines.push(format!(
            "{}participant {} as {}",
            indent,
            participant.id,
            label.trim()
        ));
    }

    for interaction in interactions {
        lines.push(format!(
            "{}{}{}{}: {}",
            indent, interaction.from, interaction.arrow, interaction.to, interaction.message
        ));
    }

    lines.join("\n")
}
