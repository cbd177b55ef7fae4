//! Class diagram generator

use crate::types::ClassDef;
use crate::FormatOptions;

pub fn format_class_diagram(classes: &[ClassDef]) -> String {
    format_class_diagram_with(classes, &FormatOptions::default())
}

/// Build a class diagram. Each class becomes a `class Name { ... }` block with
/// attributes before methods, members indented one level deeper than the block.
pub fn format_class_diagram_with(classes: &[ClassDef], options: &FormatOptions) -> String {
    let block = options.pad(1);
    let member = options.pad(2);
    let mut lines = vec!["classDiagram".to_string()];

    for class in classes {
        lines.push(format!("{}class {} {{", block, class.name));

        for attr in &class.attributes {
            lines.push(format!(
                "{}{}{}: {}",
                member, attr.visibility, attr.name, attr.attr_type
            ));
        }

        for method in &class.methods {
            lines.push(format!(
                "{}{}{}({}): {}",
                member, method.visibility, method.name, method.params, method.return_type
            ));
        }

        lines.push(format!("{}}}", block));
    }

    lines.join("\n")
}
