//! Label sanitizer: collapses raw line breaks inside `["..."]` labels

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

lazy_static! {
    /// A double-quoted bracket label containing at least one raw line break.
    /// Each match covers exactly one break (the first one in the label).
    pub(crate) static ref RE_MULTILINE_LABEL: Regex =
        Regex::new(r#"\["([^"]*?)\n([^"]*?)"\]"#).unwrap();
}

/// Replace every line break inside a quoted bracket label with a single space.
///
/// Labels spanning more than two lines are handled by repeating the rewrite.
/// Each pass removes at least one `\n`, so the number of passes is bounded by
/// the line-break count of the input.
pub fn clean_node_labels(text: &str) -> String {
    let mut cleaned = text.to_string();
    let max_passes = cleaned.matches('\n').count();

    for pass in 0..=max_passes {
        if !RE_MULTILINE_LABEL.is_match(&cleaned) {
            if pass > 0 {
                debug!("collapsed multi-line labels in {} pass(es)", pass);
            }
            break;
        }
        cleaned = RE_MULTILINE_LABEL
            .replace_all(&cleaned, r#"["${1} ${2}"]"#)
            .into_owned();
    }

    cleaned
}

/// True if any quoted bracket label still spans a raw line break
pub fn has_multiline_label(text: &str) -> bool {
    RE_MULTILINE_LABEL.is_match(text)
}
