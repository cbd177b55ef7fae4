//! Repair pipeline for raw, possibly malformed diagram text

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use crate::labels::clean_node_labels;
use crate::validate::{FENCE, FENCE_OPEN};

lazy_static! {
    /// `List~T~` generic notation; not every renderer accepts it.
    static ref RE_TILDE_GENERIC: Regex = Regex::new(r"List~([^~]+)~").unwrap();
}

/// Fix common issues in diagram text:
///
/// 1. strip ```` ```mermaid ```` openers and every ```` ``` ```` fence
/// 2. collapse line breaks inside `["..."]` labels
/// 3. rewrite `List~T~` as `List<T>`
/// 4. trim surrounding whitespace
///
/// Re-running on the output yields the same text.
pub fn fix_common_issues(text: &str) -> String {
    let opener = format!("{}\n", FENCE_OPEN);
    let unfenced = text.replace(&opener, "").replace(FENCE, "");
    if unfenced.len() != text.len() {
        debug!("removed code fence markers");
    }

    let cleaned = clean_node_labels(&unfenced);

    let rewritten = rewrite_tilde_generics(&cleaned);

    rewritten.trim().to_string()
}

/// Rewrite `List~T~` to `List<T>` for any `T`
pub fn rewrite_tilde_generics(text: &str) -> String {
    let count = RE_TILDE_GENERIC.find_iter(text).count();
    if count == 0 {
        return text.to_string();
    }
    debug!("rewrote {} tilde generic(s)", count);
    RE_TILDE_GENERIC.replace_all(text, "List<${1}>").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::labels::has_multiline_label;
    use rstest::rstest;

    const FENCED: &str = "\n```mermaid\nflowchart TD\n    A[\"SAP Order Processing Pipeline\n    \"]\n    B[\"SFTP Batch Upload Job\n    \"]\n    A --> B\n```\n";

    #[test]
    fn test_fenced_multiline_labels() {
        let fixed = fix_common_issues(FENCED);
        assert!(!fixed.contains("```"));
        assert!(!has_multiline_label(&fixed));
        assert_eq!(fixed, fixed.trim());
        assert_eq!(
            fixed,
            "flowchart TD\n    A[\"SAP Order Processing Pipeline     \"]\n    B[\"SFTP Batch Upload Job     \"]\n    A --> B"
        );
    }

    #[test]
    fn test_idempotent() {
        let once = fix_common_issues(FENCED);
        assert_eq!(fix_common_issues(&once), once);
    }

    #[rstest]
    #[case("List~int~", "List<int>")]
    #[case("+items: List~Order~", "+items: List<Order>")]
    #[case("+get(): List~String~ and List~u8~", "+get(): List<String> and List<u8>")]
    #[case("Map~K~", "Map~K~")]
    #[case("List~~", "List~~")]
    fn test_tilde_generics(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(fix_common_issues(input), expected);
    }

    #[test]
    fn test_clean_text_unchanged() {
        let text = "classDiagram\n    class Foo {\n        +x: int\n    }";
        assert_eq!(fix_common_issues(text), text);
    }

    #[test]
    fn test_stray_fences_anywhere() {
        let text = "flowchart TD\n    A --> B ```\n```";
        assert_eq!(fix_common_issues(text), "flowchart TD\n    A --> B");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(fix_common_issues(""), "");
        assert_eq!(fix_common_issues("```mermaid\n```"), "");
    }
}
