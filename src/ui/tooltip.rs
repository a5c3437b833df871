use crate::Issue;

/// Assemble the hover tooltip for an issue.
///
/// Clauses appear in a fixed order: kind label, checker message, top
/// suggestion, shortcut hint. A clause whose backing value is absent
/// or empty is omitted rather than rendered blank.
pub fn sentence(issue: &Issue, shortcut: Option<&str>) -> String {
    let mut parts = vec![issue.kind.label().to_string()];

    if !issue.message.is_empty() {
        parts.push(issue.message.clone());
    }

    if let Some(first) = issue.suggestions.first() {
        if !first.is_empty() {
            parts.push(format!("Try \u{201c}{}\u{201d}", first));
        }
    }

    if let Some(keys) = shortcut {
        if !keys.is_empty() {
            parts.push(format!("{} to apply", keys));
        }
    }

    parts.join(" · ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{IssueKind, Span};

    fn issue(message: &str, suggestions: &[&str]) -> Issue {
        Issue {
            word: "teh".to_string(),
            span: Span::new(0, 3),
            kind: IssueKind::Spelling,
            message: message.to_string(),
            suggestions: suggestions.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_full_sentence() {
        let text = sentence(
            &issue("Possible spelling mistake", &["the"]),
            Some("Cmd+Return"),
        );
        assert_eq!(
            text,
            "Spelling · Possible spelling mistake · Try \u{201c}the\u{201d} · Cmd+Return to apply"
        );
    }

    #[test]
    fn test_empty_clauses_are_omitted() {
        assert_eq!(sentence(&issue("", &[]), None), "Spelling");

        let text = sentence(&issue("", &["the"]), None);
        assert_eq!(text, "Spelling · Try \u{201c}the\u{201d}");
    }

    #[test]
    fn test_blank_shortcut_is_omitted() {
        let text = sentence(&issue("Message", &[]), Some(""));
        assert_eq!(text, "Spelling · Message");
    }
}
