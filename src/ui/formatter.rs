//! Pure formatting functions for command output.

use console::style;

use crate::detail::VersionDetail;
use crate::error::Result;

/// Render a version detail as a flat JSON object.
///
/// Compact by default; `pretty` indents nested lines by two spaces.
pub fn render_detail(detail: &VersionDetail, pretty: bool) -> Result<String> {
    let rendered = if pretty {
        serde_json::to_string_pretty(detail)?
    } else {
        serde_json::to_string(detail)?
    };
    Ok(rendered)
}

/// Format an error message with a red prefix.
pub fn format_error(message: &str) -> String {
    format!("{} {}", style("ERROR:").red().bold(), message)
}

/// Print an error message to stderr.
pub fn display_error(message: &str) {
    eprintln!("{}", format_error(message));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::derive::{derive, RepositorySnapshot};

    fn detail() -> VersionDetail {
        let snapshot = RepositorySnapshot::new(
            "0b85e68c13650b5ba793c681defe1dc12f03fb50",
            "feature/x",
            vec![],
        );
        derive(Some(&snapshot)).unwrap()
    }

    #[test]
    fn test_render_compact() {
        let json = render_detail(&detail(), false).unwrap();
        assert!(!json.contains('\n'));
        assert!(json.starts_with(r#"{"major":0,"minor":1,"patch":0,"core":"0.1.0","#));
        assert!(json.contains(r#""isDefault":true,"preRelease":"dev","#));
        assert!(json.contains(r#""semver":"0.1.0-dev""#));
    }

    #[test]
    fn test_render_pretty() {
        let json = render_detail(&detail(), true).unwrap();
        let lines: Vec<&str> = json.lines().collect();
        assert_eq!(lines.first(), Some(&"{"));
        assert_eq!(lines[1], r#"  "major": 0,"#);
        assert_eq!(lines.last(), Some(&"}"));
        assert_eq!(lines.len(), 13);
    }

    #[test]
    fn test_pretty_and_compact_agree() {
        let compact: serde_json::Value =
            serde_json::from_str(&render_detail(&detail(), false).unwrap()).unwrap();
        let pretty: serde_json::Value =
            serde_json::from_str(&render_detail(&detail(), true).unwrap()).unwrap();
        assert_eq!(compact, pretty);
    }

    #[test]
    fn test_format_error_contains_message() {
        let msg = format_error("unable to retrieve the current branch name");
        assert!(msg.contains("ERROR:"));
        assert!(msg.contains("unable to retrieve the current branch name"));
    }
}
