use crate::domain::{SemanticVersion, Tag};

/// Branch names treated as mainline when nothing else is configured
pub const DEFAULT_MAINLINE_BRANCHES: [&str; 2] = ["main", "master"];

/// Prefixes that mark a release branch when nothing else is configured
pub const DEFAULT_RELEASE_PREFIXES: [&str; 2] = ["release/", "release-"];

/// Represents the checked-out branch with context
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchContext {
    pub name: String,
    pub is_main: bool,
}

impl BranchContext {
    /// Create a branch context against an explicit list of mainline names.
    ///
    /// Matching is exact: "main" is mainline, "mainline" or "Main" are not.
    pub fn with_mainline<S: AsRef<str>>(name: impl Into<String>, mainline: &[S]) -> Self {
        let name_str = name.into();
        let is_main = mainline.iter().any(|m| m.as_ref() == name_str);

        BranchContext {
            name: name_str,
            is_main,
        }
    }

    /// An empty branch name means HEAD is detached
    pub fn is_detached(&self) -> bool {
        self.name.is_empty()
    }

    /// Version encoded in a release branch name such as "release/1.2.3".
    ///
    /// The first matching prefix is stripped exactly once; if the remainder
    /// is not a semantic version the branch yields nothing.
    pub fn release_version<S: AsRef<str>>(
        &self,
        prefixes: &[S],
        allow_v_prefix: bool,
    ) -> Option<SemanticVersion> {
        let remainder = prefixes
            .iter()
            .find_map(|prefix| self.name.strip_prefix(prefix.as_ref()))?;

        Tag::new(remainder).version(allow_v_prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context(name: &str) -> BranchContext {
        BranchContext::with_mainline(name, &DEFAULT_MAINLINE_BRANCHES)
    }

    #[test]
    fn test_main_branch() {
        let branch = context("main");
        assert!(branch.is_main);
    }

    #[test]
    fn test_master_branch() {
        let branch = context("master");
        assert!(branch.is_main);
    }

    #[test]
    fn test_develop_branch() {
        let branch = context("develop");
        assert!(!branch.is_main);
        assert!(!branch.is_detached());
    }

    #[test]
    fn test_mainline_match_is_exact() {
        assert!(!context("Main").is_main);
        assert!(!context("main2").is_main);
        assert!(!context("").is_main);
    }

    #[test]
    fn test_custom_mainline() {
        let branch = BranchContext::with_mainline("trunk", &["trunk"]);
        assert!(branch.is_main);
        let branch = BranchContext::with_mainline("main", &["trunk"]);
        assert!(!branch.is_main);
    }

    #[test]
    fn test_detached() {
        assert!(context("").is_detached());
    }

    #[test]
    fn test_release_version_slash() {
        let branch = context("release/2.0.0-rc.1");
        let version = branch
            .release_version(&DEFAULT_RELEASE_PREFIXES, true)
            .unwrap();
        assert_eq!(version.to_string(), "2.0.0-rc.1");
    }

    #[test]
    fn test_release_version_dash() {
        let branch = context("release-3.0.0");
        assert_eq!(
            branch.release_version(&DEFAULT_RELEASE_PREFIXES, true),
            Some(SemanticVersion::new(3, 0, 0))
        );
    }

    #[test]
    fn test_release_version_no_match() {
        let names = [
            "feature/x",
            "releases/1.0.0",
            "release",
            "release/",
            "release/next",
            "1.2.3",
        ];
        for name in names {
            let branch = context(name);
            assert_eq!(
                branch.release_version(&DEFAULT_RELEASE_PREFIXES, true),
                None,
                "{}",
                name
            );
        }
    }

    #[test]
    fn test_release_version_strips_prefix_once() {
        let branch = context("release/release-1.0.0");
        assert_eq!(branch.release_version(&DEFAULT_RELEASE_PREFIXES, true), None);
    }
}
