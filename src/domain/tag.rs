use crate::domain::SemanticVersion;

/// A tag name found on the commit being versioned
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub name: String,
}

impl Tag {
    /// Create a new tag from a string
    pub fn new(name: impl Into<String>) -> Self {
        Tag { name: name.into() }
    }

    /// Interpret the tag as a semantic version.
    ///
    /// Returns `None` for tags like "latest" that coexist with version tags.
    /// With `allow_v_prefix`, "v1.2.3" is read as 1.2.3.
    pub fn version(&self, allow_v_prefix: bool) -> Option<SemanticVersion> {
        let parsed = if allow_v_prefix {
            SemanticVersion::parse_lenient(&self.name)
        } else {
            SemanticVersion::parse(&self.name)
        };
        parsed.ok()
    }
}
