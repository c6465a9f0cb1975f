//! Skeleton definition types
//!
//! A skeleton asset is a YAML document: identity, the (kind, role) pair it
//! covers, display metadata, and the raw C++ body with `${placeholder}`
//! tokens.

use serde::{Deserialize, Serialize};

/// Which of the two generated files a skeleton produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkeletonRole {
    /// The public class declaration (`<Name>.h`)
    Header,
    /// The method-body file (`<Name>.cpp`)
    Implementation,
}

impl SkeletonRole {
    /// File extension for the generated output
    pub fn extension(&self) -> &'static str {
        match self {
            SkeletonRole::Header => "h",
            SkeletonRole::Implementation => "cpp",
        }
    }
}

impl std::fmt::Display for SkeletonRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkeletonRole::Header => write!(f, "header"),
            SkeletonRole::Implementation => write!(f, "implementation"),
        }
    }
}

/// Display metadata for a skeleton
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkeletonMetadata {
    /// Human-readable name
    pub name: String,
    /// One-line summary of what the skeleton produces
    #[serde(default)]
    pub summary: Option<String>,
}

/// A complete skeleton definition loaded from YAML
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkeletonDefinition {
    /// Unique id, e.g. "algorithm-header"
    pub skeleton: String,
    /// Kind slug this skeleton covers, e.g. "algorithm", "tool"
    pub kind: String,
    /// Header or implementation
    pub role: SkeletonRole,
    /// Display metadata
    pub metadata: SkeletonMetadata,
    /// The raw C++ text with `${placeholder}` tokens
    pub body: String,
}

impl SkeletonDefinition {
    /// Parse a skeleton from YAML text
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_minimal_definition() {
        let def = SkeletonDefinition::from_yaml(
            r#"
skeleton: test-header
kind: test
role: header
metadata:
  name: Test header
body: |
  class ${name} {};
"#,
        )
        .unwrap();

        assert_eq!(def.skeleton, "test-header");
        assert_eq!(def.role, SkeletonRole::Header);
        assert!(def.metadata.summary.is_none());
        assert!(def.body.contains("${name}"));
    }

    #[test]
    fn role_extensions() {
        assert_eq!(SkeletonRole::Header.extension(), "h");
        assert_eq!(SkeletonRole::Implementation.extension(), "cpp");
    }
}
