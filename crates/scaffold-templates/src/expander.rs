//! Skeleton expander
//!
//! Expands a skeleton body to C++ source text by substituting
//! `${placeholder}` tokens from a name -> value map.

use std::collections::HashMap;

use tracing::debug;

use super::definition::SkeletonDefinition;

/// Placeholder values for one expansion
///
/// A plain name -> value map with a builder-style API. Values are
/// substituted literally; a name with no value leaves its token in the
/// output.
#[derive(Debug, Clone, Default)]
pub struct SubstitutionContext {
    values: HashMap<String, String>,
}

impl SubstitutionContext {
    /// Create an empty context
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a placeholder value
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.values.insert(name.into(), value.into());
        self
    }

    /// Builder-style variant of [`set`](Self::set)
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }

    /// Look up a placeholder value
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(|s| s.as_str())
    }
}

/// Expands skeletons to C++ source text
pub struct SkeletonExpander;

impl SkeletonExpander {
    /// Expand a skeleton body against a substitution context
    ///
    /// Substitution is safe: tokens with no value pass through verbatim
    /// (logged at debug level), and malformed tokens are copied as-is.
    /// This never fails.
    pub fn expand(skeleton: &SkeletonDefinition, context: &SubstitutionContext) -> String {
        Self::substitute(&skeleton.body, context)
    }

    /// Substitute `${name}` tokens in arbitrary text
    pub fn substitute(text: &str, context: &SubstitutionContext) -> String {
        let mut out = String::with_capacity(text.len());
        let mut rest = text;

        while let Some(start) = rest.find("${") {
            out.push_str(&rest[..start]);
            let after = &rest[start + 2..];

            match after.find('}') {
                Some(end) => {
                    let token = &after[..end];
                    if Self::is_placeholder_name(token) {
                        match context.get(token) {
                            Some(value) => out.push_str(value),
                            None => {
                                debug!(placeholder = token, "unresolved placeholder left verbatim");
                                out.push_str(&rest[start..start + 2 + end + 1]);
                            }
                        }
                    } else {
                        // Not a placeholder at all (e.g. shell text in a
                        // skeleton body) - copy it through untouched.
                        out.push_str(&rest[start..start + 2 + end + 1]);
                    }
                    rest = &after[end + 1..];
                }
                None => {
                    // Unterminated token at end of text
                    out.push_str(&rest[start..]);
                    rest = "";
                }
            }
        }

        out.push_str(rest);
        out
    }

    fn is_placeholder_name(token: &str) -> bool {
        !token.is_empty()
            && token
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_')
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definition::SkeletonDefinition;

    fn sample_skeleton() -> SkeletonDefinition {
        SkeletonDefinition::from_yaml(
            r#"
skeleton: test-header
kind: test
role: header
metadata:
  name: Test
body: |
  class ${name} : public ${base} {
    // ${name} body
  };
"#,
        )
        .unwrap()
    }

    #[test]
    fn substitutes_all_occurrences() {
        let skeleton = sample_skeleton();
        let ctx = SubstitutionContext::new()
            .with("name", "MyAlg")
            .with("base", "GaudiAlgorithm");

        let out = SkeletonExpander::expand(&skeleton, &ctx);
        assert_eq!(out.matches("MyAlg").count(), 2);
        assert!(out.contains("public GaudiAlgorithm"));
        assert!(!out.contains("${"));
    }

    #[test]
    fn unresolved_placeholder_passes_through() {
        let skeleton = sample_skeleton();
        let ctx = SubstitutionContext::new().with("name", "MyAlg");

        let out = SkeletonExpander::expand(&skeleton, &ctx);
        assert!(out.contains("class MyAlg : public ${base} {"));
    }

    #[test]
    fn malformed_tokens_are_untouched() {
        let ctx = SubstitutionContext::new().with("name", "X");

        // Space inside the braces: not a placeholder
        assert_eq!(
            SkeletonExpander::substitute("a ${not a token} b", &ctx),
            "a ${not a token} b"
        );
        // Unterminated token at end of input
        assert_eq!(SkeletonExpander::substitute("tail ${name", &ctx), "tail ${name");
        // Empty token
        assert_eq!(SkeletonExpander::substitute("x ${} y", &ctx), "x ${} y");
    }

    #[test]
    fn value_containing_dollar_is_not_rescanned() {
        let ctx = SubstitutionContext::new().with("name", "${base}");

        // Substituted values are literal, never re-expanded
        assert_eq!(SkeletonExpander::substitute("${name}", &ctx), "${base}");
    }
}
