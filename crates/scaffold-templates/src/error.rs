//! Error types for skeleton loading and lookup

use thiserror::Error;

use super::definition::SkeletonRole;

/// Errors surfaced by the skeleton layer
///
/// Substitution itself never fails; only asset lookup and asset parsing
/// can, and both are fatal for the invocation.
#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("no skeleton asset for kind '{kind}' ({role})")]
    MissingAsset { kind: String, role: SkeletonRole },

    #[error("skeleton asset '{id}' is not valid YAML: {source}")]
    InvalidAsset {
        id: String,
        #[source]
        source: serde_yaml::Error,
    },
}
