//! Error types for the generator
//!
//! Two user-visible failure classes: an option that cannot be resolved
//! to a valid choice, and a missing skeleton asset. Both abort the
//! invocation with no partial output. Substitution never fails.

use thiserror::Error;

use crate::config::ConfigError;
use scaffold_templates::TemplateError;

/// Top-level error for a generation run.
#[derive(Error, Debug)]
pub enum ScaffoldError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("template error: {0}")]
    Template(#[from] TemplateError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
