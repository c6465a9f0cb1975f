//! gaudi-scaffold: source-code scaffolding for Gaudi/LHCb C++ components
//!
//! Given a class name and a handful of configuration choices, this
//! crate fills static C++ skeletons and produces a header and an
//! implementation file. The pipeline:
//!
//! 1. `config::resolve` - sparse options to a fully populated,
//!    kind-tagged configuration (pure, idempotent)
//! 2. `generate::generate_header` / `generate::generate_implementation`
//!    - pure substitutions of the configuration into the skeleton for
//!    the resolved kind
//! 3. `output::emit` - print, and optionally write guarded by a file
//!    existence check
//!
//! Skeleton assets live in the `scaffold-templates` crate; this crate
//! never interprets the C++ text beyond placeholder substitution.

pub mod config;
pub mod context;
pub mod error;
pub mod generate;
pub mod output;
pub mod prompt;

pub use config::{resolve, RawOptions, ResolvedConfig};
pub use context::GenerationContext;
pub use error::ScaffoldError;
pub use generate::{generate_header, generate_implementation};
pub use output::{emit, FileSelection, WriteOutcome};

// Re-export the skeleton layer for front-ends
pub use scaffold_templates::{SkeletonRegistry, SkeletonRole};
