//! Skeleton assets for Gaudi C++ class generation
//!
//! A skeleton is a static C++ text with `${placeholder}` tokens, one per
//! (kind, role) pair - e.g. the algorithm header, the tool implementation.
//! This crate owns the assets and the substitution engine; it never
//! interprets the C++ text structurally.
//!
//! Key concepts:
//! - Skeletons are opaque: the contract is "placeholder name -> value",
//!   nothing more.
//! - Substitution is SAFE: a token with no value passes through verbatim
//!   instead of erroring, so a missing field leaks a visible `${...}`
//!   marker into the output rather than aborting generation.
//! - Assets are embedded at compile time; a missing (kind, role) pair is
//!   the only fatal condition.
//!
//! # Example
//!
//! ```yaml
//! skeleton: algorithm-header
//! kind: algorithm
//! role: header
//! metadata:
//!   name: Gaudi algorithm header
//!   summary: Class declaration for a GaudiAlgorithm-derived component
//! body: |
//!   class ${name} : public Gaudi${algorithm_type_name} {
//!   ...
//! ```

mod definition;
mod error;
mod expander;
mod registry;

pub use definition::{SkeletonDefinition, SkeletonMetadata, SkeletonRole};
pub use error::TemplateError;
pub use expander::{SkeletonExpander, SubstitutionContext};
pub use registry::SkeletonRegistry;
