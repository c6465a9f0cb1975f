//! Skeleton registry
//!
//! Embeds the skeleton assets at compile time and serves them keyed by
//! (kind slug, role). Assets are parsed once at construction; a parse
//! failure there means the shipped asset itself is broken.

use std::collections::HashMap;

use tracing::debug;

use super::definition::{SkeletonDefinition, SkeletonRole};
use super::error::TemplateError;

/// The embedded skeleton asset texts, one YAML document each.
const ASSETS: &[&str] = &[
    include_str!("assets/plain_class_header.yaml"),
    include_str!("assets/plain_class_implementation.yaml"),
    include_str!("assets/algorithm_header.yaml"),
    include_str!("assets/algorithm_implementation.yaml"),
    include_str!("assets/domain_algorithm_header.yaml"),
    include_str!("assets/domain_algorithm_implementation.yaml"),
    include_str!("assets/tool_header.yaml"),
    include_str!("assets/tool_implementation.yaml"),
    include_str!("assets/interface_header.yaml"),
    include_str!("assets/interface_implementation.yaml"),
    include_str!("assets/functional_header.yaml"),
    include_str!("assets/functional_implementation.yaml"),
];

/// Registry of all skeletons known to the generator
pub struct SkeletonRegistry {
    skeletons: HashMap<(String, SkeletonRole), SkeletonDefinition>,
}

impl SkeletonRegistry {
    /// Build the registry from the embedded assets
    pub fn embedded() -> Result<Self, TemplateError> {
        let mut skeletons = HashMap::new();
        for asset in ASSETS {
            let def = SkeletonDefinition::from_yaml(asset).map_err(|source| {
                // Best-effort id for the message: first "skeleton:" line
                let id = asset
                    .lines()
                    .find_map(|l| l.strip_prefix("skeleton:"))
                    .unwrap_or("<unknown>")
                    .trim()
                    .to_string();
                TemplateError::InvalidAsset { id, source }
            })?;
            debug!(skeleton = %def.skeleton, "registered skeleton");
            skeletons.insert((def.kind.clone(), def.role), def);
        }
        Ok(Self { skeletons })
    }

    /// Look up the skeleton for a (kind, role) pair
    pub fn get(&self, kind: &str, role: SkeletonRole) -> Result<&SkeletonDefinition, TemplateError> {
        self.skeletons
            .get(&(kind.to_string(), role))
            .ok_or_else(|| TemplateError::MissingAsset {
                kind: kind.to_string(),
                role,
            })
    }

    /// Kind slugs with at least one registered skeleton
    pub fn kinds(&self) -> Vec<&str> {
        let mut kinds: Vec<&str> = self.skeletons.keys().map(|(k, _)| k.as_str()).collect();
        kinds.sort_unstable();
        kinds.dedup();
        kinds
    }
}
