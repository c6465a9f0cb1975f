//! Output generation
//!
//! Two pure generators over the resolved configuration: one for the
//! header file, one for the implementation file. Each selects its
//! skeleton by kind, builds the placeholder map and expands it. The
//! only failure mode is a missing skeleton asset.

pub mod banner;
pub mod header;
pub mod implementation;

pub use header::generate_header;
pub use implementation::generate_implementation;

use crate::config::ResolvedConfig;
use crate::context::GenerationContext;
use scaffold_templates::SubstitutionContext;

/// Placeholder values shared by both generators.
fn base_substitutions(
    config: &ResolvedConfig,
    context: &GenerationContext,
) -> SubstitutionContext {
    let mut subs = SubstitutionContext::new();
    subs.set("name", &config.class_name)
        .set("author", &context.author)
        .set("date", &context.date)
        .set(
            "class_doc",
            banner::doxy_class_comment(&config.class_name, context),
        );
    if let Some(type_name) = config.derived_type_name() {
        subs.set("algorithm_type_name", type_name);
    }
    subs
}
