//! Implementation generator
//!
//! Produces the method-body file (`<Name>.cpp`) for a resolved
//! configuration. The kind-specific work beyond the header's is the
//! call-operator signature for functional algorithms: each input type
//! becomes one named parameter, and the body returns a
//! default-constructed value (or nothing for a Consumer).

use scaffold_templates::{SkeletonExpander, SkeletonRegistry, SkeletonRole};

use super::base_substitutions;
use crate::config::{FunctionalOutput, KindConfig, ResolvedConfig};
use crate::context::GenerationContext;
use crate::error::ScaffoldError;

/// Generate the implementation text for a resolved configuration.
pub fn generate_implementation(
    config: &ResolvedConfig,
    context: &GenerationContext,
    registry: &SkeletonRegistry,
) -> Result<String, ScaffoldError> {
    let skeleton = registry.get(
        config.kind.kind().skeleton_slug(),
        SkeletonRole::Implementation,
    )?;

    let mut subs = base_substitutions(config, context);
    match &config.kind {
        KindConfig::Tool { interface } => {
            // The declared interface falls back to the class itself when
            // the tool owns its ID.
            let tool_interface = interface.as_deref().unwrap_or(&config.class_name);
            subs.set("tool_interface", tool_interface);
        }
        KindConfig::Functional { inputs, output, .. } => {
            subs.set("functional_output", output.cpp_text())
                .set("operator_params", operator_params(inputs))
                .set("operator_body", operator_body(output));
        }
        _ => {}
    }

    Ok(SkeletonExpander::expand(skeleton, &subs))
}

/// One named parameter per input type, positionally: `const T& in_1, ...`
fn operator_params(inputs: &[String]) -> String {
    inputs
        .iter()
        .enumerate()
        .map(|(i, t)| format!("const {}& in_{}", t, i + 1))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Bare return for void output, default-constructed value otherwise.
fn operator_body(output: &FunctionalOutput) -> String {
    match output {
        FunctionalOutput::Void => "return;".to_string(),
        FunctionalOutput::Types(_) => {
            format!("{} ret;\n  return ret;", output.cpp_text())
        }
    }
}
