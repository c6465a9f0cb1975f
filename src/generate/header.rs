//! Header generator
//!
//! Produces the public class declaration (`<Name>.h`) for a resolved
//! configuration.

use scaffold_templates::{SkeletonExpander, SkeletonRegistry, SkeletonRole, SubstitutionContext};

use super::base_substitutions;
use crate::config::{FunctionalShape, KindConfig, ResolvedConfig};
use crate::context::GenerationContext;
use crate::error::ScaffoldError;

/// Indent that aligns KeyValue continuation lines under the constructor
/// arguments in the functional header skeleton.
const KEYVALUE_INDENT: &str = "                          ";

/// Generate the header text for a resolved configuration.
///
/// Pure function of the configuration, the injected context and the
/// skeleton registry; fails only when no skeleton covers the kind.
pub fn generate_header(
    config: &ResolvedConfig,
    context: &GenerationContext,
    registry: &SkeletonRegistry,
) -> Result<String, ScaffoldError> {
    let skeleton = registry.get(config.kind.kind().skeleton_slug(), SkeletonRole::Header)?;

    let mut subs = base_substitutions(config, context);
    match &config.kind {
        KindConfig::Tool { interface } => fill_tool(&mut subs, &config.class_name, interface),
        KindConfig::Functional {
            shape,
            inputs,
            output,
        } => {
            subs.set("functional_kind", shape.cpp_name())
                .set("functional_output", output.cpp_text())
                .set("functional_input", inputs.join(", "))
                .set("functional_keyvalues", keyvalues_for(*shape));
        }
        _ => {}
    }

    Ok(SkeletonExpander::expand(skeleton, &subs))
}

/// Tool-specific placeholders.
///
/// With an external interface the header references it (include plus
/// base class) and the interface owns the ID: no self-declared accessor.
/// Without one, the tool declares its own `IID_<Name>` and accessor.
fn fill_tool(subs: &mut SubstitutionContext, class_name: &str, interface: &Option<String>) {
    match interface {
        Some(iface) => {
            subs.set("extra_include", format!("#include \"{iface}.h\""))
                .set("interface_id_decl", "")
                .set("interface_bases", format!(", virtual public {iface}"))
                .set("interface_id_accessor", "");
        }
        None => {
            subs.set("extra_include", "")
                .set(
                    "interface_id_decl",
                    format!("static const InterfaceID IID_{class_name} ( \"{class_name}\", 1, 0 );"),
                )
                .set("interface_bases", "")
                .set(
                    "interface_id_accessor",
                    format!(
                        "  // Return the interface ID\n  \
                         static const InterfaceID& interfaceID() {{ return IID_{class_name}; }}\n\n"
                    ),
                );
        }
    }
}

/// Constructor KeyValue pairs per shape, with the cardinality fixed by
/// the shape's input/output contract.
fn keyvalues_for(shape: FunctionalShape) -> String {
    match shape {
        FunctionalShape::Producer => r#"KeyValue("OutputLocation", {"OUTPUTLOCATION"})"#.to_string(),
        FunctionalShape::Consumer => r#"KeyValue("InputLocation", {"INPUTLOCATION"})"#.to_string(),
        FunctionalShape::Transformer => format!(
            "KeyValue(\"InputLocation\", {{\"INPUTLOCATION\"}}),\n{KEYVALUE_INDENT}KeyValue(\"OutputLocation\", {{\"OUTPUTLOCATION\"}})"
        ),
        FunctionalShape::MultiTransformer => format!(
            "{{ KeyValue(\"Input1\", {{\"INPUT1LOC\"}}),\n{KEYVALUE_INDENT}  KeyValue(\"Input2\", {{\"INPUT2LOC\"}}) }},\n{KEYVALUE_INDENT}{{ KeyValue(\"Output1\", {{\"OUTPUT1LOC\"}}),\n{KEYVALUE_INDENT}  KeyValue(\"Output2\", {{\"OUTPUT2LOC\"}}) }}"
        ),
    }
}
