//! Configuration resolver
//!
//! Pure decision table from sparse `RawOptions` to a `ResolvedConfig`.
//! Resolution only fills gaps: a field the caller supplied explicitly is
//! never overridden by a default. The one exception is signature
//! cardinality, which is fully determined by the functional shape
//! (a Producer has no input no matter what was passed).

use tracing::{debug, warn};

use super::{
    AlgFlavor, ConfigError, FunctionalOutput, FunctionalShape, Kind, KindConfig, RawOptions,
    ResolvedConfig,
};

/// Default placeholder type names for undeclared functional signatures.
const DEFAULT_INPUT: &str = "INPUT";
const DEFAULT_OUTPUT: &str = "OUTPUT";

/// Resolve sparse raw options into a fully populated configuration.
///
/// Fails only when the class name is missing or a sub-choice token is
/// outside its closed set. An unrecognized *kind* token is not an error:
/// it degrades to `PlainClass`, the simplest output.
pub fn resolve(options: &RawOptions) -> Result<ResolvedConfig, ConfigError> {
    if options.class_name.trim().is_empty() {
        return Err(ConfigError::MissingClassName);
    }

    let kind = normalize_kind(options.kind.as_deref());
    debug!(?kind, class = %options.class_name, "resolved kind");

    let kind_config = match kind {
        Kind::PlainClass => KindConfig::PlainClass,
        Kind::Interface => KindConfig::Interface,
        Kind::Tool => KindConfig::Tool {
            interface: options.interface.clone().filter(|s| !s.trim().is_empty()),
        },
        Kind::Algorithm => KindConfig::Algorithm {
            flavor: resolve_flavor(options.algorithm_type.as_deref())?,
        },
        Kind::SpecializedAlgorithm => {
            let flavor = match options.algorithm_type.as_deref() {
                None => AlgFlavor::Histogramming,
                Some(token) => match resolve_flavor(Some(token))? {
                    AlgFlavor::Normal => {
                        return Err(ConfigError::FlavorNotAllowed(token.to_string()))
                    }
                    other => other,
                },
            };
            KindConfig::SpecializedAlgorithm { flavor }
        }
        Kind::DomainAlgorithm => KindConfig::DomainAlgorithm {
            flavor: resolve_flavor(options.domain_type.as_deref())?,
        },
        Kind::Functional => resolve_functional(options)?,
    };

    Ok(ResolvedConfig {
        class_name: options.class_name.clone(),
        kind: kind_config,
    })
}

/// Normalize a kind token to its canonical value.
///
/// Accepts the single-letter prompt answers and the full names, case
/// insensitively. Anything unrecognized (or absent) maps to PlainClass
/// rather than failing the run.
pub(crate) fn normalize_kind(token: Option<&str>) -> Kind {
    let Some(token) = token else {
        return Kind::PlainClass;
    };

    match token.to_ascii_lowercase().as_str() {
        "a" | "algorithm" => Kind::Algorithm,
        "s" | "specializedalgorithm" | "specialized" => Kind::SpecializedAlgorithm,
        "d" | "davincialgorithm" | "domainalgorithm" => Kind::DomainAlgorithm,
        "t" | "tool" => Kind::Tool,
        "i" | "interface" => Kind::Interface,
        "f" | "functional" | "functionalalgorithm" | "gaudifunctionalalgorithm" => Kind::Functional,
        "simple" | "plainclass" | "class" => Kind::PlainClass,
        other => {
            debug!(token = other, "unrecognized kind token, defaulting to plain class");
            Kind::PlainClass
        }
    }
}

/// Resolve an algorithm flavor token, defaulting to Normal.
fn resolve_flavor(token: Option<&str>) -> Result<AlgFlavor, ConfigError> {
    let Some(token) = token else {
        return Ok(AlgFlavor::Normal);
    };

    match token.to_ascii_lowercase().as_str() {
        "" | "n" | "normal" => Ok(AlgFlavor::Normal),
        "h" | "histo" | "histogramming" => Ok(AlgFlavor::Histogramming),
        "t" | "tuple" | "tupling" => Ok(AlgFlavor::Tupling),
        _ => Err(ConfigError::UnknownFlavor(token.to_string())),
    }
}

/// Resolve a functional shape token, defaulting to Transformer.
fn resolve_shape(token: Option<&str>) -> Result<FunctionalShape, ConfigError> {
    let Some(token) = token else {
        return Ok(FunctionalShape::Transformer);
    };

    match token.to_ascii_lowercase().as_str() {
        "" | "t" | "transformer" => Ok(FunctionalShape::Transformer),
        "p" | "producer" => Ok(FunctionalShape::Producer),
        "c" | "consumer" => Ok(FunctionalShape::Consumer),
        "m" | "multitransformer" => Ok(FunctionalShape::MultiTransformer),
        _ => Err(ConfigError::UnknownShape(token.to_string())),
    }
}

/// Resolve the functional variant: shape plus defaulted signatures.
///
/// The fixed cardinality table:
///   Producer         () -> OUTPUT
///   Consumer         (INPUT) -> void
///   Transformer      (INPUT) -> OUTPUT
///   MultiTransformer (INPUT1, INPUT2) -> (OUTPUT1, OUTPUT2)
fn resolve_functional(options: &RawOptions) -> Result<KindConfig, ConfigError> {
    let shape = resolve_shape(options.functional.as_deref())?;

    let explicit_inputs = options.inputs.clone().filter(|v| !v.is_empty());
    let explicit_outputs = options.outputs.clone().filter(|v| !v.is_empty());

    let inputs = match shape {
        FunctionalShape::Producer => {
            if explicit_inputs.is_some() {
                warn!("a Producer takes no input, ignoring declared input types");
            }
            Vec::new()
        }
        FunctionalShape::MultiTransformer => explicit_inputs
            .unwrap_or_else(|| vec![format!("{DEFAULT_INPUT}1"), format!("{DEFAULT_INPUT}2")]),
        _ => explicit_inputs.unwrap_or_else(|| vec![DEFAULT_INPUT.to_string()]),
    };

    let output = match shape {
        FunctionalShape::Consumer => {
            if explicit_outputs.is_some() {
                warn!("a Consumer produces no output, ignoring declared output types");
            }
            FunctionalOutput::Void
        }
        FunctionalShape::MultiTransformer => FunctionalOutput::Types(
            explicit_outputs
                .unwrap_or_else(|| vec![format!("{DEFAULT_OUTPUT}1"), format!("{DEFAULT_OUTPUT}2")]),
        ),
        _ => FunctionalOutput::Types(
            explicit_outputs.unwrap_or_else(|| vec![DEFAULT_OUTPUT.to_string()]),
        ),
    };

    Ok(KindConfig::Functional {
        shape,
        inputs,
        output,
    })
}
