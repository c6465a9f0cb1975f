//! Configuration model for class generation
//!
//! `RawOptions` is the sparse, front-end-facing input (CLI flags or
//! interactive answers). The resolver turns it into a `ResolvedConfig`,
//! a tagged union where each kind carries exactly the fields that are
//! meaningful for it. Generators read the resolved record and never
//! mutate it.

pub mod resolver;

pub use resolver::resolve;

use thiserror::Error;

/// Top-level category of artifact being generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// Bare class with constructor and destructor only
    PlainClass,
    /// GaudiAlgorithm-derived component with lifecycle methods
    Algorithm,
    /// Algorithm restricted to a non-Normal flavor (histogramming/tupling)
    SpecializedAlgorithm,
    /// DaVinciAlgorithm-derived physics-selection component
    DomainAlgorithm,
    /// GaudiTool, optionally implementing an external interface
    Tool,
    /// Abstract IAlgTool interface
    Interface,
    /// Gaudi::Functional algorithm shaped by an input/output contract
    Functional,
}

impl Kind {
    /// Skeleton slug used to key the asset registry.
    ///
    /// SpecializedAlgorithm shares the algorithm skeletons; only the
    /// derived type name differs.
    pub fn skeleton_slug(&self) -> &'static str {
        match self {
            Kind::PlainClass => "plain-class",
            Kind::Algorithm | Kind::SpecializedAlgorithm => "algorithm",
            Kind::DomainAlgorithm => "domain-algorithm",
            Kind::Tool => "tool",
            Kind::Interface => "interface",
            Kind::Functional => "functional",
        }
    }
}

/// Flavor of an algorithm kind, selecting the base-class spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlgFlavor {
    #[default]
    Normal,
    Histogramming,
    Tupling,
}

/// Shape of a functional algorithm: its input/output arity contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FunctionalShape {
    /// No input, one output
    Producer,
    /// One input, void output
    Consumer,
    /// One input, one output
    Transformer,
    /// Two inputs, two outputs
    MultiTransformer,
}

impl FunctionalShape {
    /// C++ base template name in Gaudi::Functional
    pub fn cpp_name(&self) -> &'static str {
        match self {
            FunctionalShape::Producer => "Producer",
            FunctionalShape::Consumer => "Consumer",
            FunctionalShape::Transformer => "Transformer",
            FunctionalShape::MultiTransformer => "MultiTransformer",
        }
    }
}

/// Output side of a functional algorithm's signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FunctionalOutput {
    /// Consumer: the operator returns nothing
    Void,
    /// One or more produced types
    Types(Vec<String>),
}

impl FunctionalOutput {
    /// The C++ spelling used in the base template and operator return.
    pub fn cpp_text(&self) -> String {
        match self {
            FunctionalOutput::Void => "void".to_string(),
            FunctionalOutput::Types(types) => types.join(", "),
        }
    }
}

/// Kind-specific configuration, one variant per kind.
#[derive(Debug, Clone, PartialEq)]
pub enum KindConfig {
    PlainClass,
    Algorithm {
        flavor: AlgFlavor,
    },
    SpecializedAlgorithm {
        flavor: AlgFlavor,
    },
    DomainAlgorithm {
        flavor: AlgFlavor,
    },
    Tool {
        /// External interface the tool implements; None means the tool
        /// declares its own interface ID.
        interface: Option<String>,
    },
    Interface,
    Functional {
        shape: FunctionalShape,
        inputs: Vec<String>,
        output: FunctionalOutput,
    },
}

impl KindConfig {
    pub fn kind(&self) -> Kind {
        match self {
            KindConfig::PlainClass => Kind::PlainClass,
            KindConfig::Algorithm { .. } => Kind::Algorithm,
            KindConfig::SpecializedAlgorithm { .. } => Kind::SpecializedAlgorithm,
            KindConfig::DomainAlgorithm { .. } => Kind::DomainAlgorithm,
            KindConfig::Tool { .. } => Kind::Tool,
            KindConfig::Interface => Kind::Interface,
            KindConfig::Functional { .. } => Kind::Functional,
        }
    }
}

/// Fully resolved configuration, read-only for the generators.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    /// Target class name, also used for file names
    pub class_name: String,
    pub kind: KindConfig,
}

impl ResolvedConfig {
    /// Base-class suffix selection for the algorithm kinds.
    ///
    /// Gaudi algorithms: Normal collapses to `Algorithm` (base
    /// `GaudiAlgorithm`), other flavors append an `Alg` suffix
    /// (`HistoAlg`, `TupleAlg`). DaVinci algorithms infix the flavor
    /// between `DaVinci` and `Algorithm`, with Normal collapsing to the
    /// empty infix.
    pub fn derived_type_name(&self) -> Option<&'static str> {
        match &self.kind {
            KindConfig::Algorithm { flavor } | KindConfig::SpecializedAlgorithm { flavor } => {
                Some(match flavor {
                    AlgFlavor::Normal => "Algorithm",
                    AlgFlavor::Histogramming => "HistoAlg",
                    AlgFlavor::Tupling => "TupleAlg",
                })
            }
            KindConfig::DomainAlgorithm { flavor } => Some(match flavor {
                AlgFlavor::Normal => "",
                AlgFlavor::Histogramming => "Histo",
                AlgFlavor::Tupling => "Tuple",
            }),
            _ => None,
        }
    }

    /// Full C++ base-class spelling, where one exists.
    pub fn base_class(&self) -> Option<String> {
        match &self.kind {
            KindConfig::Algorithm { .. } | KindConfig::SpecializedAlgorithm { .. } => {
                Some(format!("Gaudi{}", self.derived_type_name().unwrap_or_default()))
            }
            KindConfig::DomainAlgorithm { .. } => Some(format!(
                "DaVinci{}Algorithm",
                self.derived_type_name().unwrap_or_default()
            )),
            KindConfig::Tool { .. } => Some("GaudiTool".to_string()),
            KindConfig::Interface => Some("IAlgTool".to_string()),
            KindConfig::Functional { shape, .. } => {
                Some(format!("Gaudi::Functional::{}", shape.cpp_name()))
            }
            KindConfig::PlainClass => None,
        }
    }
}

/// Sparse user-supplied options, before resolution.
///
/// Every field except the class name is optional; the resolver fills the
/// gaps and never overrides a value that is already present.
#[derive(Debug, Clone, Default)]
pub struct RawOptions {
    pub class_name: String,
    /// Kind token: single letter ("A", "T", ...) or full name
    pub kind: Option<String>,
    /// Flavor token for Algorithm / SpecializedAlgorithm
    pub algorithm_type: Option<String>,
    /// Flavor token for DomainAlgorithm
    pub domain_type: Option<String>,
    /// Shape token for Functional
    pub functional: Option<String>,
    /// External interface name for Tool
    pub interface: Option<String>,
    /// Input type names for Functional
    pub inputs: Option<Vec<String>>,
    /// Output type names for Functional
    pub outputs: Option<Vec<String>>,
}

impl RawOptions {
    pub fn new(class_name: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            ..Default::default()
        }
    }
}

/// Errors raised while resolving raw options.
#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("no class name supplied")]
    MissingClassName,

    #[error("unknown algorithm flavor '{0}' (expected Normal, Histo or Tuple)")]
    UnknownFlavor(String),

    #[error("unknown functional shape '{0}' (expected Transformer, Producer, Consumer or MultiTransformer)")]
    UnknownShape(String),

    #[error("flavor '{0}' is not valid for a specialized algorithm (pick Histo or Tuple)")]
    FlavorNotAllowed(String),
}
