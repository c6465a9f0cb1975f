//! mkclass - generate Gaudi/LHCb C++ class skeletons
//!
//! Usage: mkclass [OPTIONS] <CLASS_NAME>
//!
//! Prints a header and an implementation file for the requested
//! component kind; `-W` also writes them next to the current directory,
//! skipping files that already exist.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use gaudi_scaffold::config::{resolve, RawOptions};
use gaudi_scaffold::context::GenerationContext;
use gaudi_scaffold::generate::{generate_header, generate_implementation};
use gaudi_scaffold::output::{emit, FileSelection};
use gaudi_scaffold::prompt::prompt_for_gaps;
use gaudi_scaffold::SkeletonRegistry;

#[derive(Parser)]
#[command(name = "mkclass")]
#[command(about = "Gaudi/LHCb C++ class skeleton generator")]
struct Cli {
    /// Name of the class to generate
    class_name: String,

    /// Kind of class: Algorithm, DaVinciAlgorithm, FunctionalAlgorithm,
    /// Tool, Interface or simple (single letters accepted; unknown
    /// tokens fall back to a simple class)
    #[arg(short = 't', long = "kind")]
    kind: Option<String>,

    /// Algorithm flavor: Normal, Histo or Tuple
    #[arg(short = 'a', long = "algorithm-type")]
    algorithm_type: Option<String>,

    /// DaVinci algorithm flavor: Normal, Histo or Tuple
    #[arg(short = 'd', long = "domain-type")]
    domain_type: Option<String>,

    /// Functional shape: Transformer, Producer, Consumer or
    /// MultiTransformer
    #[arg(short = 'f', long = "functional")]
    functional: Option<String>,

    /// Interface implemented by a tool
    #[arg(short = 'I', long = "interface")]
    interface: Option<String>,

    /// Input type for a functional algorithm (repeatable)
    #[arg(short = 'i', long = "input")]
    inputs: Vec<String>,

    /// Output type for a functional algorithm (repeatable)
    #[arg(short = 'o', long = "output")]
    outputs: Vec<String>,

    /// Only generate the header
    #[arg(short = 'H', long = "header-only", conflicts_with = "cpp_only")]
    header_only: bool,

    /// Only generate the .cpp implementation
    #[arg(short = 'C', long = "cpp-only")]
    cpp_only: bool,

    /// Write the output files (default: print only)
    #[arg(short = 'W', long = "write")]
    write: bool,

    /// Never prompt; missing options take their defaults
    #[arg(long)]
    batch: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut options = RawOptions {
        class_name: cli.class_name,
        kind: cli.kind,
        algorithm_type: cli.algorithm_type,
        domain_type: cli.domain_type,
        functional: cli.functional,
        interface: cli.interface,
        inputs: (!cli.inputs.is_empty()).then_some(cli.inputs),
        outputs: (!cli.outputs.is_empty()).then_some(cli.outputs),
    };

    if !cli.batch {
        prompt_for_gaps(&mut options)?;
    }

    let config = resolve(&options)?;
    let context = GenerationContext::from_env();
    let registry = SkeletonRegistry::embedded()?;

    let selection = if cli.header_only {
        FileSelection::HeaderOnly
    } else if cli.cpp_only {
        FileSelection::ImplementationOnly
    } else {
        FileSelection::Both
    };

    let cwd = std::env::current_dir()?;
    if selection.wants_header() {
        let header = generate_header(&config, &context, &registry)?;
        emit(&cwd, &format!("{}.h", config.class_name), &header, cli.write)?;
    }
    if selection.wants_implementation() {
        let implementation = generate_implementation(&config, &context, &registry)?;
        emit(
            &cwd,
            &format!("{}.cpp", config.class_name),
            &implementation,
            cli.write,
        )?;
    }

    Ok(())
}
