//! End-to-end generation scenarios: raw options through the resolver and
//! both generators.

use gaudi_scaffold::config::{resolve, RawOptions};
use gaudi_scaffold::context::GenerationContext;
use gaudi_scaffold::generate::{generate_header, generate_implementation};
use gaudi_scaffold::SkeletonRegistry;

fn fixed_context() -> GenerationContext {
    GenerationContext::fixed("Test Author", "2026-08-29")
}

fn generate_both(options: &RawOptions) -> (String, String) {
    let config = resolve(options).unwrap();
    let context = fixed_context();
    let registry = SkeletonRegistry::embedded().unwrap();
    (
        generate_header(&config, &context, &registry).unwrap(),
        generate_implementation(&config, &context, &registry).unwrap(),
    )
}

#[test]
fn normal_algorithm_scenario() {
    let options = RawOptions {
        class_name: "MyAlg".to_string(),
        kind: Some("Algorithm".to_string()),
        algorithm_type: Some("Normal".to_string()),
        ..Default::default()
    };

    let (header, implementation) = generate_both(&options);

    // Header: base class, constructor, destructor, three lifecycle
    // declarations
    assert!(header.contains("class MyAlg : public GaudiAlgorithm {"));
    assert!(header.contains("MyAlg( const std::string& name, ISvcLocator* pSvcLocator );"));
    assert!(header.contains("virtual ~MyAlg();"));
    for method in ["initialize", "execute   ", "finalize  "] {
        assert!(
            header.contains(&format!("StatusCode {method}() override;")),
            "missing {method} declaration"
        );
    }

    // Implementation: constructor delegation and lifecycle bodies
    // returning a success status
    assert!(implementation.contains(": GaudiAlgorithm ( name, pSvcLocator )"));
    assert!(implementation.contains("StatusCode MyAlg::initialize() {"));
    assert!(implementation.contains("StatusCode MyAlg::execute() {"));
    assert!(implementation.contains("StatusCode MyAlg::finalize() {"));
    assert!(implementation.contains("return StatusCode::SUCCESS;"));
    assert!(implementation.contains("return GaudiAlgorithm::finalize();"));
}

#[test]
fn all_seven_kinds_generate_both_files() {
    for kind in [
        "simple",
        "Algorithm",
        "SpecializedAlgorithm",
        "DaVinciAlgorithm",
        "Tool",
        "Interface",
        "FunctionalAlgorithm",
    ] {
        let options = RawOptions {
            class_name: "Generated".to_string(),
            kind: Some(kind.to_string()),
            ..Default::default()
        };

        let (header, implementation) = generate_both(&options);

        assert!(!header.is_empty(), "kind {kind}");
        assert!(!implementation.is_empty(), "kind {kind}");
        let declarations = header
            .lines()
            .filter(|line| line.starts_with("class Generated"))
            .count();
        assert_eq!(declarations, 1, "kind {kind}");
        assert_eq!(
            implementation
                .matches("Implementation file for class : Generated")
                .count(),
            1,
            "kind {kind}"
        );
    }
}

#[test]
fn generation_is_deterministic_for_a_fixed_context() {
    let options = RawOptions {
        class_name: "MySel".to_string(),
        kind: Some("D".to_string()),
        domain_type: Some("Histo".to_string()),
        ..Default::default()
    };

    let first = generate_both(&options);
    let second = generate_both(&options);
    assert_eq!(first, second);
}

#[test]
fn histogramming_scenario_delegates_finalize_to_histo_alg() {
    let options = RawOptions {
        class_name: "HistoMaker".to_string(),
        kind: Some("A".to_string()),
        algorithm_type: Some("Histo".to_string()),
        ..Default::default()
    };

    let config = resolve(&options).unwrap();
    assert_eq!(config.derived_type_name(), Some("HistoAlg"));

    let (header, implementation) = generate_both(&options);
    assert!(header.contains("class HistoMaker : public GaudiHistoAlg {"));
    assert!(implementation.contains("return GaudiHistoAlg::finalize();"));
}

#[test]
fn tool_interface_switch_moves_id_ownership() {
    let without = RawOptions {
        class_name: "CoolTool".to_string(),
        kind: Some("T".to_string()),
        ..Default::default()
    };
    let (header, implementation) = generate_both(&without);
    assert!(header.contains("interfaceID() { return IID_CoolTool; }"));
    assert!(implementation.contains("declareInterface<CoolTool>(this);"));

    let with = RawOptions {
        interface: Some("ICoolTool".to_string()),
        ..without
    };
    let (header, implementation) = generate_both(&with);
    assert!(header.contains("#include \"ICoolTool.h\""));
    assert!(!header.contains("interfaceID()"));
    assert!(implementation.contains("declareInterface<ICoolTool>(this);"));
}

#[test]
fn producer_and_consumer_operator_shapes() {
    let producer = RawOptions {
        class_name: "EventMaker".to_string(),
        kind: Some("F".to_string()),
        functional: Some("Producer".to_string()),
        ..Default::default()
    };
    let (_, implementation) = generate_both(&producer);
    assert!(implementation.contains("OUTPUT EventMaker::operator()() const {"));
    assert!(implementation.contains("OUTPUT ret;"));

    let consumer = RawOptions {
        class_name: "EventSink".to_string(),
        kind: Some("F".to_string()),
        functional: Some("Consumer".to_string()),
        ..Default::default()
    };
    let (_, implementation) = generate_both(&consumer);
    assert!(implementation.contains("void EventSink::operator()(const INPUT& in_1) const {"));
    assert!(implementation.contains("return;"));
    assert!(!implementation.contains("ret;"));
}

#[test]
fn author_and_date_come_from_the_injected_context() {
    let options = RawOptions {
        class_name: "Stamped".to_string(),
        kind: Some("simple".to_string()),
        ..Default::default()
    };

    let config = resolve(&options).unwrap();
    let registry = SkeletonRegistry::embedded().unwrap();
    let context = GenerationContext::fixed("Someone Else", "1999-12-31");

    let header = generate_header(&config, &context, &registry).unwrap();
    let implementation = generate_implementation(&config, &context, &registry).unwrap();

    assert!(header.contains("@author Someone Else"));
    assert!(header.contains("@date   1999-12-31"));
    assert!(implementation.contains("1999-12-31 : Someone Else"));
}
