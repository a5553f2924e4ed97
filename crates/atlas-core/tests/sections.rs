use atlas_core::keys;
use atlas_core::models::field::Record;
use atlas_core::models::record::{SectionData, SessionRecord};
use atlas_core::models::sections::Kpi;

#[test]
fn views_of_empty_record_are_empty() {
    let record = SessionRecord::new();

    let problem = record.problem_framing();
    assert_eq!(problem.problem_statement, "");
    assert!(problem.key_metrics.is_empty());
    assert!(problem.constraints.is_empty());

    let peers = record.peer_benchmark();
    assert_eq!(peers.peer_group, "");
    assert!(peers.benchmark_ranges.is_empty());
    assert!(peers.relative_positioning.is_empty());

    let strategy = record.strategy();
    assert!(strategy.scenarios.is_empty());
    assert_eq!(strategy.recommended_scenario, "");

    assert!(record.risk_signals().key_risks.is_empty());
    assert!(record.governance().kpis.is_empty());
}

#[test]
fn missing_section_matches_empty_section() {
    let missing = SessionRecord::new();
    let empty = SessionRecord::new()
        .with_section(keys::PROBLEM_FRAMING, SectionData::new())
        .with_section(keys::GOVERNANCE, SectionData::new());

    assert_eq!(missing.problem_framing(), empty.problem_framing());
    assert_eq!(missing.governance(), empty.governance());
}

#[test]
fn risks_come_from_agent5() {
    let record = SessionRecord::new()
        .with_section("agent4", SectionData::new().with_list(keys::KEY_RISKS, ["wrong"]))
        .with_section(
            keys::RISK_SIGNALS,
            SectionData::new().with_list(keys::KEY_RISKS, ["Supplier concentration"]),
        );
    assert_eq!(record.risk_signals().key_risks, ["Supplier concentration"]);
}

#[test]
fn kpi_with_missing_fields_defaults_to_empty() {
    let record = SessionRecord::new().with_section(
        keys::GOVERNANCE,
        SectionData::new().with_records(keys::KPIS, vec![Record::new().with("metric", "NPS")]),
    );

    assert_eq!(
        record.governance().kpis,
        vec![Kpi {
            metric: "NPS",
            baseline: "",
            target: "",
            measurement_frequency: "",
        }]
    );
}

#[test]
fn scenarios_keep_order() {
    let record = SessionRecord::new().with_section(
        keys::STRATEGY,
        SectionData::new().with_records(
            keys::SCENARIOS,
            vec![
                Record::new().with("name", "Defend"),
                Record::new().with("name", "Expand"),
                Record::new().with("name", "Exit"),
            ],
        ),
    );
    let names: Vec<&str> = record.strategy().scenarios.iter().map(|s| s.name).collect();
    assert_eq!(names, ["Defend", "Expand", "Exit"]);
}
