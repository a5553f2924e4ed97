use atlas_core::keys;
use atlas_core::models::field::Record;
use atlas_core::models::record::{SectionData, SessionRecord};
use atlas_export::assemble::{
    KPIS_HEADING, PEER_BENCHMARKING_HEADING, PROBLEM_STATEMENT_HEADING, RISKS_HEADING,
    STRATEGIC_SCENARIOS_HEADING, assemble_report,
};
use atlas_export::blocks::LayoutBlock;
use serde_json::json;

const HEADINGS: [&str; 5] = [
    PROBLEM_STATEMENT_HEADING,
    PEER_BENCHMARKING_HEADING,
    STRATEGIC_SCENARIOS_HEADING,
    RISKS_HEADING,
    KPIS_HEADING,
];

fn full_session() -> SessionRecord {
    SessionRecord::try_from(json!({
        "agent1": {
            "problem_statement": "Margins declining.",
            "key_metrics": ["m1", "m2", "m3"],
            "constraints": ["Budget capped"]
        },
        "agent2": {
            "peer_group": "Mid-market SaaS",
            "benchmark_ranges": { "Revenue": "$1-2M", "Growth": "5-10%" },
            "relative_positioning": ["Below median on growth"]
        },
        "agent3": {
            "scenarios": [
                { "name": "Defend", "expected_impact": "+1pp margin" },
                { "name": "Expand", "expected_impact": "+4% revenue" }
            ],
            "recommended_scenario": "Expand"
        },
        "agent5": { "key_risks": ["Churn spike", "FX exposure"] },
        "agent6": {
            "kpis": [
                { "metric": "NPS", "baseline": "40", "target": "55", "measurement_frequency": "quarterly" }
            ]
        }
    }))
    .unwrap()
}

#[test]
fn populated_record_has_five_headings_and_four_separators() {
    let doc = assemble_report(&full_session());
    assert_eq!(doc.headings(), HEADINGS);
    assert_eq!(doc.separator_count(), 4);
    assert!(!matches!(doc.blocks().last(), Some(LayoutBlock::Separator)));
}

#[test]
fn empty_record_keeps_every_heading_with_empty_bodies() {
    let doc = assemble_report(&SessionRecord::new());
    assert_eq!(doc.headings(), HEADINGS);
    assert_eq!(doc.separator_count(), 4);

    let sections = doc.sections();
    assert_eq!(sections.len(), 5);
    for section in sections {
        assert!(section.body.is_empty(), "{} has content", section.heading);
    }
}

#[test]
fn separators_only_sit_between_sections() {
    let doc = assemble_report(&full_session());
    let blocks = doc.blocks();
    for (i, block) in blocks.iter().enumerate() {
        if matches!(block, LayoutBlock::Separator) {
            assert!(
                matches!(blocks.get(i + 1), Some(LayoutBlock::Heading { level: 1, .. })),
                "separator at {i} is not followed by a section heading"
            );
        }
    }
}

#[test]
fn missing_sections_match_empty_sections() {
    let missing = SessionRecord::new();
    let empty = [
        keys::PROBLEM_FRAMING,
        keys::PEER_BENCHMARK,
        keys::STRATEGY,
        keys::RISK_SIGNALS,
        keys::GOVERNANCE,
    ]
    .into_iter()
    .fold(SessionRecord::new(), |record, key| {
        record.with_section(key, SectionData::new())
    });

    assert_eq!(assemble_report(&missing), assemble_report(&empty));
}

#[test]
fn concrete_session_renders_expected_bodies() {
    let session = SessionRecord::try_from(json!({
        "agent1": {
            "problem_statement": "Margins declining.",
            "key_metrics": ["EBITDA -3pp"],
            "constraints": ["Budget capped"]
        },
        "agent6": {
            "kpis": [
                { "metric": "NPS", "baseline": "40", "target": "55", "measurement_frequency": "quarterly" }
            ]
        }
    }))
    .unwrap();

    let doc = assemble_report(&session);
    let sections = doc.sections();

    assert_eq!(
        sections[0].body_text(),
        ["Margins declining.", "Key Metrics", "EBITDA -3pp", "Constraints", "Budget capped"]
    );
    for section in &sections[1..4] {
        assert!(section.body.is_empty(), "{} has content", section.heading);
    }
    assert_eq!(sections[4].body_text(), ["NPS: 40 \u{2192} 55 (quarterly)"]);
}

#[test]
fn key_metrics_keep_their_order() {
    let doc = assemble_report(&full_session());
    let problem = doc.sections()[0];
    let bullets: Vec<String> = problem
        .body
        .iter()
        .filter_map(|block| match block {
            LayoutBlock::BulletList(items) => Some(items),
            _ => None,
        })
        .next()
        .unwrap()
        .iter()
        .map(|item| item.plain_text())
        .collect();
    assert_eq!(bullets, ["m1", "m2", "m3"]);
}

#[test]
fn benchmark_ranges_keep_insertion_order() {
    let doc = assemble_report(&full_session());
    assert_eq!(
        doc.sections()[1].body_text(),
        [
            "Peer Group: Mid-market SaaS",
            "Revenue: $1-2M",
            "Growth: 5-10%",
            "Below median on growth",
        ]
    );
}

#[test]
fn scenarios_render_name_then_impact() {
    let doc = assemble_report(&full_session());
    assert_eq!(
        doc.sections()[2].body_text(),
        [
            "Defend\nImpact: +1pp margin",
            "Expand\nImpact: +4% revenue",
            "Recommended: Expand",
        ]
    );
}

#[test]
fn scenario_without_fields_renders_empty_values() {
    let session = SessionRecord::new().with_section(
        keys::STRATEGY,
        SectionData::new().with_records(keys::SCENARIOS, vec![Record::new().with("other", "x")]),
    );
    let doc = assemble_report(&session);
    assert_eq!(doc.sections()[2].body_text(), ["\nImpact: ", "Recommended:"]);
}

#[test]
fn peer_group_label_stays_when_other_benchmark_data_exists() {
    let session = SessionRecord::new().with_section(
        keys::PEER_BENCHMARK,
        SectionData::new().with_map(keys::BENCHMARK_RANGES, [("Revenue", "$1-2M")]),
    );
    let doc = assemble_report(&session);
    assert_eq!(doc.sections()[1].body_text(), ["Peer Group:", "Revenue: $1-2M"]);
}

#[test]
fn recommended_label_stays_when_scenarios_exist() {
    let session = SessionRecord::new().with_section(
        keys::STRATEGY,
        SectionData::new().with_records(
            keys::SCENARIOS,
            vec![Record::new().with("name", "Defend").with("expected_impact", "flat")],
        ),
    );
    let doc = assemble_report(&session);
    assert_eq!(
        doc.sections()[2].body_text(),
        ["Defend\nImpact: flat", "Recommended:"]
    );
}

#[test]
fn problem_sub_labels_stay_when_statement_exists() {
    let session = SessionRecord::new().with_section(
        keys::PROBLEM_FRAMING,
        SectionData::new().with_text(keys::PROBLEM_STATEMENT, "Churn rising."),
    );
    let doc = assemble_report(&session);
    assert_eq!(
        doc.sections()[0].body_text(),
        ["Churn rising.", "Key Metrics", "Constraints"]
    );
}

#[test]
fn kpi_with_missing_fields_is_kept() {
    let session = SessionRecord::new().with_section(
        keys::GOVERNANCE,
        SectionData::new().with_records(keys::KPIS, vec![Record::new().with("metric", "CAC")]),
    );
    let doc = assemble_report(&session);
    assert_eq!(doc.sections()[4].body_text(), ["CAC:  \u{2192}  ()"]);
}

#[test]
fn kpi_metric_is_bold() {
    let doc = assemble_report(&full_session());
    let Some(LayoutBlock::Paragraph(kpi)) = doc.sections()[4].body.first() else {
        panic!("expected a KPI paragraph");
    };
    assert_eq!(kpi.to_string(), "**NPS**: 40 \u{2192} 55 (quarterly)");
}

#[test]
fn assembly_is_deterministic() {
    let session = full_session();
    let first = assemble_report(&session);
    let second = assemble_report(&session);
    assert_eq!(first, second);
    assert_eq!(first.plain_text("---"), second.plain_text("---"));
}

#[test]
fn plain_text_lists_visible_lines() {
    let doc = assemble_report(&SessionRecord::new());
    assert_eq!(
        doc.plain_text("---"),
        [
            PROBLEM_STATEMENT_HEADING,
            "---",
            PEER_BENCHMARKING_HEADING,
            "---",
            STRATEGIC_SCENARIOS_HEADING,
            "---",
            RISKS_HEADING,
            "---",
            KPIS_HEADING,
        ]
        .join("\n")
    );
}
