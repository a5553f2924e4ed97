use atlas_core::models::record::SessionRecord;
use atlas_core::models::sections::{
    Governance, PeerBenchmark, ProblemFraming, RiskSignals, Strategy,
};
use tracing::debug;

use crate::blocks::{LayoutBlock, ReportDocument};
use crate::rich_text::RichText;

pub const PROBLEM_STATEMENT_HEADING: &str = "1. Problem Statement";
pub const PEER_BENCHMARKING_HEADING: &str = "2. Peer Benchmarking";
pub const STRATEGIC_SCENARIOS_HEADING: &str = "3. Strategic Scenarios";
pub const RISKS_HEADING: &str = "4. Risks & Early Signals";
pub const KPIS_HEADING: &str = "5. KPIs & Governance";

/// Gap before a labeled sub-list inside a section, in points.
const SUBSECTION_GAP: f32 = 8.0;

/// Build the block sequence for a session.
///
/// The five sections always appear, in order, separated by exactly four
/// separators. A section with no data is its heading alone. Once a section
/// has any data, its labels ("Key Metrics", "Peer Group:", ...) are always
/// drawn, while empty paragraphs and bullet lists are still left out.
pub fn assemble_report(session: &SessionRecord) -> ReportDocument {
    let mut doc = ReportDocument::new();

    problem_statement(&mut doc, &session.problem_framing());
    doc.push(LayoutBlock::Separator);

    peer_benchmarking(&mut doc, &session.peer_benchmark());
    doc.push(LayoutBlock::Separator);

    strategic_scenarios(&mut doc, &session.strategy());
    doc.push(LayoutBlock::Separator);

    risks(&mut doc, &session.risk_signals());
    doc.push(LayoutBlock::Separator);

    kpis(&mut doc, &session.governance());

    debug!(blocks = doc.blocks().len(), "assembled report");
    doc
}

fn heading(doc: &mut ReportDocument, text: &str) {
    doc.push(LayoutBlock::Heading {
        text: text.to_string(),
        level: 1,
    });
}

fn bullet_list(doc: &mut ReportDocument, items: &[String]) {
    if items.is_empty() {
        return;
    }
    doc.push(LayoutBlock::BulletList(
        items.iter().map(|item| RichText::plain(item.as_str())).collect(),
    ));
}

fn labeled_list(doc: &mut ReportDocument, label: &str, items: &[String]) {
    doc.push(LayoutBlock::Spacer(SUBSECTION_GAP));
    doc.push(LayoutBlock::Paragraph(RichText::new().bold(label)));
    bullet_list(doc, items);
}

/// `**label** value`, with the value left off when empty.
fn labeled_line(label: &str, value: &str) -> LayoutBlock {
    let text = RichText::new().bold(label);
    if value.is_empty() {
        LayoutBlock::Paragraph(text)
    } else {
        LayoutBlock::Paragraph(text.text(format!(" {value}")))
    }
}

fn problem_statement(doc: &mut ReportDocument, problem: &ProblemFraming<'_>) {
    heading(doc, PROBLEM_STATEMENT_HEADING);
    if problem.problem_statement.is_empty()
        && problem.key_metrics.is_empty()
        && problem.constraints.is_empty()
    {
        return;
    }
    if !problem.problem_statement.is_empty() {
        doc.push(LayoutBlock::Paragraph(RichText::plain(problem.problem_statement)));
    }
    labeled_list(doc, "Key Metrics", problem.key_metrics);
    labeled_list(doc, "Constraints", problem.constraints);
}

fn peer_benchmarking(doc: &mut ReportDocument, peers: &PeerBenchmark<'_>) {
    heading(doc, PEER_BENCHMARKING_HEADING);
    if peers.peer_group.is_empty()
        && peers.benchmark_ranges.is_empty()
        && peers.relative_positioning.is_empty()
    {
        return;
    }
    doc.push(labeled_line("Peer Group:", peers.peer_group));
    for (metric, range) in peers.benchmark_ranges {
        doc.push(LayoutBlock::Paragraph(RichText::plain(format!("{metric}: {range}"))));
    }
    bullet_list(doc, peers.relative_positioning);
}

fn strategic_scenarios(doc: &mut ReportDocument, strategy: &Strategy<'_>) {
    heading(doc, STRATEGIC_SCENARIOS_HEADING);
    if strategy.scenarios.is_empty() && strategy.recommended_scenario.is_empty() {
        return;
    }
    for scenario in &strategy.scenarios {
        doc.push(LayoutBlock::Paragraph(
            RichText::new()
                .bold(scenario.name)
                .line_break()
                .text(format!("Impact: {}", scenario.expected_impact)),
        ));
    }
    doc.push(labeled_line("Recommended:", strategy.recommended_scenario));
}

fn risks(doc: &mut ReportDocument, risks: &RiskSignals<'_>) {
    heading(doc, RISKS_HEADING);
    bullet_list(doc, risks.key_risks);
}

fn kpis(doc: &mut ReportDocument, governance: &Governance<'_>) {
    heading(doc, KPIS_HEADING);
    for kpi in &governance.kpis {
        doc.push(LayoutBlock::Paragraph(
            RichText::new().bold(kpi.metric).text(format!(
                ": {} \u{2192} {} ({})",
                kpi.baseline, kpi.target, kpi.measurement_frequency
            )),
        ));
    }
}
