//! Section and field key conventions.
//!
//! These are the names the upstream agent pipeline writes into a session
//! record. `agent4` exists upstream but nothing in the report reads it.

pub const PROBLEM_FRAMING: &str = "agent1";
pub const PEER_BENCHMARK: &str = "agent2";
pub const STRATEGY: &str = "agent3";
pub const RISK_SIGNALS: &str = "agent5";
pub const GOVERNANCE: &str = "agent6";

pub const PROBLEM_STATEMENT: &str = "problem_statement";
pub const KEY_METRICS: &str = "key_metrics";
pub const CONSTRAINTS: &str = "constraints";

pub const PEER_GROUP: &str = "peer_group";
pub const BENCHMARK_RANGES: &str = "benchmark_ranges";
pub const RELATIVE_POSITIONING: &str = "relative_positioning";

pub const SCENARIOS: &str = "scenarios";
pub const SCENARIO_NAME: &str = "name";
pub const SCENARIO_EXPECTED_IMPACT: &str = "expected_impact";
pub const RECOMMENDED_SCENARIO: &str = "recommended_scenario";

pub const KEY_RISKS: &str = "key_risks";

pub const KPIS: &str = "kpis";
pub const KPI_METRIC: &str = "metric";
pub const KPI_BASELINE: &str = "baseline";
pub const KPI_TARGET: &str = "target";
pub const KPI_MEASUREMENT_FREQUENCY: &str = "measurement_frequency";
