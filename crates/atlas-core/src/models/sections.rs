//! Typed views over the agent sections the report reads.
//!
//! Each view lists its fields and their defaults in one place. Building a
//! view never fails: an absent field is an empty string or an empty slice.

use super::field::Record;
use super::record::SectionData;
use crate::keys;

/// `agent1`: how the engagement framed the problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProblemFraming<'a> {
    pub problem_statement: &'a str,
    pub key_metrics: &'a [String],
    pub constraints: &'a [String],
}

impl<'a> ProblemFraming<'a> {
    pub fn from_section(section: &'a SectionData) -> Self {
        Self {
            problem_statement: section.text(keys::PROBLEM_STATEMENT),
            key_metrics: section.list(keys::KEY_METRICS),
            constraints: section.list(keys::CONSTRAINTS),
        }
    }
}

/// `agent2`: where the company sits among its peers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeerBenchmark<'a> {
    pub peer_group: &'a str,
    /// Metric name to range, in producer order.
    pub benchmark_ranges: &'a [(String, String)],
    pub relative_positioning: &'a [String],
}

impl<'a> PeerBenchmark<'a> {
    pub fn from_section(section: &'a SectionData) -> Self {
        Self {
            peer_group: section.text(keys::PEER_GROUP),
            benchmark_ranges: section.map(keys::BENCHMARK_RANGES),
            relative_positioning: section.list(keys::RELATIVE_POSITIONING),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scenario<'a> {
    pub name: &'a str,
    pub expected_impact: &'a str,
}

impl<'a> Scenario<'a> {
    pub fn from_record(record: &'a Record) -> Self {
        Self {
            name: record.get(keys::SCENARIO_NAME),
            expected_impact: record.get(keys::SCENARIO_EXPECTED_IMPACT),
        }
    }
}

/// `agent3`: candidate strategies and the one the run recommends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Strategy<'a> {
    pub scenarios: Vec<Scenario<'a>>,
    pub recommended_scenario: &'a str,
}

impl<'a> Strategy<'a> {
    pub fn from_section(section: &'a SectionData) -> Self {
        Self {
            scenarios: section
                .records(keys::SCENARIOS)
                .iter()
                .map(Scenario::from_record)
                .collect(),
            recommended_scenario: section.text(keys::RECOMMENDED_SCENARIO),
        }
    }
}

/// `agent5`: risks to watch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RiskSignals<'a> {
    pub key_risks: &'a [String],
}

impl<'a> RiskSignals<'a> {
    pub fn from_section(section: &'a SectionData) -> Self {
        Self {
            key_risks: section.list(keys::KEY_RISKS),
        }
    }
}

/// A KPI with missing fields keeps the record and reads them as `""`, like
/// every other field in the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Kpi<'a> {
    pub metric: &'a str,
    pub baseline: &'a str,
    pub target: &'a str,
    pub measurement_frequency: &'a str,
}

impl<'a> Kpi<'a> {
    pub fn from_record(record: &'a Record) -> Self {
        Self {
            metric: record.get(keys::KPI_METRIC),
            baseline: record.get(keys::KPI_BASELINE),
            target: record.get(keys::KPI_TARGET),
            measurement_frequency: record.get(keys::KPI_MEASUREMENT_FREQUENCY),
        }
    }
}

/// `agent6`: the KPIs governance will track.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Governance<'a> {
    pub kpis: Vec<Kpi<'a>>,
}

impl<'a> Governance<'a> {
    pub fn from_section(section: &'a SectionData) -> Self {
        Self {
            kpis: section
                .records(keys::KPIS)
                .iter()
                .map(Kpi::from_record)
                .collect(),
        }
    }
}
