use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use super::field::{FieldValue, Record};
use super::sections::{Governance, PeerBenchmark, ProblemFraming, RiskSignals, Strategy};
use crate::error::CoreError;
use crate::keys;

static EMPTY_SECTION: SectionData = SectionData {
    fields: BTreeMap::new(),
};

/// The fields one agent produced. Every accessor falls back to an empty
/// value when the field is absent or holds a different shape.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionData {
    fields: BTreeMap<String, FieldValue>,
}

impl SectionData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, field: impl Into<String>, value: FieldValue) -> Self {
        self.fields.insert(field.into(), value);
        self
    }

    pub fn with_text(self, field: impl Into<String>, text: impl Into<String>) -> Self {
        self.with(field, FieldValue::Text(text.into()))
    }

    pub fn with_list<I, S>(self, field: impl Into<String>, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.with(field, FieldValue::List(items.into_iter().map(Into::into).collect()))
    }

    pub fn with_map<I, K, V>(self, field: impl Into<String>, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.with(
            field,
            FieldValue::Map(
                pairs
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        )
    }

    pub fn with_records(self, field: impl Into<String>, records: Vec<Record>) -> Self {
        self.with(field, FieldValue::Records(records))
    }

    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.fields.get(field)
    }

    pub fn text(&self, field: &str) -> &str {
        match self.fields.get(field) {
            Some(FieldValue::Text(text)) => text,
            _ => "",
        }
    }

    pub fn list(&self, field: &str) -> &[String] {
        match self.fields.get(field) {
            Some(FieldValue::List(items)) => items,
            _ => &[],
        }
    }

    pub fn map(&self, field: &str) -> &[(String, String)] {
        match self.fields.get(field) {
            Some(FieldValue::Map(pairs)) => pairs,
            _ => &[],
        }
    }

    pub fn records(&self, field: &str) -> &[Record] {
        match self.fields.get(field) {
            Some(FieldValue::Records(records)) => records,
            _ => &[],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    fn from_json(map: &serde_json::Map<String, Value>) -> Self {
        let fields = map
            .iter()
            .filter_map(|(k, v)| FieldValue::from_json(v).map(|value| (k.clone(), value)))
            .collect();
        Self { fields }
    }
}

/// One consulting run: agent sections keyed by name (`agent1`..`agent6`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Value", into = "Value")]
pub struct SessionRecord {
    sections: BTreeMap<String, SectionData>,
}

impl SessionRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_section(mut self, key: impl Into<String>, section: SectionData) -> Self {
        self.sections.insert(key.into(), section);
        self
    }

    /// The section stored under `key`, or an empty section.
    pub fn section(&self, key: &str) -> &SectionData {
        self.sections.get(key).unwrap_or(&EMPTY_SECTION)
    }

    pub fn contains_section(&self, key: &str) -> bool {
        self.sections.contains_key(key)
    }

    pub fn problem_framing(&self) -> ProblemFraming<'_> {
        ProblemFraming::from_section(self.section(keys::PROBLEM_FRAMING))
    }

    pub fn peer_benchmark(&self) -> PeerBenchmark<'_> {
        PeerBenchmark::from_section(self.section(keys::PEER_BENCHMARK))
    }

    pub fn strategy(&self) -> Strategy<'_> {
        Strategy::from_section(self.section(keys::STRATEGY))
    }

    pub fn risk_signals(&self) -> RiskSignals<'_> {
        RiskSignals::from_section(self.section(keys::RISK_SIGNALS))
    }

    pub fn governance(&self) -> Governance<'_> {
        Governance::from_section(self.section(keys::GOVERNANCE))
    }

    pub fn from_json_str(json: &str) -> Result<Self, CoreError> {
        let value: Value = serde_json::from_str(json)?;
        Self::try_from(value)
    }

    /// Read a record the agent pipeline wrote to disk.
    pub fn load(path: &Path) -> Result<Self, CoreError> {
        let contents = std::fs::read_to_string(path).map_err(|source| CoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&contents)
    }
}

impl TryFrom<Value> for SessionRecord {
    type Error = CoreError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let Value::Object(root) = value else {
            return Err(CoreError::InvalidRecord(
                "session record must be a JSON object".to_string(),
            ));
        };

        let mut sections = BTreeMap::new();
        for (key, section) in &root {
            match section {
                Value::Object(fields) => {
                    sections.insert(key.clone(), SectionData::from_json(fields));
                }
                Value::Null => {}
                other => {
                    warn!(section = %key, kind = json_kind(other), "ignoring non-object section");
                }
            }
        }
        Ok(Self { sections })
    }
}

impl From<SessionRecord> for Value {
    fn from(record: SessionRecord) -> Self {
        Value::Object(
            record
                .sections
                .into_iter()
                .map(|(key, section)| {
                    let fields = section
                        .fields
                        .iter()
                        .map(|(k, v)| (k.clone(), v.to_json()))
                        .collect();
                    (key, Value::Object(fields))
                })
                .collect(),
        )
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
