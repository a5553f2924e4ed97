use std::collections::BTreeMap;

use serde_json::Value;

/// One value stored under a field name in a section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    List(Vec<String>),
    /// Key/value pairs in the order the producer wrote them.
    Map(Vec<(String, String)>),
    Records(Vec<Record>),
}

/// A structured entry inside a list, e.g. one scenario or one KPI.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    fields: BTreeMap<String, String>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    /// Field text, or `""` when the record has no such field.
    pub fn get(&self, field: &str) -> &str {
        self.fields.get(field).map(String::as_str).unwrap_or("")
    }

    fn from_json(map: &serde_json::Map<String, Value>) -> Self {
        let fields = map
            .iter()
            .filter_map(|(k, v)| scalar_text(v).map(|text| (k.clone(), text)))
            .collect();
        Self { fields }
    }

    fn to_json(&self) -> Value {
        Value::Object(
            self.fields
                .iter()
                .map(|(k, v)| (k.clone(), Value::String(v.clone())))
                .collect(),
        )
    }
}

impl FieldValue {
    /// Convert a JSON value into the closest field shape.
    ///
    /// Numbers and booleans become text. Arrays of objects become records,
    /// any other array keeps its scalar elements. Objects keep their scalar
    /// entries in document order. `null` yields `None`, as if the field were
    /// absent.
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Null => None,
            Value::String(_) | Value::Number(_) | Value::Bool(_) => {
                scalar_text(value).map(FieldValue::Text)
            }
            Value::Array(items) => {
                if !items.is_empty() && items.iter().all(Value::is_object) {
                    Some(FieldValue::Records(
                        items
                            .iter()
                            .filter_map(Value::as_object)
                            .map(Record::from_json)
                            .collect(),
                    ))
                } else {
                    Some(FieldValue::List(items.iter().filter_map(scalar_text).collect()))
                }
            }
            Value::Object(map) => Some(FieldValue::Map(
                map.iter()
                    .filter_map(|(k, v)| scalar_text(v).map(|text| (k.clone(), text)))
                    .collect(),
            )),
        }
    }

    pub fn to_json(&self) -> Value {
        match self {
            FieldValue::Text(text) => Value::String(text.clone()),
            FieldValue::List(items) => {
                Value::Array(items.iter().cloned().map(Value::String).collect())
            }
            FieldValue::Map(pairs) => Value::Object(
                pairs
                    .iter()
                    .map(|(k, v)| (k.clone(), Value::String(v.clone())))
                    .collect(),
            ),
            FieldValue::Records(records) => {
                Value::Array(records.iter().map(Record::to_json).collect())
            }
        }
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
