use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::form::value::FieldValue;
use crate::schema::schema_model::{FieldKind, FormSchema};

/// Receiver of change notifications from a rendered widget.
///
/// Every value update of a field goes through exactly one of these.
pub trait ChangeSink {
    fn on_change(&mut self, field_id: &str, value: FieldValue);
}

impl<F> ChangeSink for F
where
    F: FnMut(&str, FieldValue),
{
    fn on_change(&mut self, field_id: &str, value: FieldValue) {
        self(field_id, value)
    }
}

/// Live mapping from field id to the current value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldValueStore {
    values: HashMap<String, FieldValue>,
}

impl FieldValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed initial values: empty text and empty drawings. Date/time and
    /// radio fields stay absent until the first selection.
    pub fn for_schema(schema: &FormSchema) -> Self {
        let mut store = Self::new();
        for field in &schema.fields {
            let initial = match &field.kind {
                FieldKind::Text { .. } => Some(FieldValue::Text(String::new())),
                FieldKind::Drawing { .. } => Some(FieldValue::Drawing(Vec::new())),
                FieldKind::Datetime | FieldKind::Radio { .. } | FieldKind::Unsupported { .. } => {
                    None
                }
            };
            if let Some(value) = initial {
                store.values.insert(field.id.clone(), value);
            }
        }
        store
    }

    pub fn get(&self, field_id: &str) -> Option<&FieldValue> {
        self.values.get(field_id)
    }

    /// Replace the value of a field.
    pub fn set(&mut self, field_id: &str, value: FieldValue) {
        self.values.insert(field_id.to_string(), value);
    }

    /// Whether the field has a non-empty value.
    pub fn has_value(&self, field_id: &str) -> bool {
        self.get(field_id).is_some_and(|v| !v.is_empty())
    }

    /// Current values in schema order, unsupported fields excluded.
    pub fn snapshot(&self, schema: &FormSchema) -> ValueSnapshot {
        let entries = schema
            .fields
            .iter()
            .filter(|f| f.kind.is_supported())
            .map(|f| SnapshotEntry {
                id: f.id.clone(),
                label: f.label.clone(),
                value: self.get(&f.id).cloned(),
            })
            .collect();

        ValueSnapshot {
            title: schema.title.clone(),
            entries,
        }
    }
}

impl ChangeSink for FieldValueStore {
    fn on_change(&mut self, field_id: &str, value: FieldValue) {
        self.set(field_id, value);
    }
}

/// Submitted answers, ready for display or serialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueSnapshot {
    pub title: String,
    pub entries: Vec<SnapshotEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotEntry {
    pub id: String,
    pub label: String,
    pub value: Option<FieldValue>,
}

impl ValueSnapshot {
    pub fn get(&self, field_id: &str) -> Option<&FieldValue> {
        self.entries
            .iter()
            .find(|e| e.id == field_id)
            .and_then(|e| e.value.as_ref())
    }

    /// Flat `{ id: value }` object, values rendered without the kind tag.
    pub fn to_json(&self) -> serde_json::Value {
        let map = self
            .entries
            .iter()
            .map(|e| {
                let value = match &e.value {
                    None => serde_json::Value::Null,
                    Some(FieldValue::Text(s)) | Some(FieldValue::Choice(s)) => {
                        serde_json::Value::String(s.clone())
                    }
                    Some(FieldValue::DateTime(at)) => {
                        serde_json::Value::String(at.format("%Y-%m-%dT%H:%M:%S").to_string())
                    }
                    Some(FieldValue::Drawing(strokes)) => {
                        serde_json::to_value(strokes).unwrap_or(serde_json::Value::Null)
                    }
                };
                (e.id.clone(), value)
            })
            .collect::<serde_json::Map<_, _>>();
        serde_json::Value::Object(map)
    }
}
