use serde::{Deserialize, Serialize};

use crate::form::store::FieldValueStore;
use crate::schema::schema_model::FieldSpec;

/// Labels of required fields that are still missing a value, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub missing: Vec<String>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Presence check over required fields.
///
/// A field is missing when its value is absent or empty for its kind; an
/// emptied drawing counts as missing just like an empty text.
pub fn validate(fields: &[FieldSpec], values: &FieldValueStore) -> ValidationResult {
    let missing = fields
        .iter()
        .filter(|f| f.required && f.kind.is_supported())
        .filter(|f| !values.has_value(&f.id))
        .map(|f| f.label.clone())
        .collect();

    ValidationResult { missing }
}
