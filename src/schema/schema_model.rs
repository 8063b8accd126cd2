use serde::{Deserialize, Serialize};

pub const DEFAULT_TITLE: &str = "Form";
pub const DEFAULT_CANVAS_WIDTH: u32 = 300;
pub const DEFAULT_CANVAS_HEIGHT: u32 = 200;

/// A normalized form: title plus fields in document order.
///
/// Built once per successful load and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormSchema {
    pub title: String,
    pub fields: Vec<FieldSpec>,
}

/// One field of the form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub required: bool,
    pub kind: FieldKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FieldKind {
    Text {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        placeholder: Option<String>,
    },
    Datetime,
    Radio {
        options: Vec<RadioOption>,
    },
    Drawing {
        width: u32,
        height: u32,
    },
    /// Unknown `type` tag, kept so the field can be shown as a diagnostic
    Unsupported {
        tag: String,
    },
}

impl FieldKind {
    /// The tag this kind is written as in schema XML.
    pub fn tag(&self) -> &str {
        match self {
            FieldKind::Text { .. } => "text",
            FieldKind::Datetime => "datetime",
            FieldKind::Radio { .. } => "radio",
            FieldKind::Drawing { .. } => "drawing",
            FieldKind::Unsupported { tag } => tag,
        }
    }

    /// Unsupported fields take part in neither value collection nor validation.
    pub fn is_supported(&self) -> bool {
        !matches!(self, FieldKind::Unsupported { .. })
    }
}

/// One choice of a radio field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RadioOption {
    /// Machine-readable answer
    pub value: String,
    /// Human-readable text
    pub display_label: String,
}
