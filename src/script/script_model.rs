use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::form::store::ValueSnapshot;
use crate::form::value::Stroke;
use crate::validate::validator::ValidationResult;

/// A recorded sequence of user actions, replayed against a loaded form.
/// Deserialized from YAML or JSON.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InteractionScript {
    /// Human-readable name
    pub name: String,

    /// Ordered list of steps
    pub steps: Vec<ScriptStep>,
}

/// A single scripted action.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ScriptStep {
    /// Type text one keystroke at a time
    TypeText { field: String, text: String },

    /// Delete characters from the end of a text field
    Backspace {
        field: String,
        #[serde(default = "default_one")]
        count: usize,
    },

    /// Replace the whole text (paste)
    ReplaceText { field: String, text: String },

    /// Open the picker and confirm a date/time
    PickDatetime { field: String, at: NaiveDateTime },

    /// Open the picker and dismiss it
    CancelPicker { field: String },

    /// Tap a radio option by value
    Select { field: String, value: String },

    /// Draw complete strokes: first point is pointer-down, the rest are moves
    Draw { field: String, strokes: Vec<Stroke> },

    /// Start a stroke and lose pointer capture before lifting
    InterruptedStroke { field: String, points: Stroke },

    /// Press the drawing's clear button
    ClearDrawing { field: String },

    /// Attempt to submit the form
    Submit,
}

fn default_one() -> usize {
    1
}

/// Result of replaying a script.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScriptOutcome {
    pub script_name: String,

    /// Number of steps executed (including a failing one)
    pub steps_run: usize,

    /// Change notifications delivered to the value store
    pub notifications: usize,

    /// Submit steps executed
    pub submit_attempts: usize,

    /// Validation state after the last step
    pub validation: ValidationResult,

    /// Answers of the last submit, if it was accepted
    pub snapshot: Option<ValueSnapshot>,

    /// Error that stopped the script early
    pub error: Option<String>,
}

impl ScriptOutcome {
    pub fn submitted(&self) -> bool {
        self.snapshot.is_some()
    }
}
