use serde::{Deserialize, Serialize};

use crate::form::store::ValueSnapshot;
use crate::script::script_model::ScriptOutcome;

// ============================================================================
// Submission report shown after a fill run
// ============================================================================

/// Human-facing summary of a scripted fill.
///
/// Built from a `ScriptOutcome` via `from_outcome()`. Consumed by the
/// console reporter, or serialized as JSON/YAML.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionReport {
    /// Title of the form
    pub form_title: String,

    /// Name of the interaction script
    pub script_name: String,

    /// Whether a submit succeeded
    pub submitted: bool,

    /// Labels of required fields still missing a value
    pub missing: Vec<String>,

    /// Submitted answers, in field order
    pub entries: Vec<ReportEntry>,

    pub steps_run: usize,
    pub notifications: usize,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportEntry {
    pub id: String,
    pub label: String,
    pub value: String,
}

impl SubmissionReport {
    pub fn from_outcome(form_title: &str, outcome: &ScriptOutcome) -> Self {
        Self {
            form_title: form_title.to_string(),
            script_name: outcome.script_name.clone(),
            submitted: outcome.submitted(),
            missing: outcome.validation.missing.clone(),
            entries: outcome
                .snapshot
                .as_ref()
                .map(report_entries)
                .unwrap_or_default(),
            steps_run: outcome.steps_run,
            notifications: outcome.notifications,
            error: outcome.error.clone(),
        }
    }

    /// Whether the run finished with an accepted submission and no error.
    pub fn passed(&self) -> bool {
        self.submitted && self.error.is_none()
    }
}

fn report_entries(snapshot: &ValueSnapshot) -> Vec<ReportEntry> {
    snapshot
        .entries
        .iter()
        .map(|e| ReportEntry {
            id: e.id.clone(),
            label: e.label.clone(),
            value: e
                .value
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_else(|| "(none)".to_string()),
        })
        .collect()
}
