use tracing::debug;

use crate::error::{SessionError, SubmitError};
use crate::form::store::ValueSnapshot;
use crate::render::widget_model::InputEvent;
use crate::script::script_model::{InteractionScript, ScriptOutcome, ScriptStep};
use crate::session::session::FormSession;

/// Replays an `InteractionScript` against a loaded `FormSession`.
pub struct ScriptRunner;

impl ScriptRunner {
    /// Run every step in order.
    ///
    /// A failed submit is not an error: the script continues and the missing
    /// labels end up in `validation`. Only the last submit counts, so a blocked
    /// submit drops any earlier snapshot. Any other step failure stops the run.
    pub fn run(script: &InteractionScript, session: &mut FormSession) -> ScriptOutcome {
        let mut submit_attempts = 0;
        let mut snapshot = None;
        let mut error = None;
        let mut steps_run = 0;

        for (i, step) in script.steps.iter().enumerate() {
            steps_run = i + 1;
            debug!(step = i, ?step, "running script step");

            if let ScriptStep::Submit = step {
                submit_attempts += 1;
                match session.submit() {
                    Ok(s) => snapshot = Some(s),
                    Err(SubmitError::MissingRequired(_)) => snapshot = None,
                    Err(e) => {
                        error = Some(format!("Step {} failed: {}", i, e));
                        break;
                    }
                }
                continue;
            }

            if let Err(e) = Self::execute_step(step, session) {
                error = Some(format!("Step {} failed: {}", i, e));
                break;
            }
        }

        Self::outcome(script, session, steps_run, submit_attempts, snapshot, error)
    }

    fn outcome(
        script: &InteractionScript,
        session: &FormSession,
        steps_run: usize,
        submit_attempts: usize,
        snapshot: Option<ValueSnapshot>,
        error: Option<String>,
    ) -> ScriptOutcome {
        ScriptOutcome {
            script_name: script.name.clone(),
            steps_run,
            notifications: session.form().map(|f| f.notifications).unwrap_or(0),
            submit_attempts,
            validation: session.validate().unwrap_or_default(),
            snapshot,
            error,
        }
    }

    /// Translate one step into widget events.
    fn execute_step(step: &ScriptStep, session: &mut FormSession) -> Result<(), SessionError> {
        match step {
            ScriptStep::TypeText { field, text } => {
                for c in text.chars() {
                    session.handle(field, InputEvent::Type(c))?;
                }
                Ok(())
            }
            ScriptStep::Backspace { field, count } => {
                for _ in 0..*count {
                    session.handle(field, InputEvent::Backspace)?;
                }
                Ok(())
            }
            ScriptStep::ReplaceText { field, text } => {
                session.handle(field, InputEvent::ReplaceText(text.clone()))
            }
            ScriptStep::PickDatetime { field, at } => {
                session.handle(field, InputEvent::OpenPicker)?;
                session.handle(field, InputEvent::ConfirmPicker(*at))
            }
            ScriptStep::CancelPicker { field } => {
                session.handle(field, InputEvent::OpenPicker)?;
                session.handle(field, InputEvent::CancelPicker)
            }
            ScriptStep::Select { field, value } => {
                session.handle(field, InputEvent::Select(value.clone()))
            }
            ScriptStep::Draw { field, strokes } => {
                for stroke in strokes {
                    let mut points = stroke.iter();
                    let Some(first) = points.next() else {
                        continue;
                    };
                    session.handle(field, InputEvent::PointerDown(*first))?;
                    for p in points {
                        session.handle(field, InputEvent::PointerMove(*p))?;
                    }
                    session.handle(field, InputEvent::PointerUp)?;
                }
                Ok(())
            }
            ScriptStep::InterruptedStroke { field, points } => {
                let mut iter = points.iter();
                if let Some(first) = iter.next() {
                    session.handle(field, InputEvent::PointerDown(*first))?;
                    for p in iter {
                        session.handle(field, InputEvent::PointerMove(*p))?;
                    }
                }
                session.handle(field, InputEvent::PointerCancel)
            }
            ScriptStep::ClearDrawing { field } => session.handle(field, InputEvent::ClearDrawing),
            ScriptStep::Submit => Ok(()),
        }
    }
}
