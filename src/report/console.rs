use crate::render::widget_model::{ViewBody, WidgetView};
use crate::report::report_model::SubmissionReport;

// ============================================================================
// Console reporter: formatted terminal output
// ============================================================================

/// Format a submission report for terminal output.
///
/// Produces output like:
/// ```text
/// === Customer Feedback Form (script: quick fill) ===
///
/// ✓ SUBMITTED  (12 steps, 40 changes)
///     name: Jane Doe
///     visitDate: 2024-05-01 10:30
/// ```
pub fn format_console_report(report: &SubmissionReport) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "=== {} (script: {}) ===\n\n",
        report.form_title, report.script_name
    ));

    let marker = if report.submitted {
        "\u{2713} SUBMITTED"
    } else {
        "\u{2717} NOT SUBMITTED"
    };
    out.push_str(&format!(
        "{}  ({} steps, {} changes)\n",
        marker, report.steps_run, report.notifications
    ));

    if let Some(ref error) = report.error {
        out.push_str(&format!("    [ERROR] {}\n", error));
    }

    if !report.missing.is_empty() {
        out.push_str(&format!(
            "    [MISSING] Please fill in the following required fields: {}\n",
            report.missing.join(", ")
        ));
    }

    for entry in &report.entries {
        out.push_str(&format!("    {}: {}\n", entry.id, entry.value));
    }

    out
}

/// Format rendered widgets as a plain-text form.
pub fn format_form(title: &str, views: &[WidgetView]) -> String {
    let mut out = format!("=== {} ===\n", title);

    for view in views {
        let marker = if view.required { " *" } else { "" };
        out.push_str(&format!("\n{}{}\n", view.label, marker));

        match &view.body {
            ViewBody::TextInput { value, placeholder } => {
                if value.is_empty() {
                    out.push_str(&format!("  [ {} ]\n", placeholder));
                } else {
                    out.push_str(&format!("  [ {} ]\n", value));
                }
            }
            ViewBody::DateTimeButton { caption, .. } => {
                out.push_str(&format!("  < {} >\n", caption));
            }
            ViewBody::RadioGroup { options } => {
                for option in options {
                    let dot = if option.checked { "(o)" } else { "( )" };
                    out.push_str(&format!("  {} {}\n", dot, option.display_label));
                }
            }
            ViewBody::Canvas {
                width,
                height,
                strokes,
                ..
            } => {
                out.push_str(&format!(
                    "  [canvas {}x{}, {} strokes] [Clear Drawing]\n",
                    width,
                    height,
                    strokes.len()
                ));
            }
            ViewBody::Diagnostic { message } => {
                out.push_str(&format!("  ! {}\n", message));
            }
        }
    }

    out
}
