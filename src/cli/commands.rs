use std::io::Read;

use crate::cli::config::SourceArgs;
use crate::form::store::ValueSnapshot;
use crate::report::console::{format_console_report, format_form};
use crate::report::report_model::SubmissionReport;
use crate::schema::sample::SAMPLE_XML;
use crate::script::runner::ScriptRunner;
use crate::script::script_model::{InteractionScript, ScriptOutcome};
use crate::session::session::FormSession;
use crate::session::source::{FileSource, PasteSource, SampleSource, XmlSource};

// ============================================================================
// show subcommand
// ============================================================================

pub fn cmd_show(source: &SourceArgs, format: &str) -> Result<(), Box<dyn std::error::Error>> {
    let source = build_source(source)?;
    let mut session = FormSession::new();
    let title = session.load_from(source.as_ref())?.title.clone();
    let views = session.views();

    let output = match format {
        "json" => serde_json::to_string_pretty(&views)? + "\n",
        "yaml" => serde_yaml::to_string(&views)?,
        _ => format_form(&title, &views),
    };
    print!("{}", output);
    Ok(())
}

// ============================================================================
// fill subcommand
// ============================================================================

/// Run an interaction script and return whether the form was submitted.
pub fn cmd_fill(
    source: &SourceArgs,
    script_path: &str,
    format: &str,
    output: Option<&str>,
    verbose: u8,
) -> Result<bool, Box<dyn std::error::Error>> {
    let script = load_script(script_path)?;
    let source = build_source(source)?;

    let mut session = FormSession::new();
    let title = session.load_from(source.as_ref())?.title.clone();

    if verbose > 0 {
        eprintln!("Running script '{}' ({} steps)...", script.name, script.steps.len());
    }

    let outcome = ScriptRunner::run(&script, &mut session);
    let report = SubmissionReport::from_outcome(&title, &outcome);
    let passed = report.passed();
    let output_content = format_fill_output(&report, &outcome, format)?;

    match output {
        Some(path) => std::fs::write(path, &output_content)?,
        None => print!("{}", output_content),
    }

    Ok(passed)
}

/// Render the result of a fill run.
///
/// `values` prints only the submitted answers as a flat `{ id: value }` JSON
/// object, or `null` when the last submit was not accepted.
pub fn format_fill_output(
    report: &SubmissionReport,
    outcome: &ScriptOutcome,
    format: &str,
) -> Result<String, Box<dyn std::error::Error>> {
    let output = match format {
        "json" => serde_json::to_string_pretty(report)? + "\n",
        "yaml" => serde_yaml::to_string(report)?,
        "values" => {
            let values = outcome
                .snapshot
                .as_ref()
                .map(ValueSnapshot::to_json)
                .unwrap_or(serde_json::Value::Null);
            serde_json::to_string_pretty(&values)? + "\n"
        }
        _ => format_console_report(report),
    };
    Ok(output)
}

/// Load an interaction script; `.json` files are read as JSON, anything else as YAML.
pub fn load_script(path: &str) -> Result<InteractionScript, Box<dyn std::error::Error>> {
    let content = std::fs::read_to_string(path)?;
    let script = if path.ends_with(".json") {
        serde_json::from_str(&content)?
    } else {
        serde_yaml::from_str(&content)?
    };
    Ok(script)
}

// ============================================================================
// sample subcommand
// ============================================================================

pub fn cmd_sample() {
    println!("{}", SAMPLE_XML);
}

// ============================================================================
// Helpers
// ============================================================================

/// Build the XML source selected on the command line.
pub fn build_source(args: &SourceArgs) -> Result<Box<dyn XmlSource>, Box<dyn std::error::Error>> {
    if let Some(path) = &args.file {
        return Ok(Box::new(FileSource::new(path)));
    }
    if args.stdin {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        return Ok(Box::new(PasteSource::new(text)));
    }
    Ok(Box::new(SampleSource))
}
