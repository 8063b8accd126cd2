use clap::{Args, Parser, Subcommand};
use serde::{Deserialize, Serialize};

// ============================================================================
// CLI Argument Parsing (clap derive)
// ============================================================================

#[derive(Parser, Debug)]
#[command(
    name = "xml-form-renderer",
    version,
    about = "Render and fill dynamic forms described by XML"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to config file (default: xml-form-renderer.yaml in current dir)
    #[arg(long, global = true)]
    pub config: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load a form and print its rendered fields
    Show {
        #[command(flatten)]
        source: SourceArgs,

        /// Output format: console, json, yaml
        #[arg(long)]
        format: Option<String>,
    },

    /// Load a form, replay an interaction script and report the submission
    Fill {
        #[command(flatten)]
        source: SourceArgs,

        /// Path to the interaction script (YAML or JSON)
        #[arg(long)]
        script: String,

        /// Output format: console, json, yaml, values
        #[arg(long)]
        format: Option<String>,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Print the built-in sample form XML
    Sample,
}

/// Where the form XML comes from. Exactly one must be given.
#[derive(Args, Debug, Clone, PartialEq)]
#[group(required = true, multiple = false)]
pub struct SourceArgs {
    /// Read the form from an XML file
    #[arg(long)]
    pub file: Option<String>,

    /// Use the built-in sample form
    #[arg(long)]
    pub sample: bool,

    /// Read pasted XML from standard input
    #[arg(long)]
    pub stdin: bool,
}

// ============================================================================
// Config File Model (optional YAML)
// ============================================================================

/// Optional YAML config file: `xml-form-renderer.yaml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub report: ReportConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    #[serde(default = "default_console")]
    pub format: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            format: "console".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LogConfig {
    /// tracing filter directive, e.g. `xml_form_renderer=debug`
    pub filter: Option<String>,
}

fn default_console() -> String { "console".to_string() }

// ============================================================================
// Config File Loading
// ============================================================================

/// Load config from a YAML file. Returns defaults if file is missing or malformed.
pub fn load_config(path: Option<&str>) -> AppConfig {
    let config_path = path.unwrap_or("xml-form-renderer.yaml");
    match std::fs::read_to_string(config_path) {
        Ok(content) => serde_yaml::from_str(&content).unwrap_or_default(),
        Err(_) => AppConfig::default(),
    }
}

// ============================================================================
// Resolution (CLI > config > defaults)
// ============================================================================

pub fn resolve_format(cli: Option<&str>, config: &AppConfig) -> String {
    cli.unwrap_or(&config.report.format).to_string()
}

/// Log filter: `-v` flags win, then the config file, then `warn`.
///
/// `RUST_LOG` is honored separately by the subscriber setup.
pub fn log_filter(verbose: u8, config: &AppConfig) -> String {
    match verbose {
        0 => config
            .log
            .filter
            .clone()
            .unwrap_or_else(|| "warn".to_string()),
        1 => "info".to_string(),
        2 => "debug".to_string(),
        _ => "trace".to_string(),
    }
}
