use thiserror::Error;

use crate::validate::validator::ValidationResult;

/// Malformed XML markup. No schema is produced when this is returned.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Tokenizer-level syntax error (bad tag, mismatched end tag, bad entity)
    #[error("Invalid XML format at byte {position}: {message}")]
    Syntax { position: usize, message: String },

    /// Input ended while elements were still open
    #[error("Invalid XML format: unclosed element <{tag}>")]
    Unclosed { tag: String },

    /// Malformed attribute on an element
    #[error("Invalid XML format: bad attribute on <{tag}>: {message}")]
    Attribute { tag: String, message: String },

    /// Input contains no root element at all
    #[error("Invalid XML format: document has no root element")]
    Empty,
}

/// Well-formed XML that does not describe a usable form.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SchemaError {
    #[error("Invalid form structure: missing <form> element")]
    MissingForm,

    #[error("Invalid form structure: <form> has no <field> elements")]
    MissingFields,

    #[error("Invalid form structure: duplicate field id '{0}'")]
    DuplicateFieldId(String),
}

/// Any failure that terminates a load attempt.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Schema(#[from] SchemaError),
}

/// An input event a widget cannot apply.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WidgetError {
    #[error("{kind} field '{field}' does not accept {event} events")]
    UnsupportedEvent {
        field: String,
        kind: &'static str,
        event: &'static str,
    },

    #[error("date/time picker for '{0}' is not open")]
    PickerClosed(String),

    #[error("field '{field}' has no option '{option}'")]
    UnknownOption { field: String, option: String },
}

/// Failure obtaining raw XML text from a source.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Please enter XML content")]
    EmptyInput,

    #[error("Failed to read the XML file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("no form is loaded")]
    NoForm,

    #[error("form has no field '{0}'")]
    UnknownField(String),

    #[error(transparent)]
    Widget(#[from] WidgetError),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("no form is loaded")]
    NoForm,

    /// Soft failure: collected values are kept so the user can resubmit.
    #[error("Please fill in the following required fields: {}", .0.missing.join(", "))]
    MissingRequired(ValidationResult),
}
