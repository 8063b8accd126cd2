use crate::{
    error::LoadError,
    form::store::FieldValueStore,
    schema::{normalize::load_schema, schema_model::FormSchema},
    validate::validator::{ValidationResult, validate},
};

pub mod cli;
pub mod error;
pub mod form;
pub mod render;
pub mod report;
pub mod schema;
pub mod script;
pub mod session;
pub mod validate;
pub mod xml;

/// Parse and normalize form XML.
///
/// Shorthand for `xml::parser::parse` followed by `schema::normalize::normalize`.
pub fn parse_form(xml: &str) -> Result<FormSchema, LoadError> {
    load_schema(xml)
}

/// Validate the values collected for a schema.
pub fn check_required(schema: &FormSchema, values: &FieldValueStore) -> ValidationResult {
    validate(&schema.fields, values)
}
