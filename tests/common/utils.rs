use xml_form_renderer::{
    form::value::FieldValue,
    schema::{normalize::load_schema, sample::SAMPLE_XML, schema_model::FormSchema},
    session::session::FormSession,
};

/// Wrap field elements in a `<form>` root.
pub fn form_xml(title: &str, fields: &str) -> String {
    format!(r#"<form title="{}">{}</form>"#, title, fields)
}

pub fn sample_schema() -> FormSchema {
    load_schema(SAMPLE_XML).expect("sample XML must load")
}

pub fn sample_session() -> FormSession {
    let mut session = FormSession::new();
    session.load_xml(SAMPLE_XML).expect("sample XML must load");
    session
}

/// Change sink that records every notification in order.
#[derive(Debug, Default)]
pub struct Recorder {
    pub changes: Vec<(String, FieldValue)>,
}

impl Recorder {
    pub fn sink(&mut self) -> impl FnMut(&str, FieldValue) + '_ {
        move |id: &str, value: FieldValue| self.changes.push((id.to_string(), value))
    }

    pub fn last(&self) -> Option<&FieldValue> {
        self.changes.last().map(|(_, v)| v)
    }
}
