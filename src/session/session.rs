use sha1::{Digest, Sha1};
use tracing::{debug, info, warn};

use crate::error::{LoadError, SessionError, SubmitError};
use crate::form::store::{ChangeSink, FieldValueStore, ValueSnapshot};
use crate::form::value::FieldValue;
use crate::render::dispatcher::{RenderedWidget, render_form};
use crate::render::widget_model::{InputEvent, WidgetView};
use crate::schema::normalize::load_schema;
use crate::schema::schema_model::FormSchema;
use crate::session::source::XmlSource;
use crate::validate::validator::{ValidationResult, validate};

/// A successfully loaded form with its widgets and collected values.
#[derive(Debug, Clone)]
pub struct LoadedForm {
    pub schema: FormSchema,
    pub widgets: Vec<RenderedWidget>,
    pub store: FieldValueStore,

    /// SHA-1 of the XML text the form was loaded from
    pub fingerprint: String,

    /// Change notifications received since the load
    pub notifications: usize,
}

/// Host-side state: the current form, if any.
///
/// Loading replaces schema, widgets and values together. A failed load leaves
/// the previous form untouched.
#[derive(Debug, Default)]
pub struct FormSession {
    current: Option<LoadedForm>,
}

/// Store wrapper that counts notifications.
struct CountingSink<'a> {
    store: &'a mut FieldValueStore,
    count: &'a mut usize,
}

impl ChangeSink for CountingSink<'_> {
    fn on_change(&mut self, field_id: &str, value: FieldValue) {
        debug!(field = field_id, value = %value, "field changed");
        *self.count += 1;
        self.store.set(field_id, value);
    }
}

impl FormSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a form from XML text.
    pub fn load_xml(&mut self, xml: &str) -> Result<&FormSchema, LoadError> {
        let schema = match load_schema(xml) {
            Ok(schema) => schema,
            Err(e) => {
                warn!(error = %e, "form load rejected");
                return Err(e);
            }
        };

        let fingerprint = text_fingerprint(xml);
        let store = FieldValueStore::for_schema(&schema);
        let widgets = render_form(&schema, &store);

        info!(
            title = %schema.title,
            fields = schema.fields.len(),
            fingerprint = %fingerprint,
            "form loaded"
        );

        let loaded = self.current.insert(LoadedForm {
            schema,
            widgets,
            store,
            fingerprint,
            notifications: 0,
        });
        Ok(&loaded.schema)
    }

    /// Read XML from `source` and load it.
    pub fn load_from(&mut self, source: &dyn XmlSource) -> Result<&FormSchema, LoadError> {
        debug!(source = %source.describe(), "reading form XML");
        let xml = source.read_xml().inspect_err(|e| {
            warn!(source = %source.describe(), error = %e, "could not read form XML");
        })?;
        self.load_xml(&xml)
    }

    /// Discard the current form and all its values.
    pub fn unload(&mut self) {
        self.current = None;
    }

    pub fn form(&self) -> Option<&LoadedForm> {
        self.current.as_ref()
    }

    pub fn schema(&self) -> Option<&FormSchema> {
        self.current.as_ref().map(|f| &f.schema)
    }

    pub fn values(&self) -> Option<&FieldValueStore> {
        self.current.as_ref().map(|f| &f.store)
    }

    pub fn views(&self) -> Vec<WidgetView> {
        self.current
            .as_ref()
            .map(|f| f.widgets.iter().map(RenderedWidget::view).collect())
            .unwrap_or_default()
    }

    /// Deliver one user action to the widget of `field_id`.
    pub fn handle(&mut self, field_id: &str, event: InputEvent) -> Result<(), SessionError> {
        let form = self.current.as_mut().ok_or(SessionError::NoForm)?;

        let index = form
            .widgets
            .iter()
            .position(|w| w.is_interactive() && w.field_id() == field_id)
            .or_else(|| form.widgets.iter().position(|w| w.field_id() == field_id))
            .ok_or_else(|| SessionError::UnknownField(field_id.to_string()))?;

        let mut sink = CountingSink {
            store: &mut form.store,
            count: &mut form.notifications,
        };
        form.widgets[index].handle(event, &mut sink)?;
        Ok(())
    }

    pub fn validate(&self) -> Option<ValidationResult> {
        self.current
            .as_ref()
            .map(|f| validate(&f.schema.fields, &f.store))
    }

    /// Validate and, if every required field has a value, snapshot the answers.
    ///
    /// Values are kept on failure so the user can correct and resubmit.
    pub fn submit(&self) -> Result<ValueSnapshot, SubmitError> {
        let form = self.current.as_ref().ok_or(SubmitError::NoForm)?;
        let result = validate(&form.schema.fields, &form.store);

        if !result.is_valid() {
            info!(missing = ?result.missing, "submission blocked");
            return Err(SubmitError::MissingRequired(result));
        }

        info!(title = %form.schema.title, "form submitted");
        Ok(form.store.snapshot(&form.schema))
    }
}

pub fn text_fingerprint(text: &str) -> String {
    let mut hasher = Sha1::new();
    hasher.update(text.as_bytes());
    format!("{:x}", hasher.finalize())
}
