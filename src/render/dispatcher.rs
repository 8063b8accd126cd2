use crate::error::WidgetError;
use crate::form::store::{ChangeSink, FieldValueStore};
use crate::form::value::FieldValue;
use crate::render::widget::{
    DateTimeWidget, DrawingWidget, RadioWidget, StrokeState, TextWidget, UnsupportedWidget,
    WidgetHeader,
};
use crate::render::widget_model::{InputEvent, WidgetView};
use crate::schema::schema_model::{FieldKind, FieldSpec, FormSchema};

/// A live widget for one field, selected strictly by the field's kind.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderedWidget {
    Text(TextWidget),
    DateTime(DateTimeWidget),
    Radio(RadioWidget),
    Drawing(DrawingWidget),
    Unsupported(UnsupportedWidget),
}

/// Instantiate the widget for `spec`, restoring `current` if it matches the kind.
///
/// Never fails: malformed parameters were already normalized to defaults.
pub fn render(spec: &FieldSpec, current: Option<&FieldValue>) -> RenderedWidget {
    let header = WidgetHeader {
        id: spec.id.clone(),
        label: spec.label.clone(),
        required: spec.required,
    };

    match &spec.kind {
        FieldKind::Text { placeholder } => RenderedWidget::Text(TextWidget {
            header,
            placeholder: placeholder.clone(),
            text: match current {
                Some(FieldValue::Text(text)) => text.clone(),
                _ => String::new(),
            },
        }),
        FieldKind::Datetime => RenderedWidget::DateTime(DateTimeWidget {
            header,
            picker_open: false,
            selected: match current {
                Some(FieldValue::DateTime(at)) => Some(*at),
                _ => None,
            },
        }),
        FieldKind::Radio { options } => RenderedWidget::Radio(RadioWidget {
            header,
            options: options.clone(),
            selected: match current {
                Some(FieldValue::Choice(value)) => Some(value.clone()),
                _ => None,
            },
        }),
        FieldKind::Drawing { width, height } => RenderedWidget::Drawing(DrawingWidget {
            header,
            width: *width,
            height: *height,
            strokes: match current {
                Some(FieldValue::Drawing(strokes)) => strokes.clone(),
                _ => Vec::new(),
            },
            state: StrokeState::Idle,
        }),
        FieldKind::Unsupported { tag } => RenderedWidget::Unsupported(UnsupportedWidget {
            header,
            tag: tag.clone(),
        }),
    }
}

/// Render every field of a schema, in order.
pub fn render_form(schema: &FormSchema, store: &FieldValueStore) -> Vec<RenderedWidget> {
    schema
        .fields
        .iter()
        .map(|field| render(field, store.get(&field.id)))
        .collect()
}

impl RenderedWidget {
    pub fn field_id(&self) -> &str {
        &self.header().id
    }

    pub fn header(&self) -> &WidgetHeader {
        match self {
            RenderedWidget::Text(w) => &w.header,
            RenderedWidget::DateTime(w) => &w.header,
            RenderedWidget::Radio(w) => &w.header,
            RenderedWidget::Drawing(w) => &w.header,
            RenderedWidget::Unsupported(w) => &w.header,
        }
    }

    /// Whether the widget reports values at all.
    pub fn is_interactive(&self) -> bool {
        !matches!(self, RenderedWidget::Unsupported(_))
    }

    /// Apply one user action; value changes are reported through `sink`.
    pub fn handle<S: ChangeSink + ?Sized>(
        &mut self,
        event: InputEvent,
        sink: &mut S,
    ) -> Result<(), WidgetError> {
        match self {
            RenderedWidget::Text(w) => w.handle(event, sink),
            RenderedWidget::DateTime(w) => w.handle(event, sink),
            RenderedWidget::Radio(w) => w.handle(event, sink),
            RenderedWidget::Drawing(w) => w.handle(event, sink),
            RenderedWidget::Unsupported(w) => Err(WidgetError::UnsupportedEvent {
                field: w.header.id.clone(),
                kind: "unsupported",
                event: event.name(),
            }),
        }
    }

    pub fn view(&self) -> WidgetView {
        match self {
            RenderedWidget::Text(w) => w.view(),
            RenderedWidget::DateTime(w) => w.view(),
            RenderedWidget::Radio(w) => w.view(),
            RenderedWidget::Drawing(w) => w.view(),
            RenderedWidget::Unsupported(w) => w.view(),
        }
    }
}
