use chrono::NaiveDateTime;
use tracing::debug;

use crate::error::WidgetError;
use crate::form::store::ChangeSink;
use crate::form::value::{DATETIME_DISPLAY_FORMAT, FieldValue, Point, Stroke};
use crate::render::widget_model::{InputEvent, OptionView, ViewBody, WidgetView};
use crate::schema::schema_model::RadioOption;

/// Fields shared by every widget.
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetHeader {
    pub id: String,
    pub label: String,
    pub required: bool,
}

impl WidgetHeader {
    fn view(&self, body: ViewBody) -> WidgetView {
        WidgetView {
            id: self.id.clone(),
            label: self.label.clone(),
            required: self.required,
            body,
        }
    }

    fn unsupported(&self, kind: &'static str, event: &InputEvent) -> WidgetError {
        WidgetError::UnsupportedEvent {
            field: self.id.clone(),
            kind,
            event: event.name(),
        }
    }
}

// ============================================================================
// Text
// ============================================================================

/// Free-form text. Every edit reports the full string, no debouncing.
#[derive(Debug, Clone, PartialEq)]
pub struct TextWidget {
    pub header: WidgetHeader,
    pub placeholder: Option<String>,
    pub text: String,
}

impl TextWidget {
    pub fn handle<S: ChangeSink + ?Sized>(
        &mut self,
        event: InputEvent,
        sink: &mut S,
    ) -> Result<(), WidgetError> {
        match event {
            InputEvent::Type(c) => self.text.push(c),
            InputEvent::Backspace => {
                self.text.pop();
            }
            InputEvent::ReplaceText(text) => self.text = text,
            other => return Err(self.header.unsupported("text", &other)),
        }
        sink.on_change(&self.header.id, FieldValue::Text(self.text.clone()));
        Ok(())
    }

    pub fn view(&self) -> WidgetView {
        self.header.view(ViewBody::TextInput {
            value: self.text.clone(),
            placeholder: self.placeholder.clone().unwrap_or_default(),
        })
    }
}

// ============================================================================
// Date/time
// ============================================================================

/// Modal date-and-time selector holding at most one confirmed value.
#[derive(Debug, Clone, PartialEq)]
pub struct DateTimeWidget {
    pub header: WidgetHeader,
    pub picker_open: bool,
    pub selected: Option<NaiveDateTime>,
}

impl DateTimeWidget {
    pub fn handle<S: ChangeSink + ?Sized>(
        &mut self,
        event: InputEvent,
        sink: &mut S,
    ) -> Result<(), WidgetError> {
        match event {
            InputEvent::OpenPicker => self.picker_open = true,
            InputEvent::CancelPicker => self.picker_open = false,
            InputEvent::ConfirmPicker(at) => {
                if !self.picker_open {
                    return Err(WidgetError::PickerClosed(self.header.id.clone()));
                }
                self.selected = Some(at);
                sink.on_change(&self.header.id, FieldValue::DateTime(at));
                self.picker_open = false;
            }
            other => return Err(self.header.unsupported("datetime", &other)),
        }
        Ok(())
    }

    pub fn view(&self) -> WidgetView {
        let caption = match self.selected {
            Some(at) => at.format(DATETIME_DISPLAY_FORMAT).to_string(),
            None => "Select Date and Time".to_string(),
        };
        self.header.view(ViewBody::DateTimeButton {
            caption,
            picker_open: self.picker_open,
        })
    }
}

// ============================================================================
// Radio
// ============================================================================

/// Single choice. Re-selecting the current option still notifies.
#[derive(Debug, Clone, PartialEq)]
pub struct RadioWidget {
    pub header: WidgetHeader,
    pub options: Vec<RadioOption>,
    pub selected: Option<String>,
}

impl RadioWidget {
    pub fn handle<S: ChangeSink + ?Sized>(
        &mut self,
        event: InputEvent,
        sink: &mut S,
    ) -> Result<(), WidgetError> {
        let value = match event {
            InputEvent::Select(value) => self
                .options
                .iter()
                .find(|o| o.value == value)
                .map(|o| o.value.clone())
                .ok_or_else(|| WidgetError::UnknownOption {
                    field: self.header.id.clone(),
                    option: value,
                })?,
            InputEvent::SelectIndex(index) => self
                .options
                .get(index)
                .map(|o| o.value.clone())
                .ok_or_else(|| WidgetError::UnknownOption {
                    field: self.header.id.clone(),
                    option: format!("#{}", index),
                })?,
            other => return Err(self.header.unsupported("radio", &other)),
        };

        self.selected = Some(value.clone());
        sink.on_change(&self.header.id, FieldValue::Choice(value));
        Ok(())
    }

    pub fn view(&self) -> WidgetView {
        let options = self
            .options
            .iter()
            .map(|o| OptionView {
                value: o.value.clone(),
                display_label: o.display_label.clone(),
                checked: self.selected.as_deref() == Some(o.value.as_str()),
            })
            .collect();
        self.header.view(ViewBody::RadioGroup { options })
    }
}

// ============================================================================
// Drawing
// ============================================================================

/// Freehand capture state. At most one stroke is open at a time.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum StrokeState {
    #[default]
    Idle,
    Stroking(Stroke),
}

#[derive(Debug, Clone, PartialEq)]
pub struct DrawingWidget {
    pub header: WidgetHeader,
    pub width: u32,
    pub height: u32,
    pub strokes: Vec<Stroke>,
    pub state: StrokeState,
}

impl DrawingWidget {
    pub fn handle<S: ChangeSink + ?Sized>(
        &mut self,
        event: InputEvent,
        sink: &mut S,
    ) -> Result<(), WidgetError> {
        match event {
            InputEvent::PointerDown(p) => {
                // A second pointer-down restarts the open stroke
                self.state = StrokeState::Stroking(vec![self.clamp(p)]);
            }
            InputEvent::PointerMove(p) => {
                let point = self.clamp(p);
                if let StrokeState::Stroking(points) = &mut self.state {
                    points.push(point);
                }
            }
            InputEvent::PointerUp => {
                if let StrokeState::Stroking(points) = std::mem::take(&mut self.state) {
                    self.strokes.push(points);
                    debug!(field = %self.header.id, strokes = self.strokes.len(), "stroke committed");
                    sink.on_change(&self.header.id, FieldValue::Drawing(self.strokes.clone()));
                }
            }
            InputEvent::PointerCancel => {
                // Interrupted gestures are dropped without a notification
                self.state = StrokeState::Idle;
            }
            InputEvent::ClearDrawing => {
                self.strokes.clear();
                self.state = StrokeState::Idle;
                sink.on_change(&self.header.id, FieldValue::Drawing(Vec::new()));
            }
            other => return Err(self.header.unsupported("drawing", &other)),
        }
        Ok(())
    }

    fn clamp(&self, p: Point) -> Point {
        Point::new(
            p.x.clamp(0.0, self.width as f32),
            p.y.clamp(0.0, self.height as f32),
        )
    }

    pub fn view(&self) -> WidgetView {
        let open_stroke = match &self.state {
            StrokeState::Idle => None,
            StrokeState::Stroking(points) => Some(points.clone()),
        };
        self.header.view(ViewBody::Canvas {
            width: self.width,
            height: self.height,
            strokes: self.strokes.clone(),
            open_stroke,
        })
    }
}

// ============================================================================
// Unsupported
// ============================================================================

/// Passive diagnostic for an unknown field type.
#[derive(Debug, Clone, PartialEq)]
pub struct UnsupportedWidget {
    pub header: WidgetHeader,
    pub tag: String,
}

impl UnsupportedWidget {
    pub fn view(&self) -> WidgetView {
        self.header.view(ViewBody::Diagnostic {
            message: format!("Unsupported field type: {}", self.tag),
        })
    }
}
