use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::form::value::{Point, Stroke};

/// A discrete user action delivered to one widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum InputEvent {
    /// Keystroke appending one character
    Type(char),
    Backspace,
    /// Paste or programmatic replacement of the whole text
    ReplaceText(String),

    OpenPicker,
    ConfirmPicker(NaiveDateTime),
    CancelPicker,

    /// Select a radio option by its value
    Select(String),
    /// Select a radio option by its position
    SelectIndex(usize),

    PointerDown(Point),
    PointerMove(Point),
    PointerUp,
    /// Pointer capture lost mid-gesture
    PointerCancel,
    ClearDrawing,
}

impl InputEvent {
    pub fn name(&self) -> &'static str {
        match self {
            InputEvent::Type(_) => "type",
            InputEvent::Backspace => "backspace",
            InputEvent::ReplaceText(_) => "replace_text",
            InputEvent::OpenPicker => "open_picker",
            InputEvent::ConfirmPicker(_) => "confirm_picker",
            InputEvent::CancelPicker => "cancel_picker",
            InputEvent::Select(_) => "select",
            InputEvent::SelectIndex(_) => "select_index",
            InputEvent::PointerDown(_) => "pointer_down",
            InputEvent::PointerMove(_) => "pointer_move",
            InputEvent::PointerUp => "pointer_up",
            InputEvent::PointerCancel => "pointer_cancel",
            InputEvent::ClearDrawing => "clear_drawing",
        }
    }
}

/// Presentation-neutral description of a rendered widget.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WidgetView {
    pub id: String,
    pub label: String,
    pub required: bool,
    pub body: ViewBody,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "widget", rename_all = "snake_case")]
pub enum ViewBody {
    TextInput {
        value: String,
        placeholder: String,
    },
    DateTimeButton {
        caption: String,
        picker_open: bool,
    },
    RadioGroup {
        options: Vec<OptionView>,
    },
    Canvas {
        width: u32,
        height: u32,
        strokes: Vec<Stroke>,
        /// Stroke still being drawn, not yet committed
        open_stroke: Option<Stroke>,
    },
    Diagnostic {
        message: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionView {
    pub value: String,
    pub display_label: String,
    pub checked: bool,
}
