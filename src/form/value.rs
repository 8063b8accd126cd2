use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

pub const DATETIME_DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M";

/// A 2-D point on a drawing canvas, serialized as `[x, y]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "(f32, f32)", into = "(f32, f32)")]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

impl From<Point> for (f32, f32) {
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}

/// One pointer-down to pointer-up path.
pub type Stroke = Vec<Point>;

/// The current answer of one field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum FieldValue {
    Text(String),
    DateTime(NaiveDateTime),
    /// The selected option's `value`
    Choice(String),
    Drawing(Vec<Stroke>),
}

impl FieldValue {
    /// Kind-specific emptiness used by validation.
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Text(text) => text.is_empty(),
            FieldValue::Choice(value) => value.is_empty(),
            FieldValue::DateTime(_) => false,
            FieldValue::Drawing(strokes) => strokes.is_empty(),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(text) => write!(f, "{}", text),
            FieldValue::DateTime(at) => write!(f, "{}", at.format(DATETIME_DISPLAY_FORMAT)),
            FieldValue::Choice(value) => write!(f, "{}", value),
            FieldValue::Drawing(strokes) => {
                let points: usize = strokes.iter().map(Vec::len).sum();
                write!(f, "{} strokes ({} points)", strokes.len(), points)
            }
        }
    }
}
