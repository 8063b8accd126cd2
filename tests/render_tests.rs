use chrono::NaiveDate;
use xml_form_renderer::{
    error::WidgetError,
    form::{
        store::FieldValueStore,
        value::{FieldValue, Point},
    },
    render::{
        dispatcher::{RenderedWidget, render, render_form},
        widget::StrokeState,
        widget_model::{InputEvent, ViewBody},
    },
    schema::schema_model::{FieldKind, FieldSpec, RadioOption},
};

use crate::common::utils::{Recorder, sample_schema};

mod common;

// =========================================================================
// Helpers
// =========================================================================

fn spec(id: &str, kind: FieldKind) -> FieldSpec {
    FieldSpec {
        id: id.into(),
        label: id.to_uppercase(),
        required: true,
        kind,
    }
}

fn radio_spec() -> FieldSpec {
    let options = ["5", "4", "3", "2", "1"]
        .iter()
        .map(|v| RadioOption {
            value: v.to_string(),
            display_label: format!("Option {}", v),
        })
        .collect();
    spec("satisfaction", FieldKind::Radio { options })
}

fn drawing_spec() -> FieldSpec {
    spec("signature", FieldKind::Drawing { width: 300, height: 200 })
}

fn at(h: u32, m: u32) -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 5, 1)
        .and_then(|d| d.and_hms_opt(h, m, 0))
        .unwrap()
}

fn p(x: f32, y: f32) -> Point {
    Point::new(x, y)
}

// =========================================================================
// Dispatch
// =========================================================================

#[test]
fn dispatch_selects_widget_by_kind() {
    let schema = sample_schema();
    let store = FieldValueStore::for_schema(&schema);
    let widgets = render_form(&schema, &store);

    assert_eq!(widgets.len(), schema.fields.len());
    assert!(matches!(widgets[0], RenderedWidget::Text(_)));
    assert!(matches!(widgets[1], RenderedWidget::Text(_)));
    assert!(matches!(widgets[2], RenderedWidget::DateTime(_)));
    assert!(matches!(widgets[3], RenderedWidget::Radio(_)));
    assert!(matches!(widgets[4], RenderedWidget::Drawing(_)));

    let ids: Vec<&str> = widgets.iter().map(|w| w.field_id()).collect();
    assert_eq!(ids, ["name", "email", "visitDate", "satisfaction", "signature"]);
}

#[test]
fn unsupported_kind_renders_passive_diagnostic() {
    let mut widget = render(
        &spec("volume", FieldKind::Unsupported { tag: "slider".into() }),
        None,
    );
    assert!(!widget.is_interactive());
    assert_eq!(
        widget.view().body,
        ViewBody::Diagnostic {
            message: "Unsupported field type: slider".into()
        }
    );

    let mut rec = Recorder::default();
    let result = widget.handle(InputEvent::Type('x'), &mut rec.sink());
    assert!(matches!(result, Err(WidgetError::UnsupportedEvent { .. })));
    assert!(rec.changes.is_empty());
}

#[test]
fn render_restores_current_value_of_matching_kind() {
    let text = render(
        &spec("name", FieldKind::Text { placeholder: None }),
        Some(&FieldValue::Text("Ada".into())),
    );
    assert!(matches!(text.view().body, ViewBody::TextInput { ref value, .. } if value == "Ada"));

    // Mismatched value kinds are ignored
    let text = render(
        &spec("name", FieldKind::Text { placeholder: None }),
        Some(&FieldValue::Choice("3".into())),
    );
    assert!(matches!(text.view().body, ViewBody::TextInput { ref value, .. } if value.is_empty()));
}

// =========================================================================
// Text
// =========================================================================

#[test]
fn every_keystroke_reports_full_string() {
    let mut widget = render(
        &spec("name", FieldKind::Text { placeholder: Some("Your name".into()) }),
        None,
    );
    let mut rec = Recorder::default();
    {
        let mut sink = rec.sink();
        for c in "Ada".chars() {
            widget.handle(InputEvent::Type(c), &mut sink).unwrap();
        }
        widget.handle(InputEvent::Backspace, &mut sink).unwrap();
    }

    let values: Vec<FieldValue> = rec.changes.iter().map(|(_, v)| v.clone()).collect();
    assert_eq!(
        values,
        [
            FieldValue::Text("A".into()),
            FieldValue::Text("Ad".into()),
            FieldValue::Text("Ada".into()),
            FieldValue::Text("Ad".into()),
        ]
    );
    assert!(rec.changes.iter().all(|(id, _)| id == "name"));
}

#[test]
fn text_rejects_picker_events() {
    let mut widget = render(&spec("name", FieldKind::Text { placeholder: None }), None);
    let mut store = FieldValueStore::new();
    let err = widget.handle(InputEvent::OpenPicker, &mut store).unwrap_err();
    assert_eq!(
        err,
        WidgetError::UnsupportedEvent {
            field: "name".into(),
            kind: "text",
            event: "open_picker",
        }
    );
    assert!(store.get("name").is_none());
}

// =========================================================================
// Date/time
// =========================================================================

#[test]
fn confirm_reports_and_closes_picker() {
    let mut widget = render(&spec("visit", FieldKind::Datetime), None);
    let mut rec = Recorder::default();
    {
        let mut sink = rec.sink();
        widget.handle(InputEvent::OpenPicker, &mut sink).unwrap();
        assert!(matches!(
            widget.view().body,
            ViewBody::DateTimeButton { picker_open: true, .. }
        ));
        widget.handle(InputEvent::ConfirmPicker(at(10, 30)), &mut sink).unwrap();
    }

    assert_eq!(rec.changes, [("visit".to_string(), FieldValue::DateTime(at(10, 30)))]);
    assert_eq!(
        widget.view().body,
        ViewBody::DateTimeButton {
            caption: "2024-05-01 10:30".into(),
            picker_open: false,
        }
    );
}

#[test]
fn cancel_dismisses_without_notification() {
    let mut widget = render(&spec("visit", FieldKind::Datetime), None);
    let mut rec = Recorder::default();
    {
        let mut sink = rec.sink();
        widget.handle(InputEvent::OpenPicker, &mut sink).unwrap();
        widget.handle(InputEvent::CancelPicker, &mut sink).unwrap();
    }
    assert!(rec.changes.is_empty());
    assert_eq!(
        widget.view().body,
        ViewBody::DateTimeButton {
            caption: "Select Date and Time".into(),
            picker_open: false,
        }
    );
}

#[test]
fn reselecting_datetime_replaces_value() {
    let mut widget = render(&spec("visit", FieldKind::Datetime), None);
    let mut store = FieldValueStore::new();
    for (h, m) in [(9, 0), (14, 45)] {
        widget.handle(InputEvent::OpenPicker, &mut store).unwrap();
        widget.handle(InputEvent::ConfirmPicker(at(h, m)), &mut store).unwrap();
    }
    assert_eq!(store.get("visit"), Some(&FieldValue::DateTime(at(14, 45))));
}

#[test]
fn confirm_without_open_picker_fails() {
    let mut widget = render(&spec("visit", FieldKind::Datetime), None);
    let mut store = FieldValueStore::new();
    let err = widget
        .handle(InputEvent::ConfirmPicker(at(8, 0)), &mut store)
        .unwrap_err();
    assert_eq!(err, WidgetError::PickerClosed("visit".into()));
    assert!(store.get("visit").is_none());
}

// =========================================================================
// Radio
// =========================================================================

#[test]
fn reselecting_same_option_notifies_twice() {
    let mut widget = render(&radio_spec(), None);
    let mut rec = Recorder::default();
    {
        let mut sink = rec.sink();
        widget.handle(InputEvent::Select("3".into()), &mut sink).unwrap();
        widget.handle(InputEvent::Select("3".into()), &mut sink).unwrap();
    }
    assert_eq!(
        rec.changes,
        [
            ("satisfaction".to_string(), FieldValue::Choice("3".into())),
            ("satisfaction".to_string(), FieldValue::Choice("3".into())),
        ]
    );
}

#[test]
fn exactly_one_option_is_checked() {
    let mut widget = render(&radio_spec(), None);
    let mut store = FieldValueStore::new();
    widget.handle(InputEvent::Select("4".into()), &mut store).unwrap();
    widget.handle(InputEvent::SelectIndex(4), &mut store).unwrap();

    let ViewBody::RadioGroup { options } = widget.view().body else {
        panic!("expected radio group");
    };
    let checked: Vec<&str> = options
        .iter()
        .filter(|o| o.checked)
        .map(|o| o.value.as_str())
        .collect();
    assert_eq!(checked, ["1"]);
    assert_eq!(store.get("satisfaction"), Some(&FieldValue::Choice("1".into())));
}

#[test]
fn unknown_option_is_rejected() {
    let mut widget = render(&radio_spec(), None);
    let mut store = FieldValueStore::new();

    let err = widget.handle(InputEvent::Select("9".into()), &mut store).unwrap_err();
    assert!(matches!(err, WidgetError::UnknownOption { ref option, .. } if option == "9"));
    assert!(widget.handle(InputEvent::SelectIndex(5), &mut store).is_err());
    assert!(store.get("satisfaction").is_none());
}

#[test]
fn radio_with_no_options_has_nothing_to_select() {
    let mut widget = render(&spec("empty", FieldKind::Radio { options: vec![] }), None);
    let mut store = FieldValueStore::new();
    assert!(widget.handle(InputEvent::SelectIndex(0), &mut store).is_err());
    assert_eq!(widget.view().body, ViewBody::RadioGroup { options: vec![] });
}

// =========================================================================
// Drawing
// =========================================================================

#[test]
fn pointer_up_commits_stroke_and_reports_all_strokes() {
    let mut widget = render(&drawing_spec(), None);
    let mut rec = Recorder::default();
    {
        let mut sink = rec.sink();
        widget.handle(InputEvent::PointerDown(p(1.0, 1.0)), &mut sink).unwrap();
        widget.handle(InputEvent::PointerMove(p(2.0, 2.0)), &mut sink).unwrap();
        widget.handle(InputEvent::PointerMove(p(3.0, 3.0)), &mut sink).unwrap();
        widget.handle(InputEvent::PointerUp, &mut sink).unwrap();

        widget.handle(InputEvent::PointerDown(p(10.0, 10.0)), &mut sink).unwrap();
        widget.handle(InputEvent::PointerUp, &mut sink).unwrap();
    }

    assert_eq!(rec.changes.len(), 2, "one notification per committed stroke");
    assert_eq!(
        rec.changes[0].1,
        FieldValue::Drawing(vec![vec![p(1.0, 1.0), p(2.0, 2.0), p(3.0, 3.0)]])
    );
    assert_eq!(
        rec.last(),
        Some(&FieldValue::Drawing(vec![
            vec![p(1.0, 1.0), p(2.0, 2.0), p(3.0, 3.0)],
            vec![p(10.0, 10.0)],
        ]))
    );
}

#[test]
fn moves_do_not_notify_until_pointer_up() {
    let mut widget = render(&drawing_spec(), None);
    let mut rec = Recorder::default();
    {
        let mut sink = rec.sink();
        widget.handle(InputEvent::PointerDown(p(5.0, 5.0)), &mut sink).unwrap();
        widget.handle(InputEvent::PointerMove(p(6.0, 5.0)), &mut sink).unwrap();
    }
    assert!(rec.changes.is_empty());

    let RenderedWidget::Drawing(drawing) = &widget else {
        panic!("expected drawing widget");
    };
    assert_eq!(drawing.state, StrokeState::Stroking(vec![p(5.0, 5.0), p(6.0, 5.0)]));
}

#[test]
fn clear_resets_and_reports_empty() {
    let mut widget = render(&drawing_spec(), None);
    let mut store = FieldValueStore::new();
    widget.handle(InputEvent::PointerDown(p(1.0, 1.0)), &mut store).unwrap();
    widget.handle(InputEvent::PointerUp, &mut store).unwrap();
    assert!(store.has_value("signature"));

    widget.handle(InputEvent::ClearDrawing, &mut store).unwrap();
    assert_eq!(store.get("signature"), Some(&FieldValue::Drawing(vec![])));
    assert!(!store.has_value("signature"));
}

#[test]
fn cancelled_stroke_is_discarded() {
    let mut widget = render(&drawing_spec(), None);
    let mut rec = Recorder::default();
    {
        let mut sink = rec.sink();
        widget.handle(InputEvent::PointerDown(p(1.0, 1.0)), &mut sink).unwrap();
        widget.handle(InputEvent::PointerMove(p(2.0, 2.0)), &mut sink).unwrap();
        widget.handle(InputEvent::PointerCancel, &mut sink).unwrap();
        // A late pointer-up after cancel has no open stroke to commit
        widget.handle(InputEvent::PointerUp, &mut sink).unwrap();
    }
    assert!(rec.changes.is_empty());

    let ViewBody::Canvas { strokes, open_stroke, .. } = widget.view().body else {
        panic!("expected canvas");
    };
    assert!(strokes.is_empty());
    assert!(open_stroke.is_none());
}

#[test]
fn stray_moves_without_pointer_down_are_ignored() {
    let mut widget = render(&drawing_spec(), None);
    let mut store = FieldValueStore::new();
    widget.handle(InputEvent::PointerMove(p(4.0, 4.0)), &mut store).unwrap();
    widget.handle(InputEvent::PointerUp, &mut store).unwrap();
    assert!(store.get("signature").is_none());
}

#[test]
fn points_are_clamped_to_canvas() {
    let mut widget = render(&drawing_spec(), None);
    let mut store = FieldValueStore::new();
    widget.handle(InputEvent::PointerDown(p(-5.0, 50.0)), &mut store).unwrap();
    widget.handle(InputEvent::PointerMove(p(400.0, 250.0)), &mut store).unwrap();
    widget.handle(InputEvent::PointerUp, &mut store).unwrap();

    assert_eq!(
        store.get("signature"),
        Some(&FieldValue::Drawing(vec![vec![p(0.0, 50.0), p(300.0, 200.0)]]))
    );
}
