use std::collections::HashSet;

use tracing::debug;

use crate::error::{LoadError, SchemaError};
use crate::schema::schema_model::{
    DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH, DEFAULT_TITLE, FieldKind, FieldSpec, FormSchema,
    RadioOption,
};
use crate::xml::parser::parse;
use crate::xml::tree::{XmlElement, XmlNode};

/// Coerce a node that may be a single item or a list into a list.
///
/// Used for every repeatable element (fields, options) so the one-vs-many
/// ambiguity of the parse tree is resolved in one place.
pub fn as_list(node: &XmlNode) -> Vec<&XmlNode> {
    match node {
        XmlNode::List(items) => items.iter().collect(),
        other => vec![other],
    }
}

/// Parse and normalize in one step.
pub fn load_schema(xml: &str) -> Result<FormSchema, LoadError> {
    let tree = parse(xml)?;
    Ok(normalize(&tree)?)
}

/// Convert a generic parse tree into a `FormSchema`.
pub fn normalize(tree: &XmlNode) -> Result<FormSchema, SchemaError> {
    let form_node = tree
        .as_element()
        .and_then(|doc| doc.child("form"))
        .ok_or(SchemaError::MissingForm)?;

    let form = match form_node {
        XmlNode::Element(el) => el,
        // <form/> or <form>text</form>: a form, but without any fields
        XmlNode::Text(_) => return Err(SchemaError::MissingFields),
        XmlNode::List(_) => return Err(SchemaError::MissingForm),
    };

    let title = form
        .attr("title")
        .filter(|t| !t.is_empty())
        .unwrap_or(DEFAULT_TITLE)
        .to_string();

    let field_nodes = form.child("field").ok_or(SchemaError::MissingFields)?;
    let fields: Vec<FieldSpec> = as_list(field_nodes).into_iter().map(field_spec).collect();

    check_unique_ids(&fields)?;

    debug!(title = %title, fields = fields.len(), "normalized form schema");
    Ok(FormSchema { title, fields })
}

fn field_spec(node: &XmlNode) -> FieldSpec {
    let el = match node {
        XmlNode::Element(el) => el,
        // A bare <field>text</field> carries no type at all
        _ => {
            return FieldSpec {
                id: String::new(),
                label: String::new(),
                required: false,
                kind: FieldKind::Unsupported { tag: String::new() },
            };
        }
    };

    let id = el.attr("id").unwrap_or("").to_string();
    let label = el.attr("label").map(str::to_string).unwrap_or_else(|| id.clone());
    let required = el.attr("required") == Some("true");

    FieldSpec {
        id,
        label,
        required,
        kind: field_kind(el),
    }
}

fn field_kind(el: &XmlElement) -> FieldKind {
    let tag = el.attr("type").unwrap_or("");

    match tag {
        "text" => FieldKind::Text {
            placeholder: el.attr("placeholder").map(str::to_string),
        },
        "datetime" => FieldKind::Datetime,
        "radio" => FieldKind::Radio {
            options: el
                .child("option")
                .map(|node| as_list(node).into_iter().map(radio_option).collect())
                .unwrap_or_default(),
        },
        "drawing" => FieldKind::Drawing {
            width: canvas_dimension(el.attr("width"), DEFAULT_CANVAS_WIDTH),
            height: canvas_dimension(el.attr("height"), DEFAULT_CANVAS_HEIGHT),
        },
        other => FieldKind::Unsupported {
            tag: other.to_string(),
        },
    }
}

fn radio_option(node: &XmlNode) -> RadioOption {
    let display_label = node.text().unwrap_or("").trim().to_string();
    let value = node
        .as_element()
        .and_then(|el| el.attr("value"))
        .map(str::to_string)
        .unwrap_or_else(|| display_label.clone());

    RadioOption {
        value,
        display_label,
    }
}

/// Lenient integer parse: leading digits are used, anything else falls back.
fn canvas_dimension(raw: Option<&str>, default: u32) -> u32 {
    let Some(raw) = raw else {
        return default;
    };
    let digits: String = raw
        .trim()
        .trim_start_matches('+')
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();

    match digits.parse::<u32>() {
        Ok(n) if n > 0 => n,
        _ => default,
    }
}

fn check_unique_ids(fields: &[FieldSpec]) -> Result<(), SchemaError> {
    let mut seen = HashSet::new();
    for field in fields.iter().filter(|f| f.kind.is_supported()) {
        if !seen.insert(field.id.as_str()) {
            return Err(SchemaError::DuplicateFieldId(field.id.clone()));
        }
    }
    Ok(())
}
