use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use tracing::debug;

use crate::error::ParseError;
use crate::xml::tree::{XmlElement, XmlNode};

/// Parse XML text into the generic tree.
///
/// The returned node is the document: an `Element` whose children are the
/// root element(s). Declarations, comments, processing instructions and
/// DOCTYPE are skipped.
pub fn parse(xml: &str) -> Result<XmlNode, ParseError> {
    let mut reader = Reader::from_str(xml);

    // Bottom entry is the document itself
    let mut stack: Vec<(String, XmlElement)> = vec![(String::new(), XmlElement::default())];

    loop {
        let event = reader.read_event().map_err(|e| ParseError::Syntax {
            position: reader.buffer_position(),
            message: e.to_string(),
        })?;

        match event {
            Event::Start(ref e) => {
                let (name, element) = open_element(e)?;
                stack.push((name, element));
            }
            Event::Empty(ref e) => {
                let (name, element) = open_element(e)?;
                attach(&mut stack, name, element);
            }
            Event::End(ref e) => {
                let closing = String::from_utf8_lossy(e.name().as_ref()).to_string();
                if stack.len() < 2 {
                    return Err(ParseError::Syntax {
                        position: reader.buffer_position(),
                        message: format!("unexpected closing tag </{}>", closing),
                    });
                }
                if let Some((name, element)) = stack.pop() {
                    if name != closing {
                        return Err(ParseError::Syntax {
                            position: reader.buffer_position(),
                            message: format!("expected </{}>, found </{}>", name, closing),
                        });
                    }
                    attach(&mut stack, name, element);
                }
            }
            Event::Text(ref e) => {
                let text = e.unescape().map_err(|err| ParseError::Syntax {
                    position: reader.buffer_position(),
                    message: err.to_string(),
                })?;
                append_text(&mut stack, &text, reader.buffer_position())?;
            }
            Event::CData(e) => {
                let raw = e.into_inner();
                let text = String::from_utf8_lossy(&raw).to_string();
                append_text(&mut stack, &text, reader.buffer_position())?;
            }
            Event::Eof => break,
            // Decl, Comment, PI, DocType
            _ => {}
        }
    }

    if stack.len() > 1 {
        let tag = stack.last().map(|(name, _)| name.clone()).unwrap_or_default();
        return Err(ParseError::Unclosed { tag });
    }

    let (_, document) = stack.pop().ok_or(ParseError::Empty)?;
    if document.children.is_empty() {
        return Err(ParseError::Empty);
    }

    debug!(roots = document.children.len(), "parsed XML document");
    Ok(XmlNode::Element(document))
}

fn open_element(start: &BytesStart) -> Result<(String, XmlElement), ParseError> {
    let name = String::from_utf8_lossy(start.name().as_ref()).to_string();
    let mut element = XmlElement::default();

    for attr in start.attributes() {
        let attr = attr.map_err(|e| ParseError::Attribute {
            tag: name.clone(),
            message: e.to_string(),
        })?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).to_string();
        let value = attr
            .unescape_value()
            .map_err(|e| ParseError::Attribute {
                tag: name.clone(),
                message: e.to_string(),
            })?
            .to_string();
        element.attributes.insert(key, value);
    }

    Ok((name, element))
}

fn attach(stack: &mut [(String, XmlElement)], name: String, element: XmlElement) {
    if let Some((_, parent)) = stack.last_mut() {
        parent.push_child(name, element.into_node());
    }
}

fn append_text(
    stack: &mut [(String, XmlElement)],
    text: &str,
    position: usize,
) -> Result<(), ParseError> {
    if stack.len() < 2 {
        if text.trim().is_empty() {
            return Ok(());
        }
        return Err(ParseError::Syntax {
            position,
            message: "text outside of the root element".to_string(),
        });
    }
    if let Some((_, element)) = stack.last_mut() {
        element.append_text(text);
    }
    Ok(())
}
