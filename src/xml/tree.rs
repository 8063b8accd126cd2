use std::collections::BTreeMap;

// ============================================================================
// Generic XML parse tree
// ============================================================================

/// A node of the generic parse tree.
///
/// The shape follows the usual "XML to object" convention: a tag that occurs
/// once under its parent is a single node, a tag that occurs several times is
/// a `List`, and an element with no attributes and no children collapses to
/// its bare `Text`. Consumers must not assume either shape.
#[derive(Debug, Clone, PartialEq)]
pub enum XmlNode {
    Text(String),
    Element(XmlElement),
    List(Vec<XmlNode>),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct XmlElement {
    pub attributes: BTreeMap<String, String>,

    pub text: Option<String>,

    /// Children grouped by tag name, in order of first appearance
    pub children: Vec<(String, XmlNode)>,
}

impl XmlElement {
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn child(&self, name: &str) -> Option<&XmlNode> {
        self.children
            .iter()
            .find(|(tag, _)| tag == name)
            .map(|(_, node)| node)
    }

    /// Attach a child, collapsing repeated tags into a `List`.
    pub fn push_child(&mut self, name: String, node: XmlNode) {
        match self.children.iter_mut().find(|(tag, _)| *tag == name) {
            Some((_, XmlNode::List(items))) => items.push(node),
            Some((_, existing)) => {
                let first = std::mem::replace(existing, XmlNode::List(Vec::new()));
                *existing = XmlNode::List(vec![first, node]);
            }
            None => self.children.push((name, node)),
        }
    }

    pub fn append_text(&mut self, chunk: &str) {
        match &mut self.text {
            Some(text) => text.push_str(chunk),
            None => self.text = Some(chunk.to_string()),
        }
    }

    /// Finalize into a node: bare elements become their text content.
    ///
    /// Text chunks are joined as read and trimmed once here, so whitespace
    /// between chunks split by a nested element survives.
    pub fn into_node(mut self) -> XmlNode {
        self.text = self
            .text
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());
        if self.attributes.is_empty() && self.children.is_empty() {
            XmlNode::Text(self.text.unwrap_or_default())
        } else {
            XmlNode::Element(self)
        }
    }
}

impl XmlNode {
    pub fn as_element(&self) -> Option<&XmlElement> {
        match self {
            XmlNode::Element(el) => Some(el),
            _ => None,
        }
    }

    /// Text content of the node, for either collapsed or full elements.
    pub fn text(&self) -> Option<&str> {
        match self {
            XmlNode::Text(text) => Some(text),
            XmlNode::Element(el) => el.text.as_deref(),
            XmlNode::List(_) => None,
        }
    }
}
