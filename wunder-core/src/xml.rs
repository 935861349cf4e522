//! Owned XML document tree built from provider responses.
//!
//! The Wunderground endpoints return small, flat-ish XML documents whose
//! shape varies between API versions, so responses are kept as a generic
//! tree and fields are looked up by element name with a caller-supplied
//! default instead of deserializing into fixed structs.

use quick_xml::{Reader, events::Event};

use crate::error::XmlError;

/// One element of a parsed weather document: a name, the concatenated text
/// content directly inside it, and its child elements in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XmlNode {
    pub name: String,
    pub text: String,
    pub children: Vec<XmlNode>,
}

impl XmlNode {
    fn named(name: &[u8]) -> Self {
        Self {
            name: String::from_utf8_lossy(name).into_owned(),
            text: String::new(),
            children: Vec::new(),
        }
    }

    /// Parse an XML payload into a tree rooted at the document element.
    pub fn parse(input: &str) -> Result<Self, XmlError> {
        let mut reader = Reader::from_str(input);
        reader.config_mut().trim_text(true);

        let mut stack: Vec<XmlNode> = Vec::new();
        let mut root: Option<XmlNode> = None;

        loop {
            match reader.read_event().map_err(XmlError::Parse)? {
                Event::Start(e) => stack.push(Self::named(e.name().as_ref())),
                Event::Empty(e) => {
                    let node = Self::named(e.name().as_ref());
                    attach(&mut stack, &mut root, node);
                }
                Event::Text(e) => {
                    if let Some(top) = stack.last_mut() {
                        let text = e.unescape().map_err(quick_xml::Error::from)?;
                        top.text.push_str(&text);
                    }
                }
                Event::CData(e) => {
                    if let Some(top) = stack.last_mut() {
                        if let Ok(text) = std::str::from_utf8(e.as_ref()) {
                            top.text.push_str(text);
                        }
                    }
                }
                Event::End(_) => {
                    if let Some(node) = stack.pop() {
                        attach(&mut stack, &mut root, node);
                    }
                }
                Event::Eof => break,
                _ => {}
            }
        }

        root.ok_or(XmlError::NoRoot)
    }

    /// First descendant element with the given name, in document order.
    pub fn find(&self, name: &str) -> Option<&XmlNode> {
        for child in &self.children {
            if child.name == name {
                return Some(child);
            }
            if let Some(found) = child.find(name) {
                return Some(found);
            }
        }
        None
    }

    /// All descendant elements with the given name, in document order.
    pub fn find_all<'a>(&'a self, name: &str) -> Vec<&'a XmlNode> {
        let mut out = Vec::new();
        self.collect_named(name, &mut out);
        out
    }

    fn collect_named<'a>(&'a self, name: &str, out: &mut Vec<&'a XmlNode>) {
        for child in &self.children {
            if child.name == name {
                out.push(child);
            }
            child.collect_named(name, out);
        }
    }

    /// Text of the first descendant with the given name, or `default` when
    /// the element is absent or present with empty content. Upstream signals
    /// "no match" with empty elements rather than error statuses, so both
    /// cases must degrade the same way.
    pub fn text_or(&self, name: &str, default: &str) -> String {
        match self.find(name) {
            Some(node) if !node.text.is_empty() => node.text.clone(),
            _ => default.to_string(),
        }
    }
}

fn attach(stack: &mut Vec<XmlNode>, root: &mut Option<XmlNode>, node: XmlNode) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(node),
        None => {
            root.get_or_insert(node);
        }
    }
}
