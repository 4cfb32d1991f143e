// SPDX-FileCopyrightText: 2026 Greenbone AG
//
// SPDX-License-Identifier: GPL-2.0-or-later WITH x11vnc-openssl-exception

//! # Owned GMP documents
//!
//! GMP responses are XML documents. [`Element`] is an owned tree of such a
//! document that keeps everything the normalization needs: attributes, text,
//! the tail text following an element and the children in document order.
use std::io::Cursor;

use quick_xml::{
    Reader,
    events::{BytesEnd, BytesStart, BytesText, Event},
};

use crate::ParseError;

type Writer = quick_xml::Writer<Cursor<Vec<u8>>>;

/// A single element of a GMP document
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Element {
    /// Tag name
    pub name: String,
    /// Attributes in document order
    pub attributes: Vec<(String, String)>,
    /// Text before the first child
    pub text: Option<String>,
    /// Text after the closing tag, before the next sibling
    pub tail: Option<String>,
    /// Child elements
    pub children: Vec<Element>,
}

impl Element {
    /// Creates an empty element
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Adds an attribute
    pub fn with_attribute<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.attributes.push((key.into(), value.into()));
        self
    }

    /// Sets the text
    pub fn with_text<S: Into<String>>(mut self, text: S) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Sets the tail text
    pub fn with_tail<S: Into<String>>(mut self, tail: S) -> Self {
        self.tail = Some(tail.into());
        self
    }

    /// Appends a child
    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    /// Appends a child containing only text
    pub fn with_text_child<K, V>(self, name: K, text: V) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.with_child(Element::new(name).with_text(text))
    }

    /// Returns the value of an attribute
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Returns the first direct child with the given name
    pub fn find(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.name == name)
    }

    /// Returns all direct children with the given name
    pub fn find_all<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        self.children.iter().filter(move |c| c.name == name)
    }

    /// Returns the first descendant with the given name in depth-first order
    pub fn find_descendant(&self, name: &str) -> Option<&Element> {
        self.children
            .iter()
            .find_map(|c| if c.name == name { Some(c) } else { c.find_descendant(name) })
    }

    /// Removes and returns the first direct child with the given name
    pub fn take(&mut self, name: &str) -> Option<Element> {
        let index = self.children.iter().position(|c| c.name == name)?;
        Some(self.children.remove(index))
    }

    /// Returns the trimmed text of the first direct child with the given name
    pub fn child_text(&self, name: &str) -> Option<&str> {
        self.find(name)
            .and_then(|c| c.text.as_deref())
            .map(str::trim)
    }

    /// Parses a document and returns its root element
    pub fn from_xml(xml: &str) -> Result<Self, ParseError> {
        let mut reader = Reader::from_str(xml);
        let mut open: Vec<Element> = Vec::new();
        let mut root = None;
        loop {
            match reader.read_event()? {
                Event::Start(start) => open.push(Element::from_start(&start)?),
                Event::Empty(start) => {
                    let element = Element::from_start(&start)?;
                    close(&mut open, &mut root, element)?;
                }
                Event::End(_) => {
                    let element = open
                        .pop()
                        .ok_or_else(|| ParseError::ReadXml("unexpected closing tag".into()))?;
                    close(&mut open, &mut root, element)?;
                }
                Event::Text(text) => {
                    let text = text.unescape()?;
                    append_text(&mut open, &text);
                }
                Event::CData(data) => {
                    let text = std::str::from_utf8(&data)?.to_string();
                    append_text(&mut open, &text);
                }
                Event::Eof => break,
                _ => {}
            }
        }
        if let Some(element) = open.last() {
            return Err(ParseError::ReadXml(format!(
                "element {} is not closed",
                element.name
            )));
        }
        root.ok_or_else(|| ParseError::ReadXml("document without root element".into()))
    }

    /// Returns the XML representation of the element and its children
    pub fn to_xml(&self) -> Result<String, ParseError> {
        let mut writer = Writer::new(Cursor::new(Vec::new()));
        self.write(&mut writer)?;
        let result = writer.into_inner().into_inner();
        Ok(String::from_utf8(result)?)
    }

    fn from_start(start: &BytesStart) -> Result<Self, ParseError> {
        let name = std::str::from_utf8(start.name().as_ref())?.to_string();
        let mut attributes = Vec::new();
        for attribute in start.attributes() {
            let attribute = attribute?;
            let key = std::str::from_utf8(attribute.key.as_ref())?.to_string();
            let value = attribute.unescape_value()?.into_owned();
            attributes.push((key, value));
        }
        Ok(Self {
            name,
            attributes,
            ..Default::default()
        })
    }

    fn write(&self, writer: &mut Writer) -> Result<(), ParseError> {
        let mut start = BytesStart::new(self.name.as_str());
        for (key, value) in &self.attributes {
            start.push_attribute((key.as_str(), value.as_str()));
        }
        if self.text.is_none() && self.children.is_empty() {
            writer
                .write_event(Event::Empty(start))
                .map_err(write_error)?;
        } else {
            writer
                .write_event(Event::Start(start))
                .map_err(write_error)?;
            if let Some(text) = &self.text {
                writer
                    .write_event(Event::Text(BytesText::new(text)))
                    .map_err(write_error)?;
            }
            for child in &self.children {
                child.write(writer)?;
            }
            writer
                .write_event(Event::End(BytesEnd::new(self.name.as_str())))
                .map_err(write_error)?;
        }
        if let Some(tail) = &self.tail {
            writer
                .write_event(Event::Text(BytesText::new(tail)))
                .map_err(write_error)?;
        }
        Ok(())
    }
}

fn write_error<E: std::fmt::Display>(error: E) -> ParseError {
    ParseError::WriteXml(error.to_string())
}

fn close(
    open: &mut [Element],
    root: &mut Option<Element>,
    element: Element,
) -> Result<(), ParseError> {
    match (open.last_mut(), root.as_ref()) {
        (Some(parent), _) => parent.children.push(element),
        (None, None) => *root = Some(element),
        (None, Some(_)) => {
            return Err(ParseError::ReadXml(format!(
                "unexpected second root element {}",
                element.name
            )));
        }
    }
    Ok(())
}

// Text after a child belongs to that child's tail. Text outside of the root
// element is ignored.
fn append_text(open: &mut [Element], text: &str) {
    let Some(parent) = open.last_mut() else {
        return;
    };
    let target = match parent.children.last_mut() {
        Some(child) => &mut child.tail,
        None => &mut parent.text,
    };
    target.get_or_insert_with(String::new).push_str(text);
}
