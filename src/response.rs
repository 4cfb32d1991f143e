// SPDX-FileCopyrightText: 2026 Greenbone AG
//
// SPDX-License-Identifier: GPL-2.0-or-later WITH x11vnc-openssl-exception

//! # Responses of GMP commands
use serde_json::Value;

use crate::{Element, Error, convert};

/// Status of a response
///
/// Example:
/// ```xml
/// <delete_target_response status="200" status_text="OK"/>
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Status {
    /// Status code, None when missing or not a number
    pub code: Option<u16>,
    /// Status text
    pub text: String,
}

impl Status {
    /// Check if the status is OK
    pub fn is_ok(&self) -> bool {
        matches!(self.code, Some(200..=299))
    }

    /// Returns the mapped error when the status denotes a failure
    pub fn check(&self) -> Result<(), Error> {
        match Error::from_status(self.code, &self.text) {
            None => Ok(()),
            Some(error) => {
                tracing::debug!(code = ?self.code, text = %self.text, "GMP command failed");
                Err(error)
            }
        }
    }
}

/// Strategy to turn a validated response into a value
pub enum Conversion<'a> {
    /// The first child with the given tag as single mapping
    Entity(&'a str),
    /// All children with the given tag as array of mappings
    List(&'a str),
    /// A custom conversion of the response document
    Custom(&'a dyn Fn(&Element) -> Result<Value, Error>),
}

/// Response of the GMP client
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Response {
    document: Element,
}

impl Response {
    /// Wraps a response document
    pub fn new(document: Element) -> Self {
        Self { document }
    }

    /// Returns the status of the response
    pub fn status(&self) -> Status {
        Status {
            code: self
                .document
                .attribute("status")
                .and_then(|s| s.trim().parse().ok()),
            text: self
                .document
                .attribute("status_text")
                .unwrap_or_default()
                .to_string(),
        }
    }

    /// Check if the status is OK
    pub fn is_ok(&self) -> bool {
        self.status().is_ok()
    }

    /// Returns an error when the status denotes a failure
    pub fn raise_for_status(&self) -> Result<(), Error> {
        self.status().check()
    }

    /// Returns the id of the response
    ///
    /// Create commands return the id of the new resource:
    /// ```xml
    /// <create_target_response status="201" status_text="OK, resource created"
    ///     id="254cd3ef-bbe1-4d58-859d-21b8d0c046c6"/>
    /// ```
    pub fn id(&self) -> Option<&str> {
        self.document.attribute("id")
    }

    /// Returns the response document
    pub fn document(&self) -> &Element {
        &self.document
    }

    /// Returns the response document
    pub fn into_document(self) -> Element {
        self.document
    }

    /// Validates the status and converts the response
    pub fn convert(&self, conversion: Conversion) -> Result<Value, Error> {
        match conversion {
            Conversion::Entity(tag) => self.entity(tag),
            Conversion::List(tag) => self.entities(tag).map(Value::Array),
            Conversion::Custom(f) => self.map(f),
        }
    }

    /// Validates the status and returns the first child with the given tag
    pub fn entity(&self, tag: &str) -> Result<Value, Error> {
        self.raise_for_status()?;
        self.document
            .find(tag)
            .map(convert::to_value)
            .ok_or_else(|| Error::ElementNotFound(format!("{tag} missing in {}", self.document.name)))
    }

    /// Validates the status and returns all children with the given tag
    pub fn entities(&self, tag: &str) -> Result<Vec<Value>, Error> {
        self.raise_for_status()?;
        Ok(self.document.find_all(tag).map(convert::to_value).collect())
    }

    /// Validates the status and applies `f` on the response document
    pub fn map<T, F>(&self, f: F) -> Result<T, Error>
    where
        F: FnOnce(&Element) -> Result<T, Error>,
    {
        self.raise_for_status()?;
        f(&self.document)
    }
}

impl From<Element> for Response {
    fn from(document: Element) -> Self {
        Self::new(document)
    }
}
