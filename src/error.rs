// SPDX-FileCopyrightText: 2026 Greenbone AG
//
// SPDX-License-Identifier: GPL-2.0-or-later WITH x11vnc-openssl-exception

use std::{str::Utf8Error, string::FromUtf8Error};

use quick_xml::events::attributes::AttrError;
use thiserror::Error;

/// Errors returned by GMP commands.
///
/// The variants are derived from the status of a response, see
/// [`Error::from_status`]. Transport failures of a [`crate::GmpProtocol`]
/// implementation are reported as [`Error::Http`].
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// Generic failure of a command
    #[error("GMP command failed ({code:?}): {text}")]
    Result {
        /// Status code, when the response contained a parsable one
        code: Option<u16>,
        /// Status text
        text: String,
    },
    /// Failure on the transport level or a status not covered otherwise
    #[error("HTTP error ({code}): {text}")]
    Http {
        /// Status code
        code: u16,
        /// Status text
        text: String,
    },
    /// A resource with the same unique properties exists already
    #[error("Element exists: {0}")]
    ElementExists(String),
    /// The requested resource is unknown
    #[error("Element not found: {0}")]
    ElementNotFound(String),
    /// The request was malformed
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    /// The manager failed while processing the request
    #[error("Server error ({code}): {text}")]
    ServerError {
        /// Status code
        code: u16,
        /// Status text
        text: String,
    },
}

impl Error {
    /// Maps a response status to an error.
    ///
    /// Returns None when the status denotes success (2xx).
    pub fn from_status(code: Option<u16>, text: &str) -> Option<Self> {
        let text = text.to_string();
        match code {
            Some(200..=299) => None,
            Some(404) => Some(Error::ElementNotFound(text)),
            Some(409) => Some(Error::ElementExists(text)),
            Some(400) if denotes_existing(&text) => Some(Error::ElementExists(text)),
            Some(400) => Some(Error::InvalidArgument(text)),
            Some(code @ 401..=499) => Some(Error::Http { code, text }),
            Some(code @ 500..=599) => Some(Error::ServerError { code, text }),
            code => Some(Error::Result { code, text }),
        }
    }

    /// Returns true if the requested resource is unknown
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::ElementNotFound(_))
    }

    /// Returns true if the resource to create exists already
    pub fn is_exists(&self) -> bool {
        matches!(self, Error::ElementExists(_))
    }
}

// gvmd reports creation conflicts as 400 with e.g. "Target exists already"
fn denotes_existing(text: &str) -> bool {
    let text = text.to_ascii_lowercase();
    text.contains("exists already") || text.contains("already exists")
}

/// Errors while reading or writing a GMP document
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Error when reading XML
    #[error("Unable to read XML: {0}")]
    ReadXml(String),
    /// Error when writing XML
    #[error("Unable to write XML: {0}")]
    WriteXml(String),
}

impl From<quick_xml::Error> for ParseError {
    fn from(value: quick_xml::Error) -> Self {
        ParseError::ReadXml(value.to_string())
    }
}

impl From<AttrError> for ParseError {
    fn from(value: AttrError) -> Self {
        ParseError::ReadXml(value.to_string())
    }
}

impl From<Utf8Error> for ParseError {
    fn from(value: Utf8Error) -> Self {
        ParseError::ReadXml(value.to_string())
    }
}

impl From<FromUtf8Error> for ParseError {
    fn from(value: FromUtf8Error) -> Self {
        ParseError::WriteXml(value.to_string())
    }
}
