// SPDX-FileCopyrightText: 2026 Greenbone AG
//
// SPDX-License-Identifier: GPL-2.0-or-later WITH x11vnc-openssl-exception

use base64::{Engine as _, engine::general_purpose};

use crate::{Element, Error, Response};

/// Content type of reports in the native GMP format
pub const XML_CONTENT_TYPE: &str = "text/xml";

/// A report as returned by [`crate::Gvm::get_report`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Report {
    /// The unconverted report element of a XML report
    Document(Element),
    /// The decoded content of a report rendered by a report format
    Decoded(Vec<u8>),
    /// The content of a report rendered by a report format that is not
    /// base64 encoded
    Raw(String),
}

impl TryFrom<Response> for Report {
    type Error = Error;

    /// Extracts the report of a validated get_reports response:
    /// ```xml
    /// <get_reports_response status="200" status_text="OK">
    ///   <report id="f0fdf522" format_id="a3810a62" extension="txt" content_type="text/plain">
    ///     <owner><name>admin</name></owner>
    ///     <report_format id="a3810a62"><name>TXT</name></report_format>
    ///     VGhpcyBpcyBhIHJlcG9ydA==
    ///   </report>
    /// </get_reports_response>
    /// ```
    fn try_from(response: Response) -> Result<Self, Self::Error> {
        let mut document = response.into_document();
        let report = document
            .take("report")
            .ok_or_else(|| Error::ElementNotFound(format!("report missing in {}", document.name)))?;
        match report.attribute("content_type") {
            None | Some(XML_CONTENT_TYPE) => return Ok(Report::Document(report)),
            Some(_) => {}
        }
        let payload = report
            .find_descendant("report_format")
            .and_then(|f| f.tail.as_deref())
            .unwrap_or_default();
        let compact: String = payload.split_ascii_whitespace().collect();
        Ok(match general_purpose::STANDARD.decode(compact) {
            Ok(decoded) => Report::Decoded(decoded),
            Err(_) => Report::Raw(payload.to_string()),
        })
    }
}
