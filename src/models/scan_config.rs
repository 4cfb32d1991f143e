// SPDX-FileCopyrightText: 2026 Greenbone AG
//
// SPDX-License-Identifier: GPL-2.0-or-later WITH x11vnc-openssl-exception

use serde::{Deserialize, Serialize};

use super::ResourceId;

/// Fields of a new scan config
///
/// GMP creates scan configs as copy of an existing one.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanConfigSpec {
    /// Name of the scan config
    pub name: String,
    /// Id of the scan config to copy
    pub copy_from: ResourceId,
    #[serde(default)]
    /// Comment on the scan config
    pub comment: Option<String>,
}

impl ScanConfigSpec {
    /// Creates a copy of the scan config `copy_from`
    pub fn new<N: Into<String>, I: Into<ResourceId>>(name: N, copy_from: I) -> Self {
        Self {
            name: name.into(),
            copy_from: copy_from.into(),
            comment: None,
        }
    }

    /// Sets the comment
    pub fn with_comment<S: Into<String>>(mut self, comment: S) -> Self {
        self.comment = Some(comment.into());
        self
    }
}

/// Fields of a new port list
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortListSpec {
    /// Name of the port list
    pub name: String,
    /// Port ranges e.g. `T:1-1024,U:53`
    pub port_range: String,
    #[serde(default)]
    /// Comment on the port list
    pub comment: Option<String>,
}

impl PortListSpec {
    /// Creates a port list of the given ranges
    pub fn new<N: Into<String>, R: Into<String>>(name: N, port_range: R) -> Self {
        Self {
            name: name.into(),
            port_range: port_range.into(),
            comment: None,
        }
    }

    /// Sets the comment
    pub fn with_comment<S: Into<String>>(mut self, comment: S) -> Self {
        self.comment = Some(comment.into());
        self
    }
}
