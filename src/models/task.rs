// SPDX-FileCopyrightText: 2026 Greenbone AG
//
// SPDX-License-Identifier: GPL-2.0-or-later WITH x11vnc-openssl-exception

use serde::{Deserialize, Serialize};

use super::ResourceId;

/// Fields of a new task
///
/// When no scanner or scan config is set the manager decides. The defaults
/// configured in [`crate::Defaults`] can be resolved with
/// [`crate::Gvm::default_scanner_id`] and [`crate::Gvm::default_config_id`].
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskSpec {
    /// Name of the task
    pub name: String,
    /// Target to scan
    pub target_id: ResourceId,
    #[serde(default)]
    /// Scan config to use
    pub config_id: Option<ResourceId>,
    #[serde(default)]
    /// Scanner to use
    pub scanner_id: Option<ResourceId>,
    #[serde(default)]
    /// Schedule starting the task
    pub schedule_id: Option<ResourceId>,
    #[serde(default)]
    /// Comment on the task
    pub comment: Option<String>,
}

impl TaskSpec {
    /// Creates a task scanning the given target
    pub fn new<N: Into<String>, T: Into<ResourceId>>(name: N, target_id: T) -> Self {
        Self {
            name: name.into(),
            target_id: target_id.into(),
            ..Default::default()
        }
    }

    /// Sets the scan config
    pub fn with_config<S: Into<ResourceId>>(mut self, config_id: S) -> Self {
        self.config_id = Some(config_id.into());
        self
    }

    /// Sets the scanner
    pub fn with_scanner<S: Into<ResourceId>>(mut self, scanner_id: S) -> Self {
        self.scanner_id = Some(scanner_id.into());
        self
    }

    /// Sets the schedule
    pub fn with_schedule<S: Into<ResourceId>>(mut self, schedule_id: S) -> Self {
        self.schedule_id = Some(schedule_id.into());
        self
    }

    /// Sets the comment
    pub fn with_comment<S: Into<String>>(mut self, comment: S) -> Self {
        self.comment = Some(comment.into());
        self
    }
}
