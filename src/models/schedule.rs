// SPDX-FileCopyrightText: 2026 Greenbone AG
//
// SPDX-License-Identifier: GPL-2.0-or-later WITH x11vnc-openssl-exception

use serde::{Deserialize, Serialize};

/// Fields of a new schedule
///
/// The recurrence is described by iCalendar (RFC 5545) data, e.g.:
/// ```text
/// BEGIN:VCALENDAR
/// VERSION:2.0
/// PRODID:-//Greenbone.net//NONSGML Greenbone Security Manager//EN
/// BEGIN:VEVENT
/// DTSTART:20200101T000000Z
/// RRULE:FREQ=WEEKLY
/// END:VEVENT
/// END:VCALENDAR
/// ```
/// The data is passed to the manager unmodified.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleSpec {
    /// Name of the schedule
    pub name: String,
    /// iCalendar data
    pub icalendar: Vec<u8>,
    /// Timezone applied to datetime values without timezone information,
    /// e.g. Europe/Berlin
    pub timezone: String,
    #[serde(default)]
    /// Comment on the schedule
    pub comment: Option<String>,
}

impl ScheduleSpec {
    /// Creates a schedule
    pub fn new<N, I, T>(name: N, icalendar: I, timezone: T) -> Self
    where
        N: Into<String>,
        I: Into<Vec<u8>>,
        T: Into<String>,
    {
        Self {
            name: name.into(),
            icalendar: icalendar.into(),
            timezone: timezone.into(),
            comment: None,
        }
    }

    /// Sets the comment
    pub fn with_comment<S: Into<String>>(mut self, comment: S) -> Self {
        self.comment = Some(comment.into());
        self
    }
}

/// Changes of an existing schedule, None leaves a field untouched
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleUpdate {
    /// New name
    pub name: Option<String>,
    /// New iCalendar data
    pub icalendar: Option<Vec<u8>>,
    /// New timezone
    pub timezone: Option<String>,
    /// New comment
    pub comment: Option<String>,
}
