// SPDX-FileCopyrightText: 2026 Greenbone AG
//
// SPDX-License-Identifier: GPL-2.0-or-later WITH x11vnc-openssl-exception

use crate::{
    Element, Error,
    models::{
        PortListSpec, ScanConfigSpec, ScheduleSpec, ScheduleUpdate, TargetSpec, TargetUpdate,
        TaskSpec,
    },
};

/// A GMP client
///
/// Implementations own the connection and the protocol. Each method sends
/// one command and returns the response document, e.g.:
/// ```xml
/// <get_targets_response status="200" status_text="OK">
///   <target id="b493b7a8-7489-11df-a3ec-002264764cea">...</target>
/// </get_targets_response>
/// ```
/// A failed command is still a response; the status attributes carry the
/// failure. `Err` is reserved for failures of the transport, reported as
/// [`Error::Http`].
///
/// Filters are the already built filter strings, None when no filter is set.
pub trait GmpProtocol {
    /// Sends `authenticate` with the given credentials
    fn authenticate(&mut self, username: &str, password: &str) -> Result<Element, Error>;

    /// Sends `get_version`
    fn get_version(&mut self) -> Result<Element, Error>;

    /// Sends `get_targets`
    fn get_targets(&mut self, filter: Option<&str>) -> Result<Element, Error>;
    /// Sends `get_targets` for a single target
    fn get_target(&mut self, target_id: &str) -> Result<Element, Error>;
    /// Sends `create_target`
    fn create_target(&mut self, target: &TargetSpec) -> Result<Element, Error>;
    /// Sends `modify_target`, only the set fields of `update` are changed
    fn modify_target(&mut self, target_id: &str, update: &TargetUpdate)
    -> Result<Element, Error>;
    /// Sends `delete_target`
    fn delete_target(&mut self, target_id: &str) -> Result<Element, Error>;

    /// Sends `get_configs`
    fn get_scan_configs(&mut self, filter: Option<&str>) -> Result<Element, Error>;
    /// Sends `get_configs` for a single scan config
    fn get_scan_config(&mut self, config_id: &str) -> Result<Element, Error>;
    /// Sends `create_config` copying an existing scan config
    fn create_scan_config(&mut self, config: &ScanConfigSpec) -> Result<Element, Error>;
    /// Sends `delete_config`
    fn delete_scan_config(&mut self, config_id: &str) -> Result<Element, Error>;

    /// Sends `get_port_lists`
    fn get_port_lists(&mut self, filter: Option<&str>) -> Result<Element, Error>;
    /// Sends `get_port_lists` for a single port list
    fn get_port_list(&mut self, port_list_id: &str) -> Result<Element, Error>;
    /// Sends `create_port_list`
    fn create_port_list(&mut self, port_list: &PortListSpec) -> Result<Element, Error>;
    /// Sends `delete_port_list`
    fn delete_port_list(&mut self, port_list_id: &str) -> Result<Element, Error>;

    /// Sends `get_scanners`
    fn get_scanners(&mut self, filter: Option<&str>) -> Result<Element, Error>;
    /// Sends `get_scanners` for a single scanner
    fn get_scanner(&mut self, scanner_id: &str) -> Result<Element, Error>;

    /// Sends `get_report_formats`
    fn get_report_formats(&mut self, filter: Option<&str>) -> Result<Element, Error>;
    /// Sends `get_report_formats` for a single report format
    fn get_report_format(&mut self, report_format_id: &str) -> Result<Element, Error>;

    /// Sends `get_tasks`
    fn get_tasks(&mut self, filter: Option<&str>) -> Result<Element, Error>;
    /// Sends `get_tasks` for a single task
    fn get_task(&mut self, task_id: &str) -> Result<Element, Error>;
    /// Sends `create_task`
    fn create_task(&mut self, task: &TaskSpec) -> Result<Element, Error>;
    /// Sends `start_task`, the response contains the id of the new report
    fn start_task(&mut self, task_id: &str) -> Result<Element, Error>;
    /// Sends `stop_task`
    fn stop_task(&mut self, task_id: &str) -> Result<Element, Error>;
    /// Sends `resume_task`
    fn resume_task(&mut self, task_id: &str) -> Result<Element, Error>;
    /// Sends `delete_task`
    fn delete_task(&mut self, task_id: &str) -> Result<Element, Error>;

    /// Sends `get_reports`
    fn get_reports(&mut self, filter: Option<&str>) -> Result<Element, Error>;
    /// Returns a report, rendered by the given report format when set
    fn get_report(
        &mut self,
        report_id: &str,
        report_format_id: Option<&str>,
    ) -> Result<Element, Error>;

    /// Sends `get_schedules`
    fn get_schedules(&mut self, filter: Option<&str>) -> Result<Element, Error>;
    /// Sends `get_schedules` for a single schedule
    fn get_schedule(&mut self, schedule_id: &str) -> Result<Element, Error>;
    /// Sends `create_schedule`
    fn create_schedule(&mut self, schedule: &ScheduleSpec) -> Result<Element, Error>;
    /// Sends `modify_schedule`, only the set fields of `update` are changed
    fn modify_schedule(
        &mut self,
        schedule_id: &str,
        update: &ScheduleUpdate,
    ) -> Result<Element, Error>;
    /// Sends `delete_schedule`
    fn delete_schedule(&mut self, schedule_id: &str) -> Result<Element, Error>;
}
