// SPDX-FileCopyrightText: 2026 Greenbone AG
//
// SPDX-License-Identifier: GPL-2.0-or-later WITH x11vnc-openssl-exception

//! Contains the command facade over a GMP client.
use serde_json::Value;

use crate::{
    Config, Conversion, Defaults, Element, Error, Filter, GmpProtocol, Report, Response,
    models::{
        PortListSpec, ScanConfigSpec, ScheduleSpec, ScheduleUpdate, TargetSpec, TargetUpdate,
        TaskSpec,
    },
};

/// Convenience layer over an authenticated GMP session
///
/// List commands return the resources as plain mappings, get commands a
/// single mapping. Create, modify and delete commands return the validated
/// response; [`Response::id`] contains the id of a created resource.
#[derive(Debug)]
pub struct Gvm<P> {
    protocol: P,
    defaults: Defaults,
}

impl<P: GmpProtocol> Gvm<P> {
    /// Authenticates once and returns the session
    pub fn new(mut protocol: P, username: &str, password: &str) -> Result<Self, Error> {
        tracing::debug!(username, "authenticating");
        Response::new(protocol.authenticate(username, password)?).raise_for_status()?;
        Ok(Self {
            protocol,
            defaults: Defaults::default(),
        })
    }

    /// Authenticates with the configured credentials and uses the configured
    /// default resource names
    pub fn with_config(protocol: P, config: &Config) -> Result<Self, Error> {
        let mut gvm = Self::new(
            protocol,
            &config.credentials.username,
            &config.credentials.password,
        )?;
        gvm.defaults = config.defaults.clone();
        Ok(gvm)
    }

    /// Returns the underlying client
    pub fn protocol(&self) -> &P {
        &self.protocol
    }

    /// Returns the underlying client
    pub fn protocol_mut(&mut self) -> &mut P {
        &mut self.protocol
    }

    fn send<F>(&mut self, command: &'static str, id: Option<&str>, f: F) -> Result<Response, Error>
    where
        F: FnOnce(&mut P) -> Result<Element, Error>,
    {
        tracing::debug!(command, id, "sending GMP command");
        f(&mut self.protocol).map(Response::new)
    }

    fn command<F>(&mut self, command: &'static str, id: &str, f: F) -> Result<Response, Error>
    where
        F: FnOnce(&mut P) -> Result<Element, Error>,
    {
        let response = self.send(command, Some(id), f)?;
        response.raise_for_status()?;
        Ok(response)
    }

    fn get<F>(&mut self, command: &'static str, tag: &str, id: &str, f: F) -> Result<Value, Error>
    where
        F: FnOnce(&mut P) -> Result<Element, Error>,
    {
        self.send(command, Some(id), f)?
            .convert(Conversion::Entity(tag))
    }

    fn list<F>(
        &mut self,
        command: &'static str,
        tag: &str,
        filter: &Filter,
        f: F,
    ) -> Result<Vec<Value>, Error>
    where
        F: FnOnce(&mut P, Option<&str>) -> Result<Element, Error>,
    {
        let filter = filter.as_filter_string();
        tracing::debug!(command, filter = filter.as_deref(), "sending GMP command");
        match Response::new(f(&mut self.protocol, filter.as_deref())?)
            .convert(Conversion::List(tag))?
        {
            Value::Array(values) => Ok(values),
            value => Ok(vec![value]),
        }
    }

    fn create<F>(&mut self, command: &'static str, name: &str, f: F) -> Result<Response, Error>
    where
        F: FnOnce(&mut P) -> Result<Element, Error>,
    {
        tracing::debug!(command, name, "sending GMP command");
        let response = f(&mut self.protocol).map(Response::new)?;
        response.raise_for_status()?;
        Ok(response)
    }

    /// Returns the GMP version of the manager
    pub fn get_version(&mut self) -> Result<Value, Error> {
        self.send("get_version", None, |p| p.get_version())?
            .convert(Conversion::Entity("version"))
    }

    /// Returns the targets matching `filter`
    pub fn list_targets(&mut self, filter: &Filter) -> Result<Vec<Value>, Error> {
        self.list("get_targets", "target", filter, |p, f| p.get_targets(f))
    }

    /// Returns a single target
    pub fn get_target(&mut self, target_id: &str) -> Result<Value, Error> {
        self.get("get_target", "target", target_id, |p| p.get_target(target_id))
    }

    /// Creates a target of hosts
    pub fn create_target(&mut self, target: &TargetSpec) -> Result<Response, Error> {
        self.create("create_target", &target.name, |p| p.create_target(target))
    }

    /// Changes the set fields of a target
    pub fn modify_target(
        &mut self,
        target_id: &str,
        update: &TargetUpdate,
    ) -> Result<Response, Error> {
        self.command("modify_target", target_id, |p| {
            p.modify_target(target_id, update)
        })
    }

    /// Deletes a target
    pub fn delete_target(&mut self, target_id: &str) -> Result<Response, Error> {
        self.command("delete_target", target_id, |p| p.delete_target(target_id))
    }

    /// Returns the scan configs matching `filter`
    pub fn list_configs(&mut self, filter: &Filter) -> Result<Vec<Value>, Error> {
        self.list("get_scan_configs", "config", filter, |p, f| {
            p.get_scan_configs(f)
        })
    }

    /// Returns a single scan config
    pub fn get_config(&mut self, config_id: &str) -> Result<Value, Error> {
        self.get("get_scan_config", "config", config_id, |p| {
            p.get_scan_config(config_id)
        })
    }

    /// Creates a new scan config as copy of an existing one
    pub fn create_config(&mut self, config: &ScanConfigSpec) -> Result<Response, Error> {
        self.create("create_scan_config", &config.name, |p| {
            p.create_scan_config(config)
        })
    }

    /// Deletes a scan config
    pub fn delete_config(&mut self, config_id: &str) -> Result<Response, Error> {
        self.command("delete_scan_config", config_id, |p| {
            p.delete_scan_config(config_id)
        })
    }

    /// Returns the port lists matching `filter`
    pub fn list_port_lists(&mut self, filter: &Filter) -> Result<Vec<Value>, Error> {
        self.list("get_port_lists", "port_list", filter, |p, f| {
            p.get_port_lists(f)
        })
    }

    /// Returns a single port list
    pub fn get_port_list(&mut self, port_list_id: &str) -> Result<Value, Error> {
        self.get("get_port_list", "port_list", port_list_id, |p| {
            p.get_port_list(port_list_id)
        })
    }

    /// Creates a port list from a port range such as `T:1-1024,U:53`
    pub fn create_port_list(&mut self, port_list: &PortListSpec) -> Result<Response, Error> {
        self.create("create_port_list", &port_list.name, |p| {
            p.create_port_list(port_list)
        })
    }

    /// Deletes a port list
    pub fn delete_port_list(&mut self, port_list_id: &str) -> Result<Response, Error> {
        self.command("delete_port_list", port_list_id, |p| {
            p.delete_port_list(port_list_id)
        })
    }

    /// Returns the scanners matching `filter`
    pub fn list_scanners(&mut self, filter: &Filter) -> Result<Vec<Value>, Error> {
        self.list("get_scanners", "scanner", filter, |p, f| p.get_scanners(f))
    }

    /// Returns a single scanner
    pub fn get_scanner(&mut self, scanner_id: &str) -> Result<Value, Error> {
        self.get("get_scanner", "scanner", scanner_id, |p| {
            p.get_scanner(scanner_id)
        })
    }

    /// Returns the report formats matching `filter`
    pub fn list_report_formats(&mut self, filter: &Filter) -> Result<Vec<Value>, Error> {
        self.list("get_report_formats", "report_format", filter, |p, f| {
            p.get_report_formats(f)
        })
    }

    /// Returns a single report format
    pub fn get_report_format(&mut self, report_format_id: &str) -> Result<Value, Error> {
        self.get("get_report_format", "report_format", report_format_id, |p| {
            p.get_report_format(report_format_id)
        })
    }

    /// Returns the tasks matching `filter`
    pub fn list_tasks(&mut self, filter: &Filter) -> Result<Vec<Value>, Error> {
        self.list("get_tasks", "task", filter, |p, f| p.get_tasks(f))
    }

    /// Returns a single task
    pub fn get_task(&mut self, task_id: &str) -> Result<Value, Error> {
        self.get("get_task", "task", task_id, |p| p.get_task(task_id))
    }

    /// Creates a task scanning the target of `task`
    pub fn create_task(&mut self, task: &TaskSpec) -> Result<Response, Error> {
        self.create("create_task", &task.name, |p| p.create_task(task))
    }

    /// Starts a task; the response contains the id of the new report
    pub fn start_task(&mut self, task_id: &str) -> Result<Response, Error> {
        self.command("start_task", task_id, |p| p.start_task(task_id))
    }

    /// Stops a running task
    pub fn stop_task(&mut self, task_id: &str) -> Result<Response, Error> {
        self.command("stop_task", task_id, |p| p.stop_task(task_id))
    }

    /// Resumes a stopped task
    pub fn resume_task(&mut self, task_id: &str) -> Result<Response, Error> {
        self.command("resume_task", task_id, |p| p.resume_task(task_id))
    }

    /// Deletes a task
    pub fn delete_task(&mut self, task_id: &str) -> Result<Response, Error> {
        self.command("delete_task", task_id, |p| p.delete_task(task_id))
    }

    /// Returns the reports matching `filter`
    pub fn list_reports(&mut self, filter: &Filter) -> Result<Vec<Value>, Error> {
        self.list("get_reports", "report", filter, |p, f| p.get_reports(f))
    }

    /// Returns a report
    ///
    /// Without a report format the configured default format is looked up by
    /// name. When it is unknown the report is requested without a format.
    pub fn get_report(
        &mut self,
        report_id: &str,
        report_format_id: Option<&str>,
    ) -> Result<Report, Error> {
        let resolved = match report_format_id {
            Some(id) => Some(id.to_string()),
            None => self.default_report_format_id()?,
        };
        let format = resolved.as_deref();
        let response = self.command("get_report", report_id, |p| {
            p.get_report(report_id, format)
        })?;
        Report::try_from(response)
    }

    /// Returns the schedules matching `filter`
    pub fn list_schedules(&mut self, filter: &Filter) -> Result<Vec<Value>, Error> {
        self.list("get_schedules", "schedule", filter, |p, f| {
            p.get_schedules(f)
        })
    }

    /// Returns a single schedule
    pub fn get_schedule(&mut self, schedule_id: &str) -> Result<Value, Error> {
        self.get("get_schedule", "schedule", schedule_id, |p| {
            p.get_schedule(schedule_id)
        })
    }

    /// Creates a schedule based on iCalendar data
    pub fn create_schedule(&mut self, schedule: &ScheduleSpec) -> Result<Response, Error> {
        self.create("create_schedule", &schedule.name, |p| {
            p.create_schedule(schedule)
        })
    }

    /// Changes the set fields of a schedule
    pub fn modify_schedule(
        &mut self,
        schedule_id: &str,
        update: &ScheduleUpdate,
    ) -> Result<Response, Error> {
        self.command("modify_schedule", schedule_id, |p| {
            p.modify_schedule(schedule_id, update)
        })
    }

    /// Deletes a schedule
    pub fn delete_schedule(&mut self, schedule_id: &str) -> Result<Response, Error> {
        self.command("delete_schedule", schedule_id, |p| {
            p.delete_schedule(schedule_id)
        })
    }

    /// Returns the id of the configured default scanner, if it exists
    pub fn default_scanner_id(&mut self) -> Result<Option<String>, Error> {
        let name = self.defaults.scanner.clone();
        let found = self.list_scanners(&Filter::new().with("name", &name));
        first_id("scanner", &name, found)
    }

    /// Returns the id of the configured default scan config, if it exists
    pub fn default_config_id(&mut self) -> Result<Option<String>, Error> {
        let name = self.defaults.scan_config.clone();
        let found = self.list_configs(&Filter::new().with("name", &name));
        first_id("scan config", &name, found)
    }

    /// Returns the id of the configured default report format, if it exists
    pub fn default_report_format_id(&mut self) -> Result<Option<String>, Error> {
        let name = self.defaults.report_format.clone();
        let found = self.list_report_formats(&Filter::new().with("name", &name));
        first_id("report format", &name, found)
    }
}

/// Returns the `@id` of the first found resource
///
/// An unknown resource is not an error but None.
fn first_id(
    kind: &str,
    name: &str,
    found: Result<Vec<Value>, Error>,
) -> Result<Option<String>, Error> {
    let found = match found {
        Ok(found) => found,
        Err(e) if e.is_not_found() => Vec::new(),
        Err(e) => return Err(e),
    };
    let id = found
        .first()
        .and_then(|v| v.get("@id"))
        .and_then(Value::as_str)
        .map(str::to_string);
    if id.is_none() {
        tracing::debug!(kind, name, "no default found");
    }
    Ok(id)
}
