// SPDX-FileCopyrightText: 2026 Greenbone AG
//
// SPDX-License-Identifier: GPL-2.0-or-later WITH x11vnc-openssl-exception

//! In-memory GMP manager answering like gvmd.
#![allow(dead_code)]

use std::collections::HashMap;

use base64::{Engine as _, engine::general_purpose};
use gvmlib::{
    Element, Error, GmpProtocol,
    models::{
        PortListSpec, ScanConfigSpec, ScheduleSpec, ScheduleUpdate, TargetSpec, TargetUpdate,
        TaskSpec,
    },
};

pub const SCANNER_ID: &str = "08b69003-5fc2-4037-a479-93b440211c73";
pub const CONFIG_ID: &str = "daba56c8-73ec-11df-a475-002264764cea";
pub const TXT_FORMAT_ID: &str = "a3810a62-1f62-11e1-9219-406186ea4fc5";
pub const XML_FORMAT_ID: &str = "a994b278-1f62-11e1-96ac-406186ea4fc5";
pub const CSV_FORMAT_ID: &str = "c1645568-627a-11e3-a660-406186ea4fc5";
pub const REPORT_TEXT: &str = "This is a report";

#[derive(Clone, Debug)]
struct Resource {
    id: String,
    fields: Vec<(String, String)>,
}

impl Resource {
    fn field(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    fn set(&mut self, key: &str, value: Option<String>) {
        let Some(value) = value else {
            return;
        };
        match self.fields.iter_mut().find(|(k, _)| k == key) {
            Some((_, v)) => *v = value,
            None => self.fields.push((key.to_string(), value)),
        }
    }

    fn to_element(&self, tag: &str) -> Element {
        self.fields
            .iter()
            .fold(Element::new(tag).with_attribute("id", &self.id), |e, (k, v)| {
                e.with_text_child(k.as_str(), v.as_str())
            })
    }
}

#[derive(Debug, Default)]
pub struct FakeGmp {
    resources: HashMap<&'static str, Vec<Resource>>,
    /// Successful authentications
    pub logins: Vec<String>,
    /// Filters received by list commands
    pub filters: Vec<Option<String>>,
    /// Report formats requested by get_report
    pub report_formats: Vec<Option<String>>,
    /// Answers every command with a transport failure
    pub offline: bool,
    /// Answers every command with a 503
    pub overloaded: bool,
}

fn response(command: &str, code: u16, text: &str) -> Element {
    Element::new(format!("{command}_response"))
        .with_attribute("status", code.to_string())
        .with_attribute("status_text", text)
}

fn ok(command: &str) -> Element {
    response(command, 200, "OK")
}

/// Parses terms of the form `key="value"`
fn parse_filter(filter: &str) -> Vec<(String, String)> {
    let mut terms = Vec::new();
    let mut rest = filter;
    while let Some((key, after)) = rest.split_once("=\"") {
        let Some((value, remainder)) = after.split_once('"') else {
            break;
        };
        terms.push((key.trim().to_string(), value.to_string()));
        rest = remainder;
    }
    terms
}

impl FakeGmp {
    pub fn new() -> Self {
        let mut fake = Self::default();
        fake.insert("scanner", SCANNER_ID, &[("name", "OpenVAS Default"), ("type", "2")]);
        fake.insert(
            "scanner",
            "6acd0832-df90-11e4-b9d5-28d24461215b",
            &[("name", "CVE"), ("type", "3")],
        );
        fake.insert("config", CONFIG_ID, &[("name", "Full and fast")]);
        fake.insert(
            "port_list",
            "33d0cd82-57c6-11e1-8ed1-406186ea4fc5",
            &[("name", "All IANA assigned TCP"), ("port_range", "T:1-65535")],
        );
        fake.insert(
            "report_format",
            TXT_FORMAT_ID,
            &[("name", "TXT"), ("content_type", "text/plain")],
        );
        fake.insert(
            "report_format",
            XML_FORMAT_ID,
            &[("name", "XML"), ("content_type", "text/xml")],
        );
        fake.insert(
            "report_format",
            CSV_FORMAT_ID,
            &[("name", "CSV Results"), ("content_type", "text/csv")],
        );
        fake
    }

    /// Removes all report formats
    pub fn without_report_formats(mut self) -> Self {
        self.resources.remove("report_format");
        self
    }

    pub fn insert(&mut self, tag: &'static str, id: &str, fields: &[(&str, &str)]) {
        self.resources.entry(tag).or_default().push(Resource {
            id: id.to_string(),
            fields: fields
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        });
    }

    /// Sends the document through its XML representation like a real client
    fn answer(&self, document: Element) -> Result<Element, Error> {
        if self.offline {
            return Err(Error::Http {
                code: 0,
                text: "Connection refused".into(),
            });
        }
        let xml = document.to_xml().expect("valid document");
        Ok(Element::from_xml(&xml).expect("parsable document"))
    }

    fn find(&self, tag: &str, id: &str) -> Option<&Resource> {
        self.resources.get(tag)?.iter().find(|r| r.id == id)
    }

    fn find_mut(&mut self, tag: &'static str, id: &str) -> Option<&mut Resource> {
        self.resources.get_mut(tag)?.iter_mut().find(|r| r.id == id)
    }

    fn list(&mut self, command: &str, tag: &'static str, filter: Option<&str>) -> Result<Element, Error> {
        self.filters.push(filter.map(str::to_string));
        if self.overloaded {
            return self.answer(response(command, 503, "Service temporarily down"));
        }
        let terms = filter.map(parse_filter).unwrap_or_default();
        let document = self
            .resources
            .get(tag)
            .into_iter()
            .flatten()
            .filter(|r| terms.iter().all(|(k, v)| r.field(k) == Some(v.as_str())))
            .fold(ok(command), |doc, r| doc.with_child(r.to_element(tag)))
            .with_child(
                Element::new("filters")
                    .with_attribute("id", "")
                    .with_text_child("term", filter.unwrap_or_default()),
            );
        self.answer(document)
    }

    fn get(&self, command: &str, tag: &str, id: &str) -> Result<Element, Error> {
        let document = match self.find(tag, id) {
            Some(r) => ok(command).with_child(r.to_element(tag)),
            None => response(command, 404, &format!("Failed to find {tag} '{id}'")),
        };
        self.answer(document)
    }

    fn create(
        &mut self,
        command: &str,
        tag: &'static str,
        fields: Vec<(&str, Option<String>)>,
    ) -> Result<Element, Error> {
        let name = fields
            .iter()
            .find(|(k, _)| *k == "name")
            .and_then(|(_, v)| v.clone())
            .unwrap_or_default();
        if name.is_empty() {
            return self.answer(response(command, 400, "A name is required"));
        }
        let exists = self
            .resources
            .get(tag)
            .into_iter()
            .flatten()
            .any(|r| r.field("name") == Some(name.as_str()));
        if exists {
            let mut kind = tag.replace('_', " ");
            kind[..1].make_ascii_uppercase();
            return self.answer(response(command, 400, &format!("{kind} exists already")));
        }
        let id = uuid::Uuid::new_v4().to_string();
        self.resources.entry(tag).or_default().push(Resource {
            id: id.clone(),
            fields: fields
                .into_iter()
                .filter_map(|(k, v)| v.map(|v| (k.to_string(), v)))
                .collect(),
        });
        self.answer(
            response(command, 201, "OK, resource created").with_attribute("id", id),
        )
    }

    fn delete(&mut self, command: &str, tag: &'static str, id: &str) -> Result<Element, Error> {
        let resources = self.resources.entry(tag).or_default();
        let document = match resources.iter().position(|r| r.id == id) {
            Some(index) => {
                resources.remove(index);
                ok(command)
            }
            None => response(command, 404, &format!("Failed to find {tag} '{id}'")),
        };
        self.answer(document)
    }

    fn modify(
        &mut self,
        command: &str,
        tag: &'static str,
        id: &str,
        fields: Vec<(&str, Option<String>)>,
    ) -> Result<Element, Error> {
        let document = match self.find_mut(tag, id) {
            Some(resource) => {
                for (k, v) in fields {
                    resource.set(k, v);
                }
                ok(command)
            }
            None => response(command, 404, &format!("Failed to find {tag} '{id}'")),
        };
        self.answer(document)
    }

    fn task_action(&mut self, command: &str, id: &str, status: &str) -> Result<Element, Error> {
        match self.find_mut("task", id) {
            Some(task) => {
                task.set("status", Some(status.to_string()));
                self.answer(response(command, 202, "OK, request submitted"))
            }
            None => self.answer(response(command, 404, &format!("Failed to find task '{id}'"))),
        }
    }
}

impl GmpProtocol for FakeGmp {
    fn authenticate(&mut self, username: &str, password: &str) -> Result<Element, Error> {
        if password != "admin" {
            return self.answer(response("authenticate", 400, "Authentication failed"));
        }
        self.logins.push(username.to_string());
        self.answer(
            ok("authenticate")
                .with_text_child("role", "Admin")
                .with_text_child("timezone", "UTC"),
        )
    }

    fn get_version(&mut self) -> Result<Element, Error> {
        self.answer(ok("get_version").with_text_child("version", "22.5"))
    }

    fn get_targets(&mut self, filter: Option<&str>) -> Result<Element, Error> {
        self.list("get_targets", "target", filter)
    }

    fn get_target(&mut self, target_id: &str) -> Result<Element, Error> {
        self.get("get_targets", "target", target_id)
    }

    fn create_target(&mut self, target: &TargetSpec) -> Result<Element, Error> {
        self.create(
            "create_target",
            "target",
            vec![
                ("name", Some(target.name.clone())),
                ("hosts", Some(target.hosts.join(", "))),
                ("port_list", target.port_list_id.clone()),
                ("alive_tests", target.alive_test.map(|a| a.to_string())),
                ("comment", target.comment.clone()),
            ],
        )
    }

    fn modify_target(&mut self, target_id: &str, update: &TargetUpdate) -> Result<Element, Error> {
        self.modify(
            "modify_target",
            "target",
            target_id,
            vec![
                ("name", update.name.clone()),
                ("hosts", update.hosts.as_ref().map(|h| h.join(", "))),
                ("port_list", update.port_list_id.clone()),
                ("alive_tests", update.alive_test.map(|a| a.to_string())),
                ("comment", update.comment.clone()),
            ],
        )
    }

    fn delete_target(&mut self, target_id: &str) -> Result<Element, Error> {
        self.delete("delete_target", "target", target_id)
    }

    fn get_scan_configs(&mut self, filter: Option<&str>) -> Result<Element, Error> {
        self.list("get_configs", "config", filter)
    }

    fn get_scan_config(&mut self, config_id: &str) -> Result<Element, Error> {
        self.get("get_configs", "config", config_id)
    }

    fn create_scan_config(&mut self, config: &ScanConfigSpec) -> Result<Element, Error> {
        if self.find("config", &config.copy_from).is_none() {
            return self.answer(response("create_config", 404, "Failed to find config to copy"));
        }
        self.create(
            "create_config",
            "config",
            vec![
                ("name", Some(config.name.clone())),
                ("comment", config.comment.clone()),
            ],
        )
    }

    fn delete_scan_config(&mut self, config_id: &str) -> Result<Element, Error> {
        self.delete("delete_config", "config", config_id)
    }

    fn get_port_lists(&mut self, filter: Option<&str>) -> Result<Element, Error> {
        self.list("get_port_lists", "port_list", filter)
    }

    fn get_port_list(&mut self, port_list_id: &str) -> Result<Element, Error> {
        self.get("get_port_lists", "port_list", port_list_id)
    }

    fn create_port_list(&mut self, port_list: &PortListSpec) -> Result<Element, Error> {
        if port_list.port_range.is_empty() {
            return self.answer(response(
                "create_port_list",
                400,
                "CREATE_PORT_LIST requires a port_range",
            ));
        }
        self.create(
            "create_port_list",
            "port_list",
            vec![
                ("name", Some(port_list.name.clone())),
                ("port_range", Some(port_list.port_range.clone())),
                ("comment", port_list.comment.clone()),
            ],
        )
    }

    fn delete_port_list(&mut self, port_list_id: &str) -> Result<Element, Error> {
        self.delete("delete_port_list", "port_list", port_list_id)
    }

    fn get_scanners(&mut self, filter: Option<&str>) -> Result<Element, Error> {
        self.list("get_scanners", "scanner", filter)
    }

    fn get_scanner(&mut self, scanner_id: &str) -> Result<Element, Error> {
        self.get("get_scanners", "scanner", scanner_id)
    }

    fn get_report_formats(&mut self, filter: Option<&str>) -> Result<Element, Error> {
        self.list("get_report_formats", "report_format", filter)
    }

    fn get_report_format(&mut self, report_format_id: &str) -> Result<Element, Error> {
        self.get("get_report_formats", "report_format", report_format_id)
    }

    fn get_tasks(&mut self, filter: Option<&str>) -> Result<Element, Error> {
        self.list("get_tasks", "task", filter)
    }

    fn get_task(&mut self, task_id: &str) -> Result<Element, Error> {
        self.get("get_tasks", "task", task_id)
    }

    fn create_task(&mut self, task: &TaskSpec) -> Result<Element, Error> {
        if self.find("target", &task.target_id).is_none() {
            return self.answer(response(
                "create_task",
                404,
                &format!("Failed to find target '{}'", task.target_id),
            ));
        }
        self.create(
            "create_task",
            "task",
            vec![
                ("name", Some(task.name.clone())),
                ("target", Some(task.target_id.clone())),
                ("config", task.config_id.clone()),
                ("scanner", task.scanner_id.clone()),
                ("schedule", task.schedule_id.clone()),
                ("comment", task.comment.clone()),
                ("status", Some("New".to_string())),
            ],
        )
    }

    fn start_task(&mut self, task_id: &str) -> Result<Element, Error> {
        if self.find("task", task_id).is_none() {
            return self.task_action("start_task", task_id, "Requested");
        }
        let report_id = uuid::Uuid::new_v4().to_string();
        self.insert("report", &report_id, &[("task", task_id), ("scan_run_status", "Done")]);
        self.task_action("start_task", task_id, "Requested")?;
        self.answer(
            response("start_task", 202, "OK, request submitted")
                .with_text_child("report_id", report_id),
        )
    }

    fn stop_task(&mut self, task_id: &str) -> Result<Element, Error> {
        self.task_action("stop_task", task_id, "Stopped")
    }

    fn resume_task(&mut self, task_id: &str) -> Result<Element, Error> {
        self.task_action("resume_task", task_id, "Requested")
    }

    fn delete_task(&mut self, task_id: &str) -> Result<Element, Error> {
        self.delete("delete_task", "task", task_id)
    }

    fn get_reports(&mut self, filter: Option<&str>) -> Result<Element, Error> {
        self.list("get_reports", "report", filter)
    }

    fn get_report(
        &mut self,
        report_id: &str,
        report_format_id: Option<&str>,
    ) -> Result<Element, Error> {
        self.report_formats.push(report_format_id.map(str::to_string));
        if self.find("report", report_id).is_none() {
            return self.answer(response(
                "get_reports",
                404,
                &format!("Failed to find report '{report_id}'"),
            ));
        }
        let format = match report_format_id {
            None => None,
            Some(id) => match self.find("report_format", id) {
                Some(format) => Some(format.clone()),
                None => {
                    return self.answer(response(
                        "get_reports",
                        404,
                        &format!("Failed to find report format '{id}'"),
                    ));
                }
            },
        };
        let content_type = format
            .as_ref()
            .and_then(|f| f.field("content_type"))
            .unwrap_or("text/xml");
        let report = Element::new("report")
            .with_attribute("id", report_id)
            .with_attribute("content_type", content_type)
            .with_child(Element::new("owner").with_text_child("name", "admin"));
        let report = match (&format, content_type) {
            (_, "text/xml") => report.with_child(
                Element::new("report")
                    .with_attribute("id", report_id)
                    .with_child(Element::new("results").with_attribute("start", "1")),
            ),
            (Some(format), "text/plain") => report.with_child(
                Element::new("report_format")
                    .with_attribute("id", &format.id)
                    .with_text_child("name", format.field("name").unwrap_or_default())
                    .with_tail(general_purpose::STANDARD.encode(REPORT_TEXT)),
            ),
            (Some(format), _) => report.with_child(
                Element::new("report_format")
                    .with_attribute("id", &format.id)
                    .with_text_child("name", format.field("name").unwrap_or_default())
                    .with_tail("host,port\n10.0.0.1,22/tcp\n"),
            ),
            (None, _) => report,
        };
        self.answer(ok("get_reports").with_child(report))
    }

    fn get_schedules(&mut self, filter: Option<&str>) -> Result<Element, Error> {
        self.list("get_schedules", "schedule", filter)
    }

    fn get_schedule(&mut self, schedule_id: &str) -> Result<Element, Error> {
        self.get("get_schedules", "schedule", schedule_id)
    }

    fn create_schedule(&mut self, schedule: &ScheduleSpec) -> Result<Element, Error> {
        let icalendar = String::from_utf8_lossy(&schedule.icalendar).to_string();
        if !icalendar.starts_with("BEGIN:VCALENDAR") {
            return self.answer(response("create_schedule", 400, "Invalid iCalendar data"));
        }
        self.create(
            "create_schedule",
            "schedule",
            vec![
                ("name", Some(schedule.name.clone())),
                ("icalendar", Some(icalendar)),
                ("timezone", Some(schedule.timezone.clone())),
                ("comment", schedule.comment.clone()),
            ],
        )
    }

    fn modify_schedule(
        &mut self,
        schedule_id: &str,
        update: &ScheduleUpdate,
    ) -> Result<Element, Error> {
        self.modify(
            "modify_schedule",
            "schedule",
            schedule_id,
            vec![
                ("name", update.name.clone()),
                (
                    "icalendar",
                    update
                        .icalendar
                        .as_ref()
                        .map(|i| String::from_utf8_lossy(i).to_string()),
                ),
                ("timezone", update.timezone.clone()),
                ("comment", update.comment.clone()),
            ],
        )
    }

    fn delete_schedule(&mut self, schedule_id: &str) -> Result<Element, Error> {
        self.delete("delete_schedule", "schedule", schedule_id)
    }
}
