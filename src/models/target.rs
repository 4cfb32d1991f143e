// SPDX-FileCopyrightText: 2026 Greenbone AG
//
// SPDX-License-Identifier: GPL-2.0-or-later WITH x11vnc-openssl-exception

use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

use super::ResourceId;

/// A host name, IP address or range
pub type Host = String;

/// Fields of a new target
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetSpec {
    /// Name of the target
    pub name: String,
    /// List of hosts to scan
    pub hosts: Vec<Host>,
    #[serde(default)]
    /// Port list used for scanning
    pub port_list_id: Option<ResourceId>,
    #[serde(default)]
    /// Method used for alive testing
    pub alive_test: Option<AliveTest>,
    #[serde(default)]
    /// Comment on the target
    pub comment: Option<String>,
}

impl TargetSpec {
    /// Creates a target of hosts
    pub fn new<N, I, H>(name: N, hosts: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = H>,
        H: Into<Host>,
    {
        Self {
            name: name.into(),
            hosts: hosts.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    /// Sets the port list used for scanning
    pub fn with_port_list<S: Into<ResourceId>>(mut self, port_list_id: S) -> Self {
        self.port_list_id = Some(port_list_id.into());
        self
    }

    /// Sets the alive test method
    pub fn with_alive_test(mut self, alive_test: AliveTest) -> Self {
        self.alive_test = Some(alive_test);
        self
    }

    /// Sets the comment
    pub fn with_comment<S: Into<String>>(mut self, comment: S) -> Self {
        self.comment = Some(comment.into());
        self
    }
}

/// Changes of an existing target, None leaves a field untouched
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TargetUpdate {
    /// New name
    pub name: Option<String>,
    /// New hosts
    pub hosts: Option<Vec<Host>>,
    /// New port list
    pub port_list_id: Option<ResourceId>,
    /// New alive test method
    pub alive_test: Option<AliveTest>,
    /// New comment
    pub comment: Option<String>,
}

/// Alive test methods as named by GMP
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AliveTest {
    #[serde(rename = "Scan Config Default")]
    /// Use the method of the scan config
    ScanConfigDefault,
    #[serde(rename = "ICMP Ping")]
/// ICMP echo request
    Icmp,
    #[serde(rename = "TCP-ACK Service Ping")]
/// TCP ACK to known ports
    TcpAck,
    #[serde(rename = "TCP-SYN Service Ping")]
/// TCP SYN to known ports
    TcpSyn,
    #[serde(rename = "ARP Ping")]
/// ARP request
    Arp,
    #[serde(rename = "ICMP & TCP-ACK Service Ping")]
/// ICMP and TCP ACK
    IcmpTcpAck,
    #[serde(rename = "ICMP & ARP Ping")]
/// ICMP and ARP
    IcmpArp,
    #[serde(rename = "TCP-ACK Service & ARP Ping")]
/// TCP ACK and ARP
    TcpAckArp,
    #[serde(rename = "ICMP, TCP-ACK Service & ARP Ping")]
/// ICMP, TCP ACK and ARP
    IcmpTcpAckArp,
    #[serde(rename = "Consider Alive")]
/// Skip the alive test
    ConsiderAlive,
}

const ALIVE_TESTS: [AliveTest; 10] = [
    AliveTest::ScanConfigDefault,
    AliveTest::Icmp,
    AliveTest::TcpAck,
    AliveTest::TcpSyn,
    AliveTest::Arp,
    AliveTest::IcmpTcpAck,
    AliveTest::IcmpArp,
    AliveTest::TcpAckArp,
    AliveTest::IcmpTcpAckArp,
    AliveTest::ConsiderAlive,
];

impl AliveTest {
    /// Returns the name used within GMP
    pub fn as_str(&self) -> &'static str {
        match self {
            AliveTest::ScanConfigDefault => "Scan Config Default",
            AliveTest::Icmp => "ICMP Ping",
            AliveTest::TcpAck => "TCP-ACK Service Ping",
            AliveTest::TcpSyn => "TCP-SYN Service Ping",
            AliveTest::Arp => "ARP Ping",
            AliveTest::IcmpTcpAck => "ICMP & TCP-ACK Service Ping",
            AliveTest::IcmpArp => "ICMP & ARP Ping",
            AliveTest::TcpAckArp => "TCP-ACK Service & ARP Ping",
            AliveTest::IcmpTcpAckArp => "ICMP, TCP-ACK Service & ARP Ping",
            AliveTest::ConsiderAlive => "Consider Alive",
        }
    }
}

/// Error of parsing an [`AliveTest`]
#[derive(Debug, thiserror::Error)]
pub enum AliveTestError {
    #[error("Invalid value for AliveTest: {0}")]
    /// The name is not a known alive test
    InvalidValue(String),
}

impl FromStr for AliveTest {
    type Err = AliveTestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALIVE_TESTS
            .into_iter()
            .find(|a| a.as_str() == s)
            .ok_or_else(|| AliveTestError::InvalidValue(s.to_string()))
    }
}

impl Display for AliveTest {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
