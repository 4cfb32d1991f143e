// SPDX-FileCopyrightText: 2026 Greenbone AG
//
// SPDX-License-Identifier: GPL-2.0-or-later WITH x11vnc-openssl-exception

#![doc = include_str!("../README.md")]
#![warn(missing_docs)]
pub mod config;
pub mod convert;
pub mod element;
mod error;
pub mod filter;
mod gvm;
pub mod models;
mod protocol;
mod report;
mod response;

pub use config::{Config, ConfigError, Credentials, Defaults, Logging};
pub use element::Element;
pub use error::{Error, ParseError};
pub use filter::{Filter, FilterValue};
pub use gvm::Gvm;
pub use protocol::GmpProtocol;
pub use report::{Report, XML_CONTENT_TYPE};
pub use response::{Conversion, Response, Status};
