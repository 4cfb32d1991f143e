// SPDX-FileCopyrightText: 2026 Greenbone AG
//
// SPDX-License-Identifier: GPL-2.0-or-later WITH x11vnc-openssl-exception

//! Request data of GMP create and modify commands.
mod scan_config;
mod schedule;
mod target;
mod task;

pub use scan_config::*;
pub use schedule::*;
pub use target::*;
pub use task::*;

/// Opaque identifier of a resource as returned by the manager
pub type ResourceId = String;
