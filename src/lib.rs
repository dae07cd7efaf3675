// SPDX-License-Identifier: MPL-2.0
//! `iced_toasts` shows desktop toast notifications for Iced applications.
//!
//! Toasts open in their own popup windows on the monitor under the pointer,
//! stack upward from the bottom-right corner, and fade out on a virtual
//! clock the host advances. The windowing toolkit sits behind the
//! [`WindowHost`](application::port::WindowHost) port; a headless host is
//! provided for tests and embedders that paint toasts themselves.

#![doc(html_root_url = "https://docs.rs/iced_toasts/0.1.0")]

pub mod application;
pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod scheduler;
pub mod ui;

#[cfg(test)]
mod test_utils;
