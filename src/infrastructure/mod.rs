// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`.
//!
//! # Available Adapters
//!
//! - [`headless`]: In-memory host with scripted monitors and pointer
//!   (implements [`WindowHost`]); used by tests, benchmarks, and embedders
//!   that paint toasts themselves
//!
//! [`WindowHost`]: crate::application::port::WindowHost

pub mod headless;

// Re-export main types for convenience
pub use headless::{FixedWidthText, HeadlessHost, HostCall, WindowState, CALL_LOG_CAPACITY};
