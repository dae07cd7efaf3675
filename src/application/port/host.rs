// SPDX-License-Identifier: MPL-2.0
//! Windowing host port definition.
//!
//! This module defines the [`WindowHost`] trait the notification manager
//! drives, and the [`TextMeasure`] capability a notification needs to size
//! itself.
//!
//! # Design Notes
//!
//! - One popup window per notification, addressed by [`NotificationId`]
//! - The host owns painting; the engine only tells it where, how big and how
//!   opaque each window is, and when it needs a repaint
//! - Timers are not part of the port: the engine keeps its own virtual clock

use crate::domain::ui::Opacity;
use crate::ui::notifications::NotificationId;
use iced::{Color, Point, Rectangle, Size};
use serde::Serialize;
use std::fmt;

// =============================================================================
// HostError
// =============================================================================

/// Failures reported by the windowing host.
///
/// These are fatal for the operation that hit them; the engine never retries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostError {
    /// No monitor could be resolved for the pointer position.
    NoMonitor,

    /// The host refused to create a popup window (out of handles, etc.)
    WindowCreation(String),
}

impl fmt::Display for HostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostError::NoMonitor => write!(f, "No monitor found under the pointer"),
            HostError::WindowCreation(msg) => write!(f, "Window creation failed: {msg}"),
        }
    }
}

impl std::error::Error for HostError {}

// =============================================================================
// Monitor
// =============================================================================

/// Stable name of a display, as reported by the host (device name).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct MonitorId(String);

impl MonitorId {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MonitorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A display and the part of it available to popups.
#[derive(Debug, Clone, PartialEq)]
pub struct Monitor {
    pub id: MonitorId,
    /// Screen area minus taskbars and docks, in physical pixels.
    pub work_area: Rectangle,
    /// DPI scale relative to 96 DPI.
    pub scale_factor: f32,
}

impl Monitor {
    #[must_use]
    pub fn new(id: impl Into<String>, work_area: Rectangle) -> Self {
        Self {
            id: MonitorId::new(id),
            work_area,
            scale_factor: 1.0,
        }
    }

    #[must_use]
    pub fn with_scale_factor(mut self, scale_factor: f32) -> Self {
        self.scale_factor = if scale_factor.is_finite() && scale_factor > 0.0 {
            scale_factor
        } else {
            1.0
        };
        self
    }
}

// =============================================================================
// Text measurement
// =============================================================================

/// Which font a piece of toast text is set in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextRole {
    /// Bold, single line.
    Title,
    /// Regular, wrapped.
    Body,
}

/// Text layout capability.
pub trait TextMeasure {
    /// Size of `text` set in `role`'s font, wrapped at `max_width`.
    ///
    /// Height must be a whole number of lines; measuring `"|"` yields the
    /// height of a single line.
    fn measure_text(&self, text: &str, role: TextRole, max_width: f32) -> Size;
}

// =============================================================================
// WindowSpec
// =============================================================================

/// Everything the host needs to open a borderless, topmost popup.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowSpec {
    pub bounds: Rectangle,
    pub background: Color,
    /// Radius of the rounded-corner window region.
    pub corner_radius: f32,
    pub opacity: Opacity,
}

// =============================================================================
// WindowHost Trait
// =============================================================================

/// Port for the host windowing toolkit.
///
/// # Lifecycle
///
/// 1. `open_window` once per notification (may fail)
/// 2. any number of `move_window`, `set_opacity`, `request_redraw`
/// 3. `close_window` exactly once
pub trait WindowHost: TextMeasure {
    /// Current pointer position in virtual-screen coordinates.
    fn pointer_position(&self) -> Point;

    /// The monitor containing `point`, with its current work area.
    fn monitor_at(&self, point: Point) -> Result<Monitor, HostError>;

    fn open_window(&mut self, id: NotificationId, spec: &WindowSpec) -> Result<(), HostError>;

    fn move_window(&mut self, id: NotificationId, position: Point);

    fn set_opacity(&mut self, id: NotificationId, opacity: Opacity);

    /// The window's content changed (spinner frame).
    fn request_redraw(&mut self, id: NotificationId);

    fn close_window(&mut self, id: NotificationId);
}
