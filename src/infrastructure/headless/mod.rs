// SPDX-License-Identifier: MPL-2.0
//! Headless window host.
//!
//! Keeps every "window" as a plain record and logs the calls it receives, so
//! the full lifecycle can be asserted without a display server. The call log
//! keeps the most recent [`CALL_LOG_CAPACITY`] entries. Monitors and
//! the pointer are scripted by the caller; text is measured with a fixed
//! advance per character.

use crate::application::port::{
    HostError, Monitor, MonitorId, TextMeasure, TextRole, WindowHost, WindowSpec,
};
use crate::diagnostics::CircularBuffer;
use crate::domain::ui::Opacity;
use crate::ui::notifications::NotificationId;
use iced::{Point, Rectangle, Size};
use std::collections::BTreeMap;

// =============================================================================
// FixedWidthText
// =============================================================================

/// Monospace text metrics: every char advances the same width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedWidthText {
    char_width: f32,
    line_height: f32,
}

impl FixedWidthText {
    #[must_use]
    pub fn new(char_width: f32, line_height: f32) -> Self {
        Self {
            char_width: char_width.max(0.1),
            line_height: line_height.max(0.1),
        }
    }
}

impl Default for FixedWidthText {
    /// Roughly Tahoma 9.75pt at 96 DPI.
    fn default() -> Self {
        Self::new(7.0, 16.0)
    }
}

impl TextMeasure for FixedWidthText {
    fn measure_text(&self, text: &str, role: TextRole, max_width: f32) -> Size {
        let char_width = match role {
            TextRole::Title => self.char_width * 1.15,
            TextRole::Body => self.char_width,
        };
        let per_line = ((max_width / char_width).floor() as usize).max(1);
        let chars = text.chars().count();
        let lines = chars.div_ceil(per_line).max(1);
        let width = (chars.min(per_line) as f32 * char_width).min(max_width);
        Size::new(width, lines as f32 * self.line_height)
    }
}

// =============================================================================
// HeadlessHost
// =============================================================================

/// Host calls kept before the oldest are dropped. A spinner redraws about
/// forty times a second, so an unbounded log would grow for as long as a
/// loading toast is up.
pub const CALL_LOG_CAPACITY: usize = 1024;

/// A call received by the host, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum HostCall {
    Open(NotificationId),
    Move(NotificationId, Point),
    Opacity(NotificationId, Opacity),
    Redraw(NotificationId),
    Close(NotificationId),
}

/// Last known state of an open window.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowState {
    pub spec: WindowSpec,
    pub position: Point,
    pub opacity: Opacity,
    pub redraws: u32,
}

impl WindowState {
    #[must_use]
    pub fn bounds(&self) -> Rectangle {
        Rectangle::new(self.position, self.spec.bounds.size())
    }
}

#[derive(Debug, Clone)]
pub struct HeadlessHost {
    text: FixedWidthText,
    monitors: Vec<Monitor>,
    pointer: Point,
    windows: BTreeMap<NotificationId, WindowState>,
    calls: CircularBuffer<HostCall>,
    open_failure: Option<String>,
}

impl Default for HeadlessHost {
    fn default() -> Self {
        Self {
            text: FixedWidthText::default(),
            monitors: Vec::new(),
            pointer: Point::ORIGIN,
            windows: BTreeMap::new(),
            calls: CircularBuffer::with_raw_capacity(CALL_LOG_CAPACITY),
            open_failure: None,
        }
    }
}

impl HeadlessHost {
    /// A host with no monitors; add some with [`HeadlessHost::with_monitor`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A host with one 1920x1080 monitor whose work area ends above a 40px
    /// taskbar, pointer in the middle.
    #[must_use]
    pub fn single_monitor() -> Self {
        Self::new()
            .with_monitor(Monitor::new(
                "DISPLAY1",
                Rectangle::new(Point::ORIGIN, Size::new(1920.0, 1040.0)),
            ))
            .with_pointer(Point::new(960.0, 540.0))
    }

    #[must_use]
    pub fn with_monitor(mut self, monitor: Monitor) -> Self {
        self.monitors.push(monitor);
        self
    }

    #[must_use]
    pub fn with_pointer(mut self, pointer: Point) -> Self {
        self.pointer = pointer;
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: FixedWidthText) -> Self {
        self.text = text;
        self
    }

    pub fn set_pointer(&mut self, pointer: Point) {
        self.pointer = pointer;
    }

    /// Simulates a resolution or taskbar change on one monitor.
    ///
    /// Returns false when no monitor has that id.
    pub fn set_work_area(&mut self, id: &MonitorId, work_area: Rectangle) -> bool {
        match self.monitors.iter_mut().find(|m| &m.id == id) {
            Some(monitor) => {
                monitor.work_area = work_area;
                true
            }
            None => false,
        }
    }

    /// Makes the next `open_window` call fail with `message`.
    pub fn fail_next_open(&mut self, message: impl Into<String>) {
        self.open_failure = Some(message.into());
    }

    #[must_use]
    pub fn window(&self, id: NotificationId) -> Option<&WindowState> {
        self.windows.get(&id)
    }

    /// Open windows by id.
    pub fn windows(&self) -> impl Iterator<Item = (&NotificationId, &WindowState)> {
        self.windows.iter()
    }

    #[must_use]
    pub fn open_count(&self) -> usize {
        self.windows.len()
    }

    /// Logged calls, oldest first.
    pub fn calls(&self) -> impl DoubleEndedIterator<Item = &HostCall> {
        self.calls.iter()
    }

    /// Calls that fell out of the log since the last [`Self::clear_calls`].
    #[must_use]
    pub fn dropped_calls(&self) -> u64 {
        self.calls.evicted()
    }

    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }
}

impl TextMeasure for HeadlessHost {
    fn measure_text(&self, text: &str, role: TextRole, max_width: f32) -> Size {
        self.text.measure_text(text, role, max_width)
    }
}

impl WindowHost for HeadlessHost {
    fn pointer_position(&self) -> Point {
        self.pointer
    }

    fn monitor_at(&self, point: Point) -> Result<Monitor, HostError> {
        // Off-screen points resolve to the nearest monitor, like the desktop does.
        let distance = |area: &Rectangle| {
            let dx = (area.x - point.x).max(point.x - (area.x + area.width)).max(0.0);
            let dy = (area.y - point.y).max(point.y - (area.y + area.height)).max(0.0);
            dx * dx + dy * dy
        };

        self.monitors
            .iter()
            .find(|m| m.work_area.contains(point))
            .or_else(|| {
                self.monitors.iter().min_by(|a, b| {
                    distance(&a.work_area).total_cmp(&distance(&b.work_area))
                })
            })
            .cloned()
            .ok_or(HostError::NoMonitor)
    }

    fn open_window(&mut self, id: NotificationId, spec: &WindowSpec) -> Result<(), HostError> {
        if let Some(message) = self.open_failure.take() {
            return Err(HostError::WindowCreation(message));
        }
        self.windows.insert(
            id,
            WindowState {
                spec: spec.clone(),
                position: spec.bounds.position(),
                opacity: spec.opacity,
                redraws: 0,
            },
        );
        self.calls.push(HostCall::Open(id));
        Ok(())
    }

    fn move_window(&mut self, id: NotificationId, position: Point) {
        if let Some(window) = self.windows.get_mut(&id) {
            window.position = position;
        }
        self.calls.push(HostCall::Move(id, position));
    }

    fn set_opacity(&mut self, id: NotificationId, opacity: Opacity) {
        if let Some(window) = self.windows.get_mut(&id) {
            window.opacity = opacity;
        }
        self.calls.push(HostCall::Opacity(id, opacity));
    }

    fn request_redraw(&mut self, id: NotificationId) {
        if let Some(window) = self.windows.get_mut(&id) {
            window.redraws += 1;
        }
        self.calls.push(HostCall::Redraw(id));
    }

    fn close_window(&mut self, id: NotificationId) {
        self.windows.remove(&id);
        self.calls.push(HostCall::Close(id));
    }
}
