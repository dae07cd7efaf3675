// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` struct, its `NotificationType`
//! presets, and the timer payloads a notification arms on the manager's
//! scheduler.

use super::layout::{wrap_text, WrappedText};
use crate::application::port::{Monitor, MonitorId, TextMeasure, TextRole, WindowSpec};
use crate::config::Config;
use crate::domain::ui::Opacity;
use crate::scheduler::{Scheduler, TimerHandle};
use crate::ui::design_tokens::{palette, radius, sizing, spacing};
use crate::ui::widgets::Spinner;
use iced::widget::image;
use iced::{Color, Point, Rectangle, Size};
use serde::Serialize;
use std::fmt;
use std::time::Duration;

/// Unique identifier for a notification.
///
/// Allocated by the manager from a counter that only goes up, so an id is
/// never handed out twice by the same manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct NotificationId(u64);

impl NotificationId {
    #[must_use]
    pub const fn from_raw(value: u64) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Preset that decides the loader, persistence and background of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationType {
    /// Dark toast that fades out after its duration.
    #[default]
    Standard,
    /// Dark toast with a spinner, stays until closed.
    Loading,
    /// Dark toast that stays until closed.
    Persistent,
    /// Red toast that fades out after its duration.
    Error,
    /// Green toast that fades out after its duration.
    Success,
}

impl NotificationType {
    #[must_use]
    pub fn shows_loader(self) -> bool {
        matches!(self, NotificationType::Loading)
    }

    #[must_use]
    pub fn is_persistent(self) -> bool {
        matches!(self, NotificationType::Loading | NotificationType::Persistent)
    }

    #[must_use]
    pub fn background(self) -> Color {
        match self {
            NotificationType::Success => palette::SUCCESS,
            NotificationType::Error => palette::ERROR,
            NotificationType::Standard | NotificationType::Loading | NotificationType::Persistent => {
                palette::DEFAULT_BACKGROUND
            }
        }
    }

    /// Resolves this preset into a full construction request.
    #[must_use]
    pub fn spec(
        self,
        title: impl Into<String>,
        message: impl Into<String>,
        duration: Duration,
        image: Option<image::Handle>,
    ) -> NotificationSpec {
        NotificationSpec {
            title: title.into(),
            message: message.into(),
            duration,
            show_loader: self.shows_loader(),
            image,
            background: self.background(),
            persistent: self.is_persistent(),
        }
    }
}

/// Everything needed to build a notification, independent of its monitor.
#[derive(Debug, Clone)]
pub struct NotificationSpec {
    pub title: String,
    pub message: String,
    /// Time on screen before the fade starts. Ignored when persistent.
    pub duration: Duration,
    pub show_loader: bool,
    pub image: Option<image::Handle>,
    pub background: Color,
    pub persistent: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisualState {
    Showing,
    FadingOut,
    Closed,
}

/// What is drawn to the left of the text.
#[derive(Debug, Clone)]
pub enum Graphic {
    None,
    Image(image::Handle),
    Spinner(Spinner),
}

/// Which of a notification's timers fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    AutoClose,
    FadeTick,
    SpinnerFrame,
}

/// Scheduler payload routing a timer back to its notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationTimer {
    pub id: NotificationId,
    pub kind: TimerKind,
}

/// Effect of a timer on a notification, for the manager to forward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transition {
    /// Stale timer or nothing visible changed.
    None,
    FadeStarted,
    OpacityChanged(Opacity),
    Redraw,
    /// Fully faded; the manager must deregister it.
    Closed,
}

/// A toast on screen.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    monitor: MonitorId,
    title: WrappedText,
    message: WrappedText,
    size: Size,
    position: Point,
    opacity: Opacity,
    /// Opacity outside of hover and fade.
    resting_opacity: Opacity,
    hover_enabled: bool,
    hovered: bool,
    state: VisualState,
    persistent: bool,
    background: Color,
    graphic: Graphic,
    close_timer: Option<TimerHandle>,
    fade_timer: Option<TimerHandle>,
    fade_interval: Duration,
    fade_step: f32,
}

impl Notification {
    /// Measures the toast for `monitor`, picks its graphic and arms its
    /// auto-close timer (unless persistent) and spinner.
    ///
    /// The notification starts at the monitor's origin; the manager moves it
    /// into its stack slot.
    pub fn new(
        id: NotificationId,
        spec: NotificationSpec,
        monitor: &Monitor,
        measure: &impl TextMeasure,
        config: &Config,
        scheduler: &mut Scheduler<NotificationTimer>,
    ) -> Self {
        let scale = monitor.scale_factor;
        let text_width = sizing::MESSAGE_WIDTH * scale;
        let title = wrap_text(measure, &spec.title, TextRole::Title, text_width, 1);
        let message = wrap_text(
            measure,
            &spec.message,
            TextRole::Body,
            text_width,
            config.max_message_lines(),
        );

        let content_height =
            sizing::TITLE_HEIGHT * scale + message.height() + 2.0 * spacing::TOAST_PADDING * scale;
        let size = Size::new(
            sizing::TOAST_WIDTH * scale,
            content_height.max(sizing::TOAST_MIN_HEIGHT * scale),
        );

        let timer = |kind| NotificationTimer { id, kind };

        // An image always wins over the loader.
        let graphic = match (spec.image, spec.show_loader) {
            (Some(handle), _) => Graphic::Image(handle),
            (None, true) => {
                let mut spinner = Spinner::from_config(config).with_scale(scale);
                spinner.start(scheduler, timer(TimerKind::SpinnerFrame));
                Graphic::Spinner(spinner)
            }
            (None, false) => Graphic::None,
        };

        let close_timer = (!spec.persistent)
            .then(|| scheduler.schedule_once(spec.duration, timer(TimerKind::AutoClose)));

        let hover_enabled = config.hover_opacity();
        let resting_opacity = if hover_enabled {
            Opacity::new(crate::config::HOVER_RESTING_OPACITY)
        } else {
            Opacity::OPAQUE
        };

        Self {
            id,
            monitor: monitor.id.clone(),
            title,
            message,
            size,
            position: monitor.work_area.position(),
            opacity: resting_opacity,
            resting_opacity,
            hover_enabled,
            hovered: false,
            state: VisualState::Showing,
            persistent: spec.persistent,
            background: spec.background,
            graphic,
            close_timer,
            fade_timer: None,
            fade_interval: config.fade_interval(),
            fade_step: config.fade_step(),
        }
    }

    /// Applies one of this notification's timers.
    pub fn on_timer(
        &mut self,
        kind: TimerKind,
        scheduler: &mut Scheduler<NotificationTimer>,
    ) -> Transition {
        match kind {
            TimerKind::AutoClose => {
                self.close_timer = None;
                if self.begin_fade(scheduler) {
                    Transition::FadeStarted
                } else {
                    Transition::None
                }
            }
            TimerKind::FadeTick => self.fade_tick(scheduler),
            TimerKind::SpinnerFrame => match &mut self.graphic {
                Graphic::Spinner(spinner) => {
                    if spinner.advance() {
                        Transition::Redraw
                    } else {
                        Transition::None
                    }
                }
                _ => Transition::None,
            },
        }
    }

    /// Starts the fade-out. Returns false when already fading or closed.
    pub fn begin_fade(&mut self, scheduler: &mut Scheduler<NotificationTimer>) -> bool {
        if self.state != VisualState::Showing {
            return false;
        }
        if let Some(handle) = self.close_timer.take() {
            scheduler.cancel(handle);
        }
        self.state = VisualState::FadingOut;
        self.fade_timer = Some(scheduler.schedule_repeating(
            self.fade_interval,
            NotificationTimer {
                id: self.id,
                kind: TimerKind::FadeTick,
            },
        ));
        true
    }

    fn fade_tick(&mut self, scheduler: &mut Scheduler<NotificationTimer>) -> Transition {
        if self.state != VisualState::FadingOut {
            return Transition::None;
        }
        self.opacity = self.opacity.fade(self.fade_step);
        if self.opacity.is_transparent() {
            self.close(scheduler);
            Transition::Closed
        } else {
            Transition::OpacityChanged(self.opacity)
        }
    }

    /// Closes immediately, cancelling every timer this notification owns.
    ///
    /// Returns false when it was already closed.
    pub fn close(&mut self, scheduler: &mut Scheduler<NotificationTimer>) -> bool {
        if self.state == VisualState::Closed {
            return false;
        }
        for handle in [self.close_timer.take(), self.fade_timer.take()]
            .into_iter()
            .flatten()
        {
            scheduler.cancel(handle);
        }
        if let Graphic::Spinner(spinner) = &mut self.graphic {
            spinner.stop(scheduler);
        }
        self.state = VisualState::Closed;
        true
    }

    /// Tracks the pointer entering or leaving the toast.
    ///
    /// Returns the new opacity when it changed.
    pub fn set_hovered(&mut self, hovered: bool) -> Option<Opacity> {
        if !self.hover_enabled || self.state != VisualState::Showing || self.hovered == hovered {
            return None;
        }
        self.hovered = hovered;
        self.opacity = if hovered {
            Opacity::OPAQUE
        } else {
            self.resting_opacity
        };
        Some(self.opacity)
    }

    pub(crate) fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    /// What the host needs to open this toast's window.
    #[must_use]
    pub fn window_spec(&self) -> WindowSpec {
        WindowSpec {
            bounds: self.bounds(),
            background: self.background,
            corner_radius: radius::TOAST,
            opacity: self.opacity,
        }
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn monitor(&self) -> &MonitorId {
        &self.monitor
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title.text
    }

    /// Message as displayed, possibly ellipsized.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message.text
    }

    #[must_use]
    pub fn message_lines(&self) -> u32 {
        self.message.lines
    }

    #[must_use]
    pub fn is_truncated(&self) -> bool {
        self.message.truncated
    }

    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    #[must_use]
    pub fn position(&self) -> Point {
        self.position
    }

    #[must_use]
    pub fn bounds(&self) -> Rectangle {
        Rectangle::new(self.position, self.size)
    }

    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        self.bounds().contains(point)
    }

    #[must_use]
    pub fn opacity(&self) -> Opacity {
        self.opacity
    }

    #[must_use]
    pub fn state(&self) -> VisualState {
        self.state
    }

    #[must_use]
    pub fn is_persistent(&self) -> bool {
        self.persistent
    }

    #[must_use]
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    #[must_use]
    pub fn background(&self) -> Color {
        self.background
    }

    #[must_use]
    pub fn graphic(&self) -> &Graphic {
        &self.graphic
    }

    #[must_use]
    pub fn spinner(&self) -> Option<&Spinner> {
        match &self.graphic {
            Graphic::Spinner(spinner) => Some(spinner),
            _ => None,
        }
    }

    /// Whether the auto-close timer is still pending.
    #[must_use]
    pub fn has_close_timer(&self) -> bool {
        self.close_timer.is_some()
    }
}
