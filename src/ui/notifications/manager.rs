// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` owns every live notification, grouped into one stack per
//! monitor, and the virtual clock their timers run on. Each add and remove
//! restacks the affected monitor so the newest toast sits in the
//! bottom-right corner and older ones are pushed up.

use super::layout::stack_positions;
use super::notification::{
    Notification, NotificationId, NotificationTimer, NotificationType, Transition,
};
use crate::application::port::{Monitor, MonitorId, WindowHost};
use crate::config::{Config, GeometryPolicy};
use crate::diagnostics::{CloseReason, DiagnosticEventKind, DiagnosticsCollector};
use crate::error::{Error, Result};
use crate::scheduler::Scheduler;
use iced::widget::image;
use iced::{Point, Subscription};
use std::collections::{BTreeMap, HashMap, VecDeque};
use std::time::{Duration, Instant};

/// Messages for notification state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Frame tick from [`Manager::subscription`].
    Tick(Instant),
    /// A toast was clicked anywhere inside its bounds.
    Clicked(NotificationId),
    /// The pointer entered (`true`) or left a toast.
    Hovered(NotificationId, bool),
    /// Close a specific notification by ID.
    Close(NotificationId),
}

/// Manages the per-monitor notification stacks.
#[derive(Debug)]
pub struct Manager<H: WindowHost> {
    host: H,
    config: Config,
    scheduler: Scheduler<NotificationTimer>,
    next_id: u64,
    /// Live notifications per monitor, newest first.
    stacks: HashMap<MonitorId, VecDeque<Notification>>,
    /// Monitor geometry used for placement.
    monitors: BTreeMap<MonitorId, Monitor>,
    diagnostics: DiagnosticsCollector,
    last_tick: Option<Instant>,
}

impl<H: WindowHost> Manager<H> {
    /// Creates an empty manager with default settings.
    #[must_use]
    pub fn new(host: H) -> Self {
        Self::with_config(host, Config::default())
    }

    #[must_use]
    pub fn with_config(host: H, config: Config) -> Self {
        Self {
            host,
            diagnostics: DiagnosticsCollector::new(config.diagnostics_capacity()),
            config,
            scheduler: Scheduler::new(),
            next_id: 0,
            stacks: HashMap::new(),
            monitors: BTreeMap::new(),
            last_tick: None,
        }
    }

    /// Shows a notification on the monitor under the pointer.
    ///
    /// `duration` defaults to the configured one and is ignored for
    /// persistent types. When the host fails, nothing is registered and the
    /// error is returned.
    pub fn show(
        &mut self,
        kind: NotificationType,
        title: impl Into<String>,
        message: impl Into<String>,
        duration: Option<Duration>,
        image: Option<image::Handle>,
    ) -> Result<NotificationId> {
        let pointer = self.host.pointer_position();
        let fresh = match self.host.monitor_at(pointer) {
            Ok(monitor) => monitor,
            Err(err) => {
                self.log(DiagnosticEventKind::ShowFailed {
                    message: err.to_string(),
                });
                return Err(Error::Host(err));
            }
        };
        let monitor = self.capture_monitor(fresh);

        let id = NotificationId::from_raw(self.next_id);
        self.next_id += 1;

        let duration = duration.unwrap_or_else(|| self.config.default_duration());
        let spec = kind.spec(title, message, duration, image);
        let notification = Notification::new(
            id,
            spec,
            &monitor,
            &self.host,
            &self.config,
            &mut self.scheduler,
        );
        let truncated = notification.is_truncated();

        let stack = self.stacks.entry(monitor.id.clone()).or_default();
        stack.push_front(notification);
        let positions = stack_positions(
            monitor.work_area,
            stack.iter().map(Notification::size),
            self.config.spacing(),
        );
        let newest = &mut stack[0];
        newest.set_position(positions[0]);

        if let Err(err) = self.host.open_window(id, &newest.window_spec()) {
            if let Some(mut failed) = stack.pop_front() {
                failed.close(&mut self.scheduler);
            }
            if stack.is_empty() {
                self.stacks.remove(&monitor.id);
            }
            self.log(DiagnosticEventKind::ShowFailed {
                message: err.to_string(),
            });
            return Err(Error::Host(err));
        }

        self.log(DiagnosticEventKind::Shown {
            id,
            kind,
            monitor: monitor.id.clone(),
            truncated,
        });
        self.restack(&monitor.id);
        self.start_clock();
        Ok(id)
    }

    /// Shows a green toast with the default duration.
    pub fn show_success(
        &mut self,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Result<NotificationId> {
        self.show(NotificationType::Success, title, message, None, None)
    }

    /// Shows a red toast with the default duration.
    pub fn show_error(
        &mut self,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Result<NotificationId> {
        self.show(NotificationType::Error, title, message, None, None)
    }

    /// Closes a notification immediately, without fading.
    ///
    /// Returns `false` if no live notification has this id.
    pub fn close_by_id(&mut self, id: NotificationId) -> bool {
        if self.remove(id, CloseReason::ById) {
            true
        } else {
            self.log(DiagnosticEventKind::CloseMissed { id });
            false
        }
    }

    /// Handles a click inside the toast `id`.
    pub fn click(&mut self, id: NotificationId) -> bool {
        self.remove(id, CloseReason::Clicked)
    }

    /// Handles a click at a screen position, closing the toast under it.
    pub fn click_at(&mut self, point: Point) -> Option<NotificationId> {
        let id = self
            .stacks
            .values()
            .flatten()
            .find(|n| n.contains(point))
            .map(Notification::id)?;
        self.click(id).then_some(id)
    }

    /// Starts the fade-out early. Returns false when not showing.
    pub fn fade_out(&mut self, id: NotificationId) -> bool {
        let Some(notification) = find_mut(&mut self.stacks, id) else {
            return false;
        };
        if !notification.begin_fade(&mut self.scheduler) {
            return false;
        }
        self.log(DiagnosticEventKind::FadeStarted { id });
        self.start_clock();
        true
    }

    /// Tracks the pointer over a toast. Returns true when its opacity changed.
    pub fn hover(&mut self, id: NotificationId, inside: bool) -> bool {
        let Some(opacity) =
            find_mut(&mut self.stacks, id).and_then(|n| n.set_hovered(inside))
        else {
            return false;
        };
        self.host.set_opacity(id, opacity);
        true
    }

    /// Moves the virtual clock forward, firing due timers in deadline order.
    ///
    /// Returns the ids of the notifications that finished fading.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<NotificationId> {
        let target = self.scheduler.now() + elapsed;
        let mut closed = Vec::new();

        while let Some(fired) = self.scheduler.fire_next(target) {
            let NotificationTimer { id, kind } = fired.payload;
            let Some(notification) = find_mut(&mut self.stacks, id) else {
                // Owner is gone; a repeating timer would otherwise fire forever.
                self.scheduler.cancel(fired.handle);
                continue;
            };

            match notification.on_timer(kind, &mut self.scheduler) {
                Transition::None => {}
                Transition::FadeStarted => self.log(DiagnosticEventKind::FadeStarted { id }),
                Transition::OpacityChanged(opacity) => self.host.set_opacity(id, opacity),
                Transition::Redraw => self.host.request_redraw(id),
                Transition::Closed => {
                    self.remove(id, CloseReason::Faded);
                    closed.push(id);
                }
            }
        }

        self.scheduler.settle(target);
        closed
    }

    /// Handles a notification message.
    pub fn update(&mut self, message: Message) {
        match message {
            Message::Tick(now) => {
                let elapsed = self
                    .last_tick
                    .map_or(Duration::ZERO, |last| now.saturating_duration_since(last));
                self.advance(elapsed);
                // Ticks stop with the subscription; restart from a fresh baseline.
                self.last_tick = (!self.scheduler.is_empty()).then_some(now);
            }
            Message::Clicked(id) => {
                self.click(id);
            }
            Message::Hovered(id, inside) => {
                self.hover(id, inside);
            }
            Message::Close(id) => {
                self.close_by_id(id);
            }
        }
    }

    /// Frame ticks while any timer is pending.
    pub fn subscription(&self) -> Subscription<Message> {
        if self.scheduler.is_empty() {
            Subscription::none()
        } else {
            let period = self
                .config
                .fade_interval()
                .min(self.config.spinner_interval());
            iced::time::every(period).map(Message::Tick)
        }
    }

    /// Closes every notification immediately.
    pub fn clear(&mut self) {
        let ids: Vec<NotificationId> = self
            .stacks
            .values()
            .flatten()
            .map(Notification::id)
            .collect();
        for id in ids {
            self.remove(id, CloseReason::Cleared);
        }
    }

    /// Re-reads the geometry of every known monitor and restacks the ones
    /// that changed, whatever the geometry policy.
    pub fn refresh_monitors(&mut self) {
        let probes: Vec<(MonitorId, Point)> = self
            .monitors
            .values()
            .map(|m| (m.id.clone(), m.work_area.center()))
            .collect();

        for (id, probe) in probes {
            let Ok(fresh) = self.host.monitor_at(probe) else {
                continue;
            };
            if fresh.id == id {
                self.update_monitor(fresh);
            }
        }
    }

    /// Anchors real time to the virtual clock when the first timer is armed,
    /// so the first tick of a new subscription counts from now.
    fn start_clock(&mut self) {
        if self.last_tick.is_none() && !self.scheduler.is_empty() {
            self.last_tick = Some(Instant::now());
        }
    }

    /// Applies the geometry policy to a monitor the host just reported.
    fn capture_monitor(&mut self, fresh: Monitor) -> Monitor {
        match self.monitors.get(&fresh.id) {
            None => {
                self.log(DiagnosticEventKind::MonitorCaptured {
                    monitor: fresh.id.clone(),
                    work_area: fresh.work_area,
                });
                self.monitors.insert(fresh.id.clone(), fresh.clone());
                fresh
            }
            Some(cached) if self.config.monitor_geometry() == GeometryPolicy::Cached => {
                cached.clone()
            }
            Some(_) => {
                self.update_monitor(fresh.clone());
                fresh
            }
        }
    }

    fn update_monitor(&mut self, fresh: Monitor) {
        let Some(cached) = self.monitors.get_mut(&fresh.id) else {
            return;
        };
        if *cached == fresh {
            return;
        }
        *cached = fresh.clone();
        self.log(DiagnosticEventKind::MonitorGeometryChanged {
            monitor: fresh.id.clone(),
            work_area: fresh.work_area,
        });
        self.restack(&fresh.id);
    }

    /// Recomputes positions on one monitor, moving windows that changed.
    fn restack(&mut self, monitor: &MonitorId) {
        let (Some(geometry), Some(stack)) =
            (self.monitors.get(monitor), self.stacks.get_mut(monitor))
        else {
            return;
        };
        let positions = stack_positions(
            geometry.work_area,
            stack.iter().map(Notification::size),
            self.config.spacing(),
        );
        for (notification, position) in stack.iter_mut().zip(positions) {
            if notification.position() != position {
                notification.set_position(position);
                self.host.move_window(notification.id(), position);
            }
        }
    }

    /// Deregisters a notification, closes its window and restacks its monitor.
    fn remove(&mut self, id: NotificationId, reason: CloseReason) -> bool {
        let Some((monitor, index)) = self.stacks.iter().find_map(|(monitor, stack)| {
            stack
                .iter()
                .position(|n| n.id() == id)
                .map(|index| (monitor.clone(), index))
        }) else {
            return false;
        };

        let Some(stack) = self.stacks.get_mut(&monitor) else {
            return false;
        };
        if let Some(mut notification) = stack.remove(index) {
            notification.close(&mut self.scheduler);
        }
        if stack.is_empty() {
            self.stacks.remove(&monitor);
        }

        self.host.close_window(id);
        self.log(DiagnosticEventKind::Closed { id, reason });
        self.restack(&monitor);
        true
    }

    fn log(&mut self, kind: DiagnosticEventKind) {
        self.diagnostics.log(self.scheduler.now(), kind);
    }

    // =========================================================================
    // Queries
    // =========================================================================

    #[must_use]
    pub fn get(&self, id: NotificationId) -> Option<&Notification> {
        self.stacks.values().flatten().find(|n| n.id() == id)
    }

    /// One monitor's notifications, newest first.
    pub fn stack(&self, monitor: &MonitorId) -> impl Iterator<Item = &Notification> {
        self.stacks.get(monitor).into_iter().flatten()
    }

    /// Every live notification, in no particular order.
    pub fn notifications(&self) -> impl Iterator<Item = &Notification> {
        self.stacks.values().flatten()
    }

    /// Monitors seen so far, with the geometry used for placement.
    pub fn monitors(&self) -> impl Iterator<Item = &Monitor> {
        self.monitors.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.stacks.values().map(VecDeque::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stacks.is_empty()
    }

    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    #[must_use]
    pub fn diagnostics(&self) -> &DiagnosticsCollector {
        &self.diagnostics
    }

    /// Virtual clock reading.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.scheduler.now()
    }

    /// Number of armed timers (auto-close, fade and spinner).
    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.scheduler.len()
    }
}

fn find_mut(
    stacks: &mut HashMap<MonitorId, VecDeque<Notification>>,
    id: NotificationId,
) -> Option<&mut Notification> {
    stacks.values_mut().flatten().find(|n| n.id() == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::HostError;
    use crate::infrastructure::headless::{HeadlessHost, HostCall};
    use crate::ui::notifications::VisualState;
    use iced::{Rectangle, Size};

    fn manager() -> Manager<HeadlessHost> {
        Manager::new(HeadlessHost::single_monitor())
    }

    fn display() -> MonitorId {
        MonitorId::new("DISPLAY1")
    }

    fn show(manager: &mut Manager<HeadlessHost>, kind: NotificationType) -> NotificationId {
        manager
            .show(kind, "Title", "Message", None, None)
            .expect("show")
    }

    #[test]
    fn new_manager_is_empty() {
        let manager = manager();
        assert!(manager.is_empty());
        assert_eq!(manager.len(), 0);
        assert_eq!(manager.monitors().count(), 0);
    }

    #[test]
    fn ids_are_unique_and_increasing() {
        let mut manager = manager();
        let a = show(&mut manager, NotificationType::Standard);
        let b = show(&mut manager, NotificationType::Standard);
        manager.close_by_id(a);
        let c = show(&mut manager, NotificationType::Standard);
        assert!(a < b && b < c);
    }

    #[test]
    fn newest_is_at_the_bottom() {
        let mut manager = manager();
        let first = show(&mut manager, NotificationType::Standard);
        assert_eq!(
            manager.get(first).map(Notification::position),
            Some(Point::new(1530.0, 954.0))
        );

        let second = show(&mut manager, NotificationType::Standard);
        assert_eq!(
            manager.get(second).map(Notification::position),
            Some(Point::new(1530.0, 954.0))
        );
        assert_eq!(
            manager.get(first).map(Notification::position),
            Some(Point::new(1530.0, 868.0))
        );
        assert_eq!(
            manager.host().window(first).map(|w| w.position),
            Some(Point::new(1530.0, 868.0))
        );
    }

    #[test]
    fn close_by_id_restacks_and_reports_misses() {
        let mut manager = manager();
        let first = show(&mut manager, NotificationType::Persistent);
        let second = show(&mut manager, NotificationType::Persistent);

        assert!(manager.close_by_id(second));
        assert!(!manager.close_by_id(second));
        assert_eq!(
            manager.get(first).map(Notification::position),
            Some(Point::new(1530.0, 954.0))
        );
        assert_eq!(
            manager.diagnostics().close_reason(second),
            Some(CloseReason::ById)
        );
        assert!(manager
            .diagnostics()
            .iter()
            .any(|e| e.kind == DiagnosticEventKind::CloseMissed { id: second }));
    }

    #[test]
    fn standard_toast_fades_then_closes() {
        let mut manager = manager();
        let id = show(&mut manager, NotificationType::Standard);

        assert!(manager.advance(Duration::from_millis(3000)).is_empty());
        assert_eq!(
            manager.get(id).map(Notification::state),
            Some(VisualState::FadingOut)
        );

        assert!(manager.advance(Duration::from_millis(180)).is_empty());
        assert_eq!(manager.advance(Duration::from_millis(20)), vec![id]);
        assert!(manager.is_empty());
        assert_eq!(manager.host().open_count(), 0);
        assert_eq!(manager.pending_timers(), 0);
        assert_eq!(manager.diagnostics().close_reason(id), Some(CloseReason::Faded));
    }

    #[test]
    fn persistent_toast_never_fades() {
        let mut manager = manager();
        let id = show(&mut manager, NotificationType::Persistent);
        manager.advance(Duration::from_secs(3600));
        assert_eq!(
            manager.get(id).map(Notification::state),
            Some(VisualState::Showing)
        );
    }

    #[test]
    fn loading_toast_redraws_every_frame() {
        let mut manager = manager();
        let id = show(&mut manager, NotificationType::Loading);
        manager.advance(Duration::from_millis(240));
        assert_eq!(manager.host().window(id).map(|w| w.redraws), Some(10));
        assert_eq!(
            manager
                .get(id)
                .and_then(Notification::spinner)
                .map(|s| s.angle().degrees()),
            Some(40)
        );
    }

    #[test]
    fn click_closes_without_fade() {
        let mut manager = manager();
        let id = show(&mut manager, NotificationType::Standard);
        assert_eq!(manager.click_at(Point::new(1600.0, 1000.0)), Some(id));
        assert!(manager.get(id).is_none());
        assert_eq!(manager.click_at(Point::new(1600.0, 1000.0)), None);
        assert_eq!(manager.diagnostics().close_reason(id), Some(CloseReason::Clicked));
        assert!(!manager
            .host()
            .calls()
            .any(|call| matches!(call, HostCall::Opacity(..))));
    }

    #[test]
    fn host_failure_registers_nothing() {
        let mut manager = manager();
        manager.host_mut().fail_next_open("out of handles");
        let result = manager.show(NotificationType::Loading, "t", "m", None, None);

        assert!(matches!(
            result,
            Err(Error::Host(HostError::WindowCreation(_)))
        ));
        assert!(manager.is_empty());
        assert_eq!(manager.pending_timers(), 0);
    }

    #[test]
    fn no_monitor_is_an_error() {
        let mut manager = Manager::new(HeadlessHost::new());
        assert!(matches!(
            manager.show_success("t", "m"),
            Err(Error::Host(HostError::NoMonitor))
        ));
    }

    #[test]
    fn clear_closes_everything() {
        let mut manager = manager();
        let ids: Vec<_> = (0..3)
            .map(|_| show(&mut manager, NotificationType::Loading))
            .collect();
        manager.clear();
        assert!(manager.is_empty());
        assert_eq!(manager.pending_timers(), 0);
        for id in ids {
            assert_eq!(manager.diagnostics().close_reason(id), Some(CloseReason::Cleared));
        }
    }

    #[test]
    fn fade_out_starts_early_once() {
        let mut manager = manager();
        let id = show(&mut manager, NotificationType::Persistent);
        assert!(manager.fade_out(id));
        assert!(!manager.fade_out(id));
        assert_eq!(manager.advance(Duration::from_millis(200)), vec![id]);
    }

    #[test]
    fn refresh_policy_picks_up_new_work_area() {
        let mut manager = manager();
        let first = show(&mut manager, NotificationType::Persistent);

        let smaller = Rectangle::new(Point::ORIGIN, Size::new(1920.0, 1000.0));
        manager.host_mut().set_work_area(&display(), smaller);
        show(&mut manager, NotificationType::Persistent);

        // 1000 - 76 - 10 - 76 - 10
        assert_eq!(
            manager.get(first).map(Notification::position),
            Some(Point::new(1530.0, 828.0))
        );
    }

    #[test]
    fn cached_policy_ignores_new_work_area() {
        let config = Config {
            monitor_geometry: Some(GeometryPolicy::Cached),
            ..Config::default()
        };
        let mut manager = Manager::with_config(HeadlessHost::single_monitor(), config);
        show(&mut manager, NotificationType::Persistent);

        let smaller = Rectangle::new(Point::ORIGIN, Size::new(1920.0, 1000.0));
        manager.host_mut().set_work_area(&display(), smaller);
        let second = show(&mut manager, NotificationType::Persistent);

        assert_eq!(
            manager.get(second).map(Notification::position),
            Some(Point::new(1530.0, 954.0))
        );

        manager.refresh_monitors();
        assert_eq!(
            manager.get(second).map(Notification::position),
            Some(Point::new(1530.0, 914.0))
        );
    }

    #[test]
    fn hover_changes_opacity_when_enabled() {
        let config = Config {
            hover_opacity: Some(true),
            ..Config::default()
        };
        let mut manager = Manager::with_config(HeadlessHost::single_monitor(), config);
        let id = show(&mut manager, NotificationType::Standard);

        manager.update(Message::Hovered(id, true));
        assert_eq!(
            manager.host().window(id).map(|w| w.opacity.value()),
            Some(1.0)
        );
        assert!(!manager.hover(id, true));
    }

    #[test]
    fn tick_messages_drive_the_clock() {
        let mut manager = manager();
        let id = show(&mut manager, NotificationType::Standard);
        let start = Instant::now();

        manager.update(Message::Tick(start));
        assert!(manager.now() < Duration::from_millis(20));

        manager.update(Message::Tick(start + Duration::from_millis(3500)));
        assert!(manager.get(id).is_none());
        assert!(manager.now() >= Duration::from_millis(3500));
    }

    #[test]
    fn first_tick_counts_from_show() {
        let mut manager = manager();
        let id = show(&mut manager, NotificationType::Standard);
        let shown = Instant::now();

        manager.update(Message::Tick(shown + Duration::from_millis(20)));
        assert!(manager.now() >= Duration::from_millis(20));

        // 3000ms on screen plus ten 20ms fade steps.
        manager.update(Message::Tick(shown + Duration::from_millis(3200)));
        assert!(manager.get(id).is_none());
        assert_eq!(manager.diagnostics().close_reason(id), Some(CloseReason::Faded));
    }

    #[test]
    fn clock_baseline_waits_for_a_timer() {
        let mut manager = manager();
        let id = show(&mut manager, NotificationType::Persistent);
        assert!(manager.last_tick.is_none());

        assert!(manager.fade_out(id));
        let faded_at = Instant::now();
        assert!(manager.last_tick.is_some_and(|t| t <= faded_at));

        manager.update(Message::Tick(faded_at + Duration::from_millis(200)));
        assert!(manager.is_empty());
        assert!(manager.last_tick.is_none());
    }

    #[test]
    fn close_message_closes() {
        let mut manager = manager();
        let id = show(&mut manager, NotificationType::Persistent);
        manager.update(Message::Close(id));
        manager.update(Message::Clicked(id));
        assert!(manager.is_empty());
    }
}
