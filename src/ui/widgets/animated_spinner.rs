// SPDX-License-Identifier: MPL-2.0
//! Circular loading indicator: a ring of dots whose opacity fades around the
//! circle, rotated a few degrees per frame to give a spinning-tail effect.
//!
//! [`Spinner`] is the animation state driven by the engine's scheduler;
//! [`Spinner::view`] turns the current frame into an Iced `Canvas`.

use crate::config::Config;
use crate::domain::ui::SpinnerAngle;
use crate::scheduler::{Scheduler, TimerHandle};
use crate::ui::design_tokens::{palette, sizing};
use iced::widget::canvas::{self, Canvas, Frame, Geometry, Path};
use iced::{mouse, Color, Length, Point, Rectangle, Renderer, Size, Theme};
use std::f32::consts::TAU;
use std::time::Duration;

/// One dot of a spinner frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dot {
    pub center: Point,
    pub radius: f32,
    pub color: Color,
}

/// Animation state of a loading indicator.
#[derive(Debug, Clone, PartialEq)]
pub struct Spinner {
    angle: SpinnerAngle,
    step_degrees: u16,
    interval: Duration,
    dot_count: u8,
    color: Color,
    /// Side of the square the spinner is drawn in.
    size: f32,
    timer: Option<TimerHandle>,
}

impl Spinner {
    /// Creates a stopped spinner at angle zero.
    #[must_use]
    pub fn new(dot_count: u8, step_degrees: u16, interval: Duration) -> Self {
        Self {
            angle: SpinnerAngle::ZERO,
            step_degrees: step_degrees % 360,
            interval,
            dot_count: dot_count.max(1),
            color: palette::DARK_GRAY,
            size: sizing::SPINNER,
            timer: None,
        }
    }

    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.spinner_dots(),
            config.spinner_step_degrees(),
            config.spinner_interval(),
        )
    }

    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Scales the drawing square for the monitor's DPI.
    #[must_use]
    pub fn with_scale(mut self, scale: f32) -> Self {
        self.size = sizing::SPINNER * scale;
        self
    }

    /// Arms the frame timer. Starting a running spinner does nothing.
    pub fn start<T: Clone>(&mut self, scheduler: &mut Scheduler<T>, payload: T) {
        if self.timer.is_none() {
            self.timer = Some(scheduler.schedule_repeating(self.interval, payload));
        }
    }

    /// Cancels the frame timer. Stopping a stopped spinner does nothing.
    pub fn stop<T>(&mut self, scheduler: &mut Scheduler<T>) {
        if let Some(handle) = self.timer.take() {
            scheduler.cancel(handle);
        }
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.timer.is_some()
    }

    /// Moves one frame forward. Returns true when a repaint is needed.
    pub fn advance(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        self.angle = self.angle.advance(self.step_degrees);
        true
    }

    #[must_use]
    pub fn angle(&self) -> SpinnerAngle {
        self.angle
    }

    #[must_use]
    pub fn size(&self) -> f32 {
        self.size
    }

    /// Per-dot opacity, faintest first, fully opaque last.
    #[must_use]
    pub fn dot_alphas(&self) -> Vec<f32> {
        let count = u32::from(self.dot_count);
        let decrement = 255 / count;
        (0..count)
            .rev()
            .map(|i| (255 - decrement * i) as f32 / 255.0)
            .collect()
    }

    /// Dots of the current frame inside a `bounds`-sized square.
    #[must_use]
    pub fn dots(&self, bounds: Size) -> Vec<Dot> {
        let side = bounds.width.min(bounds.height);
        let dot_size = sizing::SPINNER_DOT * side / sizing::SPINNER;
        let path_radius = (side / 2.0 - dot_size * 2.0).max(0.0);
        let center = Point::new(bounds.width / 2.0, bounds.height / 2.0);
        let spacing = TAU / f32::from(self.dot_count);

        self.dot_alphas()
            .into_iter()
            .enumerate()
            .map(|(i, alpha)| {
                #[allow(clippy::cast_precision_loss)] // i < 256
                let angle = self.angle.radians() + spacing * i as f32;
                Dot {
                    center: Point::new(
                        center.x + path_radius * angle.cos(),
                        center.y + path_radius * angle.sin(),
                    ),
                    radius: dot_size / 2.0,
                    color: Color {
                        a: self.color.a * alpha,
                        ..self.color
                    },
                }
            })
            .collect()
    }

    /// Creates a Canvas widget drawing the current frame.
    pub fn view<Message: 'static>(&self) -> iced::Element<'static, Message> {
        let size = self.size;
        Canvas::new(SpinnerCanvas { spinner: self.clone() })
        .width(Length::Fixed(size))
        .height(Length::Fixed(size))
        .into()
    }
}

/// Every frame has a new angle, so geometry is rebuilt on each draw.
struct SpinnerCanvas {
    spinner: Spinner,
}

impl<Message> canvas::Program<Message> for SpinnerCanvas {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        for dot in self.spinner.dots(frame.size()) {
            frame.fill(&Path::circle(dot.center, dot.radius), dot.color);
        }

        vec![frame.into_geometry()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    fn spinner() -> Spinner {
        Spinner::new(8, 4, Duration::from_millis(24))
    }

    #[test]
    fn running_spinner_advances_four_degrees_per_tick() {
        let mut scheduler = Scheduler::new();
        let mut spinner = spinner();
        spinner.start(&mut scheduler, ());

        for _ in scheduler.drain_until(Duration::from_millis(24 * 10)) {
            assert!(spinner.advance());
        }
        assert_eq!(spinner.angle().degrees(), 40);
    }

    #[test]
    fn angle_wraps_after_full_turn() {
        let mut scheduler = Scheduler::new();
        let mut spinner = spinner();
        spinner.start(&mut scheduler, ());
        for _ in 0..91 {
            spinner.advance();
        }
        assert_eq!(spinner.angle().degrees(), 4);
    }

    #[test]
    fn stopped_spinner_does_not_advance() {
        let mut scheduler = Scheduler::new();
        let mut spinner = spinner();
        assert!(!spinner.advance());

        spinner.start(&mut scheduler, ());
        spinner.stop(&mut scheduler);
        spinner.stop(&mut scheduler);

        assert!(!spinner.advance());
        assert!(scheduler.is_empty());
        assert_eq!(spinner.angle(), SpinnerAngle::ZERO);
    }

    #[test]
    fn start_is_idempotent() {
        let mut scheduler = Scheduler::new();
        let mut spinner = spinner();
        spinner.start(&mut scheduler, ());
        spinner.start(&mut scheduler, ());
        assert_eq!(scheduler.len(), 1);
    }

    #[test]
    fn alphas_graduate_to_opaque() {
        let alphas = spinner().dot_alphas();
        assert_eq!(alphas.len(), 8);
        assert_abs_diff_eq!(alphas[7], 1.0);
        assert_abs_diff_eq!(alphas[0], 38.0 / 255.0);
        assert!(alphas.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn dots_are_evenly_spaced_on_the_path() {
        let dots = spinner().dots(Size::new(64.0, 64.0));
        assert_eq!(dots.len(), 8);

        // radius 64/2 - 2*8 = 16 around (32, 32)
        for dot in &dots {
            let dx = dot.center.x - 32.0;
            let dy = dot.center.y - 32.0;
            assert_abs_diff_eq!((dx * dx + dy * dy).sqrt(), 16.0, epsilon = 1e-3);
            assert_abs_diff_eq!(dot.radius, 4.0);
        }
        assert_abs_diff_eq!(dots[0].center.x, 48.0, epsilon = 1e-3);
        assert_abs_diff_eq!(dots[2].center.y, 48.0, epsilon = 1e-3);
    }

    #[test]
    fn each_frame_draws_at_the_current_angle() {
        let mut scheduler = Scheduler::new();
        let mut spinner = spinner();
        spinner.start(&mut scheduler, ());
        let bounds = Size::new(64.0, 64.0);
        let before = spinner.dots(bounds);

        assert!(spinner.advance());
        let after = spinner.dots(bounds);
        assert_ne!(before, after);

        let turn = 4.0_f32.to_radians();
        assert_abs_diff_eq!(after[0].center.x, 32.0 + 16.0 * turn.cos(), epsilon = 1e-3);
        assert_abs_diff_eq!(after[0].center.y, 32.0 + 16.0 * turn.sin(), epsilon = 1e-3);
        assert_eq!(before[0].color, after[0].color);
    }
}
