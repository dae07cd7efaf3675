// SPDX-License-Identifier: MPL-2.0
//! Text wrapping and per-monitor stacking.
//!
//! Both are pure functions of their inputs so the manager can rerun them on
//! every add and remove without keeping layout state of its own.

use crate::application::port::{TextMeasure, TextRole};
use iced::{Point, Rectangle, Size};

/// Appended to a message cut at the line cap.
pub const ELLIPSIS: char = '…';

/// A message as it will be displayed.
#[derive(Debug, Clone, PartialEq)]
pub struct WrappedText {
    /// Possibly shortened text, ending with [`ELLIPSIS`] when truncated.
    pub text: String,
    /// Number of wrapped lines, between 1 and the cap.
    pub lines: u32,
    pub line_height: f32,
    pub truncated: bool,
}

impl WrappedText {
    /// Height taken by the wrapped lines.
    #[must_use]
    pub fn height(&self) -> f32 {
        self.lines as f32 * self.line_height
    }
}

/// Wraps `message` at `max_width`, keeping at most `max_lines` lines.
///
/// Overflowing text is cut at the longest prefix that still fits once the
/// ellipsis is appended.
pub fn wrap_text(
    measure: &impl TextMeasure,
    message: &str,
    role: TextRole,
    max_width: f32,
    max_lines: u32,
) -> WrappedText {
    let max_lines = max_lines.max(1);
    let line_height = {
        let h = measure.measure_text("|", role, max_width).height;
        if h.is_finite() && h > 0.0 {
            h
        } else {
            1.0
        }
    };
    let count_lines = |text: &str| -> u32 {
        let height = measure.measure_text(text, role, max_width).height;
        ((height / line_height).ceil() as u32).max(1)
    };

    let lines = count_lines(message);
    if lines <= max_lines {
        return WrappedText {
            text: message.to_string(),
            lines,
            line_height,
            truncated: false,
        };
    }

    // Largest char count whose ellipsized prefix fits; 0 always "fits".
    let boundaries: Vec<usize> = message
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(message.len()))
        .collect();
    let ellipsized = |chars: usize| -> String {
        let mut text = message[..boundaries[chars]].trim_end().to_string();
        text.push(ELLIPSIS);
        text
    };

    let (mut low, mut high) = (0usize, boundaries.len() - 1);
    while low < high {
        let mid = (low + high).div_ceil(2);
        if count_lines(&ellipsized(mid)) <= max_lines {
            low = mid;
        } else {
            high = mid - 1;
        }
    }

    WrappedText {
        text: ellipsized(low),
        lines: max_lines,
        line_height,
        truncated: true,
    }
}

/// Positions for one monitor's stack, newest first.
///
/// Each window is anchored to the bottom-right corner of `work_area`, inset
/// by `spacing`; every following window sits `spacing` above the previous.
pub fn stack_positions<I>(work_area: Rectangle, sizes: I, spacing: f32) -> Vec<Point>
where
    I: IntoIterator<Item = Size>,
{
    let right = work_area.x + work_area.width;
    let bottom = work_area.y + work_area.height;
    let mut offset = spacing;

    sizes
        .into_iter()
        .map(|size| {
            let position = Point::new(
                right - size.width - spacing,
                bottom - size.height - offset,
            );
            offset += size.height + spacing;
            position
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::headless::FixedWidthText;
    use crate::test_utils::assert_abs_diff_eq;

    // 10px per char, 15px lines: 30 chars per 300px line.
    fn text() -> FixedWidthText {
        FixedWidthText::new(10.0, 15.0)
    }

    #[test]
    fn short_message_is_untouched() {
        let wrapped = wrap_text(&text(), "Operation completed successfully!", TextRole::Body, 300.0, 5);
        assert_eq!(wrapped.text, "Operation completed successfully!");
        assert_eq!(wrapped.lines, 2);
        assert!(!wrapped.truncated);
        assert_abs_diff_eq!(wrapped.height(), 30.0);
    }

    #[test]
    fn empty_message_takes_one_line() {
        let wrapped = wrap_text(&text(), "", TextRole::Body, 300.0, 5);
        assert_eq!(wrapped.lines, 1);
        assert!(!wrapped.truncated);
    }

    #[test]
    fn long_message_is_capped_and_ellipsized() {
        let message = "x".repeat(400);
        let wrapped = wrap_text(&text(), &message, TextRole::Body, 300.0, 5);

        assert!(wrapped.truncated);
        assert_eq!(wrapped.lines, 5);
        assert!(wrapped.text.ends_with(ELLIPSIS));
        // 150 chars fit in five lines, one of them is the ellipsis.
        assert_eq!(wrapped.text.chars().count(), 150);
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        let message = "é".repeat(200);
        let wrapped = wrap_text(&text(), &message, TextRole::Body, 300.0, 1);
        assert!(wrapped.truncated);
        assert_eq!(wrapped.text.chars().count(), 30);
    }

    #[test]
    fn stack_grows_upward_from_bottom_right() {
        let work_area = Rectangle::new(Point::new(0.0, 0.0), Size::new(1920.0, 1040.0));
        let sizes = [Size::new(380.0, 76.0), Size::new(380.0, 100.0)];

        let positions = stack_positions(work_area, sizes, 10.0);

        assert_eq!(positions[0], Point::new(1530.0, 954.0));
        assert_eq!(positions[1], Point::new(1530.0, 844.0));
    }

    #[test]
    fn stack_honours_work_area_origin() {
        let work_area = Rectangle::new(Point::new(1920.0, -200.0), Size::new(1280.0, 984.0));
        let positions = stack_positions(work_area, [Size::new(380.0, 76.0)], 10.0);
        assert_eq!(positions, vec![Point::new(2810.0, 698.0)]);
    }
}
