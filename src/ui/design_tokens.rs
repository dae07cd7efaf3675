// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

This module defines the toast design tokens, following the W3C Design Tokens standard.
Sizes are logical pixels at 96 DPI; multiply by the monitor scale factor.

## Organization

- **Palette**: Toast backgrounds, text and spinner colors
- **Opacity**: Window opacity levels
- **Spacing**: Inner padding and gaps
- **Sizing**: Toast and graphic dimensions
- **Typography**: Font sizes
- **Radius**: Rounded-corner window region

## Examples

```
use iced_toasts::ui::design_tokens::{palette, sizing};

let scale = 1.5;
let width = sizing::TOAST_WIDTH * scale;
assert_eq!(width, 570.0);
assert_ne!(palette::SUCCESS, palette::ERROR);
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const WHITE: Color = Color::WHITE;
    /// Message text.
    pub const WHITE_SMOKE: Color = Color::from_rgb8(245, 245, 245);
    /// Spinner dots.
    pub const DARK_GRAY: Color = Color::from_rgb8(169, 169, 169);

    // Toast backgrounds
    pub const DEFAULT_BACKGROUND: Color = Color::from_rgb8(50, 50, 50);
    pub const SUCCESS: Color = Color::from_rgb8(50, 205, 50);
    pub const ERROR: Color = Color::from_rgb8(205, 50, 50);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale
// ============================================================================

pub mod spacing {
    /// Padding inside a toast, on every side.
    pub const TOAST_PADDING: f32 = 10.0;
    /// Gap between the graphic and the text column.
    pub const GRAPHIC_GAP: f32 = 8.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const TOAST_WIDTH: f32 = 380.0;
    pub const TOAST_MIN_HEIGHT: f32 = 76.0;

    /// Height reserved for the single-line title.
    pub const TITLE_HEIGHT: f32 = 20.0;
    /// Wrap width of the message body.
    pub const MESSAGE_WIDTH: f32 = 300.0;

    pub const SPINNER: f32 = 64.0;
    pub const SPINNER_DOT: f32 = 8.0;
    pub const IMAGE: f32 = 50.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Bold title (11.25pt).
    pub const TITLE: f32 = 15.0;

    /// Message body (9.75pt).
    pub const BODY: f32 = 13.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    /// Rounded-corner region of the popup window.
    pub const TOAST: f32 = 15.0;
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Opacity validation
    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);

    // Sizing validation
    assert!(sizing::MESSAGE_WIDTH < sizing::TOAST_WIDTH);
    assert!(sizing::TITLE_HEIGHT < sizing::TOAST_MIN_HEIGHT);
    assert!(sizing::SPINNER > sizing::SPINNER_DOT * 4.0);
    assert!(sizing::IMAGE < sizing::TOAST_MIN_HEIGHT);

    // Typography validation
    assert!(typography::TITLE > typography::BODY);

    // Radius validation
    assert!(radius::TOAST * 2.0 < sizing::TOAST_MIN_HEIGHT);
};
