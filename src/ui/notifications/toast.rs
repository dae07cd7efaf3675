// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering individual notifications.
//!
//! A toast fills its own popup window: a rounded card in the notification's
//! background color, an optional image or spinner on the left, then the
//! bold title above the wrapped message. The whole card is one click target.

use super::manager::Message;
use super::notification::{Graphic, Notification};
use crate::ui::design_tokens::{palette, radius, sizing, spacing, typography};
use iced::widget::image::Image;
use iced::widget::{container, mouse_area, text, Column, Container, Row, Text};
use iced::{alignment, font, Color, Element, Font, Length, Theme};

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders a single toast notification at its measured size.
    pub fn view(notification: &Notification) -> Element<'_, Message> {
        let size = notification.size();
        let scale = size.width / sizing::TOAST_WIDTH;
        let padding = spacing::TOAST_PADDING * scale;

        let title = Text::new(notification.title())
            .size(typography::TITLE * scale)
            .font(Font {
                weight: font::Weight::Bold,
                ..Font::DEFAULT
            })
            .height(Length::Fixed(sizing::TITLE_HEIGHT * scale))
            .style(|_theme: &Theme| text::Style {
                color: Some(palette::WHITE),
            });

        let message = Text::new(notification.message())
            .size(typography::BODY * scale)
            .width(Length::Fixed(sizing::MESSAGE_WIDTH * scale))
            .style(|_theme: &Theme| text::Style {
                color: Some(palette::WHITE_SMOKE),
            });

        let text_column = Column::new().push(title).push(message);

        let content: Element<'_, Message> = match Self::graphic(notification.graphic(), scale) {
            Some(graphic) => Row::new()
                .spacing(spacing::GRAPHIC_GAP * scale)
                .align_y(alignment::Vertical::Center)
                .push(graphic)
                .push(text_column)
                .into(),
            None => text_column.into(),
        };

        let background = notification.background();
        let card = Container::new(content)
            .width(Length::Fixed(size.width))
            .height(Length::Fixed(size.height))
            .padding(padding)
            .align_y(alignment::Vertical::Center)
            .style(move |_theme: &Theme| toast_container_style(background, scale));

        let id = notification.id();
        mouse_area(card)
            .on_press(Message::Clicked(id))
            .on_enter(Message::Hovered(id, true))
            .on_exit(Message::Hovered(id, false))
            .into()
    }

    fn graphic(graphic: &Graphic, scale: f32) -> Option<Element<'static, Message>> {
        match graphic {
            Graphic::None => None,
            Graphic::Image(handle) => Some(
                Image::new(handle.clone())
                    .width(Length::Fixed(sizing::IMAGE * scale))
                    .height(Length::Fixed(sizing::IMAGE * scale))
                    .into(),
            ),
            Graphic::Spinner(spinner) => Some(spinner.view()),
        }
    }
}

/// Style function for the toast card.
fn toast_container_style(background: Color, scale: f32) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(background)),
        border: iced::Border {
            radius: (radius::TOAST * scale).into(),
            ..Default::default()
        },
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_container_style_uses_background() {
        let style = toast_container_style(palette::SUCCESS, 1.0);
        assert_eq!(
            style.background,
            Some(iced::Background::Color(palette::SUCCESS))
        );
        assert_eq!(style.text_color, Some(palette::WHITE));
    }

    #[test]
    fn corner_radius_scales() {
        let style = toast_container_style(palette::ERROR, 2.0);
        assert_eq!(style.border.radius, iced::border::Radius::from(30.0));
    }

    #[test]
    fn plain_toast_has_no_graphic() {
        assert!(Toast::graphic(&Graphic::None, 1.0).is_none());
    }
}
