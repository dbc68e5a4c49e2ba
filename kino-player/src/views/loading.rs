use iced::widget::{Space, column, container, text};
use iced::{Element, Length};

use crate::messages::Message;
use crate::theme;

/// Branded full-screen loader shown between login and the first batch.
pub fn fullscreen<'a>() -> Element<'a, Message> {
    container(
        column![
            text("KINO").size(42).color(theme::TEXT_BRIGHT),
            Space::with_height(10),
            text("Loading your films...")
                .size(14)
                .color(theme::TEXT_DIMMED),
        ]
        .align_x(iced::Alignment::Center),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(iced::alignment::Horizontal::Center)
    .align_y(iced::alignment::Vertical::Center)
    .style(theme::screen)
    .into()
}

pub fn inline(label: &str) -> Element<'_, Message> {
    container(text(label).size(14).color(theme::TEXT_DIMMED))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(iced::alignment::Horizontal::Center)
        .align_y(iced::alignment::Vertical::Center)
        .into()
}
