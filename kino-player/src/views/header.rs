use iced::widget::{Space, button, container, row, text};
use iced::{Element, Length};

use crate::messages::{Message, ui};
use crate::state::{State, Tab};
use crate::theme;

/// Top navigation: brand, Home | For You, menu.
pub fn view(state: &State) -> Element<'_, Message> {
    let nav = row![
        button(text("Home").size(15))
            .on_press(Message::Ui(ui::Message::SwitchTab(Tab::Home)))
            .style(theme::nav_button(state.tab == Tab::Home)),
        text("|").size(15).color(theme::TEXT_DIMMED),
        button(text("For You").size(15))
            .on_press(Message::Ui(ui::Message::SwitchTab(Tab::ForYou)))
            .style(theme::nav_button(state.tab == Tab::ForYou)),
    ]
    .spacing(8)
    .align_y(iced::Alignment::Center);

    container(
        row![
            text("KINO").size(20).color(theme::TEXT_BRIGHT),
            Space::with_width(Length::Fill),
            nav,
            Space::with_width(Length::Fill),
            button(text("☰").size(18))
                .on_press(Message::Ui(ui::Message::OpenDrawer))
                .style(theme::ghost_button),
        ]
        .align_y(iced::Alignment::Center),
    )
    .width(Length::Fill)
    .padding([10.0, 16.0])
    .into()
}
