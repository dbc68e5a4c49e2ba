//! Right-hand account drawer: history shortcuts and logout.

use iced::widget::{Space, button, column, container, mouse_area, row, text};
use iced::{Element, Length};

use crate::messages::{Message, auth, ui};
use crate::state::{HistoryKind, State};
use crate::theme;

pub fn view(state: &State) -> Element<'_, Message> {
    let user = state
        .session
        .as_ref()
        .map(|session| session.user())
        .unwrap_or("—");

    let entry = |label: &str, message: Message| {
        button(text(label.to_string()).size(15))
            .width(Length::Fill)
            .padding([10.0, 14.0])
            .on_press(message)
            .style(theme::ghost_button)
    };

    let panel = container(
        column![
            text(user.to_string()).size(18).color(theme::TEXT_BRIGHT),
            Space::with_height(18),
            entry(
                "Liked Films",
                Message::Ui(ui::Message::OpenHistory(HistoryKind::Liked)),
            ),
            entry(
                "Disliked Films",
                Message::Ui(ui::Message::OpenHistory(HistoryKind::Disliked)),
            ),
            Space::with_height(Length::Fill),
            entry("Log out", Message::Auth(auth::Message::Logout)),
        ]
        .padding(20),
    )
    .width(260)
    .height(Length::Fill)
    .style(theme::panel);

    let scrim = mouse_area(
        container(Space::with_width(Length::Fill))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(theme::overlay_backdrop),
    )
    .on_press(Message::Ui(ui::Message::CloseDrawer));

    row![
        container(scrim).width(Length::Fill).height(Length::Fill),
        panel,
    ]
    .into()
}
