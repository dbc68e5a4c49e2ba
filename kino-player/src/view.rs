use iced::widget::{column, container, stack};
use iced::{Element, Length};

use crate::messages::Message;
use crate::state::{Screen, State, Tab};
use crate::{theme, views};

pub fn view(state: &State) -> Element<'_, Message> {
    match &state.screen {
        Screen::Login(form) => views::login::view(form),
        Screen::SignUp(form) => views::signup::view(form),
        Screen::Browse => browse(state),
    }
}

fn browse(state: &State) -> Element<'_, Message> {
    if state.initial_loading && state.deck.is_empty() {
        return views::loading::fullscreen();
    }

    let content = match state.tab {
        Tab::Home => views::home::view(state),
        Tab::ForYou => views::for_you::view(state),
    };

    let base = container(column![views::header::view(state), content])
        .width(Length::Fill)
        .height(Length::Fill)
        .style(theme::screen);

    let mut layers: Vec<Element<'_, Message>> = vec![base.into()];

    if let Some(history) = &state.history {
        layers.push(views::history::view(state, history));
    }
    if let Some((film, host)) = state.detail_card() {
        layers.push(views::detail::view(state, film, host));
    }
    if state.drawer_open {
        layers.push(views::drawer::view(state));
    }

    stack(layers).into()
}
