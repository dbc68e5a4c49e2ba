//! The film detail modal, shared by the deck, For You and the galleries.

use iced::widget::{Space, button, column, container, mouse_area, row, scrollable, text};
use iced::{Alignment, Element, Length};
use kino_model::{Decision, Film};

use crate::messages::{Message, deck, for_you, ui};
use crate::state::{DetailHost, State};
use crate::theme;
use crate::views::components;

pub fn view<'a>(state: &'a State, film: &'a Film, host: DetailHost) -> Element<'a, Message> {
    let header = row![
        text(film.title.as_str()).size(22).color(theme::TEXT_BRIGHT),
        Space::with_width(Length::Fill),
        button(text("✕").size(16))
            .on_press(Message::Ui(ui::Message::CloseDetail))
            .style(theme::ghost_button),
    ]
    .align_y(Alignment::Center);

    let mut body = column![
        header,
        components::poster(state, film, 300.0, 440.0),
        components::meta_row(film),
        components::genre_tags(film),
    ]
    .spacing(10);

    if let Some(overview) = &film.overview {
        body = body.push(text(overview.as_str()).size(14));
    }

    if !film.directors.is_empty() {
        let names: Vec<&str> = film.directors.iter().map(|c| c.name.as_str()).collect();
        body = body.push(credit_line("Directed by", names.join(", ")));
    }

    let top_cast = film.actors_by_popularity();
    if !top_cast.is_empty() {
        let names: Vec<&str> = top_cast.iter().take(4).map(|c| c.name.as_str()).collect();
        body = body.push(credit_line("Starring", names.join(", ")));
    }

    if let Some(actions) = action_row(film, host) {
        body = body.push(actions);
    }

    let panel = container(scrollable(body.padding(20)))
        .width(380)
        .max_height(780.0)
        .style(theme::card);

    let backdrop = mouse_area(
        container(Space::with_width(Length::Fill))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(theme::overlay_backdrop),
    )
    .on_press(Message::Ui(ui::Message::CloseDetail));

    iced::widget::stack![
        backdrop,
        container(panel)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(iced::alignment::Horizontal::Center)
            .align_y(iced::alignment::Vertical::Center),
    ]
    .into()
}

fn credit_line(label: &str, names: String) -> Element<'static, Message> {
    column![
        text(label.to_string()).size(12).color(theme::TEXT_DIMMED),
        text(names).size(14),
    ]
    .spacing(2)
    .into()
}

/// Decisions are only offered where they are meaningful: the deck modal
/// classifies the front card, the For You modal acts on the carousel. The
/// gallery modal is read-only.
fn action_row(film: &Film, host: DetailHost) -> Option<Element<'_, Message>> {
    let decide = |decision: Decision| -> Message {
        match host {
            DetailHost::Deck => deck::Message::Classify(film.id, decision).into(),
            DetailHost::ForYou => for_you::Message::CarouselClassify(film.id, decision).into(),
            DetailHost::History => Message::Ui(ui::Message::CloseDetail),
        }
    };

    if host == DetailHost::History {
        return None;
    }

    Some(
        row![
            button(text("✕ Nope").size(14))
                .on_press(decide(Decision::Dislike))
                .style(theme::pill_button),
            button(text("★ Super").size(14))
                .on_press(decide(Decision::Superlike))
                .style(theme::pill_button),
            button(text("♥ Like").size(14))
                .on_press(decide(Decision::Like))
                .style(theme::pill_button),
        ]
        .spacing(12)
        .into(),
    )
}
