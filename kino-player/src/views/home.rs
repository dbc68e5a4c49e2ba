//! The swipe deck: one film at a time, drag or press to decide.

use iced::widget::{Space, button, column, container, mouse_area, row, stack, text};
use iced::{Alignment, Element, Length, Padding};
use kino_model::{Decision, Film};

use crate::messages::{Message, deck, ui};
use crate::state::State;
use crate::theme;
use crate::views::{components, loading};

const CARD_WIDTH: f32 = 340.0;
const POSTER_HEIGHT: f32 = 420.0;

pub fn view(state: &State) -> Element<'_, Message> {
    let Some(front) = state.deck.front() else {
        if state.deck.is_fetching() {
            return loading::inline("Finding films for you...");
        }
        return components::empty_state("No more films!", "Check back later.");
    };

    let mut layers: Vec<Element<'_, Message>> = Vec::new();
    if let Some(behind) = state.deck.second() {
        layers.push(back_card(state, behind));
    }
    layers.push(front_card(state, front));

    let mut content = column![]
        .spacing(16)
        .align_x(Alignment::Center)
        .width(Length::Fill);

    if let Some(notice) = &state.notice {
        content = content.push(notice_banner(notice));
    }

    content = content
        .push(
            container(stack(layers))
                .width(Length::Fill)
                .align_x(iced::alignment::Horizontal::Center),
        )
        .push(action_row());

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(16)
        .align_y(iced::alignment::Vertical::Center)
        .into()
}

/// The interactive top card. Horizontal drag displacement is applied as
/// asymmetric padding so the card visually follows the pointer.
fn front_card<'a>(state: &'a State, film: &'a Film) -> Element<'a, Message> {
    let offset = state.gesture.offset();

    let body = column![
        components::poster(state, film, CARD_WIDTH, POSTER_HEIGHT),
        column![
            text(film.title.as_str()).size(22).color(theme::TEXT_BRIGHT),
            components::meta_row(film),
            components::genre_tags(film),
            button(text("Details").size(13))
                .on_press(Message::Deck(deck::Message::OpenDetail(film.id)))
                .style(theme::ghost_button),
        ]
        .spacing(6)
        .padding(12),
    ];

    let card = mouse_area(
        container(body)
            .width(CARD_WIDTH)
            .style(theme::card)
            .clip(true),
    )
    .on_press(Message::Ui(ui::Message::CardGrabbed))
    .on_release(Message::Ui(ui::Message::CardReleased))
    .on_move(|point| Message::Ui(ui::Message::PointerMoved(point.x)));

    container(card)
        .padding(Padding {
            top: 0.0,
            right: (-offset).max(0.0),
            bottom: 0.0,
            left: offset.max(0.0),
        })
        .into()
}

/// A dimmed preview of the next film, peeking out behind the front card.
fn back_card<'a>(state: &'a State, film: &'a Film) -> Element<'a, Message> {
    container(
        container(components::poster(state, film, CARD_WIDTH, POSTER_HEIGHT))
            .width(CARD_WIDTH)
            .style(theme::panel)
            .clip(true),
    )
    .padding(Padding {
        top: 12.0,
        right: 0.0,
        bottom: 0.0,
        left: 0.0,
    })
    .into()
}

fn action_row<'a>() -> Element<'a, Message> {
    let action = |label: &'a str, decision: Decision| {
        button(text(label).size(16))
            .padding([10.0, 22.0])
            .on_press(Message::Deck(deck::Message::ClassifyFront(decision)))
            .style(theme::pill_button)
    };

    row![
        action("✕ Nope", Decision::Dislike),
        action("★ Super", Decision::Superlike),
        action("♥ Like", Decision::Like),
    ]
    .spacing(14)
    .align_y(Alignment::Center)
    .into()
}

fn notice_banner(notice: &str) -> Element<'_, Message> {
    container(
        row![
            components::error_line(notice),
            Space::with_width(Length::Fill),
            button(text("✕").size(12))
                .on_press(Message::Ui(ui::Message::DismissNotice))
                .style(theme::ghost_button),
        ]
        .align_y(Alignment::Center),
    )
    .width(CARD_WIDTH)
    .padding([6.0, 10.0])
    .style(theme::panel)
    .into()
}
