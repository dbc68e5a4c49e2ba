//! The For You tab: the Top Picks carousel and the Popular Now list.

use iced::widget::{
    Space, button, column, container, mouse_area, row, scrollable, text,
};
use iced::{Alignment, Element, Length};
use kino_model::{Decision, Film};

use crate::carousel::{CARD_PADDING, ITEM_SPACING, ITEM_WIDTH, POSTER_WIDTH};
use crate::for_you::Loadable;
use crate::messages::{Message, for_you, ui};
use crate::state::{DetailHost, State};
use crate::theme;
use crate::views::components;

const CAROUSEL_POSTER_HEIGHT: f32 = 240.0;

pub fn view(state: &State) -> Element<'_, Message> {
    let refresh_row = row![
        text("For You").size(24).color(theme::TEXT_BRIGHT),
        Space::with_width(Length::Fill),
        button(text(if state.for_you.is_refreshing() {
            "Refreshing..."
        } else {
            "Refresh"
        })
        .size(13))
        .on_press_maybe(
            (!state.for_you.is_refreshing()).then_some(Message::ForYou(for_you::Message::Refresh)),
        )
        .style(theme::pill_button),
    ]
    .align_y(Alignment::Center);

    let content = column![
        refresh_row,
        section_title("Top Picks For You"),
        top_picks(state),
        section_title("Popular Now"),
        popular(state),
    ]
    .spacing(14)
    .padding(16);

    scrollable(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn section_title(title: &str) -> Element<'_, Message> {
    text(title.to_string())
        .size(18)
        .color(theme::TEXT_BRIGHT)
        .into()
}

fn top_picks(state: &State) -> Element<'_, Message> {
    match &state.for_you.recommended {
        Loadable::Ready(films) if films.is_empty() => {
            placeholder("Nothing to recommend yet. Keep swiping!")
        }
        Loadable::Ready(films) => carousel(state, films),
        Loadable::Loading | Loadable::NotLoaded => placeholder("Loading top picks..."),
        Loadable::Failed(message) => components::error_line(message),
    }
}

fn carousel<'a>(state: &'a State, films: &'a [Film]) -> Element<'a, Message> {
    let mut strip = row![].spacing(ITEM_SPACING);
    for film in films {
        strip = strip.push(carousel_card(state, film));
    }

    let arrow = |label: &'a str, enabled: bool, message: for_you::Message| {
        button(text(label).size(18))
            .on_press_maybe(enabled.then_some(Message::ForYou(message)))
            .style(theme::ghost_button)
    };

    row![
        arrow(
            "‹",
            state.carousel.can_go_left(),
            for_you::Message::CarouselLeft,
        ),
        scrollable(strip)
            .id(state.carousel.scrollable_id.clone())
            .direction(scrollable::Direction::Horizontal(
                scrollable::Scrollbar::new().width(0).scroller_width(0),
            ))
            .on_scroll(|viewport| Message::ForYou(for_you::Message::CarouselScrolled(viewport)))
            .width(Length::Fill),
        arrow(
            "›",
            state.carousel.can_go_right(),
            for_you::Message::CarouselRight,
        ),
    ]
    .align_y(Alignment::Center)
    .spacing(4)
    .into()
}

fn carousel_card<'a>(state: &'a State, film: &'a Film) -> Element<'a, Message> {
    let decide = |label: &'a str, decision: Decision| {
        button(text(label).size(13))
            .on_press(Message::ForYou(for_you::Message::CarouselClassify(
                film.id, decision,
            )))
            .style(theme::pill_button)
    };

    let poster = mouse_area(components::poster(
        state,
        film,
        POSTER_WIDTH,
        CAROUSEL_POSTER_HEIGHT,
    ))
    .on_press(Message::Ui(ui::Message::OpenDetail {
        film: film.clone(),
        host: DetailHost::ForYou,
    }));

    container(
        column![
            poster,
            text(film.title.as_str()).size(13),
            row![decide("✕", Decision::Dislike), decide("♥", Decision::Like)].spacing(8),
        ]
        .spacing(6)
        .align_x(Alignment::Center),
    )
    .width(ITEM_WIDTH)
    .padding(CARD_PADDING)
    .style(theme::card)
    .into()
}

fn popular(state: &State) -> Element<'_, Message> {
    match &state.for_you.popular {
        Loadable::Ready(films) if films.is_empty() => placeholder("Nothing trending right now."),
        Loadable::Ready(films) => {
            let mut list = column![].spacing(10);
            for film in films {
                list = list.push(popular_row(state, film));
            }
            list.into()
        }
        Loadable::Loading | Loadable::NotLoaded => placeholder("Loading popular films..."),
        Loadable::Failed(message) => components::error_line(message),
    }
}

fn popular_row<'a>(state: &'a State, film: &'a Film) -> Element<'a, Message> {
    let body = row![
        components::poster(state, film, 60.0, 90.0),
        column![
            text(film.title.as_str()).size(15).color(theme::TEXT_BRIGHT),
            components::meta_row(film),
            components::genre_tags(film),
        ]
        .spacing(4),
    ]
    .spacing(12)
    .align_y(Alignment::Center);

    mouse_area(
        container(body)
            .width(Length::Fill)
            .padding(8)
            .style(theme::panel),
    )
    .on_press(Message::Ui(ui::Message::OpenDetail {
        film: film.clone(),
        host: DetailHost::ForYou,
    }))
    .into()
}

fn placeholder(label: &str) -> Element<'_, Message> {
    text(label.to_string())
        .size(14)
        .color(theme::TEXT_DIMMED)
        .into()
}
