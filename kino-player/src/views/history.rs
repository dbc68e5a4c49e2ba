//! The liked/disliked gallery overlay with client-side sorting.

use iced::widget::{
    Space, button, column, container, image, mouse_area, pick_list, row, scrollable, text,
};
use iced::{Alignment, ContentFit, Element, Length};
use kino_model::{Film, SortKey};

use crate::for_you::Loadable;
use crate::messages::{Message, ui};
use crate::poster_cache::PosterCache;
use crate::state::{DetailHost, HistoryKind, HistoryView, State};
use crate::theme;
use crate::views::components;

pub fn view<'a>(state: &'a State, history: &'a HistoryView) -> Element<'a, Message> {
    let list = match history.kind {
        HistoryKind::Liked => &state.for_you.liked,
        HistoryKind::Disliked => &state.for_you.disliked,
    };

    let body: Element<'_, Message> = match list {
        Loadable::Ready(films) if films.is_empty() => text("Nothing here yet.")
            .size(14)
            .color(theme::TEXT_DIMMED)
            .into(),
        Loadable::Ready(films) => sorted_rows(&state.posters, films, history.sort),
        Loadable::Loading | Loadable::NotLoaded => text("Loading...")
            .size(14)
            .color(theme::TEXT_DIMMED)
            .into(),
        Loadable::Failed(message) => components::error_line(message),
    };

    let header = row![
        text(history.kind.title()).size(20).color(theme::TEXT_BRIGHT),
        Space::with_width(Length::Fill),
        pick_list(SortKey::ALL, Some(history.sort), |key| {
            Message::Ui(ui::Message::SortChanged(key))
        })
        .text_size(13),
        button(text("✕").size(16))
            .on_press(Message::Ui(ui::Message::CloseHistory))
            .style(theme::ghost_button),
    ]
    .spacing(10)
    .align_y(Alignment::Center);

    container(
        column![header, scrollable(body).height(Length::Fill)]
            .spacing(12)
            .padding(16),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .style(theme::screen)
    .into()
}

/// Rows own their data; the sorted order is computed per render from the
/// cached list.
fn sorted_rows(posters: &PosterCache, films: &[Film], sort: SortKey) -> Element<'static, Message> {
    let mut ordered = films.to_vec();
    sort.sort(&mut ordered);

    let mut list = column![].spacing(10);
    for film in ordered {
        list = list.push(gallery_row(posters, film));
    }
    list.into()
}

fn gallery_row(posters: &PosterCache, film: Film) -> Element<'static, Message> {
    let poster: Element<'static, Message> = match posters.get(film.id) {
        Some(handle) => image(handle.clone())
            .width(60)
            .height(90)
            .content_fit(ContentFit::Cover)
            .into(),
        None => container(text(film.title.clone()).size(11).color(theme::TEXT_DIMMED))
            .width(60)
            .height(90)
            .padding(6)
            .style(theme::panel)
            .into(),
    };

    let mut parts: Vec<String> = Vec::new();
    if let Some(year) = film.release_year() {
        parts.push(year.to_string());
    }
    if film.vote_average.is_some() {
        parts.push(format!("⭐ {:.1}", film.rating()));
    }
    if let Some(runtime) = film.runtime_display() {
        parts.push(runtime);
    }

    let body = row![
        poster,
        column![
            text(film.title.clone()).size(15).color(theme::TEXT_BRIGHT),
            text(parts.join(" • ")).size(13).color(theme::TEXT_DIMMED),
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
        film,
        host: DetailHost::History,
    }))
    .into()
}
