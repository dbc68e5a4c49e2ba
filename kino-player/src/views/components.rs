//! Small view pieces shared across screens.

use iced::widget::{Space, column, container, image, row, text};
use iced::{ContentFit, Element, Length};
use kino_model::Film;

use crate::messages::Message;
use crate::state::State;
use crate::theme;

/// Poster image when cached, otherwise a titled placeholder block.
pub fn poster<'a>(state: &'a State, film: &'a Film, width: f32, height: f32) -> Element<'a, Message> {
    match state.posters.get(film.id) {
        Some(handle) => image(handle.clone())
            .width(width)
            .height(height)
            .content_fit(ContentFit::Cover)
            .into(),
        None => container(
            text(film.title.as_str())
                .size(14)
                .color(theme::TEXT_DIMMED),
        )
        .width(width)
        .height(height)
        .padding(10)
        .style(theme::panel)
        .into(),
    }
}

/// Up to four genre tags plus a `+n` overflow marker.
pub fn genre_tags(film: &Film) -> Element<'_, Message> {
    let mut tags = row![].spacing(6);
    for genre in film.genres.iter().take(4) {
        tags = tags.push(
            container(text(genre.name.as_str()).size(12))
                .padding([2.0, 8.0])
                .style(theme::genre_tag),
        );
    }
    if film.genres.len() > 4 {
        tags = tags.push(
            container(text(format!("+{}", film.genres.len() - 4)).size(12))
                .padding([2.0, 8.0])
                .style(theme::genre_tag),
        );
    }
    tags.into()
}

/// `2010 • ⭐ 8.4 • 2h 28m`, skipping whatever the backend omitted.
pub fn meta_row(film: &Film) -> Element<'_, Message> {
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
    text(parts.join(" • "))
        .size(13)
        .color(theme::TEXT_DIMMED)
        .into()
}

pub fn empty_state<'a>(title: &'a str, subtitle: &'a str) -> Element<'a, Message> {
    container(
        column![
            text(title).size(24).color(theme::TEXT_BRIGHT),
            Space::with_height(8),
            text(subtitle).size(14).color(theme::TEXT_DIMMED),
        ]
        .align_x(iced::Alignment::Center),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(iced::alignment::Horizontal::Center)
    .align_y(iced::alignment::Vertical::Center)
    .into()
}

pub fn error_line(message: &str) -> Element<'_, Message> {
    text(message).size(13).color(theme::DANGER).into()
}
