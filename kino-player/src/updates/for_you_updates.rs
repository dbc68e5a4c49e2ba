use iced::Task;
use iced::widget::scrollable;
use kino_model::{Decision, Film, FilmId};

use crate::for_you::ListKind;
use crate::infrastructure::ApiError;
use crate::messages::{Message, for_you};
use crate::state::State;
use crate::updates::{auth_updates, deck_updates, request_posters};

pub fn handle(state: &mut State, message: for_you::Message) -> Task<Message> {
    match message {
        for_you::Message::Refresh => start_refresh(state),
        for_you::Message::ListLoaded { kind, result } => list_loaded(state, kind, result),
        for_you::Message::CarouselClassify(id, decision) => carousel_classify(state, id, decision),
        for_you::Message::InteractionRecorded { id, result } => {
            interaction_recorded(state, id, result)
        }
        for_you::Message::CarouselLeft => {
            state.carousel.go_left();
            scroll_to_carousel(state)
        }
        for_you::Message::CarouselRight => {
            state.carousel.go_right();
            scroll_to_carousel(state)
        }
        for_you::Message::CarouselScrolled(viewport) => {
            state.carousel.record_viewport(&viewport);
            Task::none()
        }
    }
}

/// Kick off all four list fetches. Each settles independently so one
/// failing endpoint cannot blank the others.
pub fn start_refresh(state: &mut State) -> Task<Message> {
    let kinds = state.for_you.begin_refresh();
    Task::batch(kinds.map(|kind| fetch_list(state, kind)))
}

pub fn fetch_list(state: &State, kind: ListKind) -> Task<Message> {
    let films = state.films.clone();
    Task::perform(
        async move {
            match kind {
                ListKind::Popular => films.popular().await,
                ListKind::Recommended => films.recommendations().await,
                ListKind::Liked => films.liked().await,
                ListKind::Disliked => films.disliked().await,
            }
        },
        move |result| Message::ForYou(for_you::Message::ListLoaded { kind, result }),
    )
}

fn list_loaded(
    state: &mut State,
    kind: ListKind,
    result: Result<Vec<Film>, ApiError>,
) -> Task<Message> {
    match result {
        Ok(films) => {
            let fetched = films.clone();
            state.for_you.finish(kind, Ok(films));
            request_posters(state, &fetched)
        }
        Err(ApiError::Unauthorized) => auth_updates::session_expired(state),
        Err(err) => {
            log::error!("[ForYou] failed to load {:?} list: {}", kind, err);
            state.for_you.finish(kind, Err(err.to_string()));
            Task::none()
        }
    }
}

fn carousel_classify(state: &mut State, id: FilmId, decision: Decision) -> Task<Message> {
    log::info!("[ForYou] {} film {} from carousel", decision, id);

    state.detail = None;
    state.notice = None;
    let refresh_due = state.for_you.record_carousel_interaction(id);
    // The deck must never resurface a film decided elsewhere.
    let needs_top_up = state.deck.note_external_interaction(id);

    let films = state.films.clone();
    let mut tasks = vec![Task::perform(
        async move { films.record_interaction(id, decision).await },
        move |result| Message::ForYou(for_you::Message::InteractionRecorded { id, result }),
    )];

    if refresh_due {
        log::info!("[ForYou] third interaction since refresh, resyncing lists");
        tasks.push(start_refresh(state));
    }
    if needs_top_up {
        tasks.push(deck_updates::start_top_up(state));
    }

    Task::batch(tasks)
}

fn interaction_recorded(
    state: &mut State,
    id: FilmId,
    result: Result<(), ApiError>,
) -> Task<Message> {
    match result {
        Ok(()) => Task::none(),
        Err(ApiError::Unauthorized) => auth_updates::session_expired(state),
        Err(err) => {
            log::error!("[ForYou] failed to record decision for film {}: {}", id, err);
            state.notice = Some("Couldn't save your last rating.".to_string());
            Task::none()
        }
    }
}

fn scroll_to_carousel(state: &State) -> Task<Message> {
    scrollable::scroll_to(
        state.carousel.scrollable_id.clone(),
        state.carousel.scroll_offset(),
    )
}
