use iced::Task;
use kino_model::{Decision, Film, FilmId};

use crate::deck::MAX_EMPTY_BATCH_ATTEMPTS;
use crate::infrastructure::ApiError;
use crate::messages::{Message, deck};
use crate::state::State;
use crate::updates::{auth_updates, request_posters};

pub fn handle(state: &mut State, message: deck::Message) -> Task<Message> {
    match message {
        deck::Message::Classify(id, decision) => classify(state, id, decision),
        deck::Message::ClassifyFront(decision) => classify_front(state, decision),
        deck::Message::InteractionRecorded {
            id,
            decision,
            result,
        } => interaction_recorded(state, id, decision, result),
        deck::Message::BatchLoaded { attempt, result } => batch_loaded(state, attempt, result),
        deck::Message::OpenDetail(id) => {
            state.deck.open_detail(id);
            Task::none()
        }
        deck::Message::CloseDetail => {
            state.deck.close_detail();
            Task::none()
        }
    }
}

pub fn classify_front(state: &mut State, decision: Decision) -> Task<Message> {
    match state.deck.front().map(|f| f.id) {
        Some(id) => classify(state, id, decision),
        None => Task::none(),
    }
}

fn classify(state: &mut State, id: FilmId, decision: Decision) -> Task<Message> {
    let outcome = match state.deck.classify(id, decision) {
        Ok(outcome) => outcome,
        Err(err) => {
            // Stale intent (gesture resolved after the queue moved on, or a
            // repeated keypress); dropping it is the contract.
            log::debug!("[Deck] ignoring classify: {}", err);
            return Task::none();
        }
    };

    log::info!("[Deck] {} film {}", decision, id);
    state.notice = None;

    let films = state.films.clone();
    let mut tasks = vec![Task::perform(
        async move { films.record_interaction(id, decision).await },
        move |result| {
            Message::Deck(deck::Message::InteractionRecorded {
                id,
                decision,
                result,
            })
        },
    )];

    if outcome.needs_top_up {
        tasks.push(start_top_up(state));
    }

    Task::batch(tasks)
}

/// Begin a top-up cycle unless one is already running.
pub fn start_top_up(state: &mut State) -> Task<Message> {
    match state.deck.begin_top_up() {
        Some(attempt) => fetch_batch(state, attempt),
        None => Task::none(),
    }
}

fn fetch_batch(state: &State, attempt: u8) -> Task<Message> {
    let films = state.films.clone();
    Task::perform(async move { films.next_batch().await }, move |result| {
        Message::Deck(deck::Message::BatchLoaded { attempt, result })
    })
}

fn interaction_recorded(
    state: &mut State,
    id: FilmId,
    decision: Decision,
    result: Result<(), ApiError>,
) -> Task<Message> {
    match result {
        Ok(()) => {
            log::debug!("[Deck] {} recorded for film {}", decision, id);
            Task::none()
        }
        Err(ApiError::Unauthorized) => auth_updates::session_expired(state),
        Err(err) => {
            // Optimistic removal stays; the server just may not remember
            // this decision.
            log::error!("[Deck] failed to record {} for film {}: {}", decision, id, err);
            state.notice = Some("Couldn't save your last rating.".to_string());
            Task::none()
        }
    }
}

fn batch_loaded(
    state: &mut State,
    attempt: u8,
    result: Result<Vec<Film>, ApiError>,
) -> Task<Message> {
    state.initial_loading = false;

    match result {
        Ok(batch) => {
            let admitted = state.deck.admit_batch(batch);
            log::info!(
                "[Deck] batch attempt {} admitted {} films ({} queued)",
                attempt,
                admitted,
                state.deck.len()
            );

            let mut tasks = Vec::new();
            if let Some(next) = state.deck.on_batch_admitted(admitted) {
                log::info!(
                    "[Deck] batch was fully seen, retrying ({}/{})",
                    next,
                    MAX_EMPTY_BATCH_ATTEMPTS
                );
                tasks.push(fetch_batch(state, next));
            }

            let queued: Vec<Film> = state.deck.films().cloned().collect();
            tasks.push(request_posters(state, &queued));
            Task::batch(tasks)
        }
        Err(ApiError::Unauthorized) => auth_updates::session_expired(state),
        Err(err) => {
            // Queue keeps whatever it had; an empty deck renders its
            // explicit empty state rather than spinning.
            log::error!("[Deck] failed to fetch next batch: {}", err);
            state.deck.abort_fetch();
            Task::none()
        }
    }
}
