use iced::Task;

use crate::messages::{Message, ui};
use crate::state::{DetailHost, HistoryView, State};
use crate::updates::{deck_updates, for_you_updates};

pub fn handle(state: &mut State, message: ui::Message) -> Task<Message> {
    match message {
        ui::Message::SwitchTab(tab) => {
            state.tab = tab;
            Task::none()
        }
        ui::Message::OpenDrawer => {
            state.drawer_open = true;
            Task::none()
        }
        ui::Message::CloseDrawer => {
            state.drawer_open = false;
            Task::none()
        }
        ui::Message::OpenDetail { film, host } => {
            match host {
                // Deck details stay queue-backed so a classify closes them.
                DetailHost::Deck => state.deck.open_detail(film.id),
                _ => state.detail = Some(crate::state::DetailCard { film, host }),
            }
            Task::none()
        }
        ui::Message::CloseDetail => {
            state.deck.close_detail();
            state.detail = None;
            Task::none()
        }
        ui::Message::OpenHistory(kind) => {
            state.drawer_open = false;
            state.history = Some(HistoryView {
                kind,
                sort: Default::default(),
            });
            let list_kind = kind.list_kind();
            if state.for_you.list(list_kind).ready().is_none() {
                state.for_you.begin_single(list_kind);
                for_you_updates::fetch_list(state, list_kind)
            } else {
                Task::none()
            }
        }
        ui::Message::CloseHistory => {
            state.history = None;
            state.detail = None;
            Task::none()
        }
        ui::Message::SortChanged(sort) => {
            if let Some(history) = &mut state.history {
                history.sort = sort;
            }
            Task::none()
        }
        ui::Message::PointerMoved(x) => {
            state.pointer_x = x;
            state.gesture.move_to(x);
            Task::none()
        }
        ui::Message::CardGrabbed => {
            if state.detail_card().is_none() && !state.drawer_open {
                state.gesture.begin(state.pointer_x);
            }
            Task::none()
        }
        ui::Message::CardReleased => match state.gesture.release() {
            Some(decision) => deck_updates::classify_front(state, decision),
            None => Task::none(),
        },
        ui::Message::PosterFetched { id, result } => {
            match result {
                Ok(bytes) => state.posters.insert(id, bytes),
                Err(err) => {
                    log::debug!("[Posters] fetch failed for film {}: {}", id, err);
                    state.posters.mark_failed(id);
                }
            }
            Task::none()
        }
        ui::Message::DismissNotice => {
            state.notice = None;
            Task::none()
        }
    }
}
