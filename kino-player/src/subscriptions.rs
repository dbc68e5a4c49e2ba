use iced::Subscription;
use iced::keyboard::{self, Key, key::Named};
use kino_model::Decision;

use crate::messages::{Message, deck};
use crate::state::{Screen, State, Tab};

/// Keyboard swipes: left arrow dislikes, right arrow likes, up arrow skips.
/// Active only while the deck is the focused surface; each keypress yields
/// at most one classify intent, same as a completed drag.
pub fn subscription(state: &State) -> Subscription<Message> {
    let deck_focused = matches!(state.screen, Screen::Browse)
        && state.tab == Tab::Home
        && state.detail_card().is_none()
        && state.history.is_none()
        && !state.drawer_open
        && !state.gesture.is_active();

    if !deck_focused {
        return Subscription::none();
    }

    keyboard::on_key_press(|key, _modifiers| {
        let decision = match key {
            Key::Named(Named::ArrowLeft) => Decision::Dislike,
            Key::Named(Named::ArrowRight) => Decision::Like,
            Key::Named(Named::ArrowUp) => Decision::Superlike,
            _ => return None,
        };
        Some(Message::Deck(deck::Message::ClassifyFront(decision)))
    })
}
