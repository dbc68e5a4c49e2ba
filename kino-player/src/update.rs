use iced::Task;

use crate::messages::Message;
use crate::state::State;
use crate::updates;

pub fn update(state: &mut State, message: Message) -> Task<Message> {
    match message {
        Message::Auth(message) => updates::auth_updates::handle(state, message),
        Message::Deck(message) => updates::deck_updates::handle(state, message),
        Message::ForYou(message) => updates::for_you_updates::handle(state, message),
        Message::Ui(message) => updates::ui_updates::handle(state, message),
    }
}
