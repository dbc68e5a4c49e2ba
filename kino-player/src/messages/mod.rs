pub mod auth;
pub mod deck;
pub mod for_you;
pub mod ui;

/// Top-level application message, one variant per domain.
#[derive(Debug, Clone)]
pub enum Message {
    Auth(auth::Message),
    Deck(deck::Message),
    ForYou(for_you::Message),
    Ui(ui::Message),
}

impl From<auth::Message> for Message {
    fn from(message: auth::Message) -> Self {
        Message::Auth(message)
    }
}

impl From<deck::Message> for Message {
    fn from(message: deck::Message) -> Self {
        Message::Deck(message)
    }
}

impl From<for_you::Message> for Message {
    fn from(message: for_you::Message) -> Self {
        Message::ForYou(message)
    }
}

impl From<ui::Message> for Message {
    fn from(message: ui::Message) -> Self {
        Message::Ui(message)
    }
}
