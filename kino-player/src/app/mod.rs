use std::sync::Arc;

use crate::{subscriptions, theme, update, view};

pub mod bootstrap;

pub use bootstrap::AppConfig;

/// Run the Kino application with the provided configuration.
pub fn run(config: AppConfig) -> iced::Result {
    let config = Arc::new(config);
    let boot_config = Arc::clone(&config);

    iced::application("Kino", update::update, view::view)
        .subscription(subscriptions::subscription)
        .theme(theme::application)
        .window(iced::window::Settings {
            size: iced::Size::new(480.0, 860.0),
            resizable: true,
            ..Default::default()
        })
        .run_with(move || bootstrap::boot(&boot_config))
}
