use std::sync::Arc;

use iced::Task;
use kino_model::ImageBase;

use crate::messages::Message;
use crate::state::State;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub api_base_url: String,
    pub image_base: ImageBase,
}

impl AppConfig {
    pub fn new(api_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: api_base_url.into(),
            image_base: ImageBase::default_cdn(),
        }
    }

    pub fn from_environment() -> Self {
        // Local development keeps its endpoints in a .env file.
        let _ = dotenvy::dotenv();

        let api_base_url = std::env::var("KINO_API_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:8080".to_string());

        let image_base = std::env::var("KINO_IMAGE_BASE_URL")
            .ok()
            .and_then(|raw| match ImageBase::new(raw) {
                Ok(base) => Some(base),
                Err(err) => {
                    log::warn!("[Config] ignoring invalid KINO_IMAGE_BASE_URL: {}", err);
                    None
                }
            })
            .unwrap_or_else(ImageBase::default_cdn);

        Self {
            api_base_url,
            image_base,
        }
    }
}

/// Initial state for the runtime application. The login screen comes first;
/// nothing is fetched until a session exists.
pub fn boot(config: &Arc<AppConfig>) -> (State, Task<Message>) {
    (State::new(Arc::clone(config)), Task::none())
}
