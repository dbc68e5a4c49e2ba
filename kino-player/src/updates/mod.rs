pub mod auth_updates;
pub mod deck_updates;
pub mod for_you_updates;
pub mod ui_updates;

use iced::Task;
use kino_model::Film;

use crate::messages::{Message, ui};
use crate::state::State;

/// Launch CDN fetches for any of `films` whose poster is not yet cached,
/// pending or known-bad. Failures only cost the placeholder.
pub(crate) fn request_posters(state: &mut State, films: &[Film]) -> Task<Message> {
    let base = state.config.image_base.clone();
    let mut tasks = Vec::new();

    for film in films {
        if let Some((id, url)) = state.posters.request(film, &base) {
            let client = state.api.http();
            tasks.push(Task::perform(
                async move { fetch_bytes(client, url).await.map_err(|e| e.to_string()) },
                move |result| Message::Ui(ui::Message::PosterFetched { id, result }),
            ));
        }
    }

    Task::batch(tasks)
}

async fn fetch_bytes(client: reqwest::Client, url: String) -> anyhow::Result<Vec<u8>> {
    let response = client.get(&url).send().await?.error_for_status()?;
    Ok(response.bytes().await?.to_vec())
}
