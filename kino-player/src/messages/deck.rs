use kino_model::{Decision, Film, FilmId};

use crate::infrastructure::ApiError;

#[derive(Debug, Clone)]
pub enum Message {
    /// Classify a specific film; rejected unless it is the deck front.
    Classify(FilmId, Decision),
    /// Classify whatever is currently at the front (keyboard and the
    /// like/skip/dislike buttons resolve through this).
    ClassifyFront(Decision),
    InteractionRecorded {
        id: FilmId,
        decision: Decision,
        result: Result<(), ApiError>,
    },
    BatchLoaded {
        attempt: u8,
        result: Result<Vec<Film>, ApiError>,
    },
    OpenDetail(FilmId),
    CloseDetail,
}
