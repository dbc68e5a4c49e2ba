use iced::widget::scrollable;
use kino_model::{Decision, Film, FilmId};

use crate::for_you::ListKind;
use crate::infrastructure::ApiError;

#[derive(Debug, Clone)]
pub enum Message {
    /// Manual refresh of all four lists.
    Refresh,
    ListLoaded {
        kind: ListKind,
        result: Result<Vec<Film>, ApiError>,
    },
    /// A decision made from the carousel or a detail modal opened there.
    CarouselClassify(FilmId, Decision),
    InteractionRecorded {
        id: FilmId,
        result: Result<(), ApiError>,
    },
    CarouselLeft,
    CarouselRight,
    CarouselScrolled(scrollable::Viewport),
}
