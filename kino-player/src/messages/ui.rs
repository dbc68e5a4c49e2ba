use kino_model::{Film, FilmId, SortKey};

use crate::state::{DetailHost, HistoryKind, Tab};

#[derive(Debug, Clone)]
pub enum Message {
    SwitchTab(Tab),
    OpenDrawer,
    CloseDrawer,
    OpenDetail { film: Film, host: DetailHost },
    CloseDetail,
    OpenHistory(HistoryKind),
    CloseHistory,
    SortChanged(SortKey),
    /// Pointer tracking over the swipe card.
    PointerMoved(f32),
    CardGrabbed,
    CardReleased,
    PosterFetched {
        id: FilmId,
        result: Result<Vec<u8>, String>,
    },
    DismissNotice,
}
