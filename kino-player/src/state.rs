use std::sync::Arc;

use kino_model::{Film, SortKey};

use crate::app::bootstrap::AppConfig;
use crate::carousel::CarouselState;
use crate::deck::DeckState;
use crate::for_you::{ForYouState, ListKind};
use crate::gesture::SwipeGesture;
use crate::infrastructure::ApiClient;
use crate::infrastructure::services::{AuthService, FilmService};
use crate::poster_cache::PosterCache;
use crate::session::Session;

/// Which surface a detail modal was opened from. The host decides which
/// list a decision made inside the modal acts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailHost {
    Deck,
    ForYou,
    History,
}

#[derive(Debug, Clone)]
pub struct DetailCard {
    pub film: Film,
    pub host: DetailHost,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Home,
    ForYou,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryKind {
    Liked,
    Disliked,
}

impl HistoryKind {
    pub fn list_kind(&self) -> ListKind {
        match self {
            HistoryKind::Liked => ListKind::Liked,
            HistoryKind::Disliked => ListKind::Disliked,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            HistoryKind::Liked => "Liked Films",
            HistoryKind::Disliked => "Disliked Films",
        }
    }
}

/// The open liked/disliked gallery overlay.
#[derive(Debug, Clone)]
pub struct HistoryView {
    pub kind: HistoryKind,
    pub sort: SortKey,
}

#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub name: String,
    pub password: String,
    pub show_password: bool,
    pub submitting: bool,
    pub error: Option<String>,
    /// Shown after a successful registration redirect.
    pub info: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct SignUpForm {
    pub email: String,
    pub name: String,
    pub password: String,
    pub show_password: bool,
    pub submitting: bool,
    pub error: Option<String>,
}

#[derive(Debug, Clone)]
pub enum Screen {
    Login(LoginForm),
    SignUp(SignUpForm),
    Browse,
}

pub struct State {
    pub config: Arc<AppConfig>,
    pub api: ApiClient,
    pub auth: AuthService,
    pub films: FilmService,
    pub session: Option<Session>,
    pub screen: Screen,
    pub tab: Tab,
    pub deck: DeckState,
    pub for_you: ForYouState,
    pub carousel: CarouselState,
    pub history: Option<HistoryView>,
    pub detail: Option<DetailCard>,
    pub gesture: SwipeGesture,
    pub pointer_x: f32,
    pub posters: PosterCache,
    pub drawer_open: bool,
    /// True between login and the first deck batch arriving; drives the
    /// branded full-screen loader.
    pub initial_loading: bool,
    /// Transient inline notice, e.g. a failed interaction write.
    pub notice: Option<String>,
}

impl State {
    pub fn new(config: Arc<AppConfig>) -> Self {
        let api = ApiClient::new(config.api_base_url.clone());
        Self {
            auth: AuthService::new(api.clone()),
            films: FilmService::new(api.clone()),
            api,
            config,
            session: None,
            screen: Screen::Login(LoginForm::default()),
            tab: Tab::default(),
            deck: DeckState::default(),
            for_you: ForYouState::default(),
            carousel: CarouselState::default(),
            history: None,
            detail: None,
            gesture: SwipeGesture::default(),
            pointer_x: 0.0,
            posters: PosterCache::default(),
            drawer_open: false,
            initial_loading: false,
            notice: None,
        }
    }

    /// Wipe everything session-scoped. Used by logout and 401 teardown.
    pub fn clear_session_state(&mut self) {
        self.session = None;
        self.tab = Tab::default();
        self.deck = DeckState::default();
        self.for_you = ForYouState::default();
        self.carousel = CarouselState::default();
        self.history = None;
        self.detail = None;
        self.gesture = SwipeGesture::default();
        self.posters = PosterCache::default();
        self.drawer_open = false;
        self.initial_loading = false;
        self.notice = None;
    }

    /// The film shown in the detail modal, wherever it was opened from.
    pub fn detail_card(&self) -> Option<(&Film, DetailHost)> {
        if let Some(film) = self.deck.detailed_film() {
            return Some((film, DetailHost::Deck));
        }
        self.detail
            .as_ref()
            .map(|card| (&card.film, card.host))
    }
}
