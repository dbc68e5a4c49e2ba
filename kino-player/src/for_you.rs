//! The For You cache: popular, recommended, liked and disliked lists.
//!
//! Each list loads and fails independently; a refresh that loses one
//! endpoint keeps the other three and keeps the last-known-good content of
//! the one that failed. Carousel interactions resync the lists every third
//! decision since the last refresh.

use kino_model::{Film, FilmId};

/// How many carousel interactions accumulate before an automatic resync.
pub const RESYNC_EVERY: u32 = 3;

/// Load state of one remote list. `Ready` content survives refresh
/// failures; `Failed` only ever replaces nothing-yet-loaded.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Loadable<T> {
    #[default]
    NotLoaded,
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> Loadable<T> {
    pub fn ready(&self) -> Option<&T> {
        match self {
            Loadable::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Loadable::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Loadable::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Apply a fetch result. Errors never wipe previously loaded content.
    fn settle(&mut self, result: Result<T, String>) {
        match result {
            Ok(value) => *self = Loadable::Ready(value),
            Err(message) => {
                if !matches!(self, Loadable::Ready(_)) {
                    *self = Loadable::Failed(message);
                }
            }
        }
    }
}

/// Which of the four lists a fetch result belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Popular,
    Recommended,
    Liked,
    Disliked,
}

impl ListKind {
    pub const ALL: [ListKind; 4] = [
        ListKind::Popular,
        ListKind::Recommended,
        ListKind::Liked,
        ListKind::Disliked,
    ];
}

#[derive(Debug, Clone, Default)]
pub struct ForYouState {
    pub popular: Loadable<Vec<Film>>,
    pub recommended: Loadable<Vec<Film>>,
    pub liked: Loadable<Vec<Film>>,
    pub disliked: Loadable<Vec<Film>>,
    interactions_since_refresh: u32,
    in_flight: u8,
}

impl ForYouState {
    fn list_mut(&mut self, kind: ListKind) -> &mut Loadable<Vec<Film>> {
        match kind {
            ListKind::Popular => &mut self.popular,
            ListKind::Recommended => &mut self.recommended,
            ListKind::Liked => &mut self.liked,
            ListKind::Disliked => &mut self.disliked,
        }
    }

    pub fn list(&self, kind: ListKind) -> &Loadable<Vec<Film>> {
        match kind {
            ListKind::Popular => &self.popular,
            ListKind::Recommended => &self.recommended,
            ListKind::Liked => &self.liked,
            ListKind::Disliked => &self.disliked,
        }
    }

    /// Start a full refresh of all four lists. Resets the resync counter;
    /// manual and automatic refreshes behave identically. A refresh issued
    /// while one is pending is allowed, late completions simply overwrite;
    /// the counter tracks every outstanding fetch so `is_refreshing` holds
    /// until the last of them settles.
    pub fn begin_refresh(&mut self) -> [ListKind; 4] {
        self.interactions_since_refresh = 0;
        self.in_flight = self.in_flight.saturating_add(4);
        for kind in ListKind::ALL {
            let list = self.list_mut(kind);
            if !matches!(list, Loadable::Ready(_)) {
                *list = Loadable::Loading;
            }
        }
        ListKind::ALL
    }

    /// Start a fetch of a single list (used when a gallery opens before any
    /// refresh has populated it).
    pub fn begin_single(&mut self, kind: ListKind) {
        self.in_flight = self.in_flight.saturating_add(1);
        let list = self.list_mut(kind);
        if !matches!(list, Loadable::Ready(_)) {
            *list = Loadable::Loading;
        }
    }

    /// Settle one list fetch. Independent per list: a rejected fetch leaves
    /// the other three untouched.
    pub fn finish(&mut self, kind: ListKind, result: Result<Vec<Film>, String>) {
        self.in_flight = self.in_flight.saturating_sub(1);
        self.list_mut(kind).settle(result);
    }

    pub fn is_refreshing(&self) -> bool {
        self.in_flight > 0
    }

    /// Optimistically drop a film the user just classified from the
    /// recommended list and bump the resync counter. Returns true when this
    /// was the `RESYNC_EVERY`-th interaction since the last refresh and the
    /// caller should kick off an automatic refresh.
    pub fn record_carousel_interaction(&mut self, id: FilmId) -> bool {
        if let Loadable::Ready(films) = &mut self.recommended {
            films.retain(|f| f.id != id);
        }
        self.interactions_since_refresh += 1;
        if self.interactions_since_refresh >= RESYNC_EVERY {
            self.interactions_since_refresh = 0;
            return true;
        }
        false
    }

    pub fn interactions_since_refresh(&self) -> u32 {
        self.interactions_since_refresh
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kino_model::FilmId;

    fn film(id: i64) -> Film {
        Film {
            id: FilmId(id),
            title: format!("Film {id}"),
            poster_path: None,
            banner_path: None,
            backdrop_path: None,
            genres: vec![],
            overview: None,
            vote_average: None,
            release_date: None,
            runtime: None,
            popularity: None,
            budget: None,
            adult: false,
            directors: vec![],
            actors: vec![],
            writers: vec![],
        }
    }

    #[test]
    fn one_failed_list_does_not_blank_the_others() {
        let mut state = ForYouState::default();
        state.begin_refresh();

        state.finish(ListKind::Popular, Ok(vec![film(1)]));
        state.finish(ListKind::Recommended, Err("boom".into()));
        state.finish(ListKind::Liked, Ok(vec![film(2)]));
        state.finish(ListKind::Disliked, Ok(vec![]));

        assert_eq!(state.popular.ready().unwrap().len(), 1);
        assert_eq!(state.recommended.error(), Some("boom"));
        assert_eq!(state.liked.ready().unwrap().len(), 1);
        assert!(state.disliked.ready().unwrap().is_empty());
        assert!(!state.is_refreshing());
    }

    #[test]
    fn overlapping_refreshes_stay_pending_until_every_fetch_settles() {
        let mut state = ForYouState::default();
        state.begin_refresh();
        state.begin_refresh();

        // The first refresh's four completions drain; the second's are
        // still outstanding.
        for kind in ListKind::ALL {
            state.finish(kind, Ok(vec![]));
        }
        assert!(state.is_refreshing());

        for kind in ListKind::ALL {
            state.finish(kind, Ok(vec![]));
        }
        assert!(!state.is_refreshing());
    }

    #[test]
    fn refresh_failure_keeps_last_known_good_content() {
        let mut state = ForYouState::default();
        state.begin_refresh();
        state.finish(ListKind::Popular, Ok(vec![film(1), film(2)]));

        state.begin_refresh();
        state.finish(ListKind::Popular, Err("server down".into()));

        // Stale-but-present beats empty.
        assert_eq!(state.popular.ready().unwrap().len(), 2);
    }

    #[test]
    fn every_third_interaction_requests_a_resync() {
        let mut state = ForYouState::default();
        state.begin_refresh();
        state.finish(
            ListKind::Recommended,
            Ok(vec![film(1), film(2), film(3), film(4)]),
        );

        assert!(!state.record_carousel_interaction(FilmId(1)));
        assert!(!state.record_carousel_interaction(FilmId(2)));
        assert!(state.record_carousel_interaction(FilmId(3)));
        // Counter reset after the trigger.
        assert_eq!(state.interactions_since_refresh(), 0);
        assert!(!state.record_carousel_interaction(FilmId(4)));
    }

    #[test]
    fn manual_refresh_resets_the_resync_counter() {
        let mut state = ForYouState::default();
        state.record_carousel_interaction(FilmId(1));
        state.record_carousel_interaction(FilmId(2));
        state.begin_refresh();
        assert_eq!(state.interactions_since_refresh(), 0);
        assert!(!state.record_carousel_interaction(FilmId(3)));
    }

    #[test]
    fn carousel_interaction_removes_by_identity() {
        let mut state = ForYouState::default();
        state.begin_refresh();
        state.finish(ListKind::Recommended, Ok(vec![film(1), film(2), film(3)]));

        state.record_carousel_interaction(FilmId(2));
        let remaining: Vec<i64> = state
            .recommended
            .ready()
            .unwrap()
            .iter()
            .map(|f| f.id.as_i64())
            .collect();
        assert_eq!(remaining, vec![1, 3]);

        // Unknown ids still count toward the resync counter.
        state.record_carousel_interaction(FilmId(99));
        assert_eq!(state.interactions_since_refresh(), 2);
    }
}
