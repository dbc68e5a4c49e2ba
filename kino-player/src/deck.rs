//! The recommendation deck: the ordered queue of swipeable films.
//!
//! This is a pure state machine. The update layer owns all I/O; the deck
//! only answers "what changed and what should happen next". Two invariants
//! hold at all times:
//!
//! - no film id appears twice in the queue, and no id in the seen-set is
//!   ever re-admitted;
//! - only the front card can be classified.

use std::collections::{HashSet, VecDeque};

use kino_model::{Decision, Film, FilmId};

/// Queue length below which a top-up fetch is triggered.
pub const LOW_WATER_MARK: usize = 3;

/// How many consecutive batches may come back empty after seen-filtering
/// before a top-up cycle gives up. Exhausting this is not an error, it just
/// means there is no new content right now.
pub const MAX_EMPTY_BATCH_ATTEMPTS: u8 = 3;

/// Whether a top-up cycle is currently running. At most one runs at a time;
/// `attempt` counts the batches fetched within the cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchState {
    #[default]
    Idle,
    InFlight {
        attempt: u8,
    },
}

#[derive(Debug, Clone, Default)]
pub struct DeckState {
    queue: VecDeque<Film>,
    seen: HashSet<FilmId>,
    fetch: FetchState,
    detailed: Option<FilmId>,
}

/// Successful classify outcome.
#[derive(Debug, Clone, PartialEq)]
pub struct Classified {
    pub film: Film,
    pub decision: Decision,
    /// True when this classify dropped the queue below the low-water mark
    /// and no fetch was already in flight. The caller gets exactly one
    /// trigger per drop, not one per remaining card.
    pub needs_top_up: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClassifyError {
    /// Only the front card is interactive; anything else is a stale intent
    /// (e.g. a gesture that resolved after the queue already moved on).
    #[error("film {0} is not the front of the deck")]
    NotFront(FilmId),
}

impl DeckState {
    /// Admit a fetched batch, filtering films already seen this session or
    /// already queued (including duplicates within the batch itself).
    /// Returns how many films were admitted.
    pub fn admit_batch(&mut self, batch: Vec<Film>) -> usize {
        let mut queued: HashSet<FilmId> = self.queue.iter().map(|f| f.id).collect();
        let mut admitted = 0;
        for film in batch {
            if self.seen.contains(&film.id) || !queued.insert(film.id) {
                continue;
            }
            self.queue.push_back(film);
            admitted += 1;
        }
        admitted
    }

    /// Classify the front film. On success the id joins the seen-set and the
    /// film leaves the queue by identity, before any network confirmation.
    pub fn classify(
        &mut self,
        id: FilmId,
        decision: Decision,
    ) -> Result<Classified, ClassifyError> {
        match self.queue.front() {
            Some(front) if front.id == id => {}
            _ => return Err(ClassifyError::NotFront(id)),
        }

        self.seen.insert(id);
        // Removal is by id, never by index: a top-up may have appended while
        // the user was mid-gesture.
        let Some(pos) = self.queue.iter().position(|f| f.id == id) else {
            return Err(ClassifyError::NotFront(id));
        };
        let Some(film) = self.queue.remove(pos) else {
            return Err(ClassifyError::NotFront(id));
        };

        if self.detailed == Some(id) {
            self.detailed = None;
        }

        Ok(Classified {
            film,
            decision,
            needs_top_up: self.is_low() && !self.is_fetching(),
        })
    }

    /// Record a classification that happened on another surface (the For You
    /// carousel or a detail modal opened from it). The film must never
    /// resurface in the deck, so it joins the seen-set and leaves the queue
    /// if it happens to be waiting in it. Returns true when the removal
    /// dropped the queue below the low-water mark with no fetch in flight.
    pub fn note_external_interaction(&mut self, id: FilmId) -> bool {
        self.seen.insert(id);
        if let Some(pos) = self.queue.iter().position(|f| f.id == id) {
            self.queue.remove(pos);
            if self.detailed == Some(id) {
                self.detailed = None;
            }
        }
        self.is_low() && !self.is_fetching()
    }

    /// Start a top-up cycle. Returns the attempt number to fetch with, or
    /// `None` when a cycle is already running.
    pub fn begin_top_up(&mut self) -> Option<u8> {
        match self.fetch {
            FetchState::Idle => {
                self.fetch = FetchState::InFlight { attempt: 1 };
                Some(1)
            }
            FetchState::InFlight { .. } => None,
        }
    }

    /// Digest the result of one fetched batch within the running cycle.
    /// A batch that admitted nothing is retried up to the bounded attempt
    /// count; anything else ends the cycle. Returns the next attempt number
    /// when a retry should be issued.
    pub fn on_batch_admitted(&mut self, admitted: usize) -> Option<u8> {
        let FetchState::InFlight { attempt } = self.fetch else {
            return None;
        };
        if admitted == 0 && attempt < MAX_EMPTY_BATCH_ATTEMPTS {
            let next = attempt + 1;
            self.fetch = FetchState::InFlight { attempt: next };
            return Some(next);
        }
        self.fetch = FetchState::Idle;
        None
    }

    /// End the running cycle without admitting anything (fetch failure).
    pub fn abort_fetch(&mut self) {
        self.fetch = FetchState::Idle;
    }

    pub fn is_fetching(&self) -> bool {
        matches!(self.fetch, FetchState::InFlight { .. })
    }

    fn is_low(&self) -> bool {
        self.queue.len() < LOW_WATER_MARK
    }

    /// The interactive card.
    pub fn front(&self) -> Option<&Film> {
        self.queue.front()
    }

    /// The static card peeking out behind the front one.
    pub fn second(&self) -> Option<&Film> {
        self.queue.get(1)
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn films(&self) -> impl Iterator<Item = &Film> {
        self.queue.iter()
    }

    pub fn seen_len(&self) -> usize {
        self.seen.len()
    }

    /// Open the detail modal for a queued film. No effect on the queue.
    pub fn open_detail(&mut self, id: FilmId) {
        if self.queue.iter().any(|f| f.id == id) {
            self.detailed = Some(id);
        }
    }

    pub fn close_detail(&mut self) {
        self.detailed = None;
    }

    pub fn detailed_film(&self) -> Option<&Film> {
        let id = self.detailed?;
        self.queue.iter().find(|f| f.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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

    fn films(ids: &[i64]) -> Vec<Film> {
        ids.iter().copied().map(film).collect()
    }

    fn queue_ids(deck: &DeckState) -> Vec<i64> {
        deck.films().map(|f| f.id.as_i64()).collect()
    }

    #[test]
    fn admit_filters_seen_and_queued_duplicates() {
        let mut deck = DeckState::default();
        assert_eq!(deck.admit_batch(films(&[1, 2, 2, 3])), 3);
        assert_eq!(queue_ids(&deck), vec![1, 2, 3]);

        // A later batch repeating queued ids admits only the new one.
        assert_eq!(deck.admit_batch(films(&[2, 3, 4])), 1);
        assert_eq!(queue_ids(&deck), vec![1, 2, 3, 4]);
    }

    #[test]
    fn classified_ids_are_never_readmitted() {
        let mut deck = DeckState::default();
        deck.admit_batch(films(&[1, 2, 3, 4]));
        deck.classify(FilmId(1), Decision::Dislike).unwrap();

        assert_eq!(deck.admit_batch(films(&[1, 5])), 1);
        assert_eq!(queue_ids(&deck), vec![2, 3, 4, 5]);
    }

    #[test]
    fn only_the_front_card_is_classifiable() {
        let mut deck = DeckState::default();
        deck.admit_batch(films(&[1, 2, 3]));

        assert_eq!(
            deck.classify(FilmId(3), Decision::Like),
            Err(ClassifyError::NotFront(FilmId(3)))
        );
        assert_eq!(queue_ids(&deck), vec![1, 2, 3]);
        assert_eq!(deck.seen_len(), 0);

        let outcome = deck.classify(FilmId(1), Decision::Like).unwrap();
        assert_eq!(outcome.film.id, FilmId(1));
        assert_eq!(queue_ids(&deck), vec![2, 3]);
    }

    #[test]
    fn classify_on_empty_deck_is_rejected() {
        let mut deck = DeckState::default();
        assert!(deck.classify(FilmId(1), Decision::Like).is_err());
    }

    #[test]
    fn seen_set_grows_by_one_per_classify() {
        let mut deck = DeckState::default();
        deck.admit_batch(films(&[1, 2, 3, 4, 5]));
        for id in 1..=4 {
            deck.classify(FilmId(id), Decision::Like).unwrap();
        }
        assert_eq!(deck.seen_len(), 4);
    }

    #[test]
    fn example_scenario_from_the_product_contract() {
        // queue = [A, B, C], seen = {}
        let mut deck = DeckState::default();
        deck.admit_batch(films(&[10, 20, 30]));

        let out = deck.classify(FilmId(10), Decision::Like).unwrap();
        assert_eq!(out.decision, Decision::Like);
        assert_eq!(queue_ids(&deck), vec![20, 30]);
        assert_eq!(deck.seen_len(), 1);

        // C is not front, B is.
        assert!(deck.classify(FilmId(30), Decision::Dislike).is_err());
        deck.classify(FilmId(20), Decision::Dislike).unwrap();
        assert_eq!(queue_ids(&deck), vec![30]);
        assert_eq!(deck.seen_len(), 2);
    }

    #[test]
    fn top_up_triggers_once_per_drop_below_low_water() {
        let mut deck = DeckState::default();
        deck.admit_batch(films(&[1, 2, 3, 4]));

        // 4 -> 3: not below the mark yet.
        assert!(!deck.classify(FilmId(1), Decision::Like).unwrap().needs_top_up);
        // 3 -> 2: below the mark, trigger.
        assert!(deck.classify(FilmId(2), Decision::Like).unwrap().needs_top_up);

        // Fetch now in flight: further drops do not re-trigger.
        assert_eq!(deck.begin_top_up(), Some(1));
        assert!(!deck.classify(FilmId(3), Decision::Like).unwrap().needs_top_up);
    }

    #[test]
    fn only_one_top_up_cycle_at_a_time() {
        let mut deck = DeckState::default();
        assert_eq!(deck.begin_top_up(), Some(1));
        assert_eq!(deck.begin_top_up(), None);
        deck.abort_fetch();
        assert_eq!(deck.begin_top_up(), Some(1));
    }

    #[test]
    fn fully_seen_batches_retry_a_bounded_number_of_times() {
        let mut deck = DeckState::default();
        deck.admit_batch(films(&[1, 2]));
        deck.classify(FilmId(1), Decision::Like).unwrap();
        deck.classify(FilmId(2), Decision::Like).unwrap();

        deck.begin_top_up().unwrap();
        // Server keeps returning films we already acted on.
        assert_eq!(deck.admit_batch(films(&[1, 2])), 0);
        assert_eq!(deck.on_batch_admitted(0), Some(2));
        assert_eq!(deck.admit_batch(films(&[1])), 0);
        assert_eq!(deck.on_batch_admitted(0), Some(3));
        assert_eq!(deck.admit_batch(films(&[2])), 0);
        // Third empty batch: give up, queue stays empty, no spin.
        assert_eq!(deck.on_batch_admitted(0), None);
        assert!(!deck.is_fetching());
        assert!(deck.is_empty());
    }

    #[test]
    fn a_productive_batch_ends_the_cycle() {
        let mut deck = DeckState::default();
        deck.begin_top_up().unwrap();
        let admitted = deck.admit_batch(films(&[7, 8, 9]));
        assert_eq!(deck.on_batch_admitted(admitted), None);
        assert!(!deck.is_fetching());
        assert_eq!(deck.len(), 3);
    }

    #[test]
    fn detail_toggle_has_no_queue_side_effects() {
        let mut deck = DeckState::default();
        deck.admit_batch(films(&[1, 2]));

        deck.open_detail(FilmId(2));
        assert_eq!(deck.detailed_film().unwrap().id, FilmId(2));
        assert_eq!(deck.len(), 2);

        deck.close_detail();
        assert!(deck.detailed_film().is_none());

        // Unknown ids are ignored.
        deck.open_detail(FilmId(99));
        assert!(deck.detailed_film().is_none());
    }

    #[test]
    fn classifying_the_detailed_film_closes_the_detail() {
        let mut deck = DeckState::default();
        deck.admit_batch(films(&[1, 2]));
        deck.open_detail(FilmId(1));
        deck.classify(FilmId(1), Decision::Superlike).unwrap();
        assert!(deck.detailed_film().is_none());
    }

    #[test]
    fn external_interaction_marks_seen_and_removes_mid_queue() {
        let mut deck = DeckState::default();
        deck.admit_batch(films(&[1, 2, 3, 4]));

        deck.note_external_interaction(FilmId(3));
        assert_eq!(queue_ids(&deck), vec![1, 2, 4]);
        assert_eq!(deck.seen_len(), 1);
        assert_eq!(deck.admit_batch(films(&[3])), 0);

        // Films never queued still join the seen-set.
        deck.note_external_interaction(FilmId(50));
        assert_eq!(deck.admit_batch(films(&[50])), 0);
    }
}
