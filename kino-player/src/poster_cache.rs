//! Session-lifetime cache of decoded poster handles.

use std::collections::{HashMap, HashSet};

use iced::widget::image;
use kino_model::{Film, FilmId, ImageBase};

#[derive(Debug, Clone, Default)]
pub struct PosterCache {
    handles: HashMap<FilmId, image::Handle>,
    pending: HashSet<FilmId>,
    failed: HashSet<FilmId>,
}

impl PosterCache {
    pub fn get(&self, id: FilmId) -> Option<&image::Handle> {
        self.handles.get(&id)
    }

    /// Decide whether a fetch should be launched for this film's poster.
    /// Returns the CDN URL to pull, and marks the film pending so repeat
    /// admissions don't double-fetch.
    pub fn request(&mut self, film: &Film, base: &ImageBase) -> Option<(FilmId, String)> {
        if self.handles.contains_key(&film.id)
            || self.pending.contains(&film.id)
            || self.failed.contains(&film.id)
        {
            return None;
        }
        let url = film.poster_url(base)?;
        self.pending.insert(film.id);
        Some((film.id, url))
    }

    pub fn insert(&mut self, id: FilmId, bytes: Vec<u8>) {
        self.pending.remove(&id);
        self.handles.insert(id, image::Handle::from_bytes(bytes));
    }

    /// A failed fetch leaves the placeholder in place for the rest of the
    /// session rather than retrying on every render.
    pub fn mark_failed(&mut self, id: FilmId) {
        self.pending.remove(&id);
        self.failed.insert(id);
    }
}
