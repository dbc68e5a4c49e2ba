//! Core data model definitions shared across Kino crates.
#![allow(missing_docs)]

pub mod film;
pub mod ids;
pub mod images;
pub mod interaction;
pub mod sort;

// Intentionally curated re-exports for downstream consumers.
pub use film::{Credit, Film, Genre};
pub use ids::FilmId;
pub use images::{ImageBase, ImageSize};
pub use interaction::Decision;
pub use sort::SortKey;
