/// Strongly typed ID for films.
///
/// Backend ids are opaque integers; the newtype keeps them from being
/// confused with list indices anywhere in the client.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct FilmId(pub i64);

impl FilmId {
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl From<i64> for FilmId {
    fn from(raw: i64) -> Self {
        FilmId(raw)
    }
}

impl std::fmt::Display for FilmId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
