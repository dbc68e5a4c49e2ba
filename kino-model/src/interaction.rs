/// A user decision about a single film.
///
/// `Superlike` doubles as the non-destructive "skip" signal; the backend
/// defines what weight it carries, the client only records it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Decision {
    Like,
    Dislike,
    Superlike,
}

impl Decision {
    /// Path segment used by the interaction endpoint.
    pub fn as_str(&self) -> &'static str {
        match self {
            Decision::Like => "like",
            Decision::Dislike => "dislike",
            Decision::Superlike => "superlike",
        }
    }
}

impl std::fmt::Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_segments() {
        assert_eq!(Decision::Like.as_str(), "like");
        assert_eq!(Decision::Dislike.as_str(), "dislike");
        assert_eq!(Decision::Superlike.as_str(), "superlike");
    }
}
