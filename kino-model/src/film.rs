use crate::ids::FilmId;

/// A film as served by the backend.
///
/// Films are read-only on the client: only membership in local sequences
/// ever changes, never the content of a `Film` itself. Wire format is JSON
/// with camelCase keys; image paths are either present or absent, never
/// empty-string defaults.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Film {
    pub id: FilmId,
    pub title: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub poster_path: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub banner_path: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub backdrop_path: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub genres: Vec<Genre>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub overview: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub vote_average: Option<f64>,
    /// `YYYY-MM-DD` as produced by the backend.
    #[cfg_attr(feature = "serde", serde(default))]
    pub release_date: Option<String>,
    /// Runtime in minutes.
    #[cfg_attr(feature = "serde", serde(default))]
    pub runtime: Option<u32>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub popularity: Option<f64>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub budget: Option<u64>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub adult: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub directors: Vec<Credit>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub actors: Vec<Credit>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub writers: Vec<Credit>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Genre {
    pub id: i64,
    pub name: String,
}

/// A credit record (director, actor or writer).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Credit {
    pub id: i64,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub profile_path: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub popularity: Option<f64>,
}

impl Film {
    /// Rating with the backend's "absent means unrated" collapsed to 0.
    pub fn rating(&self) -> f64 {
        self.vote_average.unwrap_or(0.0)
    }

    /// Release year parsed from the wire date, if any.
    pub fn release_year(&self) -> Option<i32> {
        self.release_date
            .as_deref()
            .and_then(|d| d.split('-').next())
            .and_then(|y| y.parse().ok())
    }

    /// Runtime formatted as `2h 16m`, or `None` when the backend omitted it.
    pub fn runtime_display(&self) -> Option<String> {
        self.runtime
            .map(|mins| format!("{}h {}m", mins / 60, mins % 60))
    }

    /// Actors ordered by descending popularity, for the detail view.
    pub fn actors_by_popularity(&self) -> Vec<&Credit> {
        let mut actors: Vec<&Credit> = self.actors.iter().collect();
        actors.sort_by(|a, b| {
            b.popularity
                .unwrap_or(0.0)
                .total_cmp(&a.popularity.unwrap_or(0.0))
        });
        actors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(feature = "serde")]
    #[test]
    fn film_deserializes_from_backend_json() {
        let json = r#"{
            "id": 27205,
            "title": "Inception",
            "posterPath": "/inception.jpg",
            "backdropPath": "/inception-wide.jpg",
            "genres": [{"id": 28, "name": "Action"}, {"id": 878, "name": "Science Fiction"}],
            "overview": "A thief who steals corporate secrets.",
            "voteAverage": 8.4,
            "releaseDate": "2010-07-15",
            "runtime": 148,
            "popularity": 91.5,
            "budget": 160000000,
            "actors": [{"id": 6193, "name": "Leonardo DiCaprio", "profilePath": "/leo.jpg", "popularity": 45.0}]
        }"#;

        let film: Film = serde_json::from_str(json).unwrap();
        assert_eq!(film.id, FilmId(27205));
        assert_eq!(film.genres.len(), 2);
        assert_eq!(film.release_year(), Some(2010));
        assert_eq!(film.runtime_display().as_deref(), Some("2h 28m"));
        assert!(film.banner_path.is_none());
        assert!(!film.adult);
        assert!(film.directors.is_empty());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn sparse_film_defaults_are_absent_not_empty() {
        let film: Film = serde_json::from_str(r#"{"id": 1, "title": "Untitled"}"#).unwrap();
        assert_eq!(film.rating(), 0.0);
        assert!(film.poster_path.is_none());
        assert!(film.overview.is_none());
        assert!(film.release_year().is_none());
    }

    #[test]
    fn actors_sort_by_popularity_descending() {
        let film = Film {
            id: FilmId(1),
            title: "T".into(),
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
            actors: vec![
                Credit {
                    id: 1,
                    name: "Bit Part".into(),
                    profile_path: None,
                    popularity: Some(2.0),
                },
                Credit {
                    id: 2,
                    name: "Lead".into(),
                    profile_path: None,
                    popularity: Some(50.0),
                },
                Credit {
                    id: 3,
                    name: "Unknown".into(),
                    profile_path: None,
                    popularity: None,
                },
            ],
            writers: vec![],
        };

        let ordered = film.actors_by_popularity();
        assert_eq!(ordered[0].name, "Lead");
        assert_eq!(ordered[2].name, "Unknown");
    }
}
