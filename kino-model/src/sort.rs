use crate::film::Film;
use chrono::NaiveDate;

/// Sort orders offered by the liked/disliked gallery.
///
/// All keys sort descending (newest, biggest, best first); films missing a
/// value sink to the bottom. The underlying sort is stable so ties keep the
/// backend's order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    ReleaseDate,
    Budget,
    Rating,
    Popularity,
    Runtime,
}

impl SortKey {
    pub const ALL: [SortKey; 5] = [
        SortKey::ReleaseDate,
        SortKey::Budget,
        SortKey::Rating,
        SortKey::Popularity,
        SortKey::Runtime,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::ReleaseDate => "Release Date",
            SortKey::Budget => "Budget",
            SortKey::Rating => "Rating",
            SortKey::Popularity => "Popularity",
            SortKey::Runtime => "Runtime",
        }
    }

    /// Sort `films` in place according to this key.
    pub fn sort(&self, films: &mut [Film]) {
        match self {
            SortKey::ReleaseDate => films.sort_by(|a, b| {
                parse_date(b.release_date.as_deref()).cmp(&parse_date(a.release_date.as_deref()))
            }),
            SortKey::Budget => {
                films.sort_by(|a, b| b.budget.unwrap_or(0).cmp(&a.budget.unwrap_or(0)))
            }
            SortKey::Rating => films.sort_by(|a, b| b.rating().total_cmp(&a.rating())),
            SortKey::Popularity => films.sort_by(|a, b| {
                b.popularity
                    .unwrap_or(0.0)
                    .total_cmp(&a.popularity.unwrap_or(0.0))
            }),
            SortKey::Runtime => {
                films.sort_by(|a, b| b.runtime.unwrap_or(0).cmp(&a.runtime.unwrap_or(0)))
            }
        }
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

fn parse_date(raw: Option<&str>) -> Option<NaiveDate> {
    raw.and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::FilmId;

    fn film(id: i64, release: Option<&str>, rating: Option<f64>, runtime: Option<u32>) -> Film {
        Film {
            id: FilmId(id),
            title: format!("Film {id}"),
            poster_path: None,
            banner_path: None,
            backdrop_path: None,
            genres: vec![],
            overview: None,
            vote_average: rating,
            release_date: release.map(str::to_string),
            runtime,
            popularity: None,
            budget: None,
            adult: false,
            directors: vec![],
            actors: vec![],
            writers: vec![],
        }
    }

    fn ids(films: &[Film]) -> Vec<i64> {
        films.iter().map(|f| f.id.as_i64()).collect()
    }

    #[test]
    fn release_date_sorts_newest_first_and_missing_last() {
        let mut films = vec![
            film(1, Some("1999-03-31"), None, None),
            film(2, None, None, None),
            film(3, Some("2014-11-05"), None, None),
        ];
        SortKey::ReleaseDate.sort(&mut films);
        assert_eq!(ids(&films), vec![3, 1, 2]);
    }

    #[test]
    fn rating_sorts_descending_with_absent_as_zero() {
        let mut films = vec![
            film(1, None, Some(6.1), None),
            film(2, None, None, None),
            film(3, None, Some(8.8), None),
        ];
        SortKey::Rating.sort(&mut films);
        assert_eq!(ids(&films), vec![3, 1, 2]);
    }

    #[test]
    fn runtime_ties_keep_incoming_order() {
        let mut films = vec![
            film(1, None, None, Some(120)),
            film(2, None, None, Some(120)),
            film(3, None, None, Some(90)),
        ];
        SortKey::Runtime.sort(&mut films);
        assert_eq!(ids(&films), vec![1, 2, 3]);
    }
}
