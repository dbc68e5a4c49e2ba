use crate::film::{Credit, Film};
use url::Url;

/// CDN size discriminants understood by the image host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSize {
    /// 500px wide, used for posters and profile photos.
    W500,
    /// Full resolution, used for banners and backdrops.
    Original,
}

impl ImageSize {
    fn segment(&self) -> &'static str {
        match self {
            ImageSize::W500 => "w500",
            ImageSize::Original => "original",
        }
    }
}

/// Base URL of the image CDN, e.g. `https://image.tmdb.org/t/p/`.
///
/// Path fragments coming off the wire sometimes carry a leading slash;
/// `url` tolerates both forms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageBase(String);

impl ImageBase {
    pub const DEFAULT: &'static str = "https://image.tmdb.org/t/p/";

    pub fn new(base: impl Into<String>) -> Result<Self, url::ParseError> {
        let base = base.into();
        Url::parse(&base)?;
        Ok(Self(base))
    }

    pub fn default_cdn() -> Self {
        Self(Self::DEFAULT.to_string())
    }

    pub fn url(&self, size: ImageSize, path: &str) -> String {
        format!(
            "{}/{}/{}",
            self.0.trim_end_matches('/'),
            size.segment(),
            path.trim_start_matches('/')
        )
    }
}

impl Film {
    /// Poster image URL, `None` when the backend sent no poster path.
    pub fn poster_url(&self, base: &ImageBase) -> Option<String> {
        self.poster_path
            .as_deref()
            .map(|p| base.url(ImageSize::W500, p))
    }

    /// Background banner URL with the banner -> backdrop -> poster fallback
    /// chain the home screen uses.
    pub fn banner_url(&self, base: &ImageBase) -> Option<String> {
        if let Some(p) = self.banner_path.as_deref() {
            return Some(base.url(ImageSize::Original, p));
        }
        if let Some(p) = self.backdrop_path.as_deref() {
            return Some(base.url(ImageSize::Original, p));
        }
        self.poster_url(base)
    }
}

impl Credit {
    /// Profile photo URL for the detail view's cast row.
    pub fn profile_url(&self, base: &ImageBase) -> Option<String> {
        self.profile_path
            .as_deref()
            .filter(|p| !p.is_empty())
            .map(|p| base.url(ImageSize::W500, p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::FilmId;

    fn film() -> Film {
        Film {
            id: FilmId(1),
            title: "T".into(),
            poster_path: Some("/poster.jpg".into()),
            banner_path: None,
            backdrop_path: Some("backdrop.jpg".into()),
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
    fn joins_tolerate_leading_slashes() {
        let base = ImageBase::default_cdn();
        assert_eq!(
            base.url(ImageSize::W500, "/poster.jpg"),
            "https://image.tmdb.org/t/p/w500/poster.jpg"
        );
        assert_eq!(
            base.url(ImageSize::Original, "backdrop.jpg"),
            "https://image.tmdb.org/t/p/original/backdrop.jpg"
        );
    }

    #[test]
    fn banner_falls_back_to_backdrop_then_poster() {
        let base = ImageBase::default_cdn();
        let mut f = film();
        assert_eq!(
            f.banner_url(&base).unwrap(),
            "https://image.tmdb.org/t/p/original/backdrop.jpg"
        );

        f.backdrop_path = None;
        assert_eq!(
            f.banner_url(&base).unwrap(),
            "https://image.tmdb.org/t/p/w500/poster.jpg"
        );

        f.poster_path = None;
        assert!(f.banner_url(&base).is_none());
    }

    #[test]
    fn invalid_base_is_rejected() {
        assert!(ImageBase::new("not a url").is_err());
    }
}
