use kino_model::{Decision, Film, FilmId};

use super::super::api_client::{ApiClient, ApiError};

pub mod routes {
    pub const NEXT: &str = "/api/films/next";
    pub const POPULAR: &str = "/api/films/popular";
    pub const RECOMMENDATIONS: &str = "/api/films/recommendations";
    pub const LIKED: &str = "/api/interaction/liked";
    pub const DISLIKED: &str = "/api/interaction/disliked";

    pub fn interaction(decision: &str, film_id: i64) -> String {
        format!("/api/interaction/{decision}/{film_id}")
    }
}

/// Film collections and interaction writes.
#[derive(Debug, Clone)]
pub struct FilmService {
    api: ApiClient,
}

impl FilmService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Pull the next batch of swipe-deck candidates. The server decides the
    /// batch size; the client only filters and appends.
    pub async fn next_batch(&self) -> Result<Vec<Film>, ApiError> {
        self.api.get(routes::NEXT).await
    }

    pub async fn popular(&self) -> Result<Vec<Film>, ApiError> {
        self.api.get(routes::POPULAR).await
    }

    pub async fn recommendations(&self) -> Result<Vec<Film>, ApiError> {
        self.api.get(routes::RECOMMENDATIONS).await
    }

    pub async fn liked(&self) -> Result<Vec<Film>, ApiError> {
        self.api.get(routes::LIKED).await
    }

    pub async fn disliked(&self) -> Result<Vec<Film>, ApiError> {
        self.api.get(routes::DISLIKED).await
    }

    /// Persist a classify decision. Fire-and-forget from the caller's point
    /// of view: the local state has already moved on when this resolves.
    pub async fn record_interaction(
        &self,
        film_id: FilmId,
        decision: Decision,
    ) -> Result<(), ApiError> {
        self.api
            .post_ack(&routes::interaction(decision.as_str(), film_id.as_i64()))
            .await
    }
}
