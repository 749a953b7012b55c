use reqwest::header::ACCEPT;
use reqwest::{Client, Url};
use serde::Deserialize;
use tracing::debug;

use super::{FetchError, Movie, MovieQuery, WordSource};

/// Wire shape of the `/movie` response. The service sends more fields
/// (`id`, `release_date`, votes...) which are not needed here.
#[derive(Debug, Deserialize)]
struct MoviePayload {
    id: Option<i64>,
    title: Option<String>,
    overview: Option<String>,
}

impl From<MoviePayload> for Movie {
    fn from(payload: MoviePayload) -> Self {
        Self {
            title: payload.title.unwrap_or_default(),
            overview: payload.overview.unwrap_or_default(),
        }
    }
}

/// `GET <endpoint>?difficulty=..&language=..[&session_id=..]`
#[derive(Debug, Clone)]
pub struct HttpWordSource {
    client: Client,
    endpoint: Url,
    session_id: Option<String>,
}

impl HttpWordSource {
    pub fn new(endpoint: Url, session_id: Option<String>) -> Self {
        Self::with_client(Client::new(), endpoint, session_id)
    }

    /// Build on top of a shared HTTP client
    pub fn with_client(client: Client, endpoint: Url, session_id: Option<String>) -> Self {
        Self {
            client,
            endpoint,
            session_id,
        }
    }
}

impl WordSource for HttpWordSource {
    #[tracing::instrument(skip_all, fields(difficulty = %query.difficulty, language = %query.language))]
    async fn fetch(&self, query: &MovieQuery) -> Result<Movie, FetchError> {
        let mut params = vec![
            ("difficulty", query.difficulty.as_str()),
            ("language", query.language.as_str()),
        ];
        // The service uses the session to avoid repeating a movie
        if let Some(session_id) = &self.session_id {
            params.push(("session_id", session_id.as_str()));
        }

        let resp = self
            .client
            .get(self.endpoint.clone())
            .query(&params)
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = resp.text().await?;
        let payload: MoviePayload = serde_json::from_str(&body)?;
        debug!(id = ?payload.id, "movie received");
        Ok(payload.into())
    }
}
