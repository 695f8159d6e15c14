use crate::api::models::{Episode, EpisodeRecord};
use once_cell::sync::Lazy;

static HTTP_CLIENT: Lazy<reqwest::Client> = Lazy::new(reqwest::Client::new);

/// Dev server address of the episode API; override at build time with
/// `RUSTCAST_API_URL`.
const DEFAULT_API_URL: &str = "http://localhost:3333";

#[derive(Debug, Clone, Copy)]
pub enum EpisodeSortField {
    PublishedAt,
}

impl EpisodeSortField {
    fn as_query_value(self) -> &'static str {
        match self {
            Self::PublishedAt => "published_at",
        }
    }
}

#[derive(Debug, Clone, Copy)]
#[allow(dead_code)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    fn as_query_value(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// Client for the read-only episode listing endpoint.
pub struct PodcastClient {
    base_url: String,
}

impl PodcastClient {
    pub fn new() -> Self {
        Self::with_base_url(option_env!("RUSTCAST_API_URL").unwrap_or(DEFAULT_API_URL))
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn episodes_url(&self, limit: u32, sort: EpisodeSortField, order: SortOrder) -> String {
        format!(
            "{}/episodes?_limit={}&_sort={}&_order={}",
            self.base_url,
            limit,
            sort.as_query_value(),
            order.as_query_value()
        )
    }

    fn episode_url(&self, id: &str) -> String {
        format!("{}/episodes/{}", self.base_url, urlencoding::encode(id))
    }

    pub async fn get_episodes(
        &self,
        limit: u32,
        sort: EpisodeSortField,
        order: SortOrder,
    ) -> Result<Vec<Episode>, String> {
        let records = HTTP_CLIENT
            .get(self.episodes_url(limit, sort, order))
            .send()
            .await
            .map_err(|e| e.to_string())?
            .error_for_status()
            .map_err(|e| e.to_string())?
            .json::<Vec<EpisodeRecord>>()
            .await
            .map_err(|e| e.to_string())?;

        Ok(records.into_iter().map(Episode::from).collect())
    }

    pub async fn get_episode(&self, id: &str) -> Result<Episode, String> {
        let record = HTTP_CLIENT
            .get(self.episode_url(id))
            .send()
            .await
            .map_err(|e| e.to_string())?
            .error_for_status()
            .map_err(|e| e.to_string())?
            .json::<EpisodeRecord>()
            .await
            .map_err(|e| e.to_string())?;

        Ok(Episode::from(record))
    }
}

impl Default for PodcastClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn episodes_url_carries_query_parameters() {
        let client = PodcastClient::with_base_url("http://localhost:3333/");
        assert_eq!(
            client.episodes_url(12, EpisodeSortField::PublishedAt, SortOrder::Desc),
            "http://localhost:3333/episodes?_limit=12&_sort=published_at&_order=desc"
        );
    }

    #[test]
    fn episodes_url_supports_ascending_order() {
        let client = PodcastClient::with_base_url("https://api.example.com");
        assert_eq!(
            client.episodes_url(4, EpisodeSortField::PublishedAt, SortOrder::Asc),
            "https://api.example.com/episodes?_limit=4&_sort=published_at&_order=asc"
        );
    }

    #[test]
    fn episode_url_encodes_the_id() {
        let client = PodcastClient::with_base_url("http://localhost:3333");
        assert_eq!(
            client.episode_url("a faixa bônus"),
            "http://localhost:3333/episodes/a%20faixa%20b%C3%B4nus"
        );
    }
}
