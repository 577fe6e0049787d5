use anyhow::{Context, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};

const DEFAULT_BASE_URL: &str = "https://newsapi.org";
const PAGE_SIZE: u32 = 5;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewsSource {
    #[serde(default)]
    pub name: Option<String>,
}

/// An article as returned by the news provider. Read-only for display;
/// nullable fields keep their absence until render time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsArticle {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub source: NewsSource,
    #[serde(default, rename = "publishedAt")]
    pub published_at: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct NewsResponse {
    #[serde(default)]
    articles: Vec<NewsArticle>,
}

pub struct NewsApiClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl NewsApiClient {
    pub fn new(api_key: String) -> Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key,
        })
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Fetch up to five trending English-language articles for one keyword,
    /// sorted by popularity. A non-200 response is an error the caller can
    /// absorb without failing the other keywords.
    pub async fn fetch_trending(&self, keyword: &str) -> Result<Vec<NewsArticle>> {
        let url = format!(
            "{}/v2/everything?q={}&sortBy=popularity&language=en&pageSize={}&apiKey={}",
            self.base_url,
            urlencoding::encode(keyword),
            PAGE_SIZE,
            self.api_key
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to fetch articles from the news API")?;

        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("News API returned error: {}", status);
        }

        let news_response = response
            .json::<NewsResponse>()
            .await
            .context("Failed to parse news API response")?;

        Ok(news_response.articles)
    }
}
