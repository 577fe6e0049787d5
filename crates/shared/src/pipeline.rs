use anyhow::Result;

use crate::config::Config;
use crate::groq::GroqClient;
use crate::ideas::{ContentIdea, GeneratedIdeas, IdeaGenerator, GENERATION_FAILED_PLACEHOLDER};
use crate::news::{NewsApiClient, NewsArticle};
use crate::posts::{format_post, Platform, PlatformPost};
use crate::search::{SearchAgent, SearchResult};
use crate::session::{SessionContext, SessionSettings};

/// Everything one run produces, plus the non-fatal warnings collected
/// along the way.
#[derive(Debug)]
pub struct ResearchOutcome {
    pub keywords: Vec<String>,
    pub search_results: Vec<SearchResult>,
    pub raw_ideas: String,
    pub ideas: Vec<ContentIdea>,
    pub linkedin_posts: Vec<PlatformPost>,
    pub instagram_posts: Vec<PlatformPost>,
    pub facebook_posts: Vec<PlatformPost>,
    pub news_articles: Vec<NewsArticle>,
    pub warnings: Vec<String>,
}

impl ResearchOutcome {
    /// One-line summary of a run, used as the assistant turn in session
    /// history.
    pub fn digest(&self) -> String {
        format!(
            "Researched {}: {} search results, {} content ideas, {} news articles.",
            self.keywords.join(", "),
            self.search_results.len(),
            self.ideas.len(),
            self.news_articles.len()
        )
    }
}

/// Split raw keyword input on newlines and commas, trimming each entry and
/// dropping empties.
pub fn parse_keywords(input: &str) -> Vec<String> {
    input
        .split(['\n', ','])
        .map(str::trim)
        .filter(|keyword| !keyword.is_empty())
        .map(str::to_string)
        .collect()
}

pub struct ResearchPipeline {
    search: SearchAgent,
    ideas: IdeaGenerator,
    news: NewsApiClient,
}

impl ResearchPipeline {
    pub fn new(search: SearchAgent, ideas: IdeaGenerator, news: NewsApiClient) -> Self {
        Self {
            search,
            ideas,
            news,
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let search = SearchAgent::new(GroqClient::new(config.groq_api_key.clone())?);
        let ideas = IdeaGenerator::new(GroqClient::new(config.groq_api_key.clone())?);
        let news = NewsApiClient::new(config.news_api_key.clone())?;

        Ok(Self::new(search, ideas, news))
    }

    /// Build a pipeline honoring a session's provider and model choice.
    pub fn from_session(config: &Config, settings: &SessionSettings) -> Result<Self> {
        let search = SearchAgent::new(
            GroqClient::new(config.groq_api_key.clone())?.with_model(settings.model.clone()),
        )
        .with_provider(settings.provider);
        let ideas = IdeaGenerator::new(
            GroqClient::new(config.groq_api_key.clone())?.with_model(settings.model.clone()),
        );
        let news = NewsApiClient::new(config.news_api_key.clone())?;

        Ok(Self::new(search, ideas, news))
    }

    /// Run the full pipeline: per-keyword search with truncation to
    /// `max_results`, one idea-generation pass over all keywords, post
    /// derivation for every platform, then per-keyword news. Strictly
    /// sequential. A degraded stage contributes empty output and a
    /// warning; only invalid input aborts the run.
    pub async fn run(&self, keywords: &[String], max_results: usize) -> Result<ResearchOutcome> {
        let keywords: Vec<String> = keywords
            .iter()
            .map(|keyword| keyword.trim().to_string())
            .filter(|keyword| !keyword.is_empty())
            .collect();

        if keywords.is_empty() {
            anyhow::bail!("Please enter at least one keyword");
        }

        let mut warnings = Vec::new();

        let mut search_results = Vec::new();
        for keyword in &keywords {
            match self.search.search(keyword).await {
                Ok(results) => search_results.extend(results.into_iter().take(max_results)),
                Err(e) => warnings.push(format!("Search failed for '{}': {}", keyword, e)),
            }
        }

        let generated = match self.ideas.generate(&keywords).await {
            Ok(generated) => generated,
            Err(e) => {
                warnings.push(format!("Content generation failed: {}", e));
                GeneratedIdeas {
                    raw: GENERATION_FAILED_PLACEHOLDER.to_string(),
                    ideas: Vec::new(),
                }
            }
        };

        // One parsed sequence feeds every platform so the drafts cannot
        // disagree with each other.
        let linkedin_posts = derive_posts(&generated.ideas, Platform::LinkedIn);
        let instagram_posts = derive_posts(&generated.ideas, Platform::Instagram);
        let facebook_posts = derive_posts(&generated.ideas, Platform::Facebook);

        let mut news_articles = Vec::new();
        for keyword in &keywords {
            match self.news.fetch_trending(keyword).await {
                Ok(articles) => news_articles.extend(articles),
                Err(e) => warnings.push(format!("News fetch failed for '{}': {}", keyword, e)),
            }
        }

        Ok(ResearchOutcome {
            keywords,
            search_results,
            raw_ideas: generated.raw,
            ideas: generated.ideas,
            linkedin_posts,
            instagram_posts,
            facebook_posts,
            news_articles,
            warnings,
        })
    }

    /// Chat entry point: parse the input line into keywords, run with the
    /// session's result limit, then record the exchange. The session is
    /// mutated here and nowhere else.
    pub async fn run_chat(
        &self,
        session: &mut SessionContext,
        input: &str,
    ) -> Result<ResearchOutcome> {
        let keywords = parse_keywords(input);
        let outcome = self.run(&keywords, session.settings.max_results).await?;

        session.record(input, &outcome.digest());

        Ok(outcome)
    }
}

fn derive_posts(ideas: &[ContentIdea], platform: Platform) -> Vec<PlatformPost> {
    ideas.iter().map(|idea| format_post(idea, platform)).collect()
}
