use anyhow::Result;
use serde::Deserialize;

use crate::groq::GroqClient;
use crate::session::SearchProvider;

/// A normalized search result. All three fields are always present.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    pub title: String,
    pub link: String,
    pub snippet: String,
}

/// Structured shapes the agent is known to answer with. A plain prose
/// answer is handled separately in `normalize_payload`.
#[derive(Deserialize)]
#[serde(untagged)]
enum AgentPayload {
    Structured { results: Vec<RawResult> },
    Listing(Vec<RawResult>),
}

#[derive(Deserialize)]
struct RawResult {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    link: Option<String>,
    #[serde(default)]
    snippet: Option<String>,
}

impl RawResult {
    fn into_result(self) -> SearchResult {
        SearchResult {
            title: self.title.unwrap_or_else(|| "No title".to_string()),
            link: self.link.unwrap_or_default(),
            snippet: self.snippet.unwrap_or_default(),
        }
    }
}

impl AgentPayload {
    fn into_results(self) -> Vec<SearchResult> {
        match self {
            AgentPayload::Structured { results } => {
                results.into_iter().map(RawResult::into_result).collect()
            }
            AgentPayload::Listing(items) => {
                items.into_iter().map(RawResult::into_result).collect()
            }
        }
    }
}

/// Search agent backed by the chat model. The model is instructed to act
/// as a search tool for the configured provider and to answer with
/// structured results.
pub struct SearchAgent {
    groq: GroqClient,
    provider: SearchProvider,
}

impl SearchAgent {
    pub fn new(groq: GroqClient) -> Self {
        Self {
            groq,
            provider: SearchProvider::DuckDuckGo,
        }
    }

    pub fn with_provider(mut self, provider: SearchProvider) -> Self {
        self.provider = provider;
        self
    }

    pub async fn search(&self, keyword: &str) -> Result<Vec<SearchResult>> {
        let system = format!(
            "You are a search agent that helps users find information and news using {}. \
             When searching, return results in a structured format. \
             Each result should include a title, link, and snippet. \
             Focus on providing accurate and relevant information. \
             If possible, return results as a JSON list of objects.",
            self.provider.label()
        );
        let query = format!("Find detailed information and news about: {}", keyword);

        let content = self.groq.chat(&system, &query).await?;

        Ok(normalize_payload(&content))
    }
}

/// Normalize whatever shape the agent answered with into uniform records.
/// A prose answer produces a single record carrying the full text as its
/// snippet.
pub fn normalize_payload(content: &str) -> Vec<SearchResult> {
    if let Some(json) = extract_json(content) {
        if let Ok(payload) = serde_json::from_str::<AgentPayload>(json) {
            return payload.into_results();
        }
    }

    vec![SearchResult {
        title: String::new(),
        link: String::new(),
        snippet: content.to_string(),
    }]
}

/// Locate the JSON payload inside an answer that may wrap it in prose.
/// Whichever of `{`/`[` appears first wins.
fn extract_json(text: &str) -> Option<&str> {
    let object = text.find('{').zip(text.rfind('}'));
    let array = text.find('[').zip(text.rfind(']'));

    let (start, end) = match (object, array) {
        (Some((obj_start, obj_end)), Some((arr_start, arr_end))) => {
            if arr_start < obj_start {
                (arr_start, arr_end)
            } else {
                (obj_start, obj_end)
            }
        }
        (Some(span), None) => span,
        (None, Some(span)) => span,
        (None, None) => return None,
    };

    if start < end {
        Some(&text[start..=end])
    } else {
        None
    }
}
