use crate::groq::{Message, DEFAULT_MODEL};

/// Search backends the agent can be pointed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchProvider {
    DuckDuckGo,
    Serper,
    Google,
}

impl SearchProvider {
    pub fn from_slug(slug: &str) -> Option<Self> {
        match slug {
            "duckduckgo" | "ddg" => Some(SearchProvider::DuckDuckGo),
            "serper" => Some(SearchProvider::Serper),
            "google" => Some(SearchProvider::Google),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SearchProvider::DuckDuckGo => "DuckDuckGo",
            SearchProvider::Serper => "Serper",
            SearchProvider::Google => "Google",
        }
    }
}

/// In-session settings the chat variant can change between runs.
#[derive(Debug, Clone)]
pub struct SessionSettings {
    pub provider: SearchProvider,
    pub model: String,
    pub max_results: usize,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            provider: SearchProvider::DuckDuckGo,
            model: DEFAULT_MODEL.to_string(),
            max_results: 5,
        }
    }
}

/// Per-session state for the chat variant: settings plus an append-only
/// conversation history. Lives for one interactive session, torn down on
/// session end.
#[derive(Debug, Default)]
pub struct SessionContext {
    pub settings: SessionSettings,
    pub history: Vec<Message>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one user/assistant exchange to the history.
    pub fn record(&mut self, user: &str, assistant: &str) {
        self.history.push(Message::user(user));
        self.history.push(Message::assistant(assistant));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_appends_both_roles_in_order() {
        let mut session = SessionContext::new();

        session.record("rust, tokio", "Researched rust, tokio: 3 search results.");
        session.record("serde", "Researched serde: 1 search result.");

        assert_eq!(session.history.len(), 4);
        assert_eq!(session.history[0].role, "user");
        assert_eq!(session.history[0].content, "rust, tokio");
        assert_eq!(session.history[1].role, "assistant");
        assert_eq!(session.history[3].role, "assistant");
    }

    #[test]
    fn test_provider_from_slug() {
        assert_eq!(
            SearchProvider::from_slug("duckduckgo"),
            Some(SearchProvider::DuckDuckGo)
        );
        assert_eq!(SearchProvider::from_slug("ddg"), Some(SearchProvider::DuckDuckGo));
        assert_eq!(SearchProvider::from_slug("serper"), Some(SearchProvider::Serper));
        assert_eq!(SearchProvider::from_slug("google"), Some(SearchProvider::Google));
        assert_eq!(SearchProvider::from_slug("bing"), None);
    }

    #[test]
    fn test_default_settings() {
        let settings = SessionSettings::default();

        assert_eq!(settings.provider, SearchProvider::DuckDuckGo);
        assert_eq!(settings.model, DEFAULT_MODEL);
        assert_eq!(settings.max_results, 5);
    }
}
