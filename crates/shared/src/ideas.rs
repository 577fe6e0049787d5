use anyhow::Result;

use crate::groq::GroqClient;

/// Raw text shown when the generation call fails outright.
pub const GENERATION_FAILED_PLACEHOLDER: &str = "Failed to generate content ideas.";

/// A parsed content idea: title, description, and up to three key points.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentIdea {
    pub title: String,
    pub description: String,
    pub key_points: Vec<String>,
}

/// The generation output: the raw markdown plus the ideas parsed from it.
#[derive(Debug)]
pub struct GeneratedIdeas {
    pub raw: String,
    pub ideas: Vec<ContentIdea>,
}

pub struct IdeaGenerator {
    groq: GroqClient,
}

impl IdeaGenerator {
    pub fn new(groq: GroqClient) -> Self {
        Self { groq }
    }

    /// One generation call over the full keyword set.
    pub async fn generate(&self, keywords: &[String]) -> Result<GeneratedIdeas> {
        let system = "You are a creative content idea generator. \
                      Generate engaging and creative content ideas based on keywords. \
                      Format the output in clear markdown. \
                      Be specific and actionable in your suggestions.";

        let prompt = format!(
            "Given these keywords: {}\n\
             Generate 5 content ideas that would be interesting and engaging.\n\
             For each idea, provide:\n\
             1. A catchy title\n\
             2. A brief description\n\
             3. At least 3 key points to cover\n\n\
             Format the output in markdown, with a blank line between ideas.",
            keywords.join(", ")
        );

        let raw = self.groq.chat(system, &prompt).await?;
        let ideas = parse_idea_blocks(&raw);

        Ok(GeneratedIdeas { raw, ideas })
    }
}

/// Split generated text on blank-line boundaries and read each block
/// positionally: first line title, second description, then up to three
/// key points. Blocks with fewer than two usable lines are skipped.
pub fn parse_idea_blocks(raw: &str) -> Vec<ContentIdea> {
    raw.split("\n\n")
        .filter_map(|block| {
            let lines: Vec<&str> = block
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .collect();

            if lines.len() < 2 {
                return None;
            }

            Some(ContentIdea {
                title: lines[0].to_string(),
                description: lines[1].to_string(),
                key_points: lines[2..].iter().take(3).map(|l| l.to_string()).collect(),
            })
        })
        .collect()
}
