use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use std::fs;
use std::path::PathBuf;

use crate::pipeline::ResearchOutcome;
use crate::posts::PlatformPost;

/// Renders a run as one markdown document with the six labeled result
/// sections, and saves it next to the user's other documents.
pub struct ResearchReport;

impl ResearchReport {
    pub fn generate(outcome: &ResearchOutcome, date: DateTime<Utc>) -> String {
        let mut md = String::new();

        md.push_str(&format!(
            "# Research Report: {}\n",
            outcome.keywords.join(", ")
        ));
        md.push_str(&format!(
            "Prepared {}\n\n",
            date.format("%A, %-d %B %Y")
        ));

        md.push_str("## Search Results\n\n");
        if outcome.search_results.is_empty() {
            md.push_str("No results found.\n\n");
        } else {
            for (idx, result) in outcome.search_results.iter().enumerate() {
                md.push_str(&format!("### Result {}\n", idx + 1));
                if !result.title.is_empty() && result.title != "No title" {
                    md.push_str(&format!("{}\n", result.title));
                }
                if !result.link.is_empty() {
                    md.push_str(&format!("🔗 [{}]({})\n", result.link, result.link));
                }
                if !result.snippet.is_empty() {
                    md.push_str(&format!("{}\n", result.snippet));
                }
                md.push('\n');
            }
        }

        md.push_str("## Content Ideas\n\n");
        md.push_str(outcome.raw_ideas.trim_end());
        md.push_str("\n\n");

        md.push_str("## News Articles\n\n");
        if outcome.news_articles.is_empty() {
            md.push_str("No news articles found.\n\n");
        } else {
            for (idx, article) in outcome.news_articles.iter().enumerate() {
                md.push_str(&format!("### News Article {}\n", idx + 1));
                md.push_str(&format!(
                    "**Title:** {}\n",
                    article.title.as_deref().unwrap_or("No title")
                ));
                md.push_str(&format!(
                    "**Description:** {}\n",
                    article.description.as_deref().unwrap_or("No description")
                ));
                md.push_str(&format!(
                    "**Source:** {}\n",
                    article.source.name.as_deref().unwrap_or("Unknown Source")
                ));
                md.push_str(&format!(
                    "**Published At:** {}\n",
                    article.published_at.as_deref().unwrap_or("No date provided")
                ));
                if let Some(url) = article.url.as_deref() {
                    if !url.is_empty() {
                        md.push_str(&format!("[Read more here]({})\n", url));
                    }
                }
                md.push('\n');
            }
        }

        Self::push_post_section(&mut md, "LinkedIn Posts", &outcome.linkedin_posts);
        Self::push_post_section(&mut md, "Instagram Posts", &outcome.instagram_posts);
        Self::push_post_section(&mut md, "Facebook Posts", &outcome.facebook_posts);

        md
    }

    fn push_post_section(md: &mut String, heading: &str, posts: &[PlatformPost]) {
        md.push_str(&format!("## {}\n\n", heading));

        if posts.is_empty() {
            md.push_str("No posts generated.\n\n");
            return;
        }

        for (idx, post) in posts.iter().enumerate() {
            md.push_str(&format!("### {} Post {}\n\n", post.platform.label(), idx + 1));
            md.push_str(&post.body);
            md.push_str("\n\n");
        }
    }

    /// Filename-safe slug derived from the first keyword.
    pub fn slug(keywords: &[String]) -> String {
        let base = keywords
            .first()
            .map(|keyword| keyword.to_lowercase())
            .unwrap_or_default();

        let slug: String = base
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
            .collect();
        let slug = slug.trim_matches('-').to_string();

        if slug.is_empty() {
            "research".to_string()
        } else {
            slug
        }
    }

    pub fn save(content: &str, slug: &str, date: DateTime<Utc>) -> Result<PathBuf> {
        let filename = format!("research-{}-{}.md", slug, date.format("%Y-%m-%d"));

        let documents_dir = dirs::document_dir().unwrap_or_else(|| PathBuf::from("."));
        let filepath = documents_dir.join(&filename);

        fs::write(&filepath, content).context("Failed to write report file")?;

        Ok(filepath)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ideas::ContentIdea;
    use crate::news::{NewsArticle, NewsSource};
    use crate::posts::{format_post, Platform};
    use crate::search::SearchResult;
    use chrono::TimeZone;

    fn sample_outcome() -> ResearchOutcome {
        let idea = ContentIdea {
            title: "Title A".to_string(),
            description: "Desc A".to_string(),
            key_points: vec!["Point1".to_string(), "Point2".to_string()],
        };

        ResearchOutcome {
            keywords: vec!["electric vehicles".to_string()],
            search_results: vec![SearchResult {
                title: "EV adoption".to_string(),
                link: "https://example.com/ev".to_string(),
                snippet: "Adoption keeps climbing.".to_string(),
            }],
            raw_ideas: "Title A\nDesc A\nPoint1\nPoint2".to_string(),
            ideas: vec![idea.clone()],
            linkedin_posts: vec![format_post(&idea, Platform::LinkedIn)],
            instagram_posts: vec![format_post(&idea, Platform::Instagram)],
            facebook_posts: vec![format_post(&idea, Platform::Facebook)],
            news_articles: vec![NewsArticle {
                title: None,
                description: None,
                source: NewsSource { name: None },
                published_at: None,
                url: None,
            }],
            warnings: Vec::new(),
        }
    }

    #[test]
    fn test_report_contains_all_six_sections_in_order() {
        let date = Utc.with_ymd_and_hms(2026, 8, 7, 12, 0, 0).unwrap();
        let report = ResearchReport::generate(&sample_outcome(), date);

        let sections = [
            "## Search Results",
            "## Content Ideas",
            "## News Articles",
            "## LinkedIn Posts",
            "## Instagram Posts",
            "## Facebook Posts",
        ];

        let mut last = 0;
        for section in sections {
            let position = report[last..]
                .find(section)
                .unwrap_or_else(|| panic!("missing section: {}", section));
            last += position;
        }
    }

    #[test]
    fn test_report_renders_search_results_and_ideas() {
        let date = Utc.with_ymd_and_hms(2026, 8, 7, 12, 0, 0).unwrap();
        let report = ResearchReport::generate(&sample_outcome(), date);

        assert!(report.contains("# Research Report: electric vehicles"));
        assert!(report.contains("EV adoption"));
        assert!(report.contains("🔗 [https://example.com/ev](https://example.com/ev)"));
        assert!(report.contains("Title A"));
        assert!(report.contains("Point1"));
    }

    #[test]
    fn test_missing_article_fields_get_display_defaults() {
        let date = Utc.with_ymd_and_hms(2026, 8, 7, 12, 0, 0).unwrap();
        let report = ResearchReport::generate(&sample_outcome(), date);

        assert!(report.contains("**Title:** No title"));
        assert!(report.contains("**Description:** No description"));
        assert!(report.contains("**Source:** Unknown Source"));
        assert!(report.contains("**Published At:** No date provided"));
        assert!(!report.contains("[Read more here]"));
    }

    #[test]
    fn test_empty_sections_keep_their_headings() {
        let mut outcome = sample_outcome();
        outcome.search_results.clear();
        outcome.news_articles.clear();
        outcome.linkedin_posts.clear();

        let date = Utc.with_ymd_and_hms(2026, 8, 7, 12, 0, 0).unwrap();
        let report = ResearchReport::generate(&outcome, date);

        assert!(report.contains("## Search Results\n\nNo results found."));
        assert!(report.contains("## News Articles\n\nNo news articles found."));
        assert!(report.contains("## LinkedIn Posts\n\nNo posts generated."));
    }

    #[test]
    fn test_slug_from_first_keyword() {
        assert_eq!(
            ResearchReport::slug(&["Electric Vehicles".to_string()]),
            "electric-vehicles"
        );
        assert_eq!(ResearchReport::slug(&["rust!".to_string()]), "rust");
        assert_eq!(ResearchReport::slug(&[]), "research");
    }
}
