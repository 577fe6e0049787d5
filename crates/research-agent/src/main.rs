use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use shared::{parse_keywords, Config, ResearchPipeline, ResearchReport};
use std::io::{self as stdio, Write};

#[derive(Parser)]
#[command(name = "research-agent")]
#[command(about = "Search, content ideas, social post drafts, and news for a set of keywords")]
struct Args {
    /// Keywords to research (comma-separated values work too)
    keywords: Vec<String>,

    /// Maximum search results to keep per keyword
    #[arg(short, long, default_value = "5", value_parser = clap::value_parser!(u8).range(1..=10))]
    max_results: u8,

    /// Print the report to stdout instead of saving it
    #[arg(long)]
    stdout: bool,
}

fn prompt_keywords() -> Result<Vec<String>> {
    println!("Enter keywords (one per line, blank line to finish):");

    let mut keywords = Vec::new();
    loop {
        print!("> ");
        stdio::stdout().flush()?;

        let mut line = String::new();
        if stdio::stdin().read_line(&mut line)? == 0 {
            break;
        }
        if line.trim().is_empty() {
            break;
        }
        keywords.extend(parse_keywords(&line));
    }

    Ok(keywords)
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let config = Config::from_env()?;

    let keywords: Vec<String> = if args.keywords.is_empty() {
        prompt_keywords()?
    } else {
        args.keywords
            .iter()
            .flat_map(|raw| parse_keywords(raw))
            .collect()
    };

    let pipeline = ResearchPipeline::from_config(&config)?;

    println!("\n🔍 Researching: {}", keywords.join(", "));
    println!("  (Searching, generating content ideas, and fetching news...)");

    let outcome = pipeline.run(&keywords, args.max_results as usize).await?;

    println!("✓ Collected {} search results", outcome.search_results.len());
    println!("✓ Parsed {} content ideas", outcome.ideas.len());
    println!(
        "✓ Drafted {} LinkedIn, {} Instagram, and {} Facebook posts",
        outcome.linkedin_posts.len(),
        outcome.instagram_posts.len(),
        outcome.facebook_posts.len()
    );
    println!("✓ Collected {} news articles", outcome.news_articles.len());

    for warning in &outcome.warnings {
        eprintln!("⚠ {}", warning);
    }

    let now = Utc::now();

    println!("\n📝 Generating research report...");
    let report = ResearchReport::generate(&outcome, now);

    if args.stdout {
        println!("\n{}", report);
    } else {
        let slug = ResearchReport::slug(&outcome.keywords);
        let filepath =
            ResearchReport::save(&report, &slug, now).context("Failed to save report file")?;
        println!("\n✅ Report saved to: {}", filepath.display());
    }

    Ok(())
}
