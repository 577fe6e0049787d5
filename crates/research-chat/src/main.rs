use anyhow::Result;
use chrono::Utc;
use clap::Parser;
use shared::{Config, ResearchPipeline, ResearchReport, SearchProvider, SessionContext};
use std::io::{self as stdio, Write};

#[derive(Parser)]
#[command(name = "research-chat")]
#[command(about = "Interactive research session with conversational history")]
struct Args {
    /// Search provider to start with (duckduckgo, serper, google)
    #[arg(short, long)]
    provider: Option<String>,

    /// Generative model id to start with
    #[arg(short, long)]
    model: Option<String>,
}

fn print_help() {
    println!("Type keywords (comma separated) to run research.");
    println!("Commands:");
    println!("  /provider <duckduckgo|serper|google>   choose the search provider");
    println!("  /model <id>                            choose the generative model");
    println!("  /limit <1-10>                          set max search results per keyword");
    println!("  /history                               show the conversation so far");
    println!("  /help                                  show this message");
    println!("  /quit                                  leave the session");
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let config = Config::from_env()?;

    let mut session = SessionContext::new();

    if let Some(slug) = args.provider {
        session.settings.provider = SearchProvider::from_slug(&slug).ok_or_else(|| {
            anyhow::anyhow!(
                "Invalid provider: {}. Use 'duckduckgo', 'serper', or 'google'",
                slug
            )
        })?;
    }
    if let Some(model) = args.model {
        session.settings.model = model;
    }

    let mut pipeline = ResearchPipeline::from_session(&config, &session.settings)?;

    println!("🔍 Research Chat");
    println!(
        "Provider: {} | Model: {}\n",
        session.settings.provider.label(),
        session.settings.model
    );
    print_help();

    loop {
        print!("\nresearch> ");
        stdio::stdout().flush()?;

        let mut line = String::new();
        if stdio::stdin().read_line(&mut line)? == 0 {
            break;
        }
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        if let Some(rest) = input.strip_prefix('/') {
            let mut parts = rest.splitn(2, ' ');
            let command = parts.next().unwrap_or("");
            let value = parts.next().map(str::trim).unwrap_or("");

            match command {
                "quit" | "exit" => break,
                "help" => print_help(),
                "history" => {
                    if session.history.is_empty() {
                        println!("No conversation yet.");
                    }
                    for message in &session.history {
                        println!("[{}] {}", message.role, message.content);
                    }
                }
                "provider" => match SearchProvider::from_slug(value) {
                    Some(provider) => {
                        session.settings.provider = provider;
                        pipeline = ResearchPipeline::from_session(&config, &session.settings)?;
                        println!("✓ Search provider set to {}", provider.label());
                    }
                    None => println!(
                        "Unknown provider: {}. Use 'duckduckgo', 'serper', or 'google'.",
                        value
                    ),
                },
                "model" => {
                    if value.is_empty() {
                        println!("Current model: {}", session.settings.model);
                    } else {
                        session.settings.model = value.to_string();
                        pipeline = ResearchPipeline::from_session(&config, &session.settings)?;
                        println!("✓ Model set to {}", value);
                    }
                }
                "limit" => match value.parse::<usize>() {
                    Ok(limit) if (1..=10).contains(&limit) => {
                        session.settings.max_results = limit;
                        println!("✓ Max results per keyword set to {}", limit);
                    }
                    _ => println!("Limit must be a number between 1 and 10."),
                },
                _ => println!("Unknown command: /{}", command),
            }
            continue;
        }

        match pipeline.run_chat(&mut session, input).await {
            Ok(outcome) => {
                for warning in &outcome.warnings {
                    eprintln!("⚠ {}", warning);
                }

                println!("{}\n", outcome.digest());
                println!("{}", ResearchReport::generate(&outcome, Utc::now()));
            }
            Err(e) => eprintln!("⚠ {}", e),
        }
    }

    println!("\n👋 Session ended.");

    Ok(())
}
