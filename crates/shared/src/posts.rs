use crate::ideas::ContentIdea;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    LinkedIn,
    Instagram,
    Facebook,
}

impl Platform {
    pub const ALL: [Platform; 3] = [Platform::LinkedIn, Platform::Instagram, Platform::Facebook];

    pub fn label(&self) -> &'static str {
        match self {
            Platform::LinkedIn => "LinkedIn",
            Platform::Instagram => "Instagram",
            Platform::Facebook => "Facebook",
        }
    }
}

/// A templated post draft for one platform.
#[derive(Debug, Clone, PartialEq)]
pub struct PlatformPost {
    pub platform: Platform,
    pub body: String,
}

/// Derive a platform post from an idea. Pure string templating; platform
/// differences are ordering and wording only.
pub fn format_post(idea: &ContentIdea, platform: Platform) -> PlatformPost {
    let key_points = idea.key_points.join("\n");

    let body = match platform {
        Platform::LinkedIn => {
            let hook_line = format!("🚀 *{}* - Grab attention with this hook!", idea.title);
            let interest_peak = "🔍 Let's dive deeper into this topic!";
            let body = format!(
                "{}\n\n*Key Points to Cover:*\n{}\n\nThis is where you expand on the idea and provide valuable insights.",
                idea.description, key_points
            );
            let cta = "👉 What are your thoughts? Share in the comments!";
            let hashtags = "#ContentIdeas #LinkedIn #Engagement";

            format!(
                "{}\n\n{}\n\n{}\n\n{}\n\n{}",
                hook_line, interest_peak, body, cta, hashtags
            )
        }
        Platform::Instagram => format!(
            "✨ *{}*\n\n{}\n\n*Key Highlights:*\n{}\n\n📸 Don't forget to tag us in your posts! #Instagram #ContentIdeas #Inspiration",
            idea.title, idea.description, key_points
        ),
        Platform::Facebook => format!(
            "🌟 *{}*\n\n{}\n\n*Key Points:*\n{}\n\n💬 We want to hear from you! What do you think about this topic? Share your thoughts in the comments below!\n\n#Facebook #Community #Engagement",
            idea.title, idea.description, key_points
        ),
    };

    PlatformPost { platform, body }
}
