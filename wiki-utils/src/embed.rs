use twilight_model::channel::message::embed::Embed;
use twilight_util::builder::embed::EmbedBuilder;

/// Default embed color used across the bot UI.
pub const DEFAULT_EMBED_COLOR: u32 = 0x90_54_30;

/// Color of rule embeds.
pub const RULE_EMBED_COLOR: u32 = 0xE6_7E_22;

/// Build the embed for a single rule, titled and linked to the full rules page.
pub fn build_rule_embed(rules_url: &str, rule_text: &str) -> anyhow::Result<Embed> {
    let embed = EmbedBuilder::new()
        .title("Full Rules")
        .url(rules_url)
        .description(rule_text)
        .color(RULE_EMBED_COLOR)
        .validate()?
        .build();

    Ok(embed)
}

/// Build a plain titled embed with the default styling.
pub fn build_titled_embed(title: &str, description: impl Into<String>) -> anyhow::Result<Embed> {
    let embed = EmbedBuilder::new()
        .title(title)
        .color(DEFAULT_EMBED_COLOR)
        .description(description)
        .validate()?
        .build();

    Ok(embed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_embed_carries_link_and_color() {
        let embed = build_rule_embed("https://wiki.example.org/rules", "**1️⃣ Be Respectful**")
            .unwrap();

        assert_eq!(embed.title.as_deref(), Some("Full Rules"));
        assert_eq!(embed.url.as_deref(), Some("https://wiki.example.org/rules"));
        assert_eq!(embed.description.as_deref(), Some("**1️⃣ Be Respectful**"));
        assert_eq!(embed.color, Some(RULE_EMBED_COLOR));
    }

    #[test]
    fn titled_embed_uses_default_color() {
        let embed = build_titled_embed("Commands", "body").unwrap();

        assert_eq!(embed.color, Some(DEFAULT_EMBED_COLOR));
    }
}
