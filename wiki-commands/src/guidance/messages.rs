//! Text templates for guidance commands. Pure, no HTTP.

use twilight_model::id::{
    Id,
    marker::{RoleMarker, UserMarker},
};

use wiki_core::{config::TimeoutFeedback, tables::CHANNELS_AND_ROLES_LINK};

pub const NO_ALIAS_MESSAGE: &str = "No game alias detected in the referenced message.";

pub const CHANNEL_NOT_FOUND_MESSAGE: &str = "Error: Designated channel not found.";

pub const FAFO_WARNING: &str =
    "Warning: If you cannot abide by the rules from previous responses, Click Below To FAFO";

pub fn lfg_guidance(base_link: &str) -> String {
    format!(
        "Looking for a group? Make sure to tag the game you're playing and check out the LFG channels!\n📌 [LFG Guide]({base_link}/discord/lfg)"
    )
}

pub fn host_message(base_link: &str) -> String {
    format!(
        "Interested in hosting or promoting something in PA? Check out our guidelines first:\n📌 [Host/Advertise]({base_link}/servers/hosting)"
    )
}

pub fn biweekly_message(base_link: &str) -> String {
    format!(
        "Curious about our biweekly D&D games or need help creating a character? Start here:\n🧙 [D&D Guide]({base_link}/discord/dnd)"
    )
}

pub fn wow_message(base_link: &str) -> String {
    format!("Curious about WoW? Check out the guide here:\n{base_link}/WoW")
}

pub fn role_mention(role_id: Id<RoleMarker>) -> String {
    format!("<@&{}>", role_id.get())
}

pub fn user_mention(user_id: Id<UserMarker>) -> String {
    format!("<@{}>", user_id.get())
}

pub fn role_not_found_message(category: &str) -> String {
    format!("Could not find role: {category}.")
}

pub fn redirect_notice(category: &str) -> String {
    format!(
        "Detected game role: **{category}**. This is not the correct channel. Please grab the game-specific role from {CHANNELS_AND_ROLES_LINK}.\n"
    )
}

pub fn usage_message(usage: &str) -> String {
    format!("Usage: `{usage}`")
}

/// Result of a self-timeout activation, as reported to the activating user.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SelfTimeoutOutcome {
    Applied,
    MemberNotFound,
    Forbidden,
    Failed(String),
}

impl SelfTimeoutOutcome {
    pub fn message(&self, feedback: TimeoutFeedback) -> String {
        match (self, feedback) {
            (Self::Applied, _) => "You have been timed out for 5 minutes.".to_owned(),
            (_, TimeoutFeedback::Brief) => "Failed to timeout you.".to_owned(),
            (Self::MemberNotFound, _) => "Member not found.".to_owned(),
            (Self::Forbidden, _) => "I don't have permission to timeout you. Please check my role position and permissions.".to_owned(),
            (Self::Failed(reason), _) => {
                format!("An error occurred while attempting to timeout: {reason}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://wiki.example.org";

    #[test]
    fn guidance_links_use_base_link() {
        assert!(lfg_guidance(BASE).ends_with("(https://wiki.example.org/discord/lfg)"));
        assert!(host_message(BASE).ends_with("(https://wiki.example.org/servers/hosting)"));
        assert!(biweekly_message(BASE).ends_with("(https://wiki.example.org/discord/dnd)"));
        assert!(wow_message(BASE).ends_with("\nhttps://wiki.example.org/WoW"));
    }

    #[test]
    fn mentions_use_discord_syntax() {
        assert_eq!(role_mention(Id::new(42)), "<@&42>");
        assert_eq!(user_mention(Id::new(7)), "<@7>");
    }

    #[test]
    fn redirect_notice_points_at_channels_and_roles() {
        let notice = redirect_notice("Escape from Tarkov");

        assert!(notice.starts_with("Detected game role: **Escape from Tarkov**."));
        assert!(notice.contains("<id:customize>"));
    }

    #[test]
    fn detailed_feedback_tells_failures_apart() {
        let detailed = TimeoutFeedback::Detailed;

        assert_eq!(
            SelfTimeoutOutcome::Applied.message(detailed),
            "You have been timed out for 5 minutes."
        );
        assert_eq!(SelfTimeoutOutcome::MemberNotFound.message(detailed), "Member not found.");
        assert!(
            SelfTimeoutOutcome::Forbidden
                .message(detailed)
                .starts_with("I don't have permission")
        );
        assert_eq!(
            SelfTimeoutOutcome::Failed("rate limited".to_owned()).message(detailed),
            "An error occurred while attempting to timeout: rate limited"
        );
    }

    #[test]
    fn brief_feedback_uses_one_failure_line() {
        let brief = TimeoutFeedback::Brief;

        assert_eq!(
            SelfTimeoutOutcome::Applied.message(brief),
            "You have been timed out for 5 minutes."
        );
        for outcome in [
            SelfTimeoutOutcome::MemberNotFound,
            SelfTimeoutOutcome::Forbidden,
            SelfTimeoutOutcome::Failed("rate limited".to_owned()),
        ] {
            assert_eq!(outcome.message(brief), "Failed to timeout you.");
        }
    }
}
