use std::{
    collections::HashMap,
    env::{self, VarError},
};

use twilight_model::id::{Id, marker::ChannelMarker};
use wiki_utils::{alias::AliasTable, permissions::AllowedRoleSet};

use crate::tables::{
    ALIASES, ALLOWED_ROLES, BETA_BASE_LINK, CHANNEL_ROUTES, DEFAULT_BASE_LINK,
};

/// Environment variable holding the bot token.
pub const TOKEN_VAR: &str = "DISCORD_TOKEN";
/// Environment variable listing the enabled command sets, comma-separated.
pub const COMMAND_SETS_VAR: &str = "WIKI_COMMAND_SETS";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("environment variable {name} is not set or not valid unicode")]
    Var {
        name: &'static str,
        #[source]
        source: VarError,
    },
    #[error("unknown command set `{0}`, expected `default` or `beta`")]
    UnknownCommandSet(String),
    #[error("WIKI_COMMAND_SETS enables no command sets")]
    NoCommandSets,
    #[error("alias pattern failed to compile: {0}")]
    AliasPattern(#[from] regex::Error),
}

/// Designated channel per game role.
#[derive(Clone, Debug, Default)]
pub struct ChannelRouteTable {
    routes: HashMap<String, Id<ChannelMarker>>,
}

impl ChannelRouteTable {
    pub fn channel_for(&self, category: &str) -> Option<Id<ChannelMarker>> {
        self.routes.get(category).copied()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, Id<ChannelMarker>)> for ChannelRouteTable {
    fn from_iter<I: IntoIterator<Item = (S, Id<ChannelMarker>)>>(iter: I) -> Self {
        Self {
            routes: iter
                .into_iter()
                .map(|(category, channel_id)| (category.into(), channel_id))
                .collect(),
        }
    }
}

/// How `lfg` treats a detected game.
#[derive(Clone, Debug)]
pub enum LfgStyle {
    /// Mention the game role (or its name) above the guidance.
    Mention,
    /// Mention role and author, and redirect posts made outside the game's channel.
    Redirect(ChannelRouteTable),
}

/// What happens to a self-timeout control once it goes idle.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ControlExpiry {
    StripComponents,
    DeleteMessage,
}

/// How much detail a failed self-timeout reports back to the clicker.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TimeoutFeedback {
    /// One generic failure line.
    Brief,
    /// Separate lines for a missing member, missing permission and other errors.
    Detailed,
}

/// Everything that distinguishes one command set from another.
#[derive(Clone, Debug)]
pub struct CommandSetConfig {
    /// Stable identifier, also embedded in component custom ids.
    pub key: &'static str,
    /// Heading used by `help`.
    pub label: &'static str,
    /// Prepended to every command name of this set.
    pub name_prefix: &'static str,
    /// Wiki origin used in guidance links.
    pub base_link: String,
    pub aliases: AliasTable,
    pub allowed_roles: AllowedRoleSet,
    pub lfg_style: LfgStyle,
    pub control_expiry: ControlExpiry,
    pub timeout_feedback: TimeoutFeedback,
}

impl CommandSetConfig {
    pub const DEFAULT_KEY: &'static str = "default";
    pub const BETA_KEY: &'static str = "beta";

    pub fn default_set() -> Self {
        Self {
            key: Self::DEFAULT_KEY,
            label: "Wiki",
            name_prefix: "",
            base_link: DEFAULT_BASE_LINK.to_owned(),
            aliases: ALIASES.iter().copied().collect(),
            allowed_roles: ALLOWED_ROLES.iter().copied().collect(),
            lfg_style: LfgStyle::Mention,
            control_expiry: ControlExpiry::StripComponents,
            timeout_feedback: TimeoutFeedback::Brief,
        }
    }

    pub fn beta_set() -> Self {
        let routes = CHANNEL_ROUTES
            .iter()
            .map(|&(category, channel_id)| (category, Id::new(channel_id)))
            .collect();

        Self {
            key: Self::BETA_KEY,
            label: "Wiki (beta)",
            name_prefix: "beta",
            base_link: BETA_BASE_LINK.to_owned(),
            aliases: ALIASES.iter().copied().collect(),
            allowed_roles: ALLOWED_ROLES.iter().copied().collect(),
            lfg_style: LfgStyle::Redirect(routes),
            control_expiry: ControlExpiry::DeleteMessage,
            timeout_feedback: TimeoutFeedback::Detailed,
        }
    }

    pub fn by_key(key: &str) -> Option<Self> {
        match key {
            Self::DEFAULT_KEY => Some(Self::default_set()),
            Self::BETA_KEY => Some(Self::beta_set()),
            _ => None,
        }
    }
}

/// Process configuration read at startup.
#[derive(Clone, Debug)]
pub struct BotConfig {
    pub token: String,
    pub command_sets: Vec<CommandSetConfig>,
}

impl BotConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let token = env::var(TOKEN_VAR).map_err(|source| ConfigError::Var {
            name: TOKEN_VAR,
            source,
        })?;

        let command_sets = match env::var(COMMAND_SETS_VAR) {
            Ok(raw) => parse_command_sets(&raw)?,
            Err(VarError::NotPresent) => vec![
                CommandSetConfig::default_set(),
                CommandSetConfig::beta_set(),
            ],
            Err(source) => {
                return Err(ConfigError::Var {
                    name: COMMAND_SETS_VAR,
                    source,
                });
            }
        };

        Ok(Self {
            token,
            command_sets,
        })
    }
}

/// Parse a comma-separated list of command-set keys, keeping first occurrences.
pub fn parse_command_sets(raw: &str) -> Result<Vec<CommandSetConfig>, ConfigError> {
    let mut keys: Vec<&str> = Vec::new();
    for key in raw.split(',').map(str::trim).filter(|key| !key.is_empty()) {
        if !keys.contains(&key) {
            keys.push(key);
        }
    }

    if keys.is_empty() {
        return Err(ConfigError::NoCommandSets);
    }

    keys.into_iter()
        .map(|key| {
            CommandSetConfig::by_key(key)
                .ok_or_else(|| ConfigError::UnknownCommandSet(key.to_owned()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shipped_tables_are_complete() {
        let config = CommandSetConfig::default_set();

        assert_eq!(config.aliases.len(), 96);
        assert_eq!(config.allowed_roles.len(), 18);
        assert_eq!(config.aliases.get("d&d"), Some("Dungeons&Dragons"));
        assert!(config.allowed_roles.contains("Community Manager - D&D"));
    }

    #[test]
    fn beta_set_routes_channels_and_deletes_idle_controls() {
        let config = CommandSetConfig::beta_set();

        assert_eq!(config.name_prefix, "beta");
        assert_eq!(config.control_expiry, ControlExpiry::DeleteMessage);
        assert_eq!(config.timeout_feedback, TimeoutFeedback::Detailed);
        let LfgStyle::Redirect(routes) = &config.lfg_style else {
            panic!("beta set must redirect");
        };
        assert_eq!(routes.len(), 28);
        assert_eq!(
            routes.channel_for("Escape from Tarkov"),
            Some(Id::new(1325558852120350863))
        );
        assert_eq!(routes.channel_for("Minecraft"), None);
    }

    #[test]
    fn default_set_mentions_and_strips_idle_controls() {
        let config = CommandSetConfig::default_set();

        assert_eq!(config.name_prefix, "");
        assert!(matches!(config.lfg_style, LfgStyle::Mention));
        assert_eq!(config.control_expiry, ControlExpiry::StripComponents);
        assert_eq!(config.timeout_feedback, TimeoutFeedback::Brief);
    }

    #[test]
    fn command_set_list_is_parsed_in_order_without_duplicates() {
        let sets = parse_command_sets(" beta, default ,beta,").unwrap();
        let keys: Vec<_> = sets.iter().map(|set| set.key).collect();

        assert_eq!(keys, ["beta", "default"]);
    }

    #[test]
    fn unknown_or_empty_command_set_lists_are_rejected() {
        assert!(matches!(
            parse_command_sets("default,gamma"),
            Err(ConfigError::UnknownCommandSet(key)) if key == "gamma"
        ));
        assert!(matches!(
            parse_command_sets(" , "),
            Err(ConfigError::NoCommandSets)
        ));
    }
}
