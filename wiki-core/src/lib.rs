/// Command-set and process configuration.
pub mod config;
/// Static lookup tables shipped with the bot.
pub mod tables;

use std::sync::Arc;

use twilight_http::Client;
use wiki_utils::{
    alias::AliasResolver, control::ControlRegistry, permissions::AllowedRoleSet, rules::RuleBook,
};

use crate::config::{CommandSetConfig, ConfigError, LfgStyle};

/// A command set with its lookup structures built.
///
/// Read-only once constructed.
#[derive(Debug)]
pub struct CommandSet {
    config: CommandSetConfig,
    resolver: AliasResolver,
    rules: RuleBook,
}

impl CommandSet {
    pub fn new(config: CommandSetConfig) -> Result<Self, ConfigError> {
        let resolver = AliasResolver::new(config.aliases.clone())?;
        let rules = RuleBook::new(&config.base_link);

        Ok(Self {
            config,
            resolver,
            rules,
        })
    }

    pub fn key(&self) -> &'static str {
        self.config.key
    }

    pub fn config(&self) -> &CommandSetConfig {
        &self.config
    }

    pub fn base_link(&self) -> &str {
        self.config.base_link.trim_end_matches('/')
    }

    pub fn resolver(&self) -> &AliasResolver {
        &self.resolver
    }

    pub fn allowed_roles(&self) -> &AllowedRoleSet {
        &self.config.allowed_roles
    }

    pub fn rules(&self) -> &RuleBook {
        &self.rules
    }

    pub fn lfg_style(&self) -> &LfgStyle {
        &self.config.lfg_style
    }

    /// Full invocable name of a base command in this set, e.g. `betarule`.
    pub fn command_name(&self, base: &str) -> String {
        format!("{}{}", self.config.name_prefix, base)
    }

    /// Base command name if `name` belongs to this set's naming scheme.
    pub fn strip_command<'a>(&self, name: &'a str) -> Option<&'a str> {
        name.strip_prefix(self.config.name_prefix)
    }
}

/// Shared application context passed into command handlers.
///
/// Cheap to clone because it only stores reference-counted shared state.
#[derive(Clone)]
pub struct Context {
    pub http: Arc<Client>,
    pub sets: Arc<[CommandSet]>,
    pub controls: ControlRegistry,
}

impl Context {
    /// Create a new application context.
    pub fn new(http: Arc<Client>, sets: Vec<CommandSet>) -> Self {
        Self {
            http,
            sets: sets.into(),
            controls: ControlRegistry::new(),
        }
    }

    pub fn command_set(&self, key: &str) -> Option<&CommandSet> {
        self.sets.iter().find(|set| set.key() == key)
    }
}
