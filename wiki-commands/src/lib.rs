pub mod guidance;
pub mod utility;

use std::sync::Arc;

use twilight_model::gateway::payload::incoming::{InteractionCreate, MessageCreate};

use wiki_core::{CommandSet, Context};
use wiki_utils::{
    COMMAND_PREFIX,
    interaction::{SELF_TIMEOUT_PREFIX, component_custom_id},
    parse::parse_command_line,
};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum InteractionRoute {
    SelfTimeoutButton,
}

fn route_interaction(custom_id: &str) -> Option<InteractionRoute> {
    const ROUTES: [(&str, InteractionRoute); 1] =
        [(SELF_TIMEOUT_PREFIX, InteractionRoute::SelfTimeoutButton)];

    ROUTES
        .into_iter()
        .find_map(|(prefix, route)| custom_id.starts_with(prefix).then_some(route))
}

// Global command meta data
pub struct CommandMeta {
    /// Base name; guidance commands are prefixed per command set.
    pub name: &'static str,
    pub desc: &'static str,
    /// Argument synopsis, empty for commands without arguments.
    pub args: &'static str,
}

impl CommandMeta {
    /// Usage line for this command invoked as `full_name`.
    pub fn usage(&self, full_name: &str) -> String {
        if self.args.is_empty() {
            format!("{COMMAND_PREFIX}{full_name}")
        } else {
            format!("{COMMAND_PREFIX}{full_name} {}", self.args)
        }
    }
}

/// Commands every command set provides.
pub const GUIDANCE_COMMANDS: &[CommandMeta] = &[
    guidance::lfg::META,
    guidance::host::META,
    guidance::biweekly::META,
    guidance::rule::META,
    guidance::wow::META,
    guidance::fafo::META,
];

/// Commands shared by the whole bot.
pub const UTILITY_COMMANDS: &[CommandMeta] = &[utility::help::META, utility::usage::META];

/// Find the command set and base command an invoked name belongs to.
pub fn find_guidance_command<'s>(
    sets: &'s [CommandSet],
    name: &str,
) -> Option<(&'s CommandSet, &'static CommandMeta)> {
    sets.iter().find_map(|set| {
        let base = set.strip_command(name)?;
        GUIDANCE_COMMANDS
            .iter()
            .find(|meta| meta.name == base)
            .map(|meta| (set, meta))
    })
}

/// A recognised message command.
#[derive(Clone, Copy)]
pub enum Invocation<'s> {
    /// Shared command, open to everyone.
    Open(&'static CommandMeta),
    /// Set command, gated by that set's allow-list.
    Gated {
        set: &'s CommandSet,
        meta: &'static CommandMeta,
    },
}

/// Classify an invoked command name against the enabled sets.
pub fn classify<'s>(sets: &'s [CommandSet], name: &str) -> Option<Invocation<'s>> {
    if let Some(meta) = UTILITY_COMMANDS.iter().find(|meta| meta.name == name) {
        return Some(Invocation::Open(meta));
    }

    find_guidance_command(sets, name).map(|(set, meta)| Invocation::Gated { set, meta })
}

pub async fn handle_message(ctx: Context, msg: Box<MessageCreate>) -> anyhow::Result<()> {
    if msg.author.bot {
        return Ok(());
    }

    let content = msg.content.clone();
    let Some(line) = parse_command_line(&content, COMMAND_PREFIX) else {
        return Ok(());
    };

    let sets = Arc::clone(&ctx.sets);
    let Some(invocation) = classify(&sets, line.name) else {
        return Ok(());
    };

    match invocation {
        Invocation::Open(meta) => match meta.name {
            "help" => utility::help::run(ctx, msg).await?,
            "usage" => utility::usage::run(ctx, msg, line.arg1).await?,
            _ => {}
        },
        Invocation::Gated { set, meta } => {
            let Some(author) = guidance::delete_and_check(&ctx.http, set, &msg).await? else {
                return Ok(());
            };

            match meta.name {
                "lfg" => guidance::lfg::run(ctx, set, msg, author).await?,
                "host" => guidance::host::run(ctx, set, msg).await?,
                "biweekly" => guidance::biweekly::run(ctx, set, msg).await?,
                "rule" => guidance::rule::run(ctx, set, msg, line.arg1).await?,
                "wow" => guidance::wow::run(ctx, set, msg).await?,
                "fafo" => guidance::fafo::run(ctx, set, msg).await?,
                _ => {}
            }
        }
    }

    Ok(())
}

pub async fn handle_interaction(
    ctx: Context,
    interaction: Box<InteractionCreate>,
) -> anyhow::Result<()> {
    let Some(route) = component_custom_id(&interaction).and_then(route_interaction) else {
        return Ok(());
    };

    match route {
        InteractionRoute::SelfTimeoutButton => {
            let _handled = guidance::fafo::handle_interaction(ctx, interaction).await?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use wiki_core::config::CommandSetConfig;

    use super::*;

    fn both_sets() -> Vec<CommandSet> {
        vec![
            CommandSet::new(CommandSetConfig::default_set()).unwrap(),
            CommandSet::new(CommandSetConfig::beta_set()).unwrap(),
        ]
    }

    #[test]
    fn guidance_names_route_to_their_set() {
        let sets = both_sets();

        let (set, meta) = find_guidance_command(&sets, "lfg").unwrap();
        assert_eq!((set.key(), meta.name), ("default", "lfg"));

        let (set, meta) = find_guidance_command(&sets, "betarule").unwrap();
        assert_eq!((set.key(), meta.name), ("beta", "rule"));
    }

    #[test]
    fn unknown_names_do_not_route() {
        let sets = both_sets();

        assert!(find_guidance_command(&sets, "help").is_none());
        assert!(find_guidance_command(&sets, "betahelp").is_none());
        assert!(find_guidance_command(&sets, "ban").is_none());
    }

    #[test]
    fn disabled_sets_do_not_route() {
        let sets = vec![CommandSet::new(CommandSetConfig::beta_set()).unwrap()];

        assert!(find_guidance_command(&sets, "lfg").is_none());
        assert!(find_guidance_command(&sets, "betalfg").is_some());
    }

    #[test]
    fn every_set_command_is_gated() {
        let sets = both_sets();

        for set in &sets {
            for command in GUIDANCE_COMMANDS {
                let name = set.command_name(command.name);
                let Some(Invocation::Gated { set: owner, meta }) = classify(&sets, &name) else {
                    panic!("`{name}` must be gated by its set's allow-list");
                };
                assert_eq!(owner.key(), set.key());
                assert_eq!(meta.name, command.name);
            }
        }
    }

    #[test]
    fn shared_commands_are_open() {
        let sets = both_sets();

        for command in UTILITY_COMMANDS {
            assert!(matches!(
                classify(&sets, command.name),
                Some(Invocation::Open(meta)) if meta.name == command.name
            ));
        }
        assert!(classify(&sets, "ban").is_none());
    }

    #[test]
    fn self_timeout_buttons_route() {
        assert_eq!(
            route_interaction("fafo:beta"),
            Some(InteractionRoute::SelfTimeoutButton)
        );
        assert_eq!(route_interaction("pg:help:1"), None);
    }

    #[test]
    fn usage_lines_include_prefix_and_args() {
        assert_eq!(guidance::rule::META.usage("betarule"), "-betarule <1-10>");
        assert_eq!(guidance::lfg::META.usage("lfg"), "-lfg");
    }
}
