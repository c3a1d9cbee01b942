use twilight_model::gateway::payload::incoming::MessageCreate;

use crate::{CommandMeta, GUIDANCE_COMMANDS, UTILITY_COMMANDS};
use wiki_core::{CommandSet, Context};
use wiki_utils::{
    embed::build_titled_embed,
    message::{Reply, send_reply},
};

pub const META: CommandMeta = CommandMeta {
    name: "help",
    desc: "Lists out all available commands.",
    args: "",
};

const HELP_TITLE: &str = "Available Commands";

/// Render the command catalogue of every enabled command set.
pub async fn run(ctx: Context, msg: Box<MessageCreate>) -> anyhow::Result<()> {
    let description = help_description(&ctx.sets);
    let embeds = [build_titled_embed(HELP_TITLE, description)?];

    send_reply(&ctx.http, &msg, Reply::embeds(&embeds)).await?;

    Ok(())
}

/// One section per command set, then the shared utility commands.
pub fn help_description(sets: &[CommandSet]) -> String {
    let mut out = String::new();

    for set in sets {
        out.push_str(&format!("**{}**\n", set.config().label));
        for command in GUIDANCE_COMMANDS {
            push_command_line(&mut out, command, &set.command_name(command.name));
        }
        out.push('\n');
    }

    out.push_str("**Utility**\n");
    for command in UTILITY_COMMANDS {
        push_command_line(&mut out, command, command.name);
    }

    out.trim_end().to_owned()
}

fn push_command_line(out: &mut String, command: &CommandMeta, full_name: &str) {
    out.push_str(&format!("• `{}` - {}\n", command.usage(full_name), command.desc));
}

#[cfg(test)]
mod tests {
    use wiki_core::config::CommandSetConfig;

    use super::*;

    #[test]
    fn catalogue_lists_each_enabled_set() {
        let sets = vec![
            CommandSet::new(CommandSetConfig::default_set()).unwrap(),
            CommandSet::new(CommandSetConfig::beta_set()).unwrap(),
        ];
        let description = help_description(&sets);

        assert!(description.starts_with("**Wiki**\n• `-lfg` - "));
        assert!(description.contains("**Wiki (beta)**\n• `-betalfg` - "));
        assert!(description.contains("• `-betarule <1-10>` - "));
        assert!(description.ends_with("• `-usage <command>` - Show usage syntax for a specific command."));
    }

    #[test]
    fn catalogue_skips_disabled_sets() {
        let sets = vec![CommandSet::new(CommandSetConfig::default_set()).unwrap()];
        let description = help_description(&sets);

        assert!(description.contains("`-rule <1-10>`"));
        assert!(!description.contains("beta"));
    }
}
