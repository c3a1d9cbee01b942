use twilight_model::gateway::payload::incoming::MessageCreate;

use crate::{CommandMeta, Invocation, classify, guidance::messages::usage_message};
use wiki_core::{CommandSet, Context};
use wiki_utils::{
    COMMAND_PREFIX,
    message::{Reply, send_reply},
};

pub const META: CommandMeta = CommandMeta {
    name: "usage",
    desc: "Show usage syntax for a specific command.",
    args: "<command>",
};

/// Show usage for a specific command.
///
/// A missing argument returns this command's own usage. An unknown command
/// returns a short not-found message.
pub async fn run(ctx: Context, msg: Box<MessageCreate>, arg1: Option<&str>) -> anyhow::Result<()> {
    let out = match arg1 {
        None => usage_message(&META.usage(META.name)),
        Some(raw_name) => usage_for(&ctx.sets, raw_name)
            .map(|usage| usage_message(&usage))
            .unwrap_or_else(|| unknown_command_message(raw_name)),
    };

    send_reply(&ctx.http, &msg, Reply::text(&out)).await?;

    Ok(())
}

/// Usage line of the command invoked as `raw_name` in any enabled set.
pub fn usage_for(sets: &[CommandSet], raw_name: &str) -> Option<String> {
    let lookup = normalize_name(raw_name);

    let usage = match classify(sets, lookup)? {
        Invocation::Open(meta) => meta.usage(meta.name),
        Invocation::Gated { meta, .. } => meta.usage(lookup),
    };

    Some(usage)
}

fn normalize_name(raw_name: &str) -> &str {
    raw_name.trim().trim_start_matches(COMMAND_PREFIX)
}

fn unknown_command_message(raw_name: &str) -> String {
    format!("Unknown command: `{}`", normalize_name(raw_name))
}
