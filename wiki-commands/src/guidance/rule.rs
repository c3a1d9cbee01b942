use twilight_model::gateway::payload::incoming::MessageCreate;

use crate::CommandMeta;
use crate::guidance::messages::usage_message;
use wiki_core::{CommandSet, Context};
use wiki_utils::{
    embed::build_rule_embed,
    message::{Reply, send_reply},
    parse::parse_rule_number,
    rules::INVALID_RULE_MESSAGE,
};

pub const META: CommandMeta = CommandMeta {
    name: "rule",
    desc: "Show a summary of one rule with a link to the full rules page.",
    args: "<1-10>",
};

/// Post one rule as an embed linking to the full rules page.
///
/// Runs after the author passed the set's allow-list.
///
/// Error behavior:
/// - missing or non-integer argument replies with this command's usage.
/// - integers outside 1..=10 reply with the invalid-rule message.
pub async fn run(
    ctx: Context,
    set: &CommandSet,
    msg: Box<MessageCreate>,
    arg1: Option<&str>,
) -> anyhow::Result<()> {
    let http = &ctx.http;

    let Some(number) = arg1.and_then(parse_rule_number) else {
        let usage = usage_message(&META.usage(&set.command_name(META.name)));
        send_reply(http, &msg, Reply::text(&usage)).await?;
        return Ok(());
    };

    let Some(rule_text) = set.rules().rule_text(number) else {
        send_reply(http, &msg, Reply::text(INVALID_RULE_MESSAGE)).await?;
        return Ok(());
    };

    let embeds = [build_rule_embed(set.rules().rules_url(), rule_text)?];
    send_reply(http, &msg, Reply::embeds(&embeds)).await?;

    Ok(())
}
