use twilight_model::gateway::payload::incoming::MessageCreate;

use crate::CommandMeta;
use crate::guidance::{messages::wow_message, post_guidance};
use wiki_core::{CommandSet, Context};

pub const META: CommandMeta = CommandMeta {
    name: "wow",
    desc: "Link the World of Warcraft wiki section.",
    args: "",
};

/// Point the referenced message at the WoW guide.
pub async fn run(ctx: Context, set: &CommandSet, msg: Box<MessageCreate>) -> anyhow::Result<()> {
    let output = wow_message(set.base_link());
    post_guidance(&ctx.http, &msg, &output).await
}
