use twilight_model::gateway::payload::incoming::MessageCreate;

use crate::CommandMeta;
use crate::guidance::{messages::biweekly_message, post_guidance};
use wiki_core::{CommandSet, Context};

pub const META: CommandMeta = CommandMeta {
    name: "biweekly",
    desc: "Post info about the biweekly D&D sessions and how to get started.",
    args: "",
};

pub async fn run(ctx: Context, set: &CommandSet, msg: Box<MessageCreate>) -> anyhow::Result<()> {
    let output = biweekly_message(set.base_link());
    post_guidance(&ctx.http, &msg, &output).await
}
