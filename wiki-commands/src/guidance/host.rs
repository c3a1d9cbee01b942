use twilight_model::gateway::payload::incoming::MessageCreate;

use crate::CommandMeta;
use crate::guidance::{messages::host_message, post_guidance};
use wiki_core::{CommandSet, Context};

pub const META: CommandMeta = CommandMeta {
    name: "host",
    desc: "Link the hosting and advertising guidelines.",
    args: "",
};

pub async fn run(ctx: Context, set: &CommandSet, msg: Box<MessageCreate>) -> anyhow::Result<()> {
    let output = host_message(set.base_link());
    post_guidance(&ctx.http, &msg, &output).await
}
