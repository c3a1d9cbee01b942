use tracing::{debug, error, warn};
use twilight_http::Client;
use twilight_model::{
    channel::Message,
    gateway::payload::incoming::MessageCreate,
    id::{
        Id,
        marker::{ChannelMarker, RoleMarker, UserMarker},
    },
};

use crate::CommandMeta;
use crate::guidance::messages::{
    CHANNEL_NOT_FOUND_MESSAGE, NO_ALIAS_MESSAGE, lfg_guidance, redirect_notice, role_mention,
    role_not_found_message, user_mention,
};
use wiki_core::{CommandSet, Context, config::LfgStyle};
use wiki_utils::{
    failure::PlatformError,
    member::add_member_role,
    message::{Reply, fetch_referenced_content, send_message, send_reply},
    permissions::{AuthorRoles, MessageAuthor},
};

pub const META: CommandMeta = CommandMeta {
    name: "lfg",
    desc: "Reply to a message to detect the game it mentions and point at the LFG guide.",
    args: "",
};

/// Inputs to [`plan_lfg`], gathered from the invocation.
#[derive(Clone, Copy, Debug)]
pub struct LfgRequest<'a> {
    pub base_link: &'a str,
    /// Category detected in the referenced message.
    pub category: Option<&'a str>,
    /// Guild role named after `category`, if one exists.
    pub role_id: Option<Id<RoleMarker>>,
    pub author_id: Id<UserMarker>,
    pub author_roles: &'a AuthorRoles,
    pub channel_id: Id<ChannelMarker>,
}

/// What `lfg` should send.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum LfgPlan {
    /// Reply in the invoking channel.
    Reply(String),
    /// Notice in the invoking channel, then the guidance in the game's channel.
    Redirect {
        notice: String,
        /// Role to grant the author; `None` when already held.
        grant_role: Option<Id<RoleMarker>>,
        channel_id: Id<ChannelMarker>,
        relay: String,
    },
}

pub fn plan_lfg(style: &LfgStyle, request: &LfgRequest<'_>) -> LfgPlan {
    let guidance = lfg_guidance(request.base_link);

    let routes = match style {
        LfgStyle::Mention => {
            let mention = match (request.category, request.role_id) {
                (Some(_), Some(role_id)) => format!("{}\n", role_mention(role_id)),
                (Some(category), None) => format!("@{category}\n"),
                (None, _) => String::new(),
            };
            return LfgPlan::Reply(format!("{mention}{guidance}"));
        }
        LfgStyle::Redirect(routes) => routes,
    };

    let Some(category) = request.category else {
        return LfgPlan::Reply(NO_ALIAS_MESSAGE.to_owned());
    };
    let Some(role_id) = request.role_id else {
        return LfgPlan::Reply(role_not_found_message(category));
    };

    let output = format!(
        "{} {}\n{guidance}",
        role_mention(role_id),
        user_mention(request.author_id)
    );

    match routes.channel_for(category) {
        Some(channel_id) if channel_id != request.channel_id => LfgPlan::Redirect {
            notice: redirect_notice(category),
            grant_role: (!request.author_roles.has(role_id)).then_some(role_id),
            channel_id,
            relay: output,
        },
        _ => LfgPlan::Reply(output),
    }
}

/// Tag the game a referenced message talks about and point at the LFG guide.
///
/// Redirecting sets also move the conversation to the game's own channel.
/// The game role is looked up in the guild roles fetched for the
/// authorization check.
pub async fn run(
    ctx: Context,
    set: &CommandSet,
    msg: Box<MessageCreate>,
    author: MessageAuthor,
) -> anyhow::Result<()> {
    let http = &ctx.http;
    let Some(guild_id) = msg.guild_id else {
        return Ok(());
    };

    let category = detect_category(http, set, &msg).await;
    let role_id = category.and_then(|category| author.guild_roles.id_of(category));

    let request = LfgRequest {
        base_link: set.base_link(),
        category,
        role_id,
        author_id: msg.author.id,
        author_roles: &author.roles,
        channel_id: msg.channel_id,
    };

    match plan_lfg(set.lfg_style(), &request) {
        LfgPlan::Reply(output) => {
            send_reply(http, &msg, Reply::text(&output)).await?;
        }
        LfgPlan::Redirect {
            notice,
            grant_role,
            channel_id,
            relay,
        } => {
            send_reply(http, &msg, Reply::text(&notice)).await?;

            if let Some(role_id) = grant_role {
                let reason = format!("User redirected by {} command", set.command_name(META.name));
                if let Err(source) =
                    add_member_role(http, guild_id, msg.author.id, role_id, &reason).await
                {
                    error!(?source, role_id = role_id.get(), "failed to add role to user");
                }
            }

            match send_message(http, channel_id, Reply::text(&relay), None).await {
                Ok(_) => {}
                Err(PlatformError::NotFound(source)) => {
                    warn!(?source, channel_id = channel_id.get(), "designated channel not found");
                    send_reply(http, &msg, Reply::text(CHANNEL_NOT_FOUND_MESSAGE)).await?;
                }
                Err(source) => {
                    error!(
                        ?source,
                        channel_id = channel_id.get(),
                        "failed to send message in target channel"
                    );
                }
            }
        }
    }

    Ok(())
}

/// Category of the message `msg` replies to, if it names a known game.
async fn detect_category<'s>(http: &Client, set: &'s CommandSet, msg: &Message) -> Option<&'s str> {
    let content = match fetch_referenced_content(http, msg).await {
        Ok(content) => content?,
        Err(source) => {
            debug!(?source, "failed to fetch referenced message");
            return None;
        }
    };

    let found = set.resolver().resolve_match(&content)?;
    debug!(
        alias = found.alias,
        category = found.category,
        pass = ?found.pass,
        "resolved game alias"
    );

    Some(found.category)
}
