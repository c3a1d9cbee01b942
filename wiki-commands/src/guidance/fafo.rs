use std::{sync::Arc, time::Duration};

use tracing::{debug, info, warn};
use twilight_http::Client;
use twilight_model::{
    gateway::payload::incoming::{InteractionCreate, MessageCreate},
    id::{
        Id,
        marker::{ChannelMarker, GuildMarker, MessageMarker, UserMarker},
    },
};

use crate::CommandMeta;
use crate::guidance::messages::{FAFO_WARNING, SelfTimeoutOutcome};
use wiki_core::{CommandSet, Context, config::ControlExpiry};
use wiki_utils::{
    failure::{FailureKind, PlatformError},
    interaction::{
        CONTROL_EXPIRED_MESSAGE, build_self_timeout_components, build_self_timeout_custom_id,
        component_custom_id, defer_ephemeral, followup_ephemeral, parse_self_timeout_custom_id,
        respond_ephemeral_message,
    },
    member::apply_communication_timeout,
    message::{Reply, clear_components, delete_message, send_reply},
};

pub const META: CommandMeta = CommandMeta {
    name: "fafo",
    desc: "Post a button that times out whoever clicks it.",
    args: "",
};

pub const SELF_TIMEOUT_DURATION: Duration = Duration::from_secs(5 * 60);

/// How long a control stays clickable without being used.
pub const CONTROL_IDLE: Duration = Duration::from_secs(180);

const SELF_TIMEOUT_REASON: &str = "FAFO button clicked.";

/// Post the self-timeout warning with its button.
pub async fn run(ctx: Context, set: &CommandSet, msg: Box<MessageCreate>) -> anyhow::Result<()> {
    let components = build_self_timeout_components(build_self_timeout_custom_id(set.key()));
    let sent = send_reply(
        &ctx.http,
        &msg,
        Reply::text(FAFO_WARNING).with_components(&components),
    )
    .await?;

    arm_control(&ctx, set.config().control_expiry, sent.channel_id, sent.id).await;
    debug!(
        set = set.key(),
        message_id = sent.id.get(),
        "self-timeout control posted"
    );

    Ok(())
}

async fn arm_control(
    ctx: &Context,
    expiry: ControlExpiry,
    channel_id: Id<ChannelMarker>,
    message_id: Id<MessageMarker>,
) {
    let http = Arc::clone(&ctx.http);

    ctx.controls
        .arm(message_id, CONTROL_IDLE, move || async move {
            expire_control(&http, expiry, channel_id, message_id).await;
        })
        .await;
}

async fn expire_control(
    http: &Client,
    expiry: ControlExpiry,
    channel_id: Id<ChannelMarker>,
    message_id: Id<MessageMarker>,
) {
    let result = match expiry {
        ControlExpiry::StripComponents => clear_components(http, channel_id, message_id).await,
        ControlExpiry::DeleteMessage => delete_message(http, channel_id, message_id).await,
    };

    match result {
        Ok(()) => debug!(message_id = message_id.get(), ?expiry, "self-timeout control expired"),
        Err(source) => warn!(
            ?source,
            message_id = message_id.get(),
            ?expiry,
            "failed to retire idle self-timeout control"
        ),
    }
}

/// Handle a click on a self-timeout button.
///
/// Returns `false` when the interaction is not a self-timeout click.
pub async fn handle_interaction(
    ctx: Context,
    interaction: Box<InteractionCreate>,
) -> anyhow::Result<bool> {
    let http = &ctx.http;

    let Some(set_key) = component_custom_id(&interaction).and_then(parse_self_timeout_custom_id)
    else {
        return Ok(false);
    };

    let control = interaction
        .message
        .as_ref()
        .map(|message| (message.channel_id, message.id));
    let live = match control {
        Some((_, message_id)) => ctx.controls.is_live(message_id).await,
        None => false,
    };

    let (Some(set), Some((channel_id, message_id)), true) =
        (ctx.command_set(set_key), control, live)
    else {
        respond_ephemeral_message(http, &interaction, CONTROL_EXPIRED_MESSAGE).await?;
        return Ok(true);
    };

    arm_control(&ctx, set.config().control_expiry, channel_id, message_id).await;
    defer_ephemeral(http, &interaction).await?;

    let outcome = match interaction.author_id() {
        Some(user_id) => apply_self_timeout(http, interaction.guild_id, user_id).await,
        None => SelfTimeoutOutcome::MemberNotFound,
    };
    let feedback = outcome.message(set.config().timeout_feedback);
    followup_ephemeral(http, &interaction, &feedback).await?;

    Ok(true)
}

async fn apply_self_timeout(
    http: &Client,
    guild_id: Option<Id<GuildMarker>>,
    user_id: Id<UserMarker>,
) -> SelfTimeoutOutcome {
    let Some(guild_id) = guild_id else {
        return SelfTimeoutOutcome::MemberNotFound;
    };

    let result = apply_communication_timeout(
        http,
        guild_id,
        user_id,
        SELF_TIMEOUT_DURATION,
        SELF_TIMEOUT_REASON,
    )
    .await;

    let outcome = self_timeout_outcome(result);
    match &outcome {
        SelfTimeoutOutcome::Applied => info!(user_id = user_id.get(), "user timed themselves out"),
        other => warn!(user_id = user_id.get(), outcome = ?other, "self-timeout failed"),
    }

    outcome
}

fn self_timeout_outcome(result: Result<(), PlatformError>) -> SelfTimeoutOutcome {
    let Err(source) = result else {
        return SelfTimeoutOutcome::Applied;
    };

    match source.kind() {
        FailureKind::NotFound => SelfTimeoutOutcome::MemberNotFound,
        FailureKind::Forbidden => SelfTimeoutOutcome::Forbidden,
        FailureKind::Other => SelfTimeoutOutcome::Failed(source.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_lasts_five_minutes_and_controls_idle_for_three() {
        assert_eq!(SELF_TIMEOUT_DURATION.as_secs(), 300);
        assert_eq!(CONTROL_IDLE.as_secs(), 180);
    }

    #[test]
    fn successful_timeout_is_reported_as_applied() {
        assert_eq!(self_timeout_outcome(Ok(())), SelfTimeoutOutcome::Applied);
    }

    #[test]
    fn timestamp_failures_are_reported_with_reason() {
        let source = twilight_model::util::Timestamp::from_secs(i64::MAX).unwrap_err();
        let error = PlatformError::Timestamp(source);
        let reason = error.to_string();

        assert_eq!(
            self_timeout_outcome(Err(error)),
            SelfTimeoutOutcome::Failed(reason)
        );
    }
}
