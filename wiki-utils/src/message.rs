use tracing::debug;
use twilight_http::Client;
use twilight_model::{
    channel::{
        Message,
        message::{component::Component, embed::Embed},
    },
    id::{
        Id,
        marker::{ChannelMarker, MessageMarker},
    },
};

use crate::failure::PlatformError;

/// Body of an outgoing message.
#[derive(Clone, Copy, Debug, Default)]
pub struct Reply<'a> {
    pub content: Option<&'a str>,
    pub embeds: &'a [Embed],
    pub components: &'a [Component],
}

impl<'a> Reply<'a> {
    pub fn text(content: &'a str) -> Self {
        Self {
            content: Some(content),
            ..Self::default()
        }
    }

    pub fn embeds(embeds: &'a [Embed]) -> Self {
        Self {
            embeds,
            ..Self::default()
        }
    }

    pub fn with_components(self, components: &'a [Component]) -> Self {
        Self { components, ..self }
    }
}

/// Id of the message the given message replies to, if any.
pub fn referenced_message_id(msg: &Message) -> Option<Id<MessageMarker>> {
    msg.reference
        .as_ref()
        .and_then(|reference| reference.message_id)
}

/// Delete a command's invoking message.
pub async fn delete_invocation(http: &Client, msg: &Message) -> Result<(), PlatformError> {
    delete_message(http, msg.channel_id, msg.id).await
}

pub async fn delete_message(
    http: &Client,
    channel_id: Id<ChannelMarker>,
    message_id: Id<MessageMarker>,
) -> Result<(), PlatformError> {
    http.delete_message(channel_id, message_id).await?;

    Ok(())
}

/// Remove every component from a message, leaving its text in place.
pub async fn clear_components(
    http: &Client,
    channel_id: Id<ChannelMarker>,
    message_id: Id<MessageMarker>,
) -> Result<(), PlatformError> {
    http.update_message(channel_id, message_id)
        .components(Some(&[]))
        .await?;

    Ok(())
}

/// Fetch the text of the message `msg` replies to.
///
/// Returns `Ok(None)` when `msg` is not a reply.
pub async fn fetch_referenced_content(
    http: &Client,
    msg: &Message,
) -> Result<Option<String>, PlatformError> {
    let Some(reference_id) = referenced_message_id(msg) else {
        return Ok(None);
    };

    let referenced = http
        .message(msg.channel_id, reference_id)
        .await?
        .model()
        .await?;

    Ok(Some(referenced.content))
}

/// Reply to the message `msg` references, or post in its channel when it
/// references nothing or the reply cannot be delivered.
pub async fn send_reply(
    http: &Client,
    msg: &Message,
    reply: Reply<'_>,
) -> Result<Message, PlatformError> {
    if let Some(reference_id) = referenced_message_id(msg) {
        match send_message(http, msg.channel_id, reply, Some(reference_id)).await {
            Ok(sent) => return Ok(sent),
            Err(source) => {
                debug!(?source, "reply to referenced message failed, posting in channel");
            }
        }
    }

    send_message(http, msg.channel_id, reply, None).await
}

pub async fn send_message(
    http: &Client,
    channel_id: Id<ChannelMarker>,
    reply: Reply<'_>,
    reply_to: Option<Id<MessageMarker>>,
) -> Result<Message, PlatformError> {
    let mut request = http
        .create_message(channel_id)
        .embeds(reply.embeds)
        .components(reply.components);

    if let Some(content) = reply.content {
        request = request.content(content);
    }

    if let Some(message_id) = reply_to {
        request = request.reply(message_id);
    }

    Ok(request.await?.model().await?)
}
