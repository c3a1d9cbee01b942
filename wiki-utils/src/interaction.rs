use twilight_http::Client;
use twilight_model::{
    application::interaction::InteractionData,
    channel::message::{
        MessageFlags,
        component::{ActionRow, Button, ButtonStyle, Component},
    },
    gateway::payload::incoming::InteractionCreate,
    http::interaction::{InteractionResponse, InteractionResponseType},
};
use twilight_util::builder::InteractionResponseDataBuilder;

use crate::failure::PlatformError;

/// Custom-id prefix shared by every self-timeout control.
pub const SELF_TIMEOUT_PREFIX: &str = "fafo:";

/// Shown when someone clicks a control that is no longer tracked.
pub const CONTROL_EXPIRED_MESSAGE: &str = "This control has expired.";

/// Custom id of the self-timeout button posted by the command set `set_key`.
pub fn build_self_timeout_custom_id(set_key: &str) -> String {
    format!("{SELF_TIMEOUT_PREFIX}{set_key}")
}

/// Extract the command-set key from a self-timeout custom id.
pub fn parse_self_timeout_custom_id(custom_id: &str) -> Option<&str> {
    custom_id
        .strip_prefix(SELF_TIMEOUT_PREFIX)
        .filter(|key| !key.is_empty() && !key.contains(':'))
}

pub fn build_self_timeout_components(custom_id: String) -> Vec<Component> {
    vec![Component::ActionRow(ActionRow {
        id: None,
        components: vec![Component::Button(Button {
            id: None,
            custom_id: Some(custom_id),
            disabled: false,
            emoji: None,
            label: Some("FAFO".to_owned()),
            style: ButtonStyle::Danger,
            url: None,
            sku_id: None,
        })],
    })]
}

/// Custom id of a message-component interaction, if it is one.
pub fn component_custom_id(interaction: &InteractionCreate) -> Option<&str> {
    match interaction.data.as_ref() {
        Some(InteractionData::MessageComponent(data)) => Some(data.custom_id.as_str()),
        _ => None,
    }
}

/// Respond to a component interaction with an ephemeral message.
pub async fn respond_ephemeral_message(
    http: &Client,
    interaction: &InteractionCreate,
    content: &str,
) -> Result<(), PlatformError> {
    let response = InteractionResponse {
        kind: InteractionResponseType::ChannelMessageWithSource,
        data: Some(
            InteractionResponseDataBuilder::new()
                .content(content)
                .flags(MessageFlags::EPHEMERAL)
                .build(),
        ),
    };

    http.interaction(interaction.application_id)
        .create_response(interaction.id, &interaction.token, &response)
        .await?;

    Ok(())
}

/// Acknowledge an interaction; the eventual reply is visible only to the actor.
pub async fn defer_ephemeral(
    http: &Client,
    interaction: &InteractionCreate,
) -> Result<(), PlatformError> {
    let response = InteractionResponse {
        kind: InteractionResponseType::DeferredChannelMessageWithSource,
        data: Some(
            InteractionResponseDataBuilder::new()
                .flags(MessageFlags::EPHEMERAL)
                .build(),
        ),
    };

    http.interaction(interaction.application_id)
        .create_response(interaction.id, &interaction.token, &response)
        .await?;

    Ok(())
}

/// Send an ephemeral followup after [`defer_ephemeral`].
pub async fn followup_ephemeral(
    http: &Client,
    interaction: &InteractionCreate,
    content: &str,
) -> Result<(), PlatformError> {
    http.interaction(interaction.application_id)
        .create_followup(&interaction.token)
        .content(content)
        .flags(MessageFlags::EPHEMERAL)
        .await?;

    Ok(())
}
