use std::sync::Arc;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use twilight_gateway::{EventTypeFlags, Intents, Shard, ShardId, StreamExt as _};
use twilight_http::Client;
use twilight_model::gateway::event::Event;

use rustls::crypto::ring::default_provider;

use wiki_commands::{handle_interaction, handle_message};
use wiki_core::{CommandSet, Context, config::BotConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    default_provider()
        .install_default()
        .map_err(|_| anyhow::anyhow!("failed to install rustls ring provider"))?;

    // Load the .env file
    dotenvy::dotenv().ok();

    let config = BotConfig::from_env()?;
    let sets = config
        .command_sets
        .into_iter()
        .map(CommandSet::new)
        .collect::<Result<Vec<_>, _>>()?;
    let enabled: Vec<&str> = sets.iter().map(CommandSet::key).collect();
    info!(?enabled, "command sets loaded");

    // Create a single shared HTTP Client
    let http = Arc::new(Client::new(config.token.clone()));
    let ctx = Context::new(Arc::clone(&http), sets);

    let intents = Intents::GUILDS | Intents::GUILD_MESSAGES | Intents::MESSAGE_CONTENT;

    // A shard is one Gateway WebSocket connection to Discord
    let mut shard = Shard::new(ShardId::new(0, 1), config.token, intents);

    info!("wiki bot is connecting...");

    while let Some(item) = shard.next_event(EventTypeFlags::all()).await {
        let event = match item {
            Ok(event) => event,
            Err(source) => {
                error!(?source, "gateway event stream error");
                continue;
            }
        };

        match event {
            Event::Ready(_) => {
                info!("wiki bot is ready");
            }
            Event::MessageCreate(msg) => {
                let channel_id = msg.channel_id.get();
                if let Err(source) = handle_message(ctx.clone(), msg).await {
                    error!(?source, channel_id, "message handler failed");
                }
            }
            Event::InteractionCreate(interaction) => {
                let interaction_id = interaction.id.get();
                if let Err(source) = handle_interaction(ctx.clone(), interaction).await {
                    error!(?source, interaction_id, "interaction handler failed");
                }
            }
            _ => {}
        }
    }

    Ok(())
}
