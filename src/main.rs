use pickup_quest::config::BotConfig;
use pickup_quest::database::MemoryStore;
use pickup_quest::handler;
use pickup_quest::model::{AppState, ShardManagerContainer};
use pickup_quest::progression::ranking::{RandomScores, ScoreSource};
use serenity::model::gateway::GatewayIntents;
use serenity::model::id::GuildId;
use serenity::prelude::*;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // A missing .env is fine when the variables come from the environment.
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = BotConfig::from_env().expect("Invalid bot configuration.");
    let allowed_guild_id = GuildId::new(config.guild_id);

    let scores: Box<dyn ScoreSource> = match config.ranking_seed {
        Some(seed) => Box::new(RandomScores::seeded(seed)),
        None => Box::new(RandomScores::from_entropy()),
    };
    let app_state = Arc::new(AppState::new(MemoryStore::new(scores), config.prefix.clone()));

    // In Serenity v0.12, interactions are received by default with GUILDS.
    let intents =
        GatewayIntents::GUILDS | GatewayIntents::GUILD_MESSAGES | GatewayIntents::MESSAGE_CONTENT;

    let mut client = Client::builder(&config.token, intents)
        .event_handler(handler::Handler { allowed_guild_id })
        .await
        .expect("Error creating the Discord client.");

    {
        let mut data = client.data.write().await;
        data.insert::<ShardManagerContainer>(client.shard_manager.clone());
        data.insert::<AppState>(app_state);
    }

    info!(target: "startup", guild_id = config.guild_id, prefix = %config.prefix, "starting client");
    if let Err(why) = client.start().await {
        error!(target: "startup", error = ?why, "client error");
    }
}
