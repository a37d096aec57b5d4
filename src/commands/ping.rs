//! Implements `/ping`: reports the shard's gateway heartbeat latency.
use crate::model::ShardManagerContainer;
use serenity::builder::{CreateCommand, CreateInteractionResponse, CreateInteractionResponseMessage};
use serenity::model::application::CommandInteraction;
use serenity::model::channel::Message;
use serenity::prelude::*;

pub fn register() -> CreateCommand {
    CreateCommand::new("ping").description("Checks the bot's latency.")
}

async fn latency_text(ctx: &Context) -> String {
    let data = ctx.data.read().await;
    let Some(shard_manager) = data.get::<ShardManagerContainer>() else {
        return "N/A".to_string();
    };
    let runners = shard_manager.runners.lock().await;
    runners
        .get(&ctx.shard_id)
        .and_then(|runner| runner.latency)
        .map_or_else(|| "N/A".to_string(), |l| format!("{} ms", l.as_millis()))
}

pub async fn run_slash(ctx: &Context, interaction: &CommandInteraction) {
    let response = format!("Pong! Heartbeat Latency: `{}`", latency_text(ctx).await);
    let builder =
        CreateInteractionResponse::Message(CreateInteractionResponseMessage::new().content(response));
    if let Err(why) = interaction.create_response(&ctx.http, builder).await {
        tracing::warn!(target: "commands.ping", error = ?why, "failed to send ping response");
    }
}

pub async fn run_prefix(ctx: &Context, msg: &Message) {
    let response = format!("Pong! Heartbeat Latency: `{}`", latency_text(ctx).await);
    if let Err(why) = msg.channel_id.say(&ctx.http, response).await {
        tracing::warn!(target: "commands.ping", error = ?why, "failed to send ping response");
    }
}
