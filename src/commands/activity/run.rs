//! Implements the `/activity`, `/stats` and `/share` commands.

use super::ui::{create_activity_embed, create_share_embed, create_stats_buttons, create_stats_embed};
use crate::commands::option;
use crate::progression::summary::{StatDetail, weekly_summary};
use crate::util::{display_name, user_key};
use crate::{AppState, database};
use chrono::Utc;
use serenity::builder::{
    CreateActionRow, CreateCommand, CreateCommandOption, CreateEmbed,
    CreateInteractionResponseFollowup, CreateMessage,
};
use serenity::model::application::{CommandInteraction, CommandOptionType};
use serenity::model::channel::Message;
use serenity::model::user::User;
use serenity::prelude::*;

pub fn register() -> CreateCommand {
    CreateCommand::new("activity").description("Show your most recent pickups.")
}

pub fn register_stats() -> CreateCommand {
    CreateCommand::new("stats")
        .description("Break down calories burned or money saved per pickup.")
        .add_option(
            CreateCommandOption::new(CommandOptionType::String, "stat", "Which stat to show.")
                .add_string_choice("Calories", "calories")
                .add_string_choice("Money", "money")
                .required(false),
        )
}

pub fn register_share() -> CreateCommand {
    CreateCommand::new("share").description("Post your weekly pickup summary card.")
}

pub fn parse_stat_detail(raw: &str) -> Option<StatDetail> {
    match raw.to_ascii_lowercase().as_str() {
        "calories" | "kcal" | "cal" => Some(StatDetail::CaloriesBurned),
        "money" | "saved" | "won" => Some(StatDetail::MoneySaved),
        _ => None,
    }
}

async fn activity_view(app_state: &AppState, user: &User) -> CreateEmbed {
    let key = user_key(user.id);
    let profile = database::profile::get_or_create_profile(&app_state.store, &key, display_name(user)).await;
    let activities = database::activity::list_activities(&app_state.store, &key).await;
    create_activity_embed(&profile.name, &activities)
}

/// Used by the stats toggle buttons as well.
pub async fn stats_view(
    app_state: &AppState,
    user: &User,
    detail: StatDetail,
) -> (CreateEmbed, Vec<CreateActionRow>) {
    let key = user_key(user.id);
    let profile = database::profile::get_or_create_profile(&app_state.store, &key, display_name(user)).await;
    let activities = database::activity::list_activities(&app_state.store, &key).await;
    (
        create_stats_embed(&profile, &activities, detail),
        vec![create_stats_buttons(detail)],
    )
}

async fn share_view(app_state: &AppState, user: &User) -> CreateEmbed {
    let key = user_key(user.id);
    let profile = database::profile::get_or_create_profile(&app_state.store, &key, display_name(user)).await;
    let activities = database::activity::list_activities(&app_state.store, &key).await;
    create_share_embed(&profile.name, &weekly_summary(&activities, Utc::now()))
}

pub async fn run_slash(ctx: &Context, interaction: &CommandInteraction) {
    interaction.defer_ephemeral(&ctx.http).await.ok();
    let Some(app_state) = AppState::from_ctx(ctx).await else {
        return;
    };
    let embed = activity_view(&app_state, &interaction.user).await;
    let builder = CreateInteractionResponseFollowup::new().embed(embed);
    interaction.create_followup(&ctx.http, builder).await.ok();
}

pub async fn run_prefix(ctx: &Context, msg: &Message, _args: Vec<&str>) {
    let Some(app_state) = AppState::from_ctx(ctx).await else {
        return;
    };
    let embed = activity_view(&app_state, &msg.author).await;
    let builder = CreateMessage::new().embed(embed).reference_message(msg);
    msg.channel_id.send_message(&ctx.http, builder).await.ok();
}

pub async fn run_stats_slash(ctx: &Context, interaction: &CommandInteraction) {
    interaction.defer_ephemeral(&ctx.http).await.ok();
    let Some(app_state) = AppState::from_ctx(ctx).await else {
        return;
    };
    let detail = option(interaction, "stat")
        .and_then(|v| v.as_str())
        .and_then(parse_stat_detail)
        .unwrap_or(StatDetail::CaloriesBurned);
    let (embed, components) = stats_view(&app_state, &interaction.user, detail).await;
    let builder = CreateInteractionResponseFollowup::new()
        .embed(embed)
        .components(components);
    interaction.create_followup(&ctx.http, builder).await.ok();
}

pub async fn run_stats_prefix(ctx: &Context, msg: &Message, args: Vec<&str>) {
    let Some(app_state) = AppState::from_ctx(ctx).await else {
        return;
    };
    let detail = args
        .first()
        .and_then(|s| parse_stat_detail(s))
        .unwrap_or(StatDetail::CaloriesBurned);
    let (embed, components) = stats_view(&app_state, &msg.author, detail).await;
    let builder = CreateMessage::new()
        .embed(embed)
        .components(components)
        .reference_message(msg);
    msg.channel_id.send_message(&ctx.http, builder).await.ok();
}

/// The share card is public so it can be shown off in the channel.
pub async fn run_share_slash(ctx: &Context, interaction: &CommandInteraction) {
    interaction.defer(&ctx.http).await.ok();
    let Some(app_state) = AppState::from_ctx(ctx).await else {
        return;
    };
    let embed = share_view(&app_state, &interaction.user).await;
    let builder = CreateInteractionResponseFollowup::new().embed(embed);
    interaction.create_followup(&ctx.http, builder).await.ok();
}

pub async fn run_share_prefix(ctx: &Context, msg: &Message, _args: Vec<&str>) {
    let Some(app_state) = AppState::from_ctx(ctx).await else {
        return;
    };
    let embed = share_view(&app_state, &msg.author).await;
    let builder = CreateMessage::new().embed(embed).reference_message(msg);
    msg.channel_id.send_message(&ctx.http, builder).await.ok();
}
