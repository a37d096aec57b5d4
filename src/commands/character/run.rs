//! Implements the `/character` and `/allocate` commands.

use super::ui::{create_character_buttons, create_character_embed};
use crate::commands::option;
use crate::progression::allocation::StatAllocation;
use crate::ui::style::{core_error_embed, error_embed};
use crate::util::{display_name, user_key};
use crate::{AppState, database, services};
use serenity::builder::{
    CreateActionRow, CreateCommand, CreateCommandOption, CreateEmbed,
    CreateInteractionResponseFollowup, CreateMessage,
};
use serenity::model::application::{CommandInteraction, CommandOptionType};
use serenity::model::channel::Message;
use serenity::model::user::User;
use serenity::prelude::*;

pub fn register() -> CreateCommand {
    CreateCommand::new("character").description("View your character and spend stat points.")
}

pub fn register_allocate() -> CreateCommand {
    CreateCommand::new("allocate")
        .description("Spend unspent stat points on attack and defense.")
        .add_option(
            CreateCommandOption::new(CommandOptionType::Integer, "attack", "Points for attack.")
                .min_int_value(0)
                .required(false),
        )
        .add_option(
            CreateCommandOption::new(CommandOptionType::Integer, "defense", "Points for defense.")
                .min_int_value(0)
                .required(false),
        )
}

/// Parses `allocate <attack> [defense]` arguments; missing values count as zero.
pub fn parse_allocate_args(args: &[&str]) -> Option<StatAllocation> {
    let attack = match args.first() {
        Some(v) => v.parse::<u32>().ok()?,
        None => 0,
    };
    let defense = match args.get(1) {
        Some(v) => v.parse::<u32>().ok()?,
        None => 0,
    };
    Some(StatAllocation { attack, defense })
}

async fn character_view(app_state: &AppState, user: &User) -> (CreateEmbed, Vec<CreateActionRow>) {
    let profile = database::profile::get_or_create_profile(
        &app_state.store,
        &user_key(user.id),
        display_name(user),
    )
    .await;
    (
        create_character_embed(&profile.character, None),
        vec![create_character_buttons(&profile.character)],
    )
}

/// Runs an allocation and renders the sheet with the outcome as its notice.
pub async fn allocate_and_render(
    app_state: &AppState,
    user: &User,
    points: StatAllocation,
) -> (CreateEmbed, Vec<CreateActionRow>) {
    if points.total() == 0 {
        return (
            error_embed("Nothing to Allocate", "Choose at least one point for attack or defense."),
            vec![],
        );
    }
    let result = services::progress::allocate_points(
        &app_state.store,
        &user_key(user.id),
        display_name(user),
        points,
    )
    .await;
    match result {
        Ok(character) => {
            let notice = format!(
                "Allocated **{}** attack and **{}** defense.",
                points.attack, points.defense
            );
            (
                create_character_embed(&character, Some(&notice)),
                vec![create_character_buttons(&character)],
            )
        }
        Err(e) => (core_error_embed(e), vec![]),
    }
}

pub async fn run_slash(ctx: &Context, interaction: &CommandInteraction) {
    interaction.defer_ephemeral(&ctx.http).await.ok();
    let Some(app_state) = AppState::from_ctx(ctx).await else {
        return;
    };
    let (embed, components) = character_view(&app_state, &interaction.user).await;
    let builder = CreateInteractionResponseFollowup::new()
        .embed(embed)
        .components(components);
    interaction.create_followup(&ctx.http, builder).await.ok();
}

pub async fn run_prefix(ctx: &Context, msg: &Message, _args: Vec<&str>) {
    let Some(app_state) = AppState::from_ctx(ctx).await else {
        return;
    };
    let (embed, components) = character_view(&app_state, &msg.author).await;
    let builder = CreateMessage::new()
        .embed(embed)
        .components(components)
        .reference_message(msg);
    msg.channel_id.send_message(&ctx.http, builder).await.ok();
}

pub async fn run_allocate_slash(ctx: &Context, interaction: &CommandInteraction) {
    interaction.defer_ephemeral(&ctx.http).await.ok();
    let Some(app_state) = AppState::from_ctx(ctx).await else {
        return;
    };
    let read = |name: &str| {
        option(interaction, name)
            .and_then(|v| v.as_i64())
            .and_then(|n| u32::try_from(n).ok())
            .unwrap_or(0)
    };
    let points = StatAllocation {
        attack: read("attack"),
        defense: read("defense"),
    };
    let (embed, components) = allocate_and_render(&app_state, &interaction.user, points).await;
    let builder = CreateInteractionResponseFollowup::new()
        .embed(embed)
        .components(components);
    interaction.create_followup(&ctx.http, builder).await.ok();
}

pub async fn run_allocate_prefix(ctx: &Context, msg: &Message, args: Vec<&str>) {
    let Some(app_state) = AppState::from_ctx(ctx).await else {
        return;
    };
    let (embed, components) = match parse_allocate_args(&args) {
        Some(points) => allocate_and_render(&app_state, &msg.author, points).await,
        None => {
            let prefix = app_state.prefix.read().await.clone();
            (
                error_embed(
                    "Invalid Allocation",
                    format!("Usage: `{prefix}allocate <attack> [defense]`"),
                ),
                vec![],
            )
        }
    };
    let builder = CreateMessage::new()
        .embed(embed)
        .components(components)
        .reference_message(msg);
    msg.channel_id.send_message(&ctx.http, builder).await.ok();
}
