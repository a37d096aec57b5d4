//! Implements the `/profile` and `/rename` commands.

use super::ui::{create_profile_embed, create_rename_embed};
use crate::commands::option;
use crate::ui::style::{core_error_embed, error_embed};
use crate::util::{display_name, user_key};
use crate::{AppState, database, services};
use serenity::builder::{
    CreateCommand, CreateCommandOption, CreateEmbed, CreateInteractionResponseFollowup,
    CreateMessage,
};
use serenity::model::application::{CommandInteraction, CommandOptionType};
use serenity::model::channel::Message;
use serenity::model::user::User;
use serenity::prelude::*;

pub fn register() -> CreateCommand {
    CreateCommand::new("profile")
        .description("View your or another player's pickup profile.")
        .add_option(
            CreateCommandOption::new(CommandOptionType::User, "user", "The user to view.")
                .required(false),
        )
}

pub fn register_rename() -> CreateCommand {
    CreateCommand::new("rename")
        .description("Change the name shown on leaderboards.")
        .add_option(
            CreateCommandOption::new(CommandOptionType::String, "name", "Your new name.")
                .max_length(32)
                .required(true),
        )
}

/// Your own profile is created on first view; other players must have played.
async fn build_profile_embed(app_state: &AppState, viewer: &User, target: &User) -> CreateEmbed {
    let store = &app_state.store;
    let profile = if target.id == viewer.id {
        Some(
            database::profile::get_or_create_profile(
                store,
                &user_key(viewer.id),
                display_name(viewer),
            )
            .await,
        )
    } else {
        database::profile::find_profile(store, &user_key(target.id)).await
    };
    match profile {
        Some(p) => create_profile_embed(&p, Some(target.face())),
        None => error_embed(
            "No Profile",
            format!("{} hasn't logged any pickups yet.", display_name(target)),
        ),
    }
}

pub async fn run_slash(ctx: &Context, interaction: &CommandInteraction) {
    interaction.defer_ephemeral(&ctx.http).await.ok();
    let Some(app_state) = AppState::from_ctx(ctx).await else {
        return;
    };

    let target = match option(interaction, "user").and_then(|v| v.as_user_id()) {
        Some(id) => id
            .to_user(&ctx.http)
            .await
            .unwrap_or_else(|_| interaction.user.clone()),
        None => interaction.user.clone(),
    };

    let embed = build_profile_embed(&app_state, &interaction.user, &target).await;
    let builder = CreateInteractionResponseFollowup::new().embed(embed);
    interaction.create_followup(&ctx.http, builder).await.ok();
}

pub async fn run_prefix(ctx: &Context, msg: &Message, _args: Vec<&str>) {
    let Some(app_state) = AppState::from_ctx(ctx).await else {
        return;
    };
    let target = msg
        .mentions
        .first()
        .cloned()
        .unwrap_or_else(|| msg.author.clone());

    let embed = build_profile_embed(&app_state, &msg.author, &target).await;
    let builder = CreateMessage::new().embed(embed).reference_message(msg);
    msg.channel_id.send_message(&ctx.http, builder).await.ok();
}

async fn rename_and_render(app_state: &AppState, user: &User, new_name: &str) -> CreateEmbed {
    match services::progress::rename(&app_state.store, &user_key(user.id), display_name(user), new_name)
        .await
    {
        Ok(profile) => create_rename_embed(&profile),
        Err(e) => core_error_embed(e),
    }
}

pub async fn run_rename_slash(ctx: &Context, interaction: &CommandInteraction) {
    interaction.defer_ephemeral(&ctx.http).await.ok();
    let Some(app_state) = AppState::from_ctx(ctx).await else {
        return;
    };
    let new_name = option(interaction, "name")
        .and_then(|v| v.as_str())
        .unwrap_or_default();
    let embed = rename_and_render(&app_state, &interaction.user, new_name).await;
    let builder = CreateInteractionResponseFollowup::new().embed(embed);
    interaction.create_followup(&ctx.http, builder).await.ok();
}

pub async fn run_rename_prefix(ctx: &Context, msg: &Message, args: Vec<&str>) {
    let Some(app_state) = AppState::from_ctx(ctx).await else {
        return;
    };
    let embed = rename_and_render(&app_state, &msg.author, &args.join(" ")).await;
    let builder = CreateMessage::new().embed(embed).reference_message(msg);
    msg.channel_id.send_message(&ctx.http, builder).await.ok();
}
