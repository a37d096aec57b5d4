//! Implements the run logic for the `/leaderboard` command.

use super::ui::{create_leaderboard_buttons, create_leaderboard_embed};
use crate::commands::option;
use crate::progression::ranking::Cohort;
use crate::ui::style::error_embed;
use crate::util::{display_name, user_key};
use crate::{AppState, database, services};
use serenity::builder::{
    CreateActionRow, CreateCommand, CreateCommandOption, CreateEmbed, CreateInteractionResponse,
    CreateInteractionResponseMessage, CreateMessage, EditInteractionResponse,
};
use serenity::model::application::{CommandInteraction, CommandOptionType};
use serenity::model::channel::Message;
use serenity::model::user::User;
use serenity::prelude::*;

pub fn register() -> CreateCommand {
    let mut cohort_option =
        CreateCommandOption::new(CommandOptionType::String, "cohort", "Which ranking to show.")
            .required(false);
    for cohort in Cohort::ALL {
        cohort_option = cohort_option.add_string_choice(cohort.title(), cohort.key());
    }
    CreateCommand::new("leaderboard")
        .description("View the pickup rankings.")
        .add_option(cohort_option)
}

/// Builds the leaderboard view for `user`, creating their profile if needed.
/// Shared with the cohort tab buttons.
pub async fn leaderboard_view(
    app_state: &AppState,
    user: &User,
    cohort: Cohort,
) -> (CreateEmbed, Vec<CreateActionRow>) {
    let key = user_key(user.id);
    database::profile::get_or_create_profile(&app_state.store, &key, display_name(user)).await;
    match services::ranking::get_leaderboard(app_state.store.as_ref(), &key, cohort).await {
        Some(board) => (
            create_leaderboard_embed(&board),
            vec![create_leaderboard_buttons(cohort)],
        ),
        None => (
            error_embed("Leaderboard Unavailable", "Your profile could not be loaded."),
            vec![],
        ),
    }
}

pub async fn run_slash(ctx: &Context, interaction: &CommandInteraction) {
    interaction
        .create_response(
            &ctx.http,
            CreateInteractionResponse::Defer(CreateInteractionResponseMessage::new()),
        )
        .await
        .ok();

    let Some(app_state) = AppState::from_ctx(ctx).await else {
        return;
    };
    let cohort = option(interaction, "cohort")
        .and_then(|v| v.as_str())
        .and_then(|s| s.parse::<Cohort>().ok())
        .unwrap_or(Cohort::All);

    let (embed, components) = leaderboard_view(&app_state, &interaction.user, cohort).await;
    let builder = EditInteractionResponse::new()
        .embed(embed)
        .components(components);
    interaction.edit_response(&ctx.http, builder).await.ok();
}

pub async fn run_prefix(ctx: &Context, msg: &Message, args: Vec<&str>) {
    let Some(app_state) = AppState::from_ctx(ctx).await else {
        return;
    };
    let cohort = args
        .first()
        .and_then(|s| s.to_ascii_lowercase().parse::<Cohort>().ok())
        .unwrap_or(Cohort::All);

    let (embed, components) = leaderboard_view(&app_state, &msg.author, cohort).await;
    let builder = CreateMessage::new()
        .embed(embed)
        .components(components)
        .reference_message(msg);
    msg.channel_id.send_message(&ctx.http, builder).await.ok();
}
