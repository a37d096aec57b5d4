//! Implements the run logic for the `/pickup` command.

use super::logic::{USAGE, parse_pickup_args};
use super::ui::create_pickup_embed;
use crate::commands::option;
use crate::constants::MAX_DISTANCE_KM;
use crate::database::models::PickupEvent;
use crate::ui::style::{core_error_embed, error_embed};
use crate::util::{display_name, user_key};
use crate::{AppState, services};
use chrono::Utc;
use serenity::builder::{
    CreateCommand, CreateCommandOption, CreateEmbed, CreateInteractionResponse,
    CreateInteractionResponseMessage, CreateMessage, EditInteractionResponse,
};
use serenity::model::application::{CommandInteraction, CommandOptionType};
use serenity::model::channel::Message;
use serenity::model::user::User;
use serenity::prelude::*;

pub fn register() -> CreateCommand {
    CreateCommand::new("pickup")
        .description("Log a food pickup you walked to.")
        .add_option(
            CreateCommandOption::new(CommandOptionType::String, "restaurant", "Where you picked up.")
                .required(true),
        )
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::Number,
                "distance_km",
                "Distance walked, in km.",
            )
            .min_number_value(0.01)
            .max_number_value(MAX_DISTANCE_KM)
            .required(true),
        )
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::Integer,
                "order_value",
                "Order total, in won.",
            )
            .min_int_value(1)
            .required(true),
        )
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::Boolean,
                "reusable",
                "Did you bring a reusable container?",
            )
            .required(false),
        )
}

/// Shared path for both command forms: log the pickup and render the result.
async fn log_and_render(app_state: &AppState, user: &User, event: &PickupEvent) -> CreateEmbed {
    let result = services::progress::log_pickup(
        &app_state.store,
        &user_key(user.id),
        display_name(user),
        event,
        Utc::now(),
    )
    .await;
    match result {
        Ok((outcome, profile)) => create_pickup_embed(&outcome, &profile),
        Err(e) => core_error_embed(e),
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

    let event = PickupEvent {
        restaurant_name: option(interaction, "restaurant")
            .and_then(|v| v.as_str())
            .unwrap_or_default()
            .to_string(),
        distance_km: option(interaction, "distance_km")
            .and_then(|v| v.as_f64())
            .unwrap_or_default(),
        order_value: option(interaction, "order_value")
            .and_then(|v| v.as_i64())
            .unwrap_or_default() as f64,
        used_reusable_container: option(interaction, "reusable")
            .and_then(|v| v.as_bool())
            .unwrap_or(false),
    };

    let embed = log_and_render(&app_state, &interaction.user, &event).await;
    interaction
        .edit_response(&ctx.http, EditInteractionResponse::new().embed(embed))
        .await
        .ok();
}

pub async fn run_prefix(ctx: &Context, msg: &Message, args: Vec<&str>) {
    let Some(app_state) = AppState::from_ctx(ctx).await else {
        return;
    };
    let embed = match parse_pickup_args(&args) {
        Ok(event) => log_and_render(&app_state, &msg.author, &event).await,
        Err(e) => {
            let prefix = app_state.prefix.read().await.clone();
            error_embed("Invalid Pickup", format!("{e}.\nUsage: `{prefix}{USAGE}`"))
        }
    };
    let builder = CreateMessage::new().embed(embed).reference_message(msg);
    msg.channel_id.send_message(&ctx.http, builder).await.ok();
}
