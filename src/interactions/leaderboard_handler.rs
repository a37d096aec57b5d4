//! Handles all component interactions for the `leaderboard` command family.

use super::ids::parse_leaderboard_id;
use super::util::{defer_component, edit_component};
use crate::progression::ranking::Cohort;
use crate::{AppState, commands};
use serenity::builder::EditInteractionResponse;
use serenity::model::application::ComponentInteraction;
use serenity::prelude::Context;
use std::sync::Arc;

pub async fn handle(ctx: &Context, component: &mut ComponentInteraction, app_state: Arc<AppState>) {
    defer_component(ctx, component).await;

    // Rankings are projected for whoever pressed the tab, not the message author.
    let cohort = parse_leaderboard_id(&component.data.custom_id).unwrap_or(Cohort::All);
    let (embed, components) =
        commands::leaderboard::run::leaderboard_view(&app_state, &component.user, cohort).await;

    let builder = EditInteractionResponse::new()
        .embed(embed)
        .components(components);
    edit_component(ctx, component, cohort.key(), builder).await;
}
