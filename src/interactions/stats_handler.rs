//! Handles the calories / money toggle on the stat breakdown.

use super::ids::parse_stats_id;
use super::util::{defer_component, edit_component};
use crate::{AppState, commands};
use serenity::builder::EditInteractionResponse;
use serenity::model::application::ComponentInteraction;
use serenity::prelude::Context;
use std::sync::Arc;

pub async fn handle(ctx: &Context, component: &mut ComponentInteraction, app_state: Arc<AppState>) {
    let Some(detail) = parse_stats_id(&component.data.custom_id) else {
        return;
    };
    defer_component(ctx, component).await;
    let (embed, components) =
        commands::activity::run::stats_view(&app_state, &component.user, detail).await;
    let builder = EditInteractionResponse::new()
        .embed(embed)
        .components(components);
    edit_component(ctx, component, "stats", builder).await;
}
