//! Handles the stat allocation buttons on the character sheet.

use super::ids::{CHARACTER_REFRESH, parse_character_id};
use super::util::{defer_component, edit_component};
use crate::commands::character::ui::{create_character_buttons, create_character_embed};
use crate::util::{display_name, user_key};
use crate::{AppState, commands, database};
use serenity::builder::{
    CreateInteractionResponse, CreateInteractionResponseMessage, EditInteractionResponse,
};
use serenity::model::application::{ComponentInteraction, MessageInteractionMetadata};
use serenity::model::id::UserId;
use serenity::prelude::Context;
use std::sync::Arc;

fn sheet_owner(component: &ComponentInteraction) -> Option<UserId> {
    component.message.interaction_metadata.as_deref().and_then(invoker)
}

/// The user whose interaction produced a message.
fn invoker(meta: &MessageInteractionMetadata) -> Option<UserId> {
    match meta {
        MessageInteractionMetadata::Command(meta) => Some(meta.user.id),
        MessageInteractionMetadata::Component(meta) => Some(meta.user.id),
        MessageInteractionMetadata::ModalSubmit(meta) => Some(meta.user.id),
        _ => None,
    }
}

pub async fn handle(ctx: &Context, component: &mut ComponentInteraction, app_state: Arc<AppState>) {
    // Only the sheet's owner may spend its points.
    if let Some(owner) = sheet_owner(component)
        && owner != component.user.id
    {
        let builder = CreateInteractionResponse::Message(
            CreateInteractionResponseMessage::new()
                .content("This isn't your character sheet. Open your own with `/character`.")
                .ephemeral(true),
        );
        component.create_response(&ctx.http, builder).await.ok();
        return;
    }

    defer_component(ctx, component).await;
    let user = component.user.clone();
    let custom_id = component.data.custom_id.clone();

    let (embed, components) = if let Some(points) = parse_character_id(&custom_id) {
        commands::character::run::allocate_and_render(&app_state, &user, points).await
    } else if custom_id == CHARACTER_REFRESH {
        let profile = database::profile::get_or_create_profile(
            &app_state.store,
            &user_key(user.id),
            display_name(&user),
        )
        .await;
        (
            create_character_embed(&profile.character, None),
            vec![create_character_buttons(&profile.character)],
        )
    } else {
        return;
    };

    let builder = EditInteractionResponse::new()
        .embed(embed)
        .components(components);
    edit_component(ctx, component, &custom_id, builder).await;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invoker_comes_from_the_slash_command_metadata() {
        let raw = r#"{
            "type": 2,
            "id": "900",
            "user": {"id": "42", "username": "kim", "avatar": null, "global_name": null},
            "authorizing_integration_owners": {}
        }"#;
        let meta: MessageInteractionMetadata = serenity::json::from_str(raw).unwrap();
        assert_eq!(invoker(&meta), Some(UserId::new(42)));
    }
}
