//! Implements the `/friend` command.

use super::ui::{create_friend_added_embed, create_friend_list_embed};
use crate::commands::option;
use crate::ui::style::core_error_embed;
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
    CreateCommand::new("friend")
        .description("Add a friend by nickname, or list your friends.")
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::String,
                "name",
                "Nickname of the player to add. Leave empty to list friends.",
            )
            .required(false),
        )
}

async fn friend_view(app_state: &AppState, user: &User, nickname: Option<&str>) -> CreateEmbed {
    let key = user_key(user.id);
    match nickname.map(str::trim).filter(|n| !n.is_empty()) {
        Some(nickname) => {
            match services::progress::add_friend(&app_state.store, &key, display_name(user), nickname)
                .await
            {
                Ok(message) => create_friend_added_embed(&message),
                Err(e) => core_error_embed(e),
            }
        }
        None => {
            // Creates the session (and its starter friends) on first use.
            database::profile::get_or_create_profile(&app_state.store, &key, display_name(user))
                .await;
            let friends = database::friends::list_friends(&app_state.store, &key).await;
            create_friend_list_embed(&friends)
        }
    }
}

pub async fn run_slash(ctx: &Context, interaction: &CommandInteraction) {
    interaction.defer_ephemeral(&ctx.http).await.ok();
    let Some(app_state) = AppState::from_ctx(ctx).await else {
        return;
    };
    let nickname = option(interaction, "name").and_then(|v| v.as_str());
    let embed = friend_view(&app_state, &interaction.user, nickname).await;
    let builder = CreateInteractionResponseFollowup::new().embed(embed);
    interaction.create_followup(&ctx.http, builder).await.ok();
}

pub async fn run_prefix(ctx: &Context, msg: &Message, args: Vec<&str>) {
    let Some(app_state) = AppState::from_ctx(ctx).await else {
        return;
    };
    // `friend add <name>` and `friend <name>` are equivalent.
    let args = match args.first() {
        Some(&"add") => &args[1..],
        _ => &args[..],
    };
    let nickname = args.join(" ");
    let embed = friend_view(&app_state, &msg.author, Some(&nickname)).await;
    let builder = CreateMessage::new().embed(embed).reference_message(msg);
    msg.channel_id.send_message(&ctx.http, builder).await.ok();
}
