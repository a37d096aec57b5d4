//! Implements the `/restaurants` command.

use super::ui::create_catalog_embed;
use crate::commands::option;
use crate::database::catalog::{Category, list_restaurants};
use crate::ui::style::error_embed;
use serenity::builder::{
    CreateCommand, CreateCommandOption, CreateEmbed, CreateInteractionResponse,
    CreateInteractionResponseMessage, CreateMessage,
};
use serenity::model::application::{CommandInteraction, CommandOptionType};
use serenity::model::channel::Message;
use serenity::prelude::*;

pub fn register() -> CreateCommand {
    let mut category_option =
        CreateCommandOption::new(CommandOptionType::String, "category", "Filter by category.")
            .required(false);
    for category in Category::ALL {
        category_option = category_option.add_string_choice(category.display_name(), category.key());
    }
    CreateCommand::new("restaurants")
        .description("Browse restaurants you can pick up from.")
        .add_option(category_option)
}

fn catalog_view(raw_category: Option<&str>) -> CreateEmbed {
    match raw_category {
        None => create_catalog_embed(None, &list_restaurants(None)),
        Some(raw) => match Category::from_key(raw) {
            Some(c) => create_catalog_embed(Some(c), &list_restaurants(Some(c))),
            None => {
                let keys = Category::ALL
                    .iter()
                    .map(|c| format!("`{}`", c.key()))
                    .collect::<Vec<_>>()
                    .join(" ");
                error_embed("Unknown Category", format!("Try one of: {keys}"))
            }
        },
    }
}

pub async fn run_slash(ctx: &Context, interaction: &CommandInteraction) {
    let embed = catalog_view(option(interaction, "category").and_then(|v| v.as_str()));
    let builder =
        CreateInteractionResponse::Message(CreateInteractionResponseMessage::new().embed(embed));
    interaction.create_response(&ctx.http, builder).await.ok();
}

pub async fn run_prefix(ctx: &Context, msg: &Message, args: Vec<&str>) {
    let embed = catalog_view(args.first().copied());
    let builder = CreateMessage::new().embed(embed).reference_message(msg);
    msg.channel_id.send_message(&ctx.http, builder).await.ok();
}
