use crate::interactions::ids::family;
use crate::{AppState, commands, interactions};
use serenity::async_trait;
use serenity::client::Context;
use serenity::model::application::Interaction;
use serenity::model::{channel::Message, gateway::Ready, id::GuildId};
use serenity::prelude::EventHandler;
use std::str::FromStr;
use tracing::{debug, error, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Ping,
    Help,
    Pickup,
    Profile,
    Rename,
    Character,
    Allocate,
    Activity,
    Stats,
    Share,
    Leaderboard,
    Friend,
    Restaurants,
    Unknown,
}

impl FromStr for Command {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ping" => Ok(Command::Ping),
            "help" | "h" => Ok(Command::Help),
            "pickup" | "pu" | "walk" => Ok(Command::Pickup),
            "profile" | "p" => Ok(Command::Profile),
            "rename" => Ok(Command::Rename),
            "character" | "char" => Ok(Command::Character),
            "allocate" | "alloc" => Ok(Command::Allocate),
            "activity" | "history" => Ok(Command::Activity),
            "stats" => Ok(Command::Stats),
            "share" => Ok(Command::Share),
            "leaderboard" | "lb" => Ok(Command::Leaderboard),
            "friend" | "friends" => Ok(Command::Friend),
            "restaurants" | "shops" => Ok(Command::Restaurants),
            _ => Ok(Command::Unknown),
        }
    }
}

pub struct Handler {
    pub allowed_guild_id: GuildId,
}

#[async_trait]
impl EventHandler for Handler {
    async fn interaction_create(&self, ctx: Context, mut interaction: Interaction) {
        let Some(app_state) = AppState::from_ctx(&ctx).await else {
            error!(target: "handler", "AppState missing from TypeMap");
            return;
        };
        if let Interaction::Command(command) = &mut interaction {
            debug!(target: "handler", command = %command.data.name, user = %command.user.id, "slash command");
            match command.data.name.as_str() {
                "ping" => commands::ping::run_slash(&ctx, command).await,
                "help" => commands::help::run_slash(&ctx, command).await,
                "pickup" => commands::pickup::run::run_slash(&ctx, command).await,
                "profile" => commands::profile::run::run_slash(&ctx, command).await,
                "rename" => commands::profile::run::run_rename_slash(&ctx, command).await,
                "character" => commands::character::run::run_slash(&ctx, command).await,
                "allocate" => commands::character::run::run_allocate_slash(&ctx, command).await,
                "activity" => commands::activity::run::run_slash(&ctx, command).await,
                "stats" => commands::activity::run::run_stats_slash(&ctx, command).await,
                "share" => commands::activity::run::run_share_slash(&ctx, command).await,
                "leaderboard" => commands::leaderboard::run::run_slash(&ctx, command).await,
                "friend" => commands::friend::run::run_slash(&ctx, command).await,
                "restaurants" => commands::restaurants::run::run_slash(&ctx, command).await,
                _ => {}
            }
        } else if let Interaction::Component(component) = &mut interaction {
            let command_family = family(&component.data.custom_id).to_string();
            match command_family.as_str() {
                "help" => commands::help::handle_interaction(&ctx, component).await,
                "leaderboard" => {
                    interactions::leaderboard_handler::handle(&ctx, component, app_state).await
                }
                "character" => {
                    interactions::character_handler::handle(&ctx, component, app_state).await
                }
                "stats" => interactions::stats_handler::handle(&ctx, component, app_state).await,
                _ => {}
            }
        }
    }

    async fn message(&self, ctx: Context, msg: Message) {
        if msg.guild_id != Some(self.allowed_guild_id) || msg.author.bot {
            return;
        }
        let Some(app_state) = AppState::from_ctx(&ctx).await else {
            return;
        };
        let prefix_string = app_state.prefix.read().await.clone();
        let Some(command_body) = msg.content.strip_prefix(&prefix_string) else {
            return;
        };
        let mut args = command_body.split_whitespace();
        let Some(command_str) = args.next() else {
            return;
        };
        let command = Command::from_str(&command_str.to_ascii_lowercase()).unwrap_or(Command::Unknown);
        let args_vec: Vec<&str> = args.collect();
        match command {
            Command::Ping => commands::ping::run_prefix(&ctx, &msg).await,
            Command::Help => commands::help::run_prefix(&ctx, &msg, args_vec).await,
            Command::Pickup => commands::pickup::run::run_prefix(&ctx, &msg, args_vec).await,
            Command::Profile => commands::profile::run::run_prefix(&ctx, &msg, args_vec).await,
            Command::Rename => commands::profile::run::run_rename_prefix(&ctx, &msg, args_vec).await,
            Command::Character => {
                commands::character::run::run_prefix(&ctx, &msg, args_vec).await
            }
            Command::Allocate => {
                commands::character::run::run_allocate_prefix(&ctx, &msg, args_vec).await
            }
            Command::Activity => commands::activity::run::run_prefix(&ctx, &msg, args_vec).await,
            Command::Stats => {
                commands::activity::run::run_stats_prefix(&ctx, &msg, args_vec).await
            }
            Command::Share => {
                commands::activity::run::run_share_prefix(&ctx, &msg, args_vec).await
            }
            Command::Leaderboard => {
                commands::leaderboard::run::run_prefix(&ctx, &msg, args_vec).await
            }
            Command::Friend => commands::friend::run::run_prefix(&ctx, &msg, args_vec).await,
            Command::Restaurants => {
                commands::restaurants::run::run_prefix(&ctx, &msg, args_vec).await
            }
            Command::Unknown => {}
        }
    }

    async fn ready(&self, ctx: Context, ready: Ready) {
        info!(target: "handler", user = %ready.user.name, "connected and ready");
        let commands_to_register = vec![
            commands::ping::register(),
            commands::help::register(),
            commands::pickup::run::register(),
            commands::profile::run::register(),
            commands::profile::run::register_rename(),
            commands::character::run::register(),
            commands::character::run::register_allocate(),
            commands::activity::run::register(),
            commands::activity::run::register_stats(),
            commands::activity::run::register_share(),
            commands::leaderboard::run::register(),
            commands::friend::run::register(),
            commands::restaurants::run::register(),
        ];
        match self
            .allowed_guild_id
            .set_commands(&ctx.http, commands_to_register)
            .await
        {
            Ok(registered) => {
                info!(target: "handler", count = registered.len(), "registered guild commands")
            }
            Err(e) => error!(target: "handler", error = ?e, "error creating guild commands"),
        }
    }
}
