//! This module implements the interactive help command.
//!
//! Features:
//! - A categorized main menu for easy browsing.
//! - An interactive dropdown menu for both slash and prefix commands.
//! - A detailed view for specific commands.

use crate::AppState;
use crate::interactions::ids::HELP_SELECT_COMMAND;
use crate::ui::style::COLOR_ALERT;
use serenity::all::ComponentInteractionDataKind;
use serenity::builder::{
    CreateActionRow, CreateCommand, CreateCommandOption, CreateEmbed, CreateEmbedFooter,
    CreateInteractionResponse, CreateInteractionResponseMessage, CreateMessage, CreateSelectMenu,
    CreateSelectMenuKind, CreateSelectMenuOption, EditInteractionResponse,
};
use serenity::model::application::{CommandInteraction, CommandOptionType, ComponentInteraction};
use serenity::model::channel::Message;
use serenity::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq)]
enum CommandCategory {
    General,
    Pickups,
    Character,
    Social,
}

impl CommandCategory {
    const ALL: [CommandCategory; 4] = [
        CommandCategory::Pickups,
        CommandCategory::Character,
        CommandCategory::Social,
        CommandCategory::General,
    ];

    fn name(&self) -> &'static str {
        match self {
            Self::General => "General",
            Self::Pickups => "Pickups & Stats",
            Self::Character => "Character",
            Self::Social => "Friends & Rankings",
        }
    }
    fn emoji(&self) -> &'static str {
        match self {
            Self::General => "🔧",
            Self::Pickups => "🚶",
            Self::Character => "🧸",
            Self::Social => "🏆",
        }
    }
}

struct CommandInfo {
    name: &'static str,
    description: &'static str,
    usage: &'static [&'static str],
    details: &'static str,
    category: CommandCategory,
}

const COMMANDS: &[CommandInfo] = &[
    // Pickups
    CommandInfo {
        name: "pickup",
        description: "Log a food pickup you walked to.",
        usage: &["pickup <distance_km> <order_value> [--reusable] <restaurant>"],
        details: "Every pickup earns calories burned (30 kcal/km), a flat 3,000 won delivery fee saved and carbon reduced (0.15 kg/km, +0.05 kg with a reusable container). Points go to your EXP bar; each level up grants 3 stat points.",
        category: CommandCategory::Pickups,
    },
    CommandInfo {
        name: "activity",
        description: "Show your most recent pickups.",
        usage: &["activity", "history"],
        details: "Lists your last 20 pickups, newest first, with the EXP and impact each one earned.",
        category: CommandCategory::Pickups,
    },
    CommandInfo {
        name: "stats",
        description: "Break down calories or money saved per pickup.",
        usage: &["stats [calories|money]"],
        details: "Shows the lifetime total for a stat and which pickups contributed to it. Use the buttons to switch stats.",
        category: CommandCategory::Pickups,
    },
    CommandInfo {
        name: "share",
        description: "Post your weekly summary card.",
        usage: &["share"],
        details: "Sums the calories, money and carbon of your pickups from the last 7 days into a card everyone in the channel can see.",
        category: CommandCategory::Pickups,
    },
    CommandInfo {
        name: "restaurants",
        description: "Browse restaurants you can pick up from.",
        usage: &["restaurants [category]", "shops [category]"],
        details: "Lists the catalog with rating, wait time, minimum order and menu. **Categories:** `chicken`, `pizza`, `korean`, `snacks`, `cafe`, `japanese`, `western`.",
        category: CommandCategory::Pickups,
    },
    // Character
    CommandInfo {
        name: "profile",
        description: "Displays your or another player's profile.",
        usage: &["profile", "p", "profile @user"],
        details: "Shows level, EXP progress, lifetime pickup stats, score and a summary of your character.",
        category: CommandCategory::Character,
    },
    CommandInfo {
        name: "character",
        description: "View your character and spend stat points.",
        usage: &["character", "char"],
        details: "Shows your character's attack, defense, skills and unspent points. The buttons spend one point at a time.",
        category: CommandCategory::Character,
    },
    CommandInfo {
        name: "allocate",
        description: "Spend several stat points at once.",
        usage: &["allocate <attack> [defense]", "alloc <attack> [defense]"],
        details: "Moves points from your unspent pool into attack and defense. Nothing changes if you ask for more points than you have.",
        category: CommandCategory::Character,
    },
    CommandInfo {
        name: "rename",
        description: "Change the name shown on leaderboards.",
        usage: &["rename <new name>"],
        details: "Names are trimmed and must be 1 to 32 characters long. Friends find you by this name.",
        category: CommandCategory::Character,
    },
    // Social
    CommandInfo {
        name: "leaderboard",
        description: "View the pickup rankings.",
        usage: &["leaderboard [all|friends|weekly]", "lb [all|friends|weekly]"],
        details: "Ranks the neighbourhood, your friends or this week's players by score. Rankings are recomputed every time you open or switch them.",
        category: CommandCategory::Social,
    },
    CommandInfo {
        name: "friend",
        description: "Add a friend by nickname, or list your friends.",
        usage: &["friend", "friend <nickname>", "friend add <nickname>"],
        details: "Adds the player with that exact nickname to your friends ranking. You can't add yourself or the same friend twice.",
        category: CommandCategory::Social,
    },
    // General
    CommandInfo {
        name: "ping",
        description: "Checks the bot's latency.",
        usage: &["ping"],
        details: "Pings the Discord gateway to check the bot's heartbeat latency.",
        category: CommandCategory::General,
    },
    CommandInfo {
        name: "help",
        description: "Shows this help menu.",
        usage: &["help", "h", "help <command>"],
        details: "Displays a list of all available commands or detailed information about a specific command.",
        category: CommandCategory::General,
    },
];

/// All command names listed in the help menu.
pub fn all_command_names() -> Vec<&'static str> {
    COMMANDS.iter().map(|c| c.name).collect()
}

pub fn register() -> CreateCommand {
    CreateCommand::new("help")
        .description("Shows information about commands")
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::String,
                "command",
                "The specific command you want help with",
            )
            .required(false),
        )
}

fn create_command_select_menu() -> CreateActionRow {
    let options = COMMANDS
        .iter()
        .map(|cmd| {
            let mut opt =
                CreateSelectMenuOption::new(cmd.name, cmd.name).description(cmd.description);
            if let Some(em) = cmd.category.emoji().chars().next() {
                opt = opt.emoji(em);
            }
            opt
        })
        .collect();
    let select_menu = CreateSelectMenu::new(
        HELP_SELECT_COMMAND,
        CreateSelectMenuKind::String { options },
    )
    .placeholder("Select a command for more details...");
    CreateActionRow::SelectMenu(select_menu)
}

async fn create_help_embed(ctx: &Context, command_name_opt: Option<&str>) -> CreateEmbed {
    let Some(app_state) = AppState::from_ctx(ctx).await else {
        return CreateEmbed::new()
            .title("Help (limited)")
            .description("Internal state unavailable.");
    };
    let prefix = app_state.prefix.read().await.clone();
    let mut embed = CreateEmbed::new()
        .footer(CreateEmbedFooter::new(format!("Current Prefix: {prefix}")))
        .color(0x5865F2);

    match command_name_opt {
        Some(name) => {
            if let Some(cmd) = COMMANDS.iter().find(|c| c.name.eq_ignore_ascii_case(name)) {
                let usage_string = cmd
                    .usage
                    .iter()
                    .map(|u| format!("`{prefix}{u}`"))
                    .collect::<Vec<_>>()
                    .join("\n");
                embed = embed
                    .title(format!("{} Command: {}", cmd.category.emoji(), cmd.name))
                    .field("Description", cmd.description, false)
                    .field("Usage", usage_string, false)
                    .field("Details", cmd.details, false);
            } else {
                embed = embed
                    .title("Command Not Found")
                    .description(format!("Sorry, I don't know a command called `{name}`."))
                    .color(COLOR_ALERT);
            }
        }
        None => {
            embed = embed.title("Help Menu").description(format!(
                "Walk to pick up your food, earn EXP and climb the rankings. For more details, use `{prefix}help <command>` or select an option from the dropdown below."
            ));
            for category in CommandCategory::ALL {
                let command_list = get_commands_in_category(category);
                if !command_list.is_empty() {
                    embed = embed.field(
                        format!("{} {}", category.emoji(), category.name()),
                        command_list,
                        false,
                    );
                }
            }
        }
    }
    embed
}

fn get_commands_in_category(category: CommandCategory) -> String {
    COMMANDS
        .iter()
        .filter(|c| c.category == category)
        .map(|c| format!("`{}`", c.name))
        .collect::<Vec<_>>()
        .join(" ")
}

pub async fn run_slash(ctx: &Context, interaction: &CommandInteraction) {
    let command_name = interaction
        .data
        .options
        .first()
        .and_then(|opt| opt.value.as_str());
    let embed = create_help_embed(ctx, command_name).await;
    let mut builder = CreateInteractionResponseMessage::new().embed(embed);
    if command_name.is_none() {
        builder = builder.components(vec![create_command_select_menu()]);
    }
    let response = CreateInteractionResponse::Message(builder);
    interaction.create_response(&ctx.http, response).await.ok();
}

pub async fn handle_interaction(ctx: &Context, interaction: &mut ComponentInteraction) {
    let selected_command = match &interaction.data.kind {
        ComponentInteractionDataKind::StringSelect { values } => match values.first() {
            Some(v) => v.clone(),
            None => return,
        },
        _ => return,
    };
    let embed = create_help_embed(ctx, Some(&selected_command)).await;
    interaction.defer(&ctx.http).await.ok();
    let builder = EditInteractionResponse::new()
        .embed(embed)
        .components(vec![]);
    interaction.edit_response(&ctx.http, builder).await.ok();
}

pub async fn run_prefix(ctx: &Context, msg: &Message, args: Vec<&str>) {
    let command_name = args.first().copied();
    let embed = create_help_embed(ctx, command_name).await;
    let mut builder = CreateMessage::new().embed(embed).reference_message(msg);
    if command_name.is_none() {
        builder = builder.components(vec![create_command_select_menu()]);
    }
    msg.channel_id.send_message(&ctx.http, builder).await.ok();
}
