//! Handles all UI and embed creation for the `/profile` command.

use crate::database::models::Profile;
use crate::ui::style::{
    COLOR_PROFILE, EMOJI_ATTACK, EMOJI_CALORIES, EMOJI_CARBON, EMOJI_DEFENSE, EMOJI_MONEY,
    EMOJI_PICKUP, EMOJI_POINTS,
};
use crate::util::{format_thousands, progress_bar};
use serenity::builder::{CreateEmbed, CreateEmbedFooter};

pub fn create_profile_embed(profile: &Profile, avatar_url: Option<String>) -> CreateEmbed {
    let stats = &profile.stats;
    let character = &profile.character;
    let mut embed = CreateEmbed::new()
        .title(format!("{}'s Profile", profile.name))
        .color(COLOR_PROFILE)
        .field(
            format!("Level {}", profile.level),
            format!(
                "{} `{}/{}` EXP",
                progress_bar(profile.experience, profile.experience_to_next_level, 12),
                profile.experience,
                profile.experience_to_next_level
            ),
            false,
        )
        .field(
            format!("{EMOJI_PICKUP} Pickups"),
            format!("`{}`", stats.total_pickups),
            true,
        )
        .field(
            format!("{EMOJI_POINTS} Score"),
            format!("`{}`", format_thousands(profile.live_score())),
            true,
        )
        .field("\u{200B}", "\u{200B}", true) // Spacer
        .field(
            format!("{EMOJI_CALORIES} Calories Burned"),
            format!("`{}` kcal", format_thousands(stats.total_calories_burned)),
            true,
        )
        .field(
            format!("{EMOJI_MONEY} Money Saved"),
            format!("`{}` won", format_thousands(stats.total_money_saved)),
            true,
        )
        .field(
            format!("{EMOJI_CARBON} Carbon Reduced"),
            format!("`{:.2}` kg", stats.total_carbon_reduced_kg),
            true,
        )
        .field(
            format!("🧸 {}", character.name),
            format!(
                "{EMOJI_ATTACK} `{}`  {EMOJI_DEFENSE} `{}`  Unspent: `{}`",
                character.attack, character.defense, character.unspent_stat_points
            ),
            false,
        );
    if let Some(url) = avatar_url {
        embed = embed.thumbnail(url);
    }
    if character.unspent_stat_points > 0 {
        embed = embed.footer(CreateEmbedFooter::new(
            "You have stat points to spend. Open /character to allocate them.",
        ));
    }
    embed
}

pub fn create_rename_embed(profile: &Profile) -> CreateEmbed {
    CreateEmbed::new()
        .title("Name Updated")
        .description(format!("You'll now appear as **{}** on leaderboards.", profile.name))
        .color(COLOR_PROFILE)
}
