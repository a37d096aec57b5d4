//! Embeds for the activity history, stat breakdown and weekly share card.

use crate::database::models::{ActivityRecord, Profile};
use crate::interactions::ids::stats_id;
use crate::progression::summary::{StatDetail, WeeklySummary, stat_breakdown};
use crate::ui::buttons::Btn;
use crate::ui::style::{
    COLOR_ACTIVITY, COLOR_SUCCESS, EMOJI_CALORIES, EMOJI_CARBON, EMOJI_MONEY, EMOJI_REUSABLE,
};
use crate::util::format_thousands;
use serenity::builder::{CreateActionRow, CreateEmbed, CreateEmbedFooter};

const DETAIL_ORDER: [StatDetail; 2] = [StatDetail::CaloriesBurned, StatDetail::MoneySaved];

pub fn create_activity_embed(name: &str, activities: &[ActivityRecord]) -> CreateEmbed {
    let description = if activities.is_empty() {
        "No pickups yet. Log one with `/pickup`!".to_string()
    } else {
        activities
            .iter()
            .map(|a| {
                let reusable = if a.used_reusable_container {
                    format!(" {EMOJI_REUSABLE}")
                } else {
                    String::new()
                };
                format!(
                    "<t:{}:R> **{}**{reusable}\n`+{}` EXP · {EMOJI_CALORIES} {} kcal · {EMOJI_CARBON} {:.2} kg",
                    a.recorded_at.timestamp(),
                    a.restaurant_name,
                    a.points_earned,
                    a.calories_burned,
                    a.carbon_reduced_kg
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    };
    CreateEmbed::new()
        .title(format!("📜 {name}'s Recent Pickups"))
        .description(description)
        .color(COLOR_ACTIVITY)
        .footer(CreateEmbedFooter::new(format!(
            "Showing {} most recent",
            activities.len()
        )))
}

pub fn create_stats_embed(profile: &Profile, activities: &[ActivityRecord], detail: StatDetail) -> CreateEmbed {
    let total = match detail {
        StatDetail::CaloriesBurned => profile.stats.total_calories_burned,
        StatDetail::MoneySaved => profile.stats.total_money_saved,
    };
    let rows = stat_breakdown(activities, detail);
    let description = if rows.is_empty() {
        "Nothing recorded yet.".to_string()
    } else {
        rows.iter()
            .map(|(a, value)| {
                format!(
                    "{} · <t:{}:d> · `{} {}`",
                    a.restaurant_name,
                    a.recorded_at.timestamp(),
                    format_thousands(*value),
                    detail.unit()
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    };
    CreateEmbed::new()
        .title(detail.title())
        .description(description)
        .color(COLOR_ACTIVITY)
        .field(
            "Lifetime Total",
            format!("`{} {}`", format_thousands(total), detail.unit()),
            false,
        )
}

/// Toggle row; the active stat is highlighted.
pub fn create_stats_buttons(current: StatDetail) -> CreateActionRow {
    let buttons = DETAIL_ORDER
        .iter()
        .map(|&detail| {
            let label = match detail {
                StatDetail::CaloriesBurned => format!("{EMOJI_CALORIES} Calories"),
                StatDetail::MoneySaved => format!("{EMOJI_MONEY} Money"),
            };
            Btn::tab(stats_id(detail), &label, detail == current)
        })
        .collect();
    CreateActionRow::Buttons(buttons)
}

pub fn create_share_embed(name: &str, summary: &WeeklySummary) -> CreateEmbed {
    CreateEmbed::new()
        .title(format!("🌏 {name}'s Week in Pickups"))
        .description(format!(
            "Skipped delivery **{}** time(s) in the last 7 days.",
            summary.pickups
        ))
        .color(COLOR_SUCCESS)
        .field(
            format!("{EMOJI_CALORIES} Calories"),
            format!("`{}` kcal", format_thousands(summary.calories_burned)),
            true,
        )
        .field(
            format!("{EMOJI_MONEY} Saved"),
            format!("`{}` won", format_thousands(summary.money_saved)),
            true,
        )
        .field(
            format!("{EMOJI_CARBON} Carbon"),
            format!("`{:.2}` kg", summary.carbon_reduced_kg),
            true,
        )
        .footer(CreateEmbedFooter::new("Walk it, pick it up, level up."))
}
