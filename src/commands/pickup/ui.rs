//! Embeds for the `/pickup` command.

use crate::database::catalog::find_restaurant;
use crate::database::models::Profile;
use crate::progression::engine::PickupOutcome;
use crate::ui::style::{
    COLOR_SUCCESS, EMOJI_CALORIES, EMOJI_CARBON, EMOJI_MONEY, EMOJI_PICKUP, EMOJI_POINTS,
    EMOJI_REUSABLE,
};
use crate::util::{format_thousands, progress_bar};
use serenity::builder::{CreateEmbed, CreateEmbedFooter};

pub fn create_pickup_embed(outcome: &PickupOutcome, profile: &Profile) -> CreateEmbed {
    let record = &outcome.record;
    let mut description = match find_restaurant(&record.restaurant_name) {
        Some(r) => format!(
            "Picked up from **{}** ({}).",
            r.name,
            r.category.display_name()
        ),
        None => format!("Picked up from **{}**.", record.restaurant_name),
    };
    if record.used_reusable_container {
        description.push_str(&format!("\n{EMOJI_REUSABLE} Reusable container bonus applied."));
    }
    if outcome.level_up.did_level_up() {
        description.push_str(&format!(
            "\n\n🎉 **Level up!** You reached level **{}** and gained **{}** stat point(s). Spend them with `/character`.",
            outcome.level_up.new_level, outcome.level_up.stat_points_granted
        ));
    }

    CreateEmbed::new()
        .title(format!("{EMOJI_PICKUP} Pickup Logged"))
        .description(description)
        .color(COLOR_SUCCESS)
        .field(
            format!("{EMOJI_CALORIES} Calories"),
            format!("`{}` kcal", record.calories_burned),
            true,
        )
        .field(
            format!("{EMOJI_MONEY} Saved"),
            format!("`{}` won", format_thousands(record.money_saved)),
            true,
        )
        .field(
            format!("{EMOJI_CARBON} Carbon"),
            format!("`{:.2}` kg", record.carbon_reduced_kg),
            true,
        )
        .field(
            format!("{EMOJI_POINTS} Points"),
            format!("`+{}` EXP", record.points_earned),
            true,
        )
        .field(
            format!("Level {}", profile.level),
            format!(
                "{} `{}/{}`",
                progress_bar(profile.experience, profile.experience_to_next_level, 10),
                profile.experience,
                profile.experience_to_next_level
            ),
            false,
        )
        .footer(CreateEmbedFooter::new(format!("Activity {}", record.id)))
        .timestamp(record.recorded_at)
}
