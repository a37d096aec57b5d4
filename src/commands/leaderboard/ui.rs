//! Handles the UI creation for the `/leaderboard` command.

use crate::constants::LEADERBOARD_LIMIT;
use crate::interactions::ids::leaderboard_id;
use crate::progression::ranking::Cohort;
use crate::services::ranking::Leaderboard;
use crate::ui::buttons::Btn;
use crate::ui::style::COLOR_RANKING;
use crate::util::format_thousands;
use serenity::builder::{CreateActionRow, CreateEmbed, CreateEmbedFooter};

fn medal(rank: u32) -> &'static str {
    match rank {
        1 => "🥇",
        2 => "🥈",
        3 => "🥉",
        _ => "🔹",
    }
}

/// Creates the main embed for a projected leaderboard.
/// The viewer's row is bolded; if they fall outside the top slice it is appended.
pub fn create_leaderboard_embed(board: &Leaderboard) -> CreateEmbed {
    let viewer_id = board.viewer.as_ref().map(|v| v.user_id.as_str());
    let mut description_lines: Vec<String> = board
        .top(LEADERBOARD_LIMIT)
        .iter()
        .map(|entry| {
            let name = if Some(entry.user_id.as_str()) == viewer_id {
                format!("**{} (you)**", entry.name)
            } else {
                entry.name.clone()
            };
            format!(
                "{} **{}**. {} - `{} pts`",
                medal(entry.rank),
                entry.rank,
                name,
                format_thousands(entry.score)
            )
        })
        .collect();

    if let Some(viewer) = &board.viewer
        && (viewer.rank as usize) > LEADERBOARD_LIMIT
    {
        description_lines.push("⋯".to_string());
        description_lines.push(format!(
            "🔸 **{}**. **{} (you)** - `{} pts`",
            viewer.rank,
            viewer.name,
            format_thousands(viewer.score)
        ));
    }

    let description = if description_lines.is_empty() {
        "The leaderboard is currently empty.".to_string()
    } else {
        description_lines.join("\n")
    };

    CreateEmbed::new()
        .title(board.cohort.title())
        .description(description)
        .color(COLOR_RANKING)
        .footer(CreateEmbedFooter::new(format!(
            "{} ranked · recomputed on every view",
            board.entries.len()
        )))
}

/// Creates the row of buttons used to switch between cohorts.
pub fn create_leaderboard_buttons(current: Cohort) -> CreateActionRow {
    let buttons = Cohort::ALL
        .iter()
        .map(|&cohort| {
            let label = match cohort {
                Cohort::All => "Neighbourhood",
                Cohort::Friends => "Friends",
                Cohort::Weekly => "Weekly",
            };
            Btn::tab(leaderboard_id(cohort), label, cohort == current)
        })
        .collect();
    CreateActionRow::Buttons(buttons)
}
