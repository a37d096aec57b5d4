//! Character sheet embed and its allocation buttons.

use crate::database::models::Character;
use crate::interactions::ids::{CHARACTER_ADD_ATTACK, CHARACTER_ADD_DEFENSE, CHARACTER_REFRESH};
use crate::ui::buttons::Btn;
use crate::ui::style::{COLOR_CHARACTER, EMOJI_ATTACK, EMOJI_DEFENSE};
use serenity::builder::{CreateActionRow, CreateEmbed, CreateEmbedFooter};

pub fn create_character_embed(character: &Character, notice: Option<&str>) -> CreateEmbed {
    let skills = if character.skills.is_empty() {
        "_No skills yet._".to_string()
    } else {
        character
            .skills
            .iter()
            .map(|s| format!("**{}**: {}", s.name, s.description))
            .collect::<Vec<_>>()
            .join("\n")
    };

    let mut embed = CreateEmbed::new()
        .title(format!("🧸 {}", character.name))
        .thumbnail(&character.model_url)
        .color(COLOR_CHARACTER)
        .field(format!("{EMOJI_ATTACK} Attack"), format!("`{}`", character.attack), true)
        .field(format!("{EMOJI_DEFENSE} Defense"), format!("`{}`", character.defense), true)
        .field(
            "Unspent Points",
            format!("`{}`", character.unspent_stat_points),
            true,
        )
        .field("Skills", skills, false);
    if let Some(text) = notice {
        embed = embed.description(text);
    }
    if character.unspent_stat_points == 0 {
        embed = embed.footer(CreateEmbedFooter::new(
            "Level up by logging pickups to earn more stat points.",
        ));
    }
    embed
}

/// Allocation buttons are disabled once the pool is empty.
pub fn create_character_buttons(character: &Character) -> CreateActionRow {
    let empty = character.unspent_stat_points == 0;
    CreateActionRow::Buttons(vec![
        Btn::primary(CHARACTER_ADD_ATTACK, &format!("{EMOJI_ATTACK} +1 Attack")).disabled(empty),
        Btn::primary(CHARACTER_ADD_DEFENSE, &format!("{EMOJI_DEFENSE} +1 Defense")).disabled(empty),
        Btn::narrow(CHARACTER_REFRESH, "Refresh"),
    ])
}
