//! Central UI style constants and helpers.
pub const COLOR_PROFILE: u32 = 0x10B981; // Emerald
pub const COLOR_CHARACTER: u32 = 0x9B59B6; // Purple
pub const COLOR_ACTIVITY: u32 = 0x3498DB; // Blue
pub const COLOR_RANKING: u32 = 0xFFD700; // Gold
pub const COLOR_CATALOG: u32 = 0xF39C12; // Orange
pub const COLOR_SUCCESS: u32 = 0x2ECC71; // Green
pub const COLOR_ALERT: u32 = 0xE74C3C; // Red

pub const EMOJI_CALORIES: &str = "🔥";
pub const EMOJI_MONEY: &str = "💸";
pub const EMOJI_CARBON: &str = "🌱";
pub const EMOJI_POINTS: &str = "⭐";
pub const EMOJI_PICKUP: &str = "🚶";
pub const EMOJI_ATTACK: &str = "⚔️";
pub const EMOJI_DEFENSE: &str = "🛡️";
pub const EMOJI_REUSABLE: &str = "♻️";

// Standard target widths for padded button labels (approx char counts before Discord trimming)
pub const BTN_W_NARROW: usize = 12;
pub const BTN_W_STD: usize = 16;
pub const BTN_W_PRIMARY: usize = 22;

/// Pads a label to a target visible width using spaces so multi-row action bars align better.
/// Padding is clamped to 2 spaces; Discord collapses longer runs.
pub fn pad_label(label: &str, target_min: usize) -> String {
    let len = label.chars().count();
    if len >= target_min {
        return label.to_string();
    }
    format!("{label}{pad}", pad = " ".repeat((target_min - len).min(2)))
}

pub fn pad_primary(label: &str) -> String {
    pad_label(label, BTN_W_PRIMARY)
}
pub fn pad_std(label: &str) -> String {
    pad_label(label, BTN_W_STD)
}
pub fn pad_narrow(label: &str) -> String {
    pad_label(label, BTN_W_NARROW)
}

use crate::error::CoreError;
use serenity::builder::CreateEmbed;

/// Convenience builder for an alert/error-styled embed.
pub fn error_embed<T: Into<String>, U: Into<String>>(title: T, description: U) -> CreateEmbed {
    CreateEmbed::new()
        .title(title)
        .description(description)
        .color(COLOR_ALERT)
}

/// Alert embed for a rejected core operation, titled by error kind.
pub fn core_error_embed(err: impl Into<CoreError>) -> CreateEmbed {
    let err = err.into();
    let title = match &err {
        CoreError::Validation(_) => "Invalid Input",
        CoreError::InsufficientPoints(_) => "Not Enough Points",
        CoreError::Friend(_) => "Couldn't Add Friend",
    };
    error_embed(title, err.to_string())
}
