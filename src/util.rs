//! Misc small utilities shared across commands.
use serenity::model::id::UserId;
use serenity::model::user::User;

/// Store key for a Discord user.
pub fn user_key(id: UserId) -> String {
    id.get().to_string()
}

/// Name shown for a user on first contact: global display name, else username.
pub fn display_name(user: &User) -> &str {
    user.global_name.as_deref().unwrap_or(&user.name)
}

/// Text progress bar, e.g. `▰▰▰▱▱▱▱▱▱▱`.
pub fn progress_bar(current: u64, total: u64, width: usize) -> String {
    let filled = if total == 0 {
        0
    } else {
        ((current.min(total) as f64 / total as f64) * width as f64).floor() as usize
    };
    format!("{}{}", "▰".repeat(filled), "▱".repeat(width - filled))
}

/// Formats an amount with thousands separators: `42000` -> `42,000`.
pub fn format_thousands(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
