use crate::database::models::KnownUser;
use crate::ui::style::COLOR_PROFILE;
use serenity::builder::{CreateEmbed, CreateEmbedFooter};

pub fn create_friend_list_embed(friends: &[KnownUser]) -> CreateEmbed {
    let description = if friends.is_empty() {
        "You haven't added any friends yet.".to_string()
    } else {
        friends
            .iter()
            .map(|f| format!("🤝 {}", f.name))
            .collect::<Vec<_>>()
            .join("\n")
    };
    CreateEmbed::new()
        .title(format!("Friends ({})", friends.len()))
        .description(description)
        .color(COLOR_PROFILE)
        .footer(CreateEmbedFooter::new(
            "Add someone by their nickname with /friend name:<nickname>",
        ))
}

pub fn create_friend_added_embed(message: &str) -> CreateEmbed {
    CreateEmbed::new()
        .title("Friend Added")
        .description(message)
        .color(COLOR_PROFILE)
}
