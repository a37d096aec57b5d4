use crate::database::catalog::{Category, Restaurant};
use crate::ui::style::COLOR_CATALOG;
use crate::util::format_thousands;
use serenity::builder::{CreateEmbed, CreateEmbedFooter};

pub fn create_catalog_embed(category: Option<Category>, restaurants: &[&Restaurant]) -> CreateEmbed {
    let title = match category {
        Some(c) => format!("🍱 Restaurants · {}", c.display_name()),
        None => "🍱 Restaurants".to_string(),
    };
    let mut embed = CreateEmbed::new()
        .title(title)
        .color(COLOR_CATALOG)
        .footer(CreateEmbedFooter::new(
            "Walk over, pick up, then log it with /pickup.",
        ));
    if restaurants.is_empty() {
        return embed.description("No restaurants in this category yet.");
    }
    for r in restaurants {
        let menu = r
            .menu
            .iter()
            .map(|m| format!("{} `{}`", m.name, format_thousands(u64::from(m.price))))
            .collect::<Vec<_>>()
            .join(" · ");
        embed = embed.field(
            format!("{} ⭐ {:.1}", r.name, r.rating),
            format!(
                "{} · {} · min `{}` won\n{}",
                r.category.display_name(),
                r.delivery_time,
                format_thousands(u64::from(r.min_order)),
                menu
            ),
            false,
        );
    }
    embed
}
