//! Button builders shared by every view, so labels pad and style the same way.
use crate::ui::style::{pad_narrow, pad_primary, pad_std};
use serenity::builder::CreateButton;
use serenity::model::application::ButtonStyle;

pub struct Btn;
impl Btn {
    pub fn primary(id: &str, label: &str) -> CreateButton {
        CreateButton::new(id)
            .label(pad_primary(label))
            .style(ButtonStyle::Primary)
    }
    pub fn secondary(id: &str, label: &str) -> CreateButton {
        CreateButton::new(id)
            .label(pad_std(label))
            .style(ButtonStyle::Secondary)
    }
    pub fn narrow(id: &str, label: &str) -> CreateButton {
        CreateButton::new(id)
            .label(pad_narrow(label))
            .style(ButtonStyle::Secondary)
    }
    /// Tab in a switcher row, highlighted when it is the current view.
    /// Pressing the active tab again re-renders it.
    pub fn tab(id: &str, label: &str, active: bool) -> CreateButton {
        if active {
            Self::primary(id, label)
        } else {
            Self::secondary(id, label)
        }
    }
}
