use ratatui::style::Color;

pub const INPUT_TITLE: &str = "Search For Character";
pub const LIST_TITLE: &str = "Characters";
pub const FOCUS_COLOR: Color = Color::LightGreen;
pub const IDLE_BORDER_COLOR: Color = Color::DarkGray;
pub const MUTED_COLOR: Color = Color::Gray;
pub const CHIP_COLOR: Color = Color::Cyan;
pub const TOAST_COLOR: Color = Color::LightRed;
pub const SKELETON_TEXT: &str = "░░░░░░░░░░░░░░░░";
pub const SKELETON_SHORT_TEXT: &str = "░░░░░░";
pub const FOOTER_HELP: &str =
    "type to search · ↑/↓ move · enter/space toggle · bksp drops last chip · tab focus · ctrl+s confirm · esc quit";
