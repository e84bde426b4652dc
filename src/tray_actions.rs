pub const TRAY_MENU_SHOW_WINDOW: &str = "tray_show_window";
pub const TRAY_MENU_HIDE_WINDOW: &str = "tray_hide_window";
pub const TRAY_MENU_QUIT: &str = "tray_quit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrayMenuAction {
    ShowWindow,
    HideWindow,
    Quit,
}

pub fn action_from_menu_id(menu_id: &str) -> Option<TrayMenuAction> {
    match menu_id {
        TRAY_MENU_SHOW_WINDOW => Some(TrayMenuAction::ShowWindow),
        TRAY_MENU_HIDE_WINDOW => Some(TrayMenuAction::HideWindow),
        TRAY_MENU_QUIT => Some(TrayMenuAction::Quit),
        _ => None,
    }
}
