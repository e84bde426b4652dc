use tauri::{AppHandle, Manager};

use crate::{
    append_desktop_log, append_shutdown_log, tray_actions, window_actions, ShellState,
};

pub fn handle_tray_menu_event(app_handle: &AppHandle, menu_id: &str) {
    match tray_actions::action_from_menu_id(menu_id) {
        Some(tray_actions::TrayMenuAction::ShowWindow) => {
            window_actions::show_main_window(app_handle, append_desktop_log)
        }
        Some(tray_actions::TrayMenuAction::HideWindow) => {
            window_actions::hide_main_window(app_handle, append_desktop_log)
        }
        Some(tray_actions::TrayMenuAction::Quit) => {
            let state = app_handle.state::<ShellState>();
            state.mark_quitting();
            append_shutdown_log("tray quit requested, exiting desktop process");
            app_handle.exit(0);
        }
        None => append_desktop_log(&format!("ignoring unknown tray menu id: {menu_id}")),
    }
}
