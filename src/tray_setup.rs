use tauri::{
    menu::{Menu, MenuItem, PredefinedMenuItem},
    tray::{MouseButton, MouseButtonState, TrayIconBuilder, TrayIconEvent},
    AppHandle,
};

use crate::{
    append_desktop_log, tray_actions, tray_menu_handler, window_actions, MAIN_WINDOW_TITLE,
    TRAY_ID,
};

pub fn setup_tray(app_handle: &AppHandle) -> Result<(), String> {
    let show_item = MenuItem::with_id(
        app_handle,
        tray_actions::TRAY_MENU_SHOW_WINDOW,
        "Show Window",
        true,
        None::<&str>,
    )
    .map_err(|error| format!("Failed to create tray show menu item: {error}"))?;
    let hide_item = MenuItem::with_id(
        app_handle,
        tray_actions::TRAY_MENU_HIDE_WINDOW,
        "Hide Window",
        true,
        None::<&str>,
    )
    .map_err(|error| format!("Failed to create tray hide menu item: {error}"))?;
    let quit_item = MenuItem::with_id(
        app_handle,
        tray_actions::TRAY_MENU_QUIT,
        "Quit",
        true,
        None::<&str>,
    )
    .map_err(|error| format!("Failed to create tray quit menu item: {error}"))?;
    let separator = PredefinedMenuItem::separator(app_handle)
        .map_err(|error| format!("Failed to create tray separator menu item: {error}"))?;

    let menu = Menu::with_items(app_handle, &[&show_item, &hide_item, &separator, &quit_item])
        .map_err(|error| format!("Failed to build tray menu: {error}"))?;

    let mut tray_builder = TrayIconBuilder::with_id(TRAY_ID)
        .menu(&menu)
        .tooltip(MAIN_WINDOW_TITLE)
        .show_menu_on_left_click(false)
        .on_menu_event(|app, event| {
            tray_menu_handler::handle_tray_menu_event(app, event.id().as_ref())
        })
        .on_tray_icon_event(|tray, event| {
            if let TrayIconEvent::Click {
                button: MouseButton::Left,
                button_state: MouseButtonState::Up,
                ..
            } = event
            {
                window_actions::toggle_main_window(tray.app_handle(), append_desktop_log);
            }
        });

    match app_handle.default_window_icon() {
        Some(icon) => tray_builder = tray_builder.icon(icon.clone()),
        None => append_desktop_log("no default window icon, tray icon will be blank"),
    }

    #[cfg(target_os = "macos")]
    let tray_builder = tray_builder.icon_as_template(true);

    tray_builder
        .build(app_handle)
        .map_err(|error| format!("Failed to create tray icon: {error}"))?;
    Ok(())
}
