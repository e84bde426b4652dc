use tauri::RunEvent;

use crate::{
    append_desktop_log, append_startup_log, exit_events, main_window, shell_config::ShellConfig,
    tray_setup, ui_dispatch, window_actions, ShellState, DESKTOP_LOG_FILE,
};

pub(crate) fn run() {
    let config = ShellConfig::from_env();

    append_startup_log("desktop process starting");
    append_startup_log(&format!(
        "desktop log path: {}",
        crate::logging::resolve_desktop_log_path(
            crate::runtime_paths::default_packaged_root_dir(),
            DESKTOP_LOG_FILE,
        )
        .display()
    ));
    append_startup_log(&format!("shell config: {config:?}"));

    tauri::Builder::default()
        .plugin(tauri_plugin_single_instance::init(|app_handle, argv, _cwd| {
            append_desktop_log(&format!(
                "second instance launched with {} args, activating main window",
                argv.len()
            ));
            if let Err(error) = ui_dispatch::run_on_main_thread_dispatch(
                app_handle,
                "activate main window for second instance",
                |main_app| window_actions::show_main_window(main_app, append_desktop_log),
            ) {
                append_desktop_log(&error);
            }
        }))
        .plugin(tauri_plugin_dialog::init())
        .manage(ShellState::new(config))
        .setup(|app| {
            let app_handle = app.handle().clone();
            if let Err(error) = tray_setup::setup_tray(&app_handle) {
                append_startup_log(&format!("failed to initialize tray: {error}"));
            }

            main_window::activate_main_window(&app_handle, append_startup_log);
            Ok(())
        })
        .build(tauri::generate_context!())
        .expect("error while building tauri application")
        .run(|app_handle, event| match event {
            RunEvent::ExitRequested { .. } => {
                exit_events::handle_exit_requested(app_handle);
            }
            RunEvent::Exit => {
                exit_events::handle_exit_event(app_handle);
            }
            #[cfg(target_os = "macos")]
            RunEvent::Reopen { .. } => {
                window_actions::show_main_window(app_handle, append_desktop_log);
            }
            _ => {}
        });
}
