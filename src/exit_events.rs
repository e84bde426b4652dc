use tauri::{AppHandle, Manager};

use crate::{append_shutdown_log, main_window, ShellState};

/// Quitting is the one moment the main window is really destroyed; close
/// requests after this point are let through.
pub(crate) fn handle_exit_requested(app_handle: &AppHandle) {
    let state = app_handle.state::<ShellState>();
    if !state.try_begin_exit_cleanup() {
        append_shutdown_log("exit requested again, cleanup already running");
        return;
    }

    append_shutdown_log("exit requested, tearing down main window");
    main_window::destroy_main_window(app_handle, append_shutdown_log);
}

pub(crate) fn handle_exit_event(app_handle: &AppHandle) {
    let state = app_handle.state::<ShellState>();
    if state.try_begin_exit_cleanup() {
        main_window::destroy_main_window(app_handle, append_shutdown_log);
    }
    append_shutdown_log("desktop process exiting");
}
