#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app_constants;
mod app_runtime;
mod app_types;
mod container_events;
mod content_source;
mod dialog_relay;
mod exit_events;
mod exit_state;
mod logging;
mod main_window;
mod runtime_paths;
mod scheduled_task;
mod shell_config;
mod tray_actions;
mod tray_menu_handler;
mod tray_setup;
mod ui_dispatch;
mod window_actions;
mod window_chrome;
mod window_lifecycle;

#[cfg(test)]
mod test_support;

use std::sync::{Mutex, OnceLock};

pub(crate) use app_constants::*;
pub(crate) use app_types::{DialogKind, DialogRequest, OpenDialogOutcome, ShellState};

static DESKTOP_LOG_WRITE_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

fn main() {
    app_runtime::run();
}

pub(crate) fn append_desktop_log(message: &str) {
    append_desktop_log_with_category(logging::DesktopLogCategory::Runtime, message);
}

pub(crate) fn append_startup_log(message: &str) {
    append_desktop_log_with_category(logging::DesktopLogCategory::Startup, message);
}

pub(crate) fn append_dialog_log(message: &str) {
    append_desktop_log_with_category(logging::DesktopLogCategory::Dialog, message);
}

pub(crate) fn append_shutdown_log(message: &str) {
    append_desktop_log_with_category(logging::DesktopLogCategory::Shutdown, message);
}

fn append_desktop_log_with_category(category: logging::DesktopLogCategory, message: &str) {
    logging::append_desktop_log(
        category,
        message,
        runtime_paths::default_packaged_root_dir(),
        DESKTOP_LOG_FILE,
        DESKTOP_LOG_MAX_BYTES,
        LOG_BACKUP_COUNT,
        &DESKTOP_LOG_WRITE_LOCK,
    )
}
