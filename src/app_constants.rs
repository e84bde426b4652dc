use std::time::Duration;

pub(crate) const MAIN_WINDOW_LABEL: &str = "main";
pub(crate) const MAIN_WINDOW_TITLE: &str = "Container Desktop";
pub(crate) const MAIN_WINDOW_WIDTH: f64 = 1050.0;
pub(crate) const MAIN_WINDOW_HEIGHT: f64 = 600.0;
pub(crate) const MAIN_WINDOW_MIN_WIDTH: f64 = 640.0;
pub(crate) const MAIN_WINDOW_MIN_HEIGHT: f64 = 600.0;
pub(crate) const PRODUCTION_CONTENT_PATH: &str = "index.html";

pub(crate) const CONTAINER_STOPPED_EVENT: &str = "container-stopped-event";
pub(crate) const DIALOG_OPEN_FILE_EVENT: &str = "dialog:openFile";
pub(crate) const DIALOG_OPEN_FOLDER_EVENT: &str = "dialog:openFolder";
pub(crate) const DIALOG_RESPONSE_EVENT: &str = "dialog:open-file-or-folder-response";

pub(crate) const HEARTBEAT_DELAY: Duration = Duration::from_secs(5);
pub(crate) const HEARTBEAT_PLACEHOLDER_ID: &str = "heartbeat-placeholder";

pub(crate) const DEV_SERVER_URL_ENV: &str = "CONTAINER_DESKTOP_DEV_SERVER_URL";
pub(crate) const NATIVE_FRAME_ENV: &str = "CONTAINER_DESKTOP_NATIVE_FRAME";
pub(crate) const DEVTOOLS_ENV: &str = "CONTAINER_DESKTOP_DEVTOOLS";
pub(crate) const HEARTBEAT_ENV: &str = "CONTAINER_DESKTOP_HEARTBEAT";
pub(crate) const ROOT_DIR_ENV: &str = "CONTAINER_DESKTOP_ROOT";

pub(crate) const DESKTOP_LOG_FILE: &str = "desktop.log";
pub(crate) const DESKTOP_LOG_MAX_BYTES: u64 = 5 * 1024 * 1024;
pub(crate) const LOG_BACKUP_COUNT: usize = 5;

pub(crate) const TRAY_ID: &str = "container-desktop-tray";
