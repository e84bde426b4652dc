use tauri::AppHandle;

/// Runs `task` on the event loop thread; window construction must happen
/// there on every platform.
pub(crate) fn run_on_main_thread_dispatch<F>(
    app_handle: &AppHandle,
    context: &str,
    task: F,
) -> Result<(), String>
where
    F: FnOnce(&AppHandle) + Send + 'static,
{
    let main_app = app_handle.clone();
    app_handle
        .run_on_main_thread(move || task(&main_app))
        .map_err(|error| format!("Failed to dispatch '{context}' to main thread: {error}"))
}
