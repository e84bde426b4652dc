use tauri::{
    webview::PageLoadEvent, AppHandle, Listener, Manager, Runtime, WebviewWindow,
    WebviewWindowBuilder, WindowEvent,
};

use crate::{
    append_desktop_log, append_dialog_log, append_startup_log, container_events, content_source,
    dialog_relay,
    window_actions,
    window_chrome::{self, ChromeStyle, Platform},
    window_lifecycle::{self, PhaseEvent, WindowRegistry, WindowSurface},
    ShellState, MAIN_WINDOW_HEIGHT, MAIN_WINDOW_LABEL, MAIN_WINDOW_MIN_HEIGHT,
    MAIN_WINDOW_MIN_WIDTH, MAIN_WINDOW_TITLE, MAIN_WINDOW_WIDTH,
};

impl<R: Runtime> WindowSurface for WebviewWindow<R> {
    fn is_minimized(&self) -> Result<bool, String> {
        WebviewWindow::is_minimized(self).map_err(|error| error.to_string())
    }

    fn is_visible(&self) -> Result<bool, String> {
        WebviewWindow::is_visible(self).map_err(|error| error.to_string())
    }

    fn show(&self) -> Result<(), String> {
        WebviewWindow::show(self).map_err(|error| error.to_string())
    }

    fn hide(&self) -> Result<(), String> {
        WebviewWindow::hide(self).map_err(|error| error.to_string())
    }

    fn minimize(&self) -> Result<(), String> {
        WebviewWindow::minimize(self).map_err(|error| error.to_string())
    }

    fn unminimize(&self) -> Result<(), String> {
        WebviewWindow::unminimize(self).map_err(|error| error.to_string())
    }

    fn set_focus(&self) -> Result<(), String> {
        WebviewWindow::set_focus(self).map_err(|error| error.to_string())
    }
}

pub(crate) struct TauriWindowRegistry<'a> {
    app_handle: &'a AppHandle,
}

impl<'a> TauriWindowRegistry<'a> {
    pub(crate) fn new(app_handle: &'a AppHandle) -> Self {
        Self { app_handle }
    }
}

impl WindowRegistry for TauriWindowRegistry<'_> {
    type Window = WebviewWindow;

    fn find_live(&self) -> Option<WebviewWindow> {
        self.app_handle.get_webview_window(MAIN_WINDOW_LABEL)
    }

    fn construct(&self) -> Result<WebviewWindow, String> {
        construct_main_window(self.app_handle)
    }
}

pub(crate) fn activate_main_window<F>(app_handle: &AppHandle, log: F)
where
    F: Fn(&str),
{
    let state = app_handle.state::<ShellState>();
    if state.is_quitting() {
        log("activate skipped: application is quitting");
        return;
    }
    log(&format!("activating main window (phase {:?})", state.phase()));

    match window_lifecycle::activate(&TauriWindowRegistry::new(app_handle), &log) {
        Ok(activation) => {
            if window_lifecycle::record_activation(state.inner(), &activation) {
                set_dock_visible(app_handle, true, &log);
            } else {
                log("main window constructed, waiting for content to become ready");
            }
        }
        Err(error) => log(&format!("failed to activate main window: {error}")),
    }
}

fn apply_title_bar_chrome<'a, R, M>(
    builder: WebviewWindowBuilder<'a, R, M>,
    chrome: ChromeStyle,
) -> WebviewWindowBuilder<'a, R, M>
where
    R: Runtime,
    M: Manager<R>,
{
    let builder = builder.decorations(chrome.decorations());

    #[cfg(target_os = "macos")]
    if chrome == ChromeStyle::HiddenInset {
        return builder
            .hidden_title(true)
            .title_bar_style(tauri::TitleBarStyle::Overlay);
    }

    builder
}

fn construct_main_window(app_handle: &AppHandle) -> Result<WebviewWindow, String> {
    let state = app_handle.state::<ShellState>();
    state.begin_construction();

    let source = content_source::resolve_content_source(
        tauri::is_dev(),
        state.config.dev_server_url.as_deref(),
        app_handle.config().build.dev_url.as_ref(),
        append_startup_log,
    );
    let chrome =
        window_chrome::chrome_for_platform(Platform::current(), state.config.force_borderless);
    append_startup_log(&format!(
        "constructing main window from {} with {:?} chrome",
        source.describe(),
        chrome
    ));

    let builder = WebviewWindowBuilder::new(app_handle, MAIN_WINDOW_LABEL, source.webview_url())
        .title(MAIN_WINDOW_TITLE)
        .inner_size(MAIN_WINDOW_WIDTH, MAIN_WINDOW_HEIGHT)
        .min_inner_size(MAIN_WINDOW_MIN_WIDTH, MAIN_WINDOW_MIN_HEIGHT)
        .visible(false)
        .on_page_load(|window, payload| match payload.event() {
            PageLoadEvent::Started => {
                append_desktop_log(&format!("page-load started: {}", payload.url()));
            }
            PageLoadEvent::Finished => {
                append_desktop_log(&format!("page-load finished: {}", payload.url()));
                reveal_when_ready(&window);
            }
        });

    let window = match apply_title_bar_chrome(builder, chrome).build() {
        Ok(window) => window,
        Err(error) => {
            state.apply_phase_event(PhaseEvent::Quit);
            return Err(format!("Failed to build main window: {error}"));
        }
    };
    state.apply_phase_event(PhaseEvent::Constructed);

    intercept_close_requests(app_handle, &window);

    let mut listener_ids = dialog_relay::register_dialog_relays(&window, append_dialog_log);
    listener_ids.push(container_events::register_container_relay(
        app_handle,
        &window,
        append_desktop_log,
    ));
    state.add_listener_ids(listener_ids);

    if state.config.heartbeat_enabled {
        match container_events::schedule_heartbeat(
            container_events::WindowForwarder::new(window.clone()),
            append_desktop_log,
        ) {
            Ok(task) => state.replace_heartbeat(Some(task)),
            Err(error) => append_startup_log(&error),
        }
    }

    Ok(window)
}

fn reveal_when_ready(window: &WebviewWindow) {
    let app_handle = window.app_handle();
    let state = app_handle.state::<ShellState>();
    if !window_lifecycle::on_content_ready(state.inner(), window, append_desktop_log) {
        return;
    }
    set_dock_visible(app_handle, true, append_desktop_log);

    #[cfg(debug_assertions)]
    if tauri::is_dev() && state.config.devtools_enabled {
        window.open_devtools();
    }
}

fn intercept_close_requests(app_handle: &AppHandle, window: &WebviewWindow) {
    let close_app = app_handle.clone();
    window.on_window_event(move |event| {
        let WindowEvent::CloseRequested { api, .. } = event else {
            return;
        };
        let state = close_app.state::<ShellState>();
        if state.is_quitting() {
            return;
        }

        api.prevent_close();
        window_actions::handle_close_request(
            &close_app,
            window_chrome::close_action_for_platform(Platform::current()),
            append_desktop_log,
        );
    });
}

#[cfg_attr(not(target_os = "macos"), allow(unused_variables))]
pub(crate) fn set_dock_visible<F>(app_handle: &AppHandle, visible: bool, log: F)
where
    F: Fn(&str),
{
    #[cfg(target_os = "macos")]
    {
        let policy = if visible {
            tauri::ActivationPolicy::Regular
        } else {
            tauri::ActivationPolicy::Accessory
        };
        if let Err(error) = app_handle.set_activation_policy(policy) {
            log(&format!("failed to update dock icon visibility: {error}"));
        }
    }
}

/// The only path that destroys the main window.
pub(crate) fn destroy_main_window<F>(app_handle: &AppHandle, log: F)
where
    F: Fn(&str),
{
    let state = app_handle.state::<ShellState>();
    state.replace_heartbeat(None);
    for listener_id in state.take_listener_ids() {
        app_handle.unlisten(listener_id);
    }

    match app_handle.get_webview_window(MAIN_WINDOW_LABEL) {
        Some(window) => match window.destroy() {
            Ok(()) => log("main window destroyed"),
            Err(error) => log(&format!("failed to destroy main window: {error}")),
        },
        None => log("destroy skipped: main window not found"),
    }
    state.apply_phase_event(PhaseEvent::Quit);
}
