use tauri::{AppHandle, Manager};

use crate::{
    main_window,
    window_chrome::{CloseAction, Platform},
    window_lifecycle::{self, PhaseEvent, WindowSurface},
    ShellState, MAIN_WINDOW_LABEL,
};

pub fn show_main_window<F>(app_handle: &AppHandle, log: F)
where
    F: Fn(&str),
{
    main_window::activate_main_window(app_handle, log);
}

pub fn hide_main_window<F>(app_handle: &AppHandle, log: F)
where
    F: Fn(&str),
{
    handle_close_request(
        app_handle,
        CloseAction::Hide {
            hide_dock_icon: Platform::current().has_dock(),
        },
        log,
    );
}

pub fn toggle_main_window<F>(app_handle: &AppHandle, log: F)
where
    F: Fn(&str),
{
    let Some(window) = app_handle.get_webview_window(MAIN_WINDOW_LABEL) else {
        show_main_window(app_handle, log);
        return;
    };

    match toggle_decision_for(&window) {
        Ok(ToggleDecision::Hide) => hide_main_window(app_handle, log),
        Ok(ToggleDecision::Show) => show_main_window(app_handle, log),
        Err(error) => log(&format!("failed to toggle main window: {error}")),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ToggleDecision {
    Show,
    Hide,
}

/// A minimized window still reports itself visible; it is restored, not hidden.
pub(crate) fn decide_toggle(visible: bool, minimized: bool) -> ToggleDecision {
    if visible && !minimized {
        ToggleDecision::Hide
    } else {
        ToggleDecision::Show
    }
}

pub(crate) fn toggle_decision_for<W>(window: &W) -> Result<ToggleDecision, String>
where
    W: WindowSurface,
{
    let minimized = window
        .is_minimized()
        .map_err(|error| format!("Failed to read main window minimized state: {error}"))?;
    let visible = window
        .is_visible()
        .map_err(|error| format!("Failed to read main window visibility: {error}"))?;
    Ok(decide_toggle(visible, minimized))
}

pub fn handle_close_request<F>(app_handle: &AppHandle, action: CloseAction, log: F)
where
    F: Fn(&str),
{
    let Some(window) = app_handle.get_webview_window(MAIN_WINDOW_LABEL) else {
        log("close request skipped: main window not found");
        return;
    };

    window_lifecycle::apply_close_action(&window, action, &log);
    if let CloseAction::Hide {
        hide_dock_icon: true,
    } = action
    {
        main_window::set_dock_visible(app_handle, false, &log);
    }
    app_handle
        .state::<ShellState>()
        .apply_phase_event(PhaseEvent::CloseRequested(action));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::FakeRegistry;

    #[test]
    fn decide_toggle_restores_minimized_window() {
        assert_eq!(decide_toggle(true, true), ToggleDecision::Show);
        assert_eq!(decide_toggle(false, true), ToggleDecision::Show);
    }

    #[test]
    fn decide_toggle_hides_only_visible_unminimized_window() {
        assert_eq!(decide_toggle(true, false), ToggleDecision::Hide);
        assert_eq!(decide_toggle(false, false), ToggleDecision::Show);
    }

    #[test]
    fn toggle_decision_for_window_minimized_on_close_is_show() {
        let registry = FakeRegistry::default();
        let window = window_lifecycle::activate(&registry, |_| {})
            .expect("activate")
            .into_window();
        window.show().expect("show");
        assert_eq!(toggle_decision_for(&window), Ok(ToggleDecision::Hide));

        window_lifecycle::apply_close_action(&window, CloseAction::Minimize, |_| {});

        assert!(window.state().visible);
        assert_eq!(toggle_decision_for(&window), Ok(ToggleDecision::Show));
    }
}
