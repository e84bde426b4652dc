use crate::{window_chrome::CloseAction, ShellState};

/// Host operations the controller needs from a window. Errors are host
/// messages, already formatted for the desktop log.
pub(crate) trait WindowSurface {
    fn is_minimized(&self) -> Result<bool, String>;
    fn is_visible(&self) -> Result<bool, String>;
    fn show(&self) -> Result<(), String>;
    fn hide(&self) -> Result<(), String>;
    fn minimize(&self) -> Result<(), String>;
    fn unminimize(&self) -> Result<(), String>;
    fn set_focus(&self) -> Result<(), String>;
}

/// Owner of the single application window.
pub(crate) trait WindowRegistry {
    type Window: WindowSurface;

    /// Returns the window unless it was never built or has been destroyed.
    fn find_live(&self) -> Option<Self::Window>;
    fn construct(&self) -> Result<Self::Window, String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum WindowPhase {
    Constructing,
    Hidden,
    Visible,
    Minimized,
    Destroyed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PhaseEvent {
    Constructed,
    ReadyToShow,
    CloseRequested(CloseAction),
    Activated,
    Quit,
}

pub(crate) fn transition(phase: WindowPhase, event: PhaseEvent) -> WindowPhase {
    use WindowPhase::*;

    match (phase, event) {
        (_, PhaseEvent::Quit) => Destroyed,
        (Destroyed, PhaseEvent::Activated) => Constructing,
        (Destroyed, _) => Destroyed,
        (Constructing, PhaseEvent::Constructed) => Hidden,
        // Content is not ready yet; the ready handler reveals it.
        (Constructing, _) => Constructing,
        (Hidden, PhaseEvent::ReadyToShow) => Visible,
        (Hidden | Minimized | Visible, PhaseEvent::Activated) => Visible,
        (Visible | Minimized, PhaseEvent::CloseRequested(CloseAction::Minimize)) => Minimized,
        (Visible | Minimized, PhaseEvent::CloseRequested(CloseAction::Hide { .. })) => Hidden,
        (current, _) => current,
    }
}

#[derive(Debug)]
pub(crate) enum Activation<W> {
    /// A fresh window; it stays hidden until its content reports ready.
    Constructed(W),
    Existing(W),
}

impl<W> Activation<W> {
    #[cfg(test)]
    pub(crate) fn into_window(self) -> W {
        match self {
            Self::Constructed(window) | Self::Existing(window) => window,
        }
    }
}

/// Restores, shows and focuses `window`. Host failures are logged and the
/// remaining steps still run.
pub(crate) fn bring_to_front<W, F>(window: &W, log: F)
where
    W: WindowSurface,
    F: Fn(&str),
{
    match window.is_minimized() {
        Ok(true) => {
            if let Err(error) = window.unminimize() {
                log(&format!("failed to restore minimized window: {error}"));
            }
        }
        Ok(false) => {}
        Err(error) => log(&format!("failed to read window minimized state: {error}")),
    }

    match window.is_visible() {
        Ok(true) => {}
        Ok(false) => {
            if let Err(error) = window.show() {
                log(&format!("failed to show window: {error}"));
            }
        }
        Err(error) => log(&format!("failed to read window visibility: {error}")),
    }

    if let Err(error) = window.set_focus() {
        log(&format!("failed to focus window: {error}"));
    }
}

pub(crate) fn activate<R, F>(registry: &R, log: F) -> Result<Activation<R::Window>, String>
where
    R: WindowRegistry,
    F: Fn(&str),
{
    if let Some(window) = registry.find_live() {
        bring_to_front(&window, &log);
        return Ok(Activation::Existing(window));
    }

    log("no live main window, constructing one");
    let window = registry.construct()?;
    Ok(Activation::Constructed(window))
}

/// Records an activation on `state`. Returns true when an existing window
/// came back to the front, which also brings back the dock icon.
pub(crate) fn record_activation<W>(state: &ShellState, activation: &Activation<W>) -> bool {
    match activation {
        Activation::Existing(_) => {
            state.apply_phase_event(PhaseEvent::Activated);
            true
        }
        Activation::Constructed(_) => false,
    }
}

/// Reveals `window` on the first ready signal after its construction.
/// Reloads and signals arriving during shutdown leave it untouched.
pub(crate) fn on_content_ready<W, F>(state: &ShellState, window: &W, log: F) -> bool
where
    W: WindowSurface,
    F: Fn(&str),
{
    if !state.take_ready_signal() {
        log("content reloaded, main window visibility left as is");
        return false;
    }
    if state.is_quitting() {
        log("content ready while quitting, main window stays hidden");
        return false;
    }

    state.apply_phase_event(PhaseEvent::ReadyToShow);
    bring_to_front(window, &log);
    true
}

pub(crate) fn apply_close_action<W, F>(window: &W, action: CloseAction, log: F)
where
    W: WindowSurface,
    F: Fn(&str),
{
    let result = match action {
        CloseAction::Minimize => window.minimize(),
        CloseAction::Hide { .. } => window.hide(),
    };
    if let Err(error) = result {
        log(&format!("failed to apply close action {action:?}: {error}"));
    }
}
