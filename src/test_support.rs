//! In-memory stand-ins for the host window, picker and event channels.

use std::{
    path::PathBuf,
    sync::{Arc, Mutex},
};

use serde_json::Value;

use crate::{
    container_events::EventForwarder,
    dialog_relay::{DialogResponder, FilePicker, PickCallback},
    window_lifecycle::{WindowRegistry, WindowSurface},
    DialogKind, OpenDialogOutcome,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FakeWindowState {
    pub(crate) visible: bool,
    pub(crate) minimized: bool,
    pub(crate) focused: bool,
}

impl FakeWindowState {
    pub(crate) fn hidden() -> Self {
        Self {
            visible: false,
            minimized: false,
            focused: false,
        }
    }
}

#[derive(Debug)]
struct FakeWindowInner {
    state: FakeWindowState,
    show_calls: usize,
    unminimize_calls: usize,
    show_error: Option<String>,
}

#[derive(Debug, Clone)]
pub(crate) struct FakeWindow {
    inner: Arc<Mutex<FakeWindowInner>>,
}

impl FakeWindow {
    fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(FakeWindowInner {
                state: FakeWindowState::hidden(),
                show_calls: 0,
                unminimize_calls: 0,
                show_error: None,
            })),
        }
    }

    fn with<T>(&self, f: impl FnOnce(&mut FakeWindowInner) -> T) -> T {
        let mut guard = self.inner.lock().expect("fake window lock");
        f(&mut guard)
    }

    pub(crate) fn state(&self) -> FakeWindowState {
        self.with(|inner| inner.state)
    }

    pub(crate) fn focus_now(&self) {
        self.with(|inner| inner.state.focused = true);
    }

    pub(crate) fn blur(&self) {
        self.with(|inner| inner.state.focused = false);
    }

    pub(crate) fn fail_show_with(&self, error: &str) {
        self.with(|inner| inner.show_error = Some(error.to_string()));
    }

    pub(crate) fn show_calls(&self) -> usize {
        self.with(|inner| inner.show_calls)
    }

    pub(crate) fn unminimize_calls(&self) -> usize {
        self.with(|inner| inner.unminimize_calls)
    }
}

impl WindowSurface for FakeWindow {
    fn is_minimized(&self) -> Result<bool, String> {
        Ok(self.state().minimized)
    }

    fn is_visible(&self) -> Result<bool, String> {
        Ok(self.state().visible)
    }

    fn show(&self) -> Result<(), String> {
        self.with(|inner| {
            if let Some(error) = inner.show_error.clone() {
                return Err(error);
            }
            inner.show_calls += 1;
            inner.state.visible = true;
            Ok(())
        })
    }

    fn hide(&self) -> Result<(), String> {
        self.with(|inner| {
            inner.state.visible = false;
            inner.state.focused = false;
        });
        Ok(())
    }

    fn minimize(&self) -> Result<(), String> {
        self.with(|inner| {
            inner.state.minimized = true;
            inner.state.focused = false;
        });
        Ok(())
    }

    fn unminimize(&self) -> Result<(), String> {
        self.with(|inner| {
            inner.unminimize_calls += 1;
            inner.state.minimized = false;
        });
        Ok(())
    }

    fn set_focus(&self) -> Result<(), String> {
        self.with(|inner| inner.state.focused = true);
        Ok(())
    }
}

#[derive(Debug, Default)]
pub(crate) struct FakeRegistry {
    live: Mutex<Option<FakeWindow>>,
    constructed: Mutex<usize>,
    construct_error: Option<String>,
}

impl FakeRegistry {
    pub(crate) fn failing(error: &str) -> Self {
        Self {
            construct_error: Some(error.to_string()),
            ..Self::default()
        }
    }

    pub(crate) fn constructed_count(&self) -> usize {
        *self.constructed.lock().expect("constructed lock")
    }

    pub(crate) fn live_count(&self) -> usize {
        usize::from(self.live.lock().expect("live lock").is_some())
    }

    pub(crate) fn destroy_live(&self) {
        self.live.lock().expect("live lock").take();
    }
}

impl WindowRegistry for FakeRegistry {
    type Window = FakeWindow;

    fn find_live(&self) -> Option<FakeWindow> {
        self.live.lock().expect("live lock").clone()
    }

    fn construct(&self) -> Result<FakeWindow, String> {
        if let Some(error) = &self.construct_error {
            return Err(error.clone());
        }
        let window = FakeWindow::new();
        *self.live.lock().expect("live lock") = Some(window.clone());
        *self.constructed.lock().expect("constructed lock") += 1;
        Ok(window)
    }
}

pub(crate) struct PendingPick {
    pub(crate) kind: DialogKind,
    pub(crate) prompt: String,
    callback: PickCallback,
}

impl PendingPick {
    pub(crate) fn complete(self, result: Result<Option<PathBuf>, String>) {
        (self.callback)(result);
    }
}

/// Holds every pick until the test completes it, in any order.
#[derive(Default)]
pub(crate) struct DeferredPicker {
    pending: Mutex<Vec<PendingPick>>,
}

impl DeferredPicker {
    pub(crate) fn take_pending(&self) -> Vec<PendingPick> {
        std::mem::take(&mut *self.pending.lock().expect("pending lock"))
    }
}

impl FilePicker for DeferredPicker {
    fn pick(&self, kind: DialogKind, prompt: &str, on_done: PickCallback) {
        self.pending.lock().expect("pending lock").push(PendingPick {
            kind,
            prompt: prompt.to_string(),
            callback: on_done,
        });
    }
}

#[derive(Debug, Clone, Default)]
pub(crate) struct RecordingResponder {
    responses: Arc<Mutex<Vec<(String, OpenDialogOutcome)>>>,
    fail_with: Option<String>,
}

impl RecordingResponder {
    pub(crate) fn failing(error: &str) -> Self {
        Self {
            fail_with: Some(error.to_string()),
            ..Self::default()
        }
    }

    pub(crate) fn responses(&self) -> Vec<(String, OpenDialogOutcome)> {
        self.responses.lock().expect("responses lock").clone()
    }
}

impl DialogResponder for RecordingResponder {
    fn respond(&self, dialog_id: &str, outcome: &OpenDialogOutcome) -> Result<(), String> {
        if let Some(error) = &self.fail_with {
            return Err(error.clone());
        }
        self.responses
            .lock()
            .expect("responses lock")
            .push((dialog_id.to_string(), outcome.clone()));
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub(crate) struct RecordingForwarder {
    events: Arc<Mutex<Vec<(String, Value)>>>,
}

impl RecordingForwarder {
    pub(crate) fn events(&self) -> Vec<(String, Value)> {
        self.events.lock().expect("events lock").clone()
    }
}

impl EventForwarder for RecordingForwarder {
    fn forward(&self, event: &str, payload: Value) -> Result<(), String> {
        self.events
            .lock()
            .expect("events lock")
            .push((event.to_string(), payload));
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub(crate) struct LogCollector {
    lines: Arc<Mutex<Vec<String>>>,
}

impl LogCollector {
    pub(crate) fn sink(&self) -> impl Fn(&str) + Clone + Send + 'static {
        let lines = Arc::clone(&self.lines);
        move |message: &str| {
            lines
                .lock()
                .expect("log lines lock")
                .push(message.to_string())
        }
    }

    pub(crate) fn lines(&self) -> Vec<String> {
        self.lines.lock().expect("log lines lock").clone()
    }
}
