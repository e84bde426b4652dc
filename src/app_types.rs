use serde::{Deserialize, Serialize};
use std::{
    path::Path,
    sync::{
        atomic::{AtomicBool, Ordering},
        Mutex, MutexGuard,
    },
};
use tauri::EventId;

use crate::{
    append_desktop_log,
    exit_state::ExitStateMachine,
    scheduled_task::ScheduledTask,
    shell_config::ShellConfig,
    window_lifecycle::{self, PhaseEvent, WindowPhase},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DialogKind {
    File,
    Folder,
}

impl DialogKind {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Self::File => "file",
            Self::Folder => "folder",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct DialogRequest {
    pub(crate) dialog_id: String,
    #[serde(default)]
    pub(crate) message: String,
}

/// Second element of the `[dialogId, outcome]` response payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct OpenDialogOutcome {
    pub(crate) canceled: bool,
    pub(crate) file_paths: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) error: Option<String>,
}

impl OpenDialogOutcome {
    pub(crate) fn picked(path: &Path) -> Self {
        Self {
            canceled: false,
            file_paths: vec![path.to_string_lossy().to_string()],
            error: None,
        }
    }

    pub(crate) fn canceled() -> Self {
        Self {
            canceled: true,
            file_paths: Vec::new(),
            error: None,
        }
    }

    pub(crate) fn failed(reason: impl Into<String>) -> Self {
        Self {
            canceled: true,
            file_paths: Vec::new(),
            error: Some(reason.into()),
        }
    }
}

fn lock_or_recover<'a, T>(mutex: &'a Mutex<T>, what: &str) -> MutexGuard<'a, T> {
    match mutex.lock() {
        Ok(guard) => guard,
        Err(error) => {
            append_desktop_log(&format!("{what} lock poisoned: {error}"));
            error.into_inner()
        }
    }
}

/// Everything the controller owns for the lifetime of the main window.
#[derive(Debug)]
pub(crate) struct ShellState {
    pub(crate) config: ShellConfig,
    exit_state: Mutex<ExitStateMachine>,
    phase: Mutex<WindowPhase>,
    awaiting_ready: AtomicBool,
    heartbeat: Mutex<Option<ScheduledTask>>,
    listener_ids: Mutex<Vec<EventId>>,
}

impl ShellState {
    pub(crate) fn new(config: ShellConfig) -> Self {
        Self {
            config,
            exit_state: Mutex::new(ExitStateMachine::default()),
            phase: Mutex::new(WindowPhase::Destroyed),
            awaiting_ready: AtomicBool::new(false),
            heartbeat: Mutex::new(None),
            listener_ids: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn mark_quitting(&self) {
        lock_or_recover(&self.exit_state, "exit state").mark_quitting();
    }

    pub(crate) fn is_quitting(&self) -> bool {
        lock_or_recover(&self.exit_state, "exit state").is_quitting()
    }

    pub(crate) fn try_begin_exit_cleanup(&self) -> bool {
        lock_or_recover(&self.exit_state, "exit state").try_begin_cleanup()
    }

    pub(crate) fn phase(&self) -> WindowPhase {
        *lock_or_recover(&self.phase, "window phase")
    }

    pub(crate) fn apply_phase_event(&self, event: PhaseEvent) -> WindowPhase {
        let mut phase = lock_or_recover(&self.phase, "window phase");
        let next = window_lifecycle::transition(*phase, event);
        if next != *phase {
            append_desktop_log(&format!(
                "main window phase {:?} -> {:?} on {:?}",
                *phase, next, event
            ));
        }
        *phase = next;
        next
    }

    pub(crate) fn begin_construction(&self) {
        self.apply_phase_event(PhaseEvent::Activated);
        self.awaiting_ready.store(true, Ordering::Release);
    }

    /// True only for the first ready signal after a construction.
    pub(crate) fn take_ready_signal(&self) -> bool {
        self.awaiting_ready.swap(false, Ordering::AcqRel)
    }

    pub(crate) fn replace_heartbeat(&self, task: Option<ScheduledTask>) {
        let previous = std::mem::replace(&mut *lock_or_recover(&self.heartbeat, "heartbeat"), task);
        if let Some(mut previous) = previous {
            append_desktop_log(&format!("cancelling scheduled task {}", previous.name()));
            previous.cancel();
        }
    }

    pub(crate) fn add_listener_ids(&self, ids: impl IntoIterator<Item = EventId>) {
        lock_or_recover(&self.listener_ids, "listener ids").extend(ids);
    }

    pub(crate) fn take_listener_ids(&self) -> Vec<EventId> {
        std::mem::take(&mut *lock_or_recover(&self.listener_ids, "listener ids"))
    }
}
