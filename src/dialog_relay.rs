use std::path::PathBuf;

use serde_json::Value;
use tauri::{Emitter, EventId, EventTarget, Listener, Runtime, WebviewWindow};
use tauri_plugin_dialog::{DialogExt, FilePath};

use crate::{
    DialogKind, DialogRequest, OpenDialogOutcome, DIALOG_OPEN_FILE_EVENT,
    DIALOG_OPEN_FOLDER_EVENT, DIALOG_RESPONSE_EVENT,
};

pub(crate) type PickCallback = Box<dyn FnOnce(Result<Option<PathBuf>, String>) + Send + 'static>;

/// Native picker. `on_done` receives `Ok(None)` when the user cancels.
pub(crate) trait FilePicker {
    fn pick(&self, kind: DialogKind, prompt: &str, on_done: PickCallback);
}

pub(crate) trait DialogResponder {
    fn respond(&self, dialog_id: &str, outcome: &OpenDialogOutcome) -> Result<(), String>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct MalformedDialogRequest {
    pub(crate) dialog_id: Option<String>,
    pub(crate) reason: String,
}

pub(crate) fn parse_dialog_request(raw_payload: &str) -> Result<DialogRequest, MalformedDialogRequest> {
    serde_json::from_str::<DialogRequest>(raw_payload).map_err(|error| {
        let dialog_id = serde_json::from_str::<Value>(raw_payload)
            .ok()
            .and_then(|value| {
                value
                    .get("dialogId")
                    .and_then(Value::as_str)
                    .map(str::to_string)
            });
        MalformedDialogRequest {
            dialog_id,
            reason: format!("Invalid dialog request payload: {error}"),
        }
    })
}

pub(crate) fn outcome_from_pick(result: Result<Option<PathBuf>, String>) -> OpenDialogOutcome {
    match result {
        Ok(Some(path)) => OpenDialogOutcome::picked(&path),
        Ok(None) => OpenDialogOutcome::canceled(),
        Err(error) => OpenDialogOutcome::failed(error),
    }
}

fn send_response<R, F>(responder: &R, dialog_id: &str, outcome: &OpenDialogOutcome, log: F)
where
    R: DialogResponder,
    F: Fn(&str),
{
    if let Err(error) = responder.respond(dialog_id, outcome) {
        log(&format!("failed to answer dialog request {dialog_id}: {error}"));
    }
}

/// Answers every request that carries a usable `dialogId` exactly once, on
/// success, cancel and failure alike.
pub(crate) fn handle_open_dialog_request<P, R, F>(
    kind: DialogKind,
    raw_payload: &str,
    picker: &P,
    responder: R,
    log: F,
) where
    P: FilePicker,
    R: DialogResponder + Send + 'static,
    F: Fn(&str) + Send + 'static,
{
    let request = match parse_dialog_request(raw_payload) {
        Ok(request) => request,
        Err(malformed) => {
            log(&format!(
                "rejecting {} dialog request: {}",
                kind.as_str(),
                malformed.reason
            ));
            if let Some(dialog_id) = malformed.dialog_id {
                send_response(
                    &responder,
                    &dialog_id,
                    &OpenDialogOutcome::failed(malformed.reason),
                    &log,
                );
            }
            return;
        }
    };

    log(&format!(
        "opening {} dialog for request {}",
        kind.as_str(),
        request.dialog_id
    ));
    let dialog_id = request.dialog_id;
    picker.pick(
        kind,
        &request.message,
        Box::new(move |result| {
            let outcome = outcome_from_pick(result);
            match &outcome.error {
                Some(error) => log(&format!("dialog request {dialog_id} failed: {error}")),
                None => log(&format!(
                    "dialog request {dialog_id} finished (canceled={})",
                    outcome.canceled
                )),
            }
            send_response(&responder, &dialog_id, &outcome, &log);
        }),
    );
}

pub(crate) struct TauriFilePicker<R: Runtime> {
    window: WebviewWindow<R>,
}

impl<R: Runtime> TauriFilePicker<R> {
    pub(crate) fn new(window: WebviewWindow<R>) -> Self {
        Self { window }
    }
}

impl<R: Runtime> FilePicker for TauriFilePicker<R> {
    fn pick(&self, kind: DialogKind, prompt: &str, on_done: PickCallback) {
        let mut builder = self.window.dialog().file().set_parent(&self.window);
        if !prompt.trim().is_empty() {
            builder = builder.set_title(prompt);
        }

        let finish = move |picked: Option<FilePath>| {
            let result = picked
                .map(|path| {
                    path.into_path()
                        .map_err(|error| format!("Picked path is not a local path: {error}"))
                })
                .transpose();
            on_done(result);
        };
        match kind {
            DialogKind::File => builder.pick_file(finish),
            DialogKind::Folder => builder.pick_folder(finish),
        }
    }
}

pub(crate) struct WindowResponder<R: Runtime> {
    window: WebviewWindow<R>,
}

impl<R: Runtime> WindowResponder<R> {
    pub(crate) fn new(window: WebviewWindow<R>) -> Self {
        Self { window }
    }
}

impl<R: Runtime> DialogResponder for WindowResponder<R> {
    fn respond(&self, dialog_id: &str, outcome: &OpenDialogOutcome) -> Result<(), String> {
        self.window
            .emit_to(
                EventTarget::webview_window(self.window.label()),
                DIALOG_RESPONSE_EVENT,
                (dialog_id, outcome),
            )
            .map_err(|error| format!("Failed to emit {DIALOG_RESPONSE_EVENT}: {error}"))
    }
}

pub(crate) fn register_dialog_relays<R, F>(window: &WebviewWindow<R>, log: F) -> Vec<EventId>
where
    R: Runtime,
    F: Fn(&str) + Clone + Send + 'static,
{
    [
        (DIALOG_OPEN_FILE_EVENT, DialogKind::File),
        (DIALOG_OPEN_FOLDER_EVENT, DialogKind::Folder),
    ]
    .into_iter()
    .map(|(event_name, kind)| {
        let handler_window = window.clone();
        let handler_log = log.clone();
        window.listen(event_name, move |event| {
            handle_open_dialog_request(
                kind,
                event.payload(),
                &TauriFilePicker::new(handler_window.clone()),
                WindowResponder::new(handler_window.clone()),
                handler_log.clone(),
            );
        })
    })
    .collect()
}
