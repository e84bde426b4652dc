use serde_json::Value;
use tauri::{AppHandle, Emitter, EventId, EventTarget, Listener, Runtime, WebviewWindow};

use crate::{
    scheduled_task::ScheduledTask, CONTAINER_STOPPED_EVENT, HEARTBEAT_DELAY,
    HEARTBEAT_PLACEHOLDER_ID,
};

pub(crate) trait EventForwarder {
    fn forward(&self, event: &str, payload: Value) -> Result<(), String>;
}

/// Keeps the payload opaque: JSON stays JSON, anything else travels as a
/// string, an empty payload becomes `null`.
pub(crate) fn parse_opaque_payload(raw_payload: &str) -> Value {
    if raw_payload.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(raw_payload).unwrap_or_else(|_| Value::String(raw_payload.to_string()))
}

pub(crate) fn heartbeat_payload() -> Value {
    serde_json::json!({ "id": HEARTBEAT_PLACEHOLDER_ID })
}

pub(crate) fn relay_container_stopped<W, F>(forwarder: &W, payload: Value, log: F)
where
    W: EventForwarder,
    F: Fn(&str),
{
    if let Err(error) = forwarder.forward(CONTAINER_STOPPED_EVENT, payload) {
        log(&format!("failed to forward {CONTAINER_STOPPED_EVENT}: {error}"));
    }
}

pub(crate) struct WindowForwarder<R: Runtime> {
    window: WebviewWindow<R>,
}

impl<R: Runtime> WindowForwarder<R> {
    pub(crate) fn new(window: WebviewWindow<R>) -> Self {
        Self { window }
    }
}

impl<R: Runtime> EventForwarder for WindowForwarder<R> {
    fn forward(&self, event: &str, payload: Value) -> Result<(), String> {
        // Targeted at the webview only, so the app-level listener below does
        // not see its own forward.
        self.window
            .emit_to(EventTarget::webview_window(self.window.label()), event, payload)
            .map_err(|error| format!("Failed to emit {event} to {}: {error}", self.window.label()))
    }
}

pub(crate) fn register_container_relay<R, F>(
    app_handle: &AppHandle<R>,
    window: &WebviewWindow<R>,
    log: F,
) -> EventId
where
    R: Runtime,
    F: Fn(&str) + Clone + Send + 'static,
{
    let forwarder = WindowForwarder::new(window.clone());
    app_handle.listen(CONTAINER_STOPPED_EVENT, move |event| {
        relay_container_stopped(&forwarder, parse_opaque_payload(event.payload()), log.clone());
    })
}

pub(crate) fn schedule_heartbeat<W, F>(forwarder: W, log: F) -> Result<ScheduledTask, String>
where
    W: EventForwarder + Send + 'static,
    F: Fn(&str) + Send + 'static,
{
    ScheduledTask::schedule("container-heartbeat", HEARTBEAT_DELAY, move || {
        log("emitting placeholder container-stopped heartbeat");
        relay_container_stopped(&forwarder, heartbeat_payload(), &log);
    })
}
