use std::{
    sync::mpsc::{self, RecvTimeoutError, Sender},
    thread,
    time::Duration,
};

/// One-shot delayed job on its own thread. Cancelling, or dropping the
/// handle, wakes the thread and the job never runs.
#[derive(Debug)]
pub(crate) struct ScheduledTask {
    name: String,
    cancel_tx: Option<Sender<()>>,
}

impl ScheduledTask {
    pub(crate) fn schedule<F>(name: &str, delay: Duration, job: F) -> Result<Self, String>
    where
        F: FnOnce() + Send + 'static,
    {
        let (cancel_tx, cancel_rx) = mpsc::channel::<()>();
        thread::Builder::new()
            .name(format!("scheduled-{name}"))
            .spawn(move || {
                if let Err(RecvTimeoutError::Timeout) = cancel_rx.recv_timeout(delay) {
                    job();
                }
            })
            .map_err(|error| format!("Failed to spawn scheduled task '{name}': {error}"))?;

        Ok(Self {
            name: name.to_string(),
            cancel_tx: Some(cancel_tx),
        })
    }

    pub(crate) fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn cancel(&mut self) {
        if let Some(cancel_tx) = self.cancel_tx.take() {
            // The receiver is gone once the job has fired.
            let _ = cancel_tx.send(());
        }
    }
}

impl Drop for ScheduledTask {
    fn drop(&mut self) {
        self.cancel();
    }
}
