use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use finder_logging::{finder_debug, finder_warn};

use crate::{ClientSettings, DebounceTimer, EngineError, EngineEvent, ReqwestSearchClient, SearchClient};

enum EngineCommand {
    Search { term: String },
    ScheduleTimer { ticket: u64, delay: Duration },
    CancelTimer,
    Shutdown,
}

/// Runs searches and the debounce timer on a background tokio runtime.
///
/// Results come back as [`EngineEvent`]s that the UI loop drains with
/// [`EngineHandle::try_recv`]. Dropping the handle cancels the timer and stops
/// the runtime; requests still in flight are abandoned.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
    worker: Option<thread::JoinHandle<()>>,
}

impl EngineHandle {
    pub fn new(settings: ClientSettings) -> Result<Self, EngineError> {
        let client = ReqwestSearchClient::new(settings)?;
        Self::with_client(Arc::new(client))
    }

    pub fn with_client(client: Arc<dyn SearchClient>) -> Result<Self, EngineError> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("finder-engine")
            .enable_all()
            .build()?;
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        let worker = thread::spawn(move || {
            let mut timer = DebounceTimer::new(runtime.handle().clone());
            while let Ok(command) = cmd_rx.recv() {
                match command {
                    EngineCommand::Search { term } => {
                        let client = client.clone();
                        let event_tx = event_tx.clone();
                        runtime.spawn(async move {
                            let result = client.search(&term).await;
                            if let Err(err) = &result {
                                finder_warn!("Search failed term={:?}: {}", term, err);
                            }
                            let _ = event_tx.send(EngineEvent::SearchCompleted { term, result });
                        });
                    }
                    EngineCommand::ScheduleTimer { ticket, delay } => {
                        let event_tx = event_tx.clone();
                        timer.schedule(delay, move || {
                            let _ = event_tx.send(EngineEvent::TimerElapsed { ticket });
                        });
                    }
                    EngineCommand::CancelTimer => {
                        timer.cancel();
                    }
                    EngineCommand::Shutdown => break,
                }
            }
            drop(timer);
            runtime.shutdown_background();
            finder_debug!("Engine stopped");
        });

        Ok(Self {
            cmd_tx,
            event_rx,
            worker: Some(worker),
        })
    }

    pub fn search(&self, term: impl Into<String>) {
        let _ = self.cmd_tx.send(EngineCommand::Search { term: term.into() });
    }

    /// Arms the debounce timer, replacing any countdown in progress.
    pub fn schedule_timer(&self, ticket: u64, delay: Duration) {
        let _ = self.cmd_tx.send(EngineCommand::ScheduleTimer { ticket, delay });
    }

    pub fn cancel_timer(&self) {
        let _ = self.cmd_tx.send(EngineCommand::CancelTimer);
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

impl Drop for EngineHandle {
    fn drop(&mut self) {
        let _ = self.cmd_tx.send(EngineCommand::Shutdown);
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}
