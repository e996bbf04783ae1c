use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use engine_logging::{engine_error, engine_warn};

use crate::search::{ReqwestSearcher, SearchSettings, Searcher};
use crate::{DispatchId, EngineEvent, FailureKind, SearchError};

enum EngineCommand {
    Search {
        dispatch: DispatchId,
        name: Option<String>,
    },
}

/// Runs searches on a background tokio runtime and reports completions.
///
/// Requests run concurrently and are never cancelled, so completions can
/// arrive in any order; callers match them up by `DispatchId`.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: SearchSettings) -> Result<Self, SearchError> {
        let searcher = ReqwestSearcher::new(settings)?;
        Ok(Self::with_searcher(Arc::new(searcher)))
    }

    pub fn with_searcher(searcher: Arc<dyn Searcher>) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            let runtime = match tokio::runtime::Runtime::new() {
                Ok(runtime) => runtime,
                Err(err) => {
                    engine_error!("search runtime failed to start: {}", err);
                    reject_all(cmd_rx, event_tx, err.to_string());
                    return;
                }
            };
            while let Ok(command) = cmd_rx.recv() {
                let searcher = searcher.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(searcher.as_ref(), command, event_tx).await;
                });
            }
        });

        Self { cmd_tx, event_rx }
    }

    pub fn search(&self, dispatch: DispatchId, name: Option<String>) {
        if self
            .cmd_tx
            .send(EngineCommand::Search { dispatch, name })
            .is_err()
        {
            engine_warn!("search engine stopped; dispatch {} dropped", dispatch);
        }
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

async fn handle_command(
    searcher: &dyn Searcher,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Search { dispatch, name } => {
            let result = searcher.search(name.as_deref()).await;
            if let Err(err) = &result {
                engine_warn!("dispatch {} failed ({}): {}", dispatch, err.kind, err.message);
            }
            let _ = event_tx.send(EngineEvent::SearchCompleted { dispatch, result });
        }
    }
}

fn reject_all(
    cmd_rx: mpsc::Receiver<EngineCommand>,
    event_tx: mpsc::Sender<EngineEvent>,
    reason: String,
) {
    while let Ok(EngineCommand::Search { dispatch, .. }) = cmd_rx.recv() {
        let _ = event_tx.send(EngineEvent::SearchCompleted {
            dispatch,
            result: Err(SearchError::new(
                FailureKind::EngineUnavailable,
                reason.clone(),
            )),
        });
    }
}
