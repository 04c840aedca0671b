use std::io;
use std::sync::{mpsc, Arc, Mutex, PoisonError};
use std::thread;
use std::time::Duration;

use scout_logging::{scout_debug, scout_info, scout_warn};
use tokio_util::sync::CancellationToken;

use crate::fetch::{ClientSettings, JobSearcher, ReqwestSearcher};
use crate::{ClientEvent, FailureKind, FetchError, RequestId};

enum ClientCommand {
    Search {
        request_id: RequestId,
        keywords: Vec<String>,
    },
    Cancel {
        request_id: RequestId,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("request {in_flight} is still outstanding")]
    Busy { in_flight: RequestId },
    #[error("client worker has stopped")]
    Stopped,
}

/// Submits searches to the background worker. At most one request is
/// outstanding at any time.
#[derive(Clone)]
pub struct ClientHandle {
    cmd_tx: mpsc::Sender<ClientCommand>,
    in_flight: Arc<Mutex<Option<RequestId>>>,
}

/// Receiving side for completion events.
pub struct ClientEvents {
    event_rx: mpsc::Receiver<ClientEvent>,
}

impl ClientHandle {
    pub fn spawn(settings: ClientSettings) -> io::Result<(Self, ClientEvents)> {
        Self::spawn_with(Arc::new(ReqwestSearcher::new(settings)))
    }

    /// Starts the worker thread around any searcher implementation.
    pub fn spawn_with(searcher: Arc<dyn JobSearcher>) -> io::Result<(Self, ClientEvents)> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .thread_name("jobscout-client")
            .build()?;
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let in_flight = Arc::new(Mutex::new(None));
        let worker_in_flight = in_flight.clone();

        thread::Builder::new()
            .name("jobscout-dispatch".to_string())
            .spawn(move || {
                let mut active: Option<(RequestId, CancellationToken)> = None;
                while let Ok(command) = cmd_rx.recv() {
                    match command {
                        ClientCommand::Search {
                            request_id,
                            keywords,
                        } => {
                            let token = CancellationToken::new();
                            active = Some((request_id, token.clone()));
                            runtime.spawn(run_search(
                                searcher.clone(),
                                request_id,
                                keywords,
                                token,
                                event_tx.clone(),
                                worker_in_flight.clone(),
                            ));
                        }
                        ClientCommand::Cancel { request_id } => match &active {
                            Some((active_id, token)) if *active_id == request_id => {
                                scout_info!("Cancelling request {}", request_id);
                                token.cancel();
                            }
                            _ => scout_debug!("Cancel for unknown request {}", request_id),
                        },
                    }
                }
                scout_debug!("Client dispatch loop stopped");
            })?;

        Ok((Self { cmd_tx, in_flight }, ClientEvents { event_rx }))
    }

    /// Starts `request_id` unless another request is still outstanding.
    pub fn submit(&self, request_id: RequestId, keywords: Vec<String>) -> Result<(), SubmitError> {
        {
            let mut guard = self.in_flight.lock().unwrap_or_else(PoisonError::into_inner);
            if let Some(in_flight) = *guard {
                scout_warn!(
                    "Rejecting request {}; request {} is outstanding",
                    request_id,
                    in_flight
                );
                return Err(SubmitError::Busy { in_flight });
            }
            *guard = Some(request_id);
        }

        let sent = self.cmd_tx.send(ClientCommand::Search {
            request_id,
            keywords,
        });
        if sent.is_err() {
            release(&self.in_flight, request_id);
            return Err(SubmitError::Stopped);
        }
        Ok(())
    }

    /// Abandons `request_id`. Its completion still arrives, as `Cancelled`.
    pub fn cancel(&self, request_id: RequestId) {
        release(&self.in_flight, request_id);
        let _ = self.cmd_tx.send(ClientCommand::Cancel { request_id });
    }

    pub fn in_flight(&self) -> Option<RequestId> {
        *self.in_flight.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ClientEvents {
    pub fn recv_timeout(&self, timeout: Duration) -> Option<ClientEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }

    /// Blocks until the next event; `None` once every handle is gone.
    pub fn recv(&self) -> Option<ClientEvent> {
        self.event_rx.recv().ok()
    }
}

fn release(in_flight: &Mutex<Option<RequestId>>, request_id: RequestId) {
    let mut guard = in_flight.lock().unwrap_or_else(PoisonError::into_inner);
    if *guard == Some(request_id) {
        *guard = None;
    }
}

async fn run_search(
    searcher: Arc<dyn JobSearcher>,
    request_id: RequestId,
    keywords: Vec<String>,
    token: CancellationToken,
    event_tx: mpsc::Sender<ClientEvent>,
    in_flight: Arc<Mutex<Option<RequestId>>>,
) {
    let result = tokio::select! {
        result = searcher.search(&keywords) => result,
        _ = token.cancelled() => Err(FetchError::new(FailureKind::Cancelled, "request cancelled")),
    };
    if let Err(err) = &result {
        scout_warn!("Request {} failed: {}", request_id, err);
    }

    release(&in_flight, request_id);
    let _ = event_tx.send(ClientEvent::SearchCompleted { request_id, result });
}
