use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use engine_logging::{engine_debug, engine_info};
use reel_core::{Generation, MovieDetail, MovieSummary, SearchPage};

use crate::gateway::{GatewayError, MovieGateway, OmdbGateway};
use crate::timer::Debouncer;
use crate::GatewayConfig;

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("failed to start engine runtime: {0}")]
    Runtime(#[from] std::io::Error),
    #[error("failed to build gateway: {0}")]
    Gateway(#[from] GatewayError),
}

/// Completion reported back to the owner of the handle, tagged with the
/// generation of the request that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    SearchCompleted {
        generation: Generation,
        result: Result<SearchPage, GatewayError>,
    },
    SuggestionsCompleted {
        generation: Generation,
        items: Vec<MovieSummary>,
    },
    DetailCompleted {
        generation: Generation,
        result: Result<MovieDetail, GatewayError>,
    },
    DebounceElapsed {
        generation: Generation,
    },
}

enum EngineCommand {
    Search {
        generation: Generation,
        query: String,
        page: u32,
    },
    Suggest {
        generation: Generation,
        query: String,
    },
    Detail {
        generation: Generation,
        id: String,
    },
    Debounce {
        generation: Generation,
        delay: Duration,
    },
    CancelDebounce,
}

/// Runs gateway calls and the debounce timer on a private tokio runtime.
///
/// Dropping the handle stops the worker thread, cancels the pending debounce
/// and abandons in-flight requests.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

impl EngineHandle {
    pub fn new(
        config: GatewayConfig,
        event_tx: mpsc::Sender<EngineEvent>,
    ) -> Result<Self, EngineError> {
        let gateway = OmdbGateway::new(config)?;
        Self::with_gateway(Arc::new(gateway), event_tx)
    }

    pub fn with_gateway(
        gateway: Arc<dyn MovieGateway>,
        event_tx: mpsc::Sender<EngineEvent>,
    ) -> Result<Self, EngineError> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let runtime = tokio::runtime::Runtime::new()?;

        thread::Builder::new()
            .name("reel-engine".to_string())
            .spawn(move || {
                let timer_tx = event_tx.clone();
                let mut debouncer = Debouncer::new(runtime.handle().clone(), move |generation| {
                    let _ = timer_tx.send(EngineEvent::DebounceElapsed { generation });
                });

                while let Ok(command) = cmd_rx.recv() {
                    match command {
                        EngineCommand::Debounce { generation, delay } => {
                            debouncer.push(generation, delay);
                        }
                        EngineCommand::CancelDebounce => debouncer.cancel(),
                        command => {
                            let gateway = gateway.clone();
                            let event_tx = event_tx.clone();
                            runtime.spawn(async move {
                                handle_command(gateway.as_ref(), command, event_tx).await;
                            });
                        }
                    }
                }

                engine_info!("engine command channel closed; shutting down");
                drop(debouncer);
                runtime.shutdown_background();
            })?;

        Ok(Self { cmd_tx })
    }

    pub fn search(&self, generation: Generation, query: impl Into<String>, page: u32) {
        self.send(EngineCommand::Search {
            generation,
            query: query.into(),
            page,
        });
    }

    pub fn suggest(&self, generation: Generation, query: impl Into<String>) {
        self.send(EngineCommand::Suggest {
            generation,
            query: query.into(),
        });
    }

    pub fn detail(&self, generation: Generation, id: impl Into<String>) {
        self.send(EngineCommand::Detail {
            generation,
            id: id.into(),
        });
    }

    pub fn debounce(&self, generation: Generation, delay: Duration) {
        self.send(EngineCommand::Debounce { generation, delay });
    }

    pub fn cancel_debounce(&self) {
        self.send(EngineCommand::CancelDebounce);
    }

    fn send(&self, command: EngineCommand) {
        if self.cmd_tx.send(command).is_err() {
            engine_debug!("engine worker gone; command dropped");
        }
    }
}

async fn handle_command(
    gateway: &dyn MovieGateway,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    let event = match command {
        EngineCommand::Search {
            generation,
            query,
            page,
        } => EngineEvent::SearchCompleted {
            generation,
            result: gateway.search(&query, page).await,
        },
        EngineCommand::Suggest { generation, query } => EngineEvent::SuggestionsCompleted {
            generation,
            items: gateway.suggest(&query).await,
        },
        EngineCommand::Detail { generation, id } => EngineEvent::DetailCompleted {
            generation,
            result: gateway.get_by_id(&id).await,
        },
        EngineCommand::Debounce { .. } | EngineCommand::CancelDebounce => return,
    };
    let _ = event_tx.send(event);
}
