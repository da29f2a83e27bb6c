use std::sync::mpsc;
use std::thread;

use engine_logging::{engine_debug, engine_info};
use reel_core::{Effect, LoadError, Msg};
use reel_engine::{EngineError, EngineEvent, EngineHandle, GatewayConfig};

/// Executes effects on the engine and feeds its completions back as messages.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(
        config: GatewayConfig,
        sink: impl Fn(Msg) + Send + 'static,
    ) -> Result<Self, EngineError> {
        let (event_tx, event_rx) = mpsc::channel();
        let engine = EngineHandle::new(config, event_tx)?;

        thread::Builder::new()
            .name("reel-events".to_string())
            .spawn(move || {
                for event in event_rx {
                    sink(event_to_msg(event));
                }
                engine_debug!("engine event stream ended");
            })?;

        Ok(Self { engine })
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::ScheduleDebounce { generation, delay } => {
                    self.engine.debounce(generation, delay);
                }
                Effect::CancelDebounce => self.engine.cancel_debounce(),
                Effect::FetchSearchPage {
                    generation,
                    query,
                    page,
                } => {
                    engine_info!(
                        "FetchSearchPage generation={} page={} query={:?}",
                        generation,
                        page,
                        query
                    );
                    self.engine.search(generation, query, page);
                }
                Effect::FetchSuggestions { generation, query } => {
                    self.engine.suggest(generation, query);
                }
                Effect::FetchDetail { generation, id } => {
                    engine_info!("FetchDetail generation={} id={}", generation, id);
                    self.engine.detail(generation, id);
                }
            }
        }
    }
}

pub fn event_to_msg(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::SearchCompleted { generation, result } => Msg::SearchCompleted {
            generation,
            result: result.map_err(LoadError::from),
        },
        EngineEvent::SuggestionsCompleted { generation, items } => {
            Msg::SuggestionsLoaded { generation, items }
        }
        EngineEvent::DetailCompleted { generation, result } => Msg::DetailCompleted {
            generation,
            result: result.map_err(LoadError::from),
        },
        EngineEvent::DebounceElapsed { generation } => Msg::DebounceElapsed { generation },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reel_core::FailureKind;
    use reel_engine::GatewayError;

    #[test]
    fn gateway_failures_become_load_errors() {
        let msg = event_to_msg(EngineEvent::SearchCompleted {
            generation: 4,
            result: Err(GatewayError::RateLimited),
        });
        let Msg::SearchCompleted { generation, result } = msg else {
            panic!("unexpected msg {msg:?}");
        };
        assert_eq!(generation, 4);
        let err = result.unwrap_err();
        assert_eq!(err.kind, FailureKind::RateLimited);
        assert_eq!(
            err.message,
            "API Request limit reached! Please try again later."
        );
        assert!(err.remediation().is_some());
    }

    #[test]
    fn detail_not_found_keeps_message() {
        let msg = event_to_msg(EngineEvent::DetailCompleted {
            generation: 1,
            result: Err(GatewayError::NotFound("Movie not found".to_string())),
        });
        match msg {
            Msg::DetailCompleted { result: Err(err), .. } => {
                assert_eq!(err.kind, FailureKind::NotFound);
                assert_eq!(err.to_string(), "Movie not found");
            }
            other => panic!("unexpected msg {other:?}"),
        }
    }
}
