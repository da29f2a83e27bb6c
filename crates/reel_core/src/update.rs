use engine_logging::engine_debug;

use crate::{AppState, DetailRequest, Effect, Msg, SearchRequest, SuggestionRequest};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    engine_debug!("update {}", msg_name(&msg));
    let effects = match msg {
        Msg::ListMounted => {
            if state.search.query().is_empty() {
                let query = state.settings().default_query.clone();
                start_search(&mut state, &query)
            } else {
                Vec::new()
            }
        }
        Msg::InputChanged(text) => {
            state.set_input(text.clone());
            let generation = state.debounce.push(text);
            vec![Effect::ScheduleDebounce {
                generation,
                delay: state.settings().debounce_delay,
            }]
        }
        Msg::DebounceElapsed { generation } => match state.debounce.elapsed(generation) {
            Some(query) => {
                let had_suggestions = !state.suggestions.suggestions().is_empty();
                match state.suggestions.fetch(&query) {
                    Some(request) => vec![suggestion_effect(request)],
                    None => {
                        if had_suggestions {
                            state.mark_dirty();
                        }
                        Vec::new()
                    }
                }
            }
            None => Vec::new(),
        },
        Msg::SearchSubmitted => {
            let query = state.input().trim().to_string();
            if query.is_empty() {
                Vec::new()
            } else {
                dismiss_suggestions(&mut state);
                start_search(&mut state, &query)
            }
        }
        Msg::SuggestionPicked { index } => {
            match state.suggestions.suggestions().get(index).cloned() {
                Some(movie) => {
                    state.set_input(movie.title.clone());
                    dismiss_suggestions(&mut state);
                    start_search(&mut state, &movie.title)
                }
                None => Vec::new(),
            }
        }
        Msg::SuggestionsDismissed => {
            dismiss_suggestions(&mut state);
            Vec::new()
        }
        Msg::RetryClicked => {
            let query = if state.search.query().is_empty() {
                state.settings().default_query.clone()
            } else {
                state.search.query().to_string()
            };
            start_search(&mut state, &query)
        }
        Msg::ResetClicked => {
            state.search.reset();
            state.rearm_sentinel();
            state.mark_dirty();
            Vec::new()
        }
        Msg::SentinelVisibility { visible } => {
            if state.sentinel.visibility_changed(visible) {
                match state.search.load_more() {
                    Some(request) => {
                        state.mark_dirty();
                        vec![search_effect(request)]
                    }
                    None => Vec::new(),
                }
            } else {
                Vec::new()
            }
        }
        Msg::SearchCompleted { generation, result } => {
            if state.search.apply(generation, result) {
                state.rearm_sentinel();
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::SuggestionsLoaded { generation, items } => {
            if state.suggestions.apply(generation, items) {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::DetailOpened { id } => {
            let id = id.trim().to_string();
            if id.is_empty() {
                Vec::new()
            } else {
                dismiss_suggestions(&mut state);
                let request = state.detail.enter(&id);
                state.mark_dirty();
                vec![detail_effect(request)]
            }
        }
        Msg::DetailClosed => {
            if state.detail.is_open() {
                state.detail.exit();
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::DetailCompleted { generation, result } => {
            if state.detail.apply(generation, result) {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::Teardown => {
            state.debounce.cancel();
            if state.detail.is_open() {
                state.detail.exit();
                state.mark_dirty();
            }
            vec![Effect::CancelDebounce]
        }
    };

    (state, effects)
}

fn start_search(state: &mut AppState, query: &str) -> Vec<Effect> {
    match state.search.start_search(query) {
        Some(request) => {
            state.rearm_sentinel();
            state.mark_dirty();
            vec![search_effect(request)]
        }
        None => Vec::new(),
    }
}

/// Hides the list until the user types again; a pending debounce must not reopen it.
fn dismiss_suggestions(state: &mut AppState) {
    state.debounce.cancel();
    let had_suggestions = !state.suggestions.suggestions().is_empty();
    state.suggestions.clear();
    if had_suggestions {
        state.mark_dirty();
    }
}

fn search_effect(request: SearchRequest) -> Effect {
    Effect::FetchSearchPage {
        generation: request.generation,
        query: request.query,
        page: request.page,
    }
}

fn suggestion_effect(request: SuggestionRequest) -> Effect {
    Effect::FetchSuggestions {
        generation: request.generation,
        query: request.query,
    }
}

fn detail_effect(request: DetailRequest) -> Effect {
    Effect::FetchDetail {
        generation: request.generation,
        id: request.id,
    }
}

fn msg_name(msg: &Msg) -> &'static str {
    match msg {
        Msg::ListMounted => "ListMounted",
        Msg::InputChanged(_) => "InputChanged",
        Msg::DebounceElapsed { .. } => "DebounceElapsed",
        Msg::SearchSubmitted => "SearchSubmitted",
        Msg::SuggestionPicked { .. } => "SuggestionPicked",
        Msg::SuggestionsDismissed => "SuggestionsDismissed",
        Msg::RetryClicked => "RetryClicked",
        Msg::ResetClicked => "ResetClicked",
        Msg::SentinelVisibility { .. } => "SentinelVisibility",
        Msg::SearchCompleted { .. } => "SearchCompleted",
        Msg::SuggestionsLoaded { .. } => "SuggestionsLoaded",
        Msg::DetailOpened { .. } => "DetailOpened",
        Msg::DetailClosed => "DetailClosed",
        Msg::DetailCompleted { .. } => "DetailCompleted",
        Msg::Teardown => "Teardown",
    }
}
