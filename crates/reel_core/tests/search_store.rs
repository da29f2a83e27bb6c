use pretty_assertions::assert_eq;
use reel_core::{
    FailureKind, LoadError, MovieSummary, SearchPage, SearchPhase, SearchRequest, SearchStore,
};

fn movies(prefix: &str, count: usize) -> Vec<MovieSummary> {
    (0..count)
        .map(|i| MovieSummary {
            id: format!("{prefix}{i}"),
            title: format!("{prefix} {i}"),
            year: "2005".to_string(),
            kind: "movie".to_string(),
            poster_url: None,
        })
        .collect()
}

fn page(items: Vec<MovieSummary>, total_count: usize) -> Result<SearchPage, LoadError> {
    Ok(SearchPage { items, total_count })
}

#[test]
fn batman_pages_accumulate_until_total_is_reached() {
    let mut store = SearchStore::new();
    let request = store.start_search("Batman").expect("first page");
    assert_eq!(request.page, 1);
    assert_eq!(request.query, "Batman");
    assert_eq!(store.phase(), SearchPhase::Searching);

    assert!(store.apply(request.generation, page(movies("p1-", 10), 23)));
    assert_eq!(store.results().len(), 10);
    assert!(store.has_more());
    assert_eq!(store.phase(), SearchPhase::Loaded);

    let request = store.load_more().expect("second page");
    assert_eq!(request.page, 2);
    store.apply(request.generation, page(movies("p2-", 10), 23));
    assert_eq!(store.results().len(), 20);
    assert!(store.has_more());

    let request = store.load_more().expect("third page");
    assert_eq!(request.page, 3);
    store.apply(request.generation, page(movies("p3-", 3), 23));
    assert_eq!(store.results().len(), 23);
    assert!(!store.has_more());
    assert_eq!(store.page(), 3);
    assert_eq!(store.total_count(), 23);

    assert_eq!(store.load_more(), None);
}

#[test]
fn first_page_is_capped_by_total_count() {
    let mut store = SearchStore::new();
    let request = store.start_search("Alien").unwrap();
    store.apply(request.generation, page(movies("a", 10), 4));

    assert_eq!(store.results().len(), 4);
    assert!(!store.has_more());
}

#[test]
fn load_more_while_loading_is_a_noop() {
    let mut store = SearchStore::new();
    let request = store.start_search("Batman").unwrap();
    store.apply(request.generation, page(movies("a", 10), 30));

    let in_flight = store.load_more().expect("page two");
    assert!(store.is_loading());
    assert_eq!(store.load_more(), None);
    assert_eq!(store.load_more(), None);

    store.apply(in_flight.generation, page(movies("b", 10), 30));
    assert_eq!(store.results().len(), 20);
    assert_eq!(store.load_more().map(|r| r.page), Some(3));
}

#[test]
fn load_more_before_any_search_is_a_noop() {
    let mut store = SearchStore::new();
    assert_eq!(store.load_more(), None);
    assert_eq!(store.phase(), SearchPhase::Idle);
}

#[test]
fn blank_query_is_ignored() {
    let mut store = SearchStore::new();
    assert_eq!(store.start_search("   "), None);
    assert_eq!(store.phase(), SearchPhase::Idle);
}

#[test]
fn rate_limit_failure_stops_pagination() {
    let mut store = SearchStore::new();
    let request = store.start_search("Batman").unwrap();
    store.apply(
        request.generation,
        Err(LoadError::new(
            FailureKind::RateLimited,
            "API Request limit reached! Please try again later.",
        )),
    );

    let err = store.error().expect("error recorded");
    assert!(err.is_rate_limited());
    assert!(err.message.contains("Request limit"));
    assert!(!store.has_more());
    assert_eq!(store.phase(), SearchPhase::Failed);
    assert_eq!(store.load_more(), None);
}

#[test]
fn failure_on_later_page_keeps_accumulated_results() {
    let mut store = SearchStore::new();
    let request = store.start_search("Batman").unwrap();
    store.apply(request.generation, page(movies("a", 10), 30));
    let request = store.load_more().unwrap();
    store.apply(
        request.generation,
        Err(LoadError::new(FailureKind::Network, "Network error: reset")),
    );

    assert_eq!(store.results().len(), 10);
    assert!(!store.has_more());
    assert_eq!(store.error().unwrap().kind, FailureKind::Network);
}

#[test]
fn new_search_discards_superseded_response() {
    let mut store = SearchStore::new();
    let old = store.start_search("Batman").unwrap();
    let new = store.start_search("Superman").unwrap();

    assert!(!store.apply(old.generation, page(movies("bat", 10), 50)));
    assert!(store.results().is_empty());
    assert!(store.is_loading());

    assert!(store.apply(new.generation, page(movies("sup", 5), 5)));
    assert_eq!(store.query(), "Superman");
    assert_eq!(store.results()[0].id, "sup0");
}

#[test]
fn duplicates_across_pages_are_kept() {
    let mut store = SearchStore::new();
    let request = store.start_search("Batman").unwrap();
    store.apply(request.generation, page(movies("dup", 2), 4));
    let request = store.load_more().unwrap();
    store.apply(request.generation, page(movies("dup", 2), 4));

    let ids: Vec<_> = store.results().iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids, vec!["dup0", "dup1", "dup0", "dup1"]);
    assert!(!store.has_more());
}

#[test]
fn empty_later_page_stops_pagination() {
    let mut store = SearchStore::new();
    let request = store.start_search("Batman").unwrap();
    store.apply(request.generation, page(movies("a", 10), 40));
    let request = store.load_more().unwrap();
    store.apply(request.generation, page(Vec::new(), 40));

    assert_eq!(store.results().len(), 10);
    assert!(!store.has_more());
}

#[test]
fn reset_keeps_query_and_clears_pages() {
    let mut store = SearchStore::new();
    let request = store.start_search("Batman").unwrap();
    store.apply(request.generation, page(movies("a", 10), 23));
    let request = store.load_more().unwrap();

    store.reset();
    assert_eq!(store.query(), "Batman");
    assert!(store.results().is_empty());
    assert_eq!(store.page(), 1);
    assert!(store.has_more());
    assert_eq!(store.error(), None);
    assert_eq!(store.phase(), SearchPhase::Idle);

    // The page requested before the reset must not land afterwards.
    assert!(!store.apply(request.generation, page(movies("b", 10), 23)));
    assert!(store.results().is_empty());
}

#[test]
fn reset_then_search_matches_fresh_store() {
    fn run(store: &mut SearchStore) -> SearchRequest {
        let request = store.start_search("Batman").unwrap();
        store.apply(request.generation, page(movies("a", 10), 23));
        request
    }

    let mut fresh = SearchStore::new();
    run(&mut fresh);

    let mut reused = SearchStore::new();
    let request = reused.start_search("Alien").unwrap();
    reused.apply(request.generation, Err(LoadError::new(FailureKind::NotFound, "Movie not found!")));
    reused.reset();
    run(&mut reused);

    assert_eq!(reused.query(), fresh.query());
    assert_eq!(reused.page(), fresh.page());
    assert_eq!(reused.results(), fresh.results());
    assert_eq!(reused.total_count(), fresh.total_count());
    assert_eq!(reused.has_more(), fresh.has_more());
    assert_eq!(reused.error(), fresh.error());
    assert_eq!(reused.phase(), fresh.phase());
}
