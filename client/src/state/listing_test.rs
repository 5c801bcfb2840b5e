use super::*;

#[test]
fn listing_default_is_idle_and_empty() {
    let state = ListingState::<String>::default();
    assert!(state.items.is_empty());
    assert!(state.search.is_empty());
    assert!(!state.loading);
    assert!(state.error.is_none());
}

#[test]
fn with_search_seeds_search_text() {
    let state = ListingState::<String>::with_search(Some("heart".to_owned()));
    assert_eq!(state.search, "heart");
    assert!(ListingState::<String>::with_search(None).search.is_empty());
}

#[test]
fn finish_applies_latest_response() {
    let mut state = ListingState::default();
    let seq = state.begin();
    assert!(state.loading);
    assert!(state.finish(seq, Ok(vec!["a".to_owned()])));
    assert!(!state.loading);
    assert_eq!(state.items, vec!["a"]);
}

#[test]
fn finish_drops_superseded_response() {
    let mut state = ListingState::default();
    let first = state.begin();
    let second = state.begin();
    assert!(!state.finish(first, Ok(vec!["stale".to_owned()])));
    assert!(state.loading);
    assert!(state.items.is_empty());
    assert!(state.finish(second, Ok(vec!["fresh".to_owned()])));
    assert_eq!(state.items, vec!["fresh"]);
}

#[test]
fn finish_error_clears_items_and_records_message() {
    let mut state = ListingState::default();
    let seq = state.begin();
    state.finish(seq, Ok(vec![1, 2]));
    let seq = state.begin();
    assert!(state.finish(seq, Err("boom".to_owned())));
    assert!(state.items.is_empty());
    assert_eq!(state.error.as_deref(), Some("boom"));
    state.begin();
    assert!(state.error.is_none());
}
