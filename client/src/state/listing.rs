//! Fetch state for the searchable list pages.
//!
//! DESIGN
//! ======
//! Responses can arrive out of order when the user types quickly, so every
//! request carries a sequence number and only the latest one may land.

#[cfg(test)]
#[path = "listing_test.rs"]
mod listing_test;

/// Items, search text and request status for one list page.
#[derive(Clone, Debug)]
pub struct ListingState<T> {
    pub items: Vec<T>,
    pub search: String,
    pub loading: bool,
    pub error: Option<String>,
    seq: u64,
}

impl<T> Default for ListingState<T> {
    fn default() -> Self {
        Self { items: Vec::new(), search: String::new(), loading: false, error: None, seq: 0 }
    }
}

impl<T> ListingState<T> {
    /// Seed the search box from route props.
    #[must_use]
    pub fn with_search(init_search: Option<String>) -> Self {
        Self { search: init_search.unwrap_or_default(), ..Self::default() }
    }

    /// Mark a new request in flight and return its sequence number.
    pub fn begin(&mut self) -> u64 {
        self.seq += 1;
        self.loading = true;
        self.error = None;
        self.seq
    }

    /// Apply a response. Returns `false` when `seq` was superseded.
    pub fn finish(&mut self, seq: u64, result: Result<Vec<T>, String>) -> bool {
        if seq != self.seq {
            return false;
        }
        self.loading = false;
        match result {
            Ok(items) => self.items = items,
            Err(e) => {
                self.items.clear();
                self.error = Some(e);
            }
        }
        true
    }
}
