//! Lazy, forward-only iteration over every record of a resource.
//!
//! A [`QuerySet`] holds one page of raw records at a time. When the caller
//! has consumed the current page the next one is fetched, replacing the
//! buffer. The total count is taken from the first page and never refreshed.

use crate::api_client::Fetch;
use crate::error::Result;
use crate::models::Resource;
use serde_json::Value;
use std::fmt;
use std::marker::PhantomData;
use tracing::{debug, warn};

/// One page of a SWAPI listing.
#[derive(Debug, Clone, Default)]
pub struct PageEnvelope {
    pub count: usize,
    /// `false` only when the page explicitly reports `"next": null`.
    pub has_next: bool,
    pub results: Vec<Value>,
}

impl PageEnvelope {
    pub fn from_json(json: Value) -> Self {
        let count = json
            .get("count")
            .and_then(Value::as_u64)
            .and_then(|c| usize::try_from(c).ok())
            .unwrap_or(0);
        let has_next = !matches!(json.get("next"), Some(Value::Null));
        let results = match json {
            Value::Object(mut map) => match map.remove("results") {
                Some(Value::Array(items)) => items,
                _ => Vec::new(),
            },
            _ => Vec::new(),
        };

        Self {
            count,
            has_next,
            results,
        }
    }
}

pub struct QuerySet<'a, R, F: ?Sized> {
    client: &'a F,
    page: u32,
    results: Vec<Value>,
    has_next_page: bool,
    this_page_visited: usize,
    total_visited: usize,
    data_count: usize,
    cut_short: bool,
    _resource: PhantomData<fn() -> R>,
}

impl<'a, R: Resource, F: Fetch + ?Sized> QuerySet<'a, R, F> {
    /// Fetch page 1 and position the cursor before its first record.
    pub fn new(client: &'a F) -> Result<Self> {
        let envelope = fetch_envelope(client, R::RESOURCE_NAME, 1)?;
        debug!(
            target: "queryset",
            "{}: {} objects, {} on page 1",
            R::QUERY_SET_NAME,
            envelope.count,
            envelope.results.len()
        );

        Ok(Self {
            client,
            page: 1,
            results: envelope.results,
            has_next_page: envelope.has_next,
            this_page_visited: 0,
            total_visited: 0,
            data_count: envelope.count,
            cut_short: false,
            _resource: PhantomData,
        })
    }

    /// Produce the next record, or `Ok(None)` once the sequence is exhausted.
    ///
    /// A failed page fetch leaves the cursor where it was, so calling this
    /// again retries the same page.
    pub fn next_record(&mut self) -> Result<Option<R>> {
        if !self.has_more() {
            return Ok(None);
        }

        if self.this_page_visited >= self.results.len() {
            if !self.has_next_page {
                return Ok(self.finish_early("upstream reports no further pages"));
            }

            let next_page = self.page + 1;
            let envelope = fetch_envelope(self.client, R::RESOURCE_NAME, next_page)?;
            debug!(
                target: "queryset",
                "{}: page {} holds {} records",
                R::QUERY_SET_NAME,
                next_page,
                envelope.results.len()
            );

            self.page = next_page;
            self.results = envelope.results;
            self.has_next_page = envelope.has_next;
            self.this_page_visited = 0;

            if self.results.is_empty() {
                return Ok(self.finish_early("upstream returned an empty page"));
            }
        }

        let record = R::from_json(&self.results[self.this_page_visited]);
        self.this_page_visited += 1;
        self.total_visited += 1;
        Ok(Some(record))
    }

    /// Total number of records, as reported by the first page. Never
    /// triggers a request. (`Iterator::count` drains the sequence instead.)
    pub fn total_count(&self) -> usize {
        self.data_count
    }

    pub fn has_more(&self) -> bool {
        !self.cut_short && self.total_visited < self.data_count
    }

    /// Records produced so far.
    pub fn consumed(&self) -> usize {
        self.total_visited
    }

    /// Page currently buffered (1-based).
    pub fn page(&self) -> u32 {
        self.page
    }

    fn finish_early(&mut self, reason: &str) -> Option<R> {
        warn!(
            target: "queryset",
            "{}: {} after {} of {} records (page {})",
            R::QUERY_SET_NAME,
            reason,
            self.total_visited,
            self.data_count,
            self.page
        );
        self.cut_short = true;
        None
    }
}

fn fetch_envelope<F: Fetch + ?Sized>(client: &F, resource: &str, page: u32) -> Result<PageEnvelope> {
    client.fetch_page(resource, page).map(PageEnvelope::from_json)
}

/// Yields `Err` for a failed page fetch without advancing, so a consumer that
/// keeps polling after an error retries the same page.
impl<'a, R: Resource, F: Fetch + ?Sized> Iterator for QuerySet<'a, R, F> {
    type Item = Result<R>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_record().transpose()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.has_more() {
            let buffered = self.results.len().saturating_sub(self.this_page_visited);
            let remaining = self.data_count - self.total_visited;
            (buffered.min(remaining), Some(remaining))
        } else {
            (0, Some(0))
        }
    }
}

impl<'a, R: Resource, F: ?Sized> fmt::Display for QuerySet<'a, R, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} objects", R::QUERY_SET_NAME, self.data_count)
    }
}

impl<'a, R: Resource, F: ?Sized> fmt::Debug for QuerySet<'a, R, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct(R::QUERY_SET_NAME)
            .field("page", &self.page)
            .field("buffered", &self.results.len())
            .field("this_page_visited", &self.this_page_visited)
            .field("total_visited", &self.total_visited)
            .field("data_count", &self.data_count)
            .finish()
    }
}
