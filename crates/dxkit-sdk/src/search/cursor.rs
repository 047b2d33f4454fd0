use std::collections::VecDeque;
use std::iter::FusedIterator;

use dxkit_types::{FindPage, Query};
use serde_json::Value;
use tracing::debug;

use super::fields::SearchKind;
use crate::error::{Error, Result};
use crate::transport::{RequestOptions, Transport};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Ready,
    Exhausted,
}

/// Lazy sequence of search results.
///
/// Pages are fetched on demand: a request is issued only once every result
/// of the previous page has been handed out. A failed request is yielded once
/// and ends the sequence.
pub struct PageCursor<'a, T: Transport + ?Sized> {
    transport: &'a T,
    kind: SearchKind,
    query: Query,
    options: RequestOptions,
    buffer: VecDeque<Value>,
    state: State,
    requests: usize,
}

impl<'a, T: Transport + ?Sized> PageCursor<'a, T> {
    pub fn new(transport: &'a T, kind: SearchKind, query: Query, options: RequestOptions) -> Self {
        Self {
            transport,
            kind,
            query,
            options,
            buffer: VecDeque::new(),
            state: State::Ready,
            requests: 0,
        }
    }

    pub fn kind(&self) -> SearchKind {
        self.kind
    }

    /// The query the next request would carry.
    pub fn query(&self) -> &Query {
        &self.query
    }

    /// Options sent with every page request.
    pub fn options(&self) -> &RequestOptions {
        &self.options
    }

    pub fn requests_issued(&self) -> usize {
        self.requests
    }

    pub fn is_exhausted(&self) -> bool {
        self.state == State::Exhausted && self.buffer.is_empty()
    }

    fn fetch(&mut self) -> Result<()> {
        self.requests += 1;
        debug!(
            route = self.kind.route(),
            request = self.requests,
            starting = self.query.starting().is_some(),
            "fetching page"
        );

        let response = self
            .transport
            .call(self.kind.route(), &self.query.to_value(), &self.options)?;
        let page: FindPage = serde_json::from_value(response)
            .map_err(|e| Error::InvalidResponse(format!("malformed find response: {}", e)))?;

        debug!(results = page.results.len(), more = page.next.is_some(), "page received");
        self.buffer.extend(page.results);

        match page.next {
            Some(next) if self.kind.paginated() => self.query.set_starting(next),
            _ => self.state = State::Exhausted,
        }
        Ok(())
    }
}

impl<T: Transport + ?Sized> Iterator for PageCursor<'_, T> {
    type Item = Result<Value>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(item) = self.buffer.pop_front() {
                return Some(Ok(item));
            }
            if self.state == State::Exhausted {
                return None;
            }
            if let Err(e) = self.fetch() {
                self.state = State::Exhausted;
                return Some(Err(e));
            }
        }
    }
}

impl<T: Transport + ?Sized> FusedIterator for PageCursor<'_, T> {}
