//! Tickets that let a page ignore replies to requests it has since replaced.
//!
//! A page calls [`LatestRequest::begin`] before spawning a fetch and only
//! writes the reply if [`LatestRequest::is_current`] still holds for its
//! ticket when the fetch finishes.

use std::cell::Cell;
use std::rc::Rc;

#[derive(Clone, Default)]
pub struct LatestRequest(Rc<Cell<u64>>);

impl LatestRequest {
    /// Start a new request. Every earlier ticket stops being current.
    pub fn begin(&self) -> u64 {
        let ticket = self.0.get() + 1;
        self.0.set(ticket);
        ticket
    }

    /// Drop whatever request is in flight without starting another.
    pub fn cancel(&self) {
        self.begin();
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.0.get() == ticket
    }
}
