//! # Mock Transport for Testing
//!
//! Answers every request with a scripted `Outcome` and records what was sent.

use super::envelope::Envelope;
use super::http::{Endpoint, Outcome, Transport, Verb};
use std::cell::RefCell;
use std::collections::VecDeque;

/// One recorded transport call
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub verb: Verb,
    pub envelope: Envelope,
}

/// Transport that never touches the network
#[derive(Debug)]
pub struct MockTransport {
    endpoint: Endpoint,
    outcomes: RefCell<VecDeque<Outcome>>,
    fallback: Outcome,
    requests: RefCell<Vec<RecordedRequest>>,
}

impl MockTransport {
    /// Answer every request with `outcome`
    pub fn always(outcome: Outcome) -> Self {
        Self {
            endpoint: Endpoint::default(),
            outcomes: RefCell::new(VecDeque::new()),
            fallback: outcome,
            requests: RefCell::new(Vec::new()),
        }
    }

    /// Answer with `outcomes` in order, then with `fallback`
    pub fn sequence(outcomes: Vec<Outcome>, fallback: Outcome) -> Self {
        Self {
            outcomes: RefCell::new(outcomes.into()),
            ..Self::always(fallback)
        }
    }

    pub fn with_endpoint(mut self, endpoint: Endpoint) -> Self {
        self.endpoint = endpoint;
        self
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.borrow().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }
}

impl Transport for MockTransport {
    fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    fn request(&self, verb: Verb, envelope: &Envelope) -> Outcome {
        self.requests.borrow_mut().push(RecordedRequest {
            verb,
            envelope: envelope.clone(),
        });
        self.outcomes
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| self.fallback.clone())
    }
}
