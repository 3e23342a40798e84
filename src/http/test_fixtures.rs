//! Shared canned HTTP client for pipeline tests.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::{CardError, Result};

use super::HttpClient;

enum MockResponse {
    Body(String),
    Status(u16),
    Timeout,
}

/// Mock HTTP client that answers by exact URL and records every request.
///
/// Unknown URLs answer with HTTP 404.
#[derive(Default)]
pub struct MockHttpClient {
    routes: HashMap<String, MockResponse>,
    requests: RefCell<Vec<String>>,
    posted: RefCell<Vec<String>>,
}

impl MockHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_body(mut self, url: &str, body: &str) -> Self {
        self.routes
            .insert(url.to_string(), MockResponse::Body(body.to_string()));
        self
    }

    pub fn with_status(mut self, url: &str, status: u16) -> Self {
        self.routes
            .insert(url.to_string(), MockResponse::Status(status));
        self
    }

    pub fn with_timeout(mut self, url: &str) -> Self {
        self.routes.insert(url.to_string(), MockResponse::Timeout);
        self
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }

    pub fn posted_bodies(&self) -> Vec<String> {
        self.posted.borrow().clone()
    }

    fn respond(&self, url: &str) -> Result<String> {
        self.requests.borrow_mut().push(url.to_string());
        match self.routes.get(url) {
            Some(MockResponse::Body(body)) => Ok(body.clone()),
            Some(MockResponse::Status(status)) => Err(CardError::HttpStatus {
                url: url.to_string(),
                status: *status,
            }),
            Some(MockResponse::Timeout) => Err(CardError::Transport {
                url: url.to_string(),
                message: "request timed out".to_string(),
            }),
            None => Err(CardError::HttpStatus {
                url: url.to_string(),
                status: 404,
            }),
        }
    }
}

impl HttpClient for MockHttpClient {
    fn get(&self, url: &str) -> Result<String> {
        self.respond(url)
    }

    fn post_json(&self, url: &str, body: &str) -> Result<String> {
        self.posted.borrow_mut().push(body.to_string());
        self.respond(url)
    }
}
