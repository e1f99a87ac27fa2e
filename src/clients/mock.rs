//! # Mock User API
//!
//! `MockUserApi` implements [`UserApi`] entirely in memory. Queue the calls
//! you expect and the answers to give, hand the mock to the code under test,
//! then call [`verify`](MockUserApi::verify).
//!
//! Use it to test view logic without a directory task, and to inject
//! failures that are awkward to produce with the real directory.
//!
//! ```rust
//! use user_console::clients::mock::MockUserApi;
//! use user_console::clients::{ApiError, UserApi};
//! use user_console::model::UserId;
//!
//! #[tokio::main]
//! async fn main() {
//!     let mock = MockUserApi::new();
//!     mock.expect_get(UserId(1))
//!         .return_err(ApiError::Unavailable("offline".to_string()));
//!
//!     let result = mock.get(UserId(1)).await;
//!     assert!(matches!(result, Err(ApiError::Unavailable(_))));
//!     mock.verify();
//! }
//! ```
//!
//! Calls are answered strictly in the order the expectations were queued.
//! A call that does not match the next expectation panics.

use super::error::ApiError;
use super::user_api::UserApi;
use crate::model::{Page, User, UserCreate, UserId, UserUpdate};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};

/// A call received by the mock, with its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    List(u32),
    Get(UserId),
    Create(UserCreate),
    Update(UserId, UserUpdate),
    Delete(UserId),
}

enum Expectation {
    List {
        page: u32,
        response: Result<Page<User>, ApiError>,
    },
    Get {
        id: UserId,
        response: Result<User, ApiError>,
    },
    Create {
        response: Result<User, ApiError>,
    },
    Update {
        id: UserId,
        response: Result<User, ApiError>,
    },
    Delete {
        id: UserId,
        response: Result<bool, ApiError>,
    },
}

#[derive(Default)]
struct State {
    expectations: VecDeque<Expectation>,
    calls: Vec<Call>,
}

/// In-memory [`UserApi`] with expectation tracking.
#[derive(Clone, Default)]
pub struct MockUserApi {
    state: Arc<Mutex<State>>,
}

impl MockUserApi {
    /// Creates a mock with no expectations.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn builder<T>(
        &self,
        make: impl FnOnce(Result<T, ApiError>) -> Expectation + Send + 'static,
    ) -> ExpectationBuilder<T> {
        ExpectationBuilder {
            state: self.state.clone(),
            make: Box::new(make),
        }
    }

    /// Expects a `list` call for `page`.
    pub fn expect_list(&self, page: u32) -> ExpectationBuilder<Page<User>> {
        self.builder(move |response| Expectation::List { page, response })
    }

    /// Expects a `get` call for `id`.
    pub fn expect_get(&self, id: UserId) -> ExpectationBuilder<User> {
        self.builder(move |response| Expectation::Get { id, response })
    }

    /// Expects a `create` call.
    pub fn expect_create(&self) -> ExpectationBuilder<User> {
        self.builder(|response| Expectation::Create { response })
    }

    /// Expects an `update` call for `id`.
    pub fn expect_update(&self, id: UserId) -> ExpectationBuilder<User> {
        self.builder(move |response| Expectation::Update { id, response })
    }

    /// Expects a `delete` call for `id`.
    pub fn expect_delete(&self, id: UserId) -> ExpectationBuilder<bool> {
        self.builder(move |response| Expectation::Delete { id, response })
    }

    /// Every call received so far, oldest first.
    pub fn calls(&self) -> Vec<Call> {
        self.lock().calls.clone()
    }

    /// Panics if any queued expectation was not consumed.
    pub fn verify(&self) {
        let remaining = self.lock().expectations.len();
        if remaining != 0 {
            panic!("Not all expectations were met. {remaining} remaining");
        }
    }

    fn next(&self, call: Call) -> Expectation {
        let mut state = self.lock();
        state.calls.push(call.clone());
        match state.expectations.pop_front() {
            Some(expectation) => expectation,
            None => panic!("Unexpected call with no expectation left: {call:?}"),
        }
    }
}

/// Completes an expectation with the value to return.
pub struct ExpectationBuilder<T> {
    state: Arc<Mutex<State>>,
    make: Box<dyn FnOnce(Result<T, ApiError>) -> Expectation + Send>,
}

impl<T> ExpectationBuilder<T> {
    /// Answers the call with `value`.
    pub fn return_ok(self, value: T) {
        self.push(Ok(value));
    }

    /// Answers the call with `error`.
    pub fn return_err(self, error: ApiError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<T, ApiError>) {
        let expectation = (self.make)(response);
        self.state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .expectations
            .push_back(expectation);
    }
}

#[async_trait]
impl UserApi for MockUserApi {
    async fn list(&self, page: u32) -> Result<Page<User>, ApiError> {
        match self.next(Call::List(page)) {
            Expectation::List { page: expected, response } if expected == page => response,
            _ => panic!("Unexpected request or expectation mismatch: list({page})"),
        }
    }

    async fn get(&self, id: UserId) -> Result<User, ApiError> {
        match self.next(Call::Get(id)) {
            Expectation::Get { id: expected, response } if expected == id => response,
            _ => panic!("Unexpected request or expectation mismatch: get({id})"),
        }
    }

    async fn create(&self, params: UserCreate) -> Result<User, ApiError> {
        match self.next(Call::Create(params)) {
            Expectation::Create { response } => response,
            _ => panic!("Unexpected request or expectation mismatch: create"),
        }
    }

    async fn update(&self, id: UserId, update: UserUpdate) -> Result<User, ApiError> {
        match self.next(Call::Update(id, update)) {
            Expectation::Update { id: expected, response } if expected == id => response,
            _ => panic!("Unexpected request or expectation mismatch: update({id})"),
        }
    }

    async fn delete(&self, id: UserId) -> Result<bool, ApiError> {
        match self.next(Call::Delete(id)) {
            Expectation::Delete { id: expected, response } if expected == id => response,
            _ => panic!("Unexpected request or expectation mismatch: delete({id})"),
        }
    }
}
