//! transport::mock
//!
//! Mock transport implementation for deterministic testing.
//!
//! # Design
//!
//! The mock transport records every [`PushRequest`] it receives and can be
//! configured to fail with a specific [`TransportError`], so the task's
//! error-wrapping boundary can be exercised without a network or a real
//! repository.
//!
//! # Example
//!
//! ```
//! use capstan::task::credentials::CredentialsHandle;
//! use capstan::transport::{MockTransport, PushRequest, Transport};
//!
//! let transport = MockTransport::new();
//! let request = PushRequest {
//!     remote: "origin".to_string(),
//!     credentials: CredentialsHandle::Interactive,
//!     push_tags: false,
//!     push_all: false,
//!     force: false,
//! };
//!
//! transport.push(&request).unwrap();
//! assert_eq!(transport.requests().len(), 1);
//! assert_eq!(transport.requests()[0].remote, "origin");
//! ```

use std::sync::{Arc, Mutex};

use super::traits::{PushRequest, Transport, TransportError};

/// Mock transport for testing.
///
/// Thread-safe via internal `Arc<Mutex<...>>` wrapping; clones share state.
#[derive(Debug, Clone)]
pub struct MockTransport {
    /// Internal state shared across clones.
    inner: Arc<Mutex<MockTransportInner>>,
}

/// Internal mutable state.
#[derive(Debug, Default)]
struct MockTransportInner {
    /// Recorded push requests for verification.
    requests: Vec<PushRequest>,
    /// Error to fail the next pushes with, if configured.
    fail_with: Option<TransportError>,
}

impl MockTransport {
    /// Create a transport that accepts every push.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(MockTransportInner::default())),
        }
    }

    /// Create a transport that fails every push with the given error.
    pub fn failing(error: TransportError) -> Self {
        let transport = Self::new();
        transport.fail_with(error);
        transport
    }

    /// Configure the error future pushes fail with.
    pub fn fail_with(&self, error: TransportError) {
        self.inner.lock().unwrap().fail_with = Some(error);
    }

    /// Stop failing; future pushes succeed again.
    pub fn succeed(&self) {
        self.inner.lock().unwrap().fail_with = None;
    }

    /// All requests received so far, including failed ones.
    pub fn requests(&self) -> Vec<PushRequest> {
        self.inner.lock().unwrap().requests.clone()
    }
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for MockTransport {
    fn name(&self) -> &'static str {
        "mock"
    }

    fn push(&self, request: &PushRequest) -> Result<(), TransportError> {
        let mut inner = self.inner.lock().unwrap();
        inner.requests.push(request.clone());
        match &inner.fail_with {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }
}
