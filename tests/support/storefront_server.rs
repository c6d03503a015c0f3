//! Wiremock-backed storefront endpoints for integration tests.
//!
//! Each scenario owns one runtime and one mock server; the provider under
//! test points its three endpoints at the server's `/products`, `/reviews`,
//! and `/sales` paths.

use std::cell::RefCell;
use std::io;
use std::rc::Rc;
use std::time::Duration;

use rstest_bdd::Slot;
use serde_json::Value;
use storefront::{Endpoints, FetchError, HttpDataProvider};
use tokio::runtime::Runtime;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Runtime handle that can be stored in an `rstest-bdd` Slot.
#[derive(Clone)]
pub struct SharedRuntime(Rc<RefCell<Runtime>>);

impl SharedRuntime {
    pub fn block_on<F: std::future::Future>(&self, future: F) -> F::Output {
        self.0.borrow().block_on(future)
    }
}

/// Starts the runtime and mock server on first use and returns the runtime.
///
/// # Errors
///
/// Returns an error if the Tokio runtime cannot be created.
pub fn start(
    runtime: &Slot<SharedRuntime>,
    server: &Slot<MockServer>,
) -> Result<SharedRuntime, io::Error> {
    let shared = match runtime.get() {
        Some(existing) => existing,
        None => {
            let created = SharedRuntime(Rc::new(RefCell::new(Runtime::new()?)));
            runtime.set(created.clone());
            created
        }
    };

    if server.with_ref(|_| ()).is_none() {
        server.set(shared.block_on(MockServer::start()));
    }
    Ok(shared)
}

/// Serves `body` with `status` for GET requests to `endpoint`.
pub fn serve(runtime: &SharedRuntime, server: &MockServer, endpoint: &str, status: u16, body: Value) {
    let mock = Mock::given(method("GET"))
        .and(path(endpoint))
        .respond_with(ResponseTemplate::new(status).set_body_json(body));
    runtime.block_on(mock.mount(server));
}

/// Builds an HTTP provider whose endpoints all point at `server`.
///
/// # Errors
///
/// Returns [`FetchError`] when the endpoints or client cannot be built.
pub fn provider_for(server: &MockServer) -> Result<HttpDataProvider, FetchError> {
    let base = server.uri();
    let endpoints = Endpoints::parse(
        &format!("{base}/products"),
        Some(&format!("{base}/reviews")),
        &format!("{base}/sales"),
    )?;
    HttpDataProvider::new(endpoints, Duration::from_secs(5))
}
