//! The fallback dispatcher at the heart of the data-access layer.

use std::env;
use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;

use sewa_domain::ErrorBody;

use crate::error::Error;
use crate::session::SessionContext;
use crate::state::{StateStore, StateStoreExt};

/// Where a result came from. `Fallback` is the explicit "offline mode"
/// flag: the value is locally synthesized and may be stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Server,
    Fallback,
}

/// A result of identical shape on both paths; callers that do not care
/// about provenance just call [`Sourced::into_inner`].
#[derive(Debug, Clone)]
pub struct Sourced<T> {
    pub value: T,
    pub origin: Origin,
}

impl<T> Sourced<T> {
    pub(crate) fn server(value: T) -> Self {
        Self {
            value,
            origin: Origin::Server,
        }
    }

    pub(crate) fn fallback(value: T) -> Self {
        Self {
            value,
            origin: Origin::Fallback,
        }
    }

    pub fn into_inner(self) -> T {
        self.value
    }

    pub fn is_fallback(&self) -> bool {
        self.origin == Origin::Fallback
    }
}

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    /// Bound on every outbound call; expiry classifies the call as a
    /// connectivity failure.
    pub request_timeout: Duration,
    /// Pause before serving a fallback result, simulating network delay.
    pub fallback_latency: Duration,
}

impl ClientConfig {
    pub fn from_env() -> Self {
        Self {
            base_url: env::var("SEWA_API_URL")
                .unwrap_or_else(|_| "http://localhost:3001".to_string()),
            ..Self::default()
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3001".to_string(),
            request_timeout: Duration::from_secs(10),
            fallback_latency: Duration::from_millis(800),
        }
    }
}

/// Client facade over the REST backend with local-fallback resilience.
pub struct ApiClient {
    http: reqwest::Client,
    config: ClientConfig,
    store: Arc<dyn StateStore>,
    session: SessionContext,
}

impl ApiClient {
    pub fn new(config: ClientConfig, store: Arc<dyn StateStore>) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(Error::Transport)?;
        let session = SessionContext::load(store.clone());
        Ok(Self {
            http,
            config,
            store,
            session,
        })
    }

    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }

    pub(crate) fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.http.get(self.url(path))
    }

    pub(crate) fn post<B: Serialize>(&self, path: &str, body: &B) -> reqwest::RequestBuilder {
        self.http.post(self.url(path)).json(body)
    }

    pub(crate) fn post_empty(&self, path: &str) -> reqwest::RequestBuilder {
        self.http.post(self.url(path))
    }

    pub(crate) fn patch<B: Serialize>(&self, path: &str, body: &B) -> reqwest::RequestBuilder {
        self.http.patch(self.url(path)).json(body)
    }

    /// Issue the call and classify the outcome.
    ///
    /// A completed response with a non-success status is a functional
    /// failure: the server-provided message comes back verbatim as
    /// [`Error::Api`] and never triggers the fallback.
    async fn send<T: DeserializeOwned>(&self, req: reqwest::RequestBuilder) -> Result<T, Error> {
        let resp = req.send().await.map_err(Error::Transport)?;
        let status = resp.status();

        if !status.is_success() {
            let message = match resp.json::<ErrorBody>().await {
                Ok(body) => body.message,
                Err(_) => status
                    .canonical_reason()
                    .unwrap_or("request failed")
                    .to_string(),
            };
            return Err(Error::api(status.as_u16(), message));
        }

        resp.json::<T>().await.map_err(|e| Error::Decode(e.to_string()))
    }

    /// Try the network, fall back to the local producer only on transport
    /// failure. Both paths yield the same `T`; the origin tag is the only
    /// way a caller can tell them apart.
    pub(crate) async fn try_or_fallback<T, F>(
        &self,
        endpoint: &str,
        req: reqwest::RequestBuilder,
        fallback: F,
    ) -> Result<Sourced<T>, Error>
    where
        T: DeserializeOwned,
        F: FnOnce() -> Result<T, Error>,
    {
        match self.send(req).await {
            Ok(value) => Ok(Sourced::server(value)),
            Err(Error::Transport(err)) => {
                tracing::warn!(endpoint, error = %err, "backend unreachable, falling back to local mode");
                tokio::time::sleep(self.config.fallback_latency).await;
                fallback().map(Sourced::fallback)
            }
            // Api / Decode / State failures propagate untouched.
            Err(other) => Err(other),
        }
    }

    /// Read a collection, materializing the seed on first access.
    pub(crate) fn read_seeded<T>(
        &self,
        key: &str,
        seed: fn() -> Vec<T>,
    ) -> Result<Vec<T>, Error>
    where
        T: DeserializeOwned + Serialize,
    {
        match self.store.get_as::<Vec<T>>(key)? {
            Some(items) => Ok(items),
            None => {
                let items = seed();
                self.store.put_as(key, &items)?;
                Ok(items)
            }
        }
    }

    /// Read a collection that starts out empty.
    pub(crate) fn read_collection<T>(&self, key: &str) -> Result<Vec<T>, Error>
    where
        T: DeserializeOwned,
    {
        Ok(self.store.get_as::<Vec<T>>(key)?.unwrap_or_default())
    }

    pub(crate) fn write_collection<T: Serialize>(
        &self,
        key: &str,
        items: &[T],
    ) -> Result<(), Error> {
        self.store.put_as(key, &items)
    }
}
