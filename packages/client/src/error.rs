use thiserror::Error;

/// Error type for data-access operations.
///
/// The split between `Transport` and `Api` is the load-bearing part of the
/// layer: only `Transport` may trigger the local fallback, while `Api`
/// carries a server-side functional failure that must reach the caller
/// unchanged.
#[derive(Debug, Error)]
pub enum Error {
    /// The call never completed at the transport level.
    #[error("Network error: {0}")]
    Transport(#[source] reqwest::Error),

    /// The server answered with a non-success status. `message` is the
    /// server-provided text, surfaced verbatim.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// The server answered 2xx but the body did not parse.
    #[error("Invalid response body: {0}")]
    Decode(String),

    /// The local state store misbehaved (I/O or corrupt JSON).
    #[error("Local state error: {0}")]
    State(String),

    /// An operation that needs a signed-in user found no session.
    #[error("No session")]
    NoSession,
}

impl Error {
    pub(crate) fn api(status: u16, message: impl Into<String>) -> Self {
        Error::Api {
            status,
            message: message.into(),
        }
    }

    /// True when this failure class is allowed to trigger the fallback.
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport(_))
    }
}
