//! Error types for the authentication core.

use thiserror::Error;

/// Result type alias using the authentication core [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Failures surfaced to the surrounding gateway.
///
/// The two absorbed provider outcomes, "unconfigured" and "no user here",
/// never appear: they are ordinary values
/// ([`ProviderSetup::Unconfigured`](crate::provider::ProviderSetup) and
/// `Ok(None)` respectively), not errors.
#[derive(Error, Debug)]
pub enum Error {
    /// An activation pass ended with zero configured providers.
    #[error("no authentication provider accepted the supplied configuration")]
    NoProvidersConfigured,

    /// A provider rejected the configuration outright; the activation pass
    /// was aborted and the previously active providers kept.
    #[error("provider {provider} failed to configure: {source}")]
    Configure {
        provider: String,
        #[source]
        source: anyhow::Error,
    },

    /// A provider failed while handling a request; providers after it were
    /// not consulted.
    #[error("provider {provider} failed during {operation}: {source}")]
    Provider {
        provider: String,
        operation: &'static str,
        #[source]
        source: anyhow::Error,
    },
}
