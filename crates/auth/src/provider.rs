//! The pluggable authentication provider capability.

use async_trait::async_trait;

use crate::types::{DetectedUser, LoginField, LoginResult, RequestContext};

/// Outcome of handing the deployment configuration to a provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderSetup {
    /// The provider found its settings and may serve requests.
    Configured,
    /// The configuration carries no section for this provider. Not an
    /// error; the provider just stays out of the active set.
    Unconfigured,
}

/// One authentication method behind the gateway.
///
/// Implementations are registered once at startup and driven through the
/// [`AuthManager`](crate::registry::AuthManager). All methods other than
/// [`configure`](Self::configure) run under a shared lock and must not
/// assume exclusive access to anything but the request context.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Stable unique identifier. Doubles as the form key in the frontend
    /// field mapping.
    fn id(&self) -> &str;

    /// Load this provider's settings from the raw configuration blob.
    ///
    /// The blob is the whole deployment configuration; the provider picks
    /// out its own section and returns [`ProviderSetup::Unconfigured`] if
    /// there is none.
    fn configure(&mut self, config: &[u8]) -> anyhow::Result<ProviderSetup>;

    /// Detect a user without a login form, e.g. from a cookie or header.
    ///
    /// `Ok(None)` means this provider has no user for the request and the
    /// next one should be asked.
    async fn detect_user(&self, ctx: &mut RequestContext)
        -> anyhow::Result<Option<DetectedUser>>;

    /// Handle a submitted login form.
    ///
    /// On success the provider is expected to have staged whatever state
    /// (usually a session cookie) its own `detect_user` needs next time.
    async fn login(&self, ctx: &mut RequestContext) -> anyhow::Result<Option<LoginResult>>;

    /// Form fields this provider wants on the login page. Empty means the
    /// provider offers no interactive login.
    fn login_fields(&self) -> Vec<LoginField>;

    /// Destroy any persistent login state for the request's user.
    async fn logout(&self, ctx: &mut RequestContext) -> anyhow::Result<()>;

    /// Whether logins through this provider can hand back MFA
    /// configurations for downstream verification.
    fn supports_mfa(&self) -> bool;
}
