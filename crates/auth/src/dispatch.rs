//! Fallback dispatch across the active providers.

use tracing::trace;

use crate::error::{Error, Result};
use crate::registry::AuthManager;
use crate::types::{DetectedUser, LoginResult, RequestContext};

impl AuthManager {
    /// Ask each active provider in fallback order to detect a user from the
    /// bare request (cookie, header, ...).
    ///
    /// Returns the first hit. `Ok(None)` means every provider passed: the
    /// request is simply unauthenticated. A hard provider error aborts the
    /// search; providers after the failing one are not consulted.
    pub async fn detect_user(&self, ctx: &mut RequestContext) -> Result<Option<DetectedUser>> {
        let state = self.state.read().await;
        for provider in state.active_providers() {
            match provider.detect_user(ctx).await {
                Ok(Some(user)) => {
                    trace!(provider = provider.id(), user = %user.username, "detected user");
                    return Ok(Some(user));
                }
                Ok(None) => {}
                Err(source) => {
                    return Err(Error::Provider {
                        provider: provider.id().to_string(),
                        operation: "detect_user",
                        source,
                    });
                }
            }
        }
        Ok(None)
    }

    /// Hand the submitted login form to each active provider in fallback
    /// order until one claims the user.
    ///
    /// Same shape as [`detect_user`](Self::detect_user): `Ok(None)` when no
    /// provider recognizes the credentials, immediate abort on a hard
    /// error.
    pub async fn login(&self, ctx: &mut RequestContext) -> Result<Option<LoginResult>> {
        let state = self.state.read().await;
        for provider in state.active_providers() {
            match provider.login(ctx).await {
                Ok(Some(result)) => {
                    trace!(provider = provider.id(), user = %result.username, "login succeeded");
                    return Ok(Some(result));
                }
                Ok(None) => {}
                Err(source) => {
                    return Err(Error::Provider {
                        provider: provider.id().to_string(),
                        operation: "login",
                        source,
                    });
                }
            }
        }
        Ok(None)
    }

    /// Tell every active provider to drop its persistent login state.
    ///
    /// Not a fallback search: all active providers are invoked in order,
    /// but the first error stops the broadcast and providers after it are
    /// not invoked.
    pub async fn logout(&self, ctx: &mut RequestContext) -> Result<()> {
        let state = self.state.read().await;
        for provider in state.active_providers() {
            if let Err(source) = provider.logout(ctx).await {
                return Err(Error::Provider {
                    provider: provider.id().to_string(),
                    operation: "logout",
                    source,
                });
            }
        }
        Ok(())
    }
}
