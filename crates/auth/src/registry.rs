//! Provider registry and activation.

use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::provider::{AuthProvider, ProviderSetup};

/// Registry plus active subset, guarded by one reader/writer lock.
///
/// `active` holds indices into `registered`, so the active list is a
/// subsequence of the registration order by construction.
#[derive(Default)]
pub(crate) struct RegistryState {
    pub(crate) registered: Vec<Box<dyn AuthProvider>>,
    pub(crate) active: Vec<usize>,
}

impl RegistryState {
    /// Active providers in fallback order.
    pub(crate) fn active_providers(&self) -> impl Iterator<Item = &dyn AuthProvider> + '_ {
        self.active.iter().map(|&index| self.registered[index].as_ref())
    }
}

/// Owns every authentication provider the gateway was built with and the
/// subset activated by the current configuration.
///
/// One instance is shared by all request handlers. Request-path calls take
/// the lock shared; [`activate`](Self::activate) takes it exclusively, so a
/// reconfiguration never interleaves with an in-flight request.
pub struct AuthManager {
    pub(crate) state: RwLock<RegistryState>,
}

impl AuthManager {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(RegistryState::default()),
        }
    }

    /// Append a provider to the registry.
    ///
    /// Called once per provider during startup, before request traffic.
    /// Registration order is the fallback order for every dispatch
    /// operation. There is no way to remove a provider; deactivation
    /// happens by leaving it out of the next configuration.
    pub async fn register(&self, provider: Box<dyn AuthProvider>) {
        let mut state = self.state.write().await;
        state.registered.push(provider);
    }

    /// Run every registered provider's `configure` against `config` and
    /// swap in the subset that accepted it.
    ///
    /// All-or-nothing: a hard configure error aborts the pass and keeps the
    /// previously active providers, as does a pass where no provider
    /// accepts. May be called again later to apply a new configuration; it
    /// always walks the full registry, so a provider dropped from the
    /// configuration is deactivated by the same pass that activates others.
    pub async fn activate(&self, config: &[u8]) -> Result<()> {
        let mut state = self.state.write().await;

        let mut candidates = Vec::new();
        for (index, provider) in state.registered.iter_mut().enumerate() {
            match provider.configure(config) {
                Ok(ProviderSetup::Configured) => {
                    debug!(provider = provider.id(), "activated authentication provider");
                    candidates.push(index);
                }
                Ok(ProviderSetup::Unconfigured) => {
                    debug!(provider = provider.id(), "provider has no configuration, skipping");
                }
                Err(source) => {
                    return Err(Error::Configure {
                        provider: provider.id().to_string(),
                        source,
                    });
                }
            }
        }

        if candidates.is_empty() {
            return Err(Error::NoProvidersConfigured);
        }

        info!(active = candidates.len(), "authentication providers activated");
        state.active = candidates;
        Ok(())
    }

    /// Ids of the currently active providers, in fallback order.
    pub async fn active_ids(&self) -> Vec<String> {
        let state = self.state.read().await;
        state.active_providers().map(|p| p.id().to_string()).collect()
    }

    /// Whether any provider is active. The gateway refuses to serve login
    /// traffic until this is true.
    pub async fn has_active(&self) -> bool {
        let state = self.state.read().await;
        !state.active.is_empty()
    }
}

impl Default for AuthManager {
    fn default() -> Self {
        Self::new()
    }
}
