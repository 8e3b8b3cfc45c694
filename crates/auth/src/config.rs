//! Login page configuration consulted by the field aggregator.

use serde::{Deserialize, Serialize};

/// Options controlling the login form projection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginUiConfig {
    /// Suppress the synthetic MFA token field even for providers that
    /// support MFA.
    #[serde(default)]
    pub hide_mfa_field: bool,
}
