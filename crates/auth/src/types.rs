//! Value types shared between the gateway, its providers, and the login UI.

use http::request::Parts;
use http::HeaderMap;
use serde::{Deserialize, Serialize};

/// One input field a provider wants rendered on the login form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginField {
    /// Human-readable label shown next to the input.
    pub label: String,
    /// Form parameter name the provider reads back on login.
    pub name: String,
    pub placeholder: String,
    /// HTML input type ("text", "password", ...).
    #[serde(rename = "type")]
    pub field_type: String,
}

/// MFA configuration handed back by a provider's login step.
///
/// Opaque to this crate: it is forwarded to the MFA verification layer
/// without being inspected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MfaConfig {
    /// MFA method the verification layer should use.
    pub provider: String,
    #[serde(default)]
    pub attributes: serde_json::Map<String, serde_json::Value>,
}

/// A user resolved by a provider, with group memberships attached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetectedUser {
    pub username: String,
    pub groups: Vec<String>,
}

/// Outcome of a successful interactive login.
#[derive(Debug, Clone, PartialEq)]
pub struct LoginResult {
    pub username: String,
    /// MFA configurations the downstream challenge step should verify.
    /// Empty when the provider has none for this user.
    pub mfa_configs: Vec<MfaConfig>,
}

/// The live HTTP exchange threaded through every provider call.
///
/// Providers read cookies and headers from `request` and stage response
/// headers (session cookies) in `response`; the dispatch layer itself never
/// looks inside.
#[derive(Debug)]
pub struct RequestContext {
    /// Request head as received by the surrounding router.
    pub request: Parts,
    /// Headers to be merged into the eventual response.
    pub response: HeaderMap,
}

impl RequestContext {
    pub fn new(request: Parts) -> Self {
        Self {
            request,
            response: HeaderMap::new(),
        }
    }
}
