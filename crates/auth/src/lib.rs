//! Provider orchestration core for the AuthGate login gateway.
//!
//! Authentication methods (cookie session, header, form login, external
//! identity providers) plug in behind the [`AuthProvider`] trait. The
//! gateway registers every provider it was built with at startup, activates
//! the subset the deployment configuration enables, and then consults the
//! active providers in registration order to detect, log in, and log out
//! users.
//!
//! Concrete providers, HTTP routing, and MFA token verification live
//! elsewhere; this crate only decides *which* provider answers a request
//! and propagates that provider's verdict.

pub mod config;
pub mod error;
pub mod fields;
pub mod provider;
pub mod registry;
pub mod types;

mod dispatch;

pub use config::LoginUiConfig;
pub use error::{Error, Result};
pub use fields::mfa_login_field;
pub use provider::{AuthProvider, ProviderSetup};
pub use registry::AuthManager;
pub use types::{DetectedUser, LoginField, LoginResult, MfaConfig, RequestContext};

/// AuthGate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
