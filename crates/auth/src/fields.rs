//! Frontend projection of the active providers' login forms.

use std::collections::BTreeMap;

use crate::config::LoginUiConfig;
use crate::registry::AuthManager;
use crate::types::LoginField;

/// The synthetic field appended for MFA-capable providers.
pub fn mfa_login_field() -> LoginField {
    LoginField {
        label: "MFA Token".to_string(),
        name: "mfa-token".to_string(),
        placeholder: "123456".to_string(),
        field_type: "text".to_string(),
    }
}

impl AuthManager {
    /// Form fields per active provider, keyed by provider id.
    ///
    /// Providers with no interactive login (empty field list) are omitted
    /// entirely. MFA-capable providers get one extra token field unless the
    /// deployment hides it.
    pub async fn login_fields(&self, ui: &LoginUiConfig) -> BTreeMap<String, Vec<LoginField>> {
        let state = self.state.read().await;
        let mut fields = BTreeMap::new();
        for provider in state.active_providers() {
            let mut list = provider.login_fields();
            if list.is_empty() {
                continue;
            }
            if provider.supports_mfa() && !ui.hide_mfa_field {
                list.push(mfa_login_field());
            }
            fields.insert(provider.id().to_string(), list);
        }
        fields
    }
}
