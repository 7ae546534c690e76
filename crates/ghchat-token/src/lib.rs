//! Fine-grained token URL builder
//!
//! Builds a prefilled link to the GitHub fine-grained personal access
//! token settings page. Pure string work - the generated token itself
//! is copied back by the user, never received by this program.

use url::form_urlencoded::Serializer;

/// Base URL of the GitHub fine-grained token settings page
pub const TOKEN_SETTINGS_URL: &str = "https://github.com/settings/personal-access-tokens/new";

/// Form fields prefilled on the token settings page.
///
/// Empty fields are omitted from the generated query string; no other
/// validation is applied.
#[derive(Debug, Clone, Default)]
pub struct TokenForm {
    pub name: String,
    pub description: String,
    pub expiration: String,
    pub organization: String,
}

impl TokenForm {
    /// Build the settings-page URL with non-empty fields as query
    /// parameters, in fixed order: name, description, expiration,
    /// organization.
    pub fn build_url(&self) -> String {
        let fields = [
            ("name", &self.name),
            ("description", &self.description),
            ("expiration", &self.expiration),
            ("organization", &self.organization),
        ];

        let mut query = Serializer::new(String::new());
        let mut any = false;
        for (key, value) in fields {
            if !value.is_empty() {
                query.append_pair(key, value);
                any = true;
            }
        }

        if any {
            format!("{}?{}", TOKEN_SETTINGS_URL, query.finish())
        } else {
            TOKEN_SETTINGS_URL.to_string()
        }
    }
}
