//! Screen context
//!
//! The object a hosted login page exposes to a custom screen: which screen
//! is being rendered, the client, the branding payload and the untrusted
//! query data forwarded from the authorization request.

use serde::Deserialize;
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

use crate::descriptor::{lenient, Branding, BrandingOverrides, BrandingSource};
use crate::error::{Result, ThemeError};

/// Authorization parameter that switches the login screen to passkey-only mode
pub const PASSKEY_ONLY_PARAM: &str = "ext-passkeyonly";

/// Client name used by [`ScreenContext::mock`]
pub const MOCK_CLIENT_NAME: &str = "Passkey Enrollment Demo";

/// Screen used by [`ScreenContext::mock`] when none is given
pub const DEFAULT_MOCK_SCREEN: &str = "passkey-enrollment";

const DEFAULT_PAGE_TITLE: &str = "Login";

/// Everything a custom screen receives from the login runtime
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScreenContext {
    #[serde(default, deserialize_with = "lenient")]
    pub screen: Option<ScreenInfo>,
    #[serde(default, deserialize_with = "lenient")]
    pub client: Option<ClientInfo>,
    #[serde(default, deserialize_with = "lenient")]
    pub branding: Option<Branding>,
    #[serde(default, deserialize_with = "lenient")]
    pub organization: Option<Organization>,
    #[serde(default, deserialize_with = "lenient")]
    pub untrusted_data: Option<UntrustedData>,
}

/// The screen being rendered. Accepts a bare name or a full object.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(from = "RawScreen")]
pub struct ScreenInfo {
    pub name: Option<String>,
    pub texts: Option<ScreenTexts>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawScreen {
    Name(String),
    Full {
        #[serde(default)]
        name: Option<String>,
        #[serde(default, deserialize_with = "lenient")]
        texts: Option<ScreenTexts>,
    },
}

impl From<RawScreen> for ScreenInfo {
    fn from(raw: RawScreen) -> Self {
        match raw {
            RawScreen::Name(name) => Self {
                name: Some(name),
                texts: None,
            },
            RawScreen::Full { name, texts } => Self { name, texts },
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScreenTexts {
    #[serde(default)]
    pub page_title: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct ClientInfo {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct Organization {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub branding: Option<BrandingOverrides>,
}

/// Query data forwarded verbatim from the authorization request
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UntrustedData {
    #[serde(default, deserialize_with = "lenient")]
    pub authorization_params: Option<Map<String, Value>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ScreenContext {
    /// Stand-in context for running a screen outside the login runtime
    pub fn mock(screen_name: Option<&str>) -> Self {
        let name = screen_name.unwrap_or(DEFAULT_MOCK_SCREEN);
        tracing::debug!("using mock context for screen {}", name);
        Self {
            screen: Some(ScreenInfo {
                name: Some(name.to_string()),
                texts: None,
            }),
            client: Some(ClientInfo {
                id: None,
                name: Some(MOCK_CLIENT_NAME.to_string()),
            }),
            ..Default::default()
        }
    }

    pub fn from_json_str(src: &str) -> Result<Self> {
        Ok(serde_json::from_str(src)?)
    }

    pub fn from_toml_str(src: &str) -> Result<Self> {
        Ok(toml::from_str(src)?)
    }

    /// Load a context file, picking the parser from the extension
    pub fn load(path: &Path) -> Result<Self> {
        let src = fs::read_to_string(path).map_err(|source| ThemeError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json_str(&src),
            Some("toml") => Self::from_toml_str(&src),
            other => Err(ThemeError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }

    pub fn with_branding(mut self, branding: Branding) -> Self {
        self.branding = Some(branding);
        self
    }

    pub fn with_organization_branding(mut self, overrides: BrandingOverrides) -> Self {
        self.organization
            .get_or_insert_with(Default::default)
            .branding = Some(overrides);
        self
    }

    pub fn screen_name(&self) -> Option<&str> {
        self.screen.as_ref()?.name.as_deref()
    }

    /// Document title for the screen, `"Login"` when the runtime gives none
    pub fn page_title(&self) -> &str {
        self.screen
            .as_ref()
            .and_then(|s| s.texts.as_ref())
            .and_then(|t| t.page_title.as_deref())
            .filter(|t| !t.is_empty())
            .unwrap_or(DEFAULT_PAGE_TITLE)
    }

    /// Whether the authorization request asked for passkey-only login.
    ///
    /// The parameter is looked up in the authorization params first and then
    /// at the top level of the untrusted data.
    pub fn passkey_only(&self) -> bool {
        let Some(data) = &self.untrusted_data else {
            return false;
        };
        let value = data
            .authorization_params
            .as_ref()
            .and_then(|params| params.get(PASSKEY_ONLY_PARAM))
            .filter(|v| is_truthy_json(v))
            .or_else(|| data.extra.get(PASSKEY_ONLY_PARAM));

        match value {
            Some(Value::Bool(b)) => *b,
            Some(Value::String(s)) => s == "true",
            _ => false,
        }
    }
}

impl BrandingSource for ScreenContext {
    fn branding(&self) -> Option<&Branding> {
        self.branding.as_ref()
    }

    fn organization_branding(&self) -> Option<&BrandingOverrides> {
        self.organization.as_ref()?.branding.as_ref()
    }
}

fn is_truthy_json(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(false, |n| n != 0.0 && !n.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Whether `path` is served by the custom login screen
pub fn is_login_route(path: &str) -> bool {
    ["/login-id", "/u/login", "/login"]
        .iter()
        .any(|route| path.contains(route))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn context(value: Value) -> ScreenContext {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn screen_accepts_name_or_object() {
        let bare = context(json!({ "screen": "login-id" }));
        assert_eq!(bare.screen_name(), Some("login-id"));
        assert_eq!(bare.page_title(), "Login");

        let full = context(json!({
            "screen": { "name": "login-id", "texts": { "pageTitle": "Sign in | Acme" } }
        }));
        assert_eq!(full.screen_name(), Some("login-id"));
        assert_eq!(full.page_title(), "Sign in | Acme");
    }

    #[test]
    fn passkey_only_from_authorization_params() {
        let ctx = context(json!({
            "untrustedData": { "authorizationParams": { "ext-passkeyonly": "true" } }
        }));
        assert!(ctx.passkey_only());

        let ctx = context(json!({
            "untrustedData": { "authorizationParams": { "ext-passkeyonly": "false" } }
        }));
        assert!(!ctx.passkey_only());
    }

    #[test]
    fn passkey_only_falls_back_to_top_level() {
        let ctx = context(json!({
            "untrustedData": {
                "authorizationParams": { "ext-passkeyonly": "" },
                "ext-passkeyonly": true
            }
        }));
        assert!(ctx.passkey_only());

        assert!(!ScreenContext::default().passkey_only());
    }

    #[test]
    fn login_routes() {
        assert!(is_login_route("/u/login/identifier"));
        assert!(is_login_route("/login-id"));
        assert!(!is_login_route("/u/signup"));
    }

    #[test]
    fn mock_context_has_no_branding() {
        let ctx = ScreenContext::mock(None);
        assert_eq!(ctx.screen_name(), Some(DEFAULT_MOCK_SCREEN));
        assert_eq!(
            ctx.client.as_ref().and_then(|c| c.name.as_deref()),
            Some(MOCK_CLIENT_NAME)
        );
        assert!(ctx.branding().is_none());
    }

    #[test]
    fn organization_branding_is_exposed() {
        let ctx = context(json!({
            "organization": { "id": "org_1", "branding": { "colors": { "primary": "#00f" } } }
        }));
        assert_eq!(
            ctx.organization_branding(),
            Some(&BrandingOverrides::new().primary("#00f"))
        );
    }

    #[test]
    fn toml_contexts_load() {
        let ctx = ScreenContext::from_toml_str(
            r##"
screen = "login-id"

[branding.themes.default.colors]
primary_button = "#635dff"
"##,
        )
        .unwrap();
        assert_eq!(ctx.screen_name(), Some("login-id"));
        assert!(ctx.branding().and_then(Branding::default_theme).is_some());
    }
}
