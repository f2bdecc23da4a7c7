//! Branding descriptor types
//!
//! These mirror the branding payload handed to a hosted login screen:
//!
//! ```text
//! branding
//! ├── settings            precedence overrides (lowest)
//! └── themes.default      colors / borders / fonts / page_background / widget
//! organization.branding   precedence overrides (highest)
//! ```
//!
//! Deserialization never fails on a badly shaped section; the section is
//! dropped instead and the rest of the document is still used.

use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

use crate::value::BrandingValue;

/// Anything that may carry a branding payload
pub trait BrandingSource {
    /// The branding payload, if any. `None` makes the engine a no-op.
    fn branding(&self) -> Option<&Branding>;

    /// Organization level overrides
    fn organization_branding(&self) -> Option<&BrandingOverrides> {
        None
    }
}

/// Top-level branding payload
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct Branding {
    #[serde(default, deserialize_with = "lenient")]
    pub settings: Option<BrandingOverrides>,
    #[serde(default, deserialize_with = "lenient")]
    pub themes: Option<Themes>,
}

impl Branding {
    /// The theme that gets flattened into variables
    pub fn default_theme(&self) -> Option<&ThemeSections> {
        self.themes.as_ref()?.default.as_ref()
    }

    pub fn with_settings(mut self, settings: BrandingOverrides) -> Self {
        self.settings = Some(settings);
        self
    }

    pub fn with_theme(mut self, theme: ThemeSections) -> Self {
        self.themes = Some(Themes {
            default: Some(theme),
        });
        self
    }
}

impl BrandingSource for Branding {
    fn branding(&self) -> Option<&Branding> {
        Some(self)
    }
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct Themes {
    #[serde(default, deserialize_with = "lenient")]
    pub default: Option<ThemeSections>,
}

/// The five sections of a theme
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct ThemeSections {
    #[serde(default, deserialize_with = "lenient")]
    pub colors: Option<Section>,
    #[serde(default, deserialize_with = "lenient")]
    pub borders: Option<Section>,
    #[serde(default, deserialize_with = "lenient")]
    pub fonts: Option<Section>,
    #[serde(default, rename = "pageBackground", deserialize_with = "lenient")]
    pub page_background_camel: Option<Section>,
    #[serde(default, deserialize_with = "lenient")]
    pub page_background: Option<Section>,
    #[serde(default, deserialize_with = "lenient")]
    pub widget: Option<Section>,
}

impl ThemeSections {
    /// Page background section, preferring the camelCase spelling
    pub fn page_background(&self) -> Option<&Section> {
        self.page_background_camel
            .as_ref()
            .or(self.page_background.as_ref())
    }

    pub fn with_colors(mut self, colors: Section) -> Self {
        self.colors = Some(colors);
        self
    }

    pub fn with_borders(mut self, borders: Section) -> Self {
        self.borders = Some(borders);
        self
    }

    pub fn with_fonts(mut self, fonts: Section) -> Self {
        self.fonts = Some(fonts);
        self
    }

    pub fn with_page_background(mut self, page_background: Section) -> Self {
        self.page_background = Some(page_background);
        self
    }

    pub fn with_widget(mut self, widget: Section) -> Self {
        self.widget = Some(widget);
        self
    }
}

/// One theme section: snake_case branding key to value
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct Section(IndexMap<String, BrandingValue>);

impl Section {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, key: impl Into<String>, value: impl Into<BrandingValue>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&BrandingValue> {
        self.0.get(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Precedence overrides, set at the settings or organization level
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct BrandingOverrides {
    #[serde(default, deserialize_with = "lenient")]
    pub colors: Option<OverrideColors>,
    #[serde(default, rename = "logoUrl")]
    pub logo_url: Option<BrandingValue>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct OverrideColors {
    #[serde(default)]
    pub primary: Option<BrandingValue>,
    #[serde(default)]
    pub page_background: Option<BrandingValue>,
}

impl BrandingOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn primary(mut self, value: impl Into<BrandingValue>) -> Self {
        self.colors.get_or_insert_with(Default::default).primary = Some(value.into());
        self
    }

    pub fn page_background(mut self, value: impl Into<BrandingValue>) -> Self {
        self.colors
            .get_or_insert_with(Default::default)
            .page_background = Some(value.into());
        self
    }

    pub fn logo_url(mut self, value: impl Into<BrandingValue>) -> Self {
        self.logo_url = Some(value.into());
        self
    }
}

/// Deserialize an optional field, treating a value of the wrong shape as absent.
pub(crate) fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let raw = serde_json::Value::deserialize(deserializer)?;
    if raw.is_null() {
        return Ok(None);
    }
    match T::deserialize(raw) {
        Ok(value) => Ok(Some(value)),
        Err(err) => {
            tracing::debug!(
                "ignoring malformed {} field: {}",
                std::any::type_name::<T>(),
                err
            );
            Ok(None)
        }
    }
}
