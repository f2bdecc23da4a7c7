//! Precedence overrides
//!
//! Settings and organization branding can each pin a handful of values
//! independently of the theme. Only three paths are recognized, listed in
//! [`PRECEDENCE_PATHS`].

use crate::descriptor::BrandingOverrides;
use crate::format::Formatter;
use crate::value::{BrandingValue, OmissionPolicy};
use crate::variables::VariableMap;

/// A recognized override path
#[derive(Clone, Copy)]
pub struct OverridePath {
    /// Dotted path in the branding payload, for diagnostics
    pub path: &'static str,
    pub variable: &'static str,
    pub formatter: Formatter,
    read: fn(&BrandingOverrides) -> Option<&BrandingValue>,
}

impl OverridePath {
    pub fn read<'a>(&self, source: &'a BrandingOverrides) -> Option<&'a BrandingValue> {
        (self.read)(source)
    }
}

impl std::fmt::Debug for OverridePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OverridePath")
            .field("path", &self.path)
            .field("variable", &self.variable)
            .field("formatter", &self.formatter)
            .finish()
    }
}

fn colors_primary(o: &BrandingOverrides) -> Option<&BrandingValue> {
    o.colors.as_ref()?.primary.as_ref()
}

fn colors_page_background(o: &BrandingOverrides) -> Option<&BrandingValue> {
    o.colors.as_ref()?.page_background.as_ref()
}

fn logo_url(o: &BrandingOverrides) -> Option<&BrandingValue> {
    o.logo_url.as_ref()
}

pub const PRECEDENCE_PATHS: [OverridePath; 3] = [
    OverridePath {
        path: "colors.primary",
        variable: "--ul-theme-color-primary-button",
        formatter: Formatter::Plain,
        read: colors_primary,
    },
    OverridePath {
        path: "colors.page_background",
        variable: "--ul-theme-page-bg-background-color",
        formatter: Formatter::Plain,
        read: colors_page_background,
    },
    OverridePath {
        path: "logoUrl",
        variable: "--ul-theme-widget-logo-url",
        formatter: Formatter::Quoted,
        read: logo_url,
    },
];

/// Variables pinned by one override source
pub fn extract_overrides(source: Option<&BrandingOverrides>, policy: OmissionPolicy) -> VariableMap {
    let mut vars = VariableMap::new();
    let Some(source) = source else {
        return vars;
    };

    for path in &PRECEDENCE_PATHS {
        let Some(value) = path.read(source) else {
            continue;
        };
        if !value.is_present(policy) {
            continue;
        }
        if let Some(css) = path.formatter.format(value) {
            tracing::trace!("override {} -> {} = {}", path.path, path.variable, css);
            vars.insert(path.variable, css);
        }
    }
    vars
}
