//! Unit conversion for branding values

use crate::value::{format_number, BrandingValue};

/// Conversion applied to a branding value before it becomes a CSS value
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Formatter {
    /// Stringify as-is
    Plain,
    /// Numbers get a `px` suffix; strings pass through
    Pixels,
    /// Percent strings and numbers are divided by 100 and get a `rem` suffix
    Rem,
    /// Boolean bold flags become numeric font weights
    Weight,
    /// Wrap in double quotes to form a CSS string token
    Quoted,
    /// Boolean-like flag, checked for absence only
    Flag,
}

const BOLD: &str = "700";
const REGULAR: &str = "400";

impl Formatter {
    /// Whether the field is only skipped when missing, regardless of the
    /// configured omission policy.
    pub fn checks_absence_only(self) -> bool {
        matches!(self, Self::Weight | Self::Flag)
    }

    /// Convert `value`. `None` means the variable is omitted.
    pub fn format(self, value: &BrandingValue) -> Option<String> {
        match self {
            Self::Plain | Self::Flag => value.to_css_string(),
            Self::Pixels => match value {
                BrandingValue::Number(n) => Some(format!("{}px", format_number(*n))),
                other => other.to_css_string(),
            },
            Self::Rem => rem(value),
            Self::Weight => weight(value),
            Self::Quoted => value.to_css_string().map(|s| format!("\"{s}\"")),
        }
    }
}

fn rem(value: &BrandingValue) -> Option<String> {
    match value {
        BrandingValue::Number(n) => Some(format!("{}rem", format_number(n / 100.0))),
        BrandingValue::String(s) => match s.strip_suffix('%') {
            Some(percent) => match percent.trim().parse::<f64>() {
                Ok(p) => Some(format!("{}rem", format_number(p / 100.0))),
                Err(_) => Some(s.clone()),
            },
            None => Some(s.clone()),
        },
        other => other.to_css_string(),
    }
}

fn weight(value: &BrandingValue) -> Option<String> {
    match value {
        BrandingValue::Bool(true) => Some(BOLD.to_string()),
        BrandingValue::Bool(false) | BrandingValue::Null => Some(REGULAR.to_string()),
        BrandingValue::String(s) if s.is_empty() => Some(REGULAR.to_string()),
        BrandingValue::Unsupported => None,
        other => other.to_css_string(),
    }
}
