//! ACUL theme engine
//!
//! Turns the branding payload a hosted login page hands to a custom screen
//! into `--ul-theme-*` CSS custom properties.
//!
//! # Overview
//!
//! - **Descriptors**: loosely typed branding JSON, parsed leniently into
//!   [`Branding`], [`ThemeSections`] and [`BrandingOverrides`]
//! - **Flattening**: table driven conversion of each theme section, with
//!   `px`/`rem` unit conversion, font weights and quoted URLs
//! - **Precedence**: settings overrides, then the theme, then organization
//!   overrides, later sources winning
//! - **Change detection**: [`ThemeEngine`] only writes variables whose value
//!   differs from what it last applied
//!
//! # Quick Start
//!
//! ```rust
//! use acul_theme::{ScreenContext, ThemeEngine, VariableMap};
//!
//! let ctx = ScreenContext::from_json_str(r##"{
//!     "branding": {
//!         "themes": { "default": { "widget": { "logo_height": 52 } } }
//!     }
//! }"##).unwrap();
//!
//! let mut engine = ThemeEngine::new();
//! let mut style = VariableMap::new();
//! engine.apply(&ctx, &mut style);
//!
//! assert_eq!(style.get("--ul-theme-widget-logo-height"), Some("52px"));
//! ```

pub mod context;
pub mod descriptor;
pub mod engine;
pub mod error;
pub mod flatten;
pub mod format;
pub mod overrides;
pub mod target;
pub mod value;
pub mod variables;

pub use context::{is_login_route, ClientInfo, Organization, ScreenContext, ScreenInfo, UntrustedData};
pub use descriptor::{Branding, BrandingOverrides, BrandingSource, Section, ThemeSections};
pub use engine::{ApplyOutcome, EngineOptions, ThemeEngine};
pub use error::{Result, ThemeError};
pub use format::Formatter;
pub use target::{RecordingTarget, StyleTarget};
pub use value::{BrandingValue, OmissionPolicy};
pub use variables::{ThemeCache, VariableMap};
