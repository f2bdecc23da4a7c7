//! Theme engine
//!
//! Computes the variable map for a branding payload and writes the entries
//! that differ from the last applied values to a [`StyleTarget`].
//!
//! Precedence, lowest to highest:
//!
//! 1. `branding.settings` overrides
//! 2. `branding.themes.default` sections
//! 3. `organization.branding` overrides
//!
//! The engine owns its cache. [`ThemeEngine::apply`] clears it first, so two
//! consecutive `apply` calls with the same payload both write every variable;
//! [`ThemeEngine::update`] keeps the cache and only writes what changed.

use serde::{Deserialize, Serialize};

use crate::descriptor::BrandingSource;
use crate::flatten::flatten_theme;
use crate::overrides::extract_overrides;
use crate::target::StyleTarget;
use crate::value::OmissionPolicy;
use crate::variables::{ThemeCache, VariableMap};

/// Engine configuration
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineOptions {
    /// Which values count as "not set"
    #[serde(default)]
    pub omission: OmissionPolicy,
}

/// Result of applying a branding payload
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// The source carried no branding; nothing was touched
    NoBranding,
    /// Every computed value matched the cache; no writes happened
    Unchanged,
    /// These variables were written
    Applied(VariableMap),
}

impl ApplyOutcome {
    /// Number of properties written
    pub fn written(&self) -> usize {
        match self {
            Self::Applied(vars) => vars.len(),
            _ => 0,
        }
    }

    pub fn changed(&self) -> Option<&VariableMap> {
        match self {
            Self::Applied(vars) => Some(vars),
            _ => None,
        }
    }
}

/// Stateful theme engine
#[derive(Clone, Debug, Default)]
pub struct ThemeEngine {
    options: EngineOptions,
    cache: ThemeCache,
}

impl ThemeEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: EngineOptions) -> Self {
        Self {
            options,
            cache: ThemeCache::default(),
        }
    }

    pub fn options(&self) -> EngineOptions {
        self.options
    }

    /// Values written so far
    pub fn cache(&self) -> &ThemeCache {
        &self.cache
    }

    /// Forget every applied value
    pub fn reset(&mut self) {
        self.cache.clear();
    }

    /// Compute the merged variable map without touching the cache.
    ///
    /// Returns `None` when `source` carries no branding.
    pub fn compute<S>(&self, source: &S) -> Option<VariableMap>
    where
        S: BrandingSource + ?Sized,
    {
        let branding = source.branding()?;
        let policy = self.options.omission;

        let mut vars = extract_overrides(branding.settings.as_ref(), policy);
        if let Some(theme) = branding.default_theme() {
            vars.merge(flatten_theme(theme, policy));
        }
        vars.merge(extract_overrides(source.organization_branding(), policy));
        Some(vars)
    }

    /// Apply `source` from a clean cache.
    ///
    /// Without branding this is a no-op and the cache is left alone.
    pub fn apply<S, T>(&mut self, source: &S, target: &mut T) -> ApplyOutcome
    where
        S: BrandingSource + ?Sized,
        T: StyleTarget + ?Sized,
    {
        let Some(vars) = self.compute(source) else {
            return ApplyOutcome::NoBranding;
        };
        self.reset();
        self.write_changes(vars, target)
    }

    /// Apply `source`, writing only what differs from earlier calls
    pub fn update<S, T>(&mut self, source: &S, target: &mut T) -> ApplyOutcome
    where
        S: BrandingSource + ?Sized,
        T: StyleTarget + ?Sized,
    {
        match self.compute(source) {
            Some(vars) => self.write_changes(vars, target),
            None => ApplyOutcome::NoBranding,
        }
    }

    fn write_changes<T>(&mut self, vars: VariableMap, target: &mut T) -> ApplyOutcome
    where
        T: StyleTarget + ?Sized,
    {
        let changed = self.cache.diff(&vars);
        if changed.is_empty() {
            tracing::debug!("theme unchanged ({} variables)", vars.len());
            return ApplyOutcome::Unchanged;
        }

        tracing::debug!(
            "applying {} of {} theme variables",
            changed.len(),
            vars.len()
        );
        for (name, value) in changed.iter() {
            tracing::trace!("{}: {}", name, value);
            target.set_property(name, value);
        }
        self.cache.record(&changed);
        ApplyOutcome::Applied(changed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::{Branding, BrandingOverrides, Section, ThemeSections};
    use crate::target::RecordingTarget;
    use pretty_assertions::assert_eq;

    fn branding() -> Branding {
        Branding::default().with_theme(
            ThemeSections::default()
                .with_colors(Section::new().with("primary_button", "#635dff"))
                .with_borders(Section::new().with("button_border_radius", 4)),
        )
    }

    #[test]
    fn no_branding_is_a_no_op() {
        let mut engine = ThemeEngine::new();
        let mut target = RecordingTarget::new();
        engine.update(&branding(), &mut target);
        let cached = engine.cache().len();

        let outcome = engine.apply(&crate::context::ScreenContext::default(), &mut target);

        assert_eq!(outcome, ApplyOutcome::NoBranding);
        assert_eq!(engine.cache().len(), cached);
        assert_eq!(target.len(), 2);
    }

    #[test]
    fn apply_resets_before_writing() {
        let mut engine = ThemeEngine::new();
        let mut target = RecordingTarget::new();

        assert_eq!(engine.apply(&branding(), &mut target).written(), 2);
        assert_eq!(engine.apply(&branding(), &mut target).written(), 2);
        assert_eq!(target.len(), 4);
        assert_eq!(engine.cache().len(), 2);
    }

    #[test]
    fn update_skips_unchanged_values() {
        let mut engine = ThemeEngine::new();
        let mut target = RecordingTarget::new();

        engine.update(&branding(), &mut target);
        assert_eq!(engine.update(&branding(), &mut target), ApplyOutcome::Unchanged);

        let recolored = branding().with_settings(BrandingOverrides::new().page_background("#fafafa"));
        let outcome = engine.update(&recolored, &mut target);
        assert_eq!(
            outcome.changed().unwrap().get("--ul-theme-page-bg-background-color"),
            Some("#fafafa")
        );
        assert_eq!(outcome.written(), 1);
        assert_eq!(target.len(), 3);
    }

    #[test]
    fn compute_does_not_touch_cache() {
        let engine = ThemeEngine::new();
        let vars = engine.compute(&branding()).unwrap();
        assert_eq!(vars.get("--ul-theme-border-button-border-radius"), Some("4px"));
        assert!(engine.cache().is_empty());
    }
}
