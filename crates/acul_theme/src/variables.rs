//! CSS variable maps and the last-applied cache

use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use serde::Serialize;
use std::fmt::Write as _;

/// CSS custom property name to value.
///
/// Iteration follows insertion order so rendered output is stable, but
/// consumers treat the map as an unordered set of assignments.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct VariableMap(IndexMap<String, String>);

impl VariableMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Merge `other` into `self`; on a name collision `other` wins.
    pub fn merge(&mut self, other: VariableMap) {
        self.0.extend(other.0);
    }

    /// Render as a CSS rule, e.g. `:root { --a: b; }`
    pub fn to_css(&self, selector: &str) -> String {
        let mut css = String::with_capacity(32 + self.0.len() * 48);
        let _ = writeln!(css, "{selector} {{");
        for (name, value) in &self.0 {
            let _ = writeln!(css, "  {name}: {value};");
        }
        css.push_str("}\n");
        css
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for VariableMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl IntoIterator for VariableMap {
    type Item = (String, String);
    type IntoIter = indexmap::map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Values last written to a style target
#[derive(Clone, Debug, Default)]
pub struct ThemeCache {
    applied: FxHashMap<String, String>,
}

impl ThemeCache {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.applied.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.applied.len()
    }

    pub fn is_empty(&self) -> bool {
        self.applied.is_empty()
    }

    pub fn clear(&mut self) {
        self.applied.clear();
    }

    /// Entries of `next` whose value differs from what was last applied
    pub fn diff(&self, next: &VariableMap) -> VariableMap {
        next.iter()
            .filter(|(name, value)| self.get(name) != Some(*value))
            .collect()
    }

    /// Remember `written` as applied
    pub fn record(&mut self, written: &VariableMap) {
        for (name, value) in written.iter() {
            self.applied.insert(name.to_string(), value.to_string());
        }
    }
}
