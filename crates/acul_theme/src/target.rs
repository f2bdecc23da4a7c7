//! Output sinks for computed variables

use crate::variables::VariableMap;

/// Something that accepts CSS custom property assignments.
///
/// In a browser this is the document root's inline style. Headless callers
/// use [`RecordingTarget`] or a [`VariableMap`].
pub trait StyleTarget {
    fn set_property(&mut self, name: &str, value: &str);
}

impl<T: StyleTarget + ?Sized> StyleTarget for &mut T {
    fn set_property(&mut self, name: &str, value: &str) {
        (**self).set_property(name, value);
    }
}

impl StyleTarget for VariableMap {
    fn set_property(&mut self, name: &str, value: &str) {
        self.insert(name, value);
    }
}

/// Records every write in order
#[derive(Clone, Debug, Default)]
pub struct RecordingTarget {
    writes: Vec<(String, String)>,
}

impl RecordingTarget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn writes(&self) -> &[(String, String)] {
        &self.writes
    }

    pub fn len(&self) -> usize {
        self.writes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.writes.is_empty()
    }

    /// Final value per property, later writes winning
    pub fn to_map(&self) -> VariableMap {
        self.writes
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect()
    }
}

impl StyleTarget for RecordingTarget {
    fn set_property(&mut self, name: &str, value: &str) {
        self.writes.push((name.to_string(), value.to_string()));
    }
}
