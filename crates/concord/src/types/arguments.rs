use std::collections::HashMap;

use super::Value;

/// The arguments of one formatting call: positional values by index and
/// keyword values by name.
///
/// Usually built with the [`args!`](crate::args) macro.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Arguments {
    positional: Vec<Value>,
    keyword: HashMap<String, Value>,
}

impl Arguments {
    /// Create an empty argument set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a positional argument.
    pub fn push(&mut self, value: impl Into<Value>) {
        self.positional.push(value.into());
    }

    /// Set a keyword argument, replacing any previous value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.keyword.insert(name.into(), value.into());
    }

    /// Builder-style [`Arguments::push`].
    pub fn arg(mut self, value: impl Into<Value>) -> Self {
        self.push(value);
        self
    }

    /// Builder-style [`Arguments::insert`].
    pub fn kwarg(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn positional(&self, index: usize) -> Option<&Value> {
        self.positional.get(index)
    }

    pub fn keyword(&self, name: &str) -> Option<&Value> {
        self.keyword.get(name)
    }

    pub fn positional_len(&self) -> usize {
        self.positional.len()
    }

    /// Supplied keyword names, sorted.
    pub fn keyword_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.keyword.keys().cloned().collect();
        names.sort();
        names
    }
}

impl<V: Into<Value>> FromIterator<V> for Arguments {
    fn from_iter<T: IntoIterator<Item = V>>(iter: T) -> Self {
        Arguments {
            positional: iter.into_iter().map(Into::into).collect(),
            keyword: HashMap::new(),
        }
    }
}
