use std::collections::HashMap;
use std::collections::hash_map;

/// The key/value pairs declared under one `[header]`.
///
/// Keys are unique; setting an existing key replaces its value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Section {
    entries: HashMap<String, String>,
}

impl Section {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            entries: HashMap::with_capacity(16),
        }
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Iterate over `(key, value)` pairs in no particular order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.entries.iter(),
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn insert(&mut self, key: String, value: String) {
        self.entries.insert(key, value);
    }
}

#[derive(Debug, Clone)]
pub struct Iter<'a> {
    inner: hash_map::Iter<'a, String, String>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a> IntoIterator for &'a Section {
    type Item = (&'a str, &'a str);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V> FromIterator<(K, V)> for Section
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn insert_overwrites_existing_key() {
        let mut section = Section::new();
        section.insert("host".to_owned(), "example.com".to_owned());
        section.insert("host".to_owned(), "localhost".to_owned());

        assert_eq!(section.len(), 1);
        assert_eq!(section.get("host"), Some("localhost"));
    }

    #[test]
    fn empty_value_is_kept() {
        let section = Section::from_iter([("key", "")]);

        assert!(section.contains_key("key"));
        assert_eq!(section.get("key"), Some(""));
        assert_eq!(section.get("missing"), None);
    }

    #[test]
    fn equality_ignores_insertion_order() {
        let a = Section::from_iter([("a", "1"), ("b", "2")]);
        let b = Section::from_iter([("b", "2"), ("a", "1")]);

        assert_eq!(a, b);
    }
}
