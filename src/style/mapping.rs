use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::PropertyValue;

/// Property name to value, in insertion order.
///
/// Keys are unique. Inserting an existing key replaces its value but keeps the
/// position it was first inserted at. Equality ignores ordering.
#[derive(Debug, Clone, Default)]
pub struct PropertyMapping {
    entries: Vec<(String, PropertyValue)>,
}

impl PropertyMapping {
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Builder form of [`PropertyMapping::insert`].
    #[must_use]
    pub fn with(mut self, property: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.insert(property, value);
        self
    }

    pub fn insert(
        &mut self,
        property: impl Into<String>,
        value: impl Into<PropertyValue>,
    ) -> Option<PropertyValue> {
        let property = property.into();
        let value = value.into();
        match self.position(&property) {
            Some(index) => Some(std::mem::replace(&mut self.entries[index].1, value)),
            None => {
                self.entries.push((property, value));
                None
            }
        }
    }

    pub fn get(&self, property: &str) -> Option<&PropertyValue> {
        self.position(property).map(|index| &self.entries[index].1)
    }

    pub fn contains_key(&self, property: &str) -> bool {
        self.position(property).is_some()
    }

    pub fn remove(&mut self, property: &str) -> Option<PropertyValue> {
        let index = self.position(property)?;
        Some(self.entries.remove(index).1)
    }

    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(&str, &mut PropertyValue) -> bool,
    {
        self.entries.retain_mut(|(property, value)| keep(property, value));
    }

    /// Shallow merge: every entry of `other` overrides the entry with the same key.
    pub fn merge(&mut self, other: &PropertyMapping) {
        for (property, value) in &other.entries {
            self.insert(property.clone(), value.clone());
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropertyValue)> {
        self.entries
            .iter()
            .map(|(property, value)| (property.as_str(), value))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(property, _)| property.as_str())
    }

    fn position(&self, property: &str) -> Option<usize> {
        self.entries.iter().position(|(key, _)| key == property)
    }
}

impl PartialEq for PropertyMapping {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(property, value)| other.get(property) == Some(value))
    }
}

impl<K, V> FromIterator<(K, V)> for PropertyMapping
where
    K: Into<String>,
    V: Into<PropertyValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut mapping = Self::new();
        mapping.extend(iter);
        mapping
    }
}

impl<K, V> Extend<(K, V)> for PropertyMapping
where
    K: Into<String>,
    V: Into<PropertyValue>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (property, value) in iter {
            self.insert(property, value);
        }
    }
}

impl IntoIterator for PropertyMapping {
    type Item = (String, PropertyValue);
    type IntoIter = std::vec::IntoIter<(String, PropertyValue)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl Serialize for PropertyMapping {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (property, value) in &self.entries {
            map.serialize_entry(property, value)?;
        }
        map.end()
    }
}

struct PropertyMappingVisitor;

impl<'de> Visitor<'de> for PropertyMappingVisitor {
    type Value = PropertyMapping;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a map of property names to values")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut mapping = PropertyMapping::new();
        while let Some((property, value)) = access.next_entry::<String, PropertyValue>()? {
            mapping.insert(property, value);
        }
        Ok(mapping)
    }
}

impl<'de> Deserialize<'de> for PropertyMapping {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(PropertyMappingVisitor)
    }
}
