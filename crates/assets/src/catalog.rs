use std::collections::BTreeMap;

use layerstack_core::ModelDefinition;
use tracing::{info, warn};

/// Registry of model definitions keyed by selection key (e.g. `osi`).
///
/// Keys iterate in lexical order so listings are stable across runs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModelCatalog {
    models: BTreeMap<String, ModelDefinition>,
}

impl ModelCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct a catalog from `(key, model)` pairs; later keys win.
    pub fn from_models<I, K>(models: I) -> Self
    where
        I: IntoIterator<Item = (K, ModelDefinition)>,
        K: Into<String>,
    {
        let mut catalog = Self::new();
        for (key, model) in models {
            catalog.insert(key, model);
        }
        catalog
    }

    /// Insert a model, returning the definition it replaced.
    ///
    /// Duplicate layer ids are logged but accepted; lookups by id then resolve
    /// to the first matching layer.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        model: ModelDefinition,
    ) -> Option<ModelDefinition> {
        let key = key.into();
        let dupes = model.duplicate_ids();
        if !dupes.is_empty() {
            warn!(model = %key, ?dupes, "Model has duplicate layer ids");
        }
        self.models.insert(key, model)
    }

    /// Resolve a selection key.
    pub fn get(&self, key: &str) -> Option<&ModelDefinition> {
        self.models.get(key)
    }

    /// True when `key` names a model.
    pub fn contains(&self, key: &str) -> bool {
        self.models.contains_key(key)
    }

    /// Selection keys in lexical order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.models.keys().map(String::as_str)
    }

    /// `(key, model)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ModelDefinition)> {
        self.models.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of models.
    pub fn len(&self) -> usize {
        self.models.len()
    }

    /// True when no models are registered.
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// Add every model of `other`, replacing same-keyed entries.
    pub fn merge(&mut self, other: ModelCatalog) {
        for (key, model) in other.models {
            if self.insert(key.clone(), model).is_some() {
                info!(model = %key, "Catalog entry overridden");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use layerstack_core::LayerDescriptor;

    fn model(name: &str, n: u32) -> ModelDefinition {
        ModelDefinition::new(
            name,
            (1..=n).map(|id| LayerDescriptor::simple(id, "L")).collect(),
        )
    }

    #[test]
    fn keys_are_sorted() {
        let catalog = ModelCatalog::from_models([("tcpip", model("b", 4)), ("osi", model("a", 7))]);
        assert_eq!(catalog.keys().collect::<Vec<_>>(), vec!["osi", "tcpip"]);
        assert_eq!(catalog.get("osi").map(ModelDefinition::len), Some(7));
        assert!(catalog.get("OSI").is_none());
    }

    #[test]
    fn merge_overrides_same_keys() {
        let mut base = ModelCatalog::from_models([("osi", model("a", 7)), ("x", model("x", 1))]);
        let extra = ModelCatalog::from_models([("osi", model("custom", 3))]);
        base.merge(extra);
        assert_eq!(base.len(), 2);
        assert_eq!(base.get("osi").map(|m| m.name.as_str()), Some("custom"));
    }
}
