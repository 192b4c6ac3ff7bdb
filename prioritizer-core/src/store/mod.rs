//! In-memory, ordered collection of features.

mod seed;

use std::sync::Arc;

use serde_json::Value;

use crate::models::*;

/// The collection handed out by the store. Records are shared, immutable
/// `Arc`s, so holding a collection never exposes the store's internals.
pub type Collection = Vec<Arc<Feature>>;

/// Owns the ordered feature collection and applies single-field edits.
///
/// Collection order is display order: edits replace a record in place and
/// never move it. Each edit swaps in a new `Arc` for the edited record only,
/// so unaffected records stay pointer-equal across edits and consumers can
/// memoize per record.
///
/// Numeric edits are applied as given. Callers that take values from users
/// should pass them through [`FeatureEdit::clamped`] first.
#[derive(Debug, Clone, Default)]
pub struct FeatureStore {
    features: Collection,
}

impl FeatureStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store holding the reference seed list.
    pub fn seeded() -> Self {
        Self::from_features(seed::seed_features())
    }

    pub fn from_features(features: impl IntoIterator<Item = Feature>) -> Self {
        let mut store = Self::new();
        for feature in features {
            store.insert(feature);
        }
        store
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn get(&self, id: FeatureId) -> Option<Feature> {
        self.position(id).map(|i| Feature::clone(&self.features[i]))
    }

    /// Read-only view of the collection, in display order.
    pub fn snapshot(&self) -> Collection {
        self.features.clone()
    }

    // ============================================================
    // Edits
    // ============================================================

    /// Apply `edit` to the feature with `id` and return the updated collection.
    ///
    /// An unknown id is a no-op: the collection comes back unchanged.
    pub fn set_field(&mut self, id: FeatureId, edit: FeatureEdit) -> Collection {
        let Some(index) = self.position(id) else {
            tracing::debug!(%id, field = %edit.field(), "Ignoring edit for unknown feature");
            return self.snapshot();
        };

        let field = edit.field();
        let mut updated = Feature::clone(&self.features[index]);
        edit.apply(&mut updated);
        self.features[index] = Arc::new(updated);

        tracing::debug!(%id, %field, "Applied feature edit");
        self.snapshot()
    }

    /// Like [`set_field`](Self::set_field), but with a field name and an
    /// untyped value. A bad field name or value type fails before the
    /// collection is touched.
    pub fn set_field_raw(
        &mut self,
        id: FeatureId,
        field: &str,
        value: &Value,
    ) -> Result<Collection, InvalidFieldError> {
        let edit = FeatureEdit::from_field(field, value)?;
        Ok(self.set_field(id, edit))
    }

    // ============================================================
    // Membership
    // ============================================================

    /// Append a new feature with a freshly generated id.
    pub fn add_feature(&mut self, input: NewFeature) -> Feature {
        let feature = input.into_feature();
        self.insert(feature.clone());
        tracing::debug!(id = %feature.id, name = %feature.name, "Added feature");
        feature
    }

    /// Remove a feature, keeping the order of the others. Returns whether
    /// anything was removed.
    pub fn remove_feature(&mut self, id: FeatureId) -> bool {
        match self.position(id) {
            Some(index) => {
                self.features.remove(index);
                tracing::debug!(%id, "Removed feature");
                true
            }
            None => false,
        }
    }

    fn insert(&mut self, mut feature: Feature) {
        // Ids are unique within a collection.
        while self.position(feature.id).is_some() {
            feature.id = FeatureId::new();
        }
        self.features.push(Arc::new(feature));
    }

    fn position(&self, id: FeatureId) -> Option<usize> {
        self.features.iter().position(|f| f.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn store() -> FeatureStore {
        FeatureStore::from_features([
            Feature::new("A", 5000, 2.0, 80, 3.0),
            Feature::new("B", 8000, 2.5, 90, 4.0),
            Feature::new("C", 3000, 1.5, 70, 2.0),
        ])
    }

    #[test]
    fn test_unaffected_records_keep_identity() {
        let mut store = store();
        let before = store.snapshot();
        let after = store.set_field(before[1].id, FeatureEdit::SetReach(100));

        assert!(Arc::ptr_eq(&before[0], &after[0]));
        assert!(!Arc::ptr_eq(&before[1], &after[1]));
        assert!(Arc::ptr_eq(&before[2], &after[2]));
        assert_eq!(after[1].reach, 100);
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut store = store();
        let snapshot = store.snapshot();
        store.set_field(snapshot[0].id, FeatureEdit::SetName("Renamed".into()));

        assert_eq!(snapshot[0].name, "A");
        assert_eq!(store.snapshot()[0].name, "Renamed");
    }

    #[test]
    fn test_raw_edit_failure_leaves_store_untouched() {
        let mut store = store();
        let before = store.snapshot();
        let id = before[0].id;

        assert!(store.set_field_raw(id, "reach", &json!("lots")).is_err());
        assert!(store.set_field_raw(id, "id", &json!("x")).is_err());

        let after = store.snapshot();
        assert!(before.iter().zip(&after).all(|(a, b)| Arc::ptr_eq(a, b)));
    }

    #[test]
    fn test_insert_never_duplicates_ids() {
        let feature = Feature::new("A", 5000, 2.0, 80, 3.0);
        let store = FeatureStore::from_features([feature.clone(), feature]);
        let snapshot = store.snapshot();
        assert_eq!(snapshot.len(), 2);
        assert_ne!(snapshot[0].id, snapshot[1].id);
    }
}
