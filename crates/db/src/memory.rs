//! Volatile, process-local campground store.
//!
//! Keeps documents in insertion order. Used by the test suites and by
//! `STORE_BACKEND=memory` for running without PostgreSQL.

use async_trait::async_trait;
use chrono::Utc;
use indexmap::IndexMap;
use tokio::sync::RwLock;
use yelpcamp_core::types::{self, DbId};

use crate::models::campground::{Campground, CreateCampground, UpdateCampground};
use crate::store::{CampgroundStore, StoreResult};

#[derive(Default)]
pub struct MemoryCampgroundStore {
    documents: RwLock<IndexMap<DbId, Campground>>,
}

impl MemoryCampgroundStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored campgrounds.
    pub async fn len(&self) -> usize {
        self.documents.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.documents.read().await.is_empty()
    }
}

#[async_trait]
impl CampgroundStore for MemoryCampgroundStore {
    async fn list_all(&self) -> StoreResult<Vec<Campground>> {
        Ok(self.documents.read().await.values().cloned().collect())
    }

    async fn find_by_id(&self, id: &str) -> StoreResult<Option<Campground>> {
        let Some(id) = types::parse_id(id) else {
            return Ok(None);
        };
        Ok(self.documents.read().await.get(&id).cloned())
    }

    async fn create(&self, input: &CreateCampground) -> StoreResult<Campground> {
        let now = Utc::now();
        let campground = Campground {
            id: types::new_id(),
            title: input.title.clone(),
            location: input.location.clone(),
            price: input.price,
            description: input.description.clone(),
            image: input.image.clone(),
            created_at: now,
            updated_at: now,
        };
        self.documents
            .write()
            .await
            .insert(campground.id, campground.clone());
        tracing::debug!(id = %campground.id, "Campground created");
        Ok(campground)
    }

    async fn update(
        &self,
        id: &str,
        input: &UpdateCampground,
    ) -> StoreResult<Option<Campground>> {
        let Some(id) = types::parse_id(id) else {
            return Ok(None);
        };
        let mut documents = self.documents.write().await;
        let Some(existing) = documents.get_mut(&id) else {
            return Ok(None);
        };

        if let Some(title) = &input.title {
            existing.title = title.clone();
        }
        if let Some(location) = &input.location {
            existing.location = location.clone();
        }
        if let Some(price) = input.price {
            existing.price = price;
        }
        if let Some(description) = &input.description {
            existing.description = description.clone();
        }
        if let Some(image) = &input.image {
            existing.image = image.clone();
        }
        existing.updated_at = Utc::now();

        Ok(Some(existing.clone()))
    }

    async fn delete(&self, id: &str) -> StoreResult<bool> {
        let Some(id) = types::parse_id(id) else {
            return Ok(false);
        };
        Ok(self.documents.write().await.shift_remove(&id).is_some())
    }

    async fn health_check(&self) -> StoreResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_campground(title: &str) -> CreateCampground {
        CreateCampground {
            title: title.to_string(),
            location: Some("Hills".to_string()),
            price: Some(10.0),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn list_is_empty_initially() {
        let store = MemoryCampgroundStore::new();
        assert!(store.list_all().await.unwrap().is_empty());
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn list_preserves_insertion_order() {
        let store = MemoryCampgroundStore::new();
        for title in ["B", "A", "C"] {
            store.create(&new_campground(title)).await.unwrap();
        }
        let titles: Vec<_> = store
            .list_all()
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.title)
            .collect();
        assert_eq!(titles, ["B", "A", "C"]);
    }

    #[tokio::test]
    async fn create_then_find() {
        let store = MemoryCampgroundStore::new();
        let created = store.create(&new_campground("Camp A")).await.unwrap();
        let found = store
            .find_by_id(&created.id.to_string())
            .await
            .unwrap()
            .expect("campground should exist");
        assert_eq!(found.title, "Camp A");
        assert_eq!(found.location.as_deref(), Some("Hills"));
    }

    #[tokio::test]
    async fn malformed_id_is_not_found() {
        let store = MemoryCampgroundStore::new();
        store.create(&new_campground("Camp A")).await.unwrap();
        assert!(store.find_by_id("definitely-not-an-id").await.unwrap().is_none());
        assert!(store
            .update("nope", &UpdateCampground::default())
            .await
            .unwrap()
            .is_none());
        assert!(!store.delete("nope").await.unwrap());
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn update_applies_only_supplied_fields() {
        let store = MemoryCampgroundStore::new();
        let created = store.create(&new_campground("Camp A")).await.unwrap();
        let input = UpdateCampground {
            title: Some("Camp A2".to_string()),
            ..Default::default()
        };
        let updated = store
            .update(&created.id.to_string(), &input)
            .await
            .unwrap()
            .expect("campground should exist");
        assert_eq!(updated.title, "Camp A2");
        assert_eq!(updated.location.as_deref(), Some("Hills"));
        assert_eq!(updated.price, Some(10.0));
        assert!(updated.updated_at >= created.updated_at);
    }

    #[tokio::test]
    async fn update_clears_fields_set_to_none() {
        let store = MemoryCampgroundStore::new();
        let created = store.create(&new_campground("Camp A")).await.unwrap();
        let input = UpdateCampground {
            location: Some(None),
            price: Some(Some(12.0)),
            ..Default::default()
        };
        let updated = store
            .update(&created.id.to_string(), &input)
            .await
            .unwrap()
            .expect("campground should exist");
        assert_eq!(updated.title, "Camp A");
        assert_eq!(updated.location, None);
        assert_eq!(updated.price, Some(12.0));
    }

    #[tokio::test]
    async fn update_missing_returns_none() {
        let store = MemoryCampgroundStore::new();
        let id = types::new_id().to_string();
        assert!(store
            .update(&id, &UpdateCampground::default())
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let store = MemoryCampgroundStore::new();
        let created = store.create(&new_campground("Camp A")).await.unwrap();
        let id = created.id.to_string();
        assert!(store.delete(&id).await.unwrap());
        assert!(!store.delete(&id).await.unwrap());
        assert!(store.is_empty().await);
    }
}
