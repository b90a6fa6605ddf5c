//! The injectable campground store.
//!
//! Handlers never talk to a pool directly; they receive an
//! `Arc<dyn CampgroundStore>` through application state. Identifiers arrive
//! as raw path segments and malformed ones behave like missing records.

use async_trait::async_trait;
use yelpcamp_core::types;

use crate::models::campground::{Campground, CreateCampground, UpdateCampground};
use crate::repositories::CampgroundRepo;
use crate::DbPool;

/// Store operations surface `sqlx` errors; the in-memory store never fails.
pub type StoreResult<T> = Result<T, sqlx::Error>;

#[async_trait]
pub trait CampgroundStore: Send + Sync {
    /// Every campground in storage order. Empty when none exist.
    async fn list_all(&self) -> StoreResult<Vec<Campground>>;

    /// The matching campground, or `None` if absent or `id` is malformed.
    async fn find_by_id(&self, id: &str) -> StoreResult<Option<Campground>>;

    /// Persist a new campground with a fresh identifier.
    async fn create(&self, input: &CreateCampground) -> StoreResult<Campground>;

    /// Apply the supplied fields; `None` if absent or `id` is malformed.
    async fn update(&self, id: &str, input: &UpdateCampground)
        -> StoreResult<Option<Campground>>;

    /// Remove a campground. Returns `false` when there was nothing to remove.
    async fn delete(&self, id: &str) -> StoreResult<bool>;

    /// Confirm the backing store is reachable.
    async fn health_check(&self) -> StoreResult<()>;
}

/// PostgreSQL-backed store delegating to [`CampgroundRepo`].
#[derive(Clone)]
pub struct PgCampgroundStore {
    pool: DbPool,
}

impl PgCampgroundStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

#[async_trait]
impl CampgroundStore for PgCampgroundStore {
    async fn list_all(&self) -> StoreResult<Vec<Campground>> {
        CampgroundRepo::list_all(&self.pool).await
    }

    async fn find_by_id(&self, id: &str) -> StoreResult<Option<Campground>> {
        match types::parse_id(id) {
            Some(id) => CampgroundRepo::find_by_id(&self.pool, id).await,
            None => Ok(None),
        }
    }

    async fn create(&self, input: &CreateCampground) -> StoreResult<Campground> {
        let campground = CampgroundRepo::create(&self.pool, input).await?;
        tracing::debug!(id = %campground.id, "Campground created");
        Ok(campground)
    }

    async fn update(
        &self,
        id: &str,
        input: &UpdateCampground,
    ) -> StoreResult<Option<Campground>> {
        match types::parse_id(id) {
            Some(id) => CampgroundRepo::update(&self.pool, id, input).await,
            None => Ok(None),
        }
    }

    async fn delete(&self, id: &str) -> StoreResult<bool> {
        match types::parse_id(id) {
            Some(id) => CampgroundRepo::delete(&self.pool, id).await,
            None => Ok(false),
        }
    }

    async fn health_check(&self) -> StoreResult<()> {
        crate::health_check(&self.pool).await
    }
}
