use std::sync::Arc;

use yelpcamp_db::CampgroundStore;

use crate::config::ServerConfig;
use crate::views::Views;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; the store and config sit behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Campground persistence, constructed at startup and injected here.
    pub store: Arc<dyn CampgroundStore>,
    /// Compiled view templates.
    pub views: Views,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
