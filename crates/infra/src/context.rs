//! Application context - dependency wiring
//!
//! Single composition root: opens the database, runs migrations, then
//! constructs every service on top of the shared durable store. Services
//! hydrate their in-memory state from the store at construction, so order
//! matters only in that migrations run first.

use std::path::Path;
use std::sync::Arc;

use taqwa_core::{
    BookmarkService, PreferencesService, ReadStreakService, StateStore, TasbihService,
};
use taqwa_domain::Result;
use tracing::info;

use crate::database::manager::DbManager;
use crate::database::state_repository::SqliteStateStore;

const DEFAULT_POOL_SIZE: u32 = 4;

/// Shared application context holding every wired service.
pub struct AppContext {
    pub db: Arc<DbManager>,
    pub store: Arc<dyn StateStore>,
    pub streak: Arc<ReadStreakService>,
    pub bookmarks: Arc<BookmarkService>,
    pub tasbih: Arc<TasbihService>,
    pub preferences: Arc<PreferencesService>,
}

impl AppContext {
    /// Open (or create) the database at `db_path` and wire all services.
    pub fn new<P: AsRef<Path>>(db_path: P) -> Result<Self> {
        let db = Arc::new(DbManager::new(db_path, DEFAULT_POOL_SIZE)?);
        db.run_migrations()?;

        let store: Arc<dyn StateStore> = Arc::new(SqliteStateStore::new(Arc::clone(&db)));

        let streak = Arc::new(ReadStreakService::new(Arc::clone(&store)));
        let bookmarks = Arc::new(BookmarkService::new(Arc::clone(&store)));
        let tasbih = Arc::new(TasbihService::new(Arc::clone(&store)));
        let preferences = Arc::new(PreferencesService::new(Arc::clone(&store)));

        info!(db_path = %db.path().display(), "application context initialised");

        Ok(Self { db, store, streak, bookmarks, tasbih, preferences })
    }
}
