//! Shared command plumbing: assemble the application context.

use std::sync::Arc;

use url::Url;

use calmgrove_core::{AppContext, Config, HttpRecordStore, KvStore, RecordStore, SqliteKv};

/// Build the dependency-injected app context: config from disk, identity
/// from config (guest when no user id is set), SQLite key-value store,
/// HTTP record store.
pub fn build_context() -> Result<AppContext, Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let identity = config.identity();
    let kv: Box<dyn KvStore> = Box::new(SqliteKv::open()?);
    let base_url = Url::parse(&config.api.base_url)?;
    let store: Arc<dyn RecordStore> = Arc::new(HttpRecordStore::new(base_url));
    Ok(AppContext::new(config, identity, kv, store))
}
