//! Shared application state.

use std::path::Path;

use storage::WellStore;
use well_common::WellResult;

/// State handed to every handler via `Extension`.
///
/// Built once at process start; the store is an explicit handle, not a
/// module-level singleton, so tests can construct their own.
pub struct AppState {
    pub store: WellStore,
}

impl AppState {
    pub async fn new(database: impl AsRef<Path>) -> WellResult<Self> {
        let store = WellStore::open(database).await?;
        Ok(Self { store })
    }
}
