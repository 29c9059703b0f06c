pub mod api;
pub mod edit;
pub mod lookup;
pub mod pages;

use std::sync::Arc;

use crate::data::models::{DictionaryError, Result};
use crate::features::dictionary::Dictionary;

/// Runs a dictionary mutation on the blocking pool; flushes fsync and rename.
pub(crate) async fn run_blocking<T, F>(dictionary: &Arc<Dictionary>, f: F) -> Result<T>
where
    F: FnOnce(&Dictionary) -> Result<T> + Send + 'static,
    T: Send + 'static,
{
    let dictionary = Arc::clone(dictionary);
    tokio::task::spawn_blocking(move || f(&dictionary))
        .await
        .map_err(|e| DictionaryError::Persistence(format!("Dictionary task failed: {}", e)))?
}
