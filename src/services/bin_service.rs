use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::errors::{BinError, InternalError};
use crate::services::bin_search::search_bins;
use crate::stores::BinStore;
use crate::types::internal::{Bin, BinUpdate, NewBin, SearchHit, SearchQuery};

/// Bin operations behind the API: id and timestamp assignment, read-time
/// ordering, search and link building
///
/// Inputs arrive already validated.
pub struct BinService {
    bin_store: Arc<BinStore>,
    public_base_url: String,
}

impl BinService {
    /// # Arguments
    /// * `bin_store` - Record store for bins
    /// * `public_base_url` - Origin of the front end, without trailing slash
    pub fn new(bin_store: Arc<BinStore>, public_base_url: impl Into<String>) -> Self {
        Self {
            bin_store,
            public_base_url: public_base_url.into(),
        }
    }

    /// All bins, newest first
    ///
    /// Bins sharing a creation millisecond keep reverse index order, so the
    /// later insert still comes first.
    pub async fn list_bins(&self) -> Result<Vec<Bin>, InternalError> {
        let mut bins = self.bin_store.list().await?;
        bins.reverse();
        bins.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(bins)
    }

    /// Every item whose name contains the query, across all bins
    ///
    /// Hits follow index order, then item order within each bin.
    pub async fn search_items(&self, query: &SearchQuery) -> Result<Vec<SearchHit>, InternalError> {
        let bins = self.bin_store.list().await?;
        let hits = search_bins(&bins, query);

        tracing::debug!("Search {:?} matched {} items in {} bins", query.as_str(), hits.len(), bins.len());

        Ok(hits)
    }

    /// Create a bin with a fresh UUID and no items
    pub async fn create_bin(&self, new_bin: NewBin) -> Result<Bin, InternalError> {
        let now = Utc::now().timestamp_millis();
        let bin = Bin::new(Uuid::new_v4().to_string(), new_bin.name, new_bin.description, now);

        let created = self.bin_store.create(bin).await?;
        tracing::info!("Bin created: {} ({})", created.id, created.name);

        Ok(created)
    }

    pub async fn get_bin(&self, id: &str) -> Result<Bin, InternalError> {
        self.bin_store.get(id).await
    }

    /// Replace name, description and the whole item list
    pub async fn update_bin(&self, id: &str, update: BinUpdate) -> Result<Bin, InternalError> {
        if !self.bin_store.exists(id).await? {
            return Err(BinError::NotFound(id.to_string()).into());
        }

        let updated = self
            .bin_store
            .mutate(id, |current| Bin {
                name: update.name,
                description: update.description,
                items: update.items,
                updated_at: Utc::now().timestamp_millis(),
                ..current
            })
            .await?;

        tracing::info!("Bin updated: {} ({} items)", updated.id, updated.items.len());

        Ok(updated)
    }

    /// # Returns
    /// * `Ok(true)` - The bin existed and was removed
    /// * `Ok(false)` - No such bin
    pub async fn delete_bin(&self, id: &str) -> Result<bool, InternalError> {
        let deleted = self.bin_store.delete(id).await?;
        if deleted {
            tracing::info!("Bin deleted: {}", id);
        }
        Ok(deleted)
    }

    /// URL of the bin's detail view in the front end
    pub async fn bin_link(&self, id: &str) -> Result<String, InternalError> {
        if !self.bin_store.exists(id).await? {
            return Err(BinError::NotFound(id.to_string()).into());
        }

        Ok(format!("{}/bins/{}", self.public_base_url, id))
    }
}
