use poem_openapi::{param::Path, param::Query, payload::Json, OpenApi, Tags};
use std::sync::Arc;

use crate::app_data::AppData;
use crate::errors::ApiError;
use crate::services::{BinService, BinValidator};
use crate::types::dto::bins::{
    BinEnvelope, BinLinkDto, BinLinkEnvelope, BinListDto, BinListEnvelope, CreateBinRequest,
    DeletedBinDto, DeletedBinEnvelope, SearchEnvelope, SearchResultDto, UpdateBinRequest,
};
use crate::types::internal::Item;

/// Bin management endpoints
pub struct BinsApi {
    bin_service: Arc<BinService>,
    bin_validator: Arc<BinValidator>,
}

impl BinsApi {
    pub fn new(app_data: &AppData) -> Self {
        Self {
            bin_service: app_data.bin_service.clone(),
            bin_validator: app_data.bin_validator.clone(),
        }
    }
}

/// API tags for bin endpoints
#[derive(Tags)]
enum BinTags {
    /// Bin and item management
    Bins,
}

#[OpenApi]
impl BinsApi {
    /// List all bins, newest first
    #[oai(path = "/bins", method = "get", tag = "BinTags::Bins")]
    async fn list_bins(&self) -> Result<Json<BinListEnvelope>, ApiError> {
        let bins = self.bin_service.list_bins().await?;

        Ok(Json(BinListEnvelope {
            success: true,
            data: BinListDto {
                items: bins.into_iter().map(Into::into).collect(),
            },
        }))
    }

    /// Search item names across all bins
    ///
    /// Case-insensitive substring match; `q` must be at least 2 characters after trimming.
    #[oai(path = "/bins/search", method = "get", tag = "BinTags::Bins")]
    async fn search_bins(&self, q: Query<Option<String>>) -> Result<Json<SearchEnvelope>, ApiError> {
        let query = self.bin_validator.validate_search(q.0.as_deref())?;
        let hits = self.bin_service.search_items(&query).await?;

        Ok(Json(SearchEnvelope {
            success: true,
            data: hits.into_iter().map(SearchResultDto::from).collect(),
        }))
    }

    /// Create an empty bin
    #[oai(path = "/bins", method = "post", tag = "BinTags::Bins")]
    async fn create_bin(&self, body: Json<CreateBinRequest>) -> Result<Json<BinEnvelope>, ApiError> {
        let body = body.0;
        let new_bin = self.bin_validator.validate_new_bin(body.name, body.description)?;
        let bin = self.bin_service.create_bin(new_bin).await?;

        Ok(Json(BinEnvelope::ok(bin)))
    }

    /// Get a bin with its items
    #[oai(path = "/bins/:id", method = "get", tag = "BinTags::Bins")]
    async fn get_bin(&self, id: Path<String>) -> Result<Json<BinEnvelope>, ApiError> {
        let bin = self.bin_service.get_bin(&id.0).await?;

        Ok(Json(BinEnvelope::ok(bin)))
    }

    /// Replace a bin's name, description and items
    #[oai(path = "/bins/:id", method = "put", tag = "BinTags::Bins")]
    async fn update_bin(
        &self,
        id: Path<String>,
        body: Json<UpdateBinRequest>,
    ) -> Result<Json<BinEnvelope>, ApiError> {
        let body = body.0;
        let items = body.items.into_iter().map(Item::from).collect();
        let update = self
            .bin_validator
            .validate_update(body.name, body.description, items)?;

        let bin = self.bin_service.update_bin(&id.0, update).await?;

        Ok(Json(BinEnvelope::ok(bin)))
    }

    /// Delete a bin
    #[oai(path = "/bins/:id", method = "delete", tag = "BinTags::Bins")]
    async fn delete_bin(&self, id: Path<String>) -> Result<Json<DeletedBinEnvelope>, ApiError> {
        if !self.bin_service.delete_bin(&id.0).await? {
            return Err(ApiError::not_found("Bin not found or already deleted"));
        }

        Ok(Json(DeletedBinEnvelope {
            success: true,
            data: DeletedBinDto {
                id: id.0,
                deleted: true,
            },
        }))
    }

    /// Link to the bin's detail view, for rendering as a scannable code
    #[oai(path = "/bins/:id/link", method = "get", tag = "BinTags::Bins")]
    async fn bin_link(&self, id: Path<String>) -> Result<Json<BinLinkEnvelope>, ApiError> {
        let url = self.bin_service.bin_link(&id.0).await?;

        Ok(Json(BinLinkEnvelope {
            success: true,
            data: BinLinkDto { bin_id: id.0, url },
        }))
    }
}
