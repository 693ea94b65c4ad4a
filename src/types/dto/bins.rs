use poem_openapi::Object;

use crate::types::internal::{Bin, Item, SearchHit};

/// An item inside a bin
#[derive(Object, Debug, Clone)]
pub struct ItemDto {
    /// Identifier, unique within the owning bin
    pub id: String,

    /// Name of the item
    pub name: String,

    /// Count on hand, at least 1. Must be a JSON integer; `2.0` is rejected
    pub quantity: i64,
}

/// A bin with its items
#[derive(Object, Debug, Clone)]
#[oai(rename_all = "camelCase")]
pub struct BinDto {
    pub id: String,
    pub name: String,
    pub description: String,
    pub items: Vec<ItemDto>,

    /// Creation time, milliseconds since the Unix epoch
    pub created_at: i64,

    /// Last modification time, milliseconds since the Unix epoch
    pub updated_at: i64,
}

/// Request model for creating a bin
#[derive(Object, Debug)]
pub struct CreateBinRequest {
    /// Name of the bin
    pub name: String,

    /// Optional description; absent or `null` means empty
    pub description: Option<String>,
}

/// Request model replacing a bin's name, description and items
#[derive(Object, Debug)]
pub struct UpdateBinRequest {
    pub name: String,

    /// Absent or `null` means empty
    pub description: Option<String>,

    /// Full replacement item list
    pub items: Vec<ItemDto>,
}

/// Listing payload
#[derive(Object, Debug)]
pub struct BinListDto {
    /// Bins, newest first
    pub items: Vec<BinDto>,
}

/// One search match
#[derive(Object, Debug, Clone)]
#[oai(rename_all = "camelCase")]
pub struct SearchResultDto {
    pub item_id: String,
    pub item_name: String,
    pub item_quantity: i64,
    pub bin_id: String,
    pub bin_name: String,
}

/// Deletion acknowledgement
#[derive(Object, Debug)]
pub struct DeletedBinDto {
    pub id: String,
    pub deleted: bool,
}

/// Link to a bin's detail view, suitable for a scannable code
#[derive(Object, Debug)]
#[oai(rename_all = "camelCase")]
pub struct BinLinkDto {
    pub bin_id: String,
    pub url: String,
}

/// Success envelope carrying a bin
#[derive(Object, Debug)]
pub struct BinEnvelope {
    pub success: bool,
    pub data: BinDto,
}

/// Success envelope carrying the bin listing
#[derive(Object, Debug)]
pub struct BinListEnvelope {
    pub success: bool,
    pub data: BinListDto,
}

/// Success envelope carrying search results
#[derive(Object, Debug)]
pub struct SearchEnvelope {
    pub success: bool,
    pub data: Vec<SearchResultDto>,
}

/// Success envelope carrying a deletion acknowledgement
#[derive(Object, Debug)]
pub struct DeletedBinEnvelope {
    pub success: bool,
    pub data: DeletedBinDto,
}

/// Success envelope carrying a bin link
#[derive(Object, Debug)]
pub struct BinLinkEnvelope {
    pub success: bool,
    pub data: BinLinkDto,
}

impl From<Item> for ItemDto {
    fn from(item: Item) -> Self {
        Self {
            id: item.id,
            name: item.name,
            quantity: item.quantity,
        }
    }
}

impl From<ItemDto> for Item {
    fn from(dto: ItemDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            quantity: dto.quantity,
        }
    }
}

impl From<Bin> for BinDto {
    fn from(bin: Bin) -> Self {
        Self {
            id: bin.id,
            name: bin.name,
            description: bin.description,
            items: bin.items.into_iter().map(ItemDto::from).collect(),
            created_at: bin.created_at,
            updated_at: bin.updated_at,
        }
    }
}

impl From<SearchHit> for SearchResultDto {
    fn from(hit: SearchHit) -> Self {
        Self {
            item_id: hit.item_id,
            item_name: hit.item_name,
            item_quantity: hit.item_quantity,
            bin_id: hit.bin_id,
            bin_name: hit.bin_name,
        }
    }
}

impl BinEnvelope {
    pub fn ok(bin: Bin) -> Self {
        Self {
            success: true,
            data: bin.into(),
        }
    }
}
