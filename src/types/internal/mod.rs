// Internal domain types shared by stores, services and the API
pub mod bin;

pub use bin::{Bin, BinUpdate, Item, NewBin, SearchHit, SearchQuery};
