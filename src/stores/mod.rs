// Stores layer - persistence
pub mod bin_store;

pub use bin_store::BinStore;
