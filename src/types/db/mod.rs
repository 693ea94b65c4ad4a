// Database entities - SeaORM models
pub mod bin_index;
pub mod bin_record;
