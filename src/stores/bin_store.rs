use std::collections::HashMap;

use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};

use crate::errors::{BinError, InternalError};
use crate::types::db::bin_index::{self, Entity as BinIndex};
use crate::types::db::bin_record::{self, Entity as BinRecord};
use crate::types::internal::Bin;

/// BinStore persists bin records and the index used to enumerate them
///
/// Records live in `bins`, keyed by bin id. `bin_index` holds every id in
/// insertion order; `list` walks it rather than scanning `bins`.
pub struct BinStore {
    db: DatabaseConnection,
}

impl BinStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Insert a new bin and append its id to the index
    ///
    /// # Returns
    /// * `Ok(Bin)` - The stored bin
    /// * `Err(InternalError)` - `BinError::Conflict` if the id is taken, or a database error
    pub async fn create(&self, bin: Bin) -> Result<Bin, InternalError> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| InternalError::transaction("begin_create_bin", e))?;

        let existing = BinRecord::find_by_id(bin.id.clone())
            .count(&txn)
            .await
            .map_err(|e| InternalError::database("check_bin_exists", e))?;

        if existing > 0 {
            return Err(BinError::Conflict(bin.id).into());
        }

        let record = bin_record::ActiveModel::try_from(&bin)?;
        record
            .insert(&txn)
            .await
            .map_err(|e| InternalError::database("insert_bin", e))?;

        let entry = bin_index::ActiveModel {
            position: NotSet,
            bin_id: Set(bin.id.clone()),
        };
        entry
            .insert(&txn)
            .await
            .map_err(|e| InternalError::database("insert_bin_index", e))?;

        txn.commit()
            .await
            .map_err(|e| InternalError::transaction("commit_create_bin", e))?;

        tracing::debug!("Created bin {}", bin.id);

        Ok(bin)
    }

    /// Fetch a bin by id
    ///
    /// # Returns
    /// * `Ok(Bin)` - The stored bin
    /// * `Err(InternalError)` - `BinError::NotFound` if absent, or a database/parse error
    pub async fn get(&self, id: &str) -> Result<Bin, InternalError> {
        let model = BinRecord::find_by_id(id.to_string())
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("get_bin", e))?
            .ok_or_else(|| BinError::NotFound(id.to_string()))?;

        Bin::try_from(model)
    }

    /// Check whether a bin exists without decoding it
    pub async fn exists(&self, id: &str) -> Result<bool, InternalError> {
        let count = BinRecord::find_by_id(id.to_string())
            .count(&self.db)
            .await
            .map_err(|e| InternalError::database("bin_exists", e))?;

        Ok(count > 0)
    }

    /// Read-modify-write a bin
    ///
    /// Applies `update` to the current state and persists the result. The id
    /// and creation time are pinned to the stored values. There is no
    /// revision check: two concurrent mutations both succeed and the later
    /// write wins.
    ///
    /// # Returns
    /// * `Ok(Bin)` - The persisted new state
    /// * `Err(InternalError)` - `BinError::NotFound` if absent, or a database/parse error
    pub async fn mutate<F>(&self, id: &str, update: F) -> Result<Bin, InternalError>
    where
        F: FnOnce(Bin) -> Bin,
    {
        let current = self.get(id).await?;
        let id = current.id.clone();
        let created_at = current.created_at;

        let mut next = update(current);
        next.id = id;
        next.created_at = created_at;

        let record = bin_record::ActiveModel::try_from(&next)?;
        record
            .update(&self.db)
            .await
            .map_err(|e| update_error(&next.id, e))?;

        Ok(next)
    }

    /// Remove a bin and its index entry
    ///
    /// # Returns
    /// * `Ok(true)` - A record existed and was removed
    /// * `Ok(false)` - No record existed
    /// * `Err(InternalError)` - Database error
    pub async fn delete(&self, id: &str) -> Result<bool, InternalError> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| InternalError::transaction("begin_delete_bin", e))?;

        let result = BinRecord::delete_by_id(id.to_string())
            .exec(&txn)
            .await
            .map_err(|e| InternalError::database("delete_bin", e))?;

        BinIndex::delete_many()
            .filter(bin_index::Column::BinId.eq(id))
            .exec(&txn)
            .await
            .map_err(|e| InternalError::database("delete_bin_index", e))?;

        txn.commit()
            .await
            .map_err(|e| InternalError::transaction("commit_delete_bin", e))?;

        Ok(result.rows_affected > 0)
    }

    /// All bins reachable through the index, in insertion order
    ///
    /// Index entries without a record are skipped.
    pub async fn list(&self) -> Result<Vec<Bin>, InternalError> {
        let ids: Vec<String> = BinIndex::find()
            .order_by_asc(bin_index::Column::Position)
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("list_bin_index", e))?
            .into_iter()
            .map(|entry| entry.bin_id)
            .collect();

        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut records: HashMap<String, bin_record::Model> = BinRecord::find()
            .filter(bin_record::Column::Id.is_in(ids.clone()))
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("list_bins", e))?
            .into_iter()
            .map(|model| (model.id.clone(), model))
            .collect();

        ids.iter()
            .filter_map(|id| records.remove(id))
            .map(Bin::try_from)
            .collect()
    }
}

/// A row deleted between the read and the write of `mutate` is a missing bin
fn update_error(id: &str, err: DbErr) -> InternalError {
    match err {
        DbErr::RecordNotUpdated => BinError::NotFound(id.to_string()).into(),
        other => InternalError::database("update_bin", other),
    }
}

impl std::fmt::Debug for BinStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BinStore")
            .field("db", &"<connection>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_not_updated_maps_to_not_found() {
        let err = update_error("b-1", DbErr::RecordNotUpdated);

        match err {
            InternalError::Bin(BinError::NotFound(id)) => assert_eq!(id, "b-1"),
            other => panic!("Expected NotFound, got: {:?}", other),
        }
    }

    #[test]
    fn test_other_update_failures_stay_database_errors() {
        let err = update_error("b-1", DbErr::Custom("disk full".to_string()));

        assert!(matches!(err, InternalError::Database { ref operation, .. } if operation == "update_bin"));
    }
}
