//! Transactional write unit for bulk imports
//!
//! All inserts of one import run share a single transaction. Dropping an
//! [`ImportBatch`] without calling [`ImportBatch::commit`] rolls every
//! insert back, so a failed run leaves the store untouched.

use crate::store::StoreError;
use sqlx::{Sqlite, Transaction};
use types::bank::Bank;
use types::branch::Branch;
use types::ids::{BankId, Ifsc};

pub struct ImportBatch {
    tx: Transaction<'static, Sqlite>,
    banks_inserted: u64,
    branches_inserted: u64,
}

impl ImportBatch {
    pub(crate) fn new(tx: Transaction<'static, Sqlite>) -> Self {
        Self {
            tx,
            banks_inserted: 0,
            branches_inserted: 0,
        }
    }

    pub async fn bank_exists(&mut self, id: BankId) -> Result<bool, StoreError> {
        let found = sqlx::query_scalar::<_, i64>("SELECT 1 FROM banks WHERE id = ?")
            .bind(id.get())
            .fetch_optional(&mut *self.tx)
            .await?;
        Ok(found.is_some())
    }

    pub async fn branch_exists(&mut self, ifsc: &Ifsc) -> Result<bool, StoreError> {
        let found = sqlx::query_scalar::<_, i64>("SELECT 1 FROM branches WHERE ifsc = ?")
            .bind(ifsc.as_str())
            .fetch_optional(&mut *self.tx)
            .await?;
        Ok(found.is_some())
    }

    /// Insert `bank` unless its id is already stored.
    ///
    /// Returns whether a row was written. A different bank id reusing an
    /// existing name fails with [`StoreError::Conflict`].
    pub async fn insert_bank_if_absent(&mut self, bank: &Bank) -> Result<bool, StoreError> {
        if self.bank_exists(bank.id).await? {
            return Ok(false);
        }
        sqlx::query("INSERT INTO banks (id, name) VALUES (?, ?)")
            .bind(bank.id.get())
            .bind(&bank.name)
            .execute(&mut *self.tx)
            .await?;
        self.banks_inserted += 1;
        Ok(true)
    }

    /// Insert `branch` unless its IFSC is already stored.
    ///
    /// The owning bank must exist, inside this batch or before it.
    pub async fn insert_branch_if_absent(&mut self, branch: &Branch) -> Result<bool, StoreError> {
        if self.branch_exists(&branch.ifsc).await? {
            return Ok(false);
        }
        sqlx::query(
            "INSERT INTO branches (ifsc, bank_id, branch, address, city, district, state) \
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(branch.ifsc.as_str())
        .bind(branch.bank_id.get())
        .bind(&branch.branch)
        .bind(&branch.address)
        .bind(&branch.city)
        .bind(&branch.district)
        .bind(&branch.state)
        .execute(&mut *self.tx)
        .await?;
        self.branches_inserted += 1;
        Ok(true)
    }

    pub fn banks_inserted(&self) -> u64 {
        self.banks_inserted
    }

    pub fn branches_inserted(&self) -> u64 {
        self.branches_inserted
    }

    pub async fn commit(self) -> Result<(), StoreError> {
        self.tx.commit().await?;
        Ok(())
    }

    pub async fn rollback(self) -> Result<(), StoreError> {
        self.tx.rollback().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::sqlite::{SqliteStore, StoreCounts};
    use crate::store::BranchStore;
    use types::bank::Bank;
    use types::branch::Branch;
    use types::ids::{BankId, Ifsc};

    fn branch(ifsc: &str, bank_id: i64) -> Branch {
        Branch {
            ifsc: Ifsc::new(ifsc),
            bank_id: BankId::new(bank_id),
            branch: "MUMBAI".to_string(),
            address: "FORT".to_string(),
            city: "MUMBAI".to_string(),
            district: "MUMBAI".to_string(),
            state: "MAHARASHTRA".to_string(),
        }
    }

    #[tokio::test]
    async fn test_insert_if_absent_reports_first_write_only() {
        let store = SqliteStore::in_memory().await.unwrap();
        let mut batch = store.begin_import().await.unwrap();

        let bank = Bank::new(1, "STATE BANK OF INDIA");
        let row = branch("SBIN0000001", 1);
        assert!(batch.insert_bank_if_absent(&bank).await.unwrap());
        assert!(!batch.insert_bank_if_absent(&bank).await.unwrap());
        assert!(batch.insert_branch_if_absent(&row).await.unwrap());
        assert!(!batch.insert_branch_if_absent(&row).await.unwrap());
        assert_eq!(batch.banks_inserted(), 1);
        assert_eq!(batch.branches_inserted(), 1);

        batch.commit().await.unwrap();
        assert_eq!(store.counts().await.unwrap(), StoreCounts { banks: 1, branches: 1 });
    }

    #[tokio::test]
    async fn test_first_insert_wins() {
        let store = SqliteStore::in_memory().await.unwrap();
        let mut batch = store.begin_import().await.unwrap();
        batch.insert_bank_if_absent(&Bank::new(1, "STATE BANK OF INDIA")).await.unwrap();
        batch.insert_branch_if_absent(&branch("SBIN0000001", 1)).await.unwrap();
        let mut second = branch("SBIN0000001", 1);
        second.city = "PUNE".to_string();
        assert!(!batch.insert_branch_if_absent(&second).await.unwrap());
        batch.commit().await.unwrap();

        let record = store.get_branch(&Ifsc::new("SBIN0000001")).await.unwrap().unwrap();
        assert_eq!(record.city, "MUMBAI");
    }

    #[tokio::test]
    async fn test_dropped_batch_rolls_back() {
        let store = SqliteStore::in_memory().await.unwrap();
        {
            let mut batch = store.begin_import().await.unwrap();
            batch.insert_bank_if_absent(&Bank::new(1, "STATE BANK OF INDIA")).await.unwrap();
        }
        assert_eq!(store.counts().await.unwrap(), StoreCounts::default());
    }

    #[tokio::test]
    async fn test_explicit_rollback() {
        let store = SqliteStore::in_memory().await.unwrap();
        let mut batch = store.begin_import().await.unwrap();
        batch.insert_bank_if_absent(&Bank::new(1, "STATE BANK OF INDIA")).await.unwrap();
        batch.rollback().await.unwrap();
        assert_eq!(store.counts().await.unwrap().banks, 0);
    }

    #[tokio::test]
    async fn test_duplicate_bank_name_conflicts() {
        let store = SqliteStore::in_memory().await.unwrap();
        let mut batch = store.begin_import().await.unwrap();
        batch.insert_bank_if_absent(&Bank::new(1, "STATE BANK OF INDIA")).await.unwrap();
        let err = batch
            .insert_bank_if_absent(&Bank::new(2, "STATE BANK OF INDIA"))
            .await
            .unwrap_err();
        assert!(err.is_conflict(), "unexpected error: {err}");
    }

    #[tokio::test]
    async fn test_branch_without_bank_conflicts() {
        let store = SqliteStore::in_memory().await.unwrap();
        let mut batch = store.begin_import().await.unwrap();
        let err = batch
            .insert_branch_if_absent(&branch("SBIN0000001", 42))
            .await
            .unwrap_err();
        assert!(err.is_conflict(), "unexpected error: {err}");
    }
}
