//! In-memory implementation of [`LoanApplicationRepository`].
//!
//! Used for tests and for running the service without a database. Ids come
//! from a counter that only moves forward, so deleted ids are never handed
//! out again. Decimal columns behave like `NUMERIC(19, 2)`: values are rounded
//! to two places and anything with more than 17 integer digits is rejected.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::domain::{LoanApplication, LoanApplicationRepository};
use crate::shared::error::StorageError;

const COLUMN_PRECISION: u32 = 19;
const COLUMN_SCALE: u32 = 2;

#[derive(Debug, Default)]
struct Table {
    rows: BTreeMap<i64, LoanApplication>,
    last_id: i64,
}

/// Loan applications kept in a process-local map.
#[derive(Debug, Clone, Default)]
pub struct InMemoryLoanApplicationRepository {
    table: Arc<RwLock<Table>>,
}

impl InMemoryLoanApplicationRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored rows.
    pub fn len(&self) -> usize {
        self.table.read().rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn to_column(column: &'static str, value: Decimal) -> Result<Decimal, StorageError> {
    let mut stored =
        value.round_dp_with_strategy(COLUMN_SCALE, RoundingStrategy::MidpointAwayFromZero);
    let limit = Decimal::from(10i64.pow(COLUMN_PRECISION - COLUMN_SCALE));
    if stored.abs() >= limit {
        return Err(StorageError::NumericOverflow(column));
    }
    stored.rescale(COLUMN_SCALE);
    Ok(stored)
}

#[async_trait]
impl LoanApplicationRepository for InMemoryLoanApplicationRepository {
    async fn save(&self, mut application: LoanApplication) -> Result<LoanApplication, StorageError> {
        application.loan_amount = to_column("loan_amount", application.loan_amount)?;
        application.income = application
            .income
            .map(|income| to_column("income", income))
            .transpose()?;

        let mut table = self.table.write();
        let id = match application.id {
            Some(id) if table.rows.contains_key(&id) => id,
            Some(id) => return Err(StorageError::MissingRow(id)),
            None => {
                table.last_id += 1;
                table.last_id
            }
        };
        application.id = Some(id);
        table.rows.insert(id, application.clone());

        Ok(application)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<LoanApplication>, StorageError> {
        Ok(self.table.read().rows.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<LoanApplication>, StorageError> {
        Ok(self.table.read().rows.values().cloned().collect())
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), StorageError> {
        self.table.write().rows.remove(&id);
        Ok(())
    }

    async fn ping(&self) -> Result<(), StorageError> {
        Ok(())
    }
}
