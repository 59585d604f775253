//! Option record storage
//!
//! Handlers only see [`OptionRepository`]; the server ships an in-memory
//! implementation keyed by id.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::NaiveDateTime;
use pricer_models::instruments::commodity::{
    Commodity, ContractError, NewOptionContract, OptionContract, OptionId,
};

/// Storage for option records
pub trait OptionRepository: Send + Sync {
    /// Records ordered by id, skipping `skip` and returning at most `limit`
    fn list(&self, skip: usize, limit: usize) -> Vec<OptionContract>;

    /// Record with the given id
    fn get(&self, id: OptionId) -> Option<OptionContract>;

    /// Records of one commodity, in id order
    fn find_by_commodity(&self, commodity: Commodity) -> Vec<OptionContract>;

    /// Validates `request` against `now` and stores it under a fresh id
    ///
    /// # Errors
    /// Returns the [`ContractError`] of the rejected request; no id is
    /// consumed in that case.
    fn insert(
        &self,
        request: NewOptionContract,
        now: NaiveDateTime,
    ) -> Result<OptionContract, ContractError>;

    /// Deletes a record, returning whether it existed
    fn remove(&self, id: OptionId) -> bool;

    /// Number of stored records
    fn len(&self) -> usize;

    /// Whether the store holds no records
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Bulk initialisation
    ///
    /// Rejected records are logged and skipped. Returns the number stored.
    fn seed(&self, records: Vec<NewOptionContract>, now: NaiveDateTime) -> usize {
        let mut stored = 0;
        for request in records {
            let label = format!("{} {}", request.commodity, request.contract_month);
            match self.insert(request, now) {
                Ok(contract) => {
                    tracing::debug!(id = %contract.id(), record = %label, "Seeded option");
                    stored += 1;
                }
                Err(err) => {
                    tracing::warn!(record = %label, error = %err, "Skipping seed record");
                }
            }
        }
        stored
    }
}

/// In-memory store with an id sequence starting at 1
#[derive(Debug)]
pub struct InMemoryOptionRepository {
    records: RwLock<BTreeMap<u64, OptionContract>>,
    next_id: AtomicU64,
}

impl Default for InMemoryOptionRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryOptionRepository {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            records: RwLock::new(BTreeMap::new()),
            next_id: AtomicU64::new(1),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, BTreeMap<u64, OptionContract>> {
        self.records.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, BTreeMap<u64, OptionContract>> {
        self.records.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl OptionRepository for InMemoryOptionRepository {
    fn list(&self, skip: usize, limit: usize) -> Vec<OptionContract> {
        self.read().values().skip(skip).take(limit).cloned().collect()
    }

    fn get(&self, id: OptionId) -> Option<OptionContract> {
        self.read().get(&id.get()).cloned()
    }

    fn find_by_commodity(&self, commodity: Commodity) -> Vec<OptionContract> {
        self.read()
            .values()
            .filter(|c| c.commodity() == commodity)
            .cloned()
            .collect()
    }

    fn insert(
        &self,
        request: NewOptionContract,
        now: NaiveDateTime,
    ) -> Result<OptionContract, ContractError> {
        // Hold the write lock so a rejected request leaves the sequence untouched
        let mut records = self.write();
        let id = self.next_id.load(Ordering::Acquire);
        let contract = OptionContract::create(OptionId::new(id), request, now)?;
        self.next_id.store(id + 1, Ordering::Release);
        records.insert(id, contract.clone());
        Ok(contract)
    }

    fn remove(&self, id: OptionId) -> bool {
        self.write().remove(&id.get()).is_some()
    }

    fn len(&self) -> usize {
        self.read().len()
    }
}

/// Demonstration book loaded at start-up outside production
pub fn demo_records() -> Vec<NewOptionContract> {
    vec![
        NewOptionContract::new("BRN", "Jan24", 100.0, "Call").with_unit("USD/BBL"),
        NewOptionContract::new("HH", "Mar24", 10.0, "Put").with_unit("USD/MMBTu"),
        NewOptionContract::new("BRN", "Apr24", 100.0, "Call").with_unit("USD/BBL"),
        NewOptionContract::new("HH", "May24", 10.0, "Put").with_unit("USD/MMBTu"),
    ]
}
