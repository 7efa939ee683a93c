//! In-memory repository implementation.
//!
//! Backs tests and local development without a PostgreSQL instance. It
//! honors the full repository contract, including ownership opacity and
//! list ordering.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use super::errors::{RangeError, RangeResult};
use super::models::{
    RangeSet, RangeSetFilter, RangeSetId, RangeSetInput, RangeSetUpdate, UserId,
};
use super::repository::RangeSetRepository;

/// HashMap-backed implementation of `RangeSetRepository`
pub struct MemoryRangeSetRepository {
    sets: Arc<Mutex<HashMap<RangeSetId, RangeSet>>>,
    next_id: Arc<Mutex<RangeSetId>>,
}

impl Default for MemoryRangeSetRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryRangeSetRepository {
    pub fn new() -> Self {
        Self {
            sets: Arc::new(Mutex::new(HashMap::new())),
            next_id: Arc::new(Mutex::new(1)),
        }
    }

    /// Preload a set, e.g. to stage another user's data in a test.
    pub fn with_set(self, set: RangeSet) -> Self {
        self.sets.lock().unwrap().insert(set.id, set);
        self
    }
}

#[async_trait]
impl RangeSetRepository for MemoryRangeSetRepository {
    async fn create(&self, user_id: UserId, input: RangeSetInput) -> RangeResult<RangeSet> {
        input.validate()?;

        let id = {
            let mut next_id = self.next_id.lock().unwrap();
            let id = *next_id;
            *next_id += 1;
            id
        };

        let now = Utc::now();
        let set = RangeSet {
            id,
            user_id,
            name: input.name.trim().to_string(),
            table_type: input.table_type,
            category: input.category.trim().to_string(),
            starting_stack: input.starting_stack,
            bounty: input.bounty,
            range_data: input.range_data,
            created_at: now,
            updated_at: now,
        };

        self.sets.lock().unwrap().insert(id, set.clone());
        Ok(set)
    }

    async fn update(
        &self,
        id: RangeSetId,
        user_id: UserId,
        update: RangeSetUpdate,
    ) -> RangeResult<RangeSet> {
        update.validate()?;

        let mut sets = self.sets.lock().unwrap();
        let set = sets
            .get_mut(&id)
            .filter(|set| set.user_id == user_id)
            .ok_or(RangeError::NotFound)?;

        let normalized_name = update.normalized_name().map(str::to_string);
        set.range_data = update.range_data;
        if let Some(name) = normalized_name {
            set.name = name;
        }
        set.updated_at = Utc::now();
        Ok(set.clone())
    }

    async fn delete(&self, id: RangeSetId, user_id: UserId) -> RangeResult<bool> {
        let mut sets = self.sets.lock().unwrap();
        match sets.get(&id) {
            Some(set) if set.user_id == user_id => {
                sets.remove(&id);
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn get(&self, id: RangeSetId, user_id: UserId) -> RangeResult<RangeSet> {
        let sets = self.sets.lock().unwrap();
        sets.get(&id)
            .filter(|set| set.user_id == user_id)
            .cloned()
            .ok_or(RangeError::NotFound)
    }

    async fn list(&self, user_id: UserId, filter: RangeSetFilter) -> RangeResult<Vec<RangeSet>> {
        let sets = self.sets.lock().unwrap();
        let mut results: Vec<RangeSet> = sets
            .values()
            .filter(|set| set.user_id == user_id && filter.matches(set))
            .cloned()
            .collect();
        results.sort_by(|a, b| {
            b.updated_at
                .cmp(&a.updated_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        Ok(results)
    }
}
